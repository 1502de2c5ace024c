pub mod picker;

pub use picker::RoomPicker;
