pub mod booking_date_picker;
pub mod confirm_dialog;
pub mod pagination_controls;
pub mod time_range_input;

pub use booking_date_picker::{BookingDatePicker, DatePickMode};
pub use confirm_dialog::ConfirmDialog;
pub use pagination_controls::PaginationControls;
pub use time_range_input::TimeRangeInput;
