pub mod aggregate;
pub mod conflict;
pub mod group_detail;
pub mod status;

pub use aggregate::RoomBookingView;
pub use conflict::BookingConflict;
pub use group_detail::BookingGroupDetail;
pub use status::{BookingStatus, GroupStatus};
