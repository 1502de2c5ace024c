pub mod admin_review;
pub mod edit_dialog;
pub mod my_bookings;

pub use edit_dialog::{EditAction, EditBookingDialog};
