pub mod common;

pub mod u501_submit_booking_cart;
pub mod u502_check_conflicts;
