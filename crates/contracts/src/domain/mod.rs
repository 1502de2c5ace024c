pub mod common;

pub mod a001_room;
pub mod a002_customer;
pub mod a003_room_booking;
