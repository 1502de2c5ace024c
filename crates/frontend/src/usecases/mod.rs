pub mod u501_submit_booking_cart;
