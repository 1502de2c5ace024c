//! Create-bookings page: draft form with advisory conflict pre-check on
//! the left, the cart of draft groups and bulk submission on the right.

pub mod api;
pub mod view;
pub mod view_model;

pub use view::CreateBookingsPage;
pub use view_model::CartPageViewModel;
