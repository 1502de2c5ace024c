pub mod cart;
pub mod request;
pub mod response;

pub use cart::{
    BookingCart, BookingGroup, CartEntryStatus, CartError, DateSelection, GroupForm,
    PartialSuccessPolicy, SubmitOutcome,
};
pub use request::{BulkSubmitRequest, GroupPayload};
pub use response::{BulkSubmitResponse, GroupResult};

use crate::usecases::common::UseCaseMetadata;

pub struct SubmitBookingCart;

impl UseCaseMetadata for SubmitBookingCart {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "submit_booking_cart"
    }

    fn display_name() -> &'static str {
        "Submit booking cart"
    }

    fn description() -> &'static str {
        "Bulk submission of draft booking groups with per-group conflict reconciliation"
    }
}
