pub mod precheck;
pub mod request;

pub use precheck::PrecheckState;
pub use request::{build_candidates, CandidateBooking};

use crate::usecases::common::UseCaseMetadata;

pub struct CheckConflicts;

impl UseCaseMetadata for CheckConflicts {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "check_conflicts"
    }

    fn display_name() -> &'static str {
        "Advisory conflict pre-check"
    }

    fn description() -> &'static str {
        "Debounced availability lookup for the draft being edited, before it enters the cart"
    }
}
