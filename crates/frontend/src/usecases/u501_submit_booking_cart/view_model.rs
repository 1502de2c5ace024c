use chrono::NaiveDate;
use contracts::domain::a001_room::Room;
use contracts::usecases::u501_submit_booking_cart::{
    BookingCart, CartError, DateSelection, GroupForm, SubmitBookingCart, SubmitOutcome,
};
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_check_conflicts::{build_candidates, CheckConflicts, PrecheckState};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

use super::api;
use crate::domain::a001_room::api::fetch_rooms;
use crate::shared::components::DatePickMode;

/// Quiet interval between the last draft edit and the pre-check request.
const PRECHECK_DEBOUNCE_MS: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Error,
}

/// Page-level notification rendered as an inline message bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

impl Notice {
    fn success(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            text: text.into(),
        }
    }

    fn warning(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            text: text.into(),
        }
    }

    fn error(text: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            text: text.into(),
        }
    }
}

/// ViewModel for the create-bookings page.
///
/// Owns the cart, the draft form state and the advisory pre-check. The
/// cart itself is pure (`contracts`); this layer wires it to signals,
/// the debounce timer and the network.
#[derive(Clone, Copy)]
pub struct CartPageViewModel {
    pub cart: RwSignal<BookingCart>,

    pub rooms: RwSignal<Vec<Room>>,
    pub rooms_error: RwSignal<Option<String>>,

    // Draft form state
    pub pick_mode: RwSignal<DatePickMode>,
    pub date_from: RwSignal<String>,
    pub date_to: RwSignal<String>,
    pub picked_dates: RwSignal<Vec<NaiveDate>>,
    pub start_time: RwSignal<String>,
    pub end_time: RwSignal<String>,
    pub selected_rooms: RwSignal<Vec<i32>>,
    pub description: RwSignal<String>,

    // Advisory pre-check
    pub precheck: RwSignal<PrecheckState>,
    pub checking: RwSignal<bool>,

    // Bulk submission
    pub submitting: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,

    customer_id: i32,
}

impl CartPageViewModel {
    pub fn new(customer_id: i32) -> Self {
        Self {
            cart: RwSignal::new(BookingCart::default()),
            rooms: RwSignal::new(Vec::new()),
            rooms_error: RwSignal::new(None),
            pick_mode: RwSignal::new(DatePickMode::SingleRange),
            date_from: RwSignal::new(String::new()),
            date_to: RwSignal::new(String::new()),
            picked_dates: RwSignal::new(Vec::new()),
            start_time: RwSignal::new(String::new()),
            end_time: RwSignal::new(String::new()),
            selected_rooms: RwSignal::new(Vec::new()),
            description: RwSignal::new(String::new()),
            precheck: RwSignal::new(PrecheckState::new()),
            checking: RwSignal::new(false),
            submitting: RwSignal::new(false),
            notice: RwSignal::new(None),
            customer_id,
        }
    }

    pub fn load_rooms(&self) {
        let rooms = self.rooms;
        let rooms_error = self.rooms_error;
        spawn_local(async move {
            match fetch_rooms().await {
                Ok(list) => {
                    rooms.set(list);
                    rooms_error.set(None);
                }
                Err(e) => rooms_error.set(Some(e)),
            }
        });
    }

    /// Snapshot the draft form from the current input signals.
    pub fn draft_form(&self) -> GroupForm {
        let dates = match self.pick_mode.get_untracked() {
            DatePickMode::SingleRange => {
                let from = self.date_from.get_untracked();
                let to = self.date_to.get_untracked();
                match (
                    NaiveDate::parse_from_str(&from, "%Y-%m-%d"),
                    NaiveDate::parse_from_str(&to, "%Y-%m-%d"),
                ) {
                    (Ok(start), Ok(end)) => Some(DateSelection::Range { start, end }),
                    _ => None,
                }
            }
            DatePickMode::MultiDate => {
                let picked = self.picked_dates.get_untracked();
                if picked.is_empty() {
                    None
                } else {
                    Some(DateSelection::Dates(picked))
                }
            }
        };

        GroupForm {
            dates,
            start_time: self.start_time.get_untracked(),
            end_time: self.end_time.get_untracked(),
            room_ids: self.selected_rooms.get_untracked(),
            description: self.description.get_untracked(),
        }
    }

    // ------------------------------------------------------------------
    // Draft edits. Every edit that affects availability restarts the
    // debounced pre-check.
    // ------------------------------------------------------------------

    pub fn set_mode(&self, mode: DatePickMode) {
        self.pick_mode.set(mode);
        self.schedule_precheck();
    }

    pub fn set_range(&self, from: String, to: String) {
        self.date_from.set(from);
        self.date_to.set(to);
        self.schedule_precheck();
    }

    pub fn set_dates(&self, dates: Vec<NaiveDate>) {
        self.picked_dates.set(dates);
        self.schedule_precheck();
    }

    pub fn set_times(&self, start: String, end: String) {
        self.start_time.set(start);
        self.end_time.set(end);
        self.schedule_precheck();
    }

    pub fn toggle_room(&self, room_id: i32) {
        self.selected_rooms.update(|ids| {
            if let Some(pos) = ids.iter().position(|id| *id == room_id) {
                ids.remove(pos);
            } else {
                ids.push(room_id);
            }
        });
        self.schedule_precheck();
    }

    /// Debounced advisory conflict check for the current draft.
    ///
    /// Every edit takes a fresh generation token and waits out the quiet
    /// interval; only the newest token survives the wait, so one request
    /// is sent per burst of edits and stale responses are dropped on
    /// arrival. Transport failures are logged and treated as "no
    /// conflicts known" - the bulk submission stays authoritative.
    pub fn schedule_precheck(&self) {
        let vm = *self;
        let form = vm.draft_form();
        let candidates = build_candidates(&form, vm.customer_id);
        if candidates.is_empty() {
            vm.precheck.update(|p| p.clear());
            vm.checking.set(false);
            return;
        }

        let mut token = 0;
        vm.precheck.update(|p| token = p.begin());

        spawn_local(async move {
            TimeoutFuture::new(PRECHECK_DEBOUNCE_MS).await;
            // A newer edit supersedes this timer; send nothing.
            if !vm.precheck.with_untracked(|p| p.is_current(token)) {
                return;
            }

            vm.checking.set(true);
            match api::check_conflicts(&candidates).await {
                Ok(conflicts) => {
                    vm.precheck.update(|p| {
                        p.apply(token, conflicts);
                    });
                }
                Err(e) => {
                    log::warn!(
                        "{} failed (fails open): {}",
                        CheckConflicts::display_name(),
                        e
                    );
                }
            }
            if vm.precheck.with_untracked(|p| p.is_current(token)) {
                vm.checking.set(false);
            }
        });
    }

    /// Validate the draft and append it to the cart.
    pub fn add_to_cart(&self) {
        let form = self.draft_form();
        let mut result: Result<(), CartError> = Ok(());
        self.cart.update(|cart| {
            result = cart.add_group(&form).map(|_| ());
        });
        match result {
            Ok(()) => {
                self.notice
                    .set(Some(Notice::success("Booking added to the cart")));
                // Keep the dates; reset the rest of the draft.
                self.start_time.set(String::new());
                self.end_time.set(String::new());
                self.selected_rooms.set(Vec::new());
                self.description.set(String::new());
                self.precheck.update(|p| p.clear());
                self.checking.set(false);
            }
            Err(e) => self.notice.set(Some(Notice::error(e.to_string()))),
        }
    }

    pub fn remove_from_cart(&self, id: &str) {
        self.cart.update(|cart| cart.remove_group(id));
        self.notice
            .set(Some(Notice::success("Booking removed from the cart")));
    }

    /// Submit the whole cart in one bulk call and reconcile the results.
    pub fn submit_all(&self) {
        let vm = *self;
        if vm.submitting.get_untracked() {
            return;
        }

        let mut begun: Result<
            contracts::usecases::u501_submit_booking_cart::BulkSubmitRequest,
            CartError,
        > = Err(CartError::EmptyCart);
        vm.cart.update(|cart| begun = cart.begin_submit(vm.customer_id));

        let request = match begun {
            Ok(request) => request,
            Err(e) => {
                vm.notice.set(Some(Notice::error(e.to_string())));
                return;
            }
        };

        vm.submitting.set(true);
        spawn_local(async move {
            match api::submit_bulk(&request).await {
                Ok(response) => {
                    let mut outcome: Option<Result<SubmitOutcome, CartError>> = None;
                    vm.cart
                        .update(|cart| outcome = Some(cart.apply_results(response.results)));
                    match outcome {
                        Some(Ok(SubmitOutcome::AllAccepted { accepted })) => {
                            vm.notice.set(Some(Notice::success(format!(
                                "All {} bookings submitted for approval",
                                accepted
                            ))));
                        }
                        Some(Ok(SubmitOutcome::PartialFailure { accepted, rejected })) => {
                            vm.notice.set(Some(Notice::warning(format!(
                                "{} submitted, {} with conflicts - check the cart for details",
                                accepted, rejected
                            ))));
                        }
                        Some(Err(e)) => {
                            vm.notice.set(Some(Notice::error(format!(
                                "Submission failed: {}",
                                e
                            ))));
                        }
                        None => {}
                    }
                }
                Err(e) => {
                    // The whole call failed: nothing was committed.
                    log::warn!("{} failed: {}", SubmitBookingCart::display_name(), e);
                    vm.cart.update(|cart| cart.abort_submit());
                    vm.notice.set(Some(Notice::error(format!(
                        "Submission failed: {}",
                        e.message
                    ))));
                }
            }
            vm.submitting.set(false);
        });
    }
}
