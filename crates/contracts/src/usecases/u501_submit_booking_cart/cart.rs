use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::a003_room_booking::BookingConflict;

use super::request::{normalize, BulkSubmitRequest};
use super::response::GroupResult;

// ============================================================================
// Date selection
// ============================================================================

/// Date selection of a draft entry: one contiguous range or an explicit
/// set of individual dates. Both picker modes feed the same shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateSelection {
    Range { start: NaiveDate, end: NaiveDate },
    Dates(Vec<NaiveDate>),
}

impl DateSelection {
    /// Expand to the deduplicated, sorted list of calendar dates.
    ///
    /// A reversed range yields an empty list; `add_group` reports that as
    /// a date-order violation before the expansion is ever used.
    pub fn resolved_dates(&self) -> Vec<NaiveDate> {
        match self {
            DateSelection::Range { start, end } => {
                let mut dates = Vec::new();
                let mut day = *start;
                while day <= *end {
                    dates.push(day);
                    day = match day.succ_opt() {
                        Some(next) => next,
                        None => break,
                    };
                }
                dates
            }
            DateSelection::Dates(dates) => {
                let mut dates = dates.clone();
                dates.sort_unstable();
                dates.dedup();
                dates
            }
        }
    }

    fn is_empty(&self) -> bool {
        match self {
            DateSelection::Range { .. } => false,
            DateSelection::Dates(dates) => dates.is_empty(),
        }
    }
}

// ============================================================================
// Cart entries
// ============================================================================

/// Client-side lifecycle of a cart entry. Distinct from the backend's
/// `BookingStatus`/`GroupStatus` vocabulary: `Pending` here means
/// "submitted, awaiting the backend decision".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartEntryStatus {
    Draft,
    Submitting,
    Pending,
    PartialError,
}

impl CartEntryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CartEntryStatus::Draft => "draft",
            CartEntryStatus::Submitting => "submitting",
            CartEntryStatus::Pending => "pending",
            CartEntryStatus::PartialError => "partial-error",
        }
    }
}

/// One cart entry: a set of rooms reserved across a set of dates for one
/// time window. The id is client-generated and never authoritative.
#[derive(Debug, Clone, PartialEq)]
pub struct BookingGroup {
    pub id: String,
    pub date_selection: DateSelection,
    /// Wall-clock "HH:MM", applied to every resolved date.
    pub start_time: String,
    pub end_time: String,
    pub room_ids: Vec<i32>,
    pub description: Option<String>,
    pub status: CartEntryStatus,
    /// Populated only while `status == PartialError`.
    pub conflicts: Vec<BookingConflict>,
}

/// Raw form input for a new entry, prior to validation.
#[derive(Debug, Clone, Default)]
pub struct GroupForm {
    pub dates: Option<DateSelection>,
    pub start_time: String,
    pub end_time: String,
    pub room_ids: Vec<i32>,
    pub description: String,
}

// ============================================================================
// Errors & outcomes
// ============================================================================

/// Local validation failures. Reported synchronously, before any network
/// call; none of them mutates the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartError {
    /// The date selection resolves to no dates at all.
    EmptyDates,
    /// Start or end time is missing.
    MissingTime,
    /// No rooms selected.
    NoRooms,
    /// End time is not later than start time.
    TimeOrder,
    /// Range end date is before the start date.
    DateOrder,
    /// Submit requested with an empty cart.
    EmptyCart,
    /// Submit requested while another submission is outstanding.
    SubmitInFlight,
    /// The bulk response did not carry one result per submitted group.
    ResultCountMismatch { expected: usize, got: usize },
}

impl std::fmt::Display for CartError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CartError::EmptyDates => write!(f, "Select at least one date"),
            CartError::MissingTime => write!(f, "Start and end time are required"),
            CartError::NoRooms => write!(f, "Select at least one room"),
            CartError::TimeOrder => write!(f, "End time must be later than start time"),
            CartError::DateOrder => write!(f, "End date must not be before start date"),
            CartError::EmptyCart => write!(f, "The cart is empty"),
            CartError::SubmitInFlight => write!(f, "A submission is already in progress"),
            CartError::ResultCountMismatch { expected, got } => write!(
                f,
                "Bulk response carried {} results for {} groups",
                got, expected
            ),
        }
    }
}

impl std::error::Error for CartError {}

/// How reconciliation treats accepted entries when some groups failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PartialSuccessPolicy {
    /// Reference behavior: accepted entries stay in the cart, patched to
    /// `Pending`, alongside the failed ones.
    #[default]
    KeepAll,
    /// Accepted entries leave the cart immediately; only failed ones
    /// remain for correction and resubmission.
    DropSubmitted,
}

/// Result of applying a bulk response onto the cart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Every group was accepted; the cart has been cleared.
    AllAccepted { accepted: usize },
    /// At least one group failed; failed entries carry their conflicts.
    PartialFailure { accepted: usize, rejected: usize },
}

// ============================================================================
// Cart
// ============================================================================

/// The in-memory, session-local cart of draft booking groups.
///
/// Single writer: UI actions mutate it through `add_group`/`remove_group`,
/// and the submission flow patches it through `begin_submit`/
/// `abort_submit`/`apply_results`. Insertion order is the only order.
#[derive(Debug, Clone, Default)]
pub struct BookingCart {
    entries: Vec<BookingGroup>,
    policy: PartialSuccessPolicy,
    /// Pre-submit statuses stashed by `begin_submit`, restored on abort.
    in_flight: Option<Vec<CartEntryStatus>>,
}

impl BookingCart {
    pub fn new(policy: PartialSuccessPolicy) -> Self {
        Self {
            entries: Vec::new(),
            policy,
            in_flight: None,
        }
    }

    /// Validate the form and append a new draft entry.
    ///
    /// Checks run in a fixed order and fail fast: dates present, both
    /// times present, rooms non-empty, time window ordered, range dates
    /// ordered. On failure nothing changes.
    pub fn add_group(&mut self, form: &GroupForm) -> Result<BookingGroup, CartError> {
        let selection = match &form.dates {
            Some(sel) if !sel.is_empty() => sel.clone(),
            _ => return Err(CartError::EmptyDates),
        };
        if form.start_time.is_empty() || form.end_time.is_empty() {
            return Err(CartError::MissingTime);
        }
        if form.room_ids.is_empty() {
            return Err(CartError::NoRooms);
        }
        // Zero-padded 24h "HH:MM" strings order lexicographically.
        if form.start_time >= form.end_time {
            return Err(CartError::TimeOrder);
        }
        if let DateSelection::Range { start, end } = &selection {
            if start > end {
                return Err(CartError::DateOrder);
            }
        }

        let group = BookingGroup {
            id: Uuid::new_v4().to_string(),
            date_selection: selection,
            start_time: form.start_time.clone(),
            end_time: form.end_time.clone(),
            room_ids: form.room_ids.clone(),
            description: if form.description.trim().is_empty() {
                None
            } else {
                Some(form.description.trim().to_string())
            },
            status: CartEntryStatus::Draft,
            conflicts: Vec::new(),
        };
        self.entries.push(group.clone());
        Ok(group)
    }

    /// Remove the entry with the given id; absent ids are a no-op.
    pub fn remove_group(&mut self, id: &str) {
        self.entries.retain(|g| g.id != id);
    }

    /// Read-only snapshot in insertion order.
    pub fn groups(&self) -> &[BookingGroup] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Build the single bulk request for the whole cart and mark every
    /// entry `Submitting`. One network call covers all groups.
    pub fn begin_submit(&mut self, customer_id: i32) -> Result<BulkSubmitRequest, CartError> {
        if self.entries.is_empty() {
            return Err(CartError::EmptyCart);
        }
        if self.in_flight.is_some() {
            return Err(CartError::SubmitInFlight);
        }

        let groups = self.entries.iter().map(normalize).collect();
        self.in_flight = Some(self.entries.iter().map(|e| e.status).collect());
        for entry in &mut self.entries {
            entry.status = CartEntryStatus::Submitting;
        }
        Ok(BulkSubmitRequest { customer_id, groups })
    }

    /// Transport or server failure of the whole call: restore every
    /// entry's pre-submit status, keep everything else untouched.
    pub fn abort_submit(&mut self) {
        if let Some(prior) = self.in_flight.take() {
            for (entry, status) in self.entries.iter_mut().zip(prior) {
                entry.status = status;
            }
        }
    }

    /// Apply the per-group results, in submission order: `results[i]`
    /// patches the i-th entry. Accepted entries become `Pending` with
    /// conflicts cleared; failed ones become `PartialError` carrying the
    /// returned conflicts verbatim. A count mismatch reverts the cart and
    /// is reported like a transport failure.
    pub fn apply_results(&mut self, results: Vec<GroupResult>) -> Result<SubmitOutcome, CartError> {
        if results.len() != self.entries.len() {
            let expected = self.entries.len();
            let got = results.len();
            self.abort_submit();
            return Err(CartError::ResultCountMismatch { expected, got });
        }
        self.in_flight = None;

        let mut rejected = 0usize;
        for (entry, result) in self.entries.iter_mut().zip(results) {
            if result.success {
                entry.status = CartEntryStatus::Pending;
                entry.conflicts.clear();
            } else {
                entry.status = CartEntryStatus::PartialError;
                entry.conflicts = result.conflicts.unwrap_or_default();
                rejected += 1;
            }
        }

        if rejected == 0 {
            let accepted = self.entries.len();
            self.entries.clear();
            return Ok(SubmitOutcome::AllAccepted { accepted });
        }

        let accepted = self.entries.len() - rejected;
        if self.policy == PartialSuccessPolicy::DropSubmitted {
            self.entries
                .retain(|e| e.status != CartEntryStatus::Pending);
        }
        Ok(SubmitOutcome::PartialFailure { accepted, rejected })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn valid_form() -> GroupForm {
        GroupForm {
            dates: Some(DateSelection::Range {
                start: date("2025-09-01"),
                end: date("2025-09-03"),
            }),
            start_time: "09:00".into(),
            end_time: "11:30".into(),
            room_ids: vec![4, 7],
            description: "Team workshop".into(),
        }
    }

    fn conflict(room_id: i32, message: &str) -> BookingConflict {
        BookingConflict {
            room_id,
            date: None,
            start_time: None,
            end_time: None,
            message: message.into(),
        }
    }

    #[test]
    fn range_resolves_inclusive() {
        let sel = DateSelection::Range {
            start: date("2025-09-01"),
            end: date("2025-09-03"),
        };
        assert_eq!(
            sel.resolved_dates(),
            vec![date("2025-09-01"), date("2025-09-02"), date("2025-09-03")]
        );
    }

    #[test]
    fn explicit_dates_resolve_sorted_and_deduplicated() {
        let sel = DateSelection::Dates(vec![
            date("2025-09-05"),
            date("2025-09-01"),
            date("2025-09-05"),
        ]);
        assert_eq!(sel.resolved_dates(), vec![date("2025-09-01"), date("2025-09-05")]);
    }

    #[test]
    fn add_group_appends_draft_with_fresh_id() {
        let mut cart = BookingCart::default();
        let a = cart.add_group(&valid_form()).unwrap();
        let b = cart.add_group(&valid_form()).unwrap();
        assert_eq!(cart.len(), 2);
        assert_ne!(a.id, b.id);
        assert_eq!(a.status, CartEntryStatus::Draft);
        assert_eq!(a.description.as_deref(), Some("Team workshop"));
    }

    #[test]
    fn validation_rejects_each_malformed_input_without_mutation() {
        let mut cart = BookingCart::default();

        let mut form = valid_form();
        form.dates = None;
        assert_eq!(cart.add_group(&form), Err(CartError::EmptyDates));

        let mut form = valid_form();
        form.dates = Some(DateSelection::Dates(vec![]));
        assert_eq!(cart.add_group(&form), Err(CartError::EmptyDates));

        let mut form = valid_form();
        form.end_time.clear();
        assert_eq!(cart.add_group(&form), Err(CartError::MissingTime));

        let mut form = valid_form();
        form.room_ids.clear();
        assert_eq!(cart.add_group(&form), Err(CartError::NoRooms));

        let mut form = valid_form();
        form.start_time = "12:00".into();
        form.end_time = "12:00".into();
        assert_eq!(cart.add_group(&form), Err(CartError::TimeOrder));

        let mut form = valid_form();
        form.dates = Some(DateSelection::Range {
            start: date("2025-09-03"),
            end: date("2025-09-01"),
        });
        assert_eq!(cart.add_group(&form), Err(CartError::DateOrder));

        assert!(cart.is_empty());
    }

    #[test]
    fn time_order_beats_date_order_in_reporting() {
        // Both violated: the time check is specified to run first.
        let mut cart = BookingCart::default();
        let mut form = valid_form();
        form.start_time = "14:00".into();
        form.end_time = "09:00".into();
        form.dates = Some(DateSelection::Range {
            start: date("2025-09-03"),
            end: date("2025-09-01"),
        });
        assert_eq!(cart.add_group(&form), Err(CartError::TimeOrder));
    }

    #[test]
    fn remove_group_is_noop_for_unknown_id() {
        let mut cart = BookingCart::default();
        let group = cart.add_group(&valid_form()).unwrap();
        cart.remove_group("no-such-id");
        assert_eq!(cart.len(), 1);
        cart.remove_group(&group.id);
        assert!(cart.is_empty());
    }

    #[test]
    fn begin_submit_rejects_empty_cart() {
        let mut cart = BookingCart::default();
        assert_eq!(
            cart.begin_submit(1).map(|_| ()),
            Err(CartError::EmptyCart)
        );
    }

    #[test]
    fn begin_submit_marks_entries_and_preserves_order() {
        let mut cart = BookingCart::default();
        cart.add_group(&valid_form()).unwrap();
        let mut second = valid_form();
        second.room_ids = vec![9];
        cart.add_group(&second).unwrap();

        let request = cart.begin_submit(42).unwrap();
        assert_eq!(request.customer_id, 42);
        assert_eq!(request.groups.len(), 2);
        assert_eq!(request.groups[0].room_ids, vec![4, 7]);
        assert_eq!(request.groups[1].room_ids, vec![9]);
        assert!(cart
            .groups()
            .iter()
            .all(|g| g.status == CartEntryStatus::Submitting));
        assert!(cart.is_submitting());
    }

    #[test]
    fn second_begin_submit_is_rejected_while_outstanding() {
        let mut cart = BookingCart::default();
        cart.add_group(&valid_form()).unwrap();
        cart.begin_submit(1).unwrap();
        assert_eq!(
            cart.begin_submit(1).map(|_| ()),
            Err(CartError::SubmitInFlight)
        );
    }

    #[test]
    fn transport_failure_restores_pre_submit_statuses() {
        let mut cart = BookingCart::default();
        cart.add_group(&valid_form()).unwrap();
        cart.add_group(&valid_form()).unwrap();

        // Second entry had already failed once and carries a conflict.
        let failed_id = {
            cart.begin_submit(1).unwrap();
            let results = vec![
                GroupResult {
                    success: true,
                    conflicts: None,
                },
                GroupResult {
                    success: false,
                    conflicts: Some(vec![conflict(7, "Room occupied")]),
                },
            ];
            cart.apply_results(results).unwrap();
            cart.groups()[1].id.clone()
        };

        // Retry the cart; the whole call dies on the wire.
        cart.begin_submit(1).unwrap();
        cart.abort_submit();

        let statuses: Vec<_> = cart.groups().iter().map(|g| g.status).collect();
        assert_eq!(
            statuses,
            vec![CartEntryStatus::Pending, CartEntryStatus::PartialError]
        );
        let failed = cart.groups().iter().find(|g| g.id == failed_id).unwrap();
        assert_eq!(failed.conflicts.len(), 1);
        assert!(!cart.is_submitting());
    }

    #[test]
    fn full_success_clears_cart() {
        let mut cart = BookingCart::default();
        for _ in 0..3 {
            cart.add_group(&valid_form()).unwrap();
        }
        cart.begin_submit(1).unwrap();
        let results = vec![
            GroupResult {
                success: true,
                conflicts: None
            };
            3
        ];
        let outcome = cart.apply_results(results).unwrap();
        assert_eq!(outcome, SubmitOutcome::AllAccepted { accepted: 3 });
        assert!(cart.is_empty());
    }

    #[test]
    fn partial_failure_patches_each_entry_in_order() {
        let mut cart = BookingCart::default();
        cart.add_group(&valid_form()).unwrap();
        cart.add_group(&valid_form()).unwrap();
        cart.begin_submit(1).unwrap();

        let results = vec![
            GroupResult {
                success: true,
                conflicts: None,
            },
            GroupResult {
                success: false,
                conflicts: Some(vec![conflict(7, "Room occupied")]),
            },
        ];
        let outcome = cart.apply_results(results).unwrap();
        assert_eq!(
            outcome,
            SubmitOutcome::PartialFailure {
                accepted: 1,
                rejected: 1
            }
        );

        let a = &cart.groups()[0];
        assert_eq!(a.status, CartEntryStatus::Pending);
        assert!(a.conflicts.is_empty());

        let b = &cart.groups()[1];
        assert_eq!(b.status, CartEntryStatus::PartialError);
        assert_eq!(b.conflicts.len(), 1);
        assert_eq!(b.conflicts[0].room_id, 7);
        assert_eq!(b.conflicts[0].message, "Room occupied");
    }

    #[test]
    fn drop_submitted_policy_keeps_only_failures() {
        let mut cart = BookingCart::new(PartialSuccessPolicy::DropSubmitted);
        cart.add_group(&valid_form()).unwrap();
        cart.add_group(&valid_form()).unwrap();
        cart.begin_submit(1).unwrap();

        let results = vec![
            GroupResult {
                success: true,
                conflicts: None,
            },
            GroupResult {
                success: false,
                conflicts: Some(vec![conflict(7, "Room occupied")]),
            },
        ];
        cart.apply_results(results).unwrap();
        assert_eq!(cart.len(), 1);
        assert_eq!(cart.groups()[0].status, CartEntryStatus::PartialError);
    }

    #[test]
    fn result_count_mismatch_reverts_like_transport_failure() {
        let mut cart = BookingCart::default();
        cart.add_group(&valid_form()).unwrap();
        cart.add_group(&valid_form()).unwrap();
        cart.begin_submit(1).unwrap();

        let err = cart
            .apply_results(vec![GroupResult {
                success: true,
                conflicts: None,
            }])
            .unwrap_err();
        assert_eq!(
            err,
            CartError::ResultCountMismatch {
                expected: 2,
                got: 1
            }
        );
        assert!(cart
            .groups()
            .iter()
            .all(|g| g.status == CartEntryStatus::Draft));
        assert!(!cart.is_submitting());
    }

    #[test]
    fn failed_entries_resubmit_through_the_same_path() {
        let mut cart = BookingCart::default();
        cart.add_group(&valid_form()).unwrap();
        cart.begin_submit(1).unwrap();
        cart.apply_results(vec![GroupResult {
            success: false,
            conflicts: Some(vec![conflict(4, "Room occupied")]),
        }])
        .unwrap();

        let request = cart.begin_submit(1).unwrap();
        assert_eq!(request.groups.len(), 1);
        assert_eq!(cart.groups()[0].status, CartEntryStatus::Submitting);

        let outcome = cart
            .apply_results(vec![GroupResult {
                success: true,
                conflicts: None,
            }])
            .unwrap();
        assert_eq!(outcome, SubmitOutcome::AllAccepted { accepted: 1 });
        assert!(cart.is_empty());
    }
}
