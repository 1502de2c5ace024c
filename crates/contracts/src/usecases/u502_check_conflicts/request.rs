use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::usecases::u501_submit_booking_cart::GroupForm;

/// One candidate booking the pre-check asks the backend about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandidateBooking {
    #[serde(rename = "roomId")]
    pub room_id: i32,

    #[serde(rename = "customerId")]
    pub customer_id: i32,

    /// ISO 8601 instant.
    #[serde(rename = "startTime")]
    pub start_time: String,

    #[serde(rename = "endTime")]
    pub end_time: String,
}

/// Expand the draft into one candidate per (date, room) pair, date-major.
///
/// An incomplete draft (no resolvable dates, a missing time, no rooms, or
/// an unparsable time) expands to an empty list — the caller then clears
/// the current pre-check result instead of issuing a request.
pub fn build_candidates(form: &GroupForm, customer_id: i32) -> Vec<CandidateBooking> {
    let dates = match &form.dates {
        Some(selection) => selection.resolved_dates(),
        None => return Vec::new(),
    };
    if dates.is_empty() || form.room_ids.is_empty() {
        return Vec::new();
    }
    let (start, end) = match (parse_time(&form.start_time), parse_time(&form.end_time)) {
        (Some(start), Some(end)) => (start, end),
        _ => return Vec::new(),
    };

    let mut candidates = Vec::with_capacity(dates.len() * form.room_ids.len());
    for date in &dates {
        for &room_id in &form.room_ids {
            candidates.push(CandidateBooking {
                room_id,
                customer_id,
                start_time: to_instant(*date, start),
                end_time: to_instant(*date, end),
            });
        }
    }
    candidates
}

fn parse_time(time: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M").ok()
}

fn to_instant(date: NaiveDate, time: NaiveTime) -> String {
    date.and_time(time).format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_submit_booking_cart::DateSelection;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn draft() -> GroupForm {
        GroupForm {
            dates: Some(DateSelection::Range {
                start: date("2025-11-03"),
                end: date("2025-11-04"),
            }),
            start_time: "09:00".into(),
            end_time: "10:00".into(),
            room_ids: vec![2, 8],
            description: String::new(),
        }
    }

    #[test]
    fn expands_dates_times_rooms_date_major() {
        let candidates = build_candidates(&draft(), 1);
        assert_eq!(candidates.len(), 4);
        assert_eq!(candidates[0].room_id, 2);
        assert_eq!(candidates[0].start_time, "2025-11-03T09:00:00Z");
        assert_eq!(candidates[1].room_id, 8);
        assert_eq!(candidates[1].start_time, "2025-11-03T09:00:00Z");
        assert_eq!(candidates[2].start_time, "2025-11-04T09:00:00Z");
        assert_eq!(candidates[3].end_time, "2025-11-04T10:00:00Z");
        assert!(candidates.iter().all(|c| c.customer_id == 1));
    }

    #[test]
    fn incomplete_draft_expands_to_nothing() {
        let mut no_dates = draft();
        no_dates.dates = None;
        assert!(build_candidates(&no_dates, 1).is_empty());

        let mut no_time = draft();
        no_time.end_time.clear();
        assert!(build_candidates(&no_time, 1).is_empty());

        let mut no_rooms = draft();
        no_rooms.room_ids.clear();
        assert!(build_candidates(&no_rooms, 1).is_empty());
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let candidates = build_candidates(&draft(), 5);
        let json = serde_json::to_value(&candidates).unwrap();
        assert_eq!(json[0]["roomId"], 2);
        assert_eq!(json[0]["customerId"], 5);
        assert_eq!(json[0]["startTime"], "2025-11-03T09:00:00Z");
    }
}
