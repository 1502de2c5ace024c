use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::cart::BookingGroup;

/// The single request covering the whole cart: one entry per draft group,
/// in cart order, tagged with the submitting customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSubmitRequest {
    #[serde(rename = "customerId")]
    pub customer_id: i32,

    pub groups: Vec<GroupPayload>,
}

/// Backend-shaped form of one booking group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupPayload {
    #[serde(rename = "startDate")]
    pub start_date: NaiveDate,

    #[serde(rename = "endDate")]
    pub end_date: NaiveDate,

    /// Fixed-width "HH:MM:SS".
    #[serde(rename = "startTime")]
    pub start_time: String,

    #[serde(rename = "endTime")]
    pub end_time: String,

    pub dates: Vec<NaiveDate>,

    #[serde(rename = "roomIds")]
    pub room_ids: Vec<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Normalize a cart entry into its backend shape: resolved dates come out
/// deduplicated and sorted, `start_date`/`end_date` are their min/max and
/// the times gain a seconds component.
pub fn normalize(group: &BookingGroup) -> GroupPayload {
    let dates = group.date_selection.resolved_dates();
    // Validated entries always resolve to at least one date.
    let start_date = dates.first().copied().unwrap_or_default();
    let end_date = dates.last().copied().unwrap_or_default();
    GroupPayload {
        start_date,
        end_date,
        start_time: to_wire_time(&group.start_time),
        end_time: to_wire_time(&group.end_time),
        dates,
        room_ids: group.room_ids.clone(),
        description: group.description.clone(),
    }
}

/// "HH:MM" → "HH:MM:SS"; already-widened values pass through.
fn to_wire_time(time: &str) -> String {
    if time.len() == 5 {
        format!("{}:00", time)
    } else {
        time.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_submit_booking_cart::cart::{CartEntryStatus, DateSelection};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn entry(selection: DateSelection) -> BookingGroup {
        BookingGroup {
            id: "local".into(),
            date_selection: selection,
            start_time: "08:30".into(),
            end_time: "10:00".into(),
            room_ids: vec![3, 5],
            description: Some("Standup block".into()),
            status: CartEntryStatus::Draft,
            conflicts: Vec::new(),
        }
    }

    #[test]
    fn normalizes_range_to_bounds_and_wire_times() {
        let payload = normalize(&entry(DateSelection::Range {
            start: date("2025-10-06"),
            end: date("2025-10-08"),
        }));
        assert_eq!(payload.start_date, date("2025-10-06"));
        assert_eq!(payload.end_date, date("2025-10-08"));
        assert_eq!(payload.dates.len(), 3);
        assert_eq!(payload.start_time, "08:30:00");
        assert_eq!(payload.end_time, "10:00:00");
        assert_eq!(payload.room_ids, vec![3, 5]);
    }

    #[test]
    fn normalization_is_idempotent_over_duplicates_and_order() {
        let messy = normalize(&entry(DateSelection::Dates(vec![
            date("2025-10-08"),
            date("2025-10-06"),
            date("2025-10-08"),
            date("2025-10-07"),
        ])));
        let clean = normalize(&entry(DateSelection::Dates(vec![
            date("2025-10-06"),
            date("2025-10-07"),
            date("2025-10-08"),
        ])));
        assert_eq!(messy, clean);
    }

    #[test]
    fn serializes_with_backend_field_names() {
        let request = BulkSubmitRequest {
            customer_id: 1,
            groups: vec![normalize(&entry(DateSelection::Dates(vec![date(
                "2025-10-06",
            )])))],
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["customerId"], 1);
        let group = &json["groups"][0];
        assert_eq!(group["startDate"], "2025-10-06");
        assert_eq!(group["endDate"], "2025-10-06");
        assert_eq!(group["startTime"], "08:30:00");
        assert_eq!(group["roomIds"][1], 5);
        assert_eq!(group["dates"][0], "2025-10-06");
    }
}
