use serde::{Deserialize, Serialize};

use crate::domain::a003_room_booking::BookingConflict;

/// Response to the bulk submission: one result per submitted group, in
/// request order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkSubmitResponse {
    pub results: Vec<GroupResult>,
}

/// Outcome of one submitted group.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupResult {
    pub success: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conflicts: Option<Vec<BookingConflict>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_results() {
        let json = r#"{
            "results": [
                { "success": true },
                { "success": false, "conflicts": [
                    { "roomId": 7, "date": "2025-10-06", "message": "Room occupied" }
                ] }
            ]
        }"#;
        let response: BulkSubmitResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.results.len(), 2);
        assert!(response.results[0].success);
        assert!(response.results[0].conflicts.is_none());
        let conflicts = response.results[1].conflicts.as_ref().unwrap();
        assert_eq!(conflicts[0].room_id, 7);
        assert_eq!(
            conflicts[0].date.unwrap().to_string(),
            "2025-10-06"
        );
        assert!(conflicts[0].start_time.is_none());
    }
}
