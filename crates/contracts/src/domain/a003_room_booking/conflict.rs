use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Backend-reported reason a specific room/date/time cannot be booked.
///
/// Produced both by the advisory pre-check and by the bulk-submit
/// response. There is no identity beyond the room it describes; several
/// conflicts may reference the same room on different dates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingConflict {
    #[serde(rename = "roomId")]
    pub room_id: i32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,

    #[serde(rename = "startTime", default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,

    #[serde(rename = "endTime", default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,

    pub message: String,
}
