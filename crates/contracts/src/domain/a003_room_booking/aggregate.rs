use serde::{Deserialize, Serialize};

use super::status::BookingStatus;

/// Read model of an individual room booking, as listed on the customer's
/// "my bookings" page and the admin approval panel.
///
/// `start_time`/`end_time` are ISO 8601 instants as sent by the backend;
/// formatting for display happens in the frontend's date utilities.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoomBookingView {
    pub id: i32,

    #[serde(rename = "roomId")]
    pub room_id: i32,

    #[serde(rename = "roomName")]
    pub room_name: String,

    #[serde(rename = "customerId")]
    pub customer_id: i32,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    #[serde(rename = "customerEmail")]
    pub customer_email: String,

    #[serde(rename = "startTime")]
    pub start_time: String,

    #[serde(rename = "endTime")]
    pub end_time: String,

    pub status: BookingStatus,

    #[serde(default)]
    pub description: Option<String>,
}
