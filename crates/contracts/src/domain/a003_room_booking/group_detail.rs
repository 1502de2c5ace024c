use serde::{Deserialize, Serialize};

use super::aggregate::RoomBookingView;
use super::status::GroupStatus;

/// Detail view of a submitted booking group, as browsed on the admin side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookingGroupDetail {
    pub id: i32,

    #[serde(rename = "customerId")]
    pub customer_id: i32,

    #[serde(rename = "customerName")]
    pub customer_name: String,

    #[serde(rename = "customerEmail")]
    pub customer_email: String,

    #[serde(rename = "startDate")]
    pub start_date: String,

    #[serde(rename = "endDate")]
    pub end_date: String,

    #[serde(rename = "startTime")]
    pub start_time: String,

    #[serde(rename = "endTime")]
    pub end_time: String,

    #[serde(default)]
    pub description: Option<String>,

    pub status: GroupStatus,

    #[serde(rename = "createdAt")]
    pub created_at: String,

    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<String>,

    #[serde(rename = "totalRooms")]
    pub total_rooms: u32,

    #[serde(rename = "approvedCount")]
    pub approved_count: u32,

    #[serde(rename = "pendingCount")]
    pub pending_count: u32,

    #[serde(rename = "rejectedCount")]
    pub rejected_count: u32,

    #[serde(rename = "roomBookings", default)]
    pub room_bookings: Vec<RoomBookingView>,
}
