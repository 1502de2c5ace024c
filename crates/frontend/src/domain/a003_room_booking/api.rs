use contracts::domain::a003_room_booking::{BookingStatus, RoomBookingView};
use contracts::domain::common::PagedResponse;
use gloo_net::http::Request;
use serde::Serialize;

use crate::shared::api_utils::api_url;

#[derive(Debug, Serialize)]
struct TimeWindowPayload<'a> {
    #[serde(rename = "startTime")]
    start_time: &'a str,
    #[serde(rename = "endTime")]
    end_time: &'a str,
}

#[derive(Debug, Serialize)]
struct StatusPayload {
    status: BookingStatus,
}

/// Customer's own bookings, optionally narrowed to one status.
pub async fn fetch_customer_bookings(
    customer_id: i32,
    status: Option<BookingStatus>,
    page: usize,
    page_size: usize,
) -> Result<PagedResponse<RoomBookingView>, String> {
    let mut query = format!(
        "?customerId={}&page={}&pageSize={}",
        customer_id, page, page_size
    );
    if let Some(status) = status {
        query.push_str(&format!("&status={}", status.as_str()));
    }

    let response = Request::get(&api_url(&format!("/api/room-bookings{}", query)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<PagedResponse<RoomBookingView>>()
        .await
        .map_err(|e| e.to_string())
}

/// Bookings awaiting an admin decision.
pub async fn fetch_pending_bookings() -> Result<PagedResponse<RoomBookingView>, String> {
    let response = Request::get(&api_url("/api/room-bookings/admin?status=Pending"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<PagedResponse<RoomBookingView>>()
        .await
        .map_err(|e| e.to_string())
}

/// Change a rejected booking's time window.
pub async fn update_booking(id: i32, start_time: &str, end_time: &str) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/room-bookings/{}", id)))
        .json(&TimeWindowPayload {
            start_time,
            end_time,
        })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// Re-queue a rejected booking with a new time window; the backend moves
/// it back to `Pending`.
pub async fn resubmit_booking(id: i32, start_time: &str, end_time: &str) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/room-bookings/{}/resubmit", id)))
        .json(&TimeWindowPayload {
            start_time,
            end_time,
        })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

/// Admin decision on one booking.
pub async fn update_booking_status(id: i32, status: BookingStatus) -> Result<(), String> {
    let response = Request::put(&api_url(&format!("/api/room-bookings/{}/status", id)))
        .json(&StatusPayload { status })
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
