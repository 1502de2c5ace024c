use contracts::domain::a003_room_booking::BookingGroupDetail;
use contracts::domain::common::PagedResponse;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Paged admin view over all submitted booking groups.
pub async fn fetch_admin_booking_groups(
    page: usize,
    page_size: usize,
    status: Option<&str>,
    search: &str,
) -> Result<PagedResponse<BookingGroupDetail>, String> {
    let mut query = format!("?page={}&pageSize={}", page, page_size);
    if let Some(status) = status {
        query.push_str(&format!("&status={}", status));
    }
    if !search.trim().is_empty() {
        query.push_str(&format!("&search={}", urlencoding::encode(search.trim())));
    }

    let response = Request::get(&api_url(&format!(
        "/api/room-bookings/groups/admin{}",
        query
    )))
    .send()
    .await
    .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<PagedResponse<BookingGroupDetail>>()
        .await
        .map_err(|e| e.to_string())
}
