use contracts::domain::a001_room::Room;
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

/// Fetch the room directory. Filtering to active rooms happens at the
/// call sites that offer rooms for selection.
pub async fn fetch_rooms() -> Result<Vec<Room>, String> {
    let response = Request::get(&api_url("/api/rooms"))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response
        .json::<Vec<Room>>()
        .await
        .map_err(|e| e.to_string())
}
