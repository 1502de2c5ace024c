use contracts::domain::a003_room_booking::BookingConflict;
use contracts::usecases::common::{UseCaseError, UseCaseResult};
use contracts::usecases::u501_submit_booking_cart::{BulkSubmitRequest, BulkSubmitResponse};
use contracts::usecases::u502_check_conflicts::CandidateBooking;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{window, RequestInit, RequestMode, Response};

use crate::shared::api_utils::api_url;

/// Submit the whole cart in one call. The response carries one result
/// per group, in request order.
pub async fn submit_bulk(request: &BulkSubmitRequest) -> UseCaseResult<BulkSubmitResponse> {
    let window = window().ok_or_else(|| UseCaseError::internal("No window object"))?;

    let body = serde_json::to_string(request).map_err(|e| UseCaseError::internal(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = web_sys::Request::new_with_str_and_init(
        &api_url("/api/room-bookings/groups/bulk-submit"),
        &opts,
    )
    .map_err(|e| UseCaseError::internal(format!("Failed to create request: {:?}", e)))?;

    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| UseCaseError::internal(format!("Failed to set header: {:?}", e)))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| UseCaseError::external(format!("Fetch failed: {:?}", e)))?;

    let response: Response = response_value.dyn_into().map_err(|_| UseCaseError::external("Not a Response"))?;

    if !response.ok() {
        return Err(UseCaseError::external(format!("HTTP error: {}", response.status())));
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| UseCaseError::external(format!("Failed to parse JSON: {:?}", e)))?,
    )
    .await
    .map_err(|e| UseCaseError::external(format!("Failed to get JSON: {:?}", e)))?;

    let response: BulkSubmitResponse =
        serde_wasm_bindgen::from_value(json).map_err(|e| UseCaseError::external(e.to_string()))?;

    Ok(response)
}

/// Advisory availability lookup for the draft being edited. An empty
/// list means no known conflicts.
pub async fn check_conflicts(
    candidates: &[CandidateBooking],
) -> UseCaseResult<Vec<BookingConflict>> {
    let window = window().ok_or_else(|| UseCaseError::internal("No window object"))?;

    let body = serde_json::to_string(candidates).map_err(|e| UseCaseError::internal(e.to_string()))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&JsValue::from_str(&body));

    let request = web_sys::Request::new_with_str_and_init(
        &api_url("/api/room-bookings/check-conflicts"),
        &opts,
    )
    .map_err(|e| UseCaseError::internal(format!("Failed to create request: {:?}", e)))?;

    request
        .headers()
        .set("Content-Type", "application/json")
        .map_err(|e| UseCaseError::internal(format!("Failed to set header: {:?}", e)))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| UseCaseError::external(format!("Fetch failed: {:?}", e)))?;

    let response: Response = response_value.dyn_into().map_err(|_| UseCaseError::external("Not a Response"))?;

    if !response.ok() {
        return Err(UseCaseError::external(format!("HTTP error: {}", response.status())));
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| UseCaseError::external(format!("Failed to parse JSON: {:?}", e)))?,
    )
    .await
    .map_err(|e| UseCaseError::external(format!("Failed to get JSON: {:?}", e)))?;

    let conflicts: Vec<BookingConflict> =
        serde_wasm_bindgen::from_value(json).map_err(|e| UseCaseError::external(e.to_string()))?;

    Ok(conflicts)
}
