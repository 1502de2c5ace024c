use contracts::domain::a002_customer::{Customer, CustomerDto};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;

pub async fn fetch_by_id(id: i32) -> Result<Customer, String> {
    let response = Request::get(&api_url(&format!("/api/customers/{}", id)))
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    response.json::<Customer>().await.map_err(|e| e.to_string())
}

/// Create or update depending on whether the DTO carries an id.
pub async fn save_form(dto: &CustomerDto) -> Result<(), String> {
    let request = match dto.id {
        Some(id) => Request::put(&api_url(&format!("/api/customers/{}", id))),
        None => Request::post(&api_url("/api/customers")),
    };
    let response = request
        .json(dto)
        .map_err(|e| e.to_string())?
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}
