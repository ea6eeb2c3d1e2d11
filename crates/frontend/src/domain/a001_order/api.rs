use contracts::domain::a001_order::aggregate::{DeleteOrderRequest, Order};
use gloo_net::http::Request;

use crate::shared::api_error::{build, decode, network, read_reply, ApiError};
use crate::shared::api_utils::api_url;

/// Fetch all orders
pub async fn fetch_orders() -> Result<Vec<Order>, ApiError> {
    let response = Request::get(&api_url("/api/orders"))
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(network)?;

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            error: response.status_text(),
        });
    }

    response.json::<Vec<Order>>().await.map_err(decode)
}

/// Delete the order registered under `phone`, returning the backend message
pub async fn delete_order(phone: &str) -> Result<String, ApiError> {
    let response = Request::delete(&api_url("/api/orders"))
        .header("Accept", "application/json")
        .json(&DeleteOrderRequest::new(phone))
        .map_err(build)?
        .send()
        .await
        .map_err(network)?;

    read_reply(response).await
}
