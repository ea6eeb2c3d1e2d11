use contracts::domain::a002_menu::aggregate::{AddItemRequest, Category, UpdateQuantityRequest};
use gloo_net::http::Request;

use crate::shared::api_error::{build, decode, network, read_reply, ApiError};
use crate::shared::api_utils::api_url;

/// Fetch all menu categories with their items
pub async fn fetch_categories() -> Result<Vec<Category>, ApiError> {
    let response = Request::get(&api_url("/api/menu/categories"))
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

    response.json::<Vec<Category>>().await.map_err(decode)
}

/// Set the available quantity of an existing item
pub async fn update_quantity(dto: &UpdateQuantityRequest) -> Result<String, ApiError> {
    let response = Request::put(&api_url("/api/menu/update-quantity"))
        .header("Accept", "application/json")
        .json(dto)
        .map_err(build)?
        .send()
        .await
        .map_err(network)?;

    read_reply(response).await
}

/// Add a new item, creating its category on the backend if needed
pub async fn add_item(dto: &AddItemRequest) -> Result<String, ApiError> {
    let response = Request::post(&api_url("/api/menu/add-item"))
        .header("Accept", "application/json")
        .json(dto)
        .map_err(build)?
        .send()
        .await
        .map_err(network)?;

    read_reply(response).await
}
