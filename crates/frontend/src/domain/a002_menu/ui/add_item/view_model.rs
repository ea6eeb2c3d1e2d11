use crate::domain::a002_menu::api::add_item;
use crate::shared::form_utils::parse_int_prefix;
use crate::shared::status_message::StatusMessage;
use contracts::domain::a002_menu::aggregate::AddItemRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const ADD_FAILED_TEXT: &str = "Failed to add item";

/// Raw text of the add-item fields, as typed
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AddItemFields {
    pub category: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub quantity: String,
}

impl AddItemFields {
    /// Only `quantity` is converted; everything else is sent verbatim
    pub fn to_request(&self) -> AddItemRequest {
        AddItemRequest {
            category: self.category.clone(),
            name: self.name.clone(),
            price: self.price.clone(),
            image: self.image.clone(),
            quantity: parse_int_prefix(&self.quantity),
        }
    }
}

/// ViewModel for the add-item form
#[derive(Clone, Copy)]
pub struct AddItemViewModel {
    pub form: RwSignal<AddItemFields>,
    pub status: RwSignal<Option<StatusMessage>>,
}

impl AddItemViewModel {
    pub fn new() -> Self {
        Self {
            form: RwSignal::new(AddItemFields::default()),
            status: RwSignal::new(None),
        }
    }

    /// Send the current field values; the outcome lands in `status`, green
    /// on success and red otherwise
    pub fn submit_command(&self) {
        let dto = self.form.with_untracked(AddItemFields::to_request);
        let status = self.status;
        spawn_local(async move {
            let outcome = add_item(&dto).await;
            if let Err(e) = &outcome {
                log::error!("Error adding item: {}", e);
            }
            status.set(Some(StatusMessage::from_outcome(&outcome, ADD_FAILED_TEXT, true)));
        });
    }
}

impl Default for AddItemViewModel {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::api_error::ApiError;
    use crate::shared::status_message::Tone;

    fn form() -> AddItemFields {
        AddItemFields {
            category: "Pies".to_string(),
            name: "Apple".to_string(),
            price: "12.50".to_string(),
            image: "http://img/apple.png".to_string(),
            quantity: "6".to_string(),
        }
    }

    #[test]
    fn test_fields_are_sent_verbatim() {
        let mut f = form();
        f.price = "twelve".to_string();
        let dto = f.to_request();

        assert_eq!(dto.category, "Pies");
        assert_eq!(dto.name, "Apple");
        assert_eq!(dto.price, "twelve");
        assert_eq!(dto.image, "http://img/apple.png");
        assert_eq!(dto.quantity, Some(6));
    }

    #[test]
    fn test_non_numeric_quantity_passes_through() {
        let mut f = form();
        f.quantity = "n/a".to_string();
        assert_eq!(f.to_request().quantity, None);
    }

    #[test]
    fn test_success_is_green() {
        let status = StatusMessage::from_outcome(&Ok("Item added".to_string()), ADD_FAILED_TEXT, true);
        assert_eq!(status.text, "Item added");
        assert_eq!(status.tone.color(), Some("green"));
    }

    #[test]
    fn test_backend_error_is_red() {
        let outcome = Err(ApiError::Status {
            status: 409,
            error: "Item already exists".to_string(),
        });
        let status = StatusMessage::from_outcome(&outcome, ADD_FAILED_TEXT, true);
        assert_eq!(status.text, "Item already exists");
        assert_eq!(status.tone, Tone::Failure);
    }

    #[test]
    fn test_network_failure_shows_red_fallback() {
        let outcome = Err(ApiError::Network("Failed to fetch".to_string()));
        let status = StatusMessage::from_outcome(&outcome, ADD_FAILED_TEXT, true);
        assert_eq!(status.text, "Failed to add item");
        assert_eq!(status.style(), "color: red;");
    }
}
