use crate::domain::a002_menu::api::update_quantity;
use crate::shared::form_utils::parse_int_prefix;
use crate::shared::status_message::StatusMessage;
use contracts::domain::a002_menu::aggregate::UpdateQuantityRequest;
use leptos::prelude::*;
use leptos::task::spawn_local;

pub const UPDATE_FAILED_TEXT: &str = "Failed to update quantity";

/// ViewModel for the update-quantity form
#[derive(Clone, Copy)]
pub struct UpdateQuantityViewModel {
    pub category: RwSignal<String>,
    pub item_name: RwSignal<String>,
    pub new_quantity: RwSignal<String>,
    pub status: RwSignal<Option<StatusMessage>>,
}

impl UpdateQuantityViewModel {
    pub fn new() -> Self {
        Self {
            category: RwSignal::new(String::new()),
            item_name: RwSignal::new(String::new()),
            new_quantity: RwSignal::new(String::new()),
            status: RwSignal::new(None),
        }
    }

    pub fn build_request(category: &str, item_name: &str, raw_quantity: &str) -> UpdateQuantityRequest {
        UpdateQuantityRequest {
            category: category.to_string(),
            item_name: item_name.to_string(),
            new_quantity: parse_int_prefix(raw_quantity),
        }
    }

    /// Send the current field values; the outcome lands in `status`
    pub fn submit_command(&self) {
        let dto = Self::build_request(
            &self.category.get_untracked(),
            &self.item_name.get_untracked(),
            &self.new_quantity.get_untracked(),
        );
        let status = self.status;
        spawn_local(async move {
            let outcome = update_quantity(&dto).await;
            if let Err(e) = &outcome {
                log::error!("Error updating quantity: {}", e);
            }
            status.set(Some(StatusMessage::from_outcome(&outcome, UPDATE_FAILED_TEXT, false)));
        });
    }
}

impl Default for UpdateQuantityViewModel {
    fn default() -> Self {
        Self::new()
    }
}
