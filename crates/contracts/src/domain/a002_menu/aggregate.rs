use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Named group of menu items
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// Unique category name
    pub category: String,

    #[serde(default)]
    pub items: Vec<Item>,
}

impl Category {
    /// Item names in menu order
    pub fn item_names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|item| item.name.as_str())
    }
}

/// Purchasable menu entry
///
/// Only `name` is read by the panel. The other fields hold whatever the
/// add-item form sent, so they are decoded without a fixed type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub name: String,

    #[serde(default)]
    pub price: Value,

    /// Image URL
    #[serde(default)]
    pub image: Option<String>,

    /// Available quantity
    #[serde(default)]
    pub quantity: Value,
}

// ============================================================================
// Commands
// ============================================================================

/// Body of `PUT /api/menu/update-quantity`
///
/// `new_quantity` is `None` when the form field did not hold a number; it is
/// sent as `null` and left for the backend to reject.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateQuantityRequest {
    pub category: String,

    #[serde(rename = "itemName")]
    pub item_name: String,

    #[serde(rename = "newQuantity")]
    pub new_quantity: Option<i64>,
}

/// Body of `POST /api/menu/add-item`
///
/// `price` and `image` travel exactly as typed into the form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddItemRequest {
    pub category: String,
    pub name: String,
    pub price: String,
    pub image: String,
    pub quantity: Option<i64>,
}
