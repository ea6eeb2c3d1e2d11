use crate::shared::loose_value::display_text;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Aggregate Root
// ============================================================================

/// Cake order awaiting delivery.
///
/// Orders are created by the backend. The panel only lists and deletes them,
/// and `phone` is both the delete key and the confirmation secret.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    /// Name written on the cake
    pub consumer: String,

    /// Weight in kilograms; number or numeric string, kept as sent
    #[serde(default)]
    pub quantity: Value,

    pub flavour: String,

    /// Delivery time and instructions
    pub info: String,

    pub phone: String,
}

impl Order {
    /// Weight as shown on the order card, e.g. `1.5 Kg`
    pub fn quantity_label(&self) -> String {
        format!("{} Kg", display_text(&self.quantity))
    }
}

// ============================================================================
// Commands
// ============================================================================

/// Body of `DELETE /api/orders`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteOrderRequest {
    pub phone: String,
}

impl DeleteOrderRequest {
    pub fn new(phone: impl Into<String>) -> Self {
        Self {
            phone: phone.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_from_backend_json() {
        let json = r#"[
            {"consumer":"Anna","quantity":1.5,"flavour":"Vanilla","info":"Sat 10:00","phone":"5550101"},
            {"consumer":"Bob","quantity":2,"flavour":"Chocolate","info":"Sun","phone":"5550102"}
        ]"#;
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();

        assert_eq!(orders.len(), 2);
        assert_eq!(orders[0].consumer, "Anna");
        assert_eq!(orders[0].quantity_label(), "1.5 Kg");
        assert_eq!(orders[1].quantity_label(), "2 Kg");
        assert_eq!(orders[1].phone, "5550102");
    }

    #[test]
    fn test_odd_quantity_does_not_break_the_list() {
        let json = r#"[
            {"consumer":"Anna","quantity":"2","flavour":"Vanilla","info":"Sat","phone":"5550101"},
            {"consumer":"Bob","quantity":null,"flavour":"Lemon","info":"Sun","phone":"5550102"},
            {"consumer":"Cleo","flavour":"Mango","info":"Mon","phone":"5550103"}
        ]"#;
        let orders: Vec<Order> = serde_json::from_str(json).unwrap();

        assert_eq!(orders.len(), 3);
        assert_eq!(orders[0].quantity_label(), "2 Kg");
        assert_eq!(orders[1].quantity_label(), " Kg");
        assert_eq!(orders[2].quantity_label(), " Kg");
    }

    #[test]
    fn test_delete_request_body() {
        let body = serde_json::to_value(DeleteOrderRequest::new("5550101")).unwrap();
        assert_eq!(body, serde_json::json!({ "phone": "5550101" }));
    }
}
