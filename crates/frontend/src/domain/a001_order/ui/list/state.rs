use contracts::domain::a001_order::aggregate::Order;
use leptos::prelude::*;

pub const NO_ORDERS_TEXT: &str = "No orders available.";

/// One rendered order card
#[derive(Clone, Debug, PartialEq)]
pub struct OrderCard {
    pub consumer: String,
    pub quantity: String,
    pub flavour: String,
    pub info: String,
    pub phone: String,
}

impl From<Order> for OrderCard {
    fn from(o: Order) -> Self {
        let quantity = o.quantity_label();
        Self {
            consumer: o.consumer,
            quantity,
            flavour: o.flavour,
            info: o.info,
            phone: o.phone,
        }
    }
}

/// Contents of the orders region after a successful fetch
#[derive(Clone, Debug, PartialEq)]
pub enum OrdersView {
    Empty,
    Cards(Vec<OrderCard>),
}

impl OrdersView {
    pub fn from_orders(orders: Vec<Order>) -> Self {
        if orders.is_empty() {
            Self::Empty
        } else {
            Self::Cards(orders.into_iter().map(Into::into).collect())
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct OrderListState {
    /// `None` until the first fetch succeeds; failed fetches leave it as is
    pub view: Option<OrdersView>,
}

pub fn create_state() -> RwSignal<OrderListState> {
    RwSignal::new(OrderListState::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn order(consumer: &str, quantity: serde_json::Value, phone: &str) -> Order {
        Order {
            consumer: consumer.to_string(),
            quantity,
            flavour: "Vanilla".to_string(),
            info: "Friday 18:00".to_string(),
            phone: phone.to_string(),
        }
    }

    fn card_count(view: &OrdersView) -> usize {
        match view {
            OrdersView::Empty => 0,
            OrdersView::Cards(cards) => cards.len(),
        }
    }

    #[test]
    fn test_empty_collection_renders_placeholder() {
        let view = OrdersView::from_orders(Vec::new());
        assert_eq!(view, OrdersView::Empty);
        assert_eq!(card_count(&view), 0);
        assert_eq!(NO_ORDERS_TEXT, "No orders available.");
    }

    #[test]
    fn test_one_card_per_order() {
        let orders = vec![
            order("Anna", json!(1.5), "5550101"),
            order("Bob", json!(2), "5550102"),
            order("Cleo", json!("3"), "5550103"),
        ];
        let view = OrdersView::from_orders(orders);

        assert_eq!(card_count(&view), 3);
        let OrdersView::Cards(cards) = view else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].quantity, "1.5 Kg");
        assert_eq!(cards[1].quantity, "2 Kg");
        assert_eq!(cards[2].quantity, "3 Kg");
        assert_eq!(cards[2].phone, "5550103");
    }
}
