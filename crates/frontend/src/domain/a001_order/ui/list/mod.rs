pub mod state;

use self::state::{create_state, OrderCard, OrdersView, NO_ORDERS_TEXT};
use crate::domain::a001_order::api::{delete_order, fetch_orders};
use crate::shared::components::ui::Button;
use crate::shared::dialogs;
use leptos::prelude::*;
use leptos::task::spawn_local;

const CONFIRM_PROMPT: &str = "Enter the phone number to confirm deletion:";
const INCORRECT_PHONE_TEXT: &str = "Incorrect phone number. Order not deleted.";
const DELETE_FAILED_TEXT: &str = "Failed to delete order";

/// The operator must retype the order's phone exactly; a cancelled prompt
/// never confirms.
pub fn is_delete_confirmed(phone: &str, entered: Option<&str>) -> bool {
    entered == Some(phone)
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    let state = create_state();

    let fetch = move || {
        spawn_local(async move {
            match fetch_orders().await {
                Ok(orders) => {
                    log::debug!("Orders fetched: {}", orders.len());
                    state.update(|s| s.view = Some(OrdersView::from_orders(orders)));
                }
                Err(e) => log::error!("Error fetching orders: {}", e),
            }
        });
    };

    let handle_delete = move |phone: String| {
        log::debug!("Deleting order with phone: {}", phone);
        let entered = dialogs::prompt(CONFIRM_PROMPT);
        if !is_delete_confirmed(&phone, entered.as_deref()) {
            dialogs::alert(INCORRECT_PHONE_TEXT);
            return;
        }

        spawn_local(async move {
            match delete_order(&phone).await {
                Ok(message) => {
                    log::info!("{}", message);
                    fetch();
                }
                Err(e) => {
                    log::error!("Error deleting order: {}", e);
                    dialogs::alert(&e.operator_text(DELETE_FAILED_TEXT));
                }
            }
        });
    };

    let render_card = move |card: OrderCard| {
        let phone = card.phone.clone();
        view! {
            <div class="order-item">
                <p><strong>"Name on the cake: "</strong>{card.consumer}</p>
                <p><strong>"Quantity: "</strong>{card.quantity}</p>
                <p><strong>"Flavour: "</strong>{card.flavour}</p>
                <p><strong>"Delivery Time: "</strong>{card.info}</p>
                <Button
                    variant="danger".to_string()
                    on_click=Callback::new(move |_| handle_delete(phone.clone()))
                >
                    "Mark as Delivered"
                </Button>
            </div>
        }
    };

    fetch();

    view! {
        <section class="content orders">
            <div class="header">
                <h2>{"Orders"}</h2>
            </div>
            <div id="orders">
                {move || match state.get().view {
                    None => ().into_any(),
                    Some(OrdersView::Empty) => view! { <p>{NO_ORDERS_TEXT}</p> }.into_any(),
                    Some(OrdersView::Cards(cards)) => {
                        cards.into_iter().map(render_card).collect_view().into_any()
                    }
                }}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_match_confirms() {
        assert!(is_delete_confirmed("5550101", Some("5550101")));
    }

    #[test]
    fn test_any_difference_blocks_delete() {
        assert!(!is_delete_confirmed("5550101", Some(" 5550101")));
        assert!(!is_delete_confirmed("5550101", Some("5550101 ")));
        assert!(!is_delete_confirmed("5550101", Some("555010")));
        assert!(!is_delete_confirmed("abc", Some("ABC")));
        assert!(!is_delete_confirmed("5550101", Some("")));
    }

    #[test]
    fn test_cancelled_prompt_blocks_delete() {
        assert!(!is_delete_confirmed("5550101", None));
        assert!(!is_delete_confirmed("", None));
    }
}
