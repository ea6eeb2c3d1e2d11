use crate::domain::a001_order::ui::list::OrderList;
use crate::domain::a002_menu::state::MenuState;
use crate::domain::a002_menu::ui::add_item::AddItemForm;
use crate::domain::a002_menu::ui::update_quantity::UpdateQuantityForm;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Categories are fetched once per page and shared with the item selector.
    let menu = MenuState::new();
    provide_context(menu);
    menu.load();

    view! {
        <main class="panel">
            <h1>"Bakery Admin Panel"</h1>
            <OrderList />
            <UpdateQuantityForm />
            <AddItemForm />
        </main>
    }
}
