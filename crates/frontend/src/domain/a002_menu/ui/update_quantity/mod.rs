pub mod view_model;

use self::view_model::UpdateQuantityViewModel;
use crate::domain::a002_menu::ui::selector::CategoryItemSelector;
use crate::shared::components::ui::{Button, Input};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn UpdateQuantityForm() -> impl IntoView {
    let vm = UpdateQuantityViewModel::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <section class="content menu-update">
            <div class="header">
                <h2>{"Update Item Quantity"}</h2>
            </div>
            <form id="update-quantity-form" on:submit=on_submit>
                <CategoryItemSelector category=vm.category item_name=vm.item_name />
                <Input
                    id="newQuantity".to_string()
                    label="New quantity".to_string()
                    input_type="number".to_string()
                    required=true
                    value=vm.new_quantity
                    on_input=Callback::new(move |v: String| vm.new_quantity.set(v))
                />
                <Button button_type="submit".to_string()>"Update Quantity"</Button>
            </form>
            <p id="update-message">
                {move || vm.status.get().map(|s| s.text).unwrap_or_default()}
            </p>
        </section>
    }
}
