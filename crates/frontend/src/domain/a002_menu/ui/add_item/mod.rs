pub mod view_model;

use self::view_model::{AddItemFields, AddItemViewModel};
use crate::shared::components::ui::{Button, Input};
use leptos::prelude::*;

#[component]
#[allow(non_snake_case)]
pub fn AddItemForm() -> impl IntoView {
    let vm = AddItemViewModel::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        vm.submit_command();
    };

    view! {
        <section class="content menu-add">
            <div class="header">
                <h2>{"Add New Item"}</h2>
            </div>
            <form id="add-item-form" on:submit=on_submit>
                {field(vm, "newCategory", "Category", "text", |f| f.category.clone(), |f, v| f.category = v)}
                {field(vm, "newItemName", "Item name", "text", |f| f.name.clone(), |f, v| f.name = v)}
                {field(vm, "newPrice", "Price", "text", |f| f.price.clone(), |f, v| f.price = v)}
                {field(vm, "newImage", "Image URL", "url", |f| f.image.clone(), |f, v| f.image = v)}
                {field(vm, "newItemQuantity", "Quantity", "number", |f| f.quantity.clone(), |f, v| f.quantity = v)}
                <Button button_type="submit".to_string()>"Add Item"</Button>
            </form>
            {move || vm.status.get().map(|s| {
                let style = s.style();
                view! { <p id="add-item-message" style=style>{s.text}</p> }
            })}
        </section>
    }
}

/// One required text field bound to a member of [`AddItemFields`]
fn field(
    vm: AddItemViewModel,
    id: &'static str,
    label: &'static str,
    input_type: &'static str,
    get: fn(&AddItemFields) -> String,
    set: fn(&mut AddItemFields, String),
) -> impl IntoView {
    view! {
        <Input
            id=id.to_string()
            label=label.to_string()
            input_type=input_type.to_string()
            required=true
            value=Signal::derive(move || vm.form.with(get))
            on_input=Callback::new(move |v: String| vm.form.update(|f| set(f, v)))
        />
    }
}
