use leptos::prelude::*;

/// Button component with variants (primary, danger)
#[component]
pub fn Button(
    /// Button variant: "primary" (default) or "danger"
    #[prop(optional, into)]
    variant: MaybeProp<String>,
    /// Button type attribute, "button" unless given
    #[prop(optional, into)]
    button_type: MaybeProp<String>,
    /// Click event handler
    #[prop(optional)]
    on_click: Option<Callback<leptos::ev::MouseEvent>>,
    /// Button children (content)
    children: Children,
) -> impl IntoView {
    let variant_class = move || match variant.get().as_deref().unwrap_or("primary") {
        "danger" => "button--danger",
        _ => "button--primary",
    };
    let btn_type = move || button_type.get().unwrap_or_else(|| "button".to_string());

    view! {
        <button
            type=btn_type
            class=move || format!("button {}", variant_class())
            on:click=move |ev| {
                if let Some(handler) = on_click {
                    handler.run(ev);
                }
            }
        >
            {children()}
        </button>
    }
}
