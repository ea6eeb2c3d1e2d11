use leptos::prelude::*;

/// One `<option>` of a [`Select`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    /// Option whose value and text are the same string
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            value: name.clone(),
            label: name,
            disabled: false,
        }
    }

    /// Disabled empty-valued prompt shown before anything is chosen
    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            value: String::new(),
            label: label.into(),
            disabled: true,
        }
    }
}

/// Select component with label support
///
/// An option is marked selected when its value equals `value`, so an empty
/// `value` selects the placeholder.
#[component]
pub fn Select(
    /// Label text (optional)
    #[prop(optional, into)]
    label: MaybeProp<String>,
    /// Current value
    #[prop(into)]
    value: Signal<String>,
    /// Change event handler
    #[prop(optional)]
    on_change: Option<Callback<String>>,
    /// Options in display order
    #[prop(into)]
    options: Signal<Vec<SelectOption>>,
    /// Required attribute
    #[prop(optional)]
    required: bool,
    /// ID for the select element
    #[prop(optional, into)]
    id: MaybeProp<String>,
) -> impl IntoView {
    let select_id = move || id.get().unwrap_or_default();

    view! {
        <div class="form__group">
            {move || label.get().map(|l| view! {
                <label class="form__label" for=select_id>
                    {l}
                </label>
            })}
            <select
                id=select_id
                class="form__select"
                required=required
                on:change=move |ev| {
                    if let Some(handler) = on_change {
                        handler.run(event_target_value(&ev));
                    }
                }
            >
                {move || options.get().into_iter().map(|opt| {
                    let val = opt.value.clone();
                    let is_selected = move || value.get() == val;
                    view! {
                        <option value=opt.value disabled=opt.disabled selected=is_selected>
                            {opt.label}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
