use crate::domain::a002_menu::state::MenuState;
use crate::shared::components::ui::{Select, SelectOption};
use contracts::domain::a002_menu::aggregate::Category;
use leptos::prelude::*;

pub const CATEGORY_PLACEHOLDER: &str = "Select a category";
pub const ITEM_PLACEHOLDER: &str = "Select an item";

/// Placeholder followed by one option per category, value = text = name
pub fn category_options(categories: &[Category]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder(CATEGORY_PLACEHOLDER))
        .chain(categories.iter().map(|c| SelectOption::named(c.category.clone())))
        .collect()
}

/// Item options of the category named exactly `selected`.
///
/// Only the placeholder remains when nothing matches. Pure: the result
/// depends on the arguments alone.
pub fn populate_items(selected: &str, categories: &[Category]) -> Vec<SelectOption> {
    let mut options = vec![SelectOption::placeholder(ITEM_PLACEHOLDER)];
    if let Some(category) = categories.iter().find(|c| c.category == selected) {
        options.extend(category.item_names().map(SelectOption::named));
    }
    options
}

/// Category select feeding a dependent item select.
///
/// Changing the category rebuilds the item options from the categories held
/// in [`MenuState`] and clears the chosen item.
#[component]
#[allow(non_snake_case)]
pub fn CategoryItemSelector(category: RwSignal<String>, item_name: RwSignal<String>) -> impl IntoView {
    let menu = use_context::<MenuState>().expect("MenuState not found in context");
    let item_options = RwSignal::new(populate_items("", &[]));

    let on_category_change = Callback::new(move |value: String| {
        let options = menu.categories.with_untracked(|list| populate_items(&value, list));
        item_options.set(options);
        item_name.set(String::new());
        category.set(value);
    });

    view! {
        <Select
            id="category".to_string()
            label="Category".to_string()
            required=true
            value=category
            options=Signal::derive(move || menu.categories.with(|list| category_options(list)))
            on_change=on_category_change
        />
        <Select
            id="itemName".to_string()
            label="Item".to_string()
            required=true
            value=item_name
            options=item_options
            on_change=Callback::new(move |value: String| item_name.set(value))
        />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_menu::aggregate::Item;

    fn item(name: &str) -> Item {
        Item {
            name: name.to_string(),
            price: serde_json::json!(10),
            image: None,
            quantity: serde_json::json!(1),
        }
    }

    fn categories() -> Vec<Category> {
        vec![
            Category {
                category: "Cakes".to_string(),
                items: vec![item("Chocolate")],
            },
            Category {
                category: "Pies".to_string(),
                items: vec![item("Apple"), item("Cherry")],
            },
        ]
    }

    fn labels(options: &[SelectOption]) -> Vec<&str> {
        options.iter().map(|o| o.label.as_str()).collect()
    }

    #[test]
    fn test_category_options() {
        let options = category_options(&categories());
        assert_eq!(labels(&options), vec!["Select a category", "Cakes", "Pies"]);
        assert!(options[0].disabled);
        assert_eq!(options[1].value, "Cakes");
    }

    #[test]
    fn test_items_of_selected_category() {
        let options = populate_items("Cakes", &categories());
        assert_eq!(labels(&options), vec!["Select an item", "Chocolate"]);
        assert!(options[0].disabled);
        assert!(!options[1].disabled);
        assert_eq!(options[1].value, "Chocolate");
    }

    #[test]
    fn test_unknown_category_leaves_placeholder() {
        assert_eq!(labels(&populate_items("Bread", &categories())), vec!["Select an item"]);
        assert_eq!(labels(&populate_items("cakes", &categories())), vec!["Select an item"]);
        assert_eq!(labels(&populate_items("", &[])), vec!["Select an item"]);
    }

    #[test]
    fn test_populate_items_is_idempotent() {
        let list = categories();
        assert_eq!(populate_items("Pies", &list), populate_items("Pies", &list));
    }
}
