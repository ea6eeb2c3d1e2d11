use super::api::fetch_categories;
use contracts::domain::a002_menu::aggregate::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Per-page menu data, provided through context.
///
/// Categories are fetched once on mount and only replaced by a page reload.
/// The item selector derives its options from this list without fetching.
#[derive(Clone, Copy)]
pub struct MenuState {
    pub categories: RwSignal<Vec<Category>>,
}

impl MenuState {
    pub fn new() -> Self {
        Self {
            categories: RwSignal::new(Vec::new()),
        }
    }

    /// Fetch categories; failures are logged and leave the list unchanged
    pub fn load(&self) {
        let categories = self.categories;
        spawn_local(async move {
            match fetch_categories().await {
                Ok(v) => {
                    log::debug!("Categories fetched: {}", v.len());
                    categories.set(v);
                }
                Err(e) => log::error!("Error fetching categories: {}", e),
            }
        });
    }
}

impl Default for MenuState {
    fn default() -> Self {
        Self::new()
    }
}
