use crate::model::{MenuItem, ALL_ITEMS};


// Lifecycle of the fetched menu. While the fetch is outstanding the
// session shows a loading screen and takes no cart mutations; a failed
// fetch is a distinct screen, not an error path inside the core.
#[derive(Debug, Clone)]
pub enum CatalogState {
    Loading,
    Ready(Vec<MenuItem>),
    Unavailable,
}


impl CatalogState {
    // Cart mutations are only accepted once the menu has resolved
    pub fn is_interactive(&self) -> bool {
        matches!(self, CatalogState::Ready(_))
    }

    pub fn items(&self) -> &[MenuItem] {
        match self {
            CatalogState::Ready(items) => items,
            _ => &[],
        }
    }
}


// Category tab row: the sentinel first, then each distinct category sorted
pub fn categories(items: &[MenuItem]) -> Vec<String> {
    let mut cats: Vec<String> = Vec::new();
    for item in items {
        if !cats.contains(&item.category) {
            cats.push(item.category.clone());
        }
    }
    cats.sort();
    let mut tabs = Vec::with_capacity(cats.len() + 1);
    tabs.push(ALL_ITEMS.to_string());
    tabs.extend(cats);
    tabs
}

// Category-filtered view, preserving catalog order. The sentinel keeps
// every item; an empty result is a valid state the display must show.
pub fn filtered_items<'a>(items: &'a [MenuItem], selected: &str) -> Vec<&'a MenuItem> {
    items
        .iter()
        .filter(|item| selected == ALL_ITEMS || item.category == selected)
        .collect()
}
