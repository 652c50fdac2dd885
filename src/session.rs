use rand::{Rng, SeedableRng};

use crate::cart::CartStore;
use crate::catalog::{self, CatalogState};
use crate::model::ALL_ITEMS;


// One customer gesture against the ordering screen
#[derive(Debug, Clone)]
pub enum Action {
    SelectCategory(String),
    Add(String),
    Remove(String),
}

// One browsing session: the resolved catalog, the active category tab
// and the cart. All mutations funnel through `apply`.
#[derive(Debug)]
pub struct Session {
    pub catalog: CatalogState,
    pub selected: String,
    pub cart: CartStore,
}


impl Session {
    pub fn new(catalog: CatalogState) -> Self {
        Session {
            catalog,
            selected: ALL_ITEMS.to_string(),
            cart: CartStore::new(),
        }
    }

    // Cart mutations are ignored until the catalog has resolved
    pub fn apply(&mut self, action: &Action) {
        if !self.catalog.is_interactive() {
            return;
        }
        match action {
            Action::SelectCategory(category) => {
                self.selected = category.clone();
            }
            Action::Add(id) => {
                if let Some(item) = self.catalog.items().iter().find(|i| &i.id == id) {
                    self.cart.add_item(item);
                }
            }
            Action::Remove(id) => {
                self.cart.remove_by_id(id);
            }
        }
    }
}


// Random customer gesture, weighted towards adding items
fn random_action(rng: &mut impl Rng, ids: &[String], tabs: &[String]) -> Action {
    match rng.gen_range(0..10) {
        0 | 1 => Action::SelectCategory(tabs[rng.gen_range(0..tabs.len())].clone()),
        2..=7 => Action::Add(ids[rng.gen_range(0..ids.len())].clone()),
        // removes may hit an id that is not in the cart; that is a no-op
        _ => Action::Remove(ids[rng.gen_range(0..ids.len())].clone()),
    }
}

// Generate a deterministic session script for the given catalog
pub fn generate_actions(catalog: &CatalogState, n: usize, seed: u64) -> Vec<Action> {
    let items = catalog.items();
    if items.is_empty() {
        return Vec::new();
    }
    let ids: Vec<String> = items.iter().map(|i| i.id.clone()).collect();
    let tabs = catalog::categories(items);

    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let mut actions = Vec::with_capacity(n);
    for _ in 0..n {
        actions.push(random_action(&mut rng, &ids, &tabs));
    }
    actions
}
