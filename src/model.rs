use serde::{Deserialize, Serialize};


// Sentinel category tab that shows the whole catalog
pub const ALL_ITEMS: &str = "All Items";

// One orderable item as supplied by the menu source.
// Immutable from the cart's perspective; `id` is unique per session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: u32,
    pub category: String,
    pub image: String,
}

// One (item, quantity) entry in the cart.
// `name` and `price` are copied from the menu item at first add,
// so cart display does not chase later catalog changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub name: String,
    pub price: u32,
    pub quantity: u32,
}


impl CartLine {
    // Line subtotal
    pub fn amount(&self) -> u32 {
        self.price * self.quantity
    }
}
