use std::time::Duration;

use crate::model::MenuItem;


fn item(id: &str, name: &str, description: &str, price: u32, category: &str) -> MenuItem {
    MenuItem {
        id: id.to_string(),
        name: name.to_string(),
        description: description.to_string(),
        price,
        category: category.to_string(),
        image: format!("/images/{id}.jpg"),
    }
}

// The chai shop menu as the backend serves it
pub fn menu_items() -> Vec<MenuItem> {
    vec![
        item("cutting-chai", "Cutting Chai", "Half glass of strong street-style chai", 15, "Chai"),
        item("masala-chai", "Masala Chai", "Black tea brewed with ginger, cardamom and cloves", 20, "Chai"),
        item("elaichi-chai", "Elaichi Chai", "Cardamom-forward milk tea", 25, "Chai"),
        item("ginger-chai", "Adrak Chai", "Extra ginger for cold mornings", 25, "Chai"),
        item("filter-coffee", "Filter Coffee", "South Indian filter coffee with frothed milk", 30, "Coffee"),
        item("cold-coffee", "Cold Coffee", "Blended iced coffee with ice cream", 60, "Coffee"),
        item("samosa", "Samosa", "Crisp pastry with spiced potato filling", 15, "Snacks"),
        item("vada-pav", "Vada Pav", "Fried potato dumpling in a soft bun", 25, "Snacks"),
        item("bun-maska", "Bun Maska", "Buttered bun, best dunked in chai", 30, "Snacks"),
        item("poha", "Poha", "Flattened rice with onion, peanuts and lime", 35, "Snacks"),
        item("jalebi", "Jalebi", "Syrup-soaked spirals, served warm", 35, "Desserts"),
        item("gulab-jamun", "Gulab Jamun", "Two pieces in cardamom syrup", 40, "Desserts"),
    ]
}

// Simulated remote fetch; the session shows the loading screen while
// this is outstanding. Run it under tokio::spawn so a session torn down
// early just drops the join handle and the result with it.
pub async fn fetch_menu() -> Vec<MenuItem> {
    tokio::time::sleep(Duration::from_millis(400)).await;
    menu_items()
}


#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn menu_item_ids_are_unique() {
        let items = menu_items();
        let ids: HashSet<&str> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn every_item_carries_display_fields() {
        for item in menu_items() {
            assert!(!item.name.is_empty());
            assert!(!item.description.is_empty());
            assert!(!item.category.is_empty());
            assert!(!item.image.is_empty());
        }
    }
}
