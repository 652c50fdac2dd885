use crate::model::{CartLine, MenuItem};


// The cart for one browsing session. Lines keep first-add order so the
// display is reproducible; at most one line exists per item id.
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    lines: Vec<CartLine>,
}


impl CartStore {
    pub fn new() -> Self {
        CartStore { lines: Vec::new() }
    }

    // Increment the line for this item, or append a fresh one.
    // An existing line keeps its first-seen name/price snapshot.
    pub fn add_item(&mut self, item: &MenuItem) {
        match self.lines.iter_mut().find(|l| l.id == item.id) {
            Some(line) => line.quantity += 1,
            None => self.lines.push(CartLine {
                id: item.id.clone(),
                name: item.name.clone(),
                price: item.price,
                quantity: 1,
            }),
        }
    }

    pub fn remove_item(&mut self, item: &MenuItem) {
        self.remove_by_id(&item.id);
    }

    // Decrement the matching line, dropping it at quantity 1 so no line
    // ever sits at zero. An absent id is a no-op, not an error.
    pub fn remove_by_id(&mut self, id: &str) {
        if let Some(pos) = self.lines.iter().position(|l| l.id == id) {
            if self.lines[pos].quantity > 1 {
                self.lines[pos].quantity -= 1;
            } else {
                self.lines.remove(pos);
            }
        }
    }

    // Quantity shown next to the item's +/- controls; 0 when not in the cart
    pub fn quantity_of(&self, id: &str) -> u32 {
        self.lines
            .iter()
            .find(|l| l.id == id)
            .map_or(0, |l| l.quantity)
    }

    // Badge count, recomputed from the line set
    pub fn total_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total_price(&self) -> u32 {
        self.lines.iter().map(|l| l.amount()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    // Read-only ordered view shared by both display surfaces
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItem;

    fn tea() -> MenuItem {
        menu_item("tea", "Cutting Chai", 20)
    }

    fn menu_item(id: &str, name: &str, price: u32) -> MenuItem {
        MenuItem {
            id: id.to_string(),
            name: name.to_string(),
            description: String::new(),
            price,
            category: "Chai".to_string(),
            image: String::new(),
        }
    }

    #[test]
    fn first_add_appends_a_line_of_one() {
        let mut cart = CartStore::new();
        cart.add_item(&tea());
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of("tea"), 1);
        assert_eq!(cart.total_count(), 1);
    }

    #[test]
    fn repeated_adds_grow_one_line_not_many() {
        let mut cart = CartStore::new();
        for _ in 0..3 {
            cart.add_item(&tea());
        }
        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of("tea"), 3);
        assert_eq!(cart.total_count(), 3);
        assert_eq!(cart.total_price(), 60);
    }

    #[test]
    fn later_adds_keep_the_first_seen_snapshot() {
        let mut cart = CartStore::new();
        cart.add_item(&menu_item("tea", "Cutting Chai", 20));
        cart.add_item(&menu_item("tea", "Cutting Chai", 35));
        let line = &cart.lines()[0];
        assert_eq!(line.price, 20);
        assert_eq!(line.quantity, 2);
        assert_eq!(cart.total_price(), 40);
    }

    #[test]
    fn remove_decrements_above_one() {
        let mut cart = CartStore::new();
        cart.add_item(&tea());
        cart.add_item(&tea());
        cart.remove_item(&tea());
        assert_eq!(cart.quantity_of("tea"), 1);
        assert_eq!(cart.total_count(), 1);
    }

    #[test]
    fn remove_at_one_drops_the_line_entirely() {
        let mut cart = CartStore::new();
        cart.add_item(&tea());
        cart.remove_item(&tea());
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of("tea"), 0);
        assert_eq!(cart.total_count(), 0);
    }

    #[test]
    fn removing_an_absent_id_is_a_no_op() {
        let mut cart = CartStore::new();
        cart.add_item(&tea());
        let before = cart.lines().to_vec();
        cart.remove_by_id("samosa");
        assert_eq!(cart.lines(), &before[..]);
    }

    #[test]
    fn add_then_remove_restores_prior_state() {
        let mut cart = CartStore::new();
        cart.add_item(&menu_item("samosa", "Samosa", 15));
        cart.add_item(&tea());
        let before = cart.lines().to_vec();
        cart.add_item(&tea());
        cart.remove_item(&tea());
        assert_eq!(cart.lines(), &before[..]);
    }

    #[test]
    fn lines_keep_first_add_order() {
        let mut cart = CartStore::new();
        cart.add_item(&menu_item("samosa", "Samosa", 15));
        cart.add_item(&tea());
        cart.add_item(&menu_item("samosa", "Samosa", 15));
        let ids: Vec<&str> = cart.lines().iter().map(|l| l.id.as_str()).collect();
        assert_eq!(ids, vec!["samosa", "tea"]);
    }

    #[test]
    fn total_count_always_matches_the_line_quantities() {
        let mut cart = CartStore::new();
        let samosa = menu_item("samosa", "Samosa", 15);
        let steps: Vec<(&MenuItem, bool)> = vec![
            (&samosa, true),
            (&samosa, true),
            (&samosa, false),
            (&samosa, false),
            (&samosa, false),
        ];
        for (item, add) in steps {
            if add {
                cart.add_item(item);
            } else {
                cart.remove_item(item);
            }
            let by_lines: u32 = cart.lines().iter().map(|l| l.quantity).sum();
            assert_eq!(cart.total_count(), by_lines);
            assert!(cart.lines().iter().all(|l| l.quantity >= 1));
        }
    }
}
