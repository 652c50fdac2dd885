use serde::{Deserialize, Serialize};

use crate::cart::CartStore;
use crate::model::CartLine;


// Snapshot handed to the payment step. Taken by value from the cart;
// later cart edits never reach a snapshot already produced. Serializes
// as a bare JSON array of {id, name, price, quantity} records.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartSnapshot {
    lines: Vec<CartLine>,
}


impl CartSnapshot {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn total_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total_price(&self) -> u32 {
        self.lines.iter().map(|l| l.amount()).sum()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(&self.lines)
    }
}


// Gate to the payment step: an empty cart cannot proceed
pub fn checkout(cart: &CartStore) -> Option<CartSnapshot> {
    if cart.is_empty() {
        return None;
    }
    Some(CartSnapshot {
        lines: cart.lines().to_vec(),
    })
}
