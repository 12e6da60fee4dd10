use crate::models::MenuItem;
use serde::{Deserialize, Serialize};

/// Represents a menu item held in a cart together with its quantity
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartItem {
    /// The menu item as first seen when it was added
    pub item: MenuItem,
    /// Quantity of the item, at least 1 while the entry exists
    pub quantity: u32,
}

impl CartItem {
    /// Creates a new CartItem
    pub fn new(item: MenuItem, quantity: u32) -> Self {
        Self { item, quantity }
    }

    /// Price of this line: unit price times quantity
    pub fn line_total(&self) -> u64 {
        self.item.price * u64::from(self.quantity)
    }
}
