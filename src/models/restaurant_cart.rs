use crate::models::CartItem;
use serde::{Deserialize, Serialize};

/// Represents one restaurant's cart: its identity plus the items in it
///
/// A cart only exists while it holds at least one item; the store deletes
/// a cart the moment its item list empties.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct RestaurantCart {
    /// Identifier of the restaurant this cart belongs to
    pub restaurant_id: String,
    /// Restaurant name as first seen when the cart was created
    pub restaurant_name: String,
    /// Restaurant image reference as first seen when the cart was created
    pub restaurant_image: String,
    /// Items in the cart, in insertion order; item ids are unique
    pub items: Vec<CartItem>,
}

impl RestaurantCart {
    /// Creates a new, empty RestaurantCart
    pub fn new(restaurant_id: String, restaurant_name: String, restaurant_image: String) -> Self {
        Self {
            restaurant_id,
            restaurant_name,
            restaurant_image,
            items: Vec::new(),
        }
    }

    /// Adds an item to the cart
    pub fn with_item(mut self, item: CartItem) -> Self {
        self.items.push(item);
        self
    }

    /// Finds an item by id
    pub fn find_item(&self, item_id: u32) -> Option<&CartItem> {
        self.items.iter().find(|entry| entry.item.id == item_id)
    }

    /// Finds an item by id, mutably
    pub fn find_item_mut(&mut self, item_id: u32) -> Option<&mut CartItem> {
        self.items.iter_mut().find(|entry| entry.item.id == item_id)
    }

    /// Number of distinct item lines in the cart
    ///
    /// Quantity does not affect this count: two Margheritas in one line is
    /// still one item line.
    pub fn item_count(&self) -> u32 {
        self.items.len() as u32
    }

    /// Total price of the cart in whole rupees
    pub fn total(&self) -> u64 {
        self.items.iter().map(|entry| entry.line_total()).sum()
    }

    /// Whether the cart holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MenuItem;

    fn margherita() -> MenuItem {
        MenuItem::new(1, "Margherita".to_string(), "x".to_string(), 500)
    }

    fn pepperoni() -> MenuItem {
        MenuItem::new(2, "Pepperoni".to_string(), "y".to_string(), 650)
    }

    #[test]
    fn test_cart_builder_and_totals() {
        let cart = RestaurantCart::new(
            "r1".to_string(),
            "Pizza Place".to_string(),
            "img".to_string(),
        )
        .with_item(CartItem::new(margherita(), 2))
        .with_item(CartItem::new(pepperoni(), 1));

        assert_eq!(cart.restaurant_id, "r1");
        assert_eq!(cart.item_count(), 2); // two lines, quantities don't add lines
        assert_eq!(cart.total(), 1650);
        assert!(!cart.is_empty());
    }

    #[test]
    fn test_find_item() {
        let cart = RestaurantCart::new(
            "r1".to_string(),
            "Pizza Place".to_string(),
            "img".to_string(),
        )
        .with_item(CartItem::new(margherita(), 1));

        assert!(cart.find_item(1).is_some());
        assert!(cart.find_item(99).is_none());
    }
}
