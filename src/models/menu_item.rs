use serde::{Deserialize, Serialize};

/// Represents a single item on a restaurant's menu
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MenuItem {
    /// Identifier of the item, unique within one restaurant's menu
    pub id: u32,
    /// Display name of the item
    pub name: String,
    /// Image reference for the item
    pub image: String,
    /// Unit price in whole rupees
    pub price: u64,
}

impl MenuItem {
    /// Creates a new MenuItem
    pub fn new(id: u32, name: String, image: String, price: u64) -> Self {
        Self {
            id,
            name,
            image,
            price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_item_creation() {
        let item = MenuItem::new(1, "Margherita".to_string(), "x".to_string(), 500);

        assert_eq!(item.id, 1);
        assert_eq!(item.name, "Margherita");
        assert_eq!(item.image, "x");
        assert_eq!(item.price, 500);
    }
}
