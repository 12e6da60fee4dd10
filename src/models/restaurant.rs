use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Represents a restaurant as listed in the app
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Restaurant {
    /// Unique identifier of the restaurant
    pub id: String,
    /// Display name of the restaurant
    pub name: String,
    /// Image reference for the restaurant
    pub image: String,
    /// Optional cuisine label, e.g. "Sri Lankan"
    pub cuisine: Option<String>,
    /// Optional rating out of 5
    pub rating: Option<f32>,
}

impl Restaurant {
    /// Creates a new Restaurant with required fields
    pub fn new(id: String, name: String, image: String) -> Self {
        Self {
            id,
            name,
            image,
            cuisine: None,
            rating: None,
        }
    }

    /// Sets the cuisine label
    pub fn with_cuisine(mut self, cuisine: String) -> Self {
        self.cuisine = Some(cuisine);
        self
    }

    /// Sets the rating
    pub fn with_rating(mut self, rating: f32) -> Self {
        self.rating = Some(rating);
        self
    }
}

/// Lookup table from restaurant id to restaurant metadata
///
/// Replaces ad-hoc conditionals on restaurant ids; the cart store consults
/// it when an undo has to rebuild a deleted cart.
#[derive(Debug, Clone, Default)]
pub struct RestaurantDirectory {
    entries: HashMap<String, Restaurant>,
}

impl RestaurantDirectory {
    /// Creates an empty directory
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a restaurant, replacing any previous entry with the same id
    pub fn insert(&mut self, restaurant: Restaurant) {
        self.entries.insert(restaurant.id.clone(), restaurant);
    }

    /// Looks up a restaurant by id
    pub fn get(&self, restaurant_id: &str) -> Option<&Restaurant> {
        self.entries.get(restaurant_id)
    }

    /// Number of listed restaurants
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the directory is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Restaurant> for RestaurantDirectory {
    fn from_iter<I: IntoIterator<Item = Restaurant>>(iter: I) -> Self {
        let mut directory = Self::new();
        for restaurant in iter {
            directory.insert(restaurant);
        }
        directory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_restaurant_builder() {
        let restaurant = Restaurant::new(
            "r1".to_string(),
            "Pizza Place".to_string(),
            "img".to_string(),
        )
        .with_cuisine("Italian".to_string())
        .with_rating(4.5);

        assert_eq!(restaurant.id, "r1");
        assert_eq!(restaurant.cuisine, Some("Italian".to_string()));
        assert_eq!(restaurant.rating, Some(4.5));
    }

    #[test]
    fn test_directory_lookup() {
        let directory: RestaurantDirectory = [
            Restaurant::new("r1".to_string(), "Pizza Place".to_string(), "img".to_string()),
            Restaurant::new("r2".to_string(), "Curry House".to_string(), "img2".to_string()),
        ]
        .into_iter()
        .collect();

        assert_eq!(directory.len(), 2);
        assert_eq!(directory.get("r2").unwrap().name, "Curry House");
        assert!(directory.get("r3").is_none());
    }
}
