//! Multi-restaurant cart store and its state reducers
//!
//! Every mutation goes through a pure reducer `fn(&CartState, ...) -> CartState`
//! that builds a fresh state value; the store swaps the whole state on each
//! call. A snapshot taken before a mutation is never affected by it, which is
//! the atomicity guarantee observers rely on.

use crate::core::error::Error;
use crate::models::{CartItem, MenuItem, RestaurantCart, RestaurantDirectory};
use crate::utils::Money;
use crate::Result;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Read-only projection of one restaurant's cart for list screens
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CartSummary {
    /// Identifier of the restaurant
    pub restaurant_id: String,
    /// Display name of the restaurant
    pub restaurant_name: String,
    /// Image reference for the restaurant
    pub restaurant_image: String,
    /// Number of distinct item lines in the cart
    pub item_count: u32,
    /// Total price of the cart
    pub total_price: Money,
}

/// Complete cart state: one cart per restaurant, in insertion order
///
/// Invariants: every cart holds at least one item, item ids are unique
/// within a cart, and restaurant ids are unique across the collection.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CartState {
    carts: Vec<RestaurantCart>,
}

impl CartState {
    /// Creates an empty cart state
    pub fn new() -> Self {
        Self::default()
    }

    /// All carts, in insertion order
    pub fn carts(&self) -> &[RestaurantCart] {
        &self.carts
    }

    /// Looks up one restaurant's cart
    pub fn cart(&self, restaurant_id: &str) -> Option<&RestaurantCart> {
        self.carts
            .iter()
            .find(|cart| cart.restaurant_id == restaurant_id)
    }

    /// Per-restaurant projections for the multicart screen
    pub fn summaries(&self) -> Vec<CartSummary> {
        self.carts
            .iter()
            .map(|cart| CartSummary {
                restaurant_id: cart.restaurant_id.clone(),
                restaurant_name: cart.restaurant_name.clone(),
                restaurant_image: cart.restaurant_image.clone(),
                item_count: cart.item_count(),
                total_price: Money::new(cart.total()),
            })
            .collect()
    }

    /// Sum of item counts across all restaurants (the cart badge)
    pub fn total_item_count(&self) -> u32 {
        self.carts.iter().map(|cart| cart.item_count()).sum()
    }

    /// Whether no restaurant has a cart
    pub fn is_empty(&self) -> bool {
        self.carts.is_empty()
    }

    fn cart_position(&self, restaurant_id: &str) -> Option<usize> {
        self.carts
            .iter()
            .position(|cart| cart.restaurant_id == restaurant_id)
    }

    fn drop_cart_if_empty(&mut self, restaurant_id: &str) {
        self.carts
            .retain(|cart| cart.restaurant_id != restaurant_id || !cart.is_empty());
    }
}

/// Adds one unit of an item, creating the restaurant's cart on first add
///
/// A repeated id bumps the existing line's quantity by 1 and keeps the
/// first-seen name, image and price. Always succeeds.
pub fn add_item(
    state: &CartState,
    restaurant_id: &str,
    restaurant_name: &str,
    restaurant_image: &str,
    item: MenuItem,
) -> CartState {
    let mut next = state.clone();

    match next.cart_position(restaurant_id) {
        Some(pos) => {
            let cart = &mut next.carts[pos];
            match cart.find_item_mut(item.id) {
                Some(line) => line.quantity += 1,
                None => cart.items.push(CartItem::new(item, 1)),
            }
        }
        None => {
            next.carts.push(
                RestaurantCart::new(
                    restaurant_id.to_string(),
                    restaurant_name.to_string(),
                    restaurant_image.to_string(),
                )
                .with_item(CartItem::new(item, 1)),
            );
        }
    }

    next
}

/// Sets an item's quantity; `new_quantity <= 0` removes the line
///
/// No-op when the restaurant or item is absent. Removing the last line
/// deletes the restaurant's cart entirely. No upper bound is enforced.
pub fn update_quantity(
    state: &CartState,
    restaurant_id: &str,
    item_id: u32,
    new_quantity: i32,
) -> CartState {
    let mut next = state.clone();

    if let Some(pos) = next.cart_position(restaurant_id) {
        let cart = &mut next.carts[pos];
        if cart.find_item(item_id).is_some() {
            if new_quantity <= 0 {
                cart.items.retain(|line| line.item.id != item_id);
            } else if let Some(line) = cart.find_item_mut(item_id) {
                line.quantity = new_quantity as u32;
            }
        }
    }
    next.drop_cart_if_empty(restaurant_id);

    next
}

/// Removes an item line unconditionally; no-op when absent
///
/// Deletes the restaurant's cart when the removal empties it.
pub fn remove_item(state: &CartState, restaurant_id: &str, item_id: u32) -> CartState {
    let mut next = state.clone();

    if let Some(pos) = next.cart_position(restaurant_id) {
        next.carts[pos].items.retain(|line| line.item.id != item_id);
    }
    next.drop_cart_if_empty(restaurant_id);

    next
}

/// Re-inserts a previously removed line (undo for a delete)
///
/// When the restaurant's cart is gone because the removal emptied it, the
/// cart is rebuilt from the directory entry and seeded with just the
/// restored line; an unknown restaurant id is the one failure case. When
/// the cart is still live and somehow holds the same id already, the
/// restored quantity folds into the existing line so ids stay unique.
pub fn restore_item(
    state: &CartState,
    restaurant_id: &str,
    item: CartItem,
    directory: &RestaurantDirectory,
) -> Result<CartState> {
    let mut next = state.clone();

    match next.cart_position(restaurant_id) {
        Some(pos) => {
            let cart = &mut next.carts[pos];
            match cart.find_item_mut(item.item.id) {
                Some(line) => line.quantity += item.quantity,
                None => cart.items.push(item),
            }
        }
        None => {
            let restaurant = directory
                .get(restaurant_id)
                .ok_or_else(|| Error::UnknownRestaurant(restaurant_id.to_string()))?;
            next.carts.push(
                RestaurantCart::new(
                    restaurant.id.clone(),
                    restaurant.name.clone(),
                    restaurant.image.clone(),
                )
                .with_item(item),
            );
        }
    }

    Ok(next)
}

/// Owns the current cart state and applies the reducers to it
#[derive(Debug, Clone, Default)]
pub struct CartStore {
    state: CartState,
}

impl CartStore {
    /// Creates a store with no carts
    pub fn new() -> Self {
        Self::default()
    }

    /// The current state
    pub fn state(&self) -> &CartState {
        &self.state
    }

    /// An owned snapshot of the current state, unaffected by later mutations
    pub fn snapshot(&self) -> CartState {
        self.state.clone()
    }

    /// See [`add_item`]
    pub fn add_item(
        &mut self,
        restaurant_id: &str,
        restaurant_name: &str,
        restaurant_image: &str,
        item: MenuItem,
    ) {
        debug!(restaurant_id, item_id = item.id, "cart add");
        self.state = add_item(&self.state, restaurant_id, restaurant_name, restaurant_image, item);
    }

    /// See [`update_quantity`]
    pub fn update_quantity(&mut self, restaurant_id: &str, item_id: u32, new_quantity: i32) {
        debug!(restaurant_id, item_id, new_quantity, "cart quantity update");
        self.state = update_quantity(&self.state, restaurant_id, item_id, new_quantity);
    }

    /// Removes an item line and returns it for a later undo
    pub fn remove_item(&mut self, restaurant_id: &str, item_id: u32) -> Option<CartItem> {
        let removed = self
            .state
            .cart(restaurant_id)
            .and_then(|cart| cart.find_item(item_id))
            .cloned();
        debug!(restaurant_id, item_id, found = removed.is_some(), "cart remove");
        self.state = remove_item(&self.state, restaurant_id, item_id);
        removed
    }

    /// See [`restore_item`]
    pub fn restore_item(
        &mut self,
        restaurant_id: &str,
        item: CartItem,
        directory: &RestaurantDirectory,
    ) -> Result<()> {
        debug!(restaurant_id, item_id = item.item.id, "cart restore");
        self.state = restore_item(&self.state, restaurant_id, item, directory)?;
        Ok(())
    }

    /// Drops every cart
    pub fn clear(&mut self) {
        debug!("cart clear");
        self.state = CartState::new();
    }

    /// See [`CartState::summaries`]
    pub fn summaries(&self) -> Vec<CartSummary> {
        self.state.summaries()
    }

    /// See [`CartState::total_item_count`]
    pub fn total_item_count(&self) -> u32 {
        self.state.total_item_count()
    }

    /// See [`CartState::is_empty`]
    pub fn is_empty(&self) -> bool {
        self.state.is_empty()
    }
}
