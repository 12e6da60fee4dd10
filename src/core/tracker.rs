//! Single-slot holder for the in-flight order summary

use crate::core::types::OrderStatus;
use crate::models::ActiveOrder;
use crate::utils::{generate_order_code, now_timestamp};
use tracing::info;

/// Delivery estimate shown with every freshly placed order
const DEFAULT_ESTIMATE: &str = "25-30 min";

/// Holds at most one active order at a time
///
/// Set at checkout confirmation, read by the home screen's floating
/// tracking affordance and by the tracking screen. Placing a new order
/// replaces the slot.
#[derive(Debug, Clone, Default)]
pub struct ActiveOrderTracker {
    active: Option<ActiveOrder>,
}

impl ActiveOrderTracker {
    /// Creates a tracker with no active order
    pub fn new() -> Self {
        Self::default()
    }

    /// Synthesizes an order summary for the given restaurant and stores it
    pub fn place(&mut self, restaurant_name: String) -> ActiveOrder {
        let order = ActiveOrder::new(
            generate_order_code(),
            restaurant_name,
            OrderStatus::Preparing.as_str().to_string(),
            DEFAULT_ESTIMATE.to_string(),
            now_timestamp(),
        );
        info!(order_id = %order.order_id, restaurant = %order.restaurant_name, "order placed");
        self.active = Some(order.clone());
        order
    }

    /// The active order, if any
    pub fn active(&self) -> Option<&ActiveOrder> {
        self.active.as_ref()
    }

    /// Whether an order is currently being tracked
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }

    /// Drops the active order
    pub fn clear(&mut self) {
        self.active = None;
    }
}
