use crate::core::types::OrderStatus;
use serde::{Deserialize, Serialize};

/// Represents the single in-flight order summary shown by the tracking view
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ActiveOrder {
    /// Order code, e.g. "QB-483920"
    pub order_id: String,
    /// Name of the restaurant the order was placed with
    pub restaurant_name: String,
    /// Current status of the order (e.g. "preparing", "on_the_way")
    pub status: String,
    /// Human-readable delivery estimate, e.g. "25-30 min"
    pub estimated_time: String,
    /// Unix timestamp when the order was placed
    pub placed_at: u64,
}

impl ActiveOrder {
    /// Creates a new ActiveOrder
    pub fn new(
        order_id: String,
        restaurant_name: String,
        status: String,
        estimated_time: String,
        placed_at: u64,
    ) -> Self {
        Self {
            order_id,
            restaurant_name,
            status,
            estimated_time,
            placed_at,
        }
    }

    /// Parses the status string into the typed enum, if recognized
    pub fn status(&self) -> Option<OrderStatus> {
        OrderStatus::from_str(&self.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_order_status_parse() {
        let order = ActiveOrder::new(
            "QB-000001".to_string(),
            "Pizza Place".to_string(),
            OrderStatus::Preparing.as_str().to_string(),
            "25-30 min".to_string(),
            1700000000,
        );

        assert_eq!(order.status(), Some(OrderStatus::Preparing));
    }
}
