use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Represents one entry in the notification history
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Notification {
    /// Unique identifier of the notification
    pub id: String,
    /// Kind of the notification (e.g. "order_update", "promo", "system")
    pub kind: String,
    /// Short title shown in the list
    pub title: String,
    /// Longer description shown under the title
    pub description: String,
    /// Unix timestamp when the notification was recorded
    pub timestamp: u64,
    /// Whether the user has seen the notification
    pub read: bool,
    /// Optional additional data as a JSON value
    pub payload: Option<Value>,
}

impl Notification {
    /// Creates a new, unread Notification
    pub fn new(id: String, kind: String, title: String, description: String, timestamp: u64) -> Self {
        Self {
            id,
            kind,
            title,
            description,
            timestamp,
            read: false,
            payload: None,
        }
    }

    /// Sets the payload of the notification
    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_notification_builder() {
        let notification = Notification::new(
            "n-1".to_string(),
            "order_update".to_string(),
            "Order placed".to_string(),
            "Your order is being prepared".to_string(),
            1700000000,
        )
        .with_payload(json!({ "order_id": "QB-000001" }));

        assert_eq!(notification.kind, "order_update");
        assert!(!notification.read);
        assert!(notification.payload.is_some());
    }
}
