//! Append-only notification history
//!
//! The core owns the list and the unread badge; everything visual,
//! including the brief exit-animation delay the UI applies before a
//! dismissed entry disappears, stays in the rendering layer.

use crate::core::types::NotificationKind;
use crate::models::Notification;
use crate::utils::now_timestamp;
use tracing::debug;
use uuid::Uuid;

/// Append-only log of notifications, newest first
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    /// Creates an empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new unread notification and returns it
    pub fn push(&mut self, kind: NotificationKind, title: &str, description: &str) -> &Notification {
        let notification = Notification::new(
            Uuid::new_v4().to_string(),
            kind.as_str().to_string(),
            title.to_string(),
            description.to_string(),
            now_timestamp(),
        );
        debug!(kind = kind.as_str(), title, "notification pushed");
        self.entries.insert(0, notification);
        &self.entries[0]
    }

    /// All entries, newest first
    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    /// Number of unread entries (the badge the home screen renders)
    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    /// Marks every entry read, clearing the badge
    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
    }

    /// Deletes an entry by id; returns whether anything was removed
    pub fn dismiss(&mut self, id: &str) -> bool {
        let before = self.entries.len();
        self.entries.retain(|n| n.id != id);
        self.entries.len() != before
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_is_newest_first() {
        let mut log = NotificationLog::new();
        log.push(NotificationKind::System, "Welcome", "Thanks for installing");
        log.push(NotificationKind::OrderUpdate, "Order placed", "Being prepared");

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].title, "Order placed");
    }

    #[test]
    fn test_unread_badge() {
        let mut log = NotificationLog::new();
        log.push(NotificationKind::Promo, "Deal", "Half price kottu");
        log.push(NotificationKind::System, "Update", "New restaurants nearby");
        assert_eq!(log.unread_count(), 2);

        log.mark_all_read();
        assert_eq!(log.unread_count(), 0);

        log.push(NotificationKind::Promo, "Another deal", "Free delivery");
        assert_eq!(log.unread_count(), 1);
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut log = NotificationLog::new();
        let id = log
            .push(NotificationKind::Promo, "Deal", "Half price kottu")
            .id
            .clone();

        assert!(log.dismiss(&id));
        assert!(log.is_empty());
        assert!(!log.dismiss(&id)); // already gone
    }
}
