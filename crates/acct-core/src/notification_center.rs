use crate::{Notification, NotificationKind};

use uuid::Uuid;

/// In-memory notification list.
///
/// Nothing here talks to the server: read flags and deletions live only as
/// long as the store does.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_notifications(items: Vec<Notification>) -> Self {
        Self { items }
    }

    /// Add a notification and return its id
    pub fn push(&mut self, kind: NotificationKind, title: &str, message: &str) -> Uuid {
        let notification = Notification::new(kind, title.to_string(), message.to_string());
        let id = notification.id;
        self.items.push(notification);
        id
    }

    /// Notifications, newest first
    pub fn list(&self) -> Vec<&Notification> {
        let mut sorted: Vec<&Notification> = self.items.iter().collect();
        sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        sorted
    }

    pub fn get(&self, id: Uuid) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    /// Returns false when no notification has this id
    pub fn mark_read(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.items {
            notification.read = true;
        }
    }

    /// Remove exactly the notification with this id
    pub fn delete(&mut self, id: Uuid) -> Option<Notification> {
        let index = self.items.iter().position(|n| n.id == id)?;
        Some(self.items.remove(index))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    pub fn as_slice(&self) -> &[Notification] {
        &self.items
    }
}
