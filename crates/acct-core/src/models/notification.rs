use crate::NotificationKind;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,

    pub title: String,
    pub message: String,

    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn new(kind: NotificationKind, title: String, message: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title,
            message,
            timestamp: Utc::now(),
            read: false,
        }
    }
}
