//! Page domain model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A titled text document identified by a unique string id.
///
/// Serialized field names follow the on-disk format of `pages.json`
/// (`createdAt`/`updatedAt`); timestamps are RFC 3339 in UTC.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page {
    pub id: String,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Page {
    /// Create a page with a fresh id, empty content, and matching
    /// creation/update timestamps.
    ///
    /// The id is assigned once here and never changes afterwards.
    pub fn new(title: &str) -> Self {
        let now = Utc::now();
        Page {
            id: Uuid::new_v4().to_string(),
            title: title.to_string(),
            content: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite title and content, refreshing the update timestamp
    pub fn update(&mut self, title: &str, content: &str) {
        self.title = title.to_string();
        self.content = content.to_string();
        self.updated_at = Utc::now();
    }
}
