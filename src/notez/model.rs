use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A user-authored note.
///
/// Serialized with camelCase keys (`createdAt`, `updatedAt`) so the stored blob
/// keeps the same shape regardless of which client wrote it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a note with a fresh id and both timestamps set to now.
    pub fn new(title: String, content: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            content,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces title and content and stamps `updated_at`.
    ///
    /// The stamp never goes below `created_at` (or the previous `updated_at`),
    /// even if the wall clock moved backwards in between.
    pub fn edit(&mut self, title: String, content: String) {
        let now = Utc::now();
        self.title = title;
        self.content = content;
        self.updated_at = now.max(self.updated_at).max(self.created_at);
    }

    /// Case-insensitive substring match on title or content.
    pub fn matches(&self, query: &str) -> bool {
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query) || self.content.to_lowercase().contains(&query)
    }
}

/// True when a submitted field has no visible characters.
pub fn is_blank(text: &str) -> bool {
    text.trim().is_empty()
}
