use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Post entity - a blog entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The client-supplied, mutable part of a post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostParams {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}

impl Post {
    /// Create a new post with a generated ID and identical timestamps.
    pub fn new(params: PostParams) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: params.title,
            content: params.content,
            category: params.category,
            tags: params.tags,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replace every mutable field. `id` and `created_at` are kept.
    pub fn revise(self, params: PostParams) -> Self {
        Self {
            title: params.title,
            content: params.content,
            category: params.category,
            tags: params.tags,
            updated_at: Utc::now(),
            ..self
        }
    }
}
