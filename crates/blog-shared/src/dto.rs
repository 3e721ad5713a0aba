//! Data Transfer Objects - request/response types for the API.

use blog_core::domain::{Post, PostParams};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// Body of `POST /posts` and `PUT /posts/{id}`.
///
/// Missing and `null` fields decode as empty values so that they are
/// reported by validation rather than by the JSON decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PostRequest {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub content: String,
    #[serde(deserialize_with = "null_as_default")]
    pub category: String,
    #[serde(deserialize_with = "null_as_default")]
    pub tags: Vec<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl From<PostRequest> for PostParams {
    fn from(req: PostRequest) -> Self {
        Self {
            title: req.title,
            content: req.content,
            category: req.category,
            tags: req.tags,
        }
    }
}

/// A stored post as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Post> for PostResponse {
    fn from(post: Post) -> Self {
        Self {
            id: post.id,
            title: post.title,
            content: post.content,
            category: post.category,
            tags: post.tags,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}
