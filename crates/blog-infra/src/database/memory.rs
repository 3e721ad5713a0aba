//! In-memory post repository - used when no database is configured and in tests.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

/// Posts kept in a `Vec` in insertion order behind an async RwLock.
///
/// Note: data is lost on process restart.
#[derive(Default)]
pub struct InMemoryPostRepository {
    store: RwLock<Vec<Post>>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BaseRepository<Post, Uuid> for InMemoryPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.iter().find(|p| p.id == id).cloned())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        if store.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!(
                "post {} already exists",
                post.id
            )));
        }
        store.push(post.clone());
        Ok(post)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;
        let slot = store
            .iter_mut()
            .find(|p| p.id == post.id)
            .ok_or(RepoError::NotFound)?;
        *slot = post.clone();
        Ok(post)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        let before = store.len();
        store.retain(|p| p.id != id);
        if store.len() == before {
            return Err(RepoError::NotFound);
        }
        Ok(())
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        Ok(self.store.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blog_core::domain::PostParams;

    fn post(title: &str) -> Post {
        Post::new(PostParams {
            title: title.to_string(),
            content: "content".to_string(),
            category: "general".to_string(),
            tags: vec!["tag".to_string()],
        })
    }

    #[tokio::test]
    async fn insert_then_find() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post("hello")).await.unwrap();

        let found = repo.find_by_id(saved.id).await.unwrap();
        assert_eq!(found, Some(saved));
    }

    #[tokio::test]
    async fn find_all_keeps_insertion_order() {
        let repo = InMemoryPostRepository::new();
        let first = repo.insert(post("first")).await.unwrap();
        let second = repo.insert(post("second")).await.unwrap();

        let all = repo.find_all().await.unwrap();
        assert_eq!(all.iter().map(|p| p.id).collect::<Vec<_>>(), vec![first.id, second.id]);
    }

    #[tokio::test]
    async fn update_missing_post_is_not_found() {
        let repo = InMemoryPostRepository::new();
        let result = repo.update(post("ghost")).await;
        assert!(matches!(result, Err(RepoError::NotFound)));
    }

    #[tokio::test]
    async fn update_replaces_stored_post() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post("draft")).await.unwrap();
        let revised = saved.clone().revise(PostParams {
            title: "final".to_string(),
            content: "done".to_string(),
            category: "general".to_string(),
            tags: vec!["tag".to_string()],
        });

        repo.update(revised).await.unwrap();
        let found = repo.find_by_id(saved.id).await.unwrap().unwrap();
        assert_eq!(found.title, "final");
        assert_eq!(found.created_at, saved.created_at);
    }

    #[tokio::test]
    async fn delete_removes_post_and_reports_missing() {
        let repo = InMemoryPostRepository::new();
        let saved = repo.insert(post("bye")).await.unwrap();

        repo.delete(saved.id).await.unwrap();
        assert_eq!(repo.find_by_id(saved.id).await.unwrap(), None);
        assert!(matches!(repo.delete(saved.id).await, Err(RepoError::NotFound)));
    }
}
