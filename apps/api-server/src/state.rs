//! Application state - shared across all handlers.

use std::sync::Arc;

use blog_core::ValidationLimits;
use blog_core::ports::PostRepository;

use crate::config::AppConfig;

/// Shared application state.
///
/// Handed to every handler through `web::Data`; the repository wraps the
/// connection pool.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub limits: ValidationLimits,
}

impl AppState {
    pub fn new(posts: Arc<dyn PostRepository>, limits: ValidationLimits) -> Self {
        Self { posts, limits }
    }

    /// Connect to PostgreSQL. Any failure is returned so startup can abort.
    #[cfg(feature = "postgres")]
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        use anyhow::Context;
        use blog_infra::{DatabasePool, PostgresPostRepository};

        let pool = DatabasePool::connect(&config.database)
            .await
            .context("failed to connect to database")?;

        tracing::info!("Application state initialized");

        Ok(Self::new(
            Arc::new(PostgresPostRepository::new(pool.conn)),
            config.limits,
        ))
    }

    #[cfg(not(feature = "postgres"))]
    pub async fn connect(config: &AppConfig) -> anyhow::Result<Self> {
        use blog_infra::InMemoryPostRepository;

        tracing::warn!("Built without postgres feature - posts are kept in memory");

        Ok(Self::new(
            Arc::new(InMemoryPostRepository::new()),
            config.limits,
        ))
    }
}

#[cfg(all(test, not(feature = "postgres")))]
mod tests {
    use super::*;
    use blog_core::ports::PostRepository;

    #[actix_web::test]
    async fn without_postgres_posts_live_in_memory() {
        let config = AppConfig::from_lookup(|key| match key {
            "BUILD" => Some("dev".to_string()),
            "PORT" => Some("8080".to_string()),
            "DB_URL" => Some("postgres://unreachable/blog".to_string()),
            _ => None,
        })
        .unwrap();

        let state = AppState::connect(&config).await.unwrap();
        assert!(state.posts.find_all().await.unwrap().is_empty());
    }
}
