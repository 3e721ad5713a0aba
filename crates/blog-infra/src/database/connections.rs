#[cfg(feature = "postgres")]
use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Connection settings for the posts database.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

impl DatabaseConfig {
    pub const DEFAULT_MAX_CONNECTIONS: u32 = 10;
    pub const DEFAULT_MIN_CONNECTIONS: u32 = 1;

    /// Use a complete connection URL as-is.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: Self::DEFAULT_MAX_CONNECTIONS,
            min_connections: Self::DEFAULT_MIN_CONNECTIONS,
        }
    }

    /// Assemble a PostgreSQL URL from discrete parameters.
    pub fn from_parts(host: &str, port: u16, user: &str, password: &str, name: &str) -> Self {
        Self::from_url(format!("postgres://{user}:{password}@{host}:{port}/{name}"))
    }

    pub fn with_pool_size(mut self, min_connections: u32, max_connections: u32) -> Self {
        self.min_connections = min_connections;
        self.max_connections = max_connections;
        self
    }
}

/// The shared connection pool.
#[cfg(feature = "postgres")]
pub struct DatabasePool {
    pub conn: DbConn,
}

#[cfg(feature = "postgres")]
impl DatabasePool {
    /// Connect the pool and verify the server answers.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DbErr> {
        tracing::info!("Connecting to database...");

        let opts = ConnectOptions::new(&config.url)
            .max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(Duration::from_secs(10))
            .idle_timeout(Duration::from_secs(300))
            .sqlx_logging(false)
            .to_owned();

        let conn = Database::connect(opts).await?;
        conn.ping().await?;

        tracing::info!(
            max_connections = config.max_connections,
            "Database connected"
        );

        Ok(Self { conn })
    }
}
