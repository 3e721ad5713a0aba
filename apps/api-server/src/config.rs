//! Application configuration loaded from environment variables.

use std::env;
use std::fmt;
use std::str::FromStr;

use blog_core::ValidationLimits;
use blog_infra::DatabaseConfig;
use thiserror::Error;

/// Configuration errors. Any of these aborts startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is required")]
    Missing(&'static str),

    #[error("{key} has an invalid value: {value:?}")]
    Invalid { key: &'static str, value: String },
}

/// Build mode, from the `BUILD` variable.
///
/// Selects how database parameters are read and the default log format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMode {
    Development,
    Production,
}

impl FromStr for BuildMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "dev" | "development" => Ok(Self::Development),
            "prod" | "production" => Ok(Self::Production),
            _ => Err(()),
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub build: BuildMode,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub limits: ValidationLimits,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup.
    ///
    /// Development builds take the database from `DB_URL`; production builds
    /// assemble it from `DB_HOST`, `DB_PORT`, `DB_USER`, `DB_PASSWORD` and `DB_NAME`.
    pub fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let build_raw = required(&get, "BUILD")?;
        let build: BuildMode = build_raw.parse().map_err(|_| ConfigError::Invalid {
            key: "BUILD",
            value: build_raw.clone(),
        })?;

        let port: u16 = parse_required(&get, "PORT")?;

        let database = match build {
            BuildMode::Development => DatabaseConfig::from_url(required(&get, "DB_URL")?),
            BuildMode::Production => DatabaseConfig::from_parts(
                &required(&get, "DB_HOST")?,
                parse_or(&get, "DB_PORT", 5432)?,
                &required(&get, "DB_USER")?,
                &required(&get, "DB_PASSWORD")?,
                &required(&get, "DB_NAME")?,
            ),
        }
        .with_pool_size(
            parse_or(
                &get,
                "DB_MIN_CONNECTIONS",
                DatabaseConfig::DEFAULT_MIN_CONNECTIONS,
            )?,
            parse_or(
                &get,
                "DB_MAX_CONNECTIONS",
                DatabaseConfig::DEFAULT_MAX_CONNECTIONS,
            )?,
        );

        let defaults = ValidationLimits::default();
        let limits = ValidationLimits {
            max_title_length: parse_or(&get, "MAX_TITLE_LENGTH", defaults.max_title_length)?,
            max_content_length: parse_or(
                &get,
                "MAX_CONTENT_LENGTH",
                defaults.max_content_length,
            )?,
        };

        Ok(Self {
            build,
            host: get("HOST")
                .filter(|h| !h.is_empty())
                .unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database,
            limits,
        })
    }
}

/// A variable that must be present and non-empty.
fn required<F>(get: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    get(key)
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::Missing(key))
}

fn parse_required<F, T>(get: &F, key: &'static str) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    let raw = required(get, key)?;
    raw.parse()
        .map_err(|_| ConfigError::Invalid { key, value: raw })
}

fn parse_or<F, T>(get: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
{
    match get(key).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}
