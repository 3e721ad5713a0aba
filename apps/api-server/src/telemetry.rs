//! Tracing initialization.

use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Telemetry configuration.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    /// Emit JSON lines instead of the pretty human format.
    pub json_logs: bool,
}

impl TelemetryConfig {
    /// `LOG_FORMAT` wins when set; otherwise production builds log JSON.
    ///
    /// Read before [`crate::config::AppConfig`] so config errors are logged too.
    pub fn from_env() -> Self {
        let json_logs = match std::env::var("LOG_FORMAT") {
            Ok(format) => format.eq_ignore_ascii_case("json"),
            Err(_) => std::env::var("BUILD")
                .map(|b| b.to_ascii_lowercase().starts_with("prod"))
                .unwrap_or(false),
        };

        Self { json_logs }
    }
}

pub fn init_telemetry(config: &TelemetryConfig) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,api_server=debug,blog_infra=debug"));

    if config.json_logs {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().pretty())
            .init();
    }

    tracing::debug!(json_logs = config.json_logs, "Telemetry initialized");
}
