//! Tracing initialization
//!
//! One `tracing-subscriber` registry per process: an `EnvFilter` (from `RUST_LOG`, defaulting
//! to `giftbox=debug,tower_http=debug`) and a fmt layer, human-readable in development and
//! JSON in production.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const DEFAULT_FILTER: &str = "giftbox=debug,tower_http=debug";

/// Output format of the fmt layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Pretty,
    Json,
}

impl LogFormat {
    /// JSON in production, pretty everywhere else.
    pub fn for_environment(environment: &str) -> Self {
        match environment.to_lowercase().as_str() {
            "production" | "prod" => LogFormat::Json,
            _ => LogFormat::Pretty,
        }
    }
}

/// Install the global subscriber. Fails if one is already installed.
pub fn init_telemetry(
    service_name: &str,
    environment: &str,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    let format = LogFormat::for_environment(environment);

    match format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()?,
        LogFormat::Pretty => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init()?,
    }

    tracing::info!(
        service = service_name,
        environment = environment,
        format = ?format,
        "Tracing initialized"
    );
    Ok(())
}

pub async fn shutdown_telemetry() {
    tracing::debug!("Telemetry shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_for_environment() {
        assert_eq!(LogFormat::for_environment("production"), LogFormat::Json);
        assert_eq!(LogFormat::for_environment("PROD"), LogFormat::Json);
        assert_eq!(LogFormat::for_environment("development"), LogFormat::Pretty);
    }
}
