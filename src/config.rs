//! Environment configuration for the command-line application.

use std::env;
use std::path::PathBuf;

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Tracing setup.
    pub telemetry: TelemetryConfig,
    /// Catalog document to use instead of the standard catalog.
    pub catalog_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TelemetryConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset.
    pub log_level: String,
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("CREW_CATALOG must not be empty when set")]
    EmptyCatalogPath,
}

impl AppConfig {
    /// Loads `.env` (if present) and reads `CREW_LOG_LEVEL` and `CREW_CATALOG`.
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let log_level = env::var("CREW_LOG_LEVEL")
            .map(|v| v.trim().to_string())
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "info".to_string());

        let catalog_path = match env::var("CREW_CATALOG") {
            Ok(raw) if raw.trim().is_empty() => return Err(ConfigError::EmptyCatalogPath),
            Ok(raw) => Some(PathBuf::from(raw.trim())),
            Err(_) => None,
        };

        Ok(Self {
            telemetry: TelemetryConfig { log_level },
            catalog_path,
        })
    }
}

/// Serializes tests that mutate process environment variables.
#[cfg(test)]
pub(crate) fn env_guard() -> &'static std::sync::Mutex<()> {
    use std::sync::{Mutex, OnceLock};

    static GUARD: OnceLock<Mutex<()>> = OnceLock::new();
    GUARD.get_or_init(|| Mutex::new(()))
}
