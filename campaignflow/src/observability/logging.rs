//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::{EngineConfig, LogFormat};
use crate::errors::{CampaignflowError, Result};

/// Parses the configured filter directive.
pub fn build_filter(config: &EngineConfig) -> Result<EnvFilter> {
    EnvFilter::try_new(&config.log_filter).map_err(|e| {
        CampaignflowError::config(format!("invalid log filter '{}': {e}", config.log_filter))
    })
}

/// Installs a global subscriber for the configured format.
///
/// Returns `Ok(false)` when another subscriber is already installed; the
/// existing one is left in place.
pub fn init_tracing(config: &EngineConfig) -> Result<bool> {
    let filter = build_filter(config)?;

    let installed = match config.log_format {
        LogFormat::Json => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .try_init(),
        LogFormat::Text => tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .try_init(),
    };

    Ok(installed.is_ok())
}
