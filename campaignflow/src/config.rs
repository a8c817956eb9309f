//! Engine configuration.
//!
//! Only ambient behaviour is configurable: log filtering and format, and
//! whether stage transitions are emitted. Stage predicates and routes are
//! fixed.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::errors::{CampaignflowError, Result};

/// Environment variable holding the tracing filter directive.
pub const ENV_LOG: &str = "CAMPAIGNFLOW_LOG";
/// Environment variable selecting `text` or `json` log output.
pub const ENV_LOG_FORMAT: &str = "CAMPAIGNFLOW_LOG_FORMAT";
/// Environment variable toggling transition events.
pub const ENV_EMIT_EVENTS: &str = "CAMPAIGNFLOW_EMIT_EVENTS";

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = CampaignflowError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CampaignflowError::config(format!(
                "log format must be text or json, got '{other}'"
            ))),
        }
    }
}

/// Configuration for the stage engine's ambient behaviour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Tracing filter directive, e.g. `campaignflow=debug`.
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
    /// Log output format.
    #[serde(default)]
    pub log_format: LogFormat,
    /// Whether stage transitions are emitted to the event sink.
    #[serde(default = "default_emit_events")]
    pub emit_events: bool,
}

fn default_log_filter() -> String {
    "campaignflow=info".to_string()
}

const fn default_emit_events() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter(),
            log_format: LogFormat::default(),
            emit_events: default_emit_events(),
        }
    }
}

impl EngineConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the log filter.
    #[must_use]
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Sets the log format.
    #[must_use]
    pub fn with_log_format(mut self, format: LogFormat) -> Self {
        self.log_format = format;
        self
    }

    /// Enables or disables transition events.
    #[must_use]
    pub fn with_emit_events(mut self, emit: bool) -> Self {
        self.emit_events = emit;
        self
    }

    /// Loads configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Loads configuration through a key lookup, falling back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(filter) = lookup(ENV_LOG) {
            config.log_filter = filter;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.log_format = format.parse()?;
        }
        if let Some(emit) = lookup(ENV_EMIT_EVENTS) {
            config.emit_events = parse_bool(ENV_EMIT_EVENTS, &emit)?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Parses configuration from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Checks that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.log_filter.trim().is_empty() {
            return Err(CampaignflowError::config("log filter must not be empty"));
        }
        Ok(())
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(CampaignflowError::config(format!(
            "{key} must be a boolean, got '{other}'"
        ))),
    }
}
