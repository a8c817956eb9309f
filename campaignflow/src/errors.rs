//! Error types for the campaignflow crate.
//!
//! The stage engine itself is total and never returns an error. Everything
//! here belongs to the edges: decoding backend payloads, converting raw
//! stage ids and loading configuration.

use thiserror::Error;

/// Convenience result alias.
pub type Result<T> = std::result::Result<T, CampaignflowError>;

/// The main error type for campaignflow operations.
#[derive(Debug, Error)]
pub enum CampaignflowError {
    /// A numeric stage id outside `1..=4`.
    #[error("{0}")]
    InvalidStageId(#[from] InvalidStageIdError),

    /// A configuration value could not be accepted.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CampaignflowError {
    /// Creates a configuration error.
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Returns a stable, machine-readable code for the error.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::InvalidStageId(_) => "INVALID_STAGE_ID",
            Self::Config(_) => "CONFIG_ERROR",
            Self::Serialization(_) => "VALIDATION_ERROR",
            Self::Io(_) => "INTERNAL_ERROR",
        }
    }
}

/// Error raised when an integer does not name one of the four stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Invalid stage id {value}: expected 1..=4")]
pub struct InvalidStageIdError {
    /// The rejected value.
    pub value: i64,
}

impl InvalidStageIdError {
    /// Creates a new invalid stage id error.
    #[must_use]
    pub const fn new(value: i64) -> Self {
        Self { value }
    }
}
