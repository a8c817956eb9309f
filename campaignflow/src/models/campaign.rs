//! Campaign record as returned by the backend's campaign-with-stats endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::Result;

/// Lifecycle status of a campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignStatus {
    /// The campaign is running.
    #[default]
    Active,
    /// The campaign is paused by its owner.
    Paused,
    /// The campaign is archived and read-only.
    Archived,
}

impl fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Paused => write!(f, "paused"),
            Self::Archived => write!(f, "archived"),
        }
    }
}

/// Aggregated counters attached to a campaign.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignStats {
    /// Number of Reddit posts collected so far.
    #[serde(default)]
    pub posts_collected: u64,
    /// Number of reply drafts generated so far.
    #[serde(default)]
    pub drafts_generated: u64,
    /// Number of active monitors.
    #[serde(default)]
    pub active_monitors: u64,
}

impl CampaignStats {
    /// Creates stats with the two counters the workflow reads.
    #[must_use]
    pub const fn new(posts_collected: u64, drafts_generated: u64) -> Self {
        Self {
            posts_collected,
            drafts_generated,
            active_monitors: 0,
        }
    }
}

/// A marketing campaign.
///
/// Only `id`, `product_context`, `keywords`, `target_subreddits` and `stats`
/// drive stage completion; the remaining fields are carried for callers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Campaign {
    /// Campaign identifier.
    pub id: String,
    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// What the product does, in the owner's words.
    #[serde(default)]
    pub product_context: Option<String>,
    /// Product landing page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product_url: Option<String>,
    /// Search keywords, in the order entered.
    #[serde(default)]
    pub keywords: Option<Vec<String>>,
    /// Subreddits to search, in the order entered.
    #[serde(default)]
    pub target_subreddits: Option<Vec<String>>,
    /// Lifecycle status.
    #[serde(default)]
    pub status: CampaignStatus,
    /// Aggregated counters. A missing object decodes as zeros.
    #[serde(default)]
    pub stats: CampaignStats,
    /// Creation time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Last update time.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Campaign {
    /// Creates an empty campaign with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Decodes a campaign from the backend's JSON payload.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Decodes a campaign from an already-parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Sets the product context.
    #[must_use]
    pub fn with_product_context(mut self, context: impl Into<String>) -> Self {
        self.product_context = Some(context.into());
        self
    }

    /// Sets the keywords.
    #[must_use]
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = Some(keywords.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the target subreddits.
    #[must_use]
    pub fn with_target_subreddits<I, S>(mut self, subreddits: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.target_subreddits = Some(subreddits.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the stats.
    #[must_use]
    pub fn with_stats(mut self, stats: CampaignStats) -> Self {
        self.stats = stats;
        self
    }

    /// Returns the keywords, empty when absent.
    #[must_use]
    pub fn keywords(&self) -> &[String] {
        self.keywords.as_deref().unwrap_or_default()
    }

    /// Returns the target subreddits, empty when absent.
    #[must_use]
    pub fn target_subreddits(&self) -> &[String] {
        self.target_subreddits.as_deref().unwrap_or_default()
    }

    /// Returns true when the product context is present and non-empty.
    #[must_use]
    pub fn has_product_context(&self) -> bool {
        self.product_context.as_deref().is_some_and(|c| !c.is_empty())
    }
}
