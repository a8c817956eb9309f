//! Community profile record produced by subreddit analysis.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// An analyzed subreddit community associated with a campaign.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CommunityProfile {
    /// Profile identifier.
    pub id: String,
    /// Subreddit name.
    pub subreddit: String,
    /// Owning campaign.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub campaign_id: Option<String>,
    /// Community sensitivity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isc_score: Option<f64>,
    /// Tier label derived from the sensitivity score.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub isc_tier: Option<String>,
    /// Number of posts the profile was built from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sample_size: Option<u64>,
    /// When the community was last analyzed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_analyzed_at: Option<DateTime<Utc>>,
}

impl CommunityProfile {
    /// Creates a profile with only the identifying fields.
    #[must_use]
    pub fn new(id: impl Into<String>, subreddit: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            subreddit: subreddit.into(),
            ..Default::default()
        }
    }

    /// Sets the owning campaign.
    #[must_use]
    pub fn with_campaign_id(mut self, campaign_id: impl Into<String>) -> Self {
        self.campaign_id = Some(campaign_id.into());
        self
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum ProfileListPayload {
    Wrapped { profiles: Vec<CommunityProfile> },
    Bare(Vec<CommunityProfile>),
}

/// Decodes a profile list, accepting both `[...]` and `{"profiles": [...]}`.
pub fn parse_profiles(json: &str) -> Result<Vec<CommunityProfile>> {
    let payload: ProfileListPayload = serde_json::from_str(json)?;
    Ok(match payload {
        ProfileListPayload::Wrapped { profiles } | ProfileListPayload::Bare(profiles) => profiles,
    })
}
