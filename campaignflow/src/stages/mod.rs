//! The campaign workflow stage engine.
//!
//! Stages are recomputed from scratch on every call from the campaign and
//! profile snapshot the caller supplies. Nothing here performs I/O or keeps
//! state, so the functions can be called from any number of threads.

mod progress;
mod routes;
#[cfg(test)]
mod stages_tests;

pub use progress::{CampaignProgress, CampaignStages};
pub use routes::{campaign_url, get_stage_url, stage_url, CAMPAIGNS_BASE_PATH};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{StageId, StageStatus};
use crate::models::{Campaign, CommunityProfile};

/// A computed workflow stage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stage {
    /// Which stage this is.
    pub id: StageId,
    /// Human-readable name.
    pub name: String,
    /// Short description.
    pub description: String,
    /// Whether the stage's completion predicate holds.
    pub completed: bool,
    /// Whether this is the stage currently in progress.
    pub active: bool,
    /// Whether the predecessor is still incomplete.
    pub locked: bool,
    /// Dashboard URL for the stage.
    pub url: String,
}

impl Stage {
    /// Returns the folded display status.
    #[must_use]
    pub const fn status(&self) -> StageStatus {
        if self.completed {
            StageStatus::Completed
        } else if self.active {
            StageStatus::Active
        } else {
            StageStatus::Locked
        }
    }
}

/// Evaluates the four completion predicates, in stage order.
#[must_use]
pub fn completion_flags(campaign: &Campaign, profiles: &[CommunityProfile]) -> [bool; 4] {
    [
        campaign.has_product_context()
            && !campaign.keywords().is_empty()
            && !campaign.target_subreddits().is_empty(),
        campaign.stats.posts_collected > 0,
        !profiles.is_empty(),
        campaign.stats.drafts_generated > 0,
    ]
}

/// Builds the four stages from completion flags.
///
/// A stage is locked when its predecessor is incomplete and active when its
/// predecessor is complete but it is not. The first stage has no predecessor
/// and counts as unlocked.
#[must_use]
pub fn stages_from_flags(campaign_id: &str, completed: [bool; 4]) -> [Stage; 4] {
    StageId::ALL.map(|id| {
        let done = completed[id.index()];
        let predecessor_done = id.previous().map_or(true, |prev| completed[prev.index()]);

        Stage {
            id,
            name: id.name().to_string(),
            description: id.description().to_string(),
            completed: done,
            active: predecessor_done && !done,
            locked: !predecessor_done,
            url: stage_url(id, campaign_id),
        }
    })
}

/// Derives the workflow stages for a campaign.
///
/// Total over all inputs: empty keyword, subreddit and profile lists simply
/// leave the corresponding stages incomplete.
#[must_use]
pub fn compute_stages(campaign: &Campaign, profiles: &[CommunityProfile]) -> [Stage; 4] {
    let stages = stages_from_flags(&campaign.id, completion_flags(campaign, profiles));

    debug!(
        campaign_id = %campaign.id,
        profiles = profiles.len(),
        current_stage = get_current_stage(&stages).as_u8(),
        "Computed campaign stages"
    );

    stages
}

/// Returns the first active stage, or the last stage when none is active.
#[must_use]
pub fn get_current_stage(stages: &[Stage]) -> StageId {
    stages
        .iter()
        .find(|stage| stage.active)
        .map_or(StageId::Drafting, |stage| stage.id)
}
