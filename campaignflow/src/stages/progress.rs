//! Progress summaries over computed stages.

use serde::{Deserialize, Serialize};

use super::{compute_stages, get_current_stage, Stage};
use crate::core::StageId;
use crate::models::{Campaign, CommunityProfile};

/// Compact read model of a campaign's position in the workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignProgress {
    /// Number of completed stages.
    pub completed_count: usize,
    /// Total number of stages.
    pub total: usize,
    /// The stage the campaign is currently on.
    pub current_stage: StageId,
    /// Whether every stage is complete.
    pub is_complete: bool,
    /// `completed_count` as an integer percentage of `total`.
    pub percent_complete: u8,
    /// URL of the current stage.
    pub next_url: String,
}

impl CampaignProgress {
    /// Summarizes a computed stage list.
    #[must_use]
    pub fn from_stages(stages: &[Stage; 4]) -> Self {
        let completed_count = stages.iter().filter(|s| s.completed).count();
        let current_stage = get_current_stage(stages);

        Self {
            completed_count,
            total: StageId::COUNT,
            current_stage,
            is_complete: completed_count == StageId::COUNT,
            percent_complete: u8::try_from(completed_count * 100 / StageId::COUNT)
                .unwrap_or(100),
            next_url: stages[current_stage.index()].url.clone(),
        }
    }
}

/// A campaign's stages bundled with their summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CampaignStages {
    /// The campaign the stages belong to.
    pub campaign_id: String,
    /// The four stages, ascending by id.
    pub stages: [Stage; 4],
    /// Summary of the stages.
    pub progress: CampaignProgress,
}

impl CampaignStages {
    /// Computes stages and progress for a campaign snapshot.
    #[must_use]
    pub fn compute(campaign: &Campaign, profiles: &[CommunityProfile]) -> Self {
        let stages = compute_stages(campaign, profiles);
        let progress = CampaignProgress::from_stages(&stages);

        Self {
            campaign_id: campaign.id.clone(),
            stages,
            progress,
        }
    }

    /// Returns the stage with the given id.
    #[must_use]
    pub const fn stage(&self, id: StageId) -> &Stage {
        &self.stages[id.index()]
    }

    /// Returns the current stage.
    #[must_use]
    pub const fn current(&self) -> &Stage {
        self.stage(self.progress.current_stage)
    }
}
