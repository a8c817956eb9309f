//! Dashboard routes for campaign stages.

use crate::core::StageId;

/// Route prefix of the campaign detail pages.
pub const CAMPAIGNS_BASE_PATH: &str = "/dashboard/campaigns";

/// Returns the campaign's detail URL.
#[must_use]
pub fn campaign_url(campaign_id: &str) -> String {
    format!("{CAMPAIGNS_BASE_PATH}/{campaign_id}")
}

/// Returns the canonical URL of a stage for a campaign.
#[must_use]
pub fn stage_url(stage: StageId, campaign_id: &str) -> String {
    format!(
        "{CAMPAIGNS_BASE_PATH}/{campaign_id}/{}",
        stage.url_segment()
    )
}

/// Returns the URL for a raw stage id.
///
/// Ids outside `1..=4` fall back to the campaign detail URL.
#[must_use]
pub fn get_stage_url(stage_id: i64, campaign_id: &str) -> String {
    StageId::from_id(stage_id).map_or_else(
        || campaign_url(campaign_id),
        |stage| stage_url(stage, campaign_id),
    )
}
