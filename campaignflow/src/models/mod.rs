//! Read-only records supplied by the backend.

mod campaign;
mod profile;

pub use campaign::{Campaign, CampaignStats, CampaignStatus};
pub use profile::{parse_profiles, CommunityProfile};
