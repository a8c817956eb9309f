//! # Campaignflow
//!
//! The workflow stage engine behind the campaign dashboard.
//!
//! Every campaign moves through four fixed stages:
//!
//! 1. **Project Briefing** - product context, keywords and target subreddits
//! 2. **Strategic Selection** - Reddit posts collected
//! 3. **Community Intelligence** - subreddit communities profiled
//! 4. **Alchemical Transmutation** - reply drafts generated
//!
//! Stages are derived on demand from the latest campaign and profile snapshot.
//! A stage is *locked* while its predecessor is incomplete, and every
//! incomplete stage with a complete predecessor is *active*. When later work
//! exists ahead of an unfinished stage more than one stage can be active;
//! [`stages::get_current_stage`] picks the first.
//!
//! ## Quick Start
//!
//! ```rust
//! use campaignflow::prelude::*;
//!
//! let campaign = Campaign::new("c1")
//!     .with_product_context("Our tool helps X")
//!     .with_keywords(["a", "b", "c", "d", "e"])
//!     .with_target_subreddits(["r1"])
//!     .with_stats(CampaignStats::new(3, 0));
//! let profiles = vec![CommunityProfile::new("p1", "r1")];
//!
//! let stages = compute_stages(&campaign, &profiles);
//! assert_eq!(get_current_stage(&stages), StageId::Drafting);
//! assert_eq!(get_stage_url(1, "c1"), "/dashboard/campaigns/c1/edit");
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod config;
pub mod core;
pub mod errors;
pub mod events;
pub mod models;
pub mod observability;
pub mod stages;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{EngineConfig, LogFormat};
    pub use crate::core::{StageId, StageStatus};
    pub use crate::errors::{CampaignflowError, InvalidStageIdError};
    pub use crate::events::{
        diff_stages, EventSink, LoggingEventSink, NoOpEventSink, StageTracker, StageTransition,
        TransitionKind,
    };
    pub use crate::models::{
        parse_profiles, Campaign, CampaignStats, CampaignStatus, CommunityProfile,
    };
    pub use crate::stages::{
        campaign_url, compute_stages, get_current_stage, get_stage_url, CampaignProgress,
        CampaignStages, Stage,
    };
}
