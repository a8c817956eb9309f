//! Testing utilities for campaign stages.
//!
//! This module provides:
//! - A campaign snapshot builder and profile fixtures
//! - Assertions over computed stage flags

mod assertions;
mod fixtures;

pub use assertions::{
    assert_ascending, assert_single_active, assert_stage_flags, assert_stage_status,
};
pub use fixtures::{profiles_for, CampaignBuilder};
