//! Core domain types for campaignflow.
//!
//! This module contains the fixed vocabulary of the workflow:
//! - Stage identity with its static name, description and route segment
//! - The folded display status of a computed stage

mod status;

pub use status::{StageId, StageStatus};
