//! Test assertions for computed stages.

use crate::core::StageStatus;
use crate::stages::Stage;

/// Asserts a stage's `completed`, `active` and `locked` flags.
pub fn assert_stage_flags(stage: &Stage, completed: bool, active: bool, locked: bool) {
    assert_eq!(
        (stage.completed, stage.active, stage.locked),
        (completed, active, locked),
        "Stage {} flags (completed, active, locked) mismatch",
        stage.id
    );
}

/// Asserts a stage's folded status.
pub fn assert_stage_status(stage: &Stage, expected: StageStatus) {
    assert_eq!(
        stage.status(),
        expected,
        "Expected stage {} to be {}, got {}",
        stage.id,
        expected,
        stage.status()
    );
}

/// Asserts that exactly one stage is active.
pub fn assert_single_active(stages: &[Stage]) {
    let active: Vec<_> = stages.iter().filter(|s| s.active).map(|s| s.id).collect();
    assert_eq!(
        active.len(),
        1,
        "Expected exactly one active stage, got {:?}",
        active
    );
}

/// Asserts that stages are in ascending id order.
pub fn assert_ascending(stages: &[Stage]) {
    assert!(
        stages.windows(2).all(|w| w[0].id < w[1].id),
        "Expected ascending stage ids, got {:?}",
        stages.iter().map(|s| s.id).collect::<Vec<_>>()
    );
}
