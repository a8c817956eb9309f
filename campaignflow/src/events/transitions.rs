//! Stage transitions between two campaign snapshots.

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use super::EventSink;
use crate::core::StageId;
use crate::models::{Campaign, CommunityProfile};
use crate::stages::{compute_stages, Stage};

/// What changed about a stage between two snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionKind {
    /// The completion predicate started holding.
    Completed,
    /// The completion predicate stopped holding.
    Regressed,
    /// The stage became the one in progress.
    Activated,
    /// An already completed stage became reachable.
    Unlocked,
}

impl TransitionKind {
    /// Event name under which the transition is emitted.
    #[must_use]
    pub const fn event_type(self) -> &'static str {
        match self {
            Self::Completed => "stage.completed",
            Self::Regressed => "stage.regressed",
            Self::Activated => "stage.activated",
            Self::Unlocked => "stage.unlocked",
        }
    }
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.event_type())
    }
}

/// A single stage transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTransition {
    /// Unique event id.
    pub id: Uuid,
    /// When the transition was observed.
    pub observed_at: DateTime<Utc>,
    /// Campaign the stage belongs to.
    pub campaign_id: String,
    /// The stage that changed.
    pub stage_id: StageId,
    /// What changed.
    pub kind: TransitionKind,
    /// Stage URL after the change.
    pub url: String,
}

impl StageTransition {
    fn new(campaign_id: &str, stage: &Stage, kind: TransitionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            observed_at: Utc::now(),
            campaign_id: campaign_id.to_string(),
            stage_id: stage.id,
            kind,
            url: stage.url.clone(),
        }
    }

    /// Event payload sent to sinks.
    #[must_use]
    pub fn to_event_data(&self) -> serde_json::Value {
        serde_json::json!({
            "event_id": self.id.to_string(),
            "observed_at": self.observed_at.to_rfc3339(),
            "campaign_id": self.campaign_id,
            "stage_id": self.stage_id.as_u8(),
            "stage_name": self.stage_id.name(),
            "url": self.url,
        })
    }
}

/// Compares two stage arrays of the same campaign.
///
/// Each stage contributes at most one transition. Completion changes win
/// over activation; `Unlocked` is only reported for a completed stage whose
/// predecessor was just completed.
#[must_use]
pub fn diff_stages(
    campaign_id: &str,
    previous: &[Stage; 4],
    current: &[Stage; 4],
) -> Vec<StageTransition> {
    previous
        .iter()
        .zip(current.iter())
        .filter_map(|(before, after)| {
            let kind = if !before.completed && after.completed {
                TransitionKind::Completed
            } else if before.completed && !after.completed {
                TransitionKind::Regressed
            } else if !before.active && after.active {
                TransitionKind::Activated
            } else if before.locked && !after.locked {
                TransitionKind::Unlocked
            } else {
                return None;
            };
            Some(StageTransition::new(campaign_id, after, kind))
        })
        .collect()
}

/// Tracks the last stage snapshot per campaign and emits transitions.
///
/// One snapshot is kept for every campaign ever observed; the map only
/// shrinks through [`StageTracker::forget`]. Long-lived trackers should call
/// it when a campaign is archived or deleted.
pub struct StageTracker {
    sink: Arc<dyn EventSink>,
    snapshots: Mutex<HashMap<String, [Stage; 4]>>,
}

impl fmt::Debug for StageTracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StageTracker")
            .field("campaigns", &self.snapshots.lock().len())
            .finish_non_exhaustive()
    }
}

impl StageTracker {
    /// Creates a tracker that emits to the given sink.
    #[must_use]
    pub fn new(sink: Arc<dyn EventSink>) -> Self {
        Self {
            sink,
            snapshots: Mutex::new(HashMap::new()),
        }
    }

    /// Creates a tracker that emits to the global sink.
    #[must_use]
    pub fn with_global_sink() -> Self {
        Self::new(super::get_event_sink())
    }

    /// Records a snapshot and returns transitions since the previous one.
    ///
    /// The first snapshot of a campaign only seeds the tracker.
    pub fn record(
        &self,
        campaign: &Campaign,
        profiles: &[CommunityProfile],
    ) -> Vec<StageTransition> {
        let stages = compute_stages(campaign, profiles);
        let previous = self.snapshots.lock().insert(campaign.id.clone(), stages.clone());

        let transitions = previous
            .map(|previous| diff_stages(&campaign.id, &previous, &stages))
            .unwrap_or_default();

        debug!(
            campaign_id = %campaign.id,
            transitions = transitions.len(),
            "Recorded campaign snapshot"
        );
        transitions
    }

    /// Records a snapshot and emits transitions without blocking.
    pub fn observe(
        &self,
        campaign: &Campaign,
        profiles: &[CommunityProfile],
    ) -> Vec<StageTransition> {
        let transitions = self.record(campaign, profiles);
        for transition in &transitions {
            self.sink
                .try_emit(transition.kind.event_type(), Some(transition.to_event_data()));
        }
        transitions
    }

    /// Records a snapshot and awaits delivery of each transition.
    pub async fn observe_async(
        &self,
        campaign: &Campaign,
        profiles: &[CommunityProfile],
    ) -> Vec<StageTransition> {
        let transitions = self.record(campaign, profiles);
        for transition in &transitions {
            self.sink
                .emit(transition.kind.event_type(), Some(transition.to_event_data()))
                .await;
        }
        transitions
    }

    /// Returns the last recorded stages for a campaign.
    #[must_use]
    pub fn last_stages(&self, campaign_id: &str) -> Option<[Stage; 4]> {
        self.snapshots.lock().get(campaign_id).cloned()
    }

    /// Drops the stored snapshot for a campaign.
    pub fn forget(&self, campaign_id: &str) -> bool {
        self.snapshots.lock().remove(campaign_id).is_some()
    }
}
