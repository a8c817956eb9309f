//! Stage identity and display status enums.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::InvalidStageIdError;

/// One of the four fixed steps of the campaign workflow.
///
/// Serialized as its bare numeric id (`1..=4`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum StageId {
    /// Project briefing: product context, keywords and target subreddits.
    Briefing,
    /// Strategic selection: collecting candidate posts.
    Selection,
    /// Community intelligence: analyzed subreddit profiles.
    Intelligence,
    /// Alchemical transmutation: generating reply drafts.
    Drafting,
}

impl StageId {
    /// All stages in workflow order.
    pub const ALL: [Self; 4] = [
        Self::Briefing,
        Self::Selection,
        Self::Intelligence,
        Self::Drafting,
    ];

    /// Number of stages in the workflow.
    pub const COUNT: usize = 4;

    /// Returns the numeric id (1-based).
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        match self {
            Self::Briefing => 1,
            Self::Selection => 2,
            Self::Intelligence => 3,
            Self::Drafting => 4,
        }
    }

    /// Returns the zero-based position in the workflow.
    #[must_use]
    pub const fn index(self) -> usize {
        self.as_u8() as usize - 1
    }

    /// Looks up a stage by numeric id, returning `None` outside `1..=4`.
    #[must_use]
    pub const fn from_id(id: i64) -> Option<Self> {
        match id {
            1 => Some(Self::Briefing),
            2 => Some(Self::Selection),
            3 => Some(Self::Intelligence),
            4 => Some(Self::Drafting),
            _ => None,
        }
    }

    /// Human-readable stage name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Briefing => "Project Briefing",
            Self::Selection => "Strategic Selection",
            Self::Intelligence => "Community Intelligence",
            Self::Drafting => "Alchemical Transmutation",
        }
    }

    /// Short description shown under the stage name.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::Briefing => "Define your product context, keywords and target subreddits",
            Self::Selection => "Collect and filter relevant Reddit posts",
            Self::Intelligence => "Analyze community patterns and behavior",
            Self::Drafting => "Generate community-native reply drafts",
        }
    }

    /// Path segment below the campaign detail route.
    #[must_use]
    pub const fn url_segment(self) -> &'static str {
        match self {
            Self::Briefing => "edit",
            Self::Selection => "collect",
            Self::Intelligence => "profiles",
            Self::Drafting => "drafts/new",
        }
    }

    /// Returns the following stage, if any.
    #[must_use]
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Briefing => Some(Self::Selection),
            Self::Selection => Some(Self::Intelligence),
            Self::Intelligence => Some(Self::Drafting),
            Self::Drafting => None,
        }
    }

    /// Returns the preceding stage, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        match self {
            Self::Briefing => None,
            Self::Selection => Some(Self::Briefing),
            Self::Intelligence => Some(Self::Selection),
            Self::Drafting => Some(Self::Intelligence),
        }
    }

    /// Returns true for the last stage of the workflow.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Drafting)
    }
}

impl From<StageId> for u8 {
    fn from(id: StageId) -> Self {
        id.as_u8()
    }
}

impl TryFrom<u8> for StageId {
    type Error = InvalidStageIdError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_id(i64::from(value)).ok_or_else(|| InvalidStageIdError::new(i64::from(value)))
    }
}

impl TryFrom<i64> for StageId {
    type Error = InvalidStageIdError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::from_id(value).ok_or_else(|| InvalidStageIdError::new(value))
    }
}

impl fmt::Display for StageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}. {}", self.as_u8(), self.name())
    }
}

/// Display status of a stage, folded from its three flags.
///
/// Precedence is `completed`, then `active`, then `locked`. A stage can be
/// both completed and locked when later work exists but an earlier stage was
/// left unfinished; it reports as `Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    /// The stage's completion predicate holds.
    Completed,
    /// The stage is the one currently in progress.
    Active,
    /// The predecessor is not complete yet.
    Locked,
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => write!(f, "completed"),
            Self::Active => write!(f, "active"),
            Self::Locked => write!(f, "locked"),
        }
    }
}
