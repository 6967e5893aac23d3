//! Agent state: the shared snapshot exchanged with the drafting runtime.
//!
//! The remote drafting agent owns the canonical state; this crate only
//! renders it. A [`StorySnapshot`] is the flattened, already-decoded form of
//! that state. Every nested field the runtime may omit or null out is an
//! `Option` here; absence is handled at the read site, never papered over.
//!
//! The interrupt protocol is two bare strings: an interrupt resolves to
//! exactly `"Confirm"` or `"Cancel"` ([`Resolution`]).

use serde::{Deserialize, Serialize};

/// Story content and metadata produced by the drafting agent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryContent {
    /// Story title.
    #[serde(default)]
    pub title: String,
    /// Full story text.
    #[serde(default)]
    pub story: String,
    /// Genre label.
    #[serde(default)]
    pub genre: String,
    /// One-paragraph summary.
    #[serde(default)]
    pub summary: String,
}

/// One shared-state snapshot from the drafting agent.
///
/// Field names match the runtime's wire form, so a snapshot deserializes
/// straight out of a state-update payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StorySnapshot {
    /// The user prompt the agent is working from.
    #[serde(default)]
    pub input: String,
    /// Current revision, absent until the agent has drafted one.
    #[serde(default)]
    pub story_content: Option<StoryContent>,
    /// Revision being replaced, absent on first generation.
    #[serde(default)]
    pub previous_story_content: Option<StoryContent>,
    /// True while the agent is paused on a human approval.
    #[serde(default)]
    pub pending_confirmation: bool,
    /// True when the current revision edits the previous one (vs. a fresh
    /// generation).
    #[serde(default)]
    pub is_edit: bool,
    /// Optional HTML diff fragment (see [`crate::diff::change_map`]).
    #[serde(default)]
    pub diff_markup: Option<String>,
}

impl StorySnapshot {
    /// Decode a snapshot from a state-update JSON payload.
    pub fn from_json(payload: &str) -> serde_json::Result<Self> {
        serde_json::from_str(payload)
    }

    /// Current story text, or "" when no revision exists yet.
    pub fn story_text(&self) -> &str {
        self.story_content.as_ref().map_or("", |c| c.story.as_str())
    }

    /// Previous story text, or "" when there is no previous revision.
    pub fn previous_story_text(&self) -> &str {
        self.previous_story_content
            .as_ref()
            .map_or("", |c| c.story.as_str())
    }

    /// Which review phase this snapshot is in.
    pub const fn phase(&self) -> ReviewPhase {
        if self.pending_confirmation {
            if self.is_edit {
                ReviewPhase::AwaitingEditConfirmation
            } else {
                ReviewPhase::AwaitingConfirmation
            }
        } else {
            ReviewPhase::FinalVersion
        }
    }
}

/// Review phase derived from a snapshot, shown as the header chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReviewPhase {
    /// A fresh generation awaits approval.
    AwaitingConfirmation,
    /// An edit awaits approval.
    AwaitingEditConfirmation,
    /// Nothing pending; the shown revision is settled.
    FinalVersion,
}

impl std::fmt::Display for ReviewPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingConfirmation => write!(f, "Awaiting confirmation"),
            Self::AwaitingEditConfirmation => write!(f, "Awaiting edit confirmation"),
            Self::FinalVersion => write!(f, "Final version"),
        }
    }
}

/// The two resolutions an agent interrupt accepts.
///
/// The wire form is the bare variant name: `"Confirm"` or `"Cancel"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Accept the pending revision.
    Confirm,
    /// Reject the pending revision.
    Cancel,
}

impl Resolution {
    /// The exact string the runtime expects.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Confirm => "Confirm",
            Self::Cancel => "Cancel",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Resolution {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Confirm" => Ok(Self::Confirm),
            "Cancel" => Ok(Self::Cancel),
            _ => Err(format!("invalid resolution: {s}")),
        }
    }
}
