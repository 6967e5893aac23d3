//! # Redraft
//!
//! A word-diff reveal engine with a flicker-free terminal review surface.
//!
//! Redraft animates the difference between two revisions of a text word by
//! word: fresh drafts stream in one word per tick, while edits sweep a
//! highlight across the aligned word tables and leave every changed
//! position visibly flagged until the user confirms or cancels the
//! revision.
//!
//! ## Core Concepts
//!
//! - **Reveal plans**: deterministic, timing-free frame sequences computed
//!   from an old/new text pair
//! - **Animation runs**: one dedicated tick thread per reveal, cancelled and
//!   replaced the moment newer text arrives
//! - **Line diffing**: the screen re-emits only rows that changed between
//!   frames, with SGR state tracked across the whole flush
//! - **Agent boundary**: state snapshots in, `"Confirm"`/`"Cancel"` out, no
//!   transport assumptions
//!
//! ## Example
//!
//! ```rust
//! use redraft::{RevealPlan, WordStatus};
//!
//! let plan = RevealPlan::new("a quiet fox", "a sly fox", true);
//! let last = plan.last_frame();
//!
//! assert_eq!(last[1].old_word, "quiet");
//! assert_eq!(last[1].new_word, "sly");
//! assert_eq!(last[1].status, WordStatus::Mismatched);
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod agent;
pub mod animate;
pub mod diff;
pub mod input;
pub mod session;
pub mod state;
pub mod surface;
pub mod view;

// Re-exports for convenience
pub use agent::{AgentEvent, AgentHandle, AgentPort};
pub use animate::{AnimationRun, Frame, WordAnimator, DEFAULT_TICK_INTERVAL};
pub use diff::{change_map, ChangeKind, ChangeMap, RevealMode, RevealPlan, WordState, WordStatus};
pub use input::{InputEvent, InputReader};
pub use session::{ReviewSession, SessionConfig};
pub use state::{Resolution, ReviewPhase, StoryContent, StorySnapshot};
pub use surface::{Line, Modifiers, Rgb, Screen, Span, Style, TermGuard, Theme};
pub use view::{InterruptPrompt, StoryView};
