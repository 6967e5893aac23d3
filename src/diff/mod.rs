//! Word diff: tokenization, reveal plans, and diff-markup scanning.
//!
//! This module is the logic core of the crate. Everything in it is pure and
//! deterministic:
//! - [`split_words`]: the (deliberately naive) single-space tokenizer
//! - [`RevealPlan`]: frame-by-frame description of one animation run
//! - [`change_map`]: word → change-kind extraction from agent diff markup
//!
//! Timing lives elsewhere (see [`crate::animate`]); a plan only answers
//! "what does frame `t` look like".

mod markup;
mod plan;
mod words;

pub use markup::{change_map, ChangeKind, ChangeMap};
pub use plan::{Frames, RevealMode, RevealPlan};
pub use words::{split_words, word_count, WordState, WordStatus};
