//! Timer-driven word reveals.
//!
//! This module pairs the pure reveal plans from [`crate::diff`] with wall
//! clock pacing. [`AnimationRun`] plays one plan on a dedicated thread and
//! delivers frames over a private channel; [`WordAnimator`] owns at most one
//! run and swaps it atomically whenever new text arrives.

mod animator;
mod run;

pub use animator::WordAnimator;
pub use run::{AnimationRun, Frame, DEFAULT_TICK_INTERVAL};
