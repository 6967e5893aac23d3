//! Views: pure layout from state to lines.
//!
//! Both views are side-effect free. [`StoryView`] turns a snapshot plus the
//! current word table into the story pane; [`InterruptPrompt`] renders the
//! confirm/cancel block. The session stacks their output and hands the
//! result to the screen.

mod prompt;
mod story;

pub use prompt::InterruptPrompt;
pub use story::{StoryView, PLACEHOLDER};
