//! Review surface: styled spans, line diffing, terminal plumbing.
//!
//! The surface renders whole frames of [`Line`]s and lets [`Screen`] work
//! out the minimal ANSI between consecutive frames. Nothing here knows
//! about stories or reveals; the `view` module composes frames, this module
//! gets them onto the terminal without flicker.

mod screen;
mod span;
mod style;
mod term;

pub use screen::{FlushStats, Screen};
pub use span::{Line, Span};
pub use style::{Modifiers, Rgb, Style, Theme};
pub use term::TermGuard;
