//! Reveal Plan: the deterministic core of the word-diff animation.
//!
//! A [`RevealPlan`] is built once per incoming revision and then asked for
//! frames. It is pure (no timers, no channels), which is what makes the
//! animation contract testable: frame `t` is a function of the inputs and
//! `t` alone, so re-running a cancelled plan reproduces the identical
//! sequence.
//!
//! Two policies exist, chosen at construction:
//!
//! 1. **Append** (first generation, or a non-edit regeneration): each tick
//!    reveals one more word of the new text, always `Normal`. The run is
//!    `len(new_words)` ticks long.
//! 2. **Compare** (an edit with a previous revision): every position is laid
//!    out immediately, then a wave sweeps left to right. Tick `i` marks
//!    position `i` as `Animating` when the old and new words match, or
//!    `Mismatched` when they differ, and settles position `i-1` back to
//!    `Normal`, unless it was `Mismatched`, which latches for the rest of
//!    the run. The run is `max(len(old), len(new))` ticks long, and the wave
//!    parks on the final position when it ends.

use super::words::{split_words, WordState, WordStatus};

/// Which reveal policy a plan uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealMode {
    /// Reveal the new text one word per tick; no previous revision shown.
    Append,
    /// Index-aligned comparison sweep over old and new words.
    Compare,
}

/// A deterministic, timing-free description of one animation run.
#[derive(Debug, Clone)]
pub struct RevealPlan {
    /// Index-aligned word table. Append plans hold only the new words.
    words: Vec<WordState>,
    /// Reveal policy.
    mode: RevealMode,
    /// Total number of ticks in the run.
    steps: usize,
}

impl RevealPlan {
    /// Build a plan for a new revision.
    ///
    /// `previous_text` empty, or `is_edit == false`, selects the append
    /// policy; otherwise the compare policy. Both texts empty produces a
    /// zero-step plan (nothing to animate, nothing to crash on).
    pub fn new(previous_text: &str, new_text: &str, is_edit: bool) -> Self {
        let old_words = split_words(previous_text);
        let new_words = split_words(new_text);

        if old_words.is_empty() || !is_edit {
            let words = new_words.iter().map(|w| WordState::revealed(w)).collect();
            return Self {
                words,
                mode: RevealMode::Append,
                steps: new_words.len(),
            };
        }

        let max_steps = old_words.len().max(new_words.len());
        let words = (0..max_steps)
            .map(|i| {
                WordState::aligned(
                    old_words.get(i).copied().unwrap_or(""),
                    new_words.get(i).copied().unwrap_or(""),
                )
            })
            .collect();

        Self {
            words,
            mode: RevealMode::Compare,
            steps: max_steps,
        }
    }

    /// The reveal policy this plan follows.
    #[inline]
    pub const fn mode(&self) -> RevealMode {
        self.mode
    }

    /// Total number of ticks in the run.
    #[inline]
    pub const fn steps(&self) -> usize {
        self.steps
    }

    /// Number of word positions in the aligned table.
    #[inline]
    pub fn positions(&self) -> usize {
        self.words.len()
    }

    /// The frame shown before the first tick fires.
    ///
    /// Append plans start blank; compare plans lay out every position
    /// immediately with status `Normal`.
    pub fn initial_frame(&self) -> Vec<WordState> {
        match self.mode {
            RevealMode::Append => Vec::new(),
            RevealMode::Compare => self.words.clone(),
        }
    }

    /// The frame after tick `step` (zero-based) has fired.
    ///
    /// Computed from scratch rather than by mutating shared state, so frames
    /// can be re-derived in any order and cancellation can never leave a
    /// half-applied tick behind.
    ///
    /// # Panics
    ///
    /// Panics if `step >= self.steps()`.
    pub fn frame_at(&self, step: usize) -> Vec<WordState> {
        assert!(step < self.steps, "tick {step} out of range");
        match self.mode {
            RevealMode::Append => self.words[..=step].to_vec(),
            RevealMode::Compare => self
                .words
                .iter()
                .enumerate()
                .map(|(i, word)| {
                    let status = if i > step {
                        WordStatus::Normal
                    } else if !word.matched() {
                        WordStatus::Mismatched
                    } else if i == step {
                        WordStatus::Animating
                    } else {
                        WordStatus::Normal
                    };
                    WordState {
                        status,
                        ..word.clone()
                    }
                })
                .collect(),
        }
    }

    /// The frame the run ends on (the initial frame for zero-step plans).
    pub fn last_frame(&self) -> Vec<WordState> {
        if self.steps == 0 {
            self.initial_frame()
        } else {
            self.frame_at(self.steps - 1)
        }
    }

    /// Iterate over every tick frame in order.
    pub fn frames(&self) -> Frames<'_> {
        Frames { plan: self, next: 0 }
    }
}

/// Iterator over the tick frames of a [`RevealPlan`].
#[derive(Debug)]
pub struct Frames<'a> {
    plan: &'a RevealPlan,
    next: usize,
}

impl Iterator for Frames<'_> {
    type Item = Vec<WordState>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.plan.steps {
            return None;
        }
        let frame = self.plan.frame_at(self.next);
        self.next += 1;
        Some(frame)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.plan.steps - self.next;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Frames<'_> {}
