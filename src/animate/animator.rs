//! Word animator: owns at most one in-flight reveal.

use crossbeam_channel::Receiver;
use std::time::Duration;

use crate::diff::RevealPlan;

use super::run::{AnimationRun, Frame, DEFAULT_TICK_INTERVAL};

/// Drives word reveals for one story view.
///
/// At most one [`AnimationRun`] is live at a time: starting a new reveal
/// first cancels the previous run and waits for its thread to exit, so no
/// frame from a superseded run can reach the subscriber.
pub struct WordAnimator {
    /// Tick interval applied to every run this animator starts.
    interval: Duration,
    /// The live run, if any.
    run: Option<AnimationRun>,
}

impl WordAnimator {
    /// Create an animator with the default tick interval.
    #[must_use]
    pub const fn new() -> Self {
        Self::with_interval(DEFAULT_TICK_INTERVAL)
    }

    /// Create an animator ticking at `interval`.
    #[must_use]
    pub const fn with_interval(interval: Duration) -> Self {
        Self {
            interval,
            run: None,
        }
    }

    /// Tick interval used for new runs.
    #[inline]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Cancel any in-flight run, then start revealing `plan`.
    ///
    /// Returns the frame receiver for the new run. The swap is atomic from
    /// the caller's view: by the time this returns, the old run's thread has
    /// exited and its channel is unreachable.
    pub fn play(&mut self, plan: RevealPlan) -> &Receiver<Frame> {
        self.cancel();
        let run = AnimationRun::spawn(plan, self.interval);
        self.run.insert(run).receiver()
    }

    /// Cancel the in-flight run, if any, and wait for it to stop.
    ///
    /// No-op when nothing is pending.
    pub fn cancel(&mut self) {
        if let Some(run) = self.run.take() {
            run.join();
        }
    }

    /// Frame receiver for the current run, if one is live.
    pub fn frames(&self) -> Option<&Receiver<Frame>> {
        self.run.as_ref().map(AnimationRun::receiver)
    }

    /// True when no run is live, or the live run has emitted every frame.
    pub fn is_idle(&self) -> bool {
        self.run.as_ref().map_or(true, AnimationRun::is_finished)
    }
}

impl Default for WordAnimator {
    fn default() -> Self {
        Self::new()
    }
}
