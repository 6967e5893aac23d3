//! Animation run: a dedicated thread pacing one reveal plan.
//!
//! An [`AnimationRun`] plays a [`RevealPlan`](crate::diff::RevealPlan) at a
//! fixed tick interval on its own thread, delivering each [`Frame`] over a
//! private bounded channel. The run is owned by whoever started it;
//! cancelling (or dropping) it stops the thread. Frames within a run are
//! never dropped or reordered.

use crossbeam_channel::{bounded, Receiver, SendTimeoutError, Sender};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use crate::diff::{RevealPlan, WordState};

/// Default tick interval between frames.
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(35);

/// One animation frame: the complete word table after a tick.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Ticks applied so far (0 is the initial table, before any tick).
    pub step: usize,
    /// Word table after `step` ticks.
    pub words: Vec<WordState>,
    /// True when this is the run's final frame.
    pub is_last: bool,
}

/// A single in-flight reveal: one plan, one thread, one frame channel.
///
/// The channel is private to the run, so a cancelled run can never leak a
/// stale frame into its successor's stream.
pub struct AnimationRun {
    /// Handle to the run thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal cancellation.
    shutdown: Arc<AtomicBool>,
    /// Receiver for frames.
    frame_rx: Receiver<Frame>,
}

impl AnimationRun {
    /// Spawn a run playing `plan` at `interval` per tick.
    ///
    /// The initial frame (step 0) is delivered immediately; each subsequent
    /// tick advances the reveal by one step. For an empty plan the initial
    /// frame is also the last, so the run completes at once.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the run thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(plan: RevealPlan, interval: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        // Small buffer: frames are paced by the run thread and drained by
        // the session loop, so the queue never grows.
        let (frame_tx, frame_rx) = bounded(4);

        let handle = thread::Builder::new()
            .name("redraft-reveal".to_string())
            .spawn(move || {
                Self::run_loop(&plan, &frame_tx, &shutdown_clone, interval);
            })
            .expect("Failed to spawn reveal thread");

        Self {
            handle: Some(handle),
            shutdown,
            frame_rx,
        }
    }

    /// Get a reference to the frame receiver.
    ///
    /// Use this with `select!` for event-driven loops; the receiver
    /// disconnects once the final frame has been taken and the thread exits.
    #[inline]
    pub const fn receiver(&self) -> &Receiver<Frame> {
        &self.frame_rx
    }

    /// True once the run thread has exited (every frame sent, or cancelled).
    pub fn is_finished(&self) -> bool {
        self.handle.as_ref().map_or(true, |h| h.is_finished())
    }

    /// Signal the run to stop. Returns without waiting.
    pub fn cancel(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Stop the run and wait for its thread to finish.
    pub fn join(mut self) {
        self.cancel();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main run loop: initial table first, then one frame per tick.
    fn run_loop(
        plan: &RevealPlan,
        frame_tx: &Sender<Frame>,
        shutdown: &Arc<AtomicBool>,
        interval: Duration,
    ) {
        let steps = plan.steps();

        let first = Frame {
            step: 0,
            words: plan.initial_frame(),
            is_last: steps == 0,
        };
        if !deliver(frame_tx, shutdown, first) {
            return;
        }

        let start = Instant::now();
        let mut next_tick = start + interval;

        for step in 0..steps {
            // Sleep in short slices so cancellation stays immediate.
            loop {
                if shutdown.load(Ordering::Relaxed) {
                    return;
                }
                let now = Instant::now();
                if now >= next_tick {
                    break;
                }
                thread::sleep((next_tick - now).min(Duration::from_millis(1)));
            }

            let frame = Frame {
                step: step + 1,
                words: plan.frame_at(step),
                is_last: step + 1 == steps,
            };
            if !deliver(frame_tx, shutdown, frame) {
                return;
            }

            next_tick += interval;

            // Re-anchor if delivery stalled past a whole period, instead of
            // bursting catch-up ticks.
            let now = Instant::now();
            if next_tick < now {
                next_tick = now + interval;
            }
        }
    }
}

impl Drop for AnimationRun {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Send one frame, waiting in 1ms slices so a cancel is never missed.
///
/// Returns false when the run should stop (cancelled, or receiver gone).
fn deliver(frame_tx: &Sender<Frame>, shutdown: &AtomicBool, frame: Frame) -> bool {
    let mut frame = frame;
    loop {
        if shutdown.load(Ordering::Relaxed) {
            return false;
        }
        match frame_tx.send_timeout(frame, Duration::from_millis(1)) {
            Ok(()) => return true,
            Err(SendTimeoutError::Timeout(returned)) => frame = returned,
            Err(SendTimeoutError::Disconnected(_)) => return false,
        }
    }
}
