//! Agent boundary: state events in, interrupt resolutions out.
//!
//! The drafting runtime lives elsewhere (a remote service, a subprocess, or
//! the scripted agent in the demo). This crate sees it as a pair of
//! channels: [`AgentEvent`]s arrive on one, and each interrupt is answered
//! with a [`Resolution`] on the other. No transport lives here.

use crossbeam_channel::{bounded, Receiver, Sender};

use crate::state::{Resolution, StorySnapshot};

/// Events from the drafting agent.
#[derive(Debug, Clone)]
pub enum AgentEvent {
    /// Shared state changed; carries the full new snapshot.
    StateUpdate(StorySnapshot),

    /// The agent paused and needs a Confirm or Cancel.
    Interrupt {
        /// Message to show the user.
        message: String,
    },

    /// The agent encountered an error.
    Error {
        /// Error message.
        message: String,
    },

    /// The agent's stream ended; no more events will arrive.
    Closed,
}

/// Session side of the boundary: consume events, answer interrupts.
pub struct AgentHandle {
    /// Incoming agent events.
    events: Receiver<AgentEvent>,
    /// Outgoing interrupt resolutions.
    resolutions: Sender<Resolution>,
}

impl AgentHandle {
    /// Get a reference to the event receiver (for `select!` loops).
    #[inline]
    pub const fn events(&self) -> &Receiver<AgentEvent> {
        &self.events
    }

    /// Answer the outstanding interrupt.
    ///
    /// Returns false when the agent side is gone.
    pub fn resolve(&self, resolution: Resolution) -> bool {
        self.resolutions.send(resolution).is_ok()
    }
}

/// Agent side of the boundary: publish state, raise interrupts.
pub struct AgentPort {
    /// Outgoing events.
    events: Sender<AgentEvent>,
    /// Incoming interrupt resolutions.
    resolutions: Receiver<Resolution>,
}

impl AgentPort {
    /// Send any event. Returns false when the session is gone.
    pub fn send(&self, event: AgentEvent) -> bool {
        self.events.send(event).is_ok()
    }

    /// Publish a new state snapshot.
    pub fn update(&self, snapshot: StorySnapshot) -> bool {
        self.send(AgentEvent::StateUpdate(snapshot))
    }

    /// Raise an interrupt and block until the user resolves it.
    ///
    /// Returns `None` when the session went away without answering.
    pub fn interrupt(&self, message: impl Into<String>) -> Option<Resolution> {
        if !self.send(AgentEvent::Interrupt {
            message: message.into(),
        }) {
            return None;
        }
        self.resolutions.recv().ok()
    }

    /// Non-blocking check for a resolution, for agents that poll.
    pub fn try_resolution(&self) -> Option<Resolution> {
        self.resolutions.try_recv().ok()
    }

    /// Signal the end of the stream.
    pub fn close(&self) {
        let _ = self.events.send(AgentEvent::Closed);
    }
}

/// Create a connected (agent side, session side) pair.
///
/// `capacity` bounds the event queue; state updates are coarse, so a small
/// buffer is plenty.
pub fn pair(capacity: usize) -> (AgentPort, AgentHandle) {
    let (event_tx, event_rx) = bounded(capacity);
    let (resolution_tx, resolution_rx) = bounded(1);

    (
        AgentPort {
            events: event_tx,
            resolutions: resolution_rx,
        },
        AgentHandle {
            events: event_rx,
            resolutions: resolution_tx,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_reaches_session_side() {
        let (port, handle) = pair(8);
        let snapshot = StorySnapshot {
            input: "a fox story".into(),
            ..StorySnapshot::default()
        };

        assert!(port.update(snapshot.clone()));
        match handle.events().recv().unwrap() {
            AgentEvent::StateUpdate(got) => assert_eq!(got, snapshot),
            other => panic!("unexpected event: {other:?}"),
        }
    }

    #[test]
    fn test_interrupt_roundtrip() {
        let (port, handle) = pair(8);

        let answer = std::thread::spawn(move || port.interrupt("Confirm the story?"));

        match handle.events().recv().unwrap() {
            AgentEvent::Interrupt { message } => {
                assert_eq!(message, "Confirm the story?");
            }
            other => panic!("unexpected event: {other:?}"),
        }
        assert!(handle.resolve(Resolution::Confirm));
        assert_eq!(answer.join().unwrap(), Some(Resolution::Confirm));
    }

    #[test]
    fn test_interrupt_without_session_returns_none() {
        let (port, handle) = pair(8);
        drop(handle);
        assert_eq!(port.interrupt("anyone there?"), None);
    }
}
