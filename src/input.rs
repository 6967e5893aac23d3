//! Input reader: dedicated thread polling terminal events.
//!
//! Runs crossterm's event poll off the session loop so the loop never
//! blocks on the terminal. Raw events are mapped to review actions at the
//! source; keys with no meaning to the review surface are dropped here.

use crossbeam_channel::Sender;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use std::time::Duration;

/// A user action relevant to the review session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Approve the pending revision (`y`).
    Confirm,
    /// Reject the pending revision (`n`).
    Cancel,
    /// Leave the session (`q`, `Esc`, `Ctrl-C`).
    Quit,
    /// Scroll the story up one row.
    ScrollUp,
    /// Scroll the story down one row.
    ScrollDown,
    /// Scroll up one viewport.
    PageUp,
    /// Scroll down one viewport.
    PageDown,
    /// Terminal was resized.
    Resize {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
    /// The reader hit a terminal error.
    Error(String),
    /// The reader is shutting down.
    Shutdown,
}

/// Input reader that polls terminal events on its own thread.
pub struct InputReader {
    /// Handle to the reader thread.
    handle: Option<JoinHandle<()>>,
    /// Flag to signal shutdown.
    shutdown: Arc<AtomicBool>,
}

impl InputReader {
    /// Spawn the reader thread.
    ///
    /// `poll_timeout` bounds how long the thread waits for an event before
    /// rechecking shutdown.
    ///
    /// # Panics
    ///
    /// Panics if the OS fails to spawn the reader thread.
    #[allow(clippy::missing_panics_doc)]
    pub fn spawn(sender: Sender<InputEvent>, poll_timeout: Duration) -> Self {
        let shutdown = Arc::new(AtomicBool::new(false));
        let shutdown_clone = shutdown.clone();

        let handle = thread::Builder::new()
            .name("redraft-input".to_string())
            .spawn(move || {
                Self::run_loop(&sender, &shutdown_clone, poll_timeout);
            })
            .expect("Failed to spawn input thread");

        Self {
            handle: Some(handle),
            shutdown,
        }
    }

    /// Signal the reader thread to shutdown.
    pub fn shutdown(&self) {
        self.shutdown.store(true, Ordering::Relaxed);
    }

    /// Wait for the reader thread to finish.
    pub fn join(mut self) {
        self.shutdown();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }

    /// Main polling loop.
    fn run_loop(sender: &Sender<InputEvent>, shutdown: &Arc<AtomicBool>, poll_timeout: Duration) {
        loop {
            if shutdown.load(Ordering::Relaxed) {
                let _ = sender.send(InputEvent::Shutdown);
                break;
            }

            match event::poll(poll_timeout) {
                Ok(true) => match event::read() {
                    Ok(raw) => {
                        if let Some(action) = Self::convert_event(&raw) {
                            if sender.send(action).is_err() {
                                // Receiver dropped, exit
                                break;
                            }
                        }
                    }
                    Err(e) => {
                        let _ = sender.send(InputEvent::Error(e.to_string()));
                    }
                },
                Ok(false) => {
                    // No event, continue loop (will check shutdown)
                }
                Err(e) => {
                    let _ = sender.send(InputEvent::Error(e.to_string()));
                }
            }
        }
    }

    /// Map a crossterm event to a review action, dropping everything else.
    fn convert_event(raw: &Event) -> Option<InputEvent> {
        match raw {
            Event::Key(key) => {
                // Only key presses count (not release or repeat).
                if key.kind != KeyEventKind::Press {
                    return None;
                }
                Self::map_key(key.code, key.modifiers)
            }
            Event::Resize(width, height) => Some(InputEvent::Resize {
                width: *width,
                height: *height,
            }),
            _ => None,
        }
    }

    /// Key binding table.
    fn map_key(code: KeyCode, modifiers: KeyModifiers) -> Option<InputEvent> {
        if modifiers.contains(KeyModifiers::CONTROL) {
            return match code {
                KeyCode::Char('c') => Some(InputEvent::Quit),
                _ => None,
            };
        }

        match code {
            KeyCode::Char('y' | 'Y') => Some(InputEvent::Confirm),
            KeyCode::Char('n' | 'N') => Some(InputEvent::Cancel),
            KeyCode::Char('q') | KeyCode::Esc => Some(InputEvent::Quit),
            KeyCode::Up => Some(InputEvent::ScrollUp),
            KeyCode::Down => Some(InputEvent::ScrollDown),
            KeyCode::PageUp => Some(InputEvent::PageUp),
            KeyCode::PageDown => Some(InputEvent::PageDown),
            _ => None,
        }
    }
}

impl Drop for InputReader {
    fn drop(&mut self) {
        self.shutdown();
    }
}
