//! Review session: the event loop joining agent, animator, input, screen.
//!
//! The loop itself stays single-threaded and selects over three channels:
//! agent events, animation frames, and input actions. Every story change
//! cancels the in-flight reveal before the next one starts; every pass ends
//! with a screen present, which is a no-op when nothing changed.

use crossbeam_channel::{bounded, never, select, Receiver};
use std::io::{self, Write};
use std::time::Duration;

use crate::agent::{AgentEvent, AgentHandle};
use crate::animate::{Frame, WordAnimator, DEFAULT_TICK_INTERVAL};
use crate::diff::{change_map, ChangeMap, RevealPlan, WordState};
use crate::input::{InputEvent, InputReader};
use crate::state::{Resolution, StorySnapshot};
use crate::surface::{Line, Screen, TermGuard, Theme};
use crate::view::{InterruptPrompt, StoryView};

/// Configuration for a review session.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Reveal cadence (time between animation frames).
    pub tick_interval: Duration,
    /// Input poll timeout (bounds shutdown latency of the input thread).
    pub input_poll_timeout: Duration,
    /// Whether to use the alternate screen buffer.
    pub alternate_screen: bool,
    /// Palette for every view element.
    pub theme: Theme,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: DEFAULT_TICK_INTERVAL,
            input_poll_timeout: Duration::from_millis(10),
            alternate_screen: true,
            theme: Theme::stock(),
        }
    }
}

/// One interactive review of an agent's drafting stream.
pub struct ReviewSession {
    config: SessionConfig,
    screen: Screen,
    view: StoryView,
    prompt: InterruptPrompt,
    animator: WordAnimator,
    /// Latest snapshot from the agent.
    snapshot: StorySnapshot,
    /// Latest animation frame's word table.
    words: Vec<WordState>,
    /// Outstanding interrupt message, if any.
    interrupt: Option<String>,
    /// Parsed diff markup from the latest snapshot.
    changes: Option<ChangeMap>,
    /// Latest agent or terminal error, shown on the status row.
    error: Option<String>,
}

impl ReviewSession {
    /// Create a session for a `width` x `height` viewport.
    pub fn new(config: SessionConfig, width: u16, height: u16) -> Self {
        let theme = config.theme;
        let tick = config.tick_interval;
        Self {
            config,
            screen: Screen::new(width, height),
            view: StoryView::new(theme),
            prompt: InterruptPrompt::new(theme),
            animator: WordAnimator::with_interval(tick),
            snapshot: StorySnapshot::default(),
            words: Vec::new(),
            interrupt: None,
            changes: None,
            error: None,
        }
    }

    /// Run the session until the user quits.
    ///
    /// Takes over the terminal for its whole lifetime and restores it on
    /// return, including early error returns.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup or writing to stdout fails.
    pub fn run(mut self, agent: &AgentHandle) -> io::Result<()> {
        let _guard = TermGuard::enter(self.config.alternate_screen)?;

        let (input_tx, input_rx) = bounded::<InputEvent>(64);
        let reader = InputReader::spawn(input_tx, self.config.input_poll_timeout);

        let mut stdout = io::stdout();
        let mut agent_rx = agent.events().clone();

        self.redraw(&mut stdout)?;

        loop {
            // The frame receiver changes identity per run; a finished or
            // absent run selects on a channel that never fires.
            let frames: Receiver<Frame> = self
                .animator
                .frames()
                .cloned()
                .unwrap_or_else(never);

            let mut quit = false;
            select! {
                recv(agent_rx) -> event => match event {
                    Ok(AgentEvent::Closed) | Err(_) => {
                        // Stream over; keep the view up until the user quits.
                        agent_rx = never();
                    }
                    Ok(event) => self.on_agent_event(event),
                },
                recv(frames) -> frame => match frame {
                    Ok(frame) => self.on_frame(frame),
                    // Run finished and fully drained; release the handle.
                    Err(_) => self.animator.cancel(),
                },
                recv(input_rx) -> action => match action {
                    Ok(action) => quit = self.on_input(&action, agent),
                    Err(_) => quit = true,
                },
            }

            if quit {
                break;
            }
            self.redraw(&mut stdout)?;
        }

        self.animator.cancel();
        reader.join();
        Ok(())
    }

    /// Apply one agent event.
    fn on_agent_event(&mut self, event: AgentEvent) {
        match event {
            AgentEvent::StateUpdate(snapshot) => self.apply_snapshot(snapshot),
            AgentEvent::Interrupt { message } => self.interrupt = Some(message),
            AgentEvent::Error { message } => self.error = Some(message),
            AgentEvent::Closed => {}
        }
    }

    /// Adopt a new snapshot, restarting the reveal when the story changed.
    fn apply_snapshot(&mut self, snapshot: StorySnapshot) {
        let story_changed = snapshot.story_text() != self.snapshot.story_text();

        self.changes = snapshot.diff_markup.as_deref().map(change_map);

        if snapshot.story_content.is_none() {
            self.animator.cancel();
            self.words.clear();
        } else if story_changed {
            let plan = RevealPlan::new(
                snapshot.previous_story_text(),
                snapshot.story_text(),
                snapshot.is_edit,
            );
            self.words = plan.initial_frame();
            self.animator.play(plan);
        }

        self.snapshot = snapshot;
    }

    /// Adopt one animation frame.
    fn on_frame(&mut self, frame: Frame) {
        self.words = frame.words;
    }

    /// Apply one input action. Returns true when the session should end.
    fn on_input(&mut self, action: &InputEvent, agent: &AgentHandle) -> bool {
        let page = usize::from(self.screen.height().saturating_sub(1).max(1));
        match action {
            InputEvent::Quit | InputEvent::Shutdown => return true,
            InputEvent::Confirm => self.resolve(agent, Resolution::Confirm),
            InputEvent::Cancel => self.resolve(agent, Resolution::Cancel),
            InputEvent::ScrollUp => self.view.scroll_up(1),
            InputEvent::ScrollDown => self.view.scroll_down(1),
            InputEvent::PageUp => self.view.scroll_up(page),
            InputEvent::PageDown => self.view.scroll_down(page),
            InputEvent::Resize { width, height } => self.screen.resize(*width, *height),
            InputEvent::Error(message) => self.error = Some(message.clone()),
        }
        false
    }

    /// Answer the outstanding interrupt; a resolution with none outstanding
    /// is ignored.
    fn resolve(&mut self, agent: &AgentHandle, resolution: Resolution) {
        if self.interrupt.take().is_some() {
            let _ = agent.resolve(resolution);
        }
    }

    /// Compose the full frame: story pane, then prompt and error rows.
    fn compose(&mut self) -> Vec<Line> {
        let width = self.screen.width();
        let height = self.screen.height();

        let prompt_block = self
            .interrupt
            .as_ref()
            .map(|message| self.prompt.lines(message, width));
        let error_row = self.error.as_ref().map(|message| {
            let mut row = Line::new();
            row.push_styled(format!("error: {message}"), self.config.theme.error);
            row
        });

        let mut reserved = prompt_block.as_ref().map_or(0, Vec::len);
        reserved += usize::from(error_row.is_some());

        let body_rows = u16::try_from((height as usize).saturating_sub(reserved))
            .unwrap_or(height);

        // The markup overlay applies only while an edit awaits confirmation.
        let overlay = if self.snapshot.pending_confirmation && self.snapshot.is_edit {
            self.changes.as_ref()
        } else {
            None
        };

        let mut frame = self
            .view
            .frame(&self.snapshot, &self.words, overlay, width, body_rows);

        // Pin the prompt and error rows to the bottom of the viewport.
        frame.resize(body_rows as usize, Line::new());
        if let Some(block) = prompt_block {
            frame.extend(block);
        }
        if let Some(row) = error_row {
            frame.push(row);
        }
        frame
    }

    /// Compose and present; a no-op write when nothing changed.
    fn redraw<W: Write>(&mut self, writer: &mut W) -> io::Result<()> {
        let frame = self.compose();
        self.screen.present(&frame, writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent;
    use crate::state::StoryContent;

    fn story(text: &str) -> Option<StoryContent> {
        Some(StoryContent {
            title: "T".into(),
            story: text.into(),
            genre: "G".into(),
            summary: String::new(),
        })
    }

    fn session() -> ReviewSession {
        let config = SessionConfig {
            tick_interval: Duration::from_millis(1),
            ..SessionConfig::default()
        };
        ReviewSession::new(config, 40, 12)
    }

    fn drain_animation(session: &mut ReviewSession) {
        let rx = session.animator.frames().cloned();
        if let Some(rx) = rx {
            while let Ok(frame) = rx.recv_timeout(Duration::from_millis(500)) {
                let done = frame.is_last;
                session.on_frame(frame);
                if done {
                    break;
                }
            }
        }
        session.animator.cancel();
    }

    fn frame_text(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|l| {
                l.spans()
                    .iter()
                    .map(|s| s.text.as_str())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_first_snapshot_reveals_append() {
        let mut s = session();
        s.apply_snapshot(StorySnapshot {
            story_content: story("a quiet fox"),
            pending_confirmation: true,
            ..StorySnapshot::default()
        });

        drain_animation(&mut s);
        assert_eq!(s.words.len(), 3);
        let text = frame_text(&s.compose());
        assert!(text.contains("quiet"));
        assert!(text.contains("Awaiting confirmation"));
    }

    #[test]
    fn test_unchanged_story_does_not_restart_reveal() {
        let mut s = session();
        s.apply_snapshot(StorySnapshot {
            story_content: story("same words"),
            pending_confirmation: true,
            ..StorySnapshot::default()
        });
        drain_animation(&mut s);

        // Same story, confirmation resolved: no new run.
        s.apply_snapshot(StorySnapshot {
            story_content: story("same words"),
            pending_confirmation: false,
            ..StorySnapshot::default()
        });
        assert!(s.animator.frames().is_none());
        assert_eq!(s.words.len(), 2);
    }

    #[test]
    fn test_edit_snapshot_runs_compare_reveal() {
        let mut s = session();
        s.apply_snapshot(StorySnapshot {
            story_content: story("a quiet fox"),
            ..StorySnapshot::default()
        });
        drain_animation(&mut s);

        s.apply_snapshot(StorySnapshot {
            story_content: story("a sly fox"),
            previous_story_content: story("a quiet fox"),
            pending_confirmation: true,
            is_edit: true,
            ..StorySnapshot::default()
        });
        drain_animation(&mut s);

        // Position 1 differs and stays flagged.
        assert_eq!(s.words.len(), 3);
        assert_eq!(s.words[1].old_word, "quiet");
        assert_eq!(s.words[1].new_word, "sly");

        let text = frame_text(&s.compose());
        assert!(text.contains("quiet"));
        assert!(text.contains("sly"));
        assert!(text.contains("Awaiting edit confirmation"));
    }

    #[test]
    fn test_resolution_answers_only_outstanding_interrupt() {
        let (port, handle) = agent::pair(8);
        let mut s = session();

        // No interrupt outstanding: y does nothing.
        s.on_input(&InputEvent::Confirm, &handle);
        assert_eq!(port.try_resolution(), None);

        s.on_agent_event(AgentEvent::Interrupt {
            message: "Confirm?".into(),
        });
        s.on_input(&InputEvent::Confirm, &handle);
        assert_eq!(port.try_resolution(), Some(Resolution::Confirm));
        assert!(s.interrupt.is_none());
    }

    #[test]
    fn test_prompt_block_sits_at_bottom() {
        let mut s = session();
        s.apply_snapshot(StorySnapshot {
            story_content: story("hello"),
            pending_confirmation: true,
            ..StorySnapshot::default()
        });
        s.on_agent_event(AgentEvent::Interrupt {
            message: "Approve?".into(),
        });

        let frame = s.compose();
        // Body is padded so the prompt block ends exactly at the bottom row.
        assert_eq!(frame.len(), 12);
        let text = frame_text(&frame);
        assert!(text.contains("Approve?"));
        assert!(text.contains("[y] Confirm"));

        let last = frame_text(&frame[frame.len() - 1..]);
        assert!(last.contains("[n] Cancel"));
    }

    #[test]
    fn test_agent_error_shows_on_status_row() {
        let mut s = session();
        s.on_agent_event(AgentEvent::Error {
            message: "stream lost".into(),
        });
        let text = frame_text(&s.compose());
        assert!(text.contains("error: stream lost"));
    }

    #[test]
    fn test_quit_actions() {
        let (_port, handle) = agent::pair(8);
        let mut s = session();
        assert!(s.on_input(&InputEvent::Quit, &handle));
        assert!(!s.on_input(&InputEvent::ScrollDown, &handle));
    }
}
