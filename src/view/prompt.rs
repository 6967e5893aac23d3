//! Interrupt prompt: the agent's pause message plus its two actions.

use unicode_width::UnicodeWidthStr;

use crate::surface::{Line, Theme};

/// Renders the block shown while an interrupt awaits a resolution.
pub struct InterruptPrompt {
    theme: Theme,
}

impl InterruptPrompt {
    /// Create a prompt with the given palette.
    pub const fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Compose the prompt block: message, then the two actions.
    pub fn lines(&self, message: &str, width: u16) -> Vec<Line> {
        let mut lines = vec![Line::new()];
        lines.extend(self.wrap_message(message, width as usize));
        lines.push(Line::new());

        let mut actions = Line::new();
        actions.push_styled(" [y] Confirm ", self.theme.confirm_action);
        actions.push_plain("  ");
        actions.push_styled(" [n] Cancel ", self.theme.cancel_action);
        lines.push(actions);
        lines
    }

    /// Rows the block occupies at `width`.
    pub fn height(&self, message: &str, width: u16) -> usize {
        self.lines(message, width).len()
    }

    /// Word-wrap the message onto prompt-styled rows.
    fn wrap_message(&self, message: &str, budget: usize) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut cur = String::new();

        for word in message.split_whitespace() {
            if !cur.is_empty() && cur.width() + 1 + word.width() > budget {
                lines.push(self.message_row(&cur));
                cur.clear();
            }
            if !cur.is_empty() {
                cur.push(' ');
            }
            cur.push_str(word);
        }
        if !cur.is_empty() {
            lines.push(self.message_row(&cur));
        }
        lines
    }

    fn message_row(&self, text: &str) -> Line {
        let mut row = Line::new();
        row.push_styled(format!(" {text} "), self.theme.prompt);
        row
    }
}

impl Default for InterruptPrompt {
    fn default() -> Self {
        Self::new(Theme::stock())
    }
}
