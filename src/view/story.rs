//! Story view: pure layout from snapshot + animation frame to lines.
//!
//! No IO and no timing here. Given the agent snapshot, the current word
//! table, and an optional change map, the view produces the frame the
//! screen will diff. The session calls this once per frame or state change.

use unicode_width::UnicodeWidthStr;

use crate::diff::{ChangeKind, ChangeMap, WordState, WordStatus};
use crate::state::{ReviewPhase, StorySnapshot};
use crate::surface::{Line, Span, Theme};

/// Shown centered while no story content exists yet.
pub const PLACEHOLDER: &str = "Your content will appear here...";

/// Layout engine for the story pane.
///
/// Holds only presentation state (theme, scroll offset). The word table it
/// renders comes in per call; the view never caches story data.
pub struct StoryView {
    theme: Theme,
    /// Scroll offset in rows from the top of the composed content.
    scroll: usize,
}

impl StoryView {
    /// Create a view with the given palette.
    pub const fn new(theme: Theme) -> Self {
        Self { theme, scroll: 0 }
    }

    /// Scroll up by `rows`.
    pub fn scroll_up(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_sub(rows);
    }

    /// Scroll down by `rows`. Clamped to the content on the next frame.
    pub fn scroll_down(&mut self, rows: usize) {
        self.scroll = self.scroll.saturating_add(rows);
    }

    /// Compose the visible frame for a `width` x `height` viewport.
    ///
    /// `words` is the current animation frame; `changes` is the diff-markup
    /// overlay, applied only while an edit confirmation is pending.
    pub fn frame(
        &mut self,
        snapshot: &StorySnapshot,
        words: &[WordState],
        changes: Option<&ChangeMap>,
        width: u16,
        height: u16,
    ) -> Vec<Line> {
        if snapshot.story_content.is_none() {
            self.scroll = 0;
            return self.placeholder_frame(width, height);
        }

        let content = self.compose(snapshot, words, changes, width);

        let max_scroll = content.len().saturating_sub(height as usize);
        if self.scroll > max_scroll {
            self.scroll = max_scroll;
        }

        content
            .into_iter()
            .skip(self.scroll)
            .take(height as usize)
            .collect()
    }

    /// Centered placeholder for the empty state.
    fn placeholder_frame(&self, width: u16, height: u16) -> Vec<Line> {
        let pad_rows = (height as usize).saturating_sub(1) / 2;
        let pad_cols = (width as usize).saturating_sub(PLACEHOLDER.width()) / 2;

        let mut lines = vec![Line::new(); pad_rows];
        let mut row = Line::new();
        row.push_plain(" ".repeat(pad_cols));
        row.push_styled(PLACEHOLDER, self.theme.placeholder);
        lines.push(row);
        lines
    }

    /// Full content: header rows plus the wrapped word flow.
    fn compose(
        &self,
        snapshot: &StorySnapshot,
        words: &[WordState],
        changes: Option<&ChangeMap>,
        width: u16,
    ) -> Vec<Line> {
        let mut lines = Vec::new();

        lines.push(self.title_row(snapshot, width));
        lines.push(Line::new());
        lines.push(self.genre_row(snapshot));
        lines.push(Line::new());

        let pending = snapshot.pending_confirmation;
        lines.extend(self.word_flow(words, pending, changes, width));
        lines
    }

    /// Title on the left, status chip right-aligned.
    fn title_row(&self, snapshot: &StorySnapshot, width: u16) -> Line {
        let title = snapshot
            .story_content
            .as_ref()
            .map_or("", |c| c.title.as_str());

        let mut row = Line::new();
        if title.is_empty() {
            row.push_styled("Title", self.theme.placeholder);
        } else {
            row.push_styled(title, self.theme.title);
        }

        let phase = snapshot.phase();
        let style = match phase {
            ReviewPhase::AwaitingConfirmation => self.theme.chip_pending,
            ReviewPhase::AwaitingEditConfirmation => self.theme.chip_pending_edit,
            ReviewPhase::FinalVersion => self.theme.chip_final,
        };
        let chip = format!(" {phase} ");

        let used = row.width() + chip.width();
        let pad = (width as usize).saturating_sub(used).max(1);
        row.push_plain(" ".repeat(pad));
        row.push_styled(chip, style);
        row
    }

    fn genre_row(&self, snapshot: &StorySnapshot) -> Line {
        let genre = snapshot
            .story_content
            .as_ref()
            .map_or("", |c| c.genre.as_str());

        let mut row = Line::new();
        row.push_styled(format!("Genre: {genre}"), self.theme.genre);
        row
    }

    /// Wrap the word table into rows no wider than `width`.
    ///
    /// A mismatched old/new pair stays on one row as a single unit, the way
    /// a reader expects to see a replacement.
    fn word_flow(
        &self,
        words: &[WordState],
        pending: bool,
        changes: Option<&ChangeMap>,
        width: u16,
    ) -> Vec<Line> {
        let budget = width as usize;
        let mut lines = Vec::new();
        let mut cur = Line::new();
        let mut cur_w = 0usize;

        for word in words {
            let unit = self.word_spans(word, pending, changes);
            let unit_w: usize = unit.iter().map(Span::width).sum();
            if unit_w == 0 {
                continue;
            }

            let sep = usize::from(cur_w > 0);
            if cur_w + sep + unit_w > budget && cur_w > 0 {
                lines.push(std::mem::take(&mut cur));
                cur_w = 0;
            }
            if cur_w > 0 {
                cur.push_plain(" ");
                cur_w += 1;
            }
            for span in unit {
                cur.push(span);
            }
            cur_w += unit_w;
        }

        if !cur.is_empty() {
            lines.push(cur);
        }
        lines
    }

    /// Render policy for one word.
    ///
    /// While a confirmation is pending: a mismatched position shows the
    /// struck old word next to its highlighted replacement, an animating
    /// position shows only the struck old word. Everything else (and every
    /// word once the confirmation resolves) shows the plain new word.
    fn word_spans(
        &self,
        word: &WordState,
        pending: bool,
        changes: Option<&ChangeMap>,
    ) -> Vec<Span> {
        if pending && word.status == WordStatus::Mismatched {
            return vec![
                Span::new(word.old_word.clone(), self.theme.removed),
                Span::plain(" "),
                Span::new(word.new_word.clone(), self.theme.inserted),
            ];
        }

        if pending && word.status == WordStatus::Animating {
            return vec![Span::new(word.old_word.clone(), self.theme.removed)];
        }

        // Words the markup calls out as added keep their green field even
        // when positional alignment saw no change.
        let style = match changes.and_then(|map| map.get(&word.new_word)) {
            Some(ChangeKind::Added) => self.theme.inserted,
            _ => self.theme.body,
        };
        vec![Span::new(word.new_word.clone(), style)]
    }
}

impl Default for StoryView {
    fn default() -> Self {
        Self::new(Theme::stock())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::StoryContent;

    fn snapshot(story: &str, pending: bool, is_edit: bool) -> StorySnapshot {
        StorySnapshot {
            input: String::new(),
            story_content: Some(StoryContent {
                title: "The Fox".into(),
                story: story.into(),
                genre: "Fable".into(),
                summary: String::new(),
            }),
            previous_story_content: None,
            pending_confirmation: pending,
            is_edit,
            diff_markup: None,
        }
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
    fn test_placeholder_when_no_content() {
        let mut view = StoryView::default();
        let lines = view.frame(&StorySnapshot::default(), &[], None, 60, 10);

        let text = frame_text(&lines);
        assert!(text.contains(PLACEHOLDER));
        // Vertically centered, not row zero.
        assert!(lines[0].is_empty());
    }

    #[test]
    fn test_header_shows_title_genre_and_chip() {
        let mut view = StoryView::default();
        let snap = snapshot("a b", true, false);
        let words = [WordState::revealed("a"), WordState::revealed("b")];

        let lines = view.frame(&snap, &words, None, 60, 10);
        let text = frame_text(&lines);

        assert!(text.contains("The Fox"));
        assert!(text.contains("Genre: Fable"));
        assert!(text.contains("Awaiting confirmation"));
    }

    #[test]
    fn test_chip_tracks_phase() {
        let mut view = StoryView::default();

        let edit = snapshot("a", true, true);
        let text = frame_text(&view.frame(&edit, &[], None, 60, 10));
        assert!(text.contains("Awaiting edit confirmation"));

        let settled = snapshot("a", false, false);
        let text = frame_text(&view.frame(&settled, &[], None, 60, 10));
        assert!(text.contains("Final version"));
    }

    #[test]
    fn test_mismatched_word_shows_old_and_new() {
        let mut view = StoryView::default();
        let snap = snapshot("a x c", true, true);
        let mut word = WordState::aligned("b", "x");
        word.status = WordStatus::Mismatched;
        let words = [word];

        let lines = view.frame(&snap, &words, None, 60, 10);
        let body = &lines[4];
        let texts: Vec<&str> = body.spans().iter().map(|s| s.text.as_str()).collect();
        assert!(texts.contains(&"b"));
        assert!(texts.contains(&"x"));

        let theme = Theme::stock();
        assert!(body.spans().iter().any(|s| s.style == theme.removed));
        assert!(body.spans().iter().any(|s| s.style == theme.inserted));
    }

    #[test]
    fn test_resolved_words_render_plain() {
        let mut view = StoryView::default();
        let snap = snapshot("ran", false, true);
        let mut word = WordState::aligned("walked", "ran");
        word.status = WordStatus::Mismatched;
        let words = [word];

        let lines = view.frame(&snap, &words, None, 60, 10);
        let text = frame_text(&lines);
        assert!(text.contains("ran"));
        assert!(!text.contains("walked"));
    }

    #[test]
    fn test_change_map_highlights_added_words() {
        let mut view = StoryView::default();
        let snap = snapshot("brave fox", true, true);

        let mut map = ChangeMap::new();
        map.insert("brave".to_string(), ChangeKind::Added);

        let words = [
            WordState::revealed("brave"),
            WordState::revealed("fox"),
        ];
        let lines = view.frame(&snap, &words, Some(&map), 60, 10);

        let theme = Theme::stock();
        let body = &lines[4];
        let brave = body
            .spans()
            .iter()
            .find(|s| s.text.contains("brave"))
            .unwrap();
        assert_eq!(brave.style, theme.inserted);
        let fox = body.spans().iter().find(|s| s.text.contains("fox")).unwrap();
        assert_eq!(fox.style, theme.body);
    }

    #[test]
    fn test_word_flow_wraps_at_width() {
        let mut view = StoryView::default();
        let snap = snapshot("alpha beta gamma delta", false, false);
        let words: Vec<WordState> = ["alpha", "beta", "gamma", "delta"]
            .iter()
            .map(|w| WordState::revealed(w))
            .collect();

        let lines = view.frame(&snap, &words, None, 12, 20);
        for line in &lines {
            assert!(line.width() <= 12, "line overflows: {line:?}");
        }
        let text = frame_text(&lines);
        assert!(text.contains("alpha"));
        assert!(text.contains("delta"));
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut view = StoryView::default();
        let story = "w ".repeat(200);
        let snap = snapshot(&story, false, false);
        let words: Vec<WordState> = (0..200)
            .map(|_| WordState::revealed("w"))
            .collect();

        view.scroll_down(10_000);
        let lines = view.frame(&snap, &words, None, 20, 10);
        assert_eq!(lines.len(), 10);
        // The tail of the content is visible.
        assert!(!lines.iter().all(Line::is_empty));
    }

    #[test]
    fn test_empty_title_shows_hint() {
        let mut view = StoryView::default();
        let mut snap = snapshot("a", false, false);
        if let Some(content) = snap.story_content.as_mut() {
            content.title.clear();
        }
        let lines = view.frame(&snap, &[], None, 60, 10);
        assert!(frame_text(&lines).contains("Title"));
    }
}
