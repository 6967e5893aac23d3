//! Spans and lines: the units the review surface composes and diffs.
//!
//! A [`Span`] is a run of text under one [`Style`]; a [`Line`] is a row of
//! spans. The screen diffs whole lines between frames, so both types keep
//! cheap structural equality. Width math is display columns, not bytes or
//! chars (wide CJK counts as 2).

use unicode_width::UnicodeWidthStr;

use super::style::Style;

/// A styled run of text within one line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Span {
    /// The text. Never contains newlines; layout owns line breaks.
    pub text: String,
    /// Style applied to the whole run.
    pub style: Style,
}

impl Span {
    /// Create a span with an explicit style.
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Create a span with the plain style.
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Style::PLAIN)
    }

    /// Display width in terminal columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.text.width()
    }

    /// True when the span renders nothing.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// One screen row: an ordered sequence of spans.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    /// An empty line.
    pub const fn new() -> Self {
        Self { spans: Vec::new() }
    }

    /// Append a span, merging it into the previous one when styles match.
    ///
    /// Merging keeps line equality stable across layout passes that happen
    /// to split the same text differently.
    pub fn push(&mut self, span: Span) {
        if span.is_empty() {
            return;
        }
        if let Some(last) = self.spans.last_mut() {
            if last.style == span.style {
                last.text.push_str(&span.text);
                return;
            }
        }
        self.spans.push(span);
    }

    /// Append plain text.
    pub fn push_plain(&mut self, text: impl Into<String>) {
        self.push(Span::plain(text));
    }

    /// Append styled text.
    pub fn push_styled(&mut self, text: impl Into<String>, style: Style) {
        self.push(Span::new(text, style));
    }

    /// The spans in render order.
    #[inline]
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Display width in terminal columns.
    pub fn width(&self) -> usize {
        self.spans.iter().map(Span::width).sum()
    }

    /// True when the line renders nothing.
    pub fn is_empty(&self) -> bool {
        self.spans.iter().all(Span::is_empty)
    }
}

impl From<Span> for Line {
    fn from(span: Span) -> Self {
        let mut line = Self::new();
        line.push(span);
        line
    }
}

impl From<Vec<Span>> for Line {
    fn from(spans: Vec<Span>) -> Self {
        let mut line = Self::new();
        for span in spans {
            line.push(span);
        }
        line
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::style::{Modifiers, Rgb};

    #[test]
    fn test_span_width_ascii() {
        assert_eq!(Span::plain("hello").width(), 5);
        assert_eq!(Span::plain("").width(), 0);
    }

    #[test]
    fn test_span_width_cjk() {
        // CJK is double-width.
        assert_eq!(Span::plain("日本").width(), 4);
    }

    #[test]
    fn test_line_merges_same_style() {
        let mut line = Line::new();
        line.push_plain("hello ");
        line.push_plain("world");
        assert_eq!(line.spans().len(), 1);
        assert_eq!(line.spans()[0].text, "hello world");
    }

    #[test]
    fn test_line_keeps_style_boundaries() {
        let red = Style::PLAIN.with_fg(Rgb::new(255, 0, 0));
        let mut line = Line::new();
        line.push_plain("a ");
        line.push_styled("b", red);
        line.push_plain(" c");
        assert_eq!(line.spans().len(), 3);
        assert_eq!(line.width(), 5);
    }

    #[test]
    fn test_line_skips_empty_spans() {
        let mut line = Line::new();
        line.push_plain("");
        line.push_styled("", Style::PLAIN.with_modifiers(Modifiers::BOLD));
        assert!(line.is_empty());
        assert_eq!(line.spans().len(), 0);
    }

    #[test]
    fn test_line_equality_is_structural() {
        let mut a = Line::new();
        a.push_plain("hel");
        a.push_plain("lo");

        let mut b = Line::new();
        b.push_plain("hello");

        // Merging makes split points irrelevant.
        assert_eq!(a, b);
    }
}
