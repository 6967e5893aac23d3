//! Screen: double-buffered line renderer with minimal ANSI output.
//!
//! The screen remembers the last frame it flushed. Presenting a new frame
//! compares line by line: only changed rows are redrawn, colors and
//! modifiers are re-emitted only on actual transitions, and the whole
//! update goes out in a single `write` syscall. That is what keeps a 35ms
//! reveal cadence flicker-free.

use std::io::Write;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use super::span::Line;
use super::style::{Modifiers, Rgb, Style};

/// Last emitted SGR state. `None` fields force emission on next use.
#[derive(Debug, Clone, Copy, Default)]
struct SgrState {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    modifiers: Option<Modifiers>,
}

impl SgrState {
    const fn unknown() -> Self {
        Self {
            fg: None,
            bg: None,
            modifiers: None,
        }
    }
}

/// Statistics from one present call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FlushStats {
    /// Rows that differed and were redrawn.
    pub lines_changed: usize,
    /// SGR sequences emitted (color and modifier transitions).
    pub sgr_writes: usize,
    /// Bytes handed to the writer.
    pub bytes: usize,
}

/// Double-buffered terminal viewport.
///
/// Rows are [`Line`]s; equality against the previously flushed row decides
/// whether a row is redrawn at all. Styles are tracked across the whole
/// emission, so runs of same-styled rows cost one SGR sequence total.
pub struct Screen {
    /// Viewport width in columns.
    width: u16,
    /// Viewport height in rows.
    height: u16,
    /// Lines as last flushed; compared against each new frame.
    shown: Vec<Line>,
    /// ANSI accumulation buffer, flushed with one write.
    out: Vec<u8>,
    /// SGR state tracker.
    sgr: SgrState,
    /// Redraw every row on the next present (first frame, resize).
    damage_all: bool,
}

impl Screen {
    /// Create a screen for a `width` x `height` viewport.
    ///
    /// The first present always redraws everything, since the terminal's
    /// existing contents are unknown.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            shown: vec![Line::new(); height as usize],
            out: Vec::with_capacity(4096),
            sgr: SgrState::unknown(),
            damage_all: true,
        }
    }

    /// Viewport width in columns.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Viewport height in rows.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// Resize the viewport. Forces a full redraw on the next present.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.width = width;
        self.height = height;
        self.shown = vec![Line::new(); height as usize];
        self.sgr = SgrState::unknown();
        self.damage_all = true;
    }

    /// Diff `frame` against the last flushed frame, emit ANSI for the rows
    /// that changed, and write it out in a single syscall.
    ///
    /// Rows past the end of `frame` render empty; lines wider than the
    /// viewport are clipped at a grapheme boundary.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn present<W: Write>(
        &mut self,
        frame: &[Line],
        writer: &mut W,
    ) -> std::io::Result<FlushStats> {
        self.out.clear();
        let mut stats = FlushStats::default();

        if self.damage_all {
            // Unknown terminal contents: start from a clean slate.
            self.out.extend_from_slice(b"\x1b[2J");
            self.sgr = SgrState::unknown();
        }

        let empty = Line::new();
        for row in 0..self.height {
            let next = frame.get(row as usize).unwrap_or(&empty);
            if !self.damage_all && self.shown[row as usize] == *next {
                continue;
            }

            stats.lines_changed += 1;
            emit_cursor_row(&mut self.out, row);
            self.emit_line(next, &mut stats);
            self.shown[row as usize] = next.clone();
        }

        self.damage_all = false;

        if self.out.is_empty() {
            return Ok(stats);
        }
        stats.bytes = self.out.len();
        writer.write_all(&self.out)?;
        writer.flush()?;
        Ok(stats)
    }

    /// Emit one row: styled spans clipped to the viewport width, then an
    /// erase to the end of the line.
    fn emit_line(&mut self, line: &Line, stats: &mut FlushStats) {
        let budget = self.width as usize;
        let mut col = 0usize;

        for span in line.spans() {
            if col >= budget {
                break;
            }
            self.apply_style(span.style, stats);
            col += emit_clipped(&mut self.out, &span.text, budget - col);
        }

        if col < budget {
            // Erase-to-EOL paints with the current background, so drop back
            // to plain first.
            self.apply_style(Style::PLAIN, stats);
            self.out.extend_from_slice(b"\x1b[K");
        }
    }

    /// Emit the minimal SGR transition from the tracked state to `style`.
    fn apply_style(&mut self, style: Style, stats: &mut FlushStats) {
        let current_mods = self.sgr.modifiers.unwrap_or(Modifiers::empty());
        let removed = current_mods.difference(style.modifiers);

        // Disabling any modifier takes a full reset, which also clears the
        // tracked colors.
        if !removed.is_empty() {
            self.out.extend_from_slice(b"\x1b[0m");
            self.sgr = SgrState::unknown();
            stats.sgr_writes += 1;
        }

        if self.sgr.fg != Some(style.fg) {
            let fg = style.fg;
            let _ = write!(self.out, "\x1b[38;2;{};{};{}m", fg.r, fg.g, fg.b);
            self.sgr.fg = Some(fg);
            stats.sgr_writes += 1;
        }

        if self.sgr.bg != Some(style.bg) {
            let bg = style.bg;
            let _ = write!(self.out, "\x1b[48;2;{};{};{}m", bg.r, bg.g, bg.b);
            self.sgr.bg = Some(bg);
            stats.sgr_writes += 1;
        }

        if self.sgr.modifiers != Some(style.modifiers) {
            let added = style
                .modifiers
                .difference(self.sgr.modifiers.unwrap_or(Modifiers::empty()));
            if !added.is_empty() {
                emit_modifier_set(&mut self.out, added);
                stats.sgr_writes += 1;
            }
            self.sgr.modifiers = Some(style.modifiers);
        }
    }
}

/// Emit a move to column 1 of `row` (compact form for the home position).
#[inline]
fn emit_cursor_row(out: &mut Vec<u8>, row: u16) {
    if row == 0 {
        out.extend_from_slice(b"\x1b[H");
    } else {
        let _ = write!(out, "\x1b[{}H", row + 1);
    }
}

/// Emit SGR sequences for a set of modifiers.
fn emit_modifier_set(out: &mut Vec<u8>, modifiers: Modifiers) {
    if modifiers.contains(Modifiers::BOLD) {
        out.extend_from_slice(b"\x1b[1m");
    }
    if modifiers.contains(Modifiers::DIM) {
        out.extend_from_slice(b"\x1b[2m");
    }
    if modifiers.contains(Modifiers::ITALIC) {
        out.extend_from_slice(b"\x1b[3m");
    }
    if modifiers.contains(Modifiers::UNDERLINE) {
        out.extend_from_slice(b"\x1b[4m");
    }
    if modifiers.contains(Modifiers::BLINK) {
        out.extend_from_slice(b"\x1b[5m");
    }
    if modifiers.contains(Modifiers::REVERSED) {
        out.extend_from_slice(b"\x1b[7m");
    }
    if modifiers.contains(Modifiers::HIDDEN) {
        out.extend_from_slice(b"\x1b[8m");
    }
    if modifiers.contains(Modifiers::STRIKETHROUGH) {
        out.extend_from_slice(b"\x1b[9m");
    }
}

/// Write `text` up to `budget` display columns, breaking only at grapheme
/// boundaries. Returns the columns consumed.
fn emit_clipped(out: &mut Vec<u8>, text: &str, budget: usize) -> usize {
    let full = text.width();
    if full <= budget {
        out.extend_from_slice(text.as_bytes());
        return full;
    }

    let mut used = 0usize;
    for grapheme in text.graphemes(true) {
        let w = grapheme.width();
        if used + w > budget {
            break;
        }
        out.extend_from_slice(grapheme.as_bytes());
        used += w;
    }
    used
}
