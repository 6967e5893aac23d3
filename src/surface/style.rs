//! Styling primitives: colors, SGR modifiers, and the review palette.

use bitflags::bitflags;

/// A 24-bit color, emitted as truecolor SGR.
///
/// The review palette depends on exact pastel values for its change fields,
/// so there is no fallback to the indexed 256-color cube.
#[derive(Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Color from individual channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Pure black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Pure white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Foreground the plain style uses (white).
    pub const DEFAULT_FG: Self = Self::WHITE;
    /// Background the plain style uses (black).
    pub const DEFAULT_BG: Self = Self::BLACK;

    /// Color from a packed `0xRRGGBB` value, the form the palette is
    /// written in.
    #[inline]
    pub const fn from_u32(hex: u32) -> Self {
        Self::new((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
    }
}

impl std::fmt::Debug for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<(u8, u8, u8)> for Rgb {
    #[inline]
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Self::new(r, g, b)
    }
}

impl From<u32> for Rgb {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_u32(hex)
    }
}

bitflags! {
    /// Text attribute flags, one bit per SGR attribute.
    ///
    /// Combine with bitwise OR:
    ///
    /// ```
    /// use redraft::Modifiers;
    /// let struck = Modifiers::BOLD | Modifiers::STRIKETHROUGH;
    /// assert!(struck.contains(Modifiers::STRIKETHROUGH));
    /// ```
    #[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Bold (SGR 1).
        const BOLD = 1 << 0;
        /// Dim (SGR 2).
        const DIM = 1 << 1;
        /// Italic (SGR 3).
        const ITALIC = 1 << 2;
        /// Underline (SGR 4).
        const UNDERLINE = 1 << 3;
        /// Blink (SGR 5).
        const BLINK = 1 << 4;
        /// Reverse video (SGR 7).
        const REVERSED = 1 << 5;
        /// Concealed text (SGR 8).
        const HIDDEN = 1 << 6;
        /// Strikethrough (SGR 9), the workhorse of the review surface.
        const STRIKETHROUGH = 1 << 7;
    }
}

impl std::fmt::Debug for Modifiers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        bitflags::parser::to_writer(self, f)
    }
}

/// A complete text style: colors plus modifiers.
///
/// Spans carry a `Style` by value; the screen diff only re-emits SGR
/// sequences when consecutive spans actually differ.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Style {
    /// Foreground color.
    pub fg: Rgb,
    /// Background color.
    pub bg: Rgb,
    /// Text modifiers (bold, strikethrough, etc.).
    pub modifiers: Modifiers,
}

impl Style {
    /// Default foreground on default background, no modifiers.
    pub const PLAIN: Self = Self {
        fg: Rgb::DEFAULT_FG,
        bg: Rgb::DEFAULT_BG,
        modifiers: Modifiers::empty(),
    };

    /// Create a plain style.
    #[inline]
    pub const fn new() -> Self {
        Self::PLAIN
    }

    /// Same style with the given foreground.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = fg;
        self
    }

    /// Same style with the given background.
    #[inline]
    #[must_use]
    pub const fn with_bg(mut self, bg: Rgb) -> Self {
        self.bg = bg;
        self
    }

    /// Same style with the given modifier set.
    #[inline]
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// True for the plain style (default colors, no modifiers).
    #[inline]
    pub fn is_plain(&self) -> bool {
        *self == Self::PLAIN
    }
}

impl Default for Style {
    fn default() -> Self {
        Self::PLAIN
    }
}

impl std::fmt::Debug for Style {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}/{:?}+{:?}", self.fg, self.bg, self.modifiers)
    }
}

/// The review surface palette.
///
/// Semantic styles for every element the story view draws. The tinted
/// fields set both colors explicitly, so they read the same on light and
/// dark terminals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Story title row.
    pub title: Style,
    /// "Awaiting confirmation" chip (fresh generation pending).
    pub chip_pending: Style,
    /// "Awaiting edit confirmation" chip (edit pending).
    pub chip_pending_edit: Style,
    /// "Final version" chip (nothing pending).
    pub chip_final: Style,
    /// Genre line.
    pub genre: Style,
    /// Plain story words.
    pub body: Style,
    /// Struck-through old word on a red field.
    pub removed: Style,
    /// Replacement word on a green field.
    pub inserted: Style,
    /// Centered placeholder shown before any content exists.
    pub placeholder: Style,
    /// Interrupt prompt message block.
    pub prompt: Style,
    /// The `[y] Confirm` action.
    pub confirm_action: Style,
    /// The `[n] Cancel` action.
    pub cancel_action: Style,
    /// Agent or terminal error line.
    pub error: Style,
}

impl Theme {
    /// The stock palette: pastel red/green change fields, amber and violet
    /// and blue status chips, muted secondary text.
    pub const fn stock() -> Self {
        let ink = Rgb::from_u32(0x1F2937);
        Self {
            title: Style::PLAIN.with_modifiers(Modifiers::BOLD),
            chip_pending: Style::PLAIN
                .with_fg(Rgb::from_u32(0xD97706))
                .with_bg(Rgb::from_u32(0xFEF3C7)),
            chip_pending_edit: Style::PLAIN
                .with_fg(Rgb::from_u32(0x9333EA))
                .with_bg(Rgb::from_u32(0xF3E8FF)),
            chip_final: Style::PLAIN
                .with_fg(Rgb::from_u32(0x2563EB))
                .with_bg(Rgb::from_u32(0xDBEAFE)),
            genre: Style::PLAIN.with_fg(Rgb::from_u32(0x6B7280)),
            body: Style::PLAIN,
            removed: Style::PLAIN
                .with_fg(ink)
                .with_bg(Rgb::from_u32(0xFECACA))
                .with_modifiers(Modifiers::STRIKETHROUGH),
            inserted: Style::PLAIN.with_fg(ink).with_bg(Rgb::from_u32(0xBBF7D0)),
            placeholder: Style::PLAIN
                .with_fg(Rgb::from_u32(0x9CA3AF))
                .with_modifiers(Modifiers::DIM),
            prompt: Style::PLAIN.with_fg(ink).with_bg(Rgb::from_u32(0xF3F4F6)),
            confirm_action: Style::PLAIN
                .with_fg(Rgb::WHITE)
                .with_bg(Rgb::from_u32(0x22C55E)),
            cancel_action: Style::PLAIN
                .with_fg(Rgb::WHITE)
                .with_bg(Rgb::from_u32(0xEF4444)),
            error: Style::PLAIN.with_fg(Rgb::from_u32(0xEF4444)),
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::stock()
    }
}
