//! Words: tokenization and per-word render state.
//!
//! A "word" is a contiguous run of non-space characters, identified only by
//! its position in the sequence. Splitting is done on single-space boundaries
//! with no Unicode segmentation and no punctuation handling; doubled spaces
//! therefore produce empty tokens. This mirrors the upstream drafting agents,
//! which diff revisions on exactly these boundaries. It is a recorded
//! limitation, not a feature.

/// Split text into words on single-space boundaries.
///
/// The empty string yields an empty sequence (not a single empty token), so
/// absent text degrades to a zero-length animation instead of a one-word one.
///
/// # Example
///
/// ```
/// use redraft::diff::split_words;
///
/// assert_eq!(split_words("a quick fox"), vec!["a", "quick", "fox"]);
/// assert_eq!(split_words(""), Vec::<&str>::new());
/// assert_eq!(split_words("a  b"), vec!["a", "", "b"]);
/// ```
pub fn split_words(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(' ').collect()
}

/// Number of words in a text, under [`split_words`] boundaries.
#[inline]
pub fn word_count(text: &str) -> usize {
    if text.is_empty() {
        0
    } else {
        text.bytes().filter(|&b| b == b' ').count() + 1
    }
}

/// Render status of a single word position during a reveal run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum WordStatus {
    /// Settled: render the new word plainly.
    #[default]
    Normal,
    /// The reveal wave is currently on this position; old and new words match.
    Animating,
    /// Old and new words differ at this position. Latched: once set, a
    /// position never leaves this status for the rest of the run.
    Mismatched,
}

/// Per-position render state emitted by a reveal run.
///
/// Positions are index-aligned against the longer of the two word sequences;
/// the shorter side is padded with the empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordState {
    /// Word at this position in the previous revision ("" if none).
    pub old_word: String,
    /// Word at this position in the new revision ("" if none).
    pub new_word: String,
    /// Current render status.
    pub status: WordStatus,
}

impl WordState {
    /// State for a freshly revealed word (no previous revision).
    pub fn revealed(new_word: &str) -> Self {
        Self {
            old_word: String::new(),
            new_word: new_word.to_owned(),
            status: WordStatus::Normal,
        }
    }

    /// Initial state for an index-aligned position of a compare run.
    pub fn aligned(old_word: &str, new_word: &str) -> Self {
        Self {
            old_word: old_word.to_owned(),
            new_word: new_word.to_owned(),
            status: WordStatus::Normal,
        }
    }

    /// Whether the old and new words at this position are identical.
    #[inline]
    pub fn matched(&self) -> bool {
        self.old_word == self.new_word
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_basic() {
        assert_eq!(split_words("a quick fox"), vec!["a", "quick", "fox"]);
    }

    #[test]
    fn test_split_empty_is_empty_sequence() {
        assert!(split_words("").is_empty());
        assert_eq!(word_count(""), 0);
    }

    #[test]
    fn test_split_keeps_empty_tokens() {
        // Doubled spaces are a boundary each; the gap token is empty.
        assert_eq!(split_words("a  b"), vec!["a", "", "b"]);
        assert_eq!(word_count("a  b"), 3);
    }

    #[test]
    fn test_split_single_word() {
        assert_eq!(split_words("hello"), vec!["hello"]);
        assert_eq!(word_count("hello"), 1);
    }

    #[test]
    fn test_split_no_punctuation_handling() {
        // Punctuation rides along with its word.
        assert_eq!(split_words("end. next"), vec!["end.", "next"]);
    }

    #[test]
    fn test_word_count_agrees_with_split() {
        for text in ["", "one", "one two", " lead", "trail ", "a  b   c"] {
            assert_eq!(word_count(text), split_words(text).len(), "{text:?}");
        }
    }

    #[test]
    fn test_word_state_matched() {
        assert!(WordState::aligned("same", "same").matched());
        assert!(!WordState::aligned("old", "new").matched());
        // A revealed word has no old counterpart, so it never matches.
        assert!(!WordState::revealed("word").matched());
    }
}
