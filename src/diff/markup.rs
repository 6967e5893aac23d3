//! Diff markup: extract word change kinds from an HTML diff fragment.
//!
//! Drafting agents ship an optional HTML fragment alongside an edited
//! revision, marking insertions and removals with `added`/`deleted` span
//! classes:
//!
//! ```html
//! The <span class="deleted">old</span> <span class="added">new</span> word.
//! ```
//!
//! The review surface does not render that HTML. It only mines the fragment
//! for a map from literal word string to [`ChangeKind`], used to colorize
//! animated words by *value* match (not position). When a word string occurs
//! in several spans, the last occurrence wins. Anything that is not a
//! well-formed `added`/`deleted` span contributes nothing: malformed markup
//! degrades to an empty map, never an error.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Change kind attached to a word by the agent's diff markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChangeKind {
    /// Word present in the new revision only.
    Added,
    /// Word present in the previous revision only.
    Deleted,
}

impl std::fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Added => write!(f, "added"),
            Self::Deleted => write!(f, "deleted"),
        }
    }
}

/// Map from literal word string to its marked change kind.
pub type ChangeMap = HashMap<String, ChangeKind>;

fn span_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r#"<span class="(added|deleted)">([^<]*)</span>"#)
            .expect("span pattern is valid")
    })
}

/// Scan a diff markup fragment into a [`ChangeMap`].
///
/// Span bodies holding several words contribute one entry per word (same
/// single-space boundaries as the animator); empty bodies contribute
/// nothing. Later spans override earlier ones for a repeated word.
///
/// # Example
///
/// ```
/// use redraft::diff::{change_map, ChangeKind};
///
/// let map = change_map(r#"<span class="added">new</span><span class="deleted">old</span>"#);
/// assert_eq!(map.get("new"), Some(&ChangeKind::Added));
/// assert_eq!(map.get("old"), Some(&ChangeKind::Deleted));
/// ```
pub fn change_map(markup: &str) -> ChangeMap {
    let mut map = ChangeMap::new();
    for caps in span_pattern().captures_iter(markup) {
        let kind = match &caps[1] {
            "added" => ChangeKind::Added,
            _ => ChangeKind::Deleted,
        };
        for word in caps[2].split(' ') {
            if !word.is_empty() {
                map.insert(word.to_owned(), kind);
            }
        }
    }
    map
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_map_basic() {
        let map = change_map(r#"<span class="added">new</span><span class="deleted">old</span>"#);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("new"), Some(&ChangeKind::Added));
        assert_eq!(map.get("old"), Some(&ChangeKind::Deleted));
    }

    #[test]
    fn test_change_map_multi_word_span() {
        let map = change_map(r#"<span class="added">two words</span>"#);
        assert_eq!(map.get("two"), Some(&ChangeKind::Added));
        assert_eq!(map.get("words"), Some(&ChangeKind::Added));
    }

    #[test]
    fn test_change_map_last_match_wins() {
        let map = change_map(
            r#"<span class="added">word</span> mid <span class="deleted">word</span>"#,
        );
        assert_eq!(map.get("word"), Some(&ChangeKind::Deleted));
    }

    #[test]
    fn test_change_map_ignores_foreign_markup() {
        let map = change_map(r#"<p>plain</p> <span class="note">aside</span> bare text"#);
        assert!(map.is_empty());
    }

    #[test]
    fn test_change_map_empty_and_malformed() {
        assert!(change_map("").is_empty());
        assert!(change_map(r#"<span class="added">unclosed"#).is_empty());
        assert!(change_map(r#"<span class="added"></span>"#).is_empty());
    }

    #[test]
    fn test_change_map_surrounding_prose() {
        let map = change_map(
            r#"The fox <span class="deleted">walked</span> <span class="added">ran</span> home."#,
        );
        assert_eq!(map.len(), 2);
        assert_eq!(map.get("ran"), Some(&ChangeKind::Added));
        assert_eq!(map.get("walked"), Some(&ChangeKind::Deleted));
        assert_eq!(map.get("fox"), None);
    }
}
