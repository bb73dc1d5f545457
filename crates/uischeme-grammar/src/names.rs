//! Identifier and alias-list helpers shared across modules.
//!
//! Lexeme names, definition names, case ids and rule tags all use the same
//! identifier alphabet. This module centralises those rules so the
//! tokenizer, the case dispatcher and the scheme reader stay consistent.

/// Returns whether `c` may appear in an identifier.
///
/// Identifiers consist of ASCII letters, ASCII digits, `_` and `-`.
#[must_use]
pub(crate) const fn is_identifier_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '-'
}

/// Returns the identifier starting exactly at byte offset `pos`, if any.
pub(crate) fn identifier_at(text: &str, pos: usize) -> Option<&str> {
    let rest = text.get(pos..)?;
    let end = rest
        .char_indices()
        .find(|(_, c)| !is_identifier_char(*c))
        .map_or(rest.len(), |(offset, _)| offset);
    rest.get(..end).filter(|word| !word.is_empty())
}

/// Splits a pipe-separated alias list such as `"ID | ip|mask"`.
///
/// Whitespace around each alias is ignored and empty entries are dropped.
///
/// # Example
///
/// ```
/// use uischeme_grammar::split_aliases;
///
/// assert_eq!(split_aliases("group | page"), vec!["group", "page"]);
/// ```
#[must_use]
pub fn split_aliases(list: &str) -> Vec<String> {
    list.split('|')
        .map(str::trim)
        .filter(|alias| !alias.is_empty())
        .map(str::to_owned)
        .collect()
}
