//! Tokenizer for the pattern expression language.

use crate::error::GrammarError;
use crate::names::is_identifier_char;

/// Which operators the expression language accepts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Flavor {
    /// Sequences of lexemes, groups and `?` only.
    Simple,
    /// Adds `*`, `+`, `|` and references to definitions.
    #[default]
    Full,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind<'t> {
    Identifier(&'t str),
    OpenGroup,
    CloseGroup,
    Optional,
    Star,
    Plus,
    Alternation,
}

impl TokenKind<'_> {
    /// Returns the quantifier character if this token is one.
    pub(crate) const fn quantifier(self) -> Option<char> {
        match self {
            Self::Optional => Some('?'),
            Self::Star => Some('*'),
            Self::Plus => Some('+'),
            Self::Identifier(_) | Self::OpenGroup | Self::CloseGroup | Self::Alternation => None,
        }
    }

    pub(crate) fn text(self) -> String {
        match self {
            Self::Identifier(word) => word.to_owned(),
            Self::OpenGroup => String::from("("),
            Self::CloseGroup => String::from(")"),
            Self::Optional => String::from("?"),
            Self::Star => String::from("*"),
            Self::Plus => String::from("+"),
            Self::Alternation => String::from("|"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token<'t> {
    pub(crate) kind: TokenKind<'t>,
    pub(crate) offset: usize,
}

const fn punctuation(c: char, flavor: Flavor) -> Option<TokenKind<'static>> {
    match (c, flavor) {
        ('(', _) => Some(TokenKind::OpenGroup),
        (')', _) => Some(TokenKind::CloseGroup),
        ('?', _) => Some(TokenKind::Optional),
        ('*', Flavor::Full) => Some(TokenKind::Star),
        ('+', Flavor::Full) => Some(TokenKind::Plus),
        ('|', Flavor::Full) => Some(TokenKind::Alternation),
        _ => None,
    }
}

/// Splits `text` into tokens, skipping whitespace.
///
/// Empty text yields no tokens.
pub(crate) fn tokenize(text: &str, flavor: Flavor) -> Result<Vec<Token<'_>>, GrammarError> {
    let mut tokens = Vec::new();
    let mut chars = text.char_indices().peekable();

    while let Some((offset, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        if is_identifier_char(c) {
            let mut end = offset + c.len_utf8();
            while let Some((next_offset, next)) = chars.peek().copied() {
                if !is_identifier_char(next) {
                    break;
                }
                end = next_offset + next.len_utf8();
                chars.next();
            }
            let word = text.get(offset..end).unwrap_or_default();
            tokens.push(Token {
                kind: TokenKind::Identifier(word),
                offset,
            });
            continue;
        }

        let kind = punctuation(c, flavor)
            .ok_or_else(|| GrammarError::unexpected_character(c, offset))?;
        tokens.push(Token { kind, offset });
    }

    Ok(tokens)
}
