//! Error types for grammar construction and expression matching.
//!
//! [`GrammarError`] covers everything that can go wrong while registering
//! lexemes, declaring definitions, or compiling a pattern expression.
//! [`MatchError`] is the failure side of evaluating a compiled expression
//! against input text.

use thiserror::Error;

/// Errors from building a grammar or compiling a pattern expression.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum GrammarError {
    /// The tokenizer met a character outside the expression language.
    #[error("unexpected character {found:?} at offset {offset}")]
    UnexpectedCharacter {
        /// The offending character.
        found: char,
        /// Byte offset of the character in the expression.
        offset: usize,
    },

    /// A group was opened but never closed.
    #[error("group opened at offset {offset} is not closed")]
    UnclosedGroup {
        /// Byte offset of the opening bracket.
        offset: usize,
    },

    /// A group contains nothing.
    #[error("empty group at offset {offset}")]
    EmptyGroup {
        /// Byte offset of the opening bracket.
        offset: usize,
    },

    /// A quantifier has no operand to apply to.
    #[error("quantifier '{quantifier}' at offset {offset} has no operand")]
    DanglingQuantifier {
        /// The quantifier character.
        quantifier: char,
        /// Byte offset of the quantifier.
        offset: usize,
    },

    /// An alternation branch is empty.
    #[error("empty alternative at offset {offset}")]
    EmptyAlternative {
        /// Byte offset of the `|` that opens or closes the empty branch.
        offset: usize,
    },

    /// An identifier names neither a lexeme nor a definition.
    #[error("unknown lexeme or definition {name:?} at offset {offset}")]
    UnknownIdentifier {
        /// The unresolved identifier.
        name: String,
        /// Byte offset of the identifier.
        offset: usize,
    },

    /// Tokens remain after a complete expression was parsed.
    #[error("unexpected token {token:?} at offset {offset}")]
    TrailingTokens {
        /// Text of the first leftover token.
        token: String,
        /// Byte offset of the first leftover token.
        offset: usize,
    },

    /// An alias list contains no names.
    #[error("empty alias list {list:?}")]
    EmptyAliasList {
        /// The alias list as written.
        list: String,
    },

    /// A lexeme name was registered twice.
    #[error("lexeme {name} is already defined")]
    DuplicateLexeme {
        /// The duplicated lexeme name.
        name: String,
    },

    /// A definition name was declared twice.
    #[error("definition {name} is already defined")]
    DuplicateDefinition {
        /// The duplicated definition name.
        name: String,
    },

    /// A case id appears twice in one definition.
    #[error("case {case} is already defined")]
    DuplicateCase {
        /// The duplicated case id.
        case: String,
    },

    /// A lexeme pattern is not a valid regular expression.
    #[error("invalid pattern for lexeme {name}: {message}")]
    InvalidLexemePattern {
        /// The alias list the pattern was registered under.
        name: String,
        /// Description of the regular expression error.
        message: String,
    },

    /// A definition body failed to compile.
    #[error("in definition {name}: {error}")]
    Definition {
        /// The definition whose body failed.
        name: String,
        /// The underlying failure.
        #[source]
        error: Box<GrammarError>,
    },
}

impl GrammarError {
    /// Creates an unexpected character error.
    #[must_use]
    pub const fn unexpected_character(found: char, offset: usize) -> Self {
        Self::UnexpectedCharacter { found, offset }
    }

    /// Creates an unknown identifier error.
    #[must_use]
    pub fn unknown_identifier(name: impl Into<String>, offset: usize) -> Self {
        Self::UnknownIdentifier {
            name: name.into(),
            offset,
        }
    }

    /// Creates a trailing tokens error.
    #[must_use]
    pub fn trailing_tokens(token: impl Into<String>, offset: usize) -> Self {
        Self::TrailingTokens {
            token: token.into(),
            offset,
        }
    }

    /// Creates an invalid lexeme pattern error.
    #[must_use]
    pub fn invalid_lexeme_pattern(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidLexemePattern {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Wraps an error raised while compiling the body of definition `name`.
    #[must_use]
    pub fn in_definition(name: impl Into<String>, error: Self) -> Self {
        Self::Definition {
            name: name.into(),
            error: Box::new(error),
        }
    }

    /// Returns the byte offset inside the expression, when the error has one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::UnexpectedCharacter { offset, .. }
            | Self::UnclosedGroup { offset }
            | Self::EmptyGroup { offset }
            | Self::DanglingQuantifier { offset, .. }
            | Self::EmptyAlternative { offset }
            | Self::UnknownIdentifier { offset, .. }
            | Self::TrailingTokens { offset, .. } => Some(*offset),
            Self::Definition { error, .. } => error.offset(),
            Self::EmptyAliasList { .. }
            | Self::DuplicateLexeme { .. }
            | Self::DuplicateDefinition { .. }
            | Self::DuplicateCase { .. }
            | Self::InvalidLexemePattern { .. } => None,
        }
    }
}

/// Failure to match a compiled expression against input text.
///
/// Offsets are byte offsets into the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum MatchError {
    /// No alternative matched; `offset` is the furthest position reached.
    #[error("syntax error at offset {offset}")]
    NoMatch {
        /// Furthest byte offset reached before failing.
        offset: usize,
    },

    /// A valid prefix matched but input remains.
    #[error("unexpected trailing input at offset {offset}")]
    TrailingInput {
        /// Byte offset where matching stopped.
        offset: usize,
    },

    /// Definition recursion went deeper than the configured limit.
    #[error("recursion limit of {limit} exceeded at offset {offset}")]
    RecursionLimit {
        /// The configured depth limit.
        limit: usize,
        /// Byte offset of the definition call that tripped the limit.
        offset: usize,
    },
}

impl MatchError {
    /// Returns the byte offset the error refers to.
    #[must_use]
    pub const fn offset(&self) -> usize {
        match self {
            Self::NoMatch { offset }
            | Self::TrailingInput { offset }
            | Self::RecursionLimit { offset, .. } => *offset,
        }
    }
}
