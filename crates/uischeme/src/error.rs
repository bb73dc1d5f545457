//! Error types for building schemes, validating trees and reading outlines.

use thiserror::Error;
use uischeme_grammar::{GrammarError, MatchError};

/// Errors from building a [`Scheme`](crate::Scheme) out of a definition tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SchemeError {
    /// A directive that needs an alias list has no arguments.
    #[error("{tag}: missing alias list in row {row}")]
    MissingAliases {
        /// The directive tag.
        tag: String,
        /// Source row of the directive.
        row: usize,
    },

    /// The arguments of a directive do not start with an alias list.
    #[error("{tag}: bad alias list {text:?} in row {row}")]
    BadAliases {
        /// The directive tag.
        tag: String,
        /// The arguments as written.
        text: String,
        /// Source row of the directive.
        row: usize,
    },

    /// A `lex` directive names aliases but no pattern.
    #[error("lex: missing pattern in row {row}")]
    MissingPattern {
        /// Source row of the directive.
        row: usize,
    },

    /// A `def` directive does not name exactly one definition.
    #[error("def: bad definition name {text:?} in row {row}")]
    BadName {
        /// The arguments as written.
        text: String,
        /// Source row of the directive.
        row: usize,
    },

    /// A node appears where its tag is not allowed.
    #[error("node {tag:?} is not allowed here in row {row}")]
    UnexpectedNode {
        /// The node tag.
        tag: String,
        /// Source row of the node.
        row: usize,
    },

    /// A lexeme, definition or argument expression failed to compile.
    #[error("{tag} in row {row}: {error}")]
    Grammar {
        /// The directive tag.
        tag: String,
        /// Source row of the directive.
        row: usize,
        /// The underlying grammar failure.
        #[source]
        error: GrammarError,
    },
}

impl SchemeError {
    /// Creates an unexpected node error.
    #[must_use]
    pub fn unexpected_node(tag: impl Into<String>, row: usize) -> Self {
        Self::UnexpectedNode {
            tag: tag.into(),
            row,
        }
    }

    /// Wraps a grammar error raised by the directive `tag` in `row`.
    #[must_use]
    pub fn grammar(tag: impl Into<String>, row: usize, error: GrammarError) -> Self {
        Self::Grammar {
            tag: tag.into(),
            row,
            error,
        }
    }

    /// Returns the source row the error refers to.
    #[must_use]
    pub const fn row(&self) -> usize {
        match self {
            Self::MissingAliases { row, .. }
            | Self::BadAliases { row, .. }
            | Self::MissingPattern { row }
            | Self::BadName { row, .. }
            | Self::UnexpectedNode { row, .. }
            | Self::Grammar { row, .. } => *row,
        }
    }
}

/// Errors from validating a subject tree against a scheme.
///
/// Validation stops at the first error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    /// No rule in reach accepts the node's tag.
    #[error("invalid node {tag:?} in row {row}")]
    InvalidNode {
        /// The node tag.
        tag: String,
        /// Source row of the node.
        row: usize,
    },

    /// The node's arguments do not match the grammar of a rule accepting it.
    #[error("invalid arguments of node {tag:?} in row {row}: {error}")]
    InvalidArguments {
        /// The node tag.
        tag: String,
        /// Source row of the node.
        row: usize,
        /// How the argument grammar failed.
        #[source]
        error: MatchError,
    },
}

impl ValidationError {
    /// Creates an invalid node error.
    #[must_use]
    pub fn invalid_node(tag: impl Into<String>, row: usize) -> Self {
        Self::InvalidNode {
            tag: tag.into(),
            row,
        }
    }

    /// Creates an invalid arguments error.
    #[must_use]
    pub fn invalid_arguments(tag: impl Into<String>, row: usize, error: MatchError) -> Self {
        Self::InvalidArguments {
            tag: tag.into(),
            row,
            error,
        }
    }

    /// Returns the source row of the offending node.
    #[must_use]
    pub const fn row(&self) -> usize {
        match self {
            Self::InvalidNode { row, .. } | Self::InvalidArguments { row, .. } => *row,
        }
    }
}

/// Errors from reading tab-indented outline text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum OutlineError {
    /// A line is nested more than one level below the previous line.
    #[error("row {row} is indented {depth} levels, at most {allowed} allowed")]
    TooDeep {
        /// Source row of the line.
        row: usize,
        /// Indentation depth of the line in tabs.
        depth: usize,
        /// Deepest indentation allowed at that point.
        allowed: usize,
    },

    /// A line is indented with spaces instead of tabs.
    #[error("row {row} is indented with spaces")]
    SpaceIndentation {
        /// Source row of the line.
        row: usize,
    },
}
