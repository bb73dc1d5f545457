//! Pattern expressions and their syntax tree.
//!
//! An expression is a compact description of a string grammar built from
//! lexeme and definition names:
//!
//! - juxtaposition is a sequence: `ID SP VALUE`
//! - `( )` groups
//! - `?` makes its operand optional, `*` repeats it zero or more times,
//!   `+` one or more times
//! - `|` separates alternatives and binds loosest
//!
//! Parsing produces an [`Expression`], which renders back to canonical text
//! through [`Display`](std::fmt::Display). The canonical text of an
//! expression parses to a structurally equal tree.

use std::fmt;

use crate::error::GrammarError;
use crate::parser::{self, Symbol};
use crate::repetition::ListFlags;
use crate::token::Flavor;

/// A node of the pattern syntax tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PatternNode {
    /// Reference to a lexeme.
    Lex(String),
    /// Reference to a definition.
    Def(String),
    /// Children matched one after another.
    Seq(Vec<PatternNode>),
    /// Alternatives tried in order.
    Set(Vec<PatternNode>),
    /// Optional operand (`?`).
    Opt(Box<PatternNode>),
    /// Zero or more repetitions (`*`).
    Star(Box<PatternNode>),
    /// One or more repetitions (`+`).
    Plus(Box<PatternNode>),
}

impl PatternNode {
    fn write(&self, f: &mut fmt::Formatter<'_>, nested: bool) -> fmt::Result {
        match self {
            Self::Lex(name) | Self::Def(name) => f.write_str(name),
            Self::Seq(children) => write_joined(f, children, " ", nested),
            Self::Set(children) => write_joined(f, children, " | ", nested),
            Self::Opt(child) => {
                child.write(f, true)?;
                f.write_str("?")
            }
            Self::Star(child) => {
                child.write(f, true)?;
                f.write_str("*")
            }
            Self::Plus(child) => {
                child.write(f, true)?;
                f.write_str("+")
            }
        }
    }
}

fn write_joined(
    f: &mut fmt::Formatter<'_>,
    children: &[PatternNode],
    separator: &str,
    nested: bool,
) -> fmt::Result {
    if nested {
        f.write_str("(")?;
    }
    for (index, child) in children.iter().enumerate() {
        if index > 0 {
            f.write_str(separator)?;
        }
        child.write(f, true)?;
    }
    if nested {
        f.write_str(")")?;
    }
    Ok(())
}

impl fmt::Display for PatternNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write(f, false)
    }
}

/// A parsed pattern expression.
///
/// Holds the original text, the syntax tree (absent for empty text, which
/// always matches and consumes nothing) and the capture-list flags computed
/// for the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    source: String,
    root: Option<PatternNode>,
    lists: ListFlags,
}

impl Expression {
    /// Parses `text`, resolving identifiers through `resolve`.
    pub(crate) fn parse<R>(text: &str, flavor: Flavor, resolve: R) -> Result<Self, GrammarError>
    where
        R: Fn(&str) -> Option<Symbol>,
    {
        let root = parser::parse(text, flavor, resolve)?;
        let lists = root.as_ref().map(ListFlags::analyze).unwrap_or_default();
        Ok(Self {
            source: text.to_owned(),
            root,
            lists,
        })
    }

    /// Returns the text the expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the syntax tree, or `None` for the empty expression.
    #[must_use]
    pub const fn root(&self) -> Option<&PatternNode> {
        self.root.as_ref()
    }

    /// Returns the capture-list flags of the expression.
    #[must_use]
    pub const fn lists(&self) -> &ListFlags {
        &self.lists
    }

    /// Returns `true` for the empty expression.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the canonical text of the expression.
    #[must_use]
    pub fn canonical(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.as_ref().map_or(Ok(()), |root| root.write(f, false))
    }
}
