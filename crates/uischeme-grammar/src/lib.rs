//! Pattern expressions over named lexemes and recursive definitions.
//!
//! This crate compiles compact textual pattern expressions into matchers over
//! strings that record structured captures as they go. It provides:
//!
//! - **Lexemes** via [`LexemeRegistry`]: named leaf matchers backed by
//!   anchored regular expressions
//! - **Definitions** via [`GrammarBuilder::def`]: named productions with
//!   alternative sequences and case dispatch, free to refer to themselves
//! - **Expressions** via [`Grammar::expression`]: compiled matchers that must
//!   consume their whole input and yield a [`CaptureContext`]
//!
//! # Expression Language
//!
//! - `A B` matches `A` then `B`
//! - `( )` groups
//! - `A?`, `A*`, `A+` are optional, zero-or-more and one-or-more
//! - `A | B` tries `A`, then `B`
//!
//! Identifiers use ASCII letters, digits, `_` and `-`. Whitespace between
//! tokens is ignored. A lexeme or definition that can occur more than once
//! (under `*` or `+`, or named twice) captures into a list.
//!
//! # Example
//!
//! ```
//! use uischeme_grammar::GrammarBuilder;
//!
//! let mut builder = GrammarBuilder::new();
//! builder
//!     .lex("ID", "[a-z]+")?
//!     .lex("SP", r"\s+")?
//!     .lex("EQ", "=")?
//!     .lex("VALUE", "[^ ]+")?;
//! builder.def("option")?.seq("ID EQ VALUE");
//! let grammar = builder.build()?;
//!
//! let matcher = grammar.expression("option (SP option)*")?;
//! let context = matcher.evaluate("min=1 max=9")?;
//! let options = context.list("option").unwrap_or_default();
//! assert_eq!(options.len(), 2);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod config;
mod definition;
mod error;
mod grammar;
mod lexeme;
mod matcher;
mod names;
mod parser;
mod pattern;
mod repetition;
mod token;

pub use config::GrammarConfig;
pub use definition::{CaseDeclaration, Definition, DefinitionDraft, DefinitionId};
pub use error::{GrammarError, MatchError};
pub use grammar::{Grammar, GrammarBuilder};
pub use lexeme::{Lexeme, LexemeDeclaration, LexemeRegistry};
pub use matcher::{CaptureContext, CaptureValue, CompiledExpression};
pub use names::split_aliases;
pub use pattern::{Expression, PatternNode};
pub use repetition::ListFlags;
pub use token::Flavor;

#[cfg(test)]
mod tests;
