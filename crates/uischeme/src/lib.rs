//! Rule schemes for tree-shaped UI documents.
//!
//! A scheme declares which node tags may appear where in a document and
//! which argument grammar each tag's trailing text must follow. Schemes are
//! themselves written as trees of directives:
//!
//! - `lex ALIASES pattern` registers a lexeme under each pipe-separated
//!   uppercase alias
//! - `def name` opens a definition whose children are `seq expression` and
//!   `case ids [expression]` entries
//! - `rule tags [expression]` adds a rule to the common scope, which applies
//!   at any depth; nested `rule` and `children` entries scope rules to the
//!   children of an accepted node
//! - `root-rule tags [expression]` adds a rule for top-level nodes
//!
//! Argument expressions use the pattern language of [`uischeme_grammar`].
//!
//! # Example
//!
//! ```
//! use uischeme::{Scheme, TreeNode, ValidateMode, outline};
//!
//! let scheme = Scheme::build(&outline::parse(concat!(
//!     "lex ID [a-z][a-z0-9]*\n",
//!     "lex SP \\s+\n",
//!     "lex ANY .+\n",
//!     "root-rule form\n",
//!     "\trule field ID (SP ANY)?\n",
//! ))?)?;
//!
//! let mut tree = outline::parse("form\n\tfield name Your name\n")?;
//! scheme.validate(&mut tree, ValidateMode::Annotate)?;
//!
//! let field = tree
//!     .children()
//!     .first()
//!     .and_then(|form| form.children().first())
//!     .and_then(|field| field.context())
//!     .expect("annotated field");
//! assert_eq!(field.text("ANY"), Some("Your name"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

mod builder;
mod config;
mod error;
mod node;
pub mod outline;
mod rule;
mod scheme;
mod validator;

pub use config::{ValidateMode, ValidateModeParseError};
pub use error::{OutlineError, SchemeError, ValidationError};
pub use node::{AnnotatedNode, Node, NodeArgument, TreeNode};
pub use rule::{Rule, RuleKeyword};
pub use scheme::Scheme;
pub use uischeme_grammar::{CaptureContext, CaptureValue, GrammarConfig, GrammarError, MatchError};

#[cfg(test)]
mod tests;
