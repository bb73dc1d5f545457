//! Compiled schemes.

use std::fmt;
use std::sync::Arc;

use uischeme_grammar::{Grammar, GrammarConfig};

use crate::builder::SchemeBuilder;
use crate::config::ValidateMode;
use crate::error::{SchemeError, ValidationError};
use crate::node::{AnnotatedNode, TreeNode};
use crate::rule::Rule;
use crate::validator::Validator;

/// A compiled scheme: a grammar plus the common and root rule scopes.
///
/// Rules in the root scope accept the top-level nodes of a subject tree.
/// Rules in the common scope accept matching nodes at any depth.
///
/// A scheme is immutable once built and can validate any number of trees,
/// from any number of threads.
///
/// # Example
///
/// ```
/// use uischeme::{Scheme, ValidateMode, outline};
///
/// let scheme = Scheme::build(&outline::parse(
///     "lex ID [a-z]+\nroot-rule menu\n\trule page ID\n",
/// )?)?;
///
/// let mut tree = outline::parse("menu\n\tpage home\n")?;
/// scheme.validate(&mut tree, ValidateMode::Annotate)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug)]
pub struct Scheme {
    grammar: Arc<Grammar>,
    common: Rule,
    root: Rule,
}

impl Scheme {
    pub(crate) const fn new(grammar: Arc<Grammar>, common: Rule, root: Rule) -> Self {
        Self {
            grammar,
            common,
            root,
        }
    }

    /// Builds a scheme from a scheme-definition tree.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemeError`] naming the first malformed directive.
    pub fn build<N: TreeNode>(tree: &N) -> Result<Self, SchemeError> {
        Self::build_with(tree, GrammarConfig::default())
    }

    /// Builds a scheme whose grammar uses `config`.
    ///
    /// # Errors
    ///
    /// Returns a [`SchemeError`] naming the first malformed directive.
    pub fn build_with<N: TreeNode>(tree: &N, config: GrammarConfig) -> Result<Self, SchemeError> {
        SchemeBuilder::new(config).read(tree)?.finish()
    }

    /// Validates the children of `tree` against the scheme.
    ///
    /// In [`ValidateMode::Annotate`] every node whose arguments match a rule
    /// grammar gets the parsed capture context in place of its raw text.
    ///
    /// # Errors
    ///
    /// Returns the first [`ValidationError`] met in document order.
    pub fn validate<N: AnnotatedNode>(
        &self,
        tree: &mut N,
        mode: ValidateMode,
    ) -> Result<(), ValidationError> {
        Validator::new(&self.common, mode).walk(&[&self.root], tree)
    }

    /// Returns the grammar shared by all argument expressions.
    #[must_use]
    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Returns the scope whose rules apply at any depth.
    #[must_use]
    pub const fn common(&self) -> &Rule {
        &self.common
    }

    /// Returns the scope whose rules apply to top-level nodes.
    #[must_use]
    pub const fn root(&self) -> &Rule {
        &self.root
    }
}

/// Renders the scheme as outline text that builds an equivalent scheme.
impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for declaration in self.grammar.lexemes().declarations() {
            writeln!(
                f,
                "lex {} {}",
                declaration.aliases().join("|"),
                declaration.lexeme().pattern()
            )?;
        }

        for definition in self.grammar.definitions() {
            writeln!(f, "def {}", definition.name())?;
            for seq in definition.seqs() {
                write_entry(f, "seq", seq.source())?;
            }
            for case in definition.cases() {
                let head = format!("case {}", case.ids().join("|"));
                write_entry(f, &head, case.expression().source())?;
            }
        }

        self.common
            .children()
            .iter()
            .chain(self.root.children())
            .try_for_each(|rule| rule.write(f, 0))
    }
}

fn write_entry(f: &mut fmt::Formatter<'_>, head: &str, body: &str) -> fmt::Result {
    match body.trim() {
        "" => writeln!(f, "\t{head}"),
        text => writeln!(f, "\t{head} {text}"),
    }
}
