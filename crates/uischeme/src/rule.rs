//! Rules: which tags may appear where, and what arguments they take.

use std::fmt;
use std::sync::Arc;

use strum::Display;
use uischeme_grammar::{CaptureContext, CompiledExpression, MatchError};

/// Directive a rule was declared with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum RuleKeyword {
    /// A top-level rule in the common scope, or a nested rule.
    Rule,
    /// A top-level rule in the root scope.
    RootRule,
    /// A nested rule written as `children`.
    Children,
}

/// A node of the rule tree.
///
/// A rule accepts every tag in its alias list. Its children are the rules
/// that apply to the children of a node it accepted.
#[derive(Debug, Clone)]
pub struct Rule {
    keyword: RuleKeyword,
    tags: Vec<String>,
    arguments: Option<String>,
    matcher: Option<Arc<CompiledExpression>>,
    children: Vec<Self>,
    row: usize,
}

impl Rule {
    pub(crate) const fn new(
        keyword: RuleKeyword,
        tags: Vec<String>,
        arguments: Option<String>,
        row: usize,
    ) -> Self {
        Self {
            keyword,
            tags,
            arguments,
            matcher: None,
            children: Vec::new(),
            row,
        }
    }

    /// Creates the tagless rule at the top of a scope.
    pub(crate) const fn scope(keyword: RuleKeyword) -> Self {
        Self::new(keyword, Vec::new(), None, 0)
    }

    pub(crate) fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    pub(crate) fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    pub(crate) fn set_matcher(&mut self, matcher: Arc<CompiledExpression>) {
        self.matcher = Some(matcher);
    }

    /// Returns the directive the rule was declared with.
    #[must_use]
    pub const fn keyword(&self) -> RuleKeyword {
        self.keyword
    }

    /// Returns the accepted tags.
    #[must_use]
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Returns the argument expression as written.
    #[must_use]
    pub fn arguments(&self) -> Option<&str> {
        self.arguments.as_deref()
    }

    /// Returns the compiled argument grammar.
    #[must_use]
    pub fn matcher(&self) -> Option<&CompiledExpression> {
        self.matcher.as_deref()
    }

    /// Returns the rules for the children of an accepted node.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Returns the source row of the declaration, or 0 for a scope.
    #[must_use]
    pub const fn row(&self) -> usize {
        self.row
    }

    /// Returns `true` when `tag` is one of the rule's aliases.
    #[must_use]
    pub fn accepts(&self, tag: &str) -> bool {
        self.tags.iter().any(|alias| alias == tag)
    }

    /// Returns the child rules accepting `tag`.
    pub fn matching<'r>(&'r self, tag: &str) -> impl Iterator<Item = &'r Self> {
        self.children.iter().filter(move |rule| rule.accepts(tag))
    }

    /// Runs the argument grammar, if any, over `text`.
    ///
    /// Returns `None` when the rule takes any arguments.
    #[must_use]
    pub fn check(&self, text: &str) -> Option<Result<CaptureContext, MatchError>> {
        self.matcher.as_ref().map(|matcher| matcher.evaluate(text))
    }

    pub(crate) fn write(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        for _ in 0..depth {
            f.write_str("\t")?;
        }
        write!(f, "{} {}", self.keyword, self.tags.join("|"))?;
        if let Some(arguments) = &self.arguments {
            write!(f, " {arguments}")?;
        }
        writeln!(f)?;
        self.children
            .iter()
            .try_for_each(|child| child.write(f, depth + 1))
    }
}
