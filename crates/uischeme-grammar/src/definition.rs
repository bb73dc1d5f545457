//! Named, possibly recursive productions.
//!
//! A definition is declared through a [`DefinitionDraft`] holding raw
//! expression text. Drafts are only parsed once every lexeme and definition
//! name of the grammar is known, so bodies may refer to names declared later
//! and to themselves.

use crate::pattern::Expression;

/// Handle of a definition inside its grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DefinitionId(usize);

impl DefinitionId {
    pub(crate) const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the position of the definition in declaration order.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Unparsed body of a definition being declared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefinitionDraft {
    name: String,
    order: usize,
    seqs: Vec<String>,
    cases: Vec<(String, String)>,
}

impl DefinitionDraft {
    pub(crate) const fn new(name: String, order: usize) -> Self {
        Self {
            name,
            order,
            seqs: Vec::new(),
            cases: Vec::new(),
        }
    }

    /// Adds an alternative sequence.
    pub fn seq(&mut self, expression: impl Into<String>) -> &mut Self {
        self.seqs.push(expression.into());
        self
    }

    /// Adds a case branch selected by any id of the pipe-separated `ids`.
    ///
    /// `expression` is matched after the case id; it may be empty.
    pub fn case(&mut self, ids: impl Into<String>, expression: impl Into<String>) -> &mut Self {
        self.cases.push((ids.into(), expression.into()));
        self
    }

    /// Returns the definition name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub(crate) const fn order(&self) -> usize {
        self.order
    }

    pub(crate) fn seq_sources(&self) -> impl Iterator<Item = &str> {
        self.seqs.iter().map(String::as_str)
    }

    pub(crate) fn case_sources(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cases
            .iter()
            .map(|(ids, expression)| (ids.as_str(), expression.as_str()))
    }
}

/// One case branch of a definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDeclaration {
    ids: Vec<String>,
    expression: Expression,
}

impl CaseDeclaration {
    pub(crate) const fn new(ids: Vec<String>, expression: Expression) -> Self {
        Self { ids, expression }
    }

    /// Returns the case ids selecting this branch.
    #[must_use]
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Returns the expression matched after the case id.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }
}

/// A parsed definition.
///
/// A definition with neither sequences nor cases is empty: it always
/// matches and consumes nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Definition {
    id: DefinitionId,
    name: String,
    seqs: Vec<Expression>,
    cases: Vec<CaseDeclaration>,
}

impl Definition {
    pub(crate) const fn new(
        id: DefinitionId,
        name: String,
        seqs: Vec<Expression>,
        cases: Vec<CaseDeclaration>,
    ) -> Self {
        Self {
            id,
            name,
            seqs,
            cases,
        }
    }

    /// Returns the handle of the definition.
    #[must_use]
    pub const fn id(&self) -> DefinitionId {
        self.id
    }

    /// Returns the definition name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the alternative sequences in declaration order.
    #[must_use]
    pub fn seqs(&self) -> &[Expression] {
        &self.seqs
    }

    /// Returns the case branches in declaration order.
    #[must_use]
    pub fn cases(&self) -> &[CaseDeclaration] {
        &self.cases
    }

    /// Returns `true` when the definition has neither sequences nor cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seqs.is_empty() && self.cases.is_empty()
    }
}
