//! Grammar construction: lexemes plus recursive definitions.
//!
//! [`GrammarBuilder`] collects lexeme declarations and definition drafts in
//! any order. [`GrammarBuilder::build`] then registers every definition name,
//! parses and compiles each body, and freezes the result into an immutable
//! [`Grammar`] that compiles pattern expressions on demand.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::GrammarConfig;
use crate::definition::{CaseDeclaration, Definition, DefinitionDraft, DefinitionId};
use crate::error::GrammarError;
use crate::lexeme::LexemeRegistry;
use crate::matcher::{CompiledExpression, Step, Symbols, compile_definition, compile_expression};
use crate::names::split_aliases;
use crate::parser::Symbol;
use crate::pattern::Expression;
use crate::token::Flavor;

/// Collects lexemes and definitions before compiling them into a [`Grammar`].
///
/// # Example
///
/// ```
/// use uischeme_grammar::GrammarBuilder;
///
/// let mut builder = GrammarBuilder::new();
/// builder.lex("NUM", "[0-9]+")?.lex("COMMA", ",")?;
/// builder.def("list")?.seq("NUM (COMMA NUM)*");
/// let grammar = builder.build()?;
///
/// let context = grammar.expression("list")?.evaluate("1,2,3")?;
/// assert!(context.context("list").is_some());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct GrammarBuilder {
    config: GrammarConfig,
    lexemes: LexemeRegistry,
    drafts: HashMap<String, DefinitionDraft>,
}

impl GrammarBuilder {
    /// Creates a builder with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with an explicit configuration.
    #[must_use]
    pub fn with_config(config: GrammarConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Registers `pattern` under each alias of the pipe-separated `aliases`.
    ///
    /// # Errors
    ///
    /// Returns an error when the alias list is empty, an alias is already
    /// registered, or `pattern` is not a valid regular expression.
    pub fn lex(&mut self, aliases: &str, pattern: &str) -> Result<&mut Self, GrammarError> {
        self.lexemes.register(aliases, pattern)?;
        Ok(self)
    }

    /// Opens a definition named `name` and returns its draft.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::DuplicateDefinition`] when `name` was already
    /// declared.
    pub fn def(&mut self, name: &str) -> Result<&mut DefinitionDraft, GrammarError> {
        let order = self.drafts.len();
        match self.drafts.entry(name.to_owned()) {
            Entry::Occupied(_) => Err(GrammarError::DuplicateDefinition {
                name: name.to_owned(),
            }),
            Entry::Vacant(slot) => Ok(slot.insert(DefinitionDraft::new(name.to_owned(), order))),
        }
    }

    /// Returns whether `name` is a registered lexeme or a declared definition.
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.lexemes.contains(name) || self.drafts.contains_key(name)
    }

    /// Parses and compiles every definition body.
    ///
    /// # Errors
    ///
    /// Returns the first body that fails to parse or compile, wrapped in
    /// [`GrammarError::Definition`]. A case id repeated within one
    /// definition fails the same way with [`GrammarError::DuplicateCase`].
    pub fn build(self) -> Result<Arc<Grammar>, GrammarError> {
        let Self {
            config,
            lexemes,
            drafts,
        } = self;

        let mut drafts: Vec<DefinitionDraft> = drafts.into_values().collect();
        drafts.sort_by_key(DefinitionDraft::order);

        let by_name: HashMap<String, DefinitionId> = drafts
            .iter()
            .enumerate()
            .map(|(index, draft)| (draft.name().to_owned(), DefinitionId::new(index)))
            .collect();
        let resolve = |name: &str| {
            if lexemes.contains(name) {
                Some(Symbol::Lexeme)
            } else if by_name.contains_key(name) {
                Some(Symbol::Definition)
            } else {
                None
            }
        };

        let definitions = drafts
            .iter()
            .enumerate()
            .map(|(index, draft)| {
                parse_definition(DefinitionId::new(index), draft, &resolve)
                    .map_err(|error| GrammarError::in_definition(draft.name(), error))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let symbols = Symbols {
            lexemes: &lexemes,
            definitions: &by_name,
        };
        let bodies = definitions
            .iter()
            .map(|definition| -> Result<Step, GrammarError> {
                let body = compile_definition(definition, &symbols)
                    .map_err(|error| GrammarError::in_definition(definition.name(), error))?;
                debug!(
                    name = definition.name(),
                    seqs = definition.seqs().len(),
                    cases = definition.cases().len(),
                    "compiled definition"
                );
                Ok(body)
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Arc::new(Grammar {
            config,
            lexemes,
            definitions,
            by_name,
            bodies: bodies.into(),
        }))
    }
}

fn parse_definition<R>(
    id: DefinitionId,
    draft: &DefinitionDraft,
    resolve: &R,
) -> Result<Definition, GrammarError>
where
    R: Fn(&str) -> Option<Symbol>,
{
    let seqs = draft
        .seq_sources()
        .map(|source| Expression::parse(source, Flavor::Full, resolve))
        .collect::<Result<Vec<_>, _>>()?;

    let mut cases = Vec::new();
    let mut seen: Vec<String> = Vec::new();
    for (list, source) in draft.case_sources() {
        let ids = split_aliases(list);
        if ids.is_empty() {
            return Err(GrammarError::EmptyAliasList {
                list: list.to_owned(),
            });
        }
        for case in &ids {
            if seen.contains(case) {
                return Err(GrammarError::DuplicateCase { case: case.clone() });
            }
            seen.push(case.clone());
        }
        let expression = Expression::parse(source, Flavor::Full, resolve)?;
        cases.push(CaseDeclaration::new(ids, expression));
    }

    Ok(Definition::new(id, draft.name().to_owned(), seqs, cases))
}

/// An immutable set of lexemes and compiled definitions.
///
/// A grammar compiles pattern expressions into [`CompiledExpression`]s.
/// Every compiled expression keeps the grammar's definition bodies alive, so
/// it stays valid after the grammar handle is dropped.
pub struct Grammar {
    config: GrammarConfig,
    lexemes: LexemeRegistry,
    definitions: Vec<Definition>,
    by_name: HashMap<String, DefinitionId>,
    bodies: Arc<[Step]>,
}

impl Grammar {
    /// Returns a new builder.
    #[must_use]
    pub fn builder() -> GrammarBuilder {
        GrammarBuilder::new()
    }

    /// Parses `text` as a full-flavor expression and compiles it.
    ///
    /// # Errors
    ///
    /// Returns a [`GrammarError`] when `text` is not a valid expression over
    /// this grammar's names.
    pub fn expression(&self, text: &str) -> Result<CompiledExpression, GrammarError> {
        self.compile(self.parse(text, Flavor::Full)?)
    }

    /// Parses `text` as a simple-flavor expression and compiles it.
    ///
    /// The simple flavor accepts lexemes, groups and `?` only.
    ///
    /// # Errors
    ///
    /// Returns a [`GrammarError`] when `text` is not a valid simple
    /// expression over this grammar's lexemes.
    pub fn simple_expression(&self, text: &str) -> Result<CompiledExpression, GrammarError> {
        self.compile(self.parse(text, Flavor::Simple)?)
    }

    /// Parses `text` without compiling it.
    ///
    /// # Errors
    ///
    /// Returns a [`GrammarError`] when `text` is not a valid expression.
    pub fn parse(&self, text: &str, flavor: Flavor) -> Result<Expression, GrammarError> {
        Expression::parse(text, flavor, |name| self.symbol(name))
    }

    /// Compiles a parsed expression against this grammar.
    ///
    /// # Errors
    ///
    /// Returns [`GrammarError::UnknownIdentifier`] when the expression names
    /// something this grammar does not declare.
    pub fn compile(&self, expression: Expression) -> Result<CompiledExpression, GrammarError> {
        let symbols = Symbols {
            lexemes: &self.lexemes,
            definitions: &self.by_name,
        };
        let step = compile_expression(&expression, &symbols)?;
        Ok(CompiledExpression::new(
            expression,
            step,
            Arc::clone(&self.bodies),
            self.config.max_recursion_depth(),
        ))
    }

    fn symbol(&self, name: &str) -> Option<Symbol> {
        if self.lexemes.contains(name) {
            Some(Symbol::Lexeme)
        } else if self.by_name.contains_key(name) {
            Some(Symbol::Definition)
        } else {
            None
        }
    }

    /// Returns the lexeme registry.
    #[must_use]
    pub const fn lexemes(&self) -> &LexemeRegistry {
        &self.lexemes
    }

    /// Returns the definitions in declaration order.
    #[must_use]
    pub fn definitions(&self) -> &[Definition] {
        &self.definitions
    }

    /// Looks up a definition by name.
    #[must_use]
    pub fn definition(&self, name: &str) -> Option<&Definition> {
        self.by_name
            .get(name)
            .and_then(|id| self.definitions.get(id.index()))
    }

    /// Returns the configuration the grammar was built with.
    #[must_use]
    pub const fn config(&self) -> GrammarConfig {
        self.config
    }
}

impl fmt::Debug for Grammar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grammar")
            .field("config", &self.config)
            .field("lexemes", &self.lexemes)
            .field("definitions", &self.definitions)
            .finish_non_exhaustive()
    }
}
