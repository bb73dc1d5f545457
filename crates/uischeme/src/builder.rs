//! Reads a scheme-definition tree into a [`Scheme`].
//!
//! The tree is read in one pass that registers lexemes, collects definition
//! drafts and builds the rule tree with raw argument text. Definitions and
//! rule arguments are parsed only afterwards, once every name is known, so
//! directives may appear in any order. Argument expressions are compiled
//! once per canonical form and shared by every rule that spells them.

use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;
use strum::EnumString;
use tracing::debug;
use uischeme_grammar::{
    CompiledExpression, Flavor, Grammar, GrammarBuilder, GrammarConfig, GrammarError,
    split_aliases,
};

use crate::error::SchemeError;
use crate::node::TreeNode;
use crate::rule::{Rule, RuleKeyword};
use crate::scheme::Scheme;

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static ALIASES: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A(?P<aliases>[A-Za-z0-9_-]+(?:\s*\|\s*[A-Za-z0-9_-]+)*)\s*(?P<rest>.*)\z")
        .expect("alias list pattern")
});

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static LEXEME_IDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\A(?P<aliases>[A-Z0-9_-]+(?:\s*\|\s*[A-Z0-9_-]+)*)\s*(?P<rest>.*)\z")
        .expect("lexeme id pattern")
});

#[expect(clippy::expect_used, reason = "the pattern is a literal")]
static NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\A[A-Za-z0-9_-]+\z").expect("definition name pattern"));

/// Tags understood in a scheme-definition tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "kebab-case")]
enum Directive {
    Lex,
    Def,
    Seq,
    Case,
    Rule,
    RootRule,
    Children,
}

impl Directive {
    fn of<N: TreeNode>(node: &N) -> Option<Self> {
        node.tag().parse().ok()
    }
}

/// Alias list and trailing text of a directive.
///
/// Trailing whitespace belongs to the text: a lexeme pattern may end in a
/// space.
struct Header<'a> {
    aliases: &'a str,
    rest: Option<&'a str>,
}

fn header<'a, N: TreeNode>(node: &'a N, pattern: &Regex) -> Result<Header<'a>, SchemeError> {
    let text = node.raw_arguments().ok_or_else(|| SchemeError::MissingAliases {
        tag: node.tag().to_owned(),
        row: node.row(),
    })?;
    let captures = pattern
        .captures(text)
        .ok_or_else(|| SchemeError::BadAliases {
            tag: node.tag().to_owned(),
            text: text.to_owned(),
            row: node.row(),
        })?;
    let aliases = captures.name("aliases").map_or("", |m| m.as_str());
    let rest = captures
        .name("rest")
        .map(|m| m.as_str())
        .filter(|rest| !rest.is_empty());
    Ok(Header { aliases, rest })
}

fn reject_children<N: TreeNode>(node: &N) -> Result<(), SchemeError> {
    node.children().first().map_or(Ok(()), |child| {
        Err(SchemeError::unexpected_node(child.tag(), child.row()))
    })
}

/// Accumulates the parts of a scheme while its definition tree is read.
pub(crate) struct SchemeBuilder {
    grammar: GrammarBuilder,
    definition_rows: HashMap<String, usize>,
    common: Rule,
    root: Rule,
}

impl SchemeBuilder {
    pub(crate) fn new(config: GrammarConfig) -> Self {
        Self {
            grammar: GrammarBuilder::with_config(config),
            definition_rows: HashMap::new(),
            common: Rule::scope(RuleKeyword::Rule),
            root: Rule::scope(RuleKeyword::RootRule),
        }
    }

    /// Reads the top-level directives of `tree`.
    pub(crate) fn read<N: TreeNode>(mut self, tree: &N) -> Result<Self, SchemeError> {
        for node in tree.children() {
            match Directive::of(node) {
                Some(Directive::Lex) => self.read_lexeme(node)?,
                Some(Directive::Def) => self.read_definition(node)?,
                Some(Directive::Rule) => {
                    let rule = read_rule(node, RuleKeyword::Rule)?;
                    self.common.push_child(rule);
                }
                Some(Directive::RootRule) => {
                    let rule = read_rule(node, RuleKeyword::RootRule)?;
                    self.root.push_child(rule);
                }
                _ => return Err(SchemeError::unexpected_node(node.tag(), node.row())),
            }
        }
        Ok(self)
    }

    fn read_lexeme<N: TreeNode>(&mut self, node: &N) -> Result<(), SchemeError> {
        reject_children(node)?;
        let Header { aliases, rest } = header(node, &LEXEME_IDS)?;
        let pattern = rest.ok_or_else(|| SchemeError::MissingPattern { row: node.row() })?;
        self.grammar
            .lex(aliases, pattern)
            .map_err(|error| SchemeError::grammar(node.tag(), node.row(), error))?;
        debug!(aliases, pattern, row = node.row(), "registered lexeme");
        Ok(())
    }

    fn read_definition<N: TreeNode>(&mut self, node: &N) -> Result<(), SchemeError> {
        let text = node.raw_arguments().unwrap_or_default();
        if !NAME.is_match(text) {
            return Err(SchemeError::BadName {
                text: text.to_owned(),
                row: node.row(),
            });
        }

        let draft = self
            .grammar
            .def(text)
            .map_err(|error| SchemeError::grammar(node.tag(), node.row(), error))?;
        for child in node.children() {
            reject_children(child)?;
            match Directive::of(child) {
                Some(Directive::Seq) => {
                    draft.seq(child.raw_arguments().unwrap_or_default());
                }
                Some(Directive::Case) => {
                    let Header { aliases, rest } = header(child, &ALIASES)?;
                    draft.case(aliases, rest.unwrap_or_default());
                }
                _ => return Err(SchemeError::unexpected_node(child.tag(), child.row())),
            }
        }

        self.definition_rows.insert(text.to_owned(), node.row());
        debug!(name = text, row = node.row(), "registered definition");
        Ok(())
    }

    /// Compiles the grammar and every rule argument.
    pub(crate) fn finish(self) -> Result<Scheme, SchemeError> {
        let Self {
            grammar,
            definition_rows,
            mut common,
            mut root,
        } = self;

        let grammar = grammar.build().map_err(|error| {
            let row = match &error {
                GrammarError::Definition { name, .. } => {
                    definition_rows.get(name).copied().unwrap_or_default()
                }
                _ => 0,
            };
            SchemeError::grammar("def", row, error)
        })?;

        let mut arguments = ArgumentCompiler::new(&grammar);
        arguments.fill(&mut common)?;
        arguments.fill(&mut root)?;
        debug!(
            texts = arguments.by_text.len(),
            compiled = arguments.by_canonical.len(),
            "compiled argument grammars"
        );

        Ok(Scheme::new(grammar, common, root))
    }
}

fn read_rule<N: TreeNode>(node: &N, keyword: RuleKeyword) -> Result<Rule, SchemeError> {
    let Header { aliases, rest } = header(node, &ALIASES)?;
    let mut rule = Rule::new(
        keyword,
        split_aliases(aliases),
        rest.map(str::to_owned),
        node.row(),
    );

    for child in node.children() {
        let nested = match Directive::of(child) {
            Some(Directive::Rule) => RuleKeyword::Rule,
            Some(Directive::Children) => RuleKeyword::Children,
            _ => return Err(SchemeError::unexpected_node(child.tag(), child.row())),
        };
        rule.push_child(read_rule(child, nested)?);
    }

    debug!(
        keyword = %keyword,
        tags = aliases,
        row = node.row(),
        "registered rule"
    );
    Ok(rule)
}

/// Compiles rule arguments, sharing one matcher per canonical expression.
struct ArgumentCompiler<'g> {
    grammar: &'g Grammar,
    by_text: HashMap<String, Arc<CompiledExpression>>,
    by_canonical: HashMap<String, Arc<CompiledExpression>>,
}

impl<'g> ArgumentCompiler<'g> {
    fn new(grammar: &'g Grammar) -> Self {
        Self {
            grammar,
            by_text: HashMap::new(),
            by_canonical: HashMap::new(),
        }
    }

    fn fill(&mut self, rule: &mut Rule) -> Result<(), SchemeError> {
        for child in rule.children_mut() {
            if let Some(text) = child.arguments().map(str::to_owned) {
                let matcher = self.compile(&text).map_err(|error| {
                    SchemeError::grammar(child.keyword().to_string(), child.row(), error)
                })?;
                child.set_matcher(matcher);
            }
            self.fill(child)?;
        }
        Ok(())
    }

    fn compile(&mut self, text: &str) -> Result<Arc<CompiledExpression>, GrammarError> {
        if let Some(matcher) = self.by_text.get(text) {
            return Ok(Arc::clone(matcher));
        }

        let expression = self.grammar.parse(text, Flavor::Full)?;
        let matcher = match self.by_canonical.entry(expression.canonical()) {
            Entry::Occupied(slot) => Arc::clone(slot.get()),
            Entry::Vacant(slot) => {
                debug!(
                    arguments = text,
                    canonical = slot.key().as_str(),
                    "compiling argument grammar"
                );
                let compiled = Arc::new(self.grammar.compile(expression)?);
                Arc::clone(slot.insert(compiled))
            }
        };
        self.by_text.insert(text.to_owned(), Arc::clone(&matcher));
        Ok(matcher)
    }
}
