//! Compilation of pattern syntax trees into step functions.
//!
//! A step takes the evaluation environment, a byte cursor and the capture
//! recorder of the enclosing call. On success it returns the cursor just past
//! what it consumed. On failure it returns the furthest offset reached and
//! leaves the recorded captures as it found them.

use std::collections::HashMap;
use std::sync::Arc;

use super::capture::{CaptureRecorder, CaptureValue};
use super::context::MatchEnv;
use crate::definition::{Definition, DefinitionId};
use crate::error::GrammarError;
use crate::lexeme::{Lexeme, LexemeRegistry};
use crate::names::identifier_at;
use crate::pattern::{Expression, PatternNode};
use crate::repetition::ListFlags;

/// Failure of a step, carrying the furthest byte offset reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Failure {
    offset: usize,
}

impl Failure {
    pub(crate) const fn at(offset: usize) -> Self {
        Self { offset }
    }

    pub(crate) const fn offset(self) -> usize {
        self.offset
    }

    /// Keeps whichever failure got further, preferring `self` on a tie.
    const fn furthest(self, other: Self) -> Self {
        if other.offset > self.offset { other } else { self }
    }
}

pub(crate) type StepResult = Result<usize, Failure>;

pub(crate) type Step =
    Arc<dyn Fn(&MatchEnv<'_>, usize, &mut CaptureRecorder) -> StepResult + Send + Sync>;

fn step<F>(f: F) -> Step
where
    F: Fn(&MatchEnv<'_>, usize, &mut CaptureRecorder) -> StepResult + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Names a compiled expression may refer to.
pub(crate) struct Symbols<'g> {
    pub(crate) lexemes: &'g LexemeRegistry,
    pub(crate) definitions: &'g HashMap<String, DefinitionId>,
}

impl Symbols<'_> {
    fn lexeme(&self, name: &str) -> Result<Arc<Lexeme>, GrammarError> {
        self.lexemes
            .shared(name)
            .ok_or_else(|| GrammarError::unknown_identifier(name, 0))
    }

    fn definition(&self, name: &str) -> Result<DefinitionId, GrammarError> {
        self.definitions
            .get(name)
            .copied()
            .ok_or_else(|| GrammarError::unknown_identifier(name, 0))
    }
}

/// Compiles `expression`. The empty expression matches without consuming.
pub(crate) fn compile_expression(
    expression: &Expression,
    symbols: &Symbols<'_>,
) -> Result<Step, GrammarError> {
    expression.root().map_or_else(
        || Ok(empty()),
        |root| compile_node(root, expression.lists(), symbols),
    )
}

/// Compiles the body of `definition`.
///
/// Sequences combine as alternatives. When a case table is present, an
/// identifier at the cursor that names a case selects that case first and
/// the sequences only run if no case fires.
pub(crate) fn compile_definition(
    definition: &Definition,
    symbols: &Symbols<'_>,
) -> Result<Step, GrammarError> {
    let seqs = definition
        .seqs()
        .iter()
        .map(|expression| compile_expression(expression, symbols))
        .collect::<Result<Vec<_>, _>>()?;
    let fallback = match seqs.len() {
        0 => None,
        1 => seqs.into_iter().next(),
        _ => Some(set(seqs)),
    };

    if definition.cases().is_empty() {
        return Ok(fallback.unwrap_or_else(empty));
    }

    let mut cases = HashMap::new();
    for declaration in definition.cases() {
        let body = compile_expression(declaration.expression(), symbols)?;
        for id in declaration.ids() {
            cases.insert(id.clone(), Arc::clone(&body));
        }
    }
    Ok(dispatch(cases, fallback))
}

fn compile_node(
    node: &PatternNode,
    lists: &ListFlags,
    symbols: &Symbols<'_>,
) -> Result<Step, GrammarError> {
    let compile_all = |children: &[PatternNode]| {
        children
            .iter()
            .map(|child| compile_node(child, lists, symbols))
            .collect::<Result<Vec<_>, _>>()
    };

    Ok(match node {
        PatternNode::Lex(id) => lex(id.clone(), symbols.lexeme(id)?, lists.is_list(id)),
        PatternNode::Def(id) => def(id.clone(), symbols.definition(id)?, lists.is_list(id)),
        PatternNode::Seq(children) => seq(compile_all(children)?),
        PatternNode::Set(children) => set(compile_all(children)?),
        PatternNode::Opt(child) => opt(compile_node(child, lists, symbols)?),
        PatternNode::Star(child) => star(compile_node(child, lists, symbols)?),
        PatternNode::Plus(child) => plus(compile_node(child, lists, symbols)?),
    })
}

fn empty() -> Step {
    step(|_, pos, _| Ok(pos))
}

fn lex(id: String, lexeme: Arc<Lexeme>, as_list: bool) -> Step {
    step(move |env, pos, ctx| {
        let Some(found) = lexeme.match_at(env.text, pos) else {
            return Err(Failure::at(pos));
        };
        if let Some(value) = found.value {
            ctx.record(&id, value, as_list);
        }
        Ok(found.end)
    })
}

fn def(id: String, target: DefinitionId, as_list: bool) -> Step {
    step(move |env, pos, ctx| {
        let mut sub = CaptureRecorder::new();
        let end = env.invoke(target, pos, &mut sub)?;
        let context = sub.finish(end.saturating_sub(pos));
        ctx.record(&id, CaptureValue::Context(context), as_list);
        Ok(end)
    })
}

fn seq(parts: Vec<Step>) -> Step {
    step(move |env, pos, ctx| {
        let checkpoint = ctx.checkpoint();
        let mut cursor = pos;
        for part in &parts {
            match part(env, cursor, ctx) {
                Ok(next) => cursor = next,
                Err(failure) => {
                    ctx.rollback(checkpoint);
                    return Err(failure);
                }
            }
        }
        Ok(cursor)
    })
}

fn set(alternatives: Vec<Step>) -> Step {
    step(move |env, pos, ctx| {
        let mut failure = Failure::at(pos);
        for alternative in &alternatives {
            match alternative(env, pos, ctx) {
                Ok(end) => return Ok(end),
                Err(other) => failure = failure.furthest(other),
            }
        }
        Err(failure)
    })
}

fn opt(child: Step) -> Step {
    step(move |env, pos, ctx| Ok(child(env, pos, ctx).unwrap_or(pos)))
}

fn star(child: Step) -> Step {
    step(move |env, pos, ctx| Ok(repeat(&child, env, pos, ctx)))
}

fn plus(child: Step) -> Step {
    step(move |env, pos, ctx| {
        let first = child(env, pos, ctx)?;
        if first == pos {
            return Ok(pos);
        }
        Ok(repeat(&child, env, first, ctx))
    })
}

/// Applies `child` while it succeeds and advances.
fn repeat(child: &Step, env: &MatchEnv<'_>, pos: usize, ctx: &mut CaptureRecorder) -> usize {
    let mut cursor = pos;
    while let Ok(next) = child(env, cursor, ctx) {
        if next == cursor {
            break;
        }
        cursor = next;
    }
    cursor
}

fn dispatch(cases: HashMap<String, Step>, fallback: Option<Step>) -> Step {
    step(move |env, pos, ctx| {
        let mut failure = Failure::at(pos);

        let selected = identifier_at(env.text, pos).and_then(|word| cases.get_key_value(word));
        if let Some((case, body)) = selected {
            let checkpoint = ctx.checkpoint();
            ctx.select_case(case);
            match body(env, pos + case.len(), ctx) {
                Ok(end) => return Ok(end),
                Err(other) => {
                    ctx.rollback(checkpoint);
                    failure = other;
                }
            }
        }

        match &fallback {
            Some(seqs) => seqs(env, pos, ctx).map_err(|other| failure.furthest(other)),
            None => Err(failure),
        }
    })
}
