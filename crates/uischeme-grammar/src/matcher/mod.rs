//! Evaluation of compiled pattern expressions.
//!
//! Expressions are compiled into a tree of step functions that advance a
//! byte cursor over the input and record captures as they go. Definitions
//! are reached through [`DefinitionId`](crate::DefinitionId) handles that
//! resolve against the owning grammar's compiled bodies at call time, which
//! is what lets definitions refer to themselves and to each other.

mod capture;
mod compile;
mod context;

use std::fmt;
use std::sync::Arc;

use crate::error::MatchError;
use crate::pattern::Expression;

pub use capture::{CaptureContext, CaptureValue};
pub(crate) use compile::{Step, Symbols, compile_definition, compile_expression};
use capture::CaptureRecorder;
use context::MatchEnv;

/// A pattern expression compiled against a grammar, ready to evaluate.
///
/// Compiled expressions are immutable and can be shared across threads.
#[derive(Clone)]
pub struct CompiledExpression {
    expression: Expression,
    step: Step,
    bodies: Arc<[Step]>,
    limit: usize,
}

impl CompiledExpression {
    pub(crate) const fn new(
        expression: Expression,
        step: Step,
        bodies: Arc<[Step]>,
        limit: usize,
    ) -> Self {
        Self {
            expression,
            step,
            bodies,
            limit,
        }
    }

    /// Returns the expression this matcher was compiled from.
    #[must_use]
    pub const fn expression(&self) -> &Expression {
        &self.expression
    }

    /// Matches the whole of `text`.
    ///
    /// # Errors
    ///
    /// Returns [`MatchError::NoMatch`] when the expression cannot match at
    /// the start of `text`, [`MatchError::TrailingInput`] when it matches a
    /// proper prefix only, and [`MatchError::RecursionLimit`] when definition
    /// calls nest deeper than the grammar's configured limit.
    pub fn evaluate(&self, text: &str) -> Result<CaptureContext, MatchError> {
        let env = MatchEnv::new(text, &self.bodies, self.limit);
        let mut recorder = CaptureRecorder::new();
        let result = (self.step)(&env, 0, &mut recorder);
        let end = env.finish(result)?;

        if end != text.len() {
            return Err(MatchError::TrailingInput { offset: end });
        }
        Ok(recorder.finish(end))
    }

    /// Returns whether the whole of `text` matches.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.evaluate(text).is_ok()
    }
}

impl fmt::Debug for CompiledExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompiledExpression")
            .field("expression", &self.expression.canonical())
            .field("limit", &self.limit)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
