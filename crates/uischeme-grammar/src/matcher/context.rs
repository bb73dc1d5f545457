//! Evaluation environment shared across recursive step calls.

use std::cell::Cell;

use tracing::warn;

use super::capture::CaptureRecorder;
use super::compile::{Failure, Step, StepResult};
use crate::definition::DefinitionId;
use crate::error::MatchError;

pub(crate) struct MatchEnv<'a> {
    pub(super) text: &'a str,
    bodies: &'a [Step],
    depth: Cell<usize>,
    limit: usize,
    limit_hit: Cell<Option<usize>>,
}

impl<'a> MatchEnv<'a> {
    pub(super) const fn new(text: &'a str, bodies: &'a [Step], limit: usize) -> Self {
        Self {
            text,
            bodies,
            depth: Cell::new(0),
            limit,
            limit_hit: Cell::new(None),
        }
    }

    /// Runs the body of definition `id` at `pos`, tracking recursion depth.
    pub(super) fn invoke(
        &self,
        id: DefinitionId,
        pos: usize,
        ctx: &mut CaptureRecorder,
    ) -> StepResult {
        let Some(body) = self.bodies.get(id.index()) else {
            return Err(Failure::at(pos));
        };

        let depth = self.depth.get();
        if depth >= self.limit {
            if self.limit_hit.get().is_none() {
                warn!(limit = self.limit, offset = pos, "definition recursion limit reached");
                self.limit_hit.set(Some(pos));
            }
            return Err(Failure::at(pos));
        }

        self.depth.set(depth + 1);
        let result = body(self, pos, ctx);
        self.depth.set(depth);
        result
    }

    /// Converts the result of the top-level step into a match outcome.
    ///
    /// Hitting the recursion limit anywhere during the attempt makes the
    /// outcome depend on the limit, so it is reported even when some other
    /// alternative went on to succeed.
    pub(super) fn finish(&self, result: StepResult) -> Result<usize, MatchError> {
        if let Some(offset) = self.limit_hit.get() {
            return Err(MatchError::RecursionLimit {
                limit: self.limit,
                offset,
            });
        }
        result.map_err(|failure| MatchError::NoMatch {
            offset: failure.offset(),
        })
    }
}
