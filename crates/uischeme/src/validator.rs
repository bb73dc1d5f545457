//! Subject tree validation.
//!
//! Each node is checked against the scope its parent was accepted by. The
//! rules accepting a node, from that scope and from the common scope
//! together, become the scope for its own children.

use tracing::trace;

use crate::config::ValidateMode;
use crate::error::ValidationError;
use crate::node::AnnotatedNode;
use crate::rule::Rule;

pub(crate) struct Validator<'s> {
    common: &'s Rule,
    mode: ValidateMode,
}

impl<'s> Validator<'s> {
    pub(crate) const fn new(common: &'s Rule, mode: ValidateMode) -> Self {
        Self { common, mode }
    }

    /// Validates the children of `node` against the rules under `scope`.
    pub(crate) fn walk<N: AnnotatedNode>(
        &self,
        scope: &[&'s Rule],
        node: &mut N,
    ) -> Result<(), ValidationError> {
        for child in node.children_mut() {
            let tag = child.tag().to_owned();

            let mut matched: Vec<&'s Rule> = Vec::new();
            for rule in scope.iter().copied().flat_map(|rule| rule.matching(&tag)) {
                self.apply(rule, child)?;
                matched.push(rule);
            }
            let own = matched.len();
            for rule in self.common.matching(&tag) {
                self.apply(rule, child)?;
                matched.push(rule);
            }

            if matched.is_empty() {
                return Err(ValidationError::invalid_node(tag, child.row()));
            }
            trace!(
                tag = tag.as_str(),
                row = child.row(),
                own,
                common = matched.len() - own,
                "accepted node"
            );
            self.walk(&matched, child)?;
        }
        Ok(())
    }

    /// Checks the arguments of `node` against the grammar of `rule`.
    fn apply<N: AnnotatedNode>(&self, rule: &Rule, node: &mut N) -> Result<(), ValidationError> {
        if node.is_annotated() {
            return Ok(());
        }
        let Some(outcome) = rule.check(node.raw_arguments().unwrap_or_default()) else {
            return Ok(());
        };
        match outcome {
            Ok(context) => {
                if self.mode.annotates() {
                    node.annotate(context);
                }
                Ok(())
            }
            Err(error) => Err(ValidationError::invalid_arguments(
                node.tag(),
                node.row(),
                error,
            )),
        }
    }
}
