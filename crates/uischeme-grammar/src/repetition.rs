//! Capture-list inference for pattern expressions.
//!
//! A leaf id captures as a list when it sits beneath `*` or `+`, or when it
//! occurs more than once anywhere in the expression. Everything else
//! captures as a scalar. The decision is made once per expression and never
//! changes at runtime, even if a repetition happens to match a single time.

use std::collections::HashMap;

use crate::pattern::PatternNode;

/// Per-id capture-list flags of one expression.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListFlags {
    flags: HashMap<String, bool>,
}

impl ListFlags {
    /// Computes the flags for the tree rooted at `root`.
    #[must_use]
    pub fn analyze(root: &PatternNode) -> Self {
        let mut flags = Self::default();
        flags.visit(root, false);
        flags
    }

    fn visit(&mut self, node: &PatternNode, repeated: bool) {
        match node {
            PatternNode::Lex(id) | PatternNode::Def(id) => {
                self.flags
                    .entry(id.clone())
                    .and_modify(|list| *list = true)
                    .or_insert(repeated);
            }
            PatternNode::Seq(children) | PatternNode::Set(children) => {
                for child in children {
                    self.visit(child, repeated);
                }
            }
            PatternNode::Opt(child) => self.visit(child, repeated),
            PatternNode::Star(child) | PatternNode::Plus(child) => self.visit(child, true),
        }
    }

    /// Returns whether captures of `id` are collected into a list.
    #[must_use]
    pub fn is_list(&self, id: &str) -> bool {
        self.flags.get(id).copied().unwrap_or(false)
    }

    /// Returns the ids that appear in the expression.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.flags.keys().map(String::as_str)
    }
}
