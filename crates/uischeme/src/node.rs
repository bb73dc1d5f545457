//! Node trees read by the scheme builder and the validator.
//!
//! Schemes and subject documents share one tree shape: a tag, optional
//! trailing argument text, ordered children and the source row the node came
//! from. [`TreeNode`] is the read side of that shape and [`AnnotatedNode`]
//! the write side used when validation records parsed arguments. [`Node`] is
//! the concrete tree produced by [`outline::parse`](crate::outline::parse).

use serde::Serialize;
use uischeme_grammar::CaptureContext;

/// Read access to a node of a scheme or subject tree.
pub trait TreeNode: Sized {
    /// Returns the node tag.
    fn tag(&self) -> &str;

    /// Returns the raw argument text, if present and not yet parsed.
    fn raw_arguments(&self) -> Option<&str>;

    /// Returns `true` once the arguments were replaced by a parsed context.
    fn is_annotated(&self) -> bool;

    /// Returns the children in document order.
    fn children(&self) -> &[Self];

    /// Returns the source row, 1-based. Synthetic roots use row 0.
    fn row(&self) -> usize;
}

/// Write access used to annotate a subject tree during validation.
pub trait AnnotatedNode: TreeNode {
    /// Returns the children for in-place annotation.
    fn children_mut(&mut self) -> &mut [Self];

    /// Replaces the raw arguments with their parsed capture context.
    fn annotate(&mut self, context: CaptureContext);
}

/// Trailing text of a node, raw or parsed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeArgument {
    /// Text as read from the document.
    Raw(String),
    /// Captures recorded by the argument grammar that accepted the text.
    Parsed(CaptureContext),
}

/// A concrete tree node.
///
/// ```
/// use uischeme::{Node, TreeNode};
///
/// let node = Node::new("page", 3).with_arguments("home");
/// assert_eq!(node.raw_arguments(), Some("home"));
/// assert!(node.children().is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    tag: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    argument: Option<NodeArgument>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Self>,
    row: usize,
}

impl Node {
    /// Creates a node without arguments or children.
    #[must_use]
    pub fn new(tag: impl Into<String>, row: usize) -> Self {
        Self {
            tag: tag.into(),
            argument: None,
            children: Vec::new(),
            row,
        }
    }

    /// Creates the synthetic root holding a document's top-level nodes.
    #[must_use]
    pub fn root() -> Self {
        Self::new("", 0)
    }

    /// Sets the raw argument text.
    #[must_use]
    pub fn with_arguments(mut self, text: impl Into<String>) -> Self {
        self.argument = Some(NodeArgument::Raw(text.into()));
        self
    }

    /// Appends a child.
    #[must_use]
    pub fn with_child(mut self, child: Self) -> Self {
        self.children.push(child);
        self
    }

    /// Appends a child in place.
    pub fn push_child(&mut self, child: Self) {
        self.children.push(child);
    }

    /// Returns the argument, raw or parsed.
    #[must_use]
    pub const fn argument(&self) -> Option<&NodeArgument> {
        self.argument.as_ref()
    }

    /// Returns the parsed arguments, once validation annotated the node.
    #[must_use]
    pub const fn context(&self) -> Option<&CaptureContext> {
        match &self.argument {
            Some(NodeArgument::Parsed(context)) => Some(context),
            _ => None,
        }
    }
}

impl TreeNode for Node {
    fn tag(&self) -> &str {
        &self.tag
    }

    fn raw_arguments(&self) -> Option<&str> {
        match &self.argument {
            Some(NodeArgument::Raw(text)) => Some(text),
            _ => None,
        }
    }

    fn is_annotated(&self) -> bool {
        matches!(self.argument, Some(NodeArgument::Parsed(_)))
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn row(&self) -> usize {
        self.row
    }
}

impl AnnotatedNode for Node {
    fn children_mut(&mut self) -> &mut [Self] {
        &mut self.children
    }

    fn annotate(&mut self, context: CaptureContext) {
        self.argument = Some(NodeArgument::Parsed(context));
    }
}
