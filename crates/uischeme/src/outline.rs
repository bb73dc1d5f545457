//! Minimal reader for tab-indented outline text.
//!
//! Each non-blank line holds one node: a tag, then optional argument text
//! after the first run of whitespace. A line indented one tab deeper than
//! the line above it is that line's child. Rows are 1-based line numbers.
//!
//! ```text
//! menu
//! 	group main
//! 		page home
//! ```

use crate::error::OutlineError;
use crate::node::Node;

/// Parses outline text into a tree under a synthetic root.
///
/// The root has an empty tag and row 0; the top-level lines become its
/// children.
///
/// # Errors
///
/// Returns [`OutlineError::TooDeep`] when a line skips an indentation level
/// and [`OutlineError::SpaceIndentation`] when a line is indented with
/// spaces.
///
/// # Example
///
/// ```
/// use uischeme::{TreeNode, outline};
///
/// let tree = outline::parse("menu\n\tpage home\n")?;
/// let menu = tree.children().first().expect("menu");
/// assert_eq!(menu.tag(), "menu");
/// assert_eq!(menu.children().first().and_then(TreeNode::raw_arguments), Some("home"));
/// # Ok::<(), uischeme::OutlineError>(())
/// ```
pub fn parse(text: &str) -> Result<Node, OutlineError> {
    let mut root = Node::root();
    let mut open: Vec<Node> = Vec::new();

    for (index, line) in text.lines().enumerate() {
        let row = index + 1;
        let body = line.trim_start_matches('\t');
        if body.trim().is_empty() {
            continue;
        }
        if body.starts_with(char::is_whitespace) {
            return Err(OutlineError::SpaceIndentation { row });
        }

        let depth = line.len() - body.len();
        if depth > open.len() {
            return Err(OutlineError::TooDeep {
                row,
                depth,
                allowed: open.len(),
            });
        }
        close_to(&mut root, &mut open, depth);
        open.push(read_line(body.trim_end(), row));
    }

    close_to(&mut root, &mut open, 0);
    Ok(root)
}

fn read_line(body: &str, row: usize) -> Node {
    match body.split_once(char::is_whitespace) {
        Some((tag, rest)) => {
            let arguments = rest.trim_start();
            let node = Node::new(tag, row);
            if arguments.is_empty() {
                node
            } else {
                node.with_arguments(arguments)
            }
        }
        None => Node::new(body, row),
    }
}

/// Closes open nodes until `depth` remain, attaching each to its parent.
fn close_to(root: &mut Node, open: &mut Vec<Node>, depth: usize) {
    while open.len() > depth {
        let Some(node) = open.pop() else { break };
        match open.last_mut() {
            Some(parent) => parent.push_child(node),
            None => root.push_child(node),
        }
    }
}
