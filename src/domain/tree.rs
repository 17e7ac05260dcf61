//! Outline tree: an ordered, owned multi-way tree of directory names.
//!
//! The hierarchy is reconstructed from a flat sequence of `(depth, name)`
//! pairs. Each line attaches to the nearest still-open node with a smaller
//! depth; the root is shallower than any line. A line that skips levels is
//! therefore anchored to its closest shallower ancestor instead of failing.

use std::fmt;

use tracing::{debug, instrument, trace};

use crate::domain::error::{DomainError, DomainResult};
use crate::domain::parser::{parse_with, BlankLines, ParsedLine};

/// Characters a node value must not contain.
///
/// `:` is reserved as a separator, `/` would silently nest directories.
pub const ILLEGAL_CHARACTERS: [char; 2] = [':', '/'];

/// Check a node value against the naming rules.
pub fn validate_value(value: &str) -> DomainResult<()> {
    if let Some(character) = value.chars().find(|c| ILLEGAL_CHARACTERS.contains(c)) {
        return Err(DomainError::IllegalCharacter {
            value: value.to_string(),
            character,
        });
    }
    if matches!(value, "." | "..") {
        return Err(DomainError::ReservedName {
            value: value.to_string(),
        });
    }
    Ok(())
}

/// A named node, exclusively owning its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    value: String,
    children: Vec<Node>,
}

impl Node {
    fn leaf(value: &str) -> Self {
        Self {
            value: value.to_string(),
            children: Vec::new(),
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Append `child` as the last child.
    pub fn add_child(&mut self, child: Node) {
        self.children.push(child);
    }

    /// Pre-order traversal yielding `(depth, node)`, with `self` at depth 0.
    pub fn iter(&self) -> NodeIterator<'_> {
        NodeIterator::new(self)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (depth, node) in self.iter() {
            writeln!(f, "{}'{}'", " ".repeat(depth), node.value)?;
        }
        Ok(())
    }
}

/// Depth-first, left-to-right iterator over a node and its descendants.
pub struct NodeIterator<'a> {
    stack: Vec<(usize, &'a Node)>,
}

impl<'a> NodeIterator<'a> {
    fn new(root: &'a Node) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a> Iterator for NodeIterator<'a> {
    type Item = (usize, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, node) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in node.children.iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, node))
    }
}

/// A rooted outline tree. Construction either fully succeeds or fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tree {
    root: Node,
}

impl Tree {
    /// Build a tree under `root` from parsed outline lines.
    ///
    /// The root value is kept exactly as given; only line values are trimmed.
    /// Fails on the first invalid value; no partial tree is returned.
    #[instrument(level = "debug", skip(lines))]
    pub fn new<I, L>(root: &str, lines: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = L>,
        L: Into<ParsedLine>,
    {
        if root.trim().is_empty() {
            return Err(DomainError::EmptyRoot);
        }
        validate_value(root)?;

        let mut root = Node::leaf(root);
        // Open ancestors, shallowest first; the root sits below them all.
        let mut open: Vec<(usize, Node)> = Vec::new();

        for line in lines {
            let ParsedLine { depth, name } = line.into();
            let value = name.trim();
            if value.is_empty() {
                return Err(DomainError::EmptyValue { depth });
            }
            validate_value(value)?;

            close_from(&mut open, &mut root, depth);
            trace!("open: depth={} value={:?} level={}", depth, value, open.len() + 1);
            open.push((depth, Node::leaf(value)));
        }
        close_from(&mut open, &mut root, 0);

        let tree = Self { root };
        debug!("built tree: nodes={} levels={}", tree.len(), tree.depth());
        Ok(tree)
    }

    /// Parse `text` and build a tree under `root`.
    pub fn from_text(root: &str, text: &str, blank_lines: BlankLines) -> DomainResult<Self> {
        Self::new(root, parse_with(text, blank_lines))
    }

    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Pre-order traversal yielding `(depth, node)`, root at depth 0.
    pub fn iter(&self) -> NodeIterator<'_> {
        self.root.iter()
    }

    /// Number of nodes, root included.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// A tree always has its root.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Number of levels; a lone root has depth 1.
    pub fn depth(&self) -> usize {
        self.iter().map(|(depth, _)| depth + 1).max().unwrap_or(1)
    }
}

impl fmt::Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.root, f)
    }
}

/// Close every open node at `depth` or deeper, attaching each to its parent.
fn close_from(open: &mut Vec<(usize, Node)>, root: &mut Node, depth: usize) {
    while matches!(open.last(), Some((open_depth, _)) if *open_depth >= depth) {
        let Some((_, node)) = open.pop() else {
            break;
        };
        match open.last_mut() {
            Some((_, parent)) => parent.add_child(node),
            None => root.add_child(node),
        }
    }
}
