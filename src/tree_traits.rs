/*
Conversion of outline trees into termtree trees for human-readable display
(box-drawing connectors). The quoted `Display` output of `Tree` stays the
canonical, byte-exact representation; this one is for people.
 */
use termtree::Tree as TermTree;
use tracing::instrument;

use crate::domain::{Node, Tree};

pub trait TreeNodeConvert {
    fn to_tree_string(&self) -> TermTree<String>;
}

impl TreeNodeConvert for Node {
    #[instrument(level = "trace", skip(self), fields(value = self.value()))]
    fn to_tree_string(&self) -> TermTree<String> {
        let leaves: Vec<_> = self.children().iter().map(|c| c.to_tree_string()).collect();

        TermTree::new(self.value().to_string()).with_leaves(leaves)
    }
}

impl TreeNodeConvert for Tree {
    fn to_tree_string(&self) -> TermTree<String> {
        self.root().to_tree_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_tree_string_renders_box_drawing() {
        let tree = Tree::new("root", [(0, "a"), (1, "a1"), (0, "b")]).unwrap();

        let rendered = tree.to_tree_string().to_string();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines, vec!["root", "├── a", "│   └── a1", "└── b"]);
    }

    #[test]
    fn test_to_tree_string_lone_root() {
        let tree = Tree::new("root", Vec::<(usize, &str)>::new()).unwrap();
        assert_eq!(tree.to_tree_string().to_string().trim_end(), "root");
    }
}
