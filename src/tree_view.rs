use termtree::Tree;
use tracing::instrument;

use crate::domain::{NodeCollection, RtfNodeRef, RtfTreeNode};

/// Renders a collection as a one-level `termtree`: the label at the root,
/// one leaf per element in collection order.
pub trait TreeView {
    fn to_tree_string(&self, label: &str, show_parameters: bool) -> Tree<String>;
}

impl TreeView for NodeCollection<RtfNodeRef> {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self, label: &str, show_parameters: bool) -> Tree<String> {
        let leaves: Vec<_> = self
            .iter()
            .enumerate()
            .map(|(index, node)| Tree::new(node_label(index, &node.borrow(), show_parameters)))
            .collect();
        Tree::new(format!("{} ({})", label, self.len())).with_leaves(leaves)
    }
}

pub fn node_label(index: usize, node: &RtfTreeNode, show_parameters: bool) -> String {
    if show_parameters {
        format!("[{}] {}", index, node)
    } else {
        let stripped = RtfTreeNode {
            has_parameter: false,
            ..node.clone()
        };
        format!("[{}] {}", index, stripped)
    }
}
