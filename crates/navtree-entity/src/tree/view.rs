//! The complete navigation tree produced by one build.

use serde::{Deserialize, Serialize};

use super::node::TreeNode;

/// A forest of navigation nodes plus tree-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tree {
    /// Top-level nodes in forest order.
    pub roots: Vec<TreeNode>,
    /// Whether checkbox rendering is enabled for the whole tree.
    pub checkbox_mode_enabled: bool,
}

/// A node reached during a depth-first walk, with its level (roots are 1).
#[derive(Debug, Clone, Copy)]
pub struct NodeVisit<'a> {
    /// The visited node.
    pub node: &'a TreeNode,
    /// Level below the forest, starting at 1 for roots.
    pub level: usize,
}

impl Tree {
    /// Create an empty tree.
    pub fn empty(checkbox_mode_enabled: bool) -> Self {
        Self {
            roots: Vec::new(),
            checkbox_mode_enabled,
        }
    }

    /// Finds a node anywhere in the tree by its data id.
    pub fn find_node_by_data_id(&self, data_id: &str) -> Option<&TreeNode> {
        self.roots
            .iter()
            .find_map(|root| root.find_by_data_id(data_id))
    }

    /// Mutable variant of [`Tree::find_node_by_data_id`].
    pub fn find_node_by_data_id_mut(&mut self, data_id: &str) -> Option<&mut TreeNode> {
        self.roots
            .iter_mut()
            .find_map(|root| root.find_by_data_id_mut(data_id))
    }

    /// Returns whether a node with the data id exists.
    pub fn contains(&self, data_id: &str) -> bool {
        self.find_node_by_data_id(data_id).is_some()
    }

    /// Walks every node depth-first in render order.
    pub fn iter(&self) -> impl Iterator<Item = NodeVisit<'_>> {
        let mut stack: Vec<NodeVisit<'_>> = self
            .roots
            .iter()
            .rev()
            .map(|node| NodeVisit { node, level: 1 })
            .collect();

        std::iter::from_fn(move || {
            let visit = stack.pop()?;
            stack.extend(visit.node.children.iter().rev().map(|node| NodeVisit {
                node,
                level: visit.level + 1,
            }));
            Some(visit)
        })
    }

    /// Total number of nodes.
    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Data ids of selected nodes in render order.
    pub fn selected_data_ids(&self) -> Vec<&str> {
        self.iter()
            .filter(|visit| visit.node.selected)
            .map(|visit| visit.node.data_id.as_str())
            .collect()
    }
}
