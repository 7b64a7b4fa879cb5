//! A single node in a navigation tree.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use navtree_core::types::ContainerId;

/// Css class marking the node of a container with no parent.
pub const CSS_FOREST_TOP: &str = "navtree-root";

/// Css class marking a node the viewer cannot select.
pub const CSS_DISABLED: &str = "navtree-disabled";

/// One visual node backed by a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TreeNode {
    /// Element id, derived from the container id.
    pub id: String,
    /// String form of the container id, used for lookups.
    pub data_id: String,
    /// Display text with markup removed.
    pub text: String,
    /// Hover text with markup removed.
    pub tooltip: String,
    /// Direct navigation link, when the tree renders links.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub navigate_url: Option<String>,
    /// Whether the node may be chosen.
    pub selectable: bool,
    /// Whether a checkbox is rendered next to the node.
    pub show_checkbox: bool,
    /// Whether the node is pre-selected.
    pub selected: bool,
    /// Whether the node is rendered open.
    pub expanded: bool,
    /// Whether the container has at least one child container.
    pub has_children: bool,
    /// Css class tags.
    #[serde(default)]
    pub css_classes: BTreeSet<String>,
    /// Child nodes in display order.
    #[serde(default)]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    /// Creates a collapsed, unselected node for a container.
    pub fn new(container_id: ContainerId, text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            id: Self::node_id_for(container_id),
            data_id: container_id.to_string(),
            tooltip: text.clone(),
            text,
            navigate_url: None,
            selectable: false,
            show_checkbox: false,
            selected: false,
            expanded: false,
            has_children: false,
            css_classes: BTreeSet::new(),
            children: Vec::new(),
        }
    }

    /// Element id for the node of a container.
    pub fn node_id_for(container_id: ContainerId) -> String {
        format!("nav{container_id}")
    }

    /// Adds a css class tag.
    pub fn add_css_class(&mut self, class: impl Into<String>) {
        self.css_classes.insert(class.into());
    }

    /// Returns whether the node carries a css class tag.
    pub fn has_css_class(&self, class: &str) -> bool {
        self.css_classes.contains(class)
    }

    /// Appends a child and keeps `has_children` consistent with it.
    pub fn push_child(&mut self, child: TreeNode) {
        self.children.push(child);
        self.has_children = true;
    }

    /// Depth-first search for a node by data id, including `self`.
    pub fn find_by_data_id(&self, data_id: &str) -> Option<&TreeNode> {
        if self.data_id == data_id {
            return Some(self);
        }
        self.children
            .iter()
            .find_map(|child| child.find_by_data_id(data_id))
    }

    /// Mutable depth-first search for a node by data id, including `self`.
    pub fn find_by_data_id_mut(&mut self, data_id: &str) -> Option<&mut TreeNode> {
        if self.data_id == data_id {
            return Some(self);
        }
        self.children
            .iter_mut()
            .find_map(|child| child.find_by_data_id_mut(data_id))
    }

    /// Returns the direct child with the given data id.
    pub fn child_mut(&mut self, data_id: &str) -> Option<&mut TreeNode> {
        self.children
            .iter_mut()
            .find(|child| child.data_id == data_id)
    }
}
