//! Per-build options.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use validator::Validate;

use navtree_core::config::tree::TreeConfig;
use navtree_core::types::{Capability, ContainerId, MatchMode, ScopeId};

/// Immutable input of a single tree build.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BuildOptions {
    /// Build from this single container instead of a multi-scope forest.
    #[serde(default)]
    pub root_container_id: Option<ContainerId>,
    /// With a root container, render it as a node instead of starting at its children.
    #[serde(default)]
    pub include_root_container: bool,
    /// Scopes whose top containers become forest roots when no root container is given.
    #[serde(default)]
    pub scopes: Vec<ScopeId>,
    /// Levels materialized per forest root, the root level included.
    #[validate(range(min = 1))]
    pub depth: u32,
    /// Containers that must be visible, expanded and selected.
    #[serde(default)]
    pub pinned_ids: BTreeSet<ContainerId>,
    /// Turns every node into a link when set.
    #[serde(default)]
    pub navigate_url_template: Option<String>,
    /// Prefix template for top-level labels.
    #[serde(default)]
    pub root_label_template: String,
    /// Whether selectable nodes render checkboxes.
    #[serde(default)]
    pub checkbox_mode_enabled: bool,
    /// Capabilities that make a node selectable.
    #[validate(length(min = 1))]
    pub required_capabilities: Vec<Capability>,
    /// How `required_capabilities` are matched.
    #[serde(default)]
    pub capability_match: MatchMode,
}

impl BuildOptions {
    /// Options for a multi-scope forest using the configured defaults.
    pub fn from_config(config: &TreeConfig) -> Self {
        Self {
            root_container_id: None,
            include_root_container: false,
            scopes: Vec::new(),
            depth: config.depth,
            pinned_ids: BTreeSet::new(),
            navigate_url_template: config.navigate_url_template.clone(),
            root_label_template: config.root_label_template.clone(),
            checkbox_mode_enabled: config.checkbox_mode_enabled,
            required_capabilities: config.required_capabilities.clone(),
            capability_match: config.capability_match,
        }
    }

    /// Roots the tree at a single container.
    pub fn with_root(mut self, root: ContainerId, include_root: bool) -> Self {
        self.root_container_id = Some(root);
        self.include_root_container = include_root;
        self
    }

    /// Sets the scopes of a multi-scope forest.
    pub fn with_scopes(mut self, scopes: impl IntoIterator<Item = ScopeId>) -> Self {
        self.scopes = scopes.into_iter().collect();
        self
    }

    /// Sets the materialization depth.
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth;
        self
    }

    /// Adds pinned containers.
    pub fn with_pinned(mut self, ids: impl IntoIterator<Item = ContainerId>) -> Self {
        self.pinned_ids.extend(ids);
        self
    }

    /// Sets the navigation link template.
    pub fn with_navigate_url(mut self, template: impl Into<String>) -> Self {
        self.navigate_url_template = Some(template.into());
        self
    }

    /// Enables or disables checkbox rendering.
    pub fn with_checkboxes(mut self, enabled: bool) -> Self {
        self.checkbox_mode_enabled = enabled;
        self
    }

    /// Returns whether the container is pinned.
    pub fn is_pinned(&self, id: ContainerId) -> bool {
        self.pinned_ids.contains(&id)
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self::from_config(&TreeConfig::default())
    }
}
