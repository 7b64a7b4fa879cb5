//! Default tree build settings.

use serde::{Deserialize, Serialize};

use crate::types::{Capability, MatchMode};

/// Defaults applied to every tree build unless the caller overrides them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Number of levels materialized below (and including) each forest root.
    #[serde(default = "default_depth")]
    pub depth: u32,
    /// Whether selectable nodes render checkboxes.
    #[serde(default)]
    pub checkbox_mode_enabled: bool,
    /// Prefix template for top-level labels. Supports `{ScopeId}` and
    /// `{ScopeDescription}`.
    #[serde(default)]
    pub root_label_template: String,
    /// Navigation link template. Supports `{ContainerId}`; without the token
    /// an `aid` query parameter is appended.
    #[serde(default)]
    pub navigate_url_template: Option<String>,
    /// Capabilities that make a node selectable.
    #[serde(default = "default_required_capabilities")]
    pub required_capabilities: Vec<Capability>,
    /// How `required_capabilities` are matched.
    #[serde(default)]
    pub capability_match: MatchMode,
}

impl Default for TreeConfig {
    fn default() -> Self {
        Self {
            depth: default_depth(),
            checkbox_mode_enabled: false,
            root_label_template: String::new(),
            navigate_url_template: None,
            required_capabilities: default_required_capabilities(),
            capability_match: MatchMode::default(),
        }
    }
}

fn default_depth() -> u32 {
    1
}

fn default_required_capabilities() -> Vec<Capability> {
    vec![Capability::ViewAlbumOrMediaObject]
}
