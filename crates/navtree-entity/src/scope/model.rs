//! Scope entity model.

use serde::{Deserialize, Serialize};

use navtree_core::types::{ContainerId, ScopeId};

/// A top-level partition of the hierarchy (a gallery).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scope {
    /// Unique scope identifier.
    pub id: ScopeId,
    /// Human-readable description, substituted into root labels.
    #[serde(default)]
    pub description: String,
    /// The designated top container. Absent for an empty gallery.
    #[serde(default)]
    pub top_container_id: Option<ContainerId>,
}
