//! Role entity model.

use serde::{Deserialize, Serialize};

use navtree_core::types::{Capability, ContainerId};

/// A named set of capabilities granted on a set of containers.
///
/// A grant on a container applies to all of its descendants once the role
/// has been expanded against the hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    /// Role name.
    pub name: String,
    /// Capabilities the role grants.
    #[serde(default)]
    pub capabilities: Vec<Capability>,
    /// Containers the role is granted on.
    #[serde(default)]
    pub container_ids: Vec<ContainerId>,
    /// Usernames that belong to the role.
    #[serde(default)]
    pub members: Vec<String>,
}
