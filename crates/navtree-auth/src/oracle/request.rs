//! Authorization request passed to a [`super::PermissionOracle`].

use navtree_core::types::{Capability, ContainerId, MatchMode, ScopeId, Subject};
use navtree_entity::container::Container;

/// Everything an oracle needs to decide one authorization question.
#[derive(Debug, Clone, Copy)]
pub struct AuthorizationRequest<'a> {
    /// Capabilities being asked for.
    pub capabilities: &'a [Capability],
    /// Who is asking.
    pub subject: &'a Subject,
    /// The container being acted on.
    pub container_id: ContainerId,
    /// The scope owning the container.
    pub scope_id: ScopeId,
    /// Whether the container is private.
    pub is_private: bool,
    /// Whether the container is a virtual aggregation.
    pub is_virtual: bool,
    /// How `capabilities` are combined.
    pub match_mode: MatchMode,
}

impl<'a> AuthorizationRequest<'a> {
    /// Builds a request for a container.
    pub fn for_container(
        capabilities: &'a [Capability],
        subject: &'a Subject,
        container: &Container,
        match_mode: MatchMode,
    ) -> Self {
        Self {
            capabilities,
            subject,
            container_id: container.id,
            scope_id: container.scope_id,
            is_private: container.is_private,
            is_virtual: container.is_virtual,
            match_mode,
        }
    }
}
