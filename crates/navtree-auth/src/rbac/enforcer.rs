//! Role-based [`PermissionOracle`] implementation.

use navtree_core::config::access::AccessConfig;
use navtree_core::types::{Capability, Subject};

use crate::oracle::{AuthorizationRequest, PermissionOracle};

use super::policies::RbacPolicies;

/// Answers authorization questions from role grants.
///
/// Rules, per capability:
/// - Site administrators hold everything; gallery administrators hold
///   everything inside the scopes they administer.
/// - Otherwise a role holds a capability on a container when it grants the
///   capability and the container is among its (descendant-expanded) grants.
///   For a virtual container any grant inside the same scope counts.
/// - Private containers are never visible without a matching grant.
/// - Non-private containers are browsable by everyone, signed in or not,
///   when anonymous browsing is enabled.
#[derive(Debug, Clone)]
pub struct RolePermissionOracle {
    /// The policy configuration.
    policies: RbacPolicies,
    /// Anonymous access settings.
    access: AccessConfig,
}

impl RolePermissionOracle {
    /// Creates an oracle over the given policies.
    pub fn new(policies: RbacPolicies, access: AccessConfig) -> Self {
        Self { policies, access }
    }

    /// Resolves a username into a subject using the role memberships.
    pub fn subject_for(&self, username: Option<&str>) -> Subject {
        match username {
            None => Subject::Anonymous,
            Some(name) => Subject::user(name, self.policies.roles_for(name)),
        }
    }

    fn holds(&self, request: &AuthorizationRequest<'_>, capability: Capability) -> bool {
        let granted = request
            .subject
            .roles()
            .iter()
            .filter_map(|name| self.policies.get(name))
            .any(|policy| {
                if policy.is_site_admin() || policy.administers(request.scope_id) {
                    return true;
                }
                if !policy.capabilities.contains(&capability) {
                    return false;
                }
                if request.is_virtual {
                    policy.scopes.contains(&request.scope_id)
                } else {
                    policy.containers.contains(&request.container_id)
                }
            });

        granted || self.public_allows(request, capability)
    }

    fn public_allows(&self, request: &AuthorizationRequest<'_>, capability: Capability) -> bool {
        if request.is_private || !self.access.allow_anonymous_browsing {
            return false;
        }
        match capability {
            Capability::ViewAlbumOrMediaObject => true,
            Capability::ViewOriginalMedia => self.access.allow_anonymous_original_media,
            _ => false,
        }
    }
}

impl PermissionOracle for RolePermissionOracle {
    fn is_authorized(&self, request: &AuthorizationRequest<'_>) -> bool {
        request.match_mode.evaluate(
            request
                .capabilities
                .iter()
                .map(|capability| self.holds(request, *capability)),
        )
    }
}
