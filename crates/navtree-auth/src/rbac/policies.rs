//! Role-to-grant mapping definitions.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use navtree_core::types::{Capability, ContainerId, ScopeId};
use navtree_store::GalleryFixture;

/// What a single role grants.
#[derive(Debug, Clone, Default)]
pub struct RolePolicy {
    /// Capabilities the role grants.
    pub capabilities: HashSet<Capability>,
    /// Containers the grant applies to, descendants included.
    pub containers: HashSet<ContainerId>,
    /// Scopes holding at least one granted container.
    pub scopes: HashSet<ScopeId>,
}

impl RolePolicy {
    /// Returns whether the role administers every scope.
    pub fn is_site_admin(&self) -> bool {
        self.capabilities.contains(&Capability::AdministerSite)
    }

    /// Returns whether the role administers the given scope.
    pub fn administers(&self, scope_id: ScopeId) -> bool {
        self.capabilities.contains(&Capability::AdministerGallery)
            && self.scopes.contains(&scope_id)
    }
}

/// Defines the mapping from each role name to its grants.
#[derive(Debug, Clone, Default)]
pub struct RbacPolicies {
    /// Role name → grants.
    policies: HashMap<String, RolePolicy>,
    /// Username → role names.
    memberships: HashMap<String, Vec<String>>,
}

impl RbacPolicies {
    /// Creates an empty policy set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds policies from a fixture, cascading each grant to the
    /// descendants of the granted containers.
    pub fn from_fixture(fixture: &GalleryFixture) -> Self {
        let repo = fixture.to_repository();
        let scope_of: HashMap<ContainerId, ScopeId> = fixture
            .containers
            .iter()
            .map(|c| (c.id, c.scope_id))
            .collect();

        let mut policies = Self::new();
        for role in &fixture.roles {
            let granted = role.container_ids.iter().flat_map(|id| {
                std::iter::once(*id).chain(repo.descendant_ids(*id))
            });
            let grants: Vec<(ContainerId, ScopeId)> = granted
                .filter_map(|id| scope_of.get(&id).map(|scope| (id, *scope)))
                .collect();

            debug!(role = %role.name, containers = grants.len(), "Expanded role grants");
            policies.grant(&role.name, role.capabilities.iter().copied(), grants);
            for member in &role.members {
                policies.add_member(member, &role.name);
            }
        }
        policies
    }

    /// Adds capabilities on containers to a role, creating it if needed.
    pub fn grant<C, G>(&mut self, role: &str, capabilities: C, containers: G)
    where
        C: IntoIterator<Item = Capability>,
        G: IntoIterator<Item = (ContainerId, ScopeId)>,
    {
        let policy = self.policies.entry(role.to_string()).or_default();
        policy.capabilities.extend(capabilities);
        for (container_id, scope_id) in containers {
            policy.containers.insert(container_id);
            policy.scopes.insert(scope_id);
        }
    }

    /// Records that a user belongs to a role.
    pub fn add_member(&mut self, username: &str, role: &str) {
        let roles = self
            .memberships
            .entry(username.to_ascii_lowercase())
            .or_default();
        if !roles.iter().any(|r| r == role) {
            roles.push(role.to_string());
        }
    }

    /// Role names a user belongs to.
    pub fn roles_for(&self, username: &str) -> Vec<String> {
        self.memberships
            .get(&username.to_ascii_lowercase())
            .cloned()
            .unwrap_or_default()
    }

    /// Looks up a role's grants.
    pub fn get(&self, role: &str) -> Option<&RolePolicy> {
        self.policies.get(role)
    }
}
