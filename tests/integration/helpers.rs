//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use navtree_auth::{RbacPolicies, RolePermissionOracle};
use navtree_core::config::access::AccessConfig;
use navtree_core::result::AppResult;
use navtree_core::types::{Capability, ContainerId, ScopeId, Subject};
use navtree_entity::container::Container;
use navtree_entity::scope::Scope;
use navtree_entity::tree::Tree;
use navtree_service::{BuildOptions, RecordingErrorSink, RegexSanitizer, TreeBuilder};
use navtree_store::{GalleryFixture, MemoryContainerRepository};

/// Path of the sample gallery shipped with the repository.
pub const FIXTURE_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/gallery.json");

/// In-memory gallery with roles, wired into a tree builder.
pub struct TestGallery {
    /// Container storage
    pub repo: Arc<MemoryContainerRepository>,
    /// Role grants
    pub policies: RbacPolicies,
    /// Anonymous access settings
    pub access: AccessConfig,
    /// Captures absorbed errors
    pub sink: Arc<RecordingErrorSink>,
    scope_of: HashMap<ContainerId, ScopeId>,
}

impl TestGallery {
    /// Create an empty gallery
    pub fn new() -> Self {
        Self {
            repo: Arc::new(MemoryContainerRepository::new()),
            policies: RbacPolicies::new(),
            access: AccessConfig::default(),
            sink: Arc::new(RecordingErrorSink::new()),
            scope_of: HashMap::new(),
        }
    }

    /// Load the sample gallery fixture
    pub fn from_fixture() -> Self {
        let fixture = GalleryFixture::load(FIXTURE_PATH).expect("Failed to load gallery fixture");
        Self {
            repo: Arc::new(fixture.to_repository()),
            policies: RbacPolicies::from_fixture(&fixture),
            access: AccessConfig::default(),
            sink: Arc::new(RecordingErrorSink::new()),
            scope_of: fixture.containers.iter().map(|c| (c.id, c.scope_id)).collect(),
        }
    }

    /// Add a scope whose top container is `top`
    pub fn scope(&mut self, id: i64, description: &str, top: Option<i64>) -> &mut Self {
        self.repo.insert_scope(Scope {
            id: ScopeId(id),
            description: description.to_string(),
            top_container_id: top.map(ContainerId),
        });
        self
    }

    /// Add a public container
    pub fn album(&mut self, id: i64, scope: i64, parent: Option<i64>, title: &str) -> &mut Self {
        self.insert(id, scope, parent, title, false, false)
    }

    /// Add a private container
    pub fn private_album(
        &mut self,
        id: i64,
        scope: i64,
        parent: Option<i64>,
        title: &str,
    ) -> &mut Self {
        self.insert(id, scope, parent, title, true, false)
    }

    /// Add a virtual container
    pub fn virtual_album(
        &mut self,
        id: i64,
        scope: i64,
        parent: Option<i64>,
        title: &str,
    ) -> &mut Self {
        self.insert(id, scope, parent, title, false, true)
    }

    fn insert(
        &mut self,
        id: i64,
        scope: i64,
        parent: Option<i64>,
        title: &str,
        is_private: bool,
        is_virtual: bool,
    ) -> &mut Self {
        self.repo.insert_container(Container {
            id: ContainerId(id),
            scope_id: ScopeId(scope),
            parent_id: parent.map(ContainerId),
            title: title.to_string(),
            is_private,
            is_virtual,
            sort_order: 0,
            children: None,
        });
        self.scope_of.insert(ContainerId(id), ScopeId(scope));
        self
    }

    /// Grant capabilities on a container and its current descendants to a
    /// role, and make `user` a member of it
    pub fn grant(
        &mut self,
        user: &str,
        role: &str,
        capabilities: &[Capability],
        container: i64,
    ) -> &mut Self {
        let root = ContainerId(container);
        let grants: Vec<(ContainerId, ScopeId)> = std::iter::once(root)
            .chain(self.repo.descendant_ids(root))
            .filter_map(|id| self.scope_of.get(&id).map(|scope| (id, *scope)))
            .collect();
        self.policies.grant(role, capabilities.iter().copied(), grants);
        self.policies.add_member(user, role);
        self
    }

    /// Build a tree builder over the current state
    pub fn builder(&self) -> TreeBuilder {
        let oracle = RolePermissionOracle::new(self.policies.clone(), self.access.clone());
        TreeBuilder::new(
            self.repo.clone(),
            Arc::new(oracle),
            Arc::new(RegexSanitizer),
            self.sink.clone(),
        )
    }

    /// Resolve a subject through the role memberships
    pub fn subject(&self, user: Option<&str>) -> Subject {
        RolePermissionOracle::new(self.policies.clone(), self.access.clone()).subject_for(user)
    }

    /// Build a tree
    pub async fn build(&self, options: &BuildOptions, user: Option<&str>) -> AppResult<Tree> {
        self.builder().build(options, &self.subject(user)).await
    }
}

/// Data ids of the top-level nodes, in order
pub fn root_ids(tree: &Tree) -> Vec<&str> {
    tree.roots.iter().map(|n| n.data_id.as_str()).collect()
}

/// Data ids of a node's children, in order
pub fn child_ids<'a>(tree: &'a Tree, id: &str) -> Vec<&'a str> {
    tree.find_node_by_data_id(id)
        .map(|n| n.children.iter().map(|c| c.data_id.as_str()).collect())
        .unwrap_or_default()
}
