//! Read-only container access used while building trees.

use async_trait::async_trait;

use navtree_core::result::AppResult;
use navtree_core::types::{ContainerId, ScopeId};
use navtree_entity::container::Container;
use navtree_entity::scope::Scope;

/// Loads containers and answers structural questions about the hierarchy.
///
/// Implementations may cache internally. A container that does not exist is
/// reported as an error of kind [`navtree_core::error::ErrorKind::NotFound`]
/// from [`ContainerRepository::load`]; the other queries answer for a missing
/// container as if it had no children.
#[async_trait]
pub trait ContainerRepository: Send + Sync + 'static {
    /// Load a container, optionally with its direct children inflated.
    async fn load(&self, id: ContainerId, inflate_children: bool) -> AppResult<Container>;

    /// Whether the container has at least one child container.
    async fn has_any_child_container(&self, id: ContainerId) -> AppResult<bool>;

    /// Direct child containers, in display order when `sorted` is set.
    async fn child_containers(&self, id: ContainerId, sorted: bool) -> AppResult<Vec<Container>>;

    /// Find a scope by ID.
    async fn scope(&self, id: ScopeId) -> AppResult<Option<Scope>>;

    /// The designated top container of a scope, if it has one.
    async fn top_container(&self, scope_id: ScopeId) -> AppResult<Option<Container>>;
}
