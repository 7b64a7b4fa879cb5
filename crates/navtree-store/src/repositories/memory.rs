//! In-memory container repository.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dashmap::DashMap;
use tracing::debug;

use navtree_core::error::AppError;
use navtree_core::result::AppResult;
use navtree_core::types::{ContainerId, MediaObjectId, ScopeId};
use navtree_entity::container::{Container, GalleryObject, MediaObject};
use navtree_entity::scope::Scope;

use super::container::ContainerRepository;

/// Counters of the queries a repository has answered.
#[derive(Debug, Default)]
pub struct QueryStats {
    child_probes: AtomicUsize,
    child_listings: AtomicUsize,
}

impl QueryStats {
    /// Number of `has_any_child_container` calls.
    pub fn child_probes(&self) -> usize {
        self.child_probes.load(Ordering::Relaxed)
    }

    /// Number of `child_containers` calls.
    pub fn child_listings(&self) -> usize {
        self.child_listings.load(Ordering::Relaxed)
    }

    /// Total number of child queries of either kind.
    pub fn child_queries(&self) -> usize {
        self.child_probes() + self.child_listings()
    }
}

/// Arena of containers indexed by id.
///
/// Each container stores only its parent id; child lists are computed on
/// demand by scanning the arena. The maps are concurrent so containers can
/// be removed while builds are reading.
#[derive(Debug, Default)]
pub struct MemoryContainerRepository {
    /// Containers by id.
    containers: DashMap<ContainerId, Container>,
    /// Media objects by id.
    media: DashMap<MediaObjectId, MediaObject>,
    /// Scopes by id.
    scopes: DashMap<ScopeId, Scope>,
    /// Query counters.
    stats: QueryStats,
}

impl MemoryContainerRepository {
    /// Create an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a container. Inflated children are discarded.
    pub fn insert_container(&self, container: Container) {
        self.containers.insert(container.id, container.shallow());
    }

    /// Insert or replace a media object.
    pub fn insert_media(&self, media: MediaObject) {
        self.media.insert(media.id, media);
    }

    /// Insert or replace a scope.
    pub fn insert_scope(&self, scope: Scope) {
        self.scopes.insert(scope.id, scope);
    }

    /// Remove a container, leaving its descendants orphaned.
    pub fn remove_container(&self, id: ContainerId) -> Option<Container> {
        self.containers.remove(&id).map(|(_, container)| container)
    }

    /// Query counters.
    pub fn stats(&self) -> &QueryStats {
        &self.stats
    }

    /// All descendant container ids of `id`, excluding `id` itself.
    pub fn descendant_ids(&self, id: ContainerId) -> Vec<ContainerId> {
        let mut descendants = Vec::new();
        let mut pending = vec![id];
        while let Some(current) = pending.pop() {
            for child in self.children_of(current) {
                descendants.push(child.id);
                pending.push(child.id);
            }
        }
        descendants
    }

    fn children_of(&self, id: ContainerId) -> Vec<Container> {
        self.containers
            .iter()
            .filter(|entry| entry.parent_id == Some(id))
            .map(|entry| entry.value().clone())
            .collect()
    }

    fn media_of(&self, id: ContainerId) -> Vec<MediaObject> {
        let mut media: Vec<MediaObject> = self
            .media
            .iter()
            .filter(|entry| entry.parent_id == id)
            .map(|entry| entry.value().clone())
            .collect();
        media.sort_by(|a, b| a.title.cmp(&b.title).then_with(|| a.id.cmp(&b.id)));
        media
    }
}

#[async_trait]
impl ContainerRepository for MemoryContainerRepository {
    async fn load(&self, id: ContainerId, inflate_children: bool) -> AppResult<Container> {
        let mut container = self
            .containers
            .get(&id)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::not_found(format!("Container {id} not found")))?;

        if inflate_children {
            let mut containers = self.children_of(id);
            containers.sort_by(Container::display_order);

            let children: Vec<GalleryObject> = containers
                .into_iter()
                .map(GalleryObject::Aggregate)
                .chain(self.media_of(id).into_iter().map(GalleryObject::Leaf))
                .collect();
            debug!(container_id = %id, children = children.len(), "Inflated container");
            container.children = Some(children);
        }

        Ok(container)
    }

    async fn has_any_child_container(&self, id: ContainerId) -> AppResult<bool> {
        self.stats.child_probes.fetch_add(1, Ordering::Relaxed);
        Ok(self
            .containers
            .iter()
            .any(|entry| entry.parent_id == Some(id)))
    }

    async fn child_containers(&self, id: ContainerId, sorted: bool) -> AppResult<Vec<Container>> {
        self.stats.child_listings.fetch_add(1, Ordering::Relaxed);
        let mut children = self.children_of(id);
        if sorted {
            children.sort_by(Container::display_order);
        }
        Ok(children)
    }

    async fn scope(&self, id: ScopeId) -> AppResult<Option<Scope>> {
        Ok(self.scopes.get(&id).map(|entry| entry.value().clone()))
    }

    async fn top_container(&self, scope_id: ScopeId) -> AppResult<Option<Container>> {
        let top_id = self
            .scopes
            .get(&scope_id)
            .and_then(|scope| scope.top_container_id);

        Ok(top_id.and_then(|id| self.containers.get(&id).map(|entry| entry.value().clone())))
    }
}
