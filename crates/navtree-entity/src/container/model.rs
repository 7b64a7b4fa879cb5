//! Container entity model.

use serde::{Deserialize, Serialize};

use navtree_core::types::{ContainerId, ScopeId};

use super::object::GalleryObject;

/// A container (album) in the gallery hierarchy.
///
/// Containers reference their parent by id only. Children are looked up
/// through the repository, or carried in `children` when the container was
/// loaded with its children inflated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Container {
    /// Unique container identifier.
    pub id: ContainerId,
    /// The scope (gallery) this container belongs to.
    pub scope_id: ScopeId,
    /// Parent container ID (None for the top of a scope's hierarchy).
    #[serde(default)]
    pub parent_id: Option<ContainerId>,
    /// Display title. May contain markup.
    pub title: String,
    /// Whether the container is hidden from anonymous visitors.
    #[serde(default)]
    pub is_private: bool,
    /// Whether the container is a synthetic aggregation with no stored entity.
    #[serde(default)]
    pub is_virtual: bool,
    /// Position among siblings; ties are broken by title.
    #[serde(default)]
    pub sort_order: i32,
    /// Direct children, present only when loaded with children inflated.
    #[serde(skip)]
    pub children: Option<Vec<GalleryObject>>,
}

impl Container {
    /// Check if this is the top of its hierarchy (no parent).
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }

    /// Returns whether the children were loaded along with the container.
    pub fn is_inflated(&self) -> bool {
        self.children.is_some()
    }

    /// Returns the inflated child containers in display order.
    ///
    /// Media objects are skipped. Returns an empty list when the container
    /// was not inflated.
    pub fn child_containers(&self) -> Vec<Container> {
        let mut containers: Vec<Container> = self
            .children
            .iter()
            .flatten()
            .filter_map(GalleryObject::as_container)
            .cloned()
            .collect();
        containers.sort_by(Container::display_order);
        containers
    }

    /// Orders containers by `sort_order`, then title, then id.
    pub fn display_order(a: &Container, b: &Container) -> std::cmp::Ordering {
        a.sort_order
            .cmp(&b.sort_order)
            .then_with(|| a.title.cmp(&b.title))
            .then_with(|| a.id.cmp(&b.id))
    }

    /// Returns a copy of this container without inflated children.
    pub fn shallow(&self) -> Container {
        Container {
            children: None,
            ..self.clone()
        }
    }
}
