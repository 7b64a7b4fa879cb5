//! The closed set of objects a container can hold.

use serde::{Deserialize, Serialize};

use navtree_core::types::{ContainerId, MediaObjectId};

use super::model::Container;

/// A media item (photo, video, document) stored in a container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaObject {
    /// Unique media object identifier.
    pub id: MediaObjectId,
    /// The owning container.
    pub parent_id: ContainerId,
    /// Display title.
    pub title: String,
    /// Whether the item is hidden from anonymous visitors.
    #[serde(default)]
    pub is_private: bool,
}

/// Anything that can live inside a container.
///
/// Only `Aggregate` values are containers and take part in navigation trees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GalleryObject {
    /// A nested container.
    Aggregate(Container),
    /// A media item.
    Leaf(MediaObject),
}

impl GalleryObject {
    /// Returns the container if this object is one.
    pub fn as_container(&self) -> Option<&Container> {
        match self {
            Self::Aggregate(c) => Some(c),
            Self::Leaf(_) => None,
        }
    }
}
