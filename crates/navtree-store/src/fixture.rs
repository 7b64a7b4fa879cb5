//! JSON gallery fixtures.
//!
//! A fixture describes a whole gallery installation: scopes, containers,
//! media objects and roles. It is the input format of the CLI and a
//! convenient way to seed tests.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use navtree_core::error::AppError;
use navtree_core::result::AppResult;
use navtree_entity::container::{Container, MediaObject};
use navtree_entity::role::Role;
use navtree_entity::scope::Scope;

use crate::repositories::MemoryContainerRepository;

/// A serialized gallery installation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GalleryFixture {
    /// Galleries.
    #[serde(default)]
    pub scopes: Vec<Scope>,
    /// Albums.
    #[serde(default)]
    pub containers: Vec<Container>,
    /// Media items.
    #[serde(default)]
    pub media: Vec<MediaObject>,
    /// Roles and their grants.
    #[serde(default)]
    pub roles: Vec<Role>,
}

impl GalleryFixture {
    /// Parse a fixture from a JSON string.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let fixture: Self = serde_json::from_str(json)?;
        fixture.check_parents()?;
        Ok(fixture)
    }

    /// Read and parse a fixture file.
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| AppError::from(e).with_note(format!("fixture={}", path.display())))?;
        let fixture = Self::from_json(&json)?;
        info!(
            path = %path.display(),
            scopes = fixture.scopes.len(),
            containers = fixture.containers.len(),
            roles = fixture.roles.len(),
            "Loaded gallery fixture"
        );
        Ok(fixture)
    }

    /// Build an in-memory repository holding the fixture's hierarchy.
    pub fn to_repository(&self) -> MemoryContainerRepository {
        let repo = MemoryContainerRepository::new();
        for scope in &self.scopes {
            repo.insert_scope(scope.clone());
        }
        for container in &self.containers {
            repo.insert_container(container.clone());
        }
        for media in &self.media {
            repo.insert_media(media.clone());
        }
        repo
    }

    /// Rejects containers whose parent is not part of the fixture.
    fn check_parents(&self) -> AppResult<()> {
        for container in &self.containers {
            if let Some(parent_id) = container.parent_id {
                if !self.containers.iter().any(|c| c.id == parent_id) {
                    return Err(AppError::validation(format!(
                        "Container {} references missing parent {parent_id}",
                        container.id
                    )));
                }
            }
        }
        Ok(())
    }
}
