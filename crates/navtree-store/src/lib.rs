//! # navtree-store
//!
//! Container access for navtree. Defines the [`ContainerRepository`]
//! collaborator trait consumed by the tree builder, an in-memory
//! implementation backed by a concurrent arena, and a JSON gallery fixture
//! format used by the CLI and tests.

pub mod fixture;
pub mod repositories;

pub use fixture::GalleryFixture;
pub use repositories::{ContainerRepository, MemoryContainerRepository};
