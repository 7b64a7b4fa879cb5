//! Core type definitions used across the navtree workspace.

pub mod capability;
pub mod id;
pub mod subject;

pub use capability::{Capability, MatchMode};
pub use id::*;
pub use subject::Subject;
