//! Scope (gallery) entities.

pub mod model;

pub use model::Scope;
