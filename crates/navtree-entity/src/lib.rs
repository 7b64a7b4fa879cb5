//! # navtree-entity
//!
//! Domain models for navtree. The `container` and `scope` modules describe
//! the gallery hierarchy being rendered, `role` holds the grants that
//! authorize it, and `tree` holds the navigation tree produced for a single
//! build. All models derive `Debug`, `Clone`, `Serialize`, and `Deserialize`.

pub mod container;
pub mod role;
pub mod scope;
pub mod tree;
