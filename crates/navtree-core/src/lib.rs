//! # navtree-core
//!
//! Core crate for navtree. Contains configuration schemas, typed
//! identifiers, the subject and capability vocabulary, the small
//! collaborator traits (markup stripping, diagnostics), and the unified
//! error system.
//!
//! This crate has **no** internal dependencies on other navtree crates.

pub mod config;
pub mod error;
pub mod result;
pub mod traits;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
