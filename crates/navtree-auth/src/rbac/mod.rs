//! Role-based permission evaluation.

pub mod enforcer;
pub mod policies;

pub use enforcer::RolePermissionOracle;
pub use policies::{RbacPolicies, RolePolicy};
