//! # navtree-auth
//!
//! Authorization for navtree. The tree builder consumes the
//! [`PermissionOracle`] trait as a yes/no answer; this crate also ships a
//! role-based implementation driven by [`RbacPolicies`].

pub mod oracle;
pub mod rbac;

pub use oracle::{AuthorizationRequest, PermissionOracle};
pub use rbac::{RbacPolicies, RolePermissionOracle};
