//! The permission oracle consumed by the tree builder.

pub mod request;

pub use request::AuthorizationRequest;

/// Answers whether a subject may act on a container.
///
/// The oracle decides what permissions mean; callers only consume the
/// boolean. Implementations must be cheap enough to call once per
/// candidate node.
pub trait PermissionOracle: Send + Sync + 'static {
    /// Returns whether the request is authorized.
    fn is_authorized(&self, request: &AuthorizationRequest<'_>) -> bool;
}
