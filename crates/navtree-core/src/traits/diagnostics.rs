//! Diagnostic sink for absorbed, non-fatal errors.

use crate::error::AppError;
use crate::types::ScopeId;

/// Records errors that were absorbed instead of propagated.
///
/// Implementations must never panic and must not block the caller for
/// long; recording is fire-and-forget.
pub trait ErrorSink: Send + Sync + 'static {
    /// Records an error, optionally associated with the scope it occurred in.
    fn record_error(&self, error: &AppError, scope_id: Option<ScopeId>);
}
