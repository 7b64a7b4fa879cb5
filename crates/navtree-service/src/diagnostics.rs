//! Error sinks for absorbed build failures.

use std::sync::Mutex;

use tracing::error;

use navtree_core::error::AppError;
use navtree_core::traits::ErrorSink;
use navtree_core::types::ScopeId;

/// Writes absorbed errors to the tracing subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingErrorSink;

impl ErrorSink for TracingErrorSink {
    fn record_error(&self, err: &AppError, scope_id: Option<ScopeId>) {
        let cause = std::error::Error::source(err).map(ToString::to_string);
        error!(
            kind = %err.kind,
            scope_id = ?scope_id,
            notes = ?err.notes,
            cause = ?cause,
            "{}",
            err.message
        );
    }
}

/// An error captured by [`RecordingErrorSink`].
#[derive(Debug, Clone)]
pub struct RecordedError {
    /// The error, without its source chain.
    pub error: AppError,
    /// The scope it was recorded against.
    pub scope_id: Option<ScopeId>,
}

/// Keeps absorbed errors in memory and forwards them to tracing.
#[derive(Debug, Default)]
pub struct RecordingErrorSink {
    records: Mutex<Vec<RecordedError>>,
}

impl RecordingErrorSink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far.
    pub fn records(&self) -> Vec<RecordedError> {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Number of recorded errors.
    pub fn len(&self) -> usize {
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .len()
    }

    /// Returns whether nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ErrorSink for RecordingErrorSink {
    fn record_error(&self, err: &AppError, scope_id: Option<ScopeId>) {
        TracingErrorSink.record_error(err, scope_id);
        self.records
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(RecordedError {
                error: err.clone(),
                scope_id,
            });
    }
}
