//! # navtree-service
//!
//! Builds permission-filtered navigation trees over a container hierarchy.
//! [`TreeBuilder`] resolves the forest roots, materializes children down to
//! the configured depth, and then splices in the ancestor paths of pinned
//! containers that lie deeper than that.
//!
//! The builder follows constructor injection: repository, permission oracle,
//! sanitizer and error sink are provided at construction time as `Arc`
//! references and are only read during a build.

pub mod diagnostics;
pub mod options;
pub mod sanitize;
pub mod tree;

pub use diagnostics::{RecordedError, RecordingErrorSink, TracingErrorSink};
pub use options::BuildOptions;
pub use sanitize::RegexSanitizer;
pub use tree::TreeBuilder;
