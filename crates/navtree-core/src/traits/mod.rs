//! Core traits defined in `navtree-core` and implemented by other crates.

pub mod diagnostics;
pub mod sanitizer;

pub use diagnostics::ErrorSink;
pub use sanitizer::Sanitizer;
