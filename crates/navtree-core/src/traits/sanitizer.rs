//! Markup stripping for display text.

/// Removes markup from user-supplied display text.
pub trait Sanitizer: Send + Sync + 'static {
    /// Returns `text` with every markup tag removed.
    fn strip_markup(&self, text: &str) -> String;
}
