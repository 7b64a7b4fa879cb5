//! Regex-based markup stripping.

use std::sync::LazyLock;

use regex::Regex;

use navtree_core::traits::Sanitizer;

static TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<[^>]*>").expect("tag pattern is valid"));

/// Removes anything that looks like a markup tag, then decodes HTML
/// entities so titles render as plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexSanitizer;

impl Sanitizer for RegexSanitizer {
    fn strip_markup(&self, text: &str) -> String {
        let stripped = TAG.replace_all(text, "");
        html_escape::decode_html_entities(&stripped).trim().to_string()
    }
}
