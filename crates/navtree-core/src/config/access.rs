//! Anonymous access configuration.

use serde::{Deserialize, Serialize};

/// Controls what unauthenticated visitors may see.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessConfig {
    /// Whether anonymous visitors may browse non-private containers.
    #[serde(default = "default_true")]
    pub allow_anonymous_browsing: bool,
    /// Whether anonymous visitors may view original media files.
    #[serde(default)]
    pub allow_anonymous_original_media: bool,
}

impl Default for AccessConfig {
    fn default() -> Self {
        Self {
            allow_anonymous_browsing: default_true(),
            allow_anonymous_original_media: false,
        }
    }
}

fn default_true() -> bool {
    true
}
