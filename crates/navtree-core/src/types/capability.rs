//! Capabilities a subject can hold on a container.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An action a subject may be allowed to perform on a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Capability {
    /// Browse the container and the media objects inside it.
    ViewAlbumOrMediaObject,
    /// View the original, full-size media files.
    ViewOriginalMedia,
    /// Create child containers.
    AddChildAlbum,
    /// Add media objects.
    AddMediaObject,
    /// Edit the container's properties.
    EditAlbum,
    /// Edit media objects.
    EditMediaObject,
    /// Delete child containers.
    DeleteChildAlbum,
    /// Delete media objects.
    DeleteMediaObject,
    /// Synchronize the container with the media store.
    Synchronize,
    /// Administer the scope the container belongs to.
    AdministerGallery,
    /// Administer every scope.
    AdministerSite,
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::ViewAlbumOrMediaObject => "view_album_or_media_object",
            Self::ViewOriginalMedia => "view_original_media",
            Self::AddChildAlbum => "add_child_album",
            Self::AddMediaObject => "add_media_object",
            Self::EditAlbum => "edit_album",
            Self::EditMediaObject => "edit_media_object",
            Self::DeleteChildAlbum => "delete_child_album",
            Self::DeleteMediaObject => "delete_media_object",
            Self::Synchronize => "synchronize",
            Self::AdministerGallery => "administer_gallery",
            Self::AdministerSite => "administer_site",
        };
        f.write_str(name)
    }
}

/// How a set of required capabilities is matched against what a subject holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Holding any one of the capabilities is enough.
    #[default]
    AnyOf,
    /// Every capability must be held.
    AllOf,
}

impl MatchMode {
    /// Folds per-capability answers according to the mode.
    ///
    /// An empty requirement list is never satisfied.
    pub fn evaluate<I>(self, answers: I) -> bool
    where
        I: IntoIterator<Item = bool>,
    {
        let mut answers = answers.into_iter().peekable();
        if answers.peek().is_none() {
            return false;
        }
        match self {
            Self::AnyOf => answers.any(|ok| ok),
            Self::AllOf => answers.all(|ok| ok),
        }
    }
}
