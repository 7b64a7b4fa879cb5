//! Container (album) entities and the gallery object variant.

pub mod model;
pub mod object;

pub use model::Container;
pub use object::{GalleryObject, MediaObject};
