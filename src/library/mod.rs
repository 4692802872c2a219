//! Media library module
//!
//! File classification and the persistence adapter over the XDG media
//! directories.

pub mod media;
pub mod store;

pub use media::{classify, is_video_compatible, load_image, MediaFileKind};
pub use store::{import_video, save_image, LibraryError};
