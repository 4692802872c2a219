//! Media file classification and loading
//!
//! Extension-based probes for the files the picker can return, including the
//! compatibility check a video must pass before it is relayed to the library.

use std::path::Path;

use gtk4::gdk_pixbuf::Pixbuf;

use crate::library::LibraryError;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm", "mkv", "avi"];

/// Video containers the library accepts for import
const COMPATIBLE_VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm"];

/// What kind of media a library file holds
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaFileKind {
    Image,
    Video,
    Other,
}

fn extension_of(path: &Path) -> Option<String> {
    path.extension().map(|e| e.to_string_lossy().to_lowercase())
}

/// Classify a file by its extension
pub fn classify(path: &Path) -> MediaFileKind {
    match extension_of(path) {
        Some(ext) if IMAGE_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)) => {
            MediaFileKind::Image
        }
        Some(ext) if VIDEO_EXTENSIONS.iter().any(|e| ext.eq_ignore_ascii_case(e)) => {
            MediaFileKind::Video
        }
        _ => MediaFileKind::Other,
    }
}

/// Check whether a video file can be imported into the library.
///
/// Stands in for the platform's saved-photos compatibility probe; videos
/// failing this check are dropped by the picker flow.
pub fn is_video_compatible(path: &Path) -> bool {
    match extension_of(path) {
        Some(ext) => COMPATIBLE_VIDEO_EXTENSIONS
            .iter()
            .any(|e| ext.eq_ignore_ascii_case(e)),
        None => false,
    }
}

/// Load an image file into a Pixbuf
pub fn load_image(path: &Path) -> Result<Pixbuf, LibraryError> {
    Pixbuf::from_file(path).map_err(|e| LibraryError::LoadFailed(format!("{:?}: {}", path, e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_classify_image_extensions() {
        assert_eq!(classify(Path::new("photo.jpg")), MediaFileKind::Image);
        assert_eq!(classify(Path::new("photo.PNG")), MediaFileKind::Image);
        assert_eq!(classify(Path::new("anim.webp")), MediaFileKind::Image);
    }

    #[test]
    fn test_classify_video_extensions() {
        assert_eq!(classify(Path::new("clip.mp4")), MediaFileKind::Video);
        assert_eq!(classify(Path::new("clip.MOV")), MediaFileKind::Video);
        assert_eq!(classify(Path::new("clip.avi")), MediaFileKind::Video);
    }

    #[test]
    fn test_classify_other() {
        assert_eq!(classify(Path::new("notes.txt")), MediaFileKind::Other);
        assert_eq!(classify(Path::new("no_extension")), MediaFileKind::Other);
    }

    #[test]
    fn test_video_compatibility() {
        assert!(is_video_compatible(Path::new("clip.mp4")));
        assert!(is_video_compatible(Path::new("clip.MOV")));
        assert!(!is_video_compatible(Path::new("clip.avi")));
        assert!(!is_video_compatible(Path::new("clip.mkv")));
        assert!(!is_video_compatible(Path::new("clip")));
    }

    #[test]
    fn test_load_image_missing_file_is_typed_error() {
        let path = PathBuf::from("/nonexistent/image.png");
        assert!(matches!(
            load_image(&path),
            Err(LibraryError::LoadFailed(_))
        ));
    }
}
