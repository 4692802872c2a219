//! Persistence adapter for the media library
//!
//! Saves captured/annotated images and imports video files into the XDG
//! media directories. No retries, no queueing; one save in flight is
//! assumed.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use gtk4::gdk_pixbuf::Pixbuf;
use log::info;

#[derive(Debug)]
pub enum LibraryError {
    /// A save was requested while no image is displayed
    NoImage,

    LoadFailed(String),

    CreateDirFailed(String),

    WriteFailed(String),

    CopyFailed(String),
}

impl std::fmt::Display for LibraryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoImage => write!(f, "No image available to save"),
            Self::LoadFailed(msg) => write!(f, "Failed to load image: {}", msg),
            Self::CreateDirFailed(msg) => write!(f, "Failed to create library folder: {}", msg),
            Self::WriteFailed(msg) => write!(f, "Failed to save image: {}", msg),
            Self::CopyFailed(msg) => write!(f, "Failed to import video: {}", msg),
        }
    }
}

impl std::error::Error for LibraryError {}

/// The directory images are saved into
pub fn pictures_dir() -> PathBuf {
    dirs::picture_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// The directory videos are imported into
pub fn videos_dir() -> PathBuf {
    dirs::video_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

fn timestamped_name(prefix: &str, extension: &str) -> String {
    let secs = match SystemTime::now().duration_since(UNIX_EPOCH) {
        Ok(dur) => dur.as_secs(),
        Err(_) => 0,
    };
    format!("{}_{}.{}", prefix, secs, extension)
}

/// Save the displayed image as a timestamped PNG in the given directory
pub fn save_image_to(image: Option<&Pixbuf>, dir: &Path) -> Result<PathBuf, LibraryError> {
    let pixbuf = image.ok_or(LibraryError::NoImage)?;

    std::fs::create_dir_all(dir).map_err(|e| LibraryError::CreateDirFailed(e.to_string()))?;

    let mut path = dir.to_path_buf();
    path.push(timestamped_name("capture", "png"));

    pixbuf
        .savev(&path, "png", &[])
        .map_err(|e| LibraryError::WriteFailed(e.to_string()))?;

    info!("Image saved to {:?}", path);
    Ok(path)
}

/// Save the displayed image into the pictures directory
pub fn save_image(image: Option<&Pixbuf>) -> Result<PathBuf, LibraryError> {
    save_image_to(image, &pictures_dir())
}

/// Copy a video file into the given directory, keeping its extension
pub fn import_video_to(source: &Path, dir: &Path) -> Result<PathBuf, LibraryError> {
    std::fs::create_dir_all(dir).map_err(|e| LibraryError::CreateDirFailed(e.to_string()))?;

    let extension = source
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_else(|| "mp4".to_string());

    let mut path = dir.to_path_buf();
    path.push(timestamped_name("video", &extension));

    std::fs::copy(source, &path).map_err(|e| LibraryError::CopyFailed(e.to_string()))?;

    info!("Video imported to {:?}", path);
    Ok(path)
}

/// Copy a video file into the videos directory
pub fn import_video(source: &Path) -> Result<PathBuf, LibraryError> {
    import_video_to(source, &videos_dir())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtk4::gdk_pixbuf::Colorspace;

    fn test_dir(name: &str) -> PathBuf {
        let mut dir = std::env::temp_dir();
        dir.push(format!("mediacapture_{}_{}", name, std::process::id()));
        dir
    }

    fn solid_pixbuf(width: i32, height: i32, rgba: u32) -> Pixbuf {
        let pixbuf = Pixbuf::new(Colorspace::Rgb, true, 8, width, height)
            .expect("failed to allocate pixbuf");
        pixbuf.fill(rgba);
        pixbuf
    }

    #[test]
    fn test_save_without_image_is_typed_error() {
        let result = save_image_to(None, &test_dir("none"));
        assert!(matches!(result, Err(LibraryError::NoImage)));
    }

    #[test]
    fn test_save_image_roundtrip() {
        let dir = test_dir("save");
        let pixbuf = solid_pixbuf(32, 24, 0x3366ccff);

        let path = save_image_to(Some(&pixbuf), &dir).expect("save failed");
        assert!(path.exists());
        assert!(path
            .file_name()
            .unwrap()
            .to_string_lossy()
            .starts_with("capture_"));

        let loaded = Pixbuf::from_file(&path).expect("saved file should decode");
        assert_eq!(loaded.width(), 32);
        assert_eq!(loaded.height(), 24);

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_import_video_copies_file() {
        let dir = test_dir("video");
        std::fs::create_dir_all(&dir).unwrap();
        let source = dir.join("source.mp4");
        std::fs::write(&source, b"not really a video").unwrap();

        let target_dir = dir.join("library");
        let path = import_video_to(&source, &target_dir).expect("import failed");
        assert!(path.exists());
        assert_eq!(path.extension().unwrap(), "mp4");
        assert_eq!(std::fs::read(&path).unwrap(), b"not really a video");

        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_import_missing_video_fails() {
        let result = import_video_to(Path::new("/nonexistent/clip.mp4"), &test_dir("missing"));
        assert!(matches!(result, Err(LibraryError::CopyFailed(_))));
    }
}
