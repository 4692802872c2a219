//! Capture flow configuration
//!
//! A [`CaptureRequest`] is built right before a capture flow (library picker
//! or camera) is presented and consumed exactly once by it.

/// Where the media comes from
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaSource {
    /// Pick an existing file from the media library
    #[default]
    Library,
    /// Capture through a camera device
    Camera,
}

/// What kind of media the flow should produce
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaKind {
    #[default]
    Image,
    Video,
}

/// Quality hint for video flows
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq)]
pub enum VideoQuality {
    Low,
    #[default]
    Medium,
    High,
}

/// Transient configuration for a single capture flow
#[derive(Clone, Copy, Debug)]
pub struct CaptureRequest {
    pub source: MediaSource,
    pub kind: MediaKind,
    /// Only meaningful for video flows
    pub quality: VideoQuality,
    /// Whether the flow should let the user adjust the picked media
    pub allow_editing: bool,
}

impl CaptureRequest {
    pub fn new(source: MediaSource, kind: MediaKind) -> Self {
        Self {
            source,
            kind,
            quality: VideoQuality::default(),
            allow_editing: true,
        }
    }

    /// Request for picking an image from the library
    pub fn library_image() -> Self {
        Self::new(MediaSource::Library, MediaKind::Image)
    }

    /// Request for a camera still capture
    pub fn camera_photo() -> Self {
        Self::new(MediaSource::Camera, MediaKind::Image)
    }

    /// Request for the video flow at medium quality
    pub fn video() -> Self {
        Self {
            quality: VideoQuality::Medium,
            ..Self::new(MediaSource::Camera, MediaKind::Video)
        }
    }

    #[allow(dead_code)]
    pub fn with_quality(mut self, quality: VideoQuality) -> Self {
        self.quality = quality;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_image_defaults() {
        let request = CaptureRequest::library_image();
        assert_eq!(request.source, MediaSource::Library);
        assert_eq!(request.kind, MediaKind::Image);
        assert!(request.allow_editing);
    }

    #[test]
    fn test_video_request_uses_medium_quality() {
        let request = CaptureRequest::video();
        assert_eq!(request.kind, MediaKind::Video);
        assert_eq!(request.quality, VideoQuality::Medium);
    }

    #[test]
    fn test_with_quality_override() {
        let request = CaptureRequest::video().with_quality(VideoQuality::High);
        assert_eq!(request.quality, VideoQuality::High);
    }
}
