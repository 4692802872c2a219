//! Camera capture module using the v4l library
//!
//! This module provides one-shot still capture from V4L2 camera devices in a
//! GTK-friendly way. MJPEG frames are decoded through the image crate; YUYV
//! frames are converted in-process.

use gtk4 as gtk;

use gtk::gdk_pixbuf::{Colorspace, Pixbuf};
use gtk::glib;
use log::{debug, warn};
use v4l::buffer::Type;
use v4l::io::mmap::Stream;
use v4l::io::traits::CaptureStream;
use v4l::video::Capture;
use v4l::{Device, Format, FourCC};

/// Frames to pull before keeping one, letting auto-exposure settle
const WARMUP_FRAMES: usize = 3;

const REQUEST_WIDTH: u32 = 1280;
const REQUEST_HEIGHT: u32 = 720;

/// Information about a camera device
#[derive(Debug, Clone)]
pub struct CameraInfo {
    pub index: usize,
    pub name: String,
    pub path: String,
}

impl CameraInfo {
    pub fn display_label(&self) -> String {
        if self.name.is_empty() {
            format!("Camera ({})", self.path)
        } else {
            format!("{} ({})", self.name, self.path)
        }
    }
}

/// Result of a still capture
pub struct CameraCaptureResult {
    pub pixbuf: Pixbuf,
    pub camera_info: CameraInfo,
}

#[derive(Debug)]
pub enum CameraCaptureError {
    NoDevice,

    OpenFailed(String),

    FormatFailed(String),

    UnsupportedFormat(String),

    StreamFailed(String),

    EmptyFrame,

    DecodeFailed(String),
}

impl std::fmt::Display for CameraCaptureError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoDevice => write!(f, "No camera device available"),
            Self::OpenFailed(msg) => write!(f, "Failed to open camera: {}", msg),
            Self::FormatFailed(msg) => write!(f, "Failed to negotiate format: {}", msg),
            Self::UnsupportedFormat(fourcc) => {
                write!(f, "Camera produces unsupported format: {}", fourcc)
            }
            Self::StreamFailed(msg) => write!(f, "Failed to stream from camera: {}", msg),
            Self::EmptyFrame => write!(f, "Camera delivered an empty frame"),
            Self::DecodeFailed(msg) => write!(f, "Failed to decode frame: {}", msg),
        }
    }
}

impl std::error::Error for CameraCaptureError {}

/// List available camera capture devices
pub fn list_cameras() -> Vec<CameraInfo> {
    v4l::context::enum_devices()
        .iter()
        .map(|node| CameraInfo {
            index: node.index(),
            name: node.name().unwrap_or_default(),
            path: node.path().to_string_lossy().to_string(),
        })
        .collect()
}

/// Capture a single still frame from the first available camera
pub fn capture_still() -> Result<CameraCaptureResult, CameraCaptureError> {
    let cameras = list_cameras();
    let info = cameras.first().ok_or(CameraCaptureError::NoDevice)?;
    capture_still_from(info)
}

/// Capture a single still frame from a specific camera
pub fn capture_still_from(info: &CameraInfo) -> Result<CameraCaptureResult, CameraCaptureError> {
    debug!("Capturing still from device {}: {}", info.index, info.display_label());

    let mut dev = Device::with_path(&info.path)
        .map_err(|e| CameraCaptureError::OpenFailed(e.to_string()))?;

    let mjpg = FourCC::new(b"MJPG");
    let requested = Format::new(REQUEST_WIDTH, REQUEST_HEIGHT, mjpg);
    let format = dev
        .set_format(&requested)
        .map_err(|e| CameraCaptureError::FormatFailed(e.to_string()))?;

    debug!(
        "Negotiated format: {} {}x{}",
        format.fourcc, format.width, format.height
    );

    let mut stream = Stream::with_buffers(&mut dev, Type::VideoCapture, 4)
        .map_err(|e| CameraCaptureError::StreamFailed(e.to_string()))?;

    let mut frame: Vec<u8> = Vec::new();
    for _ in 0..WARMUP_FRAMES {
        let (buf, meta) = stream
            .next()
            .map_err(|e| CameraCaptureError::StreamFailed(e.to_string()))?;
        let used = (meta.bytesused as usize).min(buf.len());
        frame = buf[..used].to_vec();
    }

    if frame.is_empty() {
        return Err(CameraCaptureError::EmptyFrame);
    }

    let pixbuf = if format.fourcc == mjpg {
        decode_mjpeg_frame(&frame)?
    } else if format.fourcc == FourCC::new(b"YUYV") {
        let rgba = yuyv_to_rgba(&frame, format.width, format.height)
            .ok_or(CameraCaptureError::EmptyFrame)?;
        rgba_bytes_to_pixbuf(rgba, format.width as i32, format.height as i32)
    } else {
        warn!("Unsupported camera format {}", format.fourcc);
        return Err(CameraCaptureError::UnsupportedFormat(
            format.fourcc.to_string(),
        ));
    };

    Ok(CameraCaptureResult {
        pixbuf,
        camera_info: info.clone(),
    })
}

/// Decode an MJPEG frame (a plain JPEG image) to a Pixbuf
fn decode_mjpeg_frame(data: &[u8]) -> Result<Pixbuf, CameraCaptureError> {
    let decoded = image::load_from_memory(data)
        .map_err(|e| CameraCaptureError::DecodeFailed(e.to_string()))?;
    let rgba = decoded.to_rgba8();
    let width = rgba.width() as i32;
    let height = rgba.height() as i32;

    Ok(rgba_bytes_to_pixbuf(rgba.into_raw(), width, height))
}

/// Convert raw RGBA bytes to a GDK Pixbuf
fn rgba_bytes_to_pixbuf(pixels: Vec<u8>, width: i32, height: i32) -> Pixbuf {
    let stride = width * 4;
    let bytes = glib::Bytes::from(&pixels);

    Pixbuf::from_bytes(
        &bytes,
        Colorspace::Rgb,
        true, // has_alpha
        8,    // bits_per_sample
        width,
        height,
        stride,
    )
}

/// Convert a packed YUYV 4:2:2 frame to RGBA bytes (BT.601).
///
/// Returns `None` if the buffer is too short for the given dimensions.
fn yuyv_to_rgba(data: &[u8], width: u32, height: u32) -> Option<Vec<u8>> {
    let expected = (width as usize) * (height as usize) * 2;
    if data.len() < expected || width % 2 != 0 {
        return None;
    }

    let mut rgba = Vec::with_capacity((width as usize) * (height as usize) * 4);
    for chunk in data[..expected].chunks_exact(4) {
        let y0 = chunk[0] as f32;
        let u = chunk[1] as f32 - 128.0;
        let y1 = chunk[2] as f32;
        let v = chunk[3] as f32 - 128.0;

        for y in [y0, y1] {
            let r = (y + 1.402 * v).clamp(0.0, 255.0) as u8;
            let g = (y - 0.344_136 * u - 0.714_136 * v).clamp(0.0, 255.0) as u8;
            let b = (y + 1.772 * u).clamp(0.0, 255.0) as u8;
            rgba.extend_from_slice(&[r, g, b, 255]);
        }
    }

    Some(rgba)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_cameras() {
        // This test may run in environments without any video device
        for camera in list_cameras() {
            println!("Camera: {}", camera.display_label());
            assert!(!camera.path.is_empty());
        }
    }

    #[test]
    fn test_capture_still_from_missing_device_fails() {
        let info = CameraInfo {
            index: 99,
            name: "missing".to_string(),
            path: "/dev/video99-does-not-exist".to_string(),
        };
        assert!(capture_still_from(&info).is_err());
    }

    #[test]
    fn test_display_label_with_name() {
        let info = CameraInfo {
            index: 0,
            name: "Integrated Camera".to_string(),
            path: "/dev/video0".to_string(),
        };
        assert_eq!(info.display_label(), "Integrated Camera (/dev/video0)");
    }

    #[test]
    fn test_display_label_without_name() {
        let info = CameraInfo {
            index: 0,
            name: String::new(),
            path: "/dev/video0".to_string(),
        };
        assert_eq!(info.display_label(), "Camera (/dev/video0)");
    }

    #[test]
    fn test_yuyv_to_rgba_grey_pixels() {
        // Two pixels, both Y=128, neutral chroma
        let data = [128u8, 128, 128, 128];
        let rgba = yuyv_to_rgba(&data, 2, 1).unwrap();
        assert_eq!(rgba.len(), 8);
        // Neutral chroma gives r == g == b
        assert_eq!(rgba[0], rgba[1]);
        assert_eq!(rgba[1], rgba[2]);
        assert_eq!(rgba[3], 255);
    }

    #[test]
    fn test_yuyv_to_rgba_short_buffer() {
        let data = [0u8; 4];
        assert!(yuyv_to_rgba(&data, 4, 1).is_none());
    }
}
