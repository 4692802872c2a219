//! Capture module for camera and library capture flows
//!
//! This module provides the transient capture configuration consumed by the
//! UI flows and the V4L2 still-capture adapter.

pub mod camera;
pub mod request;

pub use camera::{capture_still, CameraCaptureError, CameraCaptureResult};
pub use request::{CaptureRequest, MediaKind, MediaSource, VideoQuality};
