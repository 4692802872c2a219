//! Application state types
//!
//! This module contains the core state for the media capture screen: the
//! displayed image, the in-flight swipe gesture and the pending capture
//! request.

use gtk4 as gtk;

use gtk::gdk_pixbuf::Pixbuf;
use log::debug;

use crate::app::config::ShortcutConfig;
use crate::capture::CaptureRequest;

/// Horizontal distance (in display units) a swipe must travel before it
/// commits to delete or save.
pub const SWIPE_THRESHOLD: f64 = 200.0;

/// What a finished swipe gesture resolved to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Swiped left past the threshold: clear the displayed image.
    Delete,
    /// Swiped right past the threshold: save the displayed image.
    Save,
    /// Released inside the threshold: snap back, no mutation.
    SnapBack,
}

/// Map a final horizontal displacement to a swipe outcome.
pub fn classify_swipe(diff: f64) -> SwipeOutcome {
    if diff < -SWIPE_THRESHOLD {
        SwipeOutcome::Delete
    } else if diff > SWIPE_THRESHOLD {
        SwipeOutcome::Save
    } else {
        SwipeOutcome::SnapBack
    }
}

/// A swipe gesture in progress. Only meaningful between drag-begin and
/// drag-end.
#[derive(Clone, Copy, Debug)]
pub struct SwipeGesture {
    /// X coordinate where the drag started, in display units.
    pub start_x: f64,
}

impl SwipeGesture {
    pub fn new(start_x: f64) -> Self {
        Self { start_x }
    }
}

/// Main application state
pub struct AppState {
    /// The currently displayed image, if any
    pub displayed_image: Option<Pixbuf>,
    /// The swipe gesture currently being tracked
    pub swipe: Option<SwipeGesture>,
    /// Horizontal offset applied to the displayed image for live drag feedback
    pub drag_offset_x: f64,
    /// Capture configuration set right before a capture flow is presented
    pub pending_request: Option<CaptureRequest>,
    /// Keyboard shortcut bindings
    pub shortcuts: ShortcutConfig,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Create a new application state with default values
    pub fn new() -> Self {
        Self {
            displayed_image: None,
            swipe: None,
            drag_offset_x: 0.0,
            pending_request: None,
            shortcuts: ShortcutConfig::default(),
        }
    }

    /// Check if there's an image to edit or save
    pub fn has_image(&self) -> bool {
        self.displayed_image.is_some()
    }

    /// Replace the displayed image wholesale
    pub fn set_image(&mut self, pixbuf: Pixbuf) {
        self.displayed_image = Some(pixbuf);
    }

    /// Clear the displayed image
    pub fn clear_image(&mut self) {
        self.displayed_image = None;
    }

    /// Start tracking a swipe at the given X coordinate
    pub fn begin_swipe(&mut self, start_x: f64) {
        debug!("Swipe began at x={}", start_x);
        self.swipe = Some(SwipeGesture::new(start_x));
        self.drag_offset_x = 0.0;
    }

    /// Update the live drag offset while a swipe is being tracked
    pub fn update_swipe(&mut self, offset_x: f64) {
        if self.swipe.is_some() {
            self.drag_offset_x = offset_x;
        }
    }

    /// Finish the swipe and classify the final displacement.
    ///
    /// The drag offset is reset to 0 regardless of outcome. Returns `None`
    /// when no swipe was being tracked.
    pub fn end_swipe(&mut self, offset_x: f64) -> Option<SwipeOutcome> {
        let gesture = self.swipe.take()?;
        self.drag_offset_x = 0.0;

        let outcome = classify_swipe(offset_x);
        debug!(
            "Swipe from x={} ended with diff={}: {:?}",
            gesture.start_x, offset_x, outcome
        );
        Some(outcome)
    }

    /// Stash the configuration for the capture flow about to be presented
    pub fn set_pending_request(&mut self, request: CaptureRequest) {
        self.pending_request = Some(request);
    }

    /// Consume the pending capture configuration
    pub fn take_pending_request(&mut self) -> Option<CaptureRequest> {
        self.pending_request.take()
    }
}
