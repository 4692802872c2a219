use gtk::glib;
use gtk4 as gtk;
use libadwaita as adw;
use log::{debug, error, info, warn};

use gtk::GestureDrag;
use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::config::Action;
use crate::app::{AppState, SwipeOutcome};
use crate::capture::{self, CaptureRequest};
use crate::editor::{composite_text, TextStyle};
use crate::library::{media, store, LibraryError};
use crate::ui::dialogs;
use crate::ui::drawing::DrawingComponents;
use crate::ui::header::HeaderComponents;
use crate::ui::shortcuts::show_shortcuts_dialog;
use crate::ui::toolbar::ToolbarComponents;

pub struct UiComponents {
    pub window: adw::ApplicationWindow,
    pub header: HeaderComponents,
    pub toolbar: ToolbarComponents,
    pub drawing: DrawingComponents,
}

fn display_image(
    state: &Rc<RefCell<AppState>>,
    drawing_area: &gtk::DrawingArea,
    placeholder_icon: &gtk::Image,
    tools_box: &gtk::Box,
    pixbuf: gtk::gdk_pixbuf::Pixbuf,
) {
    state.borrow_mut().set_image(pixbuf);
    placeholder_icon.set_visible(false);
    tools_box.set_visible(true);
    drawing_area.queue_draw();
}

fn discard_image(
    state: &Rc<RefCell<AppState>>,
    drawing_area: &gtk::DrawingArea,
    placeholder_icon: &gtk::Image,
    tools_box: &gtk::Box,
) {
    state.borrow_mut().clear_image();
    placeholder_icon.set_visible(true);
    tools_box.set_visible(false);
    drawing_area.queue_draw();
}

/// Present the library picker and display the chosen photo
fn open_library_flow(
    state: &Rc<RefCell<AppState>>,
    window: &adw::ApplicationWindow,
    drawing_area: &gtk::DrawingArea,
    placeholder_icon: &gtk::Image,
    tools_box: &gtk::Box,
) {
    state
        .borrow_mut()
        .set_pending_request(CaptureRequest::library_image());

    let state = state.clone();
    let window = window.clone();
    let drawing_area = drawing_area.clone();
    let placeholder_icon = placeholder_icon.clone();
    let tools_box = tools_box.clone();
    glib::spawn_future_local(async move {
        let request = match state.borrow_mut().take_pending_request() {
            Some(request) => request,
            None => return,
        };
        debug!("Presenting library picker: {:?}", request);

        let Some(path) = dialogs::pick_media(&window, request.kind).await else {
            return;
        };

        if media::classify(&path) != media::MediaFileKind::Image {
            warn!("Picked file {:?} is not an image", path);
            return;
        }

        match media::load_image(&path) {
            Ok(pixbuf) => {
                info!("Loaded {:?}", path);
                display_image(&state, &drawing_area, &placeholder_icon, &tools_box, pixbuf);
            }
            Err(e) => error!("{}", e),
        }
    });
}

/// Grab a still frame from the camera and display it
fn capture_photo_flow(
    state: &Rc<RefCell<AppState>>,
    drawing_area: &gtk::DrawingArea,
    placeholder_icon: &gtk::Image,
    tools_box: &gtk::Box,
) {
    state
        .borrow_mut()
        .set_pending_request(CaptureRequest::camera_photo());
    let request = match state.borrow_mut().take_pending_request() {
        Some(request) => request,
        None => return,
    };
    debug!("Presenting camera flow: {:?}", request);

    match capture::capture_still() {
        Ok(result) => {
            info!("Captured still from {}", result.camera_info.display_label());
            display_image(
                state,
                drawing_area,
                placeholder_icon,
                tools_box,
                result.pixbuf,
            );
        }
        Err(e) => error!("Failed to capture photo: {}", e),
    }
}

/// Pick a video and relay it to the library if it is compatible.
///
/// An incompatible video is dropped with no user notice, matching the
/// original behavior of this flow.
fn record_video_flow(state: &Rc<RefCell<AppState>>, window: &adw::ApplicationWindow) {
    state.borrow_mut().set_pending_request(CaptureRequest::video());

    let state = state.clone();
    let window = window.clone();
    glib::spawn_future_local(async move {
        let request = match state.borrow_mut().take_pending_request() {
            Some(request) => request,
            None => return,
        };
        debug!("Presenting video flow: {:?}", request);

        let Some(path) = dialogs::pick_media(&window, request.kind).await else {
            return;
        };

        if !media::is_video_compatible(&path) {
            debug!("Video {:?} is not library-compatible, dropping", path);
            return;
        }

        if let Err(e) = store::import_video(&path) {
            error!("{}", e);
        }
    });
}

/// Composite the caption entry's text onto the displayed image
fn apply_caption(
    state: &Rc<RefCell<AppState>>,
    drawing_area: &gtk::DrawingArea,
    caption_entry: &gtk::Entry,
) {
    let mut s = state.borrow_mut();
    if !s.has_image() {
        warn!("Add text requested with no image");
        return;
    }

    let text = caption_entry.text().to_string();
    match composite_text(s.displayed_image.as_ref(), &text, &TextStyle::default()) {
        Ok(composed) => {
            s.set_image(composed);
            drop(s);
            drawing_area.queue_draw();
        }
        Err(e) => {
            drop(s);
            error!("Failed to composite text: {}", e);
        }
    }
}

/// Resolve a finished drag against the state.
///
/// Releases the state borrow before applying the outcome so the delete
/// mutation can re-borrow safely.
fn finish_swipe(state: &Rc<RefCell<AppState>>, offset_x: f64) -> Option<SwipeOutcome> {
    let outcome = state.borrow_mut().end_swipe(offset_x);
    if outcome == Some(SwipeOutcome::Delete) {
        state.borrow_mut().clear_image();
    }
    outcome
}

/// Save the displayed image and surface the completion as an alert
fn trigger_save(state: &Rc<RefCell<AppState>>, window: &adw::ApplicationWindow) {
    let state = state.clone();
    let window = window.clone();
    glib::spawn_future_local(async move {
        let result = {
            let s = state.borrow();
            store::save_image(s.displayed_image.as_ref())
        };

        match result {
            Ok(path) => {
                info!("Saved to {:?}", path);
                dialogs::show_save_success(&window);
            }
            Err(LibraryError::NoImage) => warn!("Save requested with no image"),
            Err(e) => {
                error!("Failed to save image: {}", e);
                dialogs::show_save_error(&window, &e.to_string());
            }
        }
    });
}

pub fn connect_photos_handler(state: &Rc<RefCell<AppState>>, components: &UiComponents) {
    components.header.photos_btn.connect_clicked({
        let state = state.clone();
        let window = components.window.clone();
        let drawing_area = components.drawing.drawing_area.clone();
        let placeholder_icon = components.drawing.placeholder_icon.clone();
        let tools_box = components.toolbar.tools_box.clone();
        move |_| {
            open_library_flow(&state, &window, &drawing_area, &placeholder_icon, &tools_box);
        }
    });
}

pub fn connect_camera_handler(state: &Rc<RefCell<AppState>>, components: &UiComponents) {
    components.header.camera_btn.connect_clicked({
        let state = state.clone();
        let drawing_area = components.drawing.drawing_area.clone();
        let placeholder_icon = components.drawing.placeholder_icon.clone();
        let tools_box = components.toolbar.tools_box.clone();
        move |_| {
            capture_photo_flow(&state, &drawing_area, &placeholder_icon, &tools_box);
        }
    });
}

pub fn connect_video_handler(state: &Rc<RefCell<AppState>>, components: &UiComponents) {
    components.header.video_btn.connect_clicked({
        let state = state.clone();
        let window = components.window.clone();
        move |_| {
            record_video_flow(&state, &window);
        }
    });
}

pub fn connect_text_handlers(state: &Rc<RefCell<AppState>>, components: &UiComponents) {
    components.toolbar.add_text_btn.connect_clicked({
        let state = state.clone();
        let drawing_area = components.drawing.drawing_area.clone();
        let caption_entry = components.toolbar.caption_entry.clone();
        move |_| {
            apply_caption(&state, &drawing_area, &caption_entry);
        }
    });

    components.toolbar.caption_entry.connect_activate({
        let state = state.clone();
        let drawing_area = components.drawing.drawing_area.clone();
        move |entry| {
            apply_caption(&state, &drawing_area, entry);
        }
    });
}

pub fn connect_save_handler(state: &Rc<RefCell<AppState>>, components: &UiComponents) {
    components.toolbar.save_btn.connect_clicked({
        let state = state.clone();
        let window = components.window.clone();
        move |_| {
            trigger_save(&state, &window);
        }
    });
}

pub fn connect_swipe_handlers(state: &Rc<RefCell<AppState>>, components: &UiComponents) {
    debug!("Connecting swipe handlers");
    let drag = GestureDrag::new();

    drag.connect_drag_begin({
        let state = state.clone();
        move |_, x, _y| {
            state.borrow_mut().begin_swipe(x);
        }
    });

    drag.connect_drag_update({
        let state = state.clone();
        let drawing_area = components.drawing.drawing_area.clone();
        move |_, offset_x, _offset_y| {
            state.borrow_mut().update_swipe(offset_x);
            drawing_area.queue_draw();
        }
    });

    drag.connect_drag_end({
        let state = state.clone();
        let window = components.window.clone();
        let drawing_area = components.drawing.drawing_area.clone();
        let placeholder_icon = components.drawing.placeholder_icon.clone();
        let tools_box = components.toolbar.tools_box.clone();
        move |_, offset_x, _offset_y| {
            match finish_swipe(&state, offset_x) {
                Some(SwipeOutcome::Delete) => {
                    info!("Swiped left: discarding image");
                    placeholder_icon.set_visible(true);
                    tools_box.set_visible(false);
                    drawing_area.queue_draw();
                }
                Some(SwipeOutcome::Save) => {
                    info!("Swiped right: saving image");
                    trigger_save(&state, &window);
                    drawing_area.queue_draw();
                }
                Some(SwipeOutcome::SnapBack) => drawing_area.queue_draw(),
                None => {}
            }
        }
    });

    components.drawing.drawing_area.add_controller(drag);
}

pub fn connect_shortcuts_button(state: &Rc<RefCell<AppState>>, components: &UiComponents) {
    components.header.shortcuts_btn.connect_clicked({
        let state = state.clone();
        let window = components.window.clone();
        move |_| {
            show_shortcuts_dialog(&state, &window);
        }
    });
}

pub fn connect_key_handler(state: &Rc<RefCell<AppState>>, components: &UiComponents) {
    let key_controller = gtk::EventControllerKey::new();

    key_controller.connect_key_pressed({
        let state = state.clone();
        let window = components.window.clone();
        let drawing_area = components.drawing.drawing_area.clone();
        let placeholder_icon = components.drawing.placeholder_icon.clone();
        let tools_box = components.toolbar.tools_box.clone();
        let caption_entry = components.toolbar.caption_entry.clone();
        move |_, key, _keycode, modifiers| {
            let action = state.borrow().shortcuts.get_action(key, modifiers);
            match action {
                Some(Action::OpenLibrary) => {
                    open_library_flow(&state, &window, &drawing_area, &placeholder_icon, &tools_box);
                    glib::Propagation::Stop
                }
                Some(Action::CapturePhoto) => {
                    capture_photo_flow(&state, &drawing_area, &placeholder_icon, &tools_box);
                    glib::Propagation::Stop
                }
                Some(Action::RecordVideo) => {
                    record_video_flow(&state, &window);
                    glib::Propagation::Stop
                }
                Some(Action::AddText) => {
                    apply_caption(&state, &drawing_area, &caption_entry);
                    glib::Propagation::Stop
                }
                Some(Action::Save) => {
                    trigger_save(&state, &window);
                    glib::Propagation::Stop
                }
                Some(Action::Discard) => {
                    // Don't steal Delete while the caption entry is in use
                    if caption_entry.has_focus() {
                        return glib::Propagation::Proceed;
                    }
                    discard_image(&state, &drawing_area, &placeholder_icon, &tools_box);
                    glib::Propagation::Stop
                }
                None => glib::Propagation::Proceed,
            }
        }
    });

    components.window.add_controller(key_controller);
}

pub fn connect_all_handlers(state: &Rc<RefCell<AppState>>, components: &UiComponents) {
    debug!("Initializing UI handlers");
    connect_photos_handler(state, components);
    connect_camera_handler(state, components);
    connect_video_handler(state, components);
    connect_text_handlers(state, components);
    connect_save_handler(state, components);
    connect_swipe_handlers(state, components);
    connect_shortcuts_button(state, components);
    connect_key_handler(state, components);
}

#[cfg(test)]
mod tests {
    use super::*;
    use gtk::gdk_pixbuf::{Colorspace, Pixbuf};

    fn state_with_image() -> Rc<RefCell<AppState>> {
        let state = Rc::new(RefCell::new(AppState::new()));
        let pixbuf =
            Pixbuf::new(Colorspace::Rgb, true, 8, 8, 8).expect("failed to allocate pixbuf");
        state.borrow_mut().set_image(pixbuf);
        state
    }

    #[test]
    fn test_delete_swipe_clears_image_without_panicking() {
        let state = state_with_image();
        state.borrow_mut().begin_swipe(100.0);
        state.borrow_mut().update_swipe(-250.0);

        let outcome = finish_swipe(&state, -250.0);
        assert_eq!(outcome, Some(SwipeOutcome::Delete));
        assert!(!state.borrow().has_image());
        assert_eq!(state.borrow().drag_offset_x, 0.0);
    }

    #[test]
    fn test_save_swipe_keeps_image() {
        let state = state_with_image();
        state.borrow_mut().begin_swipe(50.0);

        let outcome = finish_swipe(&state, 250.0);
        assert_eq!(outcome, Some(SwipeOutcome::Save));
        assert!(state.borrow().has_image());
    }

    #[test]
    fn test_snap_back_swipe_keeps_image() {
        let state = state_with_image();
        state.borrow_mut().begin_swipe(0.0);

        let outcome = finish_swipe(&state, 150.0);
        assert_eq!(outcome, Some(SwipeOutcome::SnapBack));
        assert!(state.borrow().has_image());
        assert_eq!(state.borrow().drag_offset_x, 0.0);
    }

    #[test]
    fn test_finish_swipe_without_gesture_is_none() {
        let state = state_with_image();
        assert_eq!(finish_swipe(&state, -500.0), None);
        assert!(state.borrow().has_image());
    }
}
