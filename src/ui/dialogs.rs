use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use log::debug;
use std::path::PathBuf;

use crate::capture::MediaKind;
use crate::library::store;

/// Present the modal media picker and resolve to the chosen file.
///
/// Resolves exactly once; cancellation yields `None`.
pub async fn pick_media(parent: &impl IsA<gtk::Window>, kind: MediaKind) -> Option<PathBuf> {
    let (title, folder) = match kind {
        MediaKind::Image => ("Pick a Photo", store::pictures_dir()),
        MediaKind::Video => ("Pick a Video", store::videos_dir()),
    };

    let dialog = gtk::FileDialog::builder().title(title).build();
    dialog.set_initial_folder(Some(&gtk::gio::File::for_path(&folder)));

    let filters = gtk::gio::ListStore::new::<gtk::FileFilter>();
    filters.append(&media_filter(kind));
    dialog.set_filters(Some(&filters));

    match dialog.open_future(Some(parent)).await {
        Ok(file) => file.path(),
        Err(_) => {
            debug!("Media picker cancelled");
            None
        }
    }
}

fn media_filter(kind: MediaKind) -> gtk::FileFilter {
    let filter = gtk::FileFilter::new();
    match kind {
        MediaKind::Image => {
            filter.set_name(Some("Images"));
            filter.add_pixbuf_formats();
        }
        MediaKind::Video => {
            filter.set_name(Some("Videos"));
            for suffix in ["mp4", "mov", "webm", "mkv", "avi"] {
                filter.add_suffix(suffix);
            }
        }
    }
    filter
}

/// Confirmation notice after a successful save
pub fn show_save_success(parent: &impl IsA<gtk::Widget>) {
    let dialog = adw::AlertDialog::builder()
        .heading("Saved!")
        .body("Your altered image has been saved to your library.")
        .build();
    dialog.add_response("ok", "OK");
    dialog.set_default_response(Some("ok"));
    dialog.present(Some(parent));
}

/// Failure notice with the underlying reason
pub fn show_save_error(parent: &impl IsA<gtk::Widget>, reason: &str) {
    let dialog = adw::AlertDialog::builder()
        .heading("Save error")
        .body(reason)
        .build();
    dialog.add_response("ok", "OK");
    dialog.set_default_response(Some("ok"));
    dialog.present(Some(parent));
}
