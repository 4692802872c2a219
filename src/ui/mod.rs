pub mod dialogs;
pub mod drawing;
pub mod handlers;
pub mod header;
pub mod shortcuts;
pub mod toolbar;

#[allow(unused_imports)]
pub use dialogs::{pick_media, show_save_error, show_save_success};
#[allow(unused_imports)]
pub use drawing::{create_drawing_area, DrawingComponents};
#[allow(unused_imports)]
pub use handlers::{connect_all_handlers, UiComponents};
#[allow(unused_imports)]
pub use header::{create_header_bar, HeaderComponents};
#[allow(unused_imports)]
pub use toolbar::{create_toolbar, ToolbarComponents};

use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::AppState;

pub fn build_ui(app: &adw::Application) {
    let state = Rc::new(RefCell::new(AppState::new()));

    let header = header::create_header_bar();
    let toolbar = toolbar::create_toolbar();
    let drawing = drawing::create_drawing_area(&state);

    let overlay = gtk::Overlay::builder().child(&drawing.drawing_area).build();
    overlay.add_overlay(&drawing.placeholder_icon);
    overlay.add_overlay(&toolbar.tools_box);

    let content = gtk::Box::builder()
        .orientation(Orientation::Vertical)
        .build();
    content.append(&header.header_bar);
    content.append(&overlay);

    let window = adw::ApplicationWindow::builder()
        .application(app)
        .title("Media Capture")
        .content(&content)
        .default_width(900)
        .default_height(600)
        .build();

    let components = handlers::UiComponents {
        window: window.clone(),
        header,
        toolbar,
        drawing,
    };

    handlers::connect_all_handlers(&state, &components);

    window.present();
}
