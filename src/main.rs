use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use log::info;

mod app;
mod capture;
mod editor;
mod library;
mod ui;

const APP_ID: &str = "org.example.MediaCaptureGnome";

fn main() -> gtk::glib::ExitCode {
    env_logger::init();
    info!("Starting Media Capture");

    let app = adw::Application::builder().application_id(APP_ID).build();

    app.connect_activate(ui::build_ui);
    app.run()
}
