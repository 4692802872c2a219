use gtk4 as gtk;
use libadwaita as adw;

use adw::prelude::*;
use gtk::Orientation;

pub struct HeaderComponents {
    pub header_bar: adw::HeaderBar,
    pub photos_btn: gtk::Button,
    pub camera_btn: gtk::Button,
    pub video_btn: gtk::Button,
    pub shortcuts_btn: gtk::Button,
}

pub fn create_header_bar() -> HeaderComponents {
    let photos_btn = gtk::Button::builder()
        .label("Photos")
        .tooltip_text("Pick from Library")
        .build();
    photos_btn.add_css_class("suggested-action");

    let camera_btn = gtk::Button::builder()
        .label("Camera")
        .tooltip_text("Capture Photo")
        .build();

    let video_btn = gtk::Button::builder()
        .label("Video")
        .tooltip_text("Record Video")
        .build();

    let source_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .build();
    source_box.add_css_class("linked");
    source_box.append(&camera_btn);
    source_box.append(&video_btn);

    let shortcuts_btn = gtk::Button::builder()
        .icon_name("input-keyboard-symbolic")
        .tooltip_text("Keyboard Shortcuts")
        .build();

    let end_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(6)
        .build();
    end_box.append(&source_box);
    end_box.append(&shortcuts_btn);

    let header_bar = adw::HeaderBar::new();
    header_bar.pack_start(&photos_btn);
    header_bar.pack_end(&end_box);

    HeaderComponents {
        header_bar,
        photos_btn,
        camera_btn,
        video_btn,
        shortcuts_btn,
    }
}
