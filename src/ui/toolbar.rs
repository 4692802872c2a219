use gtk4 as gtk;

use gtk::{Align, Orientation};
use gtk4::prelude::*;

pub struct ToolbarComponents {
    pub tools_box: gtk::Box,
    pub caption_entry: gtk::Entry,
    pub add_text_btn: gtk::Button,
    pub save_btn: gtk::Button,
}

pub fn create_toolbar() -> ToolbarComponents {
    let caption_entry = gtk::Entry::builder()
        .placeholder_text("Add a caption...")
        .width_chars(24)
        .build();

    let add_text_btn = gtk::Button::builder()
        .icon_name("insert-text-symbolic")
        .tooltip_text("Add Text")
        .build();
    add_text_btn.add_css_class("flat");

    let separator = gtk::Separator::builder()
        .orientation(Orientation::Vertical)
        .margin_start(6)
        .margin_end(6)
        .build();
    separator.add_css_class("spacer");

    let save_btn = gtk::Button::builder()
        .icon_name("document-save-symbolic")
        .tooltip_text("Save to Library")
        .build();
    save_btn.add_css_class("suggested-action");

    let tools_box = gtk::Box::builder()
        .orientation(Orientation::Horizontal)
        .spacing(6)
        .halign(Align::Center)
        .valign(Align::End)
        .margin_bottom(24)
        .visible(false)
        .build();
    tools_box.add_css_class("osd");
    tools_box.add_css_class("toolbar");

    tools_box.append(&caption_entry);
    tools_box.append(&add_text_btn);
    tools_box.append(&separator);
    tools_box.append(&save_btn);

    ToolbarComponents {
        tools_box,
        caption_entry,
        add_text_btn,
        save_btn,
    }
}
