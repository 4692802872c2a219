use adw::prelude::*;
use gtk4 as gtk;
use libadwaita as adw;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::config::Action;
use crate::app::AppState;

pub fn show_shortcuts_dialog(state: &Rc<RefCell<AppState>>, parent: &impl IsA<gtk::Window>) {
    let window = adw::PreferencesWindow::builder()
        .transient_for(parent)
        .modal(true)
        .title("Keyboard Shortcuts")
        .default_width(500)
        .default_height(450)
        .build();

    let page = adw::PreferencesPage::new();
    window.add(&page);

    let group_capture = adw::PreferencesGroup::builder().title("Capture").build();
    add_action_row(state, &group_capture, Action::OpenLibrary);
    add_action_row(state, &group_capture, Action::CapturePhoto);
    add_action_row(state, &group_capture, Action::RecordVideo);
    page.add(&group_capture);

    let group_edit = adw::PreferencesGroup::builder().title("Edit").build();
    add_action_row(state, &group_edit, Action::AddText);
    add_action_row(state, &group_edit, Action::Save);
    add_action_row(state, &group_edit, Action::Discard);
    page.add(&group_edit);

    window.present();
}

fn add_action_row(state: &Rc<RefCell<AppState>>, group: &adw::PreferencesGroup, action: Action) {
    let s = state.borrow();
    let shortcut_label = s.shortcuts.get_shortcut_label(action);
    drop(s);

    let row = adw::ActionRow::builder().title(action.label()).build();

    let shortcut_btn = gtk::Button::builder()
        .label(shortcut_label.as_str())
        .valign(gtk::Align::Center)
        .css_classes(["flat"])
        .build();

    if shortcut_label.is_empty() {
        shortcut_btn.set_label("Disabled");
        shortcut_btn.add_css_class("dim-label");
    }

    shortcut_btn.set_sensitive(false);

    row.add_suffix(&shortcut_btn);
    group.add(&row);
}
