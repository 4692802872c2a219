use gtk4 as gtk;

use gtk::DrawingArea;
use gtk4::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

use crate::app::AppState;

pub struct DrawingComponents {
    pub drawing_area: DrawingArea,
    pub placeholder_icon: gtk::Image,
}

pub fn create_drawing_area(state: &Rc<RefCell<AppState>>) -> DrawingComponents {
    let drawing_area = DrawingArea::builder().hexpand(true).vexpand(true).build();

    setup_draw_function(&drawing_area, state);

    let placeholder_icon = gtk::Image::builder()
        .icon_name("image-x-generic-symbolic")
        .pixel_size(128)
        .opacity(0.2)
        .halign(gtk::Align::Center)
        .valign(gtk::Align::Center)
        .build();

    DrawingComponents {
        drawing_area,
        placeholder_icon,
    }
}

fn setup_draw_function(drawing_area: &DrawingArea, state: &Rc<RefCell<AppState>>) {
    drawing_area.set_draw_func({
        let state = state.clone();
        move |_, cr, width, height| {
            draw_content(&state, cr, width, height);
        }
    });
}

fn draw_content(state: &Rc<RefCell<AppState>>, cr: &gtk::cairo::Context, width: i32, height: i32) {
    let state = state.borrow();
    let da_width = width as f64;
    let da_height = height as f64;

    cr.set_source_rgb(0.14, 0.14, 0.14);
    cr.paint().expect("Invalid cairo surface state");

    if let Some(ref pixbuf) = state.displayed_image {
        let img_width = pixbuf.width() as f64;
        let img_height = pixbuf.height() as f64;

        let scale_x = da_width / img_width;
        let scale_y = da_height / img_height;
        let scale = scale_x.min(scale_y);

        // Centered, shifted horizontally by the live swipe offset
        let offset_x = (da_width - img_width * scale) / 2.0 + state.drag_offset_x;
        let offset_y = (da_height - img_height * scale) / 2.0;

        cr.save().expect("Failed to save cairo context");
        cr.translate(offset_x, offset_y);
        cr.scale(scale, scale);
        cr.set_source_pixbuf(pixbuf, 0.0, 0.0);
        cr.paint().expect("Failed to paint pixbuf");
        cr.restore().expect("Failed to restore cairo context");
    }
}
