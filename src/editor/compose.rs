//! Text compositor
//!
//! Rasterizes a caption onto a copy of an image, producing a new pixbuf.
//! Pure: the base image is never mutated, and equal inputs produce equal
//! outputs.

use gtk4 as gtk;

use gtk::cairo::{Context, Format, ImageSurface};
use gtk::gdk::RGBA;
use gtk::gdk_pixbuf::{Colorspace, Pixbuf};
use gtk::glib;
use gtk::prelude::*;

#[derive(Debug)]
pub enum ComposeError {
    /// No base image to composite onto
    NoImage,

    SurfaceFailed(String),

    DrawFailed(String),
}

impl std::fmt::Display for ComposeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoImage => write!(f, "No image available to add text to"),
            Self::SurfaceFailed(msg) => write!(f, "Failed to create raster surface: {}", msg),
            Self::DrawFailed(msg) => write!(f, "Failed to draw text: {}", msg),
        }
    }
}

impl std::error::Error for ComposeError {}

/// Fixed style for composited captions
#[derive(Clone, Debug)]
pub struct TextStyle {
    pub font_family: String,
    pub bold: bool,
    pub font_size: f64,
    pub color: RGBA,
    /// Top-left corner of the text, in image pixels
    pub position: (f64, f64),
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font_family: "Sans".to_string(),
            bold: true,
            font_size: 36.0,
            color: RGBA::new(1.0, 0.0, 0.0, 1.0),
            position: (20.0, 20.0),
        }
    }
}

/// Composite `text` onto a copy of `base` at the style's fixed position.
///
/// The output has the same dimensions as the input. Any string, including
/// the empty string, is accepted.
pub fn composite_text(
    base: Option<&Pixbuf>,
    text: &str,
    style: &TextStyle,
) -> Result<Pixbuf, ComposeError> {
    let base = base.ok_or(ComposeError::NoImage)?;

    let width = base.width();
    let height = base.height();

    let surface = ImageSurface::create(Format::ARgb32, width, height)
        .map_err(|e| ComposeError::SurfaceFailed(e.to_string()))?;

    {
        let cr = Context::new(&surface).map_err(|e| ComposeError::SurfaceFailed(e.to_string()))?;

        cr.set_source_pixbuf(base, 0.0, 0.0);
        cr.paint().map_err(|e| ComposeError::DrawFailed(e.to_string()))?;

        let weight = if style.bold {
            gtk::cairo::FontWeight::Bold
        } else {
            gtk::cairo::FontWeight::Normal
        };
        cr.select_font_face(&style.font_family, gtk::cairo::FontSlant::Normal, weight);
        cr.set_font_size(style.font_size);
        cr.set_source_rgba(
            style.color.red() as f64,
            style.color.green() as f64,
            style.color.blue() as f64,
            style.color.alpha() as f64,
        );

        // The style position is the top-left of the text box; cairo draws
        // from the baseline
        let ascent = cr
            .font_extents()
            .map_err(|e| ComposeError::DrawFailed(e.to_string()))?
            .ascent();
        cr.move_to(style.position.0, style.position.1 + ascent);
        cr.show_text(text)
            .map_err(|e| ComposeError::DrawFailed(e.to_string()))?;
    }

    surface_to_pixbuf(surface)
}

/// Convert an ARGB32 cairo surface into an RGBA pixbuf
fn surface_to_pixbuf(mut surface: ImageSurface) -> Result<Pixbuf, ComposeError> {
    surface.flush();

    let width = surface.width();
    let height = surface.height();
    let stride = surface.stride() as usize;

    let data = surface
        .data()
        .map_err(|e| ComposeError::SurfaceFailed(e.to_string()))?;

    let mut pixels = Vec::with_capacity((width * height * 4) as usize);
    for row in 0..height as usize {
        let line = &data[row * stride..row * stride + width as usize * 4];
        for px in line.chunks_exact(4) {
            // ARGB32 is premultiplied, packed in native endianness
            let argb = u32::from_ne_bytes([px[0], px[1], px[2], px[3]]);
            let a = ((argb >> 24) & 0xff) as u8;
            let r = ((argb >> 16) & 0xff) as u8;
            let g = ((argb >> 8) & 0xff) as u8;
            let b = (argb & 0xff) as u8;

            let (r, g, b) = if a == 0 {
                (0, 0, 0)
            } else {
                (
                    (r as u32 * 255 / a as u32) as u8,
                    (g as u32 * 255 / a as u32) as u8,
                    (b as u32 * 255 / a as u32) as u8,
                )
            };
            pixels.extend_from_slice(&[r, g, b, a]);
        }
    }

    let bytes = glib::Bytes::from(&pixels);
    Ok(Pixbuf::from_bytes(
        &bytes,
        Colorspace::Rgb,
        true,
        8,
        width,
        height,
        width * 4,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid_pixbuf(width: i32, height: i32, rgba: u32) -> Pixbuf {
        let pixbuf = Pixbuf::new(Colorspace::Rgb, true, 8, width, height)
            .expect("failed to allocate pixbuf");
        pixbuf.fill(rgba);
        pixbuf
    }

    fn pixel_bytes(pixbuf: &Pixbuf) -> Vec<u8> {
        pixbuf.read_pixel_bytes().to_vec()
    }

    #[test]
    fn test_composite_without_image_is_typed_error() {
        let result = composite_text(None, "Hi", &TextStyle::default());
        assert!(matches!(result, Err(ComposeError::NoImage)));
    }

    #[test]
    fn test_composite_preserves_dimensions() {
        let base = solid_pixbuf(100, 100, 0x0000ffff);
        let out = composite_text(Some(&base), "Hi", &TextStyle::default()).unwrap();
        assert_eq!(out.width(), 100);
        assert_eq!(out.height(), 100);
    }

    #[test]
    fn test_composite_changes_only_glyph_region() {
        let base = solid_pixbuf(100, 100, 0x0000ffff);
        let out = composite_text(Some(&base), "Hi", &TextStyle::default()).unwrap();

        let before = pixel_bytes(&base);
        let after = pixel_bytes(&out);
        assert_ne!(before, after, "text should alter some pixels");

        // Text starts at (20, 20) in 36pt; the left margin and the bottom
        // rows are outside any glyph
        let stride = (out.rowstride()) as usize;
        for y in 0..100usize {
            for x in 0..10usize {
                let i = y * stride + x * 4;
                assert_eq!(&after[i..i + 4], &before[i..i + 4], "pixel ({}, {})", x, y);
            }
        }
        for y in 90..100usize {
            for x in 0..100usize {
                let i = y * stride + x * 4;
                assert_eq!(&after[i..i + 4], &before[i..i + 4], "pixel ({}, {})", x, y);
            }
        }
    }

    #[test]
    fn test_composite_is_deterministic() {
        let base_a = solid_pixbuf(64, 64, 0x00ff00ff);
        let base_b = solid_pixbuf(64, 64, 0x00ff00ff);
        let out_a = composite_text(Some(&base_a), "twice", &TextStyle::default()).unwrap();
        let out_b = composite_text(Some(&base_b), "twice", &TextStyle::default()).unwrap();
        assert_eq!(pixel_bytes(&out_a), pixel_bytes(&out_b));
    }

    #[test]
    fn test_composite_empty_text_is_identity() {
        let base = solid_pixbuf(40, 40, 0xff8800ff);
        let out = composite_text(Some(&base), "", &TextStyle::default()).unwrap();
        assert_eq!(pixel_bytes(&base), pixel_bytes(&out));
    }

    #[test]
    fn test_base_image_is_not_mutated() {
        let base = solid_pixbuf(50, 50, 0x0000ffff);
        let before = pixel_bytes(&base);
        let _ = composite_text(Some(&base), "Hi", &TextStyle::default()).unwrap();
        assert_eq!(before, pixel_bytes(&base));
    }
}
