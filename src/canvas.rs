//! Square drawing surface backed by a tiny-skia pixmap.
//!
//! A [`Canvas`] starts fully transparent, accepts stroke and SVG drawing
//! calls, and is consumed into an [`RgbaImage`] once drawing is done.
//!
//! Stroke calls take pixel coordinates: point `(x, y)` is the centre of pixel
//! `(x, y)`, and bounding boxes are inclusive on both ends. Strokes are drawn
//! aliased, so every pixel is either untouched or exactly the stroke color.

use image::{Rgba, RgbaImage};
use palette::Srgb;
use resvg::tiny_skia::{LineCap, Paint, PathBuilder, Pixmap, Rect, Stroke, Transform};
use resvg::usvg::Tree;

use crate::error::{Error, Result};
use crate::geometry::Point;
use crate::icon::RectPx;

pub struct Canvas {
    pixmap: Pixmap,
}

impl Canvas {
    /// Allocates a transparent `size x size` canvas.
    pub fn new(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }
        let pixmap = Pixmap::new(size, size).ok_or(Error::Canvas { size })?;
        Ok(Self { pixmap })
    }

    /// Returns the edge length in pixels.
    pub fn size(&self) -> u32 {
        self.pixmap.width()
    }

    /// Strokes the outline of the ellipse inscribed in `bounds`.
    ///
    /// `bounds` covers pixels `x0..=x1` and `y0..=y1`. The stroke lies entirely
    /// inside it: the path is inset by half the stroke width so its outer edge
    /// touches the outer edges of the boundary pixels.
    pub fn stroke_ellipse(&mut self, bounds: RectPx, color: Srgb<u8>, width: f32) -> Result<()> {
        let half = width / 2.0;
        let (x0, y0, x1, y1) = bounds.corners();
        let oval = Rect::from_ltrb(
            x0 as f32 + half,
            y0 as f32 + half,
            (x1 + 1) as f32 - half,
            (y1 + 1) as f32 - half,
        )
        .and_then(PathBuilder::from_oval)
        .ok_or(Error::Geometry { size: self.size() })?;

        let stroke = Stroke {
            width,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&oval, &solid_paint(color), &stroke, Transform::identity(), None);
        Ok(())
    }

    /// Strokes a straight segment with butt caps between two pixel centres.
    pub fn stroke_line(&mut self, from: Point, to: Point, color: Srgb<u8>, width: f32) -> Result<()> {
        let mut pb = PathBuilder::new();
        pb.move_to(from.x + 0.5, from.y + 0.5);
        pb.line_to(to.x + 0.5, to.y + 0.5);
        let line = pb.finish().ok_or(Error::Geometry { size: self.size() })?;

        let stroke = Stroke {
            width,
            line_cap: LineCap::Butt,
            ..Stroke::default()
        };
        self.pixmap
            .stroke_path(&line, &solid_paint(color), &stroke, Transform::identity(), None);
        Ok(())
    }

    /// Renders a parsed SVG tree scaled to fit the canvas and centred on it.
    ///
    /// Aspect ratio is preserved; the shorter axis is padded with transparency.
    pub fn draw_svg(&mut self, tree: &Tree) -> Result<()> {
        let size = self.size() as f32;
        let svg_size = tree.size();
        let longest = svg_size.width().max(svg_size.height());
        if longest <= 0.0 {
            return Err(Error::Svg("SVG has an empty viewport".into()));
        }

        let scale = size / longest;
        let dx = (size - svg_size.width() * scale) / 2.0;
        let dy = (size - svg_size.height() * scale) / 2.0;
        let transform = Transform::from_scale(scale, scale).post_translate(dx, dy);

        resvg::render(tree, transform, &mut self.pixmap.as_mut());
        Ok(())
    }

    /// Converts the canvas into a straight-alpha RGBA image.
    pub fn into_image(self) -> RgbaImage {
        let size = self.size();
        let mut img = RgbaImage::new(size, size);

        // tiny-skia stores premultiplied pixels in row-major order
        for (dst, src) in img.pixels_mut().zip(self.pixmap.pixels()) {
            let (r, g, b, a) = unpremultiply(src.red(), src.green(), src.blue(), src.alpha());
            *dst = Rgba([r, g, b, a]);
        }

        img
    }
}

fn solid_paint(color: Srgb<u8>) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.red, color.green, color.blue, 255);
    paint.anti_alias = false;
    paint
}

/// Unpremultiplies a premultiplied alpha pixel.
fn unpremultiply(r: u8, g: u8, b: u8, a: u8) -> (u8, u8, u8, u8) {
    if a == 0 {
        (0, 0, 0, 0)
    } else {
        let a_f = a as f32 / 255.0;
        (
            (r as f32 / a_f).round().min(255.0) as u8,
            (g as f32 / a_f).round().min(255.0) as u8,
            (b as f32 / a_f).round().min(255.0) as u8,
            a,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLUE: Srgb<u8> = Srgb::new(52, 152, 219);

    #[test]
    fn new_canvas_is_transparent() {
        let img = Canvas::new(16).unwrap().into_image();
        assert_eq!(img.dimensions(), (16, 16));
        assert!(img.pixels().all(|p| p.0 == [0, 0, 0, 0]));
    }

    #[test]
    fn zero_size_canvas_is_rejected() {
        assert!(matches!(Canvas::new(0), Err(Error::InvalidSize(0))));
    }

    #[test]
    fn ellipse_stroke_stays_inside_bounds() {
        let mut canvas = Canvas::new(32).unwrap();
        let bounds = RectPx::inset_square(32, 4).unwrap();
        canvas.stroke_ellipse(bounds, BLUE, 2.0).unwrap();
        let img = canvas.into_image();

        for (x, y, p) in img.enumerate_pixels() {
            let outside = x < 4 || y < 4 || x > 28 || y > 28;
            if outside {
                assert_eq!(p[3], 0, "pixel ({x}, {y}) drawn outside bounds");
            }
        }

        // Top of the ring at the middle column
        assert_eq!(img.get_pixel(16, 5).0, [52, 152, 219, 255]);
        // Interior stays empty
        assert_eq!(img.get_pixel(16, 16)[3], 0);
    }

    #[test]
    fn line_stroke_covers_its_path() {
        let mut canvas = Canvas::new(16).unwrap();
        canvas
            .stroke_line(Point::new(2.0, 8.0), Point::new(14.0, 8.0), BLUE, 3.0)
            .unwrap();
        let img = canvas.into_image();

        // Three rows centred on row 8
        assert_eq!(img.get_pixel(8, 7).0, [52, 152, 219, 255]);
        assert_eq!(img.get_pixel(8, 8).0, [52, 152, 219, 255]);
        assert_eq!(img.get_pixel(8, 9).0, [52, 152, 219, 255]);
        assert_eq!(img.get_pixel(8, 5)[3], 0);
        assert_eq!(img.get_pixel(8, 11)[3], 0);
        // Butt caps do not extend past the endpoints
        assert_eq!(img.get_pixel(0, 8)[3], 0);
        assert_eq!(img.get_pixel(15, 8)[3], 0);
    }

    #[test]
    fn strokes_are_aliased() {
        let mut canvas = Canvas::new(32).unwrap();
        canvas
            .stroke_ellipse(RectPx::inset_square(32, 4).unwrap(), BLUE, 1.0)
            .unwrap();
        canvas
            .stroke_line(Point::new(16.0, 16.0), Point::new(24.0, 11.0), BLUE, 1.0)
            .unwrap();
        let img = canvas.into_image();

        let drawn: Vec<_> = img.pixels().filter(|p| p[3] != 0).collect();
        assert!(!drawn.is_empty());
        for p in drawn {
            assert_eq!(p.0, [52, 152, 219, 255], "partially covered pixel");
        }
    }

    #[test]
    fn one_pixel_box_still_draws() {
        let mut canvas = Canvas::new(2).unwrap();
        canvas
            .stroke_ellipse(RectPx::inset_square(2, 0).unwrap(), BLUE, 1.0)
            .unwrap();
        let img = canvas.into_image();
        assert!(img.pixels().any(|p| p.0 == [52, 152, 219, 255]));
    }

    #[test]
    fn unpremultiply_restores_straight_alpha() {
        assert_eq!(unpremultiply(0, 0, 0, 0), (0, 0, 0, 0));
        assert_eq!(unpremultiply(255, 0, 0, 255), (255, 0, 0, 255));
        assert_eq!(unpremultiply(10, 20, 0, 51), (50, 100, 0, 51));
    }
}
