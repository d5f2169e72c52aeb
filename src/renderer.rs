//! Icon rendering: the procedural clock face and SVG masters.

use image::RgbaImage;

use crate::canvas::Canvas;
use crate::error::{Error, Result};
use crate::geometry::ClockGeometry;
use crate::icon::{IconImage, IconSet};
use crate::style::ClockStyle;
use crate::svg::{self, SvgSource};

/// Draws the clock face icon at the given size.
///
/// The canvas starts transparent, the face circle is stroked inside a box
/// inset by `size / 8`, then both hands are stroked from the center. Face and
/// hands share the stroke width `max(1, size / 16)`.
///
/// Returns [`Error::Geometry`] rather than an empty image if nothing could be
/// drawn at this size.
pub fn render_clock(size: u32, style: &ClockStyle) -> Result<RgbaImage> {
    let geometry = ClockGeometry::for_size(size)?;
    let mut canvas = Canvas::new(size)?;
    let width = geometry.stroke_width as f32;

    canvas.stroke_ellipse(geometry.circle_bounds, style.face, width)?;

    let center = geometry.center_point();
    canvas.stroke_line(center, geometry.hour_hand_end, style.hands, width)?;
    canvas.stroke_line(center, geometry.minute_hand_end, style.hands, width)?;

    let img = canvas.into_image();
    if img.pixels().all(|p| p[3] == 0) {
        return Err(Error::Geometry { size });
    }
    Ok(img)
}

/// What an [`IconRenderer`] draws.
#[derive(Debug, Clone, PartialEq)]
pub enum IconSource {
    /// The procedural clock face.
    Clock(ClockStyle),
    /// An SVG master scaled to each size.
    Svg(SvgSource),
}

impl Default for IconSource {
    fn default() -> Self {
        Self::Clock(ClockStyle::default())
    }
}

/// Renders icons from a single [`IconSource`] at any number of sizes.
///
/// # Example
///
/// ```
/// use clock_icon_renderer::IconRenderer;
///
/// let renderer = IconRenderer::default();
/// let icon = renderer.render(32).unwrap();
/// assert_eq!(icon.size(), 32);
/// ```
#[derive(Debug, Clone, Default)]
pub struct IconRenderer {
    source: IconSource,
}

impl IconRenderer {
    pub fn new(source: IconSource) -> Self {
        Self { source }
    }

    /// Creates a renderer for the clock face in the given style.
    pub fn clock(style: ClockStyle) -> Self {
        Self::new(IconSource::Clock(style))
    }

    pub fn source(&self) -> &IconSource {
        &self.source
    }

    /// Renders a single icon. Each call produces a fresh canvas.
    pub fn render(&self, size: u32) -> Result<IconImage> {
        let data = match &self.source {
            IconSource::Clock(style) => render_clock(size, style)?,
            IconSource::Svg(source) => svg::render_source(source, size)?,
        };
        Ok(IconImage::new(data))
    }

    /// Renders every size in order, stopping at the first failure.
    pub fn render_all(&self, sizes: &[u32]) -> Result<IconSet> {
        match &self.source {
            // Parse the master once rather than per size
            IconSource::Svg(source) => {
                let tree = source.parse()?;
                let images = sizes
                    .iter()
                    .map(|&size| svg::render_tree(&tree, size).map(IconImage::new))
                    .collect::<Result<Vec<_>>>()?;
                Ok(IconSet::from_images(images))
            }
            IconSource::Clock(_) => {
                let images = sizes
                    .iter()
                    .map(|&size| self.render(size))
                    .collect::<Result<Vec<_>>>()?;
                Ok(IconSet::from_images(images))
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
