//! SVG master artwork rasterized with resvg/usvg.
//!
//! An SVG master is an alternative to the procedural clock face: the same
//! artwork is scaled onto each icon size.

use std::fs;
use std::path::PathBuf;

use image::RgbaImage;
use resvg::usvg::{Options, Tree};

use crate::canvas::Canvas;
use crate::error::{Error, Result};

/// A source for SVG data.
///
/// # Example
///
/// ```
/// use clock_icon_renderer::SvgSource;
///
/// let inline = SvgSource::from_svg("<svg>...</svg>");
/// let on_disk = SvgSource::from_path("images/icon.svg");
/// assert!(inline.is_raw());
/// assert!(!on_disk.is_raw());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SvgSource {
    /// Raw SVG markup string.
    Raw(String),

    /// Path to an SVG file, read at render time.
    File(PathBuf),
}

impl SvgSource {
    /// Creates a source from raw SVG markup.
    pub fn from_svg(svg: impl Into<String>) -> Self {
        Self::Raw(svg.into())
    }

    /// Creates a source from a file path.
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::File(path.into())
    }

    /// Returns `true` if this is a raw SVG source.
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    /// Resolves this source to SVG markup, reading the file if needed.
    pub fn load(&self) -> Result<String> {
        match self {
            Self::Raw(svg) => Ok(svg.clone()),
            Self::File(path) => fs::read_to_string(path).map_err(|source| Error::ReadSource {
                path: path.clone(),
                source,
            }),
        }
    }

    /// Loads and parses the SVG into a render tree.
    pub fn parse(&self) -> Result<Tree> {
        let svg_data = self.load()?;
        let opts = Options::default();
        Tree::from_str(&svg_data, &opts).map_err(|e| Error::Svg(e.to_string()))
    }
}

/// Renders a parsed SVG tree onto a transparent `size x size` image.
///
/// The artwork is scaled to fit while preserving aspect ratio and centred.
pub fn render_tree(tree: &Tree, size: u32) -> Result<RgbaImage> {
    let mut canvas = Canvas::new(size)?;
    canvas.draw_svg(tree)?;
    Ok(canvas.into_image())
}

/// Renders an [`SvgSource`] onto a transparent `size x size` image.
pub fn render_source(source: &SvgSource, size: u32) -> Result<RgbaImage> {
    let tree = source.parse()?;
    render_tree(&tree, size)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const SIMPLE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"><circle cx="50" cy="50" r="40" fill="#ff0000"/></svg>"##;

    const WIDE_SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100"><rect width="200" height="100" fill="#00ff00"/></svg>"##;

    #[test]
    fn render_simple_svg() {
        let img = render_source(&SvgSource::from_svg(SIMPLE_SVG), 32).unwrap();
        assert_eq!(img.dimensions(), (32, 32));

        assert_eq!(img.get_pixel(16, 16).0, [255, 0, 0, 255]);
        assert_eq!(img.get_pixel(0, 0)[3], 0, "corner should be transparent");
    }

    #[test]
    fn wide_svg_is_centred_vertically() {
        let img = render_source(&SvgSource::from_svg(WIDE_SVG), 32).unwrap();
        assert_eq!(img.dimensions(), (32, 32));

        // 200x100 scales to 32x16, leaving 8 transparent rows above and below
        assert_eq!(img.get_pixel(16, 2)[3], 0);
        assert_eq!(img.get_pixel(16, 16).0, [0, 255, 0, 255]);
        assert_eq!(img.get_pixel(16, 29)[3], 0);
    }

    #[test]
    fn invalid_svg_is_an_error() {
        let err = render_source(&SvgSource::from_svg("not svg at all"), 16).unwrap_err();
        assert!(matches!(err, Error::Svg(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let source = SvgSource::from_path("/nonexistent/clock-icon-renderer/icon.svg");
        let err = render_source(&source, 16).unwrap_err();
        assert!(matches!(err, Error::ReadSource { .. }));
    }

    #[test]
    fn file_source_reads_markup() {
        let dir = std::env::temp_dir().join(format!("clock-icon-svg-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("icon.svg");
        fs::write(&path, SIMPLE_SVG).unwrap();

        let source = SvgSource::from_path(&path);
        assert_eq!(source.load().unwrap(), SIMPLE_SVG);
        let img = render_source(&source, 16).unwrap();
        assert_eq!(img.dimensions(), (16, 16));

        fs::remove_dir_all(&dir).unwrap();
    }
}
