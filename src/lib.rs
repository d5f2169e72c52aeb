//! clock-icon-renderer: procedural clock-face icons
//!
//! This crate draws a simple clock face (a stroked circle with two hands) on
//! a transparent square canvas and writes it as PNG at a set of sizes. An SVG
//! master can be rasterized through the same pipeline instead.
//!
//! # Example
//!
//! ```
//! use clock_icon_renderer::{ClockGeometry, IconRenderer};
//!
//! let renderer = IconRenderer::default();
//! let icon = renderer.render(128).unwrap();
//! assert_eq!(icon.size(), 128);
//!
//! let geometry = ClockGeometry::for_size(128).unwrap();
//! assert_eq!(geometry.circle_bounds.corners(), (16, 16, 112, 112));
//! assert_eq!(geometry.stroke_width, 8);
//! ```
//!
//! # Writing Files
//!
//! [`OutputDriver`] creates the output directory if needed and writes
//! `icon<size>.png` for each size:
//!
//! ```no_run
//! use clock_icon_renderer::generate_default_icons;
//!
//! let written = generate_default_icons("icons").unwrap();
//! assert_eq!(written.len(), 4);
//! ```

mod canvas;
mod config;
mod error;
mod geometry;
mod icon;
mod output;
mod renderer;
mod style;
mod svg;

pub use canvas::Canvas;
pub use config::{
    GeneratorConfig, SourceSettings, StyleSettings, DEFAULT_FILE_PREFIX, DEFAULT_OUTPUT_DIR,
    DEFAULT_SIZES,
};
pub use error::{Error, Result};
pub use geometry::{stroke_width, ClockGeometry, Point};
pub use icon::{IconImage, IconSet, RectPx};
pub use output::{generate_default_icons, OutputDriver};
pub use renderer::{render_clock, IconRenderer, IconSource};
pub use style::ClockStyle;
pub use svg::{render_source, SvgSource};
