//! Clock face geometry derived from the icon size.
//!
//! Coordinates are pixel coordinates: a point `(x, y)` names the centre of
//! pixel `(x, y)`, and the circle bounds include their far edge pixels.

use crate::error::{Error, Result};
use crate::icon::RectPx;

/// Direction of the hour hand as fractions of a quarter of the icon size.
const HOUR_HAND: (f32, f32) = (0.7, -0.4);

/// Direction of the minute hand as fractions of a quarter of the icon size.
const MINUTE_HAND: (f32, f32) = (-0.7, -0.4);

/// A point in pixel coordinates; fractional values fall between pixel centres.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Stroke width shared by the face outline and both hands.
///
/// Never less than one pixel, so the smallest icons stay visible.
pub fn stroke_width(size: u32) -> u32 {
    (size / 16).max(1)
}

/// Every derived quantity needed to draw the clock face at one size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockGeometry {
    /// Edge length of the canvas.
    pub size: u32,

    /// Inset of the face circle from each canvas edge.
    pub padding: u32,

    /// Bounding box of the face circle, `(padding, padding)-(size - padding, size - padding)`.
    pub circle_bounds: RectPx,

    pub stroke_width: u32,

    /// Shared start point of both hands, `size / 2` on each axis.
    pub center: u32,

    pub hour_hand_end: Point,
    pub minute_hand_end: Point,
}

impl ClockGeometry {
    /// Computes the geometry for a `size x size` icon.
    ///
    /// Returns [`Error::InvalidSize`] for a zero size.
    pub fn for_size(size: u32) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidSize(size));
        }

        let padding = size / 8;
        let circle_bounds =
            RectPx::inset_square(size, padding).ok_or(Error::Geometry { size })?;
        let center = size / 2;

        // Quarter is truncated before scaling.
        let quarter = (size / 4) as f32;
        let hand_end = |(dx, dy): (f32, f32)| {
            Point::new(center as f32 + quarter * dx, center as f32 + quarter * dy)
        };

        let geometry = Self {
            size,
            padding,
            circle_bounds,
            stroke_width: stroke_width(size),
            center,
            hour_hand_end: hand_end(HOUR_HAND),
            minute_hand_end: hand_end(MINUTE_HAND),
        };

        tracing::debug!(?geometry, "computed clock geometry");
        Ok(geometry)
    }

    /// Returns the shared start point of both hands.
    pub fn center_point(&self) -> Point {
        Point::new(self.center as f32, self.center as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIZES: [u32; 4] = [16, 32, 48, 128];

    #[test]
    fn stroke_width_never_below_one() {
        for size in 1..=256 {
            assert!(stroke_width(size) >= 1, "size {size}");
        }
        assert_eq!(stroke_width(15), 1);
        assert_eq!(stroke_width(16), 1);
        assert_eq!(stroke_width(32), 2);
        assert_eq!(stroke_width(48), 3);
        assert_eq!(stroke_width(128), 8);
    }

    #[test]
    fn geometry_for_16() {
        let g = ClockGeometry::for_size(16).unwrap();
        assert_eq!(g.padding, 2);
        assert_eq!(g.circle_bounds.corners(), (2, 2, 14, 14));
        assert_eq!(g.stroke_width, 1);
        assert_eq!(g.center, 8);
    }

    #[test]
    fn geometry_for_128() {
        let g = ClockGeometry::for_size(128).unwrap();
        assert_eq!(g.padding, 16);
        assert_eq!(g.circle_bounds.corners(), (16, 16, 112, 112));
        assert_eq!(g.stroke_width, 8);
        assert_eq!(g.center, 64);

        // Quarter of 128 is 32: hands reach 22.4 across and 12.8 up
        assert!((g.hour_hand_end.x - 86.4).abs() < 1e-4);
        assert!((g.hour_hand_end.y - 51.2).abs() < 1e-4);
        assert!((g.minute_hand_end.x - 41.6).abs() < 1e-4);
        assert!((g.minute_hand_end.y - 51.2).abs() < 1e-4);
    }

    #[test]
    fn hands_mirror_around_center() {
        for size in SIZES {
            let g = ClockGeometry::for_size(size).unwrap();
            let c = g.center as f32;
            assert!((g.hour_hand_end.x - c + (g.minute_hand_end.x - c)).abs() < 1e-4);
            assert_eq!(g.hour_hand_end.y, g.minute_hand_end.y);
            assert!(g.hour_hand_end.y < c, "hands point upwards");
        }
    }

    #[test]
    fn quarter_is_truncated_before_scaling() {
        // 18 / 4 truncates to 4, so the hour hand ends 2.8 right of center 9
        let g = ClockGeometry::for_size(18).unwrap();
        assert!((g.hour_hand_end.x - 11.8).abs() < 1e-4);
        assert!((g.hour_hand_end.y - 7.4).abs() < 1e-4);
    }

    #[test]
    fn circle_is_inset_symmetrically() {
        for size in 8..=256 {
            let g = ClockGeometry::for_size(size).unwrap();
            let (x0, y0, x1, y1) = g.circle_bounds.corners();
            assert_eq!(x0, size - x1, "size {size}");
            assert_eq!(y0, size - y1, "size {size}");
            assert!(x0 >= 1, "size {size} touches the edge");
            assert!(g.circle_bounds.fits_within(size));
        }
    }

    #[test]
    fn zero_size_is_rejected() {
        assert!(matches!(
            ClockGeometry::for_size(0),
            Err(Error::InvalidSize(0))
        ));
    }
}
