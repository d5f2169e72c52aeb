//! Icon types for rendered output.
//!
//! Every icon this crate produces is square, so an [`IconImage`] is identified
//! by its edge length alone. Related sizes are grouped into an [`IconSet`].

use image::RgbaImage;

/// A rectangle defined in pixel coordinates.
///
/// Used for shape bounding boxes such as the clock face circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RectPx {
    /// X offset from the left edge of the image
    pub x: u32,
    /// Y offset from the top edge of the image
    pub y: u32,
    /// Width of the rectangle
    pub width: u32,
    /// Height of the rectangle
    pub height: u32,
}

impl RectPx {
    /// Creates a new rectangle with the given position and dimensions.
    pub fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle from its corner coordinates `(x0, y0)-(x1, y1)`.
    ///
    /// Returns `None` if the corners are not ordered.
    pub fn from_corners(x0: u32, y0: u32, x1: u32, y1: u32) -> Option<Self> {
        if x1 < x0 || y1 < y0 {
            return None;
        }
        Some(Self::new(x0, y0, x1 - x0, y1 - y0))
    }

    /// Creates a square rectangle of side `size` shrunk by `inset` on every side.
    ///
    /// Returns `None` if the inset consumes the whole square.
    pub fn inset_square(size: u32, inset: u32) -> Option<Self> {
        let far = size.checked_sub(inset)?;
        Self::from_corners(inset, inset, far, far)
    }

    /// Returns the right edge coordinate (x + width).
    pub fn right(&self) -> u32 {
        self.x + self.width
    }

    /// Returns the bottom edge coordinate (y + height).
    pub fn bottom(&self) -> u32 {
        self.y + self.height
    }

    /// Returns the box as `(x0, y0, x1, y1)`.
    pub fn corners(&self) -> (u32, u32, u32, u32) {
        (self.x, self.y, self.right(), self.bottom())
    }

    /// Returns true if the rectangle lies within a `size x size` canvas.
    pub fn fits_within(&self, size: u32) -> bool {
        self.right() <= size && self.bottom() <= size
    }
}

/// A single rendered icon.
#[derive(Debug, Clone, PartialEq)]
pub struct IconImage {
    /// The image data in RGBA format. Always square.
    pub data: RgbaImage,
}

impl IconImage {
    pub fn new(data: RgbaImage) -> Self {
        Self { data }
    }

    /// Returns the edge length in pixels.
    pub fn size(&self) -> u32 {
        self.data.width()
    }
}

/// An ordered collection of rendered icons, typically one per output size.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IconSet {
    pub images: Vec<IconImage>,
}

impl IconSet {
    /// Creates a new empty icon set.
    pub fn new() -> Self {
        Self { images: Vec::new() }
    }

    /// Creates an icon set from a vector of images.
    pub fn from_images(images: Vec<IconImage>) -> Self {
        Self { images }
    }

    /// Adds an image to the icon set.
    pub fn add_image(&mut self, image: IconImage) {
        self.images.push(image);
    }

    /// Returns the number of images in the set.
    pub fn len(&self) -> usize {
        self.images.len()
    }

    /// Returns true if the icon set contains no images.
    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    /// Finds the image with exactly the given edge length.
    pub fn find_by_size(&self, size: u32) -> Option<&IconImage> {
        self.images.iter().find(|img| img.size() == size)
    }

    /// Returns an iterator over the icon images.
    pub fn iter(&self) -> impl Iterator<Item = &IconImage> {
        self.images.iter()
    }
}

impl IntoIterator for IconSet {
    type Item = IconImage;
    type IntoIter = std::vec::IntoIter<IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.into_iter()
    }
}

impl<'a> IntoIterator for &'a IconSet {
    type Item = &'a IconImage;
    type IntoIter = std::slice::Iter<'a, IconImage>;

    fn into_iter(self) -> Self::IntoIter {
        self.images.iter()
    }
}
