//! Pixel surface abstraction over owned RGBA buffers.
//!
//! The fill and drawing engines never allocate pixel storage of their own;
//! they operate on anything implementing [`PixelSurface`]. Bounds discipline
//! lives here: reads outside the surface return transparent, writes outside
//! the surface are rejected as no-ops, so the engines themselves never have
//! to validate coordinates before touching a pixel.

use image::{Rgba, RgbaImage};

/// A rectangular pixel surface addressed by integer (x, y), origin top-left.
///
/// Coordinates are `i32` so that callers can probe neighbors of edge pixels
/// without underflow gymnastics. The surface, not the caller, absorbs
/// out-of-bounds access.
pub trait PixelSurface {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Read the pixel at (x, y). Out-of-bounds reads return transparent.
    fn get_pixel(&self, x: i32, y: i32) -> Rgba<u8>;

    /// Write the pixel at (x, y). Out-of-bounds writes are no-ops.
    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>);

    /// Whether (x, y) lies within `[0, width) x [0, height)`.
    fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && (x as u32) < self.width() && y >= 0 && (y as u32) < self.height()
    }
}

impl PixelSurface for RgbaImage {
    fn width(&self) -> u32 {
        self.dimensions().0
    }

    fn height(&self) -> u32 {
        self.dimensions().1
    }

    fn get_pixel(&self, x: i32, y: i32) -> Rgba<u8> {
        if self.in_bounds(x, y) {
            *RgbaImage::get_pixel(self, x as u32, y as u32)
        } else {
            Rgba([0, 0, 0, 0])
        }
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if self.in_bounds(x, y) {
            RgbaImage::put_pixel(self, x as u32, y as u32, color);
        }
    }
}

/// An owned RGBA canvas, the default surface for rendering scenes.
///
/// Thin wrapper around [`image::RgbaImage`] so results can be saved as PNG
/// without conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Create a canvas of the given size, every pixel set to `background`.
    pub fn new(width: u32, height: u32, background: Rgba<u8>) -> Self {
        Canvas { image: RgbaImage::from_pixel(width, height, background) }
    }

    /// Wrap an existing image.
    pub fn from_image(image: RgbaImage) -> Self {
        Canvas { image }
    }

    /// Borrow the underlying image.
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    /// Consume the canvas, yielding the underlying image.
    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

impl PixelSurface for Canvas {
    fn width(&self) -> u32 {
        self.image.dimensions().0
    }

    fn height(&self) -> u32 {
        self.image.dimensions().1
    }

    fn get_pixel(&self, x: i32, y: i32) -> Rgba<u8> {
        PixelSurface::get_pixel(&self.image, x, y)
    }

    fn set_pixel(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        PixelSurface::set_pixel(&mut self.image, x, y, color);
    }
}
