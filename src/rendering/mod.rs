//! Rendering: the canvas, the primitive set, and the rasterizer

pub mod paint;
pub mod raster;

use image::RgbaImage;

pub use image::Rgba;

use crate::{CanvasSize, Error, Result};

/// Fully transparent black, the initial value of every canvas pixel.
pub const TRANSPARENT: Rgba<u8> = Rgba([0, 0, 0, 0]);

/// Opaque white, the ink used by both built-in icons.
pub const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

/// An RGBA pixel buffer that primitives are painted onto.
///
/// Writes outside the buffer are silently clipped, so primitives may extend
/// past the edges.
#[derive(Debug, Clone, PartialEq)]
pub struct Canvas {
    image: RgbaImage,
}

impl Canvas {
    /// Allocate a fully transparent canvas.
    pub fn new(size: CanvasSize) -> Result<Self> {
        if size.width == 0 || size.height == 0 {
            return Err(Error::Render(format!(
                "canvas must be non-empty, got {}x{}",
                size.width, size.height
            )));
        }
        Ok(Self {
            image: RgbaImage::from_pixel(size.width, size.height, TRANSPARENT),
        })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Pixel at `(x, y)`, or `None` when outside the canvas.
    pub fn pixel(&self, x: u32, y: u32) -> Option<Rgba<u8>> {
        self.image.get_pixel_checked(x, y).copied()
    }

    /// Overwrite a single pixel; no blending is applied.
    pub(crate) fn put(&mut self, x: i32, y: i32, color: Rgba<u8>) {
        if x < 0 || y < 0 {
            return;
        }
        if let Some(p) = self.image.get_pixel_mut_checked(x as u32, y as u32) {
            *p = color;
        }
    }

    /// Fill the inclusive horizontal run `x0..=x1` on row `y`.
    pub(crate) fn span(&mut self, y: i32, x0: i32, x1: i32, color: Rgba<u8>) {
        if y < 0 || y >= self.height() as i32 {
            return;
        }
        let lo = x0.max(0);
        let hi = x1.min(self.width() as i32 - 1);
        for x in lo..=hi {
            self.image.put_pixel(x as u32, y as u32, color);
        }
    }

    pub fn as_image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}
