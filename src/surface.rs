//! Pixel surface for sampling and drawing
//!
//! [`Surface`] is the single drawing target of a generation pass and also
//! wraps the decoded source image for color sampling. Out-of-range reads are
//! clamped into the image bounds, so jittered lattice points that land past
//! an edge still sample a defined color.

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use std::io::Cursor;

use crate::error::{LowPolyError, Result};

/// An owned RGBA pixel buffer
///
/// # Example
///
/// ```
/// use lowpoly::Surface;
///
/// let mut surface = Surface::filled(4, 4, [10, 20, 30]);
/// surface.put(1, 1, image::Rgba([255, 0, 0, 255]));
///
/// // Reads outside the bounds clamp to the nearest edge pixel
/// assert_eq!(surface.sample(-5, -5), surface.sample(0, 0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    pixels: RgbaImage,
}

impl Surface {
    /// Create a surface filled with opaque black
    pub fn new(width: u32, height: u32) -> Self {
        Self::filled(width, height, [0, 0, 0])
    }

    /// Create a surface filled with a single opaque color
    pub fn filled(width: u32, height: u32, rgb: [u8; 3]) -> Self {
        let pixels = RgbaImage::from_pixel(width, height, Rgba([rgb[0], rgb[1], rgb[2], 255]));
        Self { pixels }
    }

    /// Wrap a decoded image, converting it to RGBA
    pub fn from_image(image: &DynamicImage) -> Self {
        Self {
            pixels: image.to_rgba8(),
        }
    }

    /// Surface width in pixels
    #[inline]
    pub fn width(&self) -> u32 {
        self.pixels.width()
    }

    /// Surface height in pixels
    #[inline]
    pub fn height(&self) -> u32 {
        self.pixels.height()
    }

    /// Sample the pixel at `(x, y)`, clamping the coordinate into bounds
    ///
    /// Jitter can push lattice points outside the image; clamping makes
    /// those reads return the nearest edge pixel instead of faulting.
    pub fn sample(&self, x: i32, y: i32) -> Rgba<u8> {
        let cx = x.clamp(0, self.width() as i32 - 1) as u32;
        let cy = y.clamp(0, self.height() as i32 - 1) as u32;
        *self.pixels.get_pixel(cx, cy)
    }

    /// Sample only the RGB channels at a clamped coordinate
    #[inline]
    pub fn sample_rgb(&self, x: i32, y: i32) -> [u8; 3] {
        let Rgba([r, g, b, _]) = self.sample(x, y);
        [r, g, b]
    }

    /// Write a pixel; `(x, y)` must be in bounds
    #[inline]
    pub fn put(&mut self, x: u32, y: u32, color: Rgba<u8>) {
        self.pixels.put_pixel(x, y, color);
    }

    /// Encode the surface as a PNG buffer
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        self.pixels
            .write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
            .map_err(|err| LowPolyError::EncodeFailed(err.to_string()))?;
        Ok(buffer)
    }

    /// Consume the surface and return the underlying image buffer
    pub fn into_image(self) -> RgbaImage {
        self.pixels
    }

    /// Borrow the underlying image buffer
    pub fn as_image(&self) -> &RgbaImage {
        &self.pixels
    }
}

impl From<RgbaImage> for Surface {
    fn from(pixels: RgbaImage) -> Self {
        Self { pixels }
    }
}
