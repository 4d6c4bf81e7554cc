//! `image`-crate backed engine.

use std::any::Any;

use image::{Rgba, RgbaImage};

use super::{check_bounds, rgba_bytes, Backend, Surface};
use crate::color::Color;
use crate::error::Result;

/// A surface backed by an [`image::RgbaImage`].
///
/// Specialized operations downcast to this type to reach the native buffer
/// and the `image` crate's accelerated routines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitmapSurface {
    data: RgbaImage,
}

impl BitmapSurface {
    /// Creates a transparent surface of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            data: RgbaImage::new(width, height),
        }
    }

    /// Wraps an existing image buffer.
    pub fn from_image(data: RgbaImage) -> Self {
        Self { data }
    }

    /// The native image buffer.
    pub fn image(&self) -> &RgbaImage {
        &self.data
    }

    /// Consumes the surface, returning the native buffer.
    pub fn into_image(self) -> RgbaImage {
        self.data
    }
}

impl Surface for BitmapSurface {
    fn backend(&self) -> Backend {
        Backend::Bitmap
    }

    fn dimensions(&self) -> (u32, u32) {
        self.data.dimensions()
    }

    fn pixel(&self, x: u32, y: u32) -> Result<Color> {
        check_bounds(x, y, self.dimensions())?;
        let [r, g, b, a] = self.data.get_pixel(x, y).0;
        Ok(Color::rgba(r as i64, g as i64, b as i64, a as i64))
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: &Color) -> Result<()> {
        check_bounds(x, y, self.dimensions())?;
        self.data.put_pixel(x, y, Rgba(rgba_bytes(color)));
        Ok(())
    }

    fn clone_surface(&self) -> Box<dyn Surface> {
        Box::new(self.clone())
    }

    fn blank(&self, width: u32, height: u32) -> Box<dyn Surface> {
        Box::new(Self::new(width, height))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_native_buffer() {
        let mut native = RgbaImage::new(3, 3);
        native.put_pixel(1, 1, Rgba([9, 8, 7, 255]));
        let surface = BitmapSurface::from_image(native);

        assert_eq!(surface.dimensions(), (3, 3));
        assert_eq!(surface.pixel(1, 1).unwrap().to_array(), vec![9, 8, 7, 255]);
    }

    #[test]
    fn set_pixel_reaches_native_buffer() {
        let mut surface = BitmapSurface::new(2, 2);
        surface.set_pixel(0, 1, &Color::rgb(1, 2, 3)).unwrap();
        assert_eq!(surface.image().get_pixel(0, 1).0, [1, 2, 3, 255]);
    }
}
