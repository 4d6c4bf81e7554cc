//! Plain in-memory pixel-buffer engine.

use std::any::Any;

use super::{check_bounds, rgba_bytes, Backend, Surface};
use crate::color::Color;
use crate::error::Result;

/// A surface holding one RGBA quadruple per pixel in row-major order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterSurface {
    width: u32,
    height: u32,
    pixels: Vec<[u8; 4]>,
}

impl RasterSurface {
    /// Creates a transparent surface of the given dimensions.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![[0, 0, 0, 0]; (width * height) as usize],
        }
    }

    /// Creates a surface filled with one color.
    pub fn filled(width: u32, height: u32, color: &Color) -> Self {
        Self {
            width,
            height,
            pixels: vec![rgba_bytes(color); (width * height) as usize],
        }
    }

    fn index(&self, x: u32, y: u32) -> usize {
        (y * self.width + x) as usize
    }
}

impl Surface for RasterSurface {
    fn backend(&self) -> Backend {
        Backend::Raster
    }

    fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    fn pixel(&self, x: u32, y: u32) -> Result<Color> {
        check_bounds(x, y, self.dimensions())?;
        let [r, g, b, a] = self.pixels[self.index(x, y)];
        Ok(Color::rgba(r as i64, g as i64, b as i64, a as i64))
    }

    fn set_pixel(&mut self, x: u32, y: u32, color: &Color) -> Result<()> {
        check_bounds(x, y, self.dimensions())?;
        let index = self.index(x, y);
        self.pixels[index] = rgba_bytes(color);
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
    use crate::error::Error;

    #[test]
    fn pixel_round_trip() {
        let mut surface = RasterSurface::new(4, 4);
        let color = Color::rgba(10, 20, 30, 40);
        surface.set_pixel(2, 3, &color).unwrap();
        assert_eq!(surface.pixel(2, 3).unwrap(), color);
        assert_eq!(surface.pixel(0, 0).unwrap().to_array(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn out_of_bounds_fails() {
        let surface = RasterSurface::new(4, 4);
        assert!(matches!(
            surface.pixel(4, 0),
            Err(Error::BackendExecution(_))
        ));
    }

    #[test]
    fn filled_surface() {
        let surface = RasterSurface::filled(2, 2, &Color::rgb(255, 0, 0));
        assert_eq!(surface.pixel(1, 1).unwrap().to_array(), vec![255, 0, 0, 255]);
    }
}
