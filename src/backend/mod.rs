//! Native surface boundary.
//!
//! A [`Surface`] is an opaque, exclusively-owned drawable handle. The core
//! never assumes a pixel byte layout; everything a generic operation needs
//! is expressed through this trait. Backend-specialized operations may
//! downcast to a concrete surface type to reach native acceleration.
//!
//! Two engines ship with the crate: [`RasterSurface`], a plain in-memory
//! pixel buffer, and [`BitmapSurface`], backed by `image::RgbaImage`.

pub mod bitmap;
pub mod raster;

use std::any::Any;

pub use bitmap::BitmapSurface;
pub use raster::RasterSurface;

use crate::color::{Color, Colorspace};
use crate::error::{Error, Result};

/// Identity of a pixel-processing backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    /// The plain in-memory pixel-buffer engine.
    Raster,
    /// The `image`-crate backed engine.
    Bitmap,
}

/// An opaque drawable backend image.
///
/// Surfaces are mutable, exclusively-owned resources: callers serialize
/// access or clone before parallel use. Operations borrow a surface for the
/// duration of one call and never retain it.
pub trait Surface: Any {
    /// The backend that owns this surface.
    fn backend(&self) -> Backend;

    /// Width and height in pixels.
    fn dimensions(&self) -> (u32, u32);

    /// Reads the pixel at (x, y) as a canonical RGB color.
    fn pixel(&self, x: u32, y: u32) -> Result<Color>;

    /// Writes a pixel at (x, y). The color is brought into the surface's
    /// working colorspace (RGB) first.
    fn set_pixel(&mut self, x: u32, y: u32, color: &Color) -> Result<()>;

    /// A deep copy of this surface.
    fn clone_surface(&self) -> Box<dyn Surface>;

    /// A blank surface of the same backend with the given dimensions,
    /// filled with transparent black.
    fn blank(&self, width: u32, height: u32) -> Box<dyn Surface>;

    /// A blank surface with this surface's dimensions.
    fn clone_empty(&self) -> Box<dyn Surface> {
        let (width, height) = self.dimensions();
        self.blank(width, height)
    }

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Flattens a color into RGBA bytes for storage, converting into the
/// working colorspace first.
pub(crate) fn rgba_bytes(color: &Color) -> [u8; 4] {
    let rgb = color.convert_to(Colorspace::Rgb);
    let values = rgb.to_array();
    [
        values[0] as u8,
        values[1] as u8,
        values[2] as u8,
        values[3] as u8,
    ]
}

/// Bounds check shared by both engines.
pub(crate) fn check_bounds(x: u32, y: u32, dimensions: (u32, u32)) -> Result<()> {
    let (width, height) = dimensions;
    if x >= width || y >= height {
        return Err(Error::BackendExecution(format!(
            "pixel ({x}, {y}) outside {width}x{height} surface"
        )));
    }
    Ok(())
}
