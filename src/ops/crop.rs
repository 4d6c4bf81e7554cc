//! Crop operation: generic pixel copy and the Bitmap specialization.

use image::imageops;

use super::Modifier;
use crate::backend::{BitmapSurface, Surface};
use crate::error::{Error, Result};
use crate::geometry::Anchor;

/// Resolves the crop window against the surface, clamping oversized
/// requests to the surface bounds.
fn window(surface: &dyn Surface, width: u32, height: u32, anchor: Anchor) -> (u32, u32, u32, u32) {
    let (source_width, source_height) = surface.dimensions();
    let width = width.min(source_width);
    let height = height.min(source_height);
    let (x, y) = anchor.resolve((source_width, source_height), (width, height));
    (x, y, width, height)
}

/// Generic crop: copies the anchored region into a blank surface of the
/// target size, one pixel at a time.
pub(crate) fn generic(op: &Modifier, surface: Box<dyn Surface>) -> Result<Box<dyn Surface>> {
    let &Modifier::Crop {
        width,
        height,
        anchor,
    } = op
    else {
        unreachable!("registered for OpKind::Crop");
    };

    let (x, y, width, height) = window(surface.as_ref(), width, height, anchor);
    let mut target = surface.blank(width, height);

    for row in 0..height {
        for column in 0..width {
            let color = surface.pixel(x + column, y + row)?;
            target.set_pixel(column, row, &color)?;
        }
    }

    Ok(target)
}

/// Bitmap-specialized crop through `image::imageops::crop_imm`.
pub(crate) fn bitmap(op: &Modifier, surface: Box<dyn Surface>) -> Result<Box<dyn Surface>> {
    let &Modifier::Crop {
        width,
        height,
        anchor,
    } = op
    else {
        unreachable!("registered for OpKind::Crop");
    };

    let (x, y, width, height) = window(surface.as_ref(), width, height, anchor);
    let bitmap = surface
        .as_any()
        .downcast_ref::<BitmapSurface>()
        .ok_or_else(|| {
            Error::BackendExecution("crop specialization requires a bitmap surface".into())
        })?;

    let cropped = imageops::crop_imm(bitmap.image(), x, y, width, height).to_image();
    Ok(Box::new(BitmapSurface::from_image(cropped)))
}
