//! Per-pixel color adjustments: greyscale and brighten.

use palette::{Hsl, IntoColor, Srgb};

use super::Modifier;
use crate::backend::Surface;
use crate::color::Color;
use crate::error::Result;

/// Generic greyscale: replaces each pixel with its ITU-R BT.601 luminance,
/// preserving alpha.
pub(crate) fn greyscale(op: &Modifier, mut surface: Box<dyn Surface>) -> Result<Box<dyn Surface>> {
    let Modifier::Greyscale = op else {
        unreachable!("registered for OpKind::Greyscale");
    };

    let (width, height) = surface.dimensions();
    for y in 0..height {
        for x in 0..width {
            let values = surface.pixel(x, y)?.to_array();
            let (r, g, b, a) = (values[0], values[1], values[2], values[3]);
            let luminance =
                (0.299 * r as f64 + 0.587 * g as f64 + 0.114 * b as f64).round() as i64;
            surface.set_pixel(x, y, &Color::rgba(luminance, luminance, luminance, a))?;
        }
    }

    Ok(surface)
}

/// Generic brighten: shifts each pixel's HSL lightness by `percent / 100`,
/// preserving alpha. Fully transparent pixels are skipped.
pub(crate) fn brighten(op: &Modifier, mut surface: Box<dyn Surface>) -> Result<Box<dyn Surface>> {
    let &Modifier::Brighten { percent } = op else {
        unreachable!("registered for OpKind::Brighten");
    };

    let shift = (percent.clamp(-100, 100) as f32) / 100.0;
    let (width, height) = surface.dimensions();
    for y in 0..height {
        for x in 0..width {
            let values = surface.pixel(x, y)?.to_array();
            let (r, g, b, a) = (values[0], values[1], values[2], values[3]);
            if a == 0 {
                continue;
            }

            let rgb = Srgb::new(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0);
            let mut hsl: Hsl = rgb.into_color();
            hsl.lightness = (hsl.lightness + shift).clamp(0.0, 1.0);
            let shifted: Srgb = hsl.into_color();

            surface.set_pixel(
                x,
                y,
                &Color::rgba(
                    (shifted.red * 255.0).round() as i64,
                    (shifted.green * 255.0).round() as i64,
                    (shifted.blue * 255.0).round() as i64,
                    a,
                ),
            )?;
        }
    }

    Ok(surface)
}
