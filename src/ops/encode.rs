//! PNG encoding: generic RGBA output and indexed-palette reduction.
//!
//! The indexed path mirrors the transparency-key technique of palette
//! formats: a blending color is allocated with a slightly different alpha
//! value than fully opaque source pixels, the output is filled with it, the
//! source is composited on top, and the exact blending color becomes the
//! palette's transparent entry. A fully opaque source pixel can therefore
//! never collide with the key.

use std::collections::HashMap;

use image::codecs::png::PngEncoder;
use image::{ImageEncoder, Rgba, RgbaImage};

use super::Encode;
use crate::backend::{rgba_bytes, BitmapSurface, Surface};
use crate::color::Color;
use crate::error::{Error, Result};
use crate::image_kit::Config;

/// Palette capacity for indexed output; one slot is reserved for the
/// transparency key.
const PALETTE_LIMIT: usize = 255;

/// Alpha assigned to the blending color so it differs from every fully
/// opaque source pixel.
const KEY_ALPHA: u8 = 254;

/// Generic PNG encoder: reads pixels through the surface trait.
pub(crate) fn png_generic(op: &Encode, surface: &dyn Surface, config: &Config) -> Result<Vec<u8>> {
    let &Encode::Png { indexed } = op;

    let (width, height) = surface.dimensions();
    let mut rgba = RgbaImage::new(width, height);
    for y in 0..height {
        for x in 0..width {
            let color = surface.pixel(x, y)?;
            rgba.put_pixel(x, y, Rgba(rgba_bytes(&color)));
        }
    }

    encode_rgba(&rgba, indexed, config)
}

/// Bitmap-specialized PNG encoder: reaches the native buffer directly
/// instead of copying pixel by pixel.
pub(crate) fn png_bitmap(op: &Encode, surface: &dyn Surface, config: &Config) -> Result<Vec<u8>> {
    let &Encode::Png { indexed } = op;

    let bitmap = surface
        .as_any()
        .downcast_ref::<BitmapSurface>()
        .ok_or_else(|| {
            Error::BackendExecution("png specialization requires a bitmap surface".into())
        })?;

    encode_rgba(bitmap.image(), indexed, config)
}

fn encode_rgba(rgba: &RgbaImage, indexed: bool, config: &Config) -> Result<Vec<u8>> {
    if indexed {
        encode_indexed(rgba, &config.blending_color)
    } else {
        let mut out = Vec::new();
        PngEncoder::new(&mut out)
            .write_image(
                rgba.as_raw(),
                rgba.width(),
                rgba.height(),
                image::ExtendedColorType::Rgba8,
            )
            .map_err(|e| Error::BackendExecution(format!("png encode failed: {e}")))?;
        Ok(out)
    }
}

/// Indexed-palette output with an explicit transparency key.
fn encode_indexed(rgba: &RgbaImage, blending: &Color) -> Result<Vec<u8>> {
    let [key_r, key_g, key_b, _] = rgba_bytes(blending);
    let key = [key_r, key_g, key_b, KEY_ALPHA];

    // Fill with the key, composite the source over it.
    let mut flattened = RgbaImage::from_pixel(rgba.width(), rgba.height(), Rgba(key));
    for (x, y, pixel) in rgba.enumerate_pixels() {
        let blended = composite_over(pixel.0, key);
        flattened.put_pixel(x, y, Rgba(blended));
    }

    // The key is palette entry zero; everything else quantizes behind it.
    let mut palette: Vec<[u8; 4]> = vec![key];
    let mut lookup: HashMap<[u8; 4], u8> = HashMap::from([(key, 0u8)]);
    let mut indices = Vec::with_capacity((rgba.width() * rgba.height()) as usize);

    for pixel in flattened.pixels() {
        let index = match lookup.get(&pixel.0) {
            Some(&index) => index,
            None if palette.len() < PALETTE_LIMIT => {
                let index = palette.len() as u8;
                palette.push(pixel.0);
                lookup.insert(pixel.0, index);
                index
            }
            // Palette exhausted: nearest existing entry, never the key.
            None => nearest_entry(&palette, pixel.0),
        };
        indices.push(index);
    }

    let mut plte = Vec::with_capacity(palette.len() * 3);
    let mut trns = Vec::with_capacity(palette.len());
    for (i, entry) in palette.iter().enumerate() {
        plte.extend_from_slice(&entry[..3]);
        trns.push(if i == 0 { 0 } else { entry[3] });
    }

    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, rgba.width(), rgba.height());
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(plte);
        encoder.set_trns(trns);
        let mut writer = encoder
            .write_header()
            .map_err(|e| Error::BackendExecution(format!("png header failed: {e}")))?;
        writer
            .write_image_data(&indices)
            .map_err(|e| Error::BackendExecution(format!("png encode failed: {e}")))?;
    }

    Ok(out)
}

/// Source-over compositing of straight-alpha RGBA bytes.
fn composite_over(source: [u8; 4], dest: [u8; 4]) -> [u8; 4] {
    let sa = source[3] as f32 / 255.0;
    if sa <= 0.0 {
        return dest;
    }
    let da = dest[3] as f32 / 255.0;
    let out_a = sa + da * (1.0 - sa);

    let blend = |s: u8, d: u8| -> u8 {
        let s = s as f32 / 255.0;
        let d = d as f32 / 255.0;
        (((s * sa + d * da * (1.0 - sa)) / out_a) * 255.0).round() as u8
    };

    [
        blend(source[0], dest[0]),
        blend(source[1], dest[1]),
        blend(source[2], dest[2]),
        (out_a * 255.0).round() as u8,
    ]
}

/// Closest palette entry by squared RGBA distance, skipping the reserved
/// transparency key.
fn nearest_entry(palette: &[[u8; 4]], pixel: [u8; 4]) -> u8 {
    let mut best = 1u8;
    let mut best_distance = u32::MAX;
    for (i, entry) in palette.iter().enumerate().skip(1) {
        let distance: u32 = entry
            .iter()
            .zip(pixel.iter())
            .map(|(&a, &b)| {
                let d = a as i32 - b as i32;
                (d * d) as u32
            })
            .sum();
        if distance < best_distance {
            best_distance = distance;
            best = i as u8;
        }
    }
    best
}
