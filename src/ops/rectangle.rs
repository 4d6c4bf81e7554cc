//! Filled-rectangle drawing.

use super::Modifier;
use crate::backend::Surface;
use crate::color::{Color, Colorspace};
use crate::error::{Error, Result};

/// Border stroke for a drawn rectangle, painted just inside its bounds.
#[derive(Debug, Clone)]
pub struct Border {
    pub color: Color,
    pub thickness: u32,
}

impl Border {
    /// Creates a border from any decoder-accepted color.
    pub fn new(color: Color, thickness: u32) -> Self {
        Self { color, thickness }
    }
}

/// Generic rectangle draw: validates bounds up front, then paints the fill
/// and the optional border through pixel writes.
///
/// A rectangle that does not fully fit the surface fails before any pixel
/// is touched.
pub(crate) fn generic(op: &Modifier, mut surface: Box<dyn Surface>) -> Result<Box<dyn Surface>> {
    let Modifier::DrawRectangle {
        position,
        width,
        height,
        background,
        border,
    } = op
    else {
        unreachable!("registered for OpKind::DrawRectangle");
    };

    let (surface_width, surface_height) = surface.dimensions();
    let (width, height) = (*width, *height);
    if position.x < 0
        || position.y < 0
        || position.x + width as i64 > surface_width as i64
        || position.y + height as i64 > surface_height as i64
    {
        return Err(Error::BackendExecution(format!(
            "rectangle {width}x{height} at ({}, {}) outside {surface_width}x{surface_height} surface",
            position.x, position.y
        )));
    }

    let x0 = position.x as u32;
    let y0 = position.y as u32;

    // Colors enter the surface's working colorspace once, not per pixel.
    let background = background.convert_to(Colorspace::Rgb);
    for y in y0..y0 + height {
        for x in x0..x0 + width {
            surface.set_pixel(x, y, &background)?;
        }
    }

    if let Some(border) = border {
        let stroke = border.color.convert_to(Colorspace::Rgb);
        let thickness = border.thickness.min(width / 2 + 1).min(height / 2 + 1);
        for y in y0..y0 + height {
            for x in x0..x0 + width {
                let edge_distance = (x - x0)
                    .min(y - y0)
                    .min(x0 + width - 1 - x)
                    .min(y0 + height - 1 - y);
                if edge_distance < thickness {
                    surface.set_pixel(x, y, &stroke)?;
                }
            }
        }
    }

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RasterSurface;
    use crate::geometry::Point;
    use crate::image_kit::Image;
    use crate::ops::Modifier;

    #[test]
    fn fills_region() {
        let mut image = Image::new(Box::new(RasterSurface::new(8, 8)));
        image
            .modify(&Modifier::DrawRectangle {
                position: Point::new(2, 2),
                width: 4,
                height: 4,
                background: Color::rgb(0, 255, 0),
                border: None,
            })
            .unwrap();

        assert_eq!(image.pick_color(2, 2).unwrap().to_array(), vec![0, 255, 0, 255]);
        assert_eq!(image.pick_color(5, 5).unwrap().to_array(), vec![0, 255, 0, 255]);
        // Outside the rectangle stays untouched.
        assert_eq!(image.pick_color(1, 1).unwrap().to_array(), vec![0, 0, 0, 0]);
        assert_eq!(image.pick_color(6, 6).unwrap().to_array(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn border_strokes_inside_edges() {
        let mut image = Image::new(Box::new(RasterSurface::new(8, 8)));
        image
            .modify(&Modifier::DrawRectangle {
                position: Point::new(1, 1),
                width: 6,
                height: 6,
                background: Color::rgb(0, 255, 0),
                border: Some(Border::new(Color::rgb(255, 0, 0), 1)),
            })
            .unwrap();

        // Edge pixels carry the border color, interior the fill.
        assert_eq!(image.pick_color(1, 1).unwrap().to_array(), vec![255, 0, 0, 255]);
        assert_eq!(image.pick_color(6, 3).unwrap().to_array(), vec![255, 0, 0, 255]);
        assert_eq!(image.pick_color(3, 3).unwrap().to_array(), vec![0, 255, 0, 255]);
    }

    #[test]
    fn cmyk_background_painted_as_rgb() {
        let mut image = Image::new(Box::new(RasterSurface::new(4, 4)));
        image
            .modify(&Modifier::DrawRectangle {
                position: Point::new(0, 0),
                width: 4,
                height: 4,
                background: Color::cmyk(0, 100, 100, 0),
                border: None,
            })
            .unwrap();
        assert_eq!(image.pick_color(0, 0).unwrap().to_array(), vec![255, 0, 0, 255]);
    }

    #[test]
    fn out_of_bounds_rectangle_leaves_surface_unchanged() {
        let mut image = Image::new(Box::new(RasterSurface::new(4, 4)));
        let result = image.modify(&Modifier::DrawRectangle {
            position: Point::new(2, 2),
            width: 4,
            height: 4,
            background: Color::rgb(255, 0, 0),
            border: None,
        });

        assert!(result.is_err());
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(image.pick_color(x, y).unwrap().to_array(), vec![0, 0, 0, 0]);
            }
        }
    }
}
