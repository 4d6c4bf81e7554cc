//! The user-facing image handle.
//!
//! An [`Image`] owns an ordered list of frame surfaces and routes every
//! operation through its [`Dispatcher`]. Multi-frame images apply a
//! modifier to each frame in sequence, never in parallel, so frame order is
//! preserved and at most one extra surface buffer is in flight.

use serde::{Deserialize, Serialize};

use crate::backend::Surface;
use crate::color::Color;
use crate::error::Result;
use crate::ops::{Dispatcher, Encode, Modifier};

// ============================================================================
// Config
// ============================================================================

/// Toolkit configuration.
///
/// The blending color is consumed only by indexed-palette encoding, where it
/// becomes the background the source is composited over and the basis of the
/// transparency key.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Blending/background color for indexed output.
    pub blending_color: Color,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            blending_color: Color::rgb(255, 255, 255),
        }
    }
}

impl Config {
    /// Builds a config with a blending color decoded from any supported
    /// color description.
    pub fn with_blending_color(input: impl Into<crate::color::ColorInput>) -> Result<Self> {
        Ok(Self {
            blending_color: Color::decode(input)?,
        })
    }
}

// ============================================================================
// Image
// ============================================================================

/// An image: one or more frame surfaces plus the dispatcher and config the
/// operations run under.
pub struct Image {
    frames: Vec<Box<dyn Surface>>,
    dispatcher: Dispatcher,
    config: Config,
}

impl Image {
    /// Creates a single-frame image with the standard dispatcher and
    /// default config.
    pub fn new(surface: Box<dyn Surface>) -> Self {
        Self::from_frames(vec![surface])
    }

    /// Creates a multi-frame image. Frames are kept and processed in order.
    pub fn from_frames(frames: Vec<Box<dyn Surface>>) -> Self {
        Self {
            frames,
            dispatcher: Dispatcher::standard(),
            config: Config::default(),
        }
    }

    /// Replaces the toolkit configuration.
    pub fn set_config(&mut self, config: Config) -> &mut Self {
        self.config = config;
        self
    }

    /// The current configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The dispatcher, for registering additional implementations.
    pub fn dispatcher_mut(&mut self) -> &mut Dispatcher {
        &mut self.dispatcher
    }

    /// The frame surfaces in order.
    pub fn frames(&self) -> &[Box<dyn Surface>] {
        &self.frames
    }

    /// Number of frames.
    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Dimensions of the first frame.
    pub fn dimensions(&self) -> (u32, u32) {
        self.frames[0].dimensions()
    }

    /// Applies a modifier to every frame in sequence.
    ///
    /// Each frame either fully applies or is left unmodified; a failure
    /// surfaces immediately and later frames are not touched.
    pub fn modify(&mut self, op: &Modifier) -> Result<&mut Self> {
        for frame in self.frames.iter_mut() {
            self.dispatcher.apply(op, frame)?;
        }
        Ok(self)
    }

    /// Encodes the first frame.
    pub fn encode(&self, op: &Encode) -> Result<Vec<u8>> {
        self.dispatcher
            .encode(op, self.frames[0].as_ref(), &self.config)
    }

    /// Reads a pixel of the first frame.
    pub fn pick_color(&self, x: u32, y: u32) -> Result<Color> {
        self.frames[0].pixel(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::RasterSurface;
    use crate::geometry::Anchor;

    #[test]
    fn modify_applies_to_all_frames() {
        let frames: Vec<Box<dyn Surface>> = vec![
            Box::new(RasterSurface::filled(4, 4, &Color::rgb(10, 20, 30))),
            Box::new(RasterSurface::filled(4, 4, &Color::rgb(40, 50, 60))),
        ];
        let mut image = Image::from_frames(frames);
        image
            .modify(&Modifier::Crop {
                width: 2,
                height: 2,
                anchor: Anchor::TopLeft,
            })
            .unwrap();

        assert_eq!(image.frame_count(), 2);
        for frame in image.frames() {
            assert_eq!(frame.dimensions(), (2, 2));
        }
    }

    #[test]
    fn modifier_chaining() {
        let mut image = Image::new(Box::new(RasterSurface::filled(
            8,
            8,
            &Color::rgb(200, 100, 50),
        )));
        image
            .modify(&Modifier::Greyscale)
            .unwrap()
            .modify(&Modifier::Crop {
                width: 4,
                height: 4,
                anchor: Anchor::Center,
            })
            .unwrap();

        assert_eq!(image.dimensions(), (4, 4));
        assert!(image.pick_color(0, 0).unwrap().is_greyscale());
    }

    #[test]
    fn config_blending_color_decoded() {
        let config = Config::with_blending_color("#ff8800").unwrap();
        assert_eq!(config.blending_color.to_array(), vec![255, 136, 0, 255]);
    }

    #[test]
    fn config_serde_round_trip() {
        let config = Config::with_blending_color("salmon").unwrap();
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(json, "{\"blendingColor\":\"#fa8072\"}");

        let restored: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.blending_color, config.blending_color);
    }
}
