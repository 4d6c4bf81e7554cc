//! pigmenta: backend-agnostic image manipulation toolkit
//!
//! This crate presents one uniform API over interchangeable pixel-processing
//! backends: a plain in-memory raster engine and an `image`-crate backed
//! bitmap engine. Every operation has a backend-neutral generic
//! implementation; backends may register specialized overrides that are
//! selected transparently at call time with observably equivalent results.
//!
//! # Example
//!
//! ```
//! use pigmenta::{
//!     Anchor, BitmapSurface, Color, Colorspace, Encode, Image, Modifier, Point,
//! };
//!
//! // Decode heterogeneous color input into canonical RGB colors.
//! let background = Color::decode("cornflowerblue").unwrap();
//! assert_eq!(background.to_hex("#"), "#6495ed");
//! assert_eq!(
//!     background.convert_to(Colorspace::Cmyk).to_string(),
//!     "cmyk(54, 35, 0, 7)"
//! );
//!
//! // Operations resolve to the bitmap-specialized implementation where one
//! // is registered, and fall back to the generic one elsewhere.
//! let mut image = Image::new(Box::new(BitmapSurface::new(64, 64)));
//! image
//!     .modify(&Modifier::DrawRectangle {
//!         position: Point::new(8, 8),
//!         width: 48,
//!         height: 48,
//!         background,
//!         border: None,
//!     })
//!     .unwrap()
//!     .modify(&Modifier::Crop {
//!         width: 32,
//!         height: 32,
//!         anchor: Anchor::Center,
//!     })
//!     .unwrap();
//!
//! let png = image.encode(&Encode::Png { indexed: false }).unwrap();
//! assert!(!png.is_empty());
//! ```

mod backend;
mod color;
mod error;
mod geometry;
mod image_kit;
mod ops;

pub use backend::{Backend, BitmapSurface, RasterSurface, Surface};
pub use color::{Channel, ChannelKind, Color, ColorInput, Colorspace};
pub use error::{Error, Result};
pub use geometry::{Anchor, Point};
pub use image_kit::{Config, Image};
pub use ops::{Border, Dispatcher, Encode, EncodeFn, Modifier, ModifierFn, OpKind};
