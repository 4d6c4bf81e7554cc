//! Operation dispatch with backend specialization.
//!
//! Operations are plain request values ([`Modifier`], [`Encode`]) resolved
//! through a [`Dispatcher`]: a registry mapping (operation kind, backend) to
//! a specialized implementation and operation kind to a generic fallback.
//! Resolution prefers the exact specialized pair; both implementation kinds
//! share one contract, so the specialized path is an acceleration, not a
//! behavior change.
//!
//! Invocation applies the implementation to a clone of the target surface
//! and swaps on success, so a failed operation leaves the surface exactly
//! as it was.

pub mod adjust;
pub mod crop;
pub mod encode;
pub mod rectangle;

use std::collections::HashMap;

pub use rectangle::Border;

use crate::backend::{Backend, Surface};
use crate::color::Color;
use crate::error::{Error, Result};
use crate::geometry::{Anchor, Point};
use crate::image_kit::Config;

// ============================================================================
// Operation Requests
// ============================================================================

/// Identity of a logical operation, the dispatch key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OpKind {
    Crop,
    DrawRectangle,
    Greyscale,
    Brighten,
    EncodePng,
}

/// A surface-mutating operation request.
#[derive(Debug, Clone)]
pub enum Modifier {
    /// Cuts out an anchored region of the given size.
    Crop {
        width: u32,
        height: u32,
        anchor: Anchor,
    },
    /// Paints a filled rectangle, optionally stroked with a border.
    DrawRectangle {
        position: Point,
        width: u32,
        height: u32,
        background: Color,
        border: Option<Border>,
    },
    /// Replaces every pixel with its luminance.
    Greyscale,
    /// Shifts lightness by a percentage in -100..=100.
    Brighten { percent: i64 },
}

impl Modifier {
    /// The dispatch key for this request.
    pub fn kind(&self) -> OpKind {
        match self {
            Self::Crop { .. } => OpKind::Crop,
            Self::DrawRectangle { .. } => OpKind::DrawRectangle,
            Self::Greyscale => OpKind::Greyscale,
            Self::Brighten { .. } => OpKind::Brighten,
        }
    }
}

/// An encoding operation request, producing a byte buffer.
#[derive(Debug, Clone)]
pub enum Encode {
    /// PNG output; `indexed` reduces to a palette of at most 255 colors
    /// with an explicit transparency key.
    Png { indexed: bool },
}

impl Encode {
    /// The dispatch key for this request.
    pub fn kind(&self) -> OpKind {
        match self {
            Self::Png { .. } => OpKind::EncodePng,
        }
    }
}

// ============================================================================
// Dispatcher
// ============================================================================

/// A modifier implementation: consumes the working surface, returns the
/// resulting surface.
pub type ModifierFn = fn(&Modifier, Box<dyn Surface>) -> Result<Box<dyn Surface>>;

/// An encoder implementation: borrows the surface, returns encoded bytes.
pub type EncodeFn = fn(&Encode, &dyn Surface, &Config) -> Result<Vec<u8>>;

/// Strategy registry resolving operations to implementations.
pub struct Dispatcher {
    generic_modifiers: HashMap<OpKind, ModifierFn>,
    specialized_modifiers: HashMap<(OpKind, Backend), ModifierFn>,
    generic_encoders: HashMap<OpKind, EncodeFn>,
    specialized_encoders: HashMap<(OpKind, Backend), EncodeFn>,
}

impl Dispatcher {
    /// A dispatcher with no registrations.
    pub fn empty() -> Self {
        Self {
            generic_modifiers: HashMap::new(),
            specialized_modifiers: HashMap::new(),
            generic_encoders: HashMap::new(),
            specialized_encoders: HashMap::new(),
        }
    }

    /// The standard registry: every operation's generic implementation plus
    /// the shipped Bitmap specializations.
    pub fn standard() -> Self {
        let mut dispatcher = Self::empty();

        dispatcher.register_generic(OpKind::Crop, crop::generic);
        dispatcher.register_generic(OpKind::DrawRectangle, rectangle::generic);
        dispatcher.register_generic(OpKind::Greyscale, adjust::greyscale);
        dispatcher.register_generic(OpKind::Brighten, adjust::brighten);
        dispatcher.register_generic_encoder(OpKind::EncodePng, encode::png_generic);

        dispatcher.register_specialized(OpKind::Crop, Backend::Bitmap, crop::bitmap);
        dispatcher.register_specialized_encoder(
            OpKind::EncodePng,
            Backend::Bitmap,
            encode::png_bitmap,
        );

        dispatcher
    }

    /// Registers the generic fallback for a modifier kind.
    pub fn register_generic(&mut self, kind: OpKind, implementation: ModifierFn) {
        self.generic_modifiers.insert(kind, implementation);
    }

    /// Registers a backend-specialized modifier implementation.
    pub fn register_specialized(
        &mut self,
        kind: OpKind,
        backend: Backend,
        implementation: ModifierFn,
    ) {
        self.specialized_modifiers
            .insert((kind, backend), implementation);
    }

    /// Registers the generic fallback for an encoder kind.
    pub fn register_generic_encoder(&mut self, kind: OpKind, implementation: EncodeFn) {
        self.generic_encoders.insert(kind, implementation);
    }

    /// Registers a backend-specialized encoder implementation.
    pub fn register_specialized_encoder(
        &mut self,
        kind: OpKind,
        backend: Backend,
        implementation: EncodeFn,
    ) {
        self.specialized_encoders
            .insert((kind, backend), implementation);
    }

    /// Resolves a modifier: the specialized implementation for the exact
    /// (kind, backend) pair when registered, else the generic one.
    pub fn resolve_modifier(&self, kind: OpKind, backend: Backend) -> Result<ModifierFn> {
        self.specialized_modifiers
            .get(&(kind, backend))
            .or_else(|| self.generic_modifiers.get(&kind))
            .copied()
            .ok_or(Error::OperationResolution { op: kind, backend })
    }

    /// Resolves an encoder with the same specialized-else-generic order.
    pub fn resolve_encoder(&self, kind: OpKind, backend: Backend) -> Result<EncodeFn> {
        self.specialized_encoders
            .get(&(kind, backend))
            .or_else(|| self.generic_encoders.get(&kind))
            .copied()
            .ok_or(Error::OperationResolution { op: kind, backend })
    }

    /// Resolves and applies a modifier to the surface.
    ///
    /// The implementation works on a clone; the surface is only replaced on
    /// success, so a failure leaves it unmodified.
    pub fn apply(&self, op: &Modifier, surface: &mut Box<dyn Surface>) -> Result<()> {
        let implementation = self.resolve_modifier(op.kind(), surface.backend())?;
        let applied = implementation(op, surface.clone_surface())?;
        *surface = applied;
        Ok(())
    }

    /// Resolves and runs an encoder against the surface.
    pub fn encode(&self, op: &Encode, surface: &dyn Surface, config: &Config) -> Result<Vec<u8>> {
        let implementation = self.resolve_encoder(op.kind(), surface.backend())?;
        implementation(op, surface, config)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::{BitmapSurface, RasterSurface};

    // Marker implementations paint one distinguishable pixel each, so the
    // chosen code path is observable.
    fn marker_specialized(_op: &Modifier, mut surface: Box<dyn Surface>) -> Result<Box<dyn Surface>> {
        surface.set_pixel(0, 0, &Color::rgb(255, 0, 0))?;
        Ok(surface)
    }

    fn marker_generic(_op: &Modifier, mut surface: Box<dyn Surface>) -> Result<Box<dyn Surface>> {
        surface.set_pixel(0, 0, &Color::rgb(0, 0, 255))?;
        Ok(surface)
    }

    #[test]
    fn specialized_wins_for_its_backend_only() {
        let mut dispatcher = Dispatcher::empty();
        dispatcher.register_generic(OpKind::Greyscale, marker_generic);
        dispatcher.register_specialized(OpKind::Greyscale, Backend::Raster, marker_specialized);

        let mut raster: Box<dyn Surface> = Box::new(RasterSurface::new(2, 2));
        dispatcher.apply(&Modifier::Greyscale, &mut raster).unwrap();
        assert_eq!(raster.pixel(0, 0).unwrap().to_array(), vec![255, 0, 0, 255]);

        let mut bitmap: Box<dyn Surface> = Box::new(BitmapSurface::new(2, 2));
        dispatcher.apply(&Modifier::Greyscale, &mut bitmap).unwrap();
        assert_eq!(bitmap.pixel(0, 0).unwrap().to_array(), vec![0, 0, 255, 255]);
    }

    #[test]
    fn unregistered_operation_fails_resolution() {
        let dispatcher = Dispatcher::empty();
        let result = dispatcher.resolve_modifier(OpKind::Crop, Backend::Raster);
        assert!(matches!(
            result,
            Err(Error::OperationResolution {
                op: OpKind::Crop,
                backend: Backend::Raster,
            })
        ));
    }

    #[test]
    fn failed_modifier_leaves_surface_unchanged() {
        fn failing(_op: &Modifier, mut surface: Box<dyn Surface>) -> Result<Box<dyn Surface>> {
            // Mutates the working clone, then fails.
            surface.set_pixel(0, 0, &Color::rgb(9, 9, 9))?;
            Err(Error::BackendExecution("deliberate".into()))
        }

        let mut dispatcher = Dispatcher::empty();
        dispatcher.register_generic(OpKind::Greyscale, failing);

        let mut surface: Box<dyn Surface> = Box::new(RasterSurface::new(2, 2));
        assert!(dispatcher.apply(&Modifier::Greyscale, &mut surface).is_err());
        assert_eq!(surface.pixel(0, 0).unwrap().to_array(), vec![0, 0, 0, 0]);
    }

    #[test]
    fn standard_registry_resolves_all_kinds() {
        let dispatcher = Dispatcher::standard();
        for backend in [Backend::Raster, Backend::Bitmap] {
            for kind in [
                OpKind::Crop,
                OpKind::DrawRectangle,
                OpKind::Greyscale,
                OpKind::Brighten,
            ] {
                assert!(dispatcher.resolve_modifier(kind, backend).is_ok());
            }
            assert!(dispatcher.resolve_encoder(OpKind::EncodePng, backend).is_ok());
        }
    }
}
