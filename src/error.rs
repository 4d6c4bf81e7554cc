//! Toolkit error taxonomy.
//!
//! All errors surface at the point of failure; nothing is retried or
//! suppressed internally. An operation either fully applies to a surface or
//! leaves it unmodified and reports one of these variants.

use crate::backend::Backend;
use crate::color::channel::ChannelKind;
use crate::color::space::Colorspace;
use crate::ops::OpKind;

/// Errors produced by the color engine and the operation dispatcher.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No decoder in the chain accepted the input. The offending raw input
    /// is preserved for diagnostics.
    #[error("unsupported color format: {0}")]
    UnsupportedColorFormat(String),

    /// A color was asked for a channel kind its colorspace does not declare.
    #[error("colorspace {space:?} declares no {kind:?} channel")]
    ChannelNotFound {
        space: Colorspace,
        kind: ChannelKind,
    },

    /// Normalized-value count does not match the colorspace arity.
    #[error("expected {expected} normalized channel values, got {got}")]
    ArityMismatch { expected: usize, got: usize },

    /// The requested operation has neither a specialized nor a generic
    /// implementation registered.
    #[error("no implementation of {op:?} registered for backend {backend:?}")]
    OperationResolution { op: OpKind, backend: Backend },

    /// A native surface call failed. Backend detail is wrapped, not
    /// swallowed.
    #[error("backend execution failed: {0}")]
    BackendExecution(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;
