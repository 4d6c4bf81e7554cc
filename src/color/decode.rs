//! Input decoding chain for heterogeneous color descriptions.
//!
//! Decoders are pure functions tried in a fixed priority order; each either
//! accepts the input and produces a canonical RGB color or declines, in
//! which case the chain moves on. Exhausting the chain surfaces the raw
//! input in an [`Error::UnsupportedColorFormat`].

use std::fmt;

use super::Color;
use crate::error::{Error, Result};

/// An arbitrary user-supplied color description.
#[derive(Debug, Clone, PartialEq)]
pub enum ColorInput {
    /// A textual form: hex, `rgb()`/`rgba()`, the `transparent` literal, or
    /// a standard color name.
    Text(String),
    /// Positional channel components, `[r, g, b]` or `[r, g, b, a]`.
    Components(Vec<i64>),
}

impl fmt::Display for ColorInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => write!(f, "{text:?}"),
            Self::Components(values) => write!(f, "{values:?}"),
        }
    }
}

impl From<&str> for ColorInput {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for ColorInput {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<[u8; 3]> for ColorInput {
    fn from(values: [u8; 3]) -> Self {
        Self::Components(values.iter().map(|&v| v as i64).collect())
    }
}

impl From<[u8; 4]> for ColorInput {
    fn from(values: [u8; 4]) -> Self {
        Self::Components(values.iter().map(|&v| v as i64).collect())
    }
}

impl From<Vec<i64>> for ColorInput {
    fn from(values: Vec<i64>) -> Self {
        Self::Components(values)
    }
}

/// Outcome of a single decoder: accept with a color, or pass to the next.
enum Decode {
    Accepted(Color),
    Declined,
}

type Decoder = fn(&ColorInput) -> Decode;

/// The canonical decoder chain in priority order.
const DECODERS: &[Decoder] = &[hex, rgb_function, transparent, named, components];

/// Runs the decoder chain over `input`; first acceptance wins.
pub fn decode(input: &ColorInput) -> Result<Color> {
    for decoder in DECODERS {
        if let Decode::Accepted(color) = decoder(input) {
            return Ok(color);
        }
    }

    Err(Error::UnsupportedColorFormat(input.to_string()))
}

/// Hex strings with optional `#` prefix: 3- and 4-digit shorthand expands by
/// doubling each nibble; 6 digits are opaque, 8 carry alpha. Other lengths
/// decline.
fn hex(input: &ColorInput) -> Decode {
    let ColorInput::Text(text) = input else {
        return Decode::Declined;
    };

    let digits = text.trim().strip_prefix('#').unwrap_or(text.trim());
    let Some(nibbles) = digits
        .bytes()
        .map(nibble)
        .collect::<Option<Vec<u8>>>()
    else {
        return Decode::Declined;
    };

    let (r, g, b, a) = match nibbles.as_slice() {
        &[r, g, b] => (r * 17, g * 17, b * 17, 255),
        &[r, g, b, a] => (r * 17, g * 17, b * 17, a * 17),
        &[r1, r0, g1, g0, b1, b0] => (r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, 255),
        &[r1, r0, g1, g0, b1, b0, a1, a0] => {
            (r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0, a1 << 4 | a0)
        }
        _ => return Decode::Declined,
    };

    Decode::Accepted(Color::rgba(r as i64, g as i64, b as i64, a as i64))
}

fn nibble(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

/// CSS-like `rgb(r, g, b)` and `rgba(r, g, b, a)` textual forms. Alpha is a
/// float in [0, 1] mapped into the integer domain via `round(a * 255)`.
fn rgb_function(input: &ColorInput) -> Decode {
    let ColorInput::Text(text) = input else {
        return Decode::Declined;
    };

    let lower = text.trim().to_ascii_lowercase();
    let args = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))
        .and_then(|rest| rest.strip_suffix(')'));
    let Some(args) = args else {
        return Decode::Declined;
    };

    let parts: Vec<&str> = args.split(',').map(str::trim).collect();
    let parse_int = |part: &str| part.parse::<i64>().ok();

    match parts.as_slice() {
        [r, g, b] => {
            let (Some(r), Some(g), Some(b)) = (parse_int(r), parse_int(g), parse_int(b)) else {
                return Decode::Declined;
            };
            Decode::Accepted(Color::rgb(r, g, b))
        }
        [r, g, b, a] => {
            let (Some(r), Some(g), Some(b), Ok(a)) =
                (parse_int(r), parse_int(g), parse_int(b), a.parse::<f64>())
            else {
                return Decode::Declined;
            };
            Decode::Accepted(Color::rgba(r, g, b, (a * 255.0).round() as i64))
        }
        _ => Decode::Declined,
    }
}

/// The literal `transparent` token, case-insensitive.
fn transparent(input: &ColorInput) -> Decode {
    let ColorInput::Text(text) = input else {
        return Decode::Declined;
    };

    if text.trim().eq_ignore_ascii_case("transparent") {
        Decode::Accepted(Color::rgba(0, 0, 0, 0))
    } else {
        Decode::Declined
    }
}

/// Standard color names from the fixed table.
fn named(input: &ColorInput) -> Decode {
    let ColorInput::Text(text) = input else {
        return Decode::Declined;
    };

    match super::names::lookup(&text.trim().to_ascii_lowercase()) {
        Some([r, g, b]) => Decode::Accepted(Color::rgb(r as i64, g as i64, b as i64)),
        None => Decode::Declined,
    }
}

/// Positional component arrays, three or four values.
fn components(input: &ColorInput) -> Decode {
    let ColorInput::Components(values) = input else {
        return Decode::Declined;
    };

    match values.as_slice() {
        &[r, g, b] => Decode::Accepted(Color::rgb(r, g, b)),
        &[r, g, b, a] => Decode::Accepted(Color::rgba(r, g, b, a)),
        _ => Decode::Declined,
    }
}
