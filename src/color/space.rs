//! Colorspace policy objects and conversion rules.
//!
//! A [`Colorspace`] declares which channel kinds compose a color in that
//! space and knows how to convert colors from other spaces into it.
//! Conversion dispatches on the source color's space; when no rule exists
//! for a source, the color is returned unchanged (identity is the default,
//! not an error).

use super::channel::{Channel, ChannelKind};
use super::Color;
use crate::error::{Error, Result};

/// A color space, defined by its ordered channel declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Colorspace {
    /// Red, green, blue, alpha; each 0..=255.
    Rgb,
    /// Cyan, magenta, yellow, key; each 0..=100. Carries no alpha channel.
    Cmyk,
}

impl Colorspace {
    /// The ordered channel kinds composing a color in this space.
    pub fn channel_kinds(self) -> &'static [ChannelKind] {
        match self {
            Self::Rgb => &[
                ChannelKind::Red,
                ChannelKind::Green,
                ChannelKind::Blue,
                ChannelKind::Alpha,
            ],
            Self::Cmyk => &[
                ChannelKind::Cyan,
                ChannelKind::Magenta,
                ChannelKind::Yellow,
                ChannelKind::Key,
            ],
        }
    }

    /// Number of channels a color in this space carries.
    pub fn arity(self) -> usize {
        self.channel_kinds().len()
    }

    /// Constructs a color from normalized [0, 1] channel values, one per
    /// declared kind in positional order.
    pub fn color_from_normalized(self, values: &[f64]) -> Result<Color> {
        let kinds = self.channel_kinds();
        if values.len() != kinds.len() {
            return Err(Error::ArityMismatch {
                expected: kinds.len(),
                got: values.len(),
            });
        }

        let channels = kinds
            .iter()
            .zip(values)
            .map(|(&kind, &value)| Channel::from_normalized(kind, value))
            .collect();

        Ok(Color::from_channels(self, channels))
    }

    /// Converts `color` into this space.
    ///
    /// Same-space conversion returns the color unchanged, as does any source
    /// space with no registered rule.
    pub fn convert(self, color: &Color) -> Color {
        match (color.colorspace(), self) {
            (source, target) if source == target => color.clone(),
            (Colorspace::Rgb, Colorspace::Cmyk) => rgb_to_cmyk(color),
            (Colorspace::Cmyk, Colorspace::Rgb) => cmyk_to_rgb(color),
            // No conversion rule registered: identity.
            _ => color.clone(),
        }
    }
}

/// RGB to CMYK. Intermediate floats are rounded half-away-from-zero before
/// the key subtraction; alpha is dropped.
fn rgb_to_cmyk(color: &Color) -> Color {
    let values = color.to_array();
    let &[r, g, b, _a] = values.as_slice() else {
        // All channels present by construction.
        return color.clone();
    };

    let c_raw = (255 - r) as f64 / 255.0 * 100.0;
    let m_raw = (255 - g) as f64 / 255.0 * 100.0;
    let y_raw = (255 - b) as f64 / 255.0 * 100.0;
    let k = c_raw.min(m_raw).min(y_raw).round() as i64;

    Color::cmyk(
        c_raw.round() as i64 - k,
        m_raw.round() as i64 - k,
        y_raw.round() as i64 - k,
        k,
    )
}

/// CMYK to RGB, the additive inverse of [`rgb_to_cmyk`]. The result is fully
/// opaque; round-trips 8-bit RGB within one unit per channel.
fn cmyk_to_rgb(color: &Color) -> Color {
    let values = color.to_array();
    let &[c, m, y, k] = values.as_slice() else {
        // All channels present by construction.
        return color.clone();
    };

    let component = |chan: i64| -> i64 {
        (255.0 * (1.0 - (chan + k) as f64 / 100.0))
            .round()
            .clamp(0.0, 255.0) as i64
    };

    Color::rgb(component(c), component(m), component(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_mismatch() {
        let result = Colorspace::Rgb.color_from_normalized(&[1.0, 0.5]);
        assert!(matches!(
            result,
            Err(Error::ArityMismatch { expected: 4, got: 2 })
        ));
    }

    #[test]
    fn from_normalized_positional() {
        let color = Colorspace::Rgb
            .color_from_normalized(&[1.0, 0.0, 0.5, 1.0])
            .unwrap();
        assert_eq!(color.to_array(), vec![255, 0, 128, 255]);

        let color = Colorspace::Cmyk
            .color_from_normalized(&[0.0, 1.0, 1.0, 0.0])
            .unwrap();
        assert_eq!(color.to_array(), vec![0, 100, 100, 0]);
    }

    #[test]
    fn rgb_to_cmyk_known_vectors() {
        assert_eq!(
            Color::rgb(255, 0, 0).convert_to(Colorspace::Cmyk).to_array(),
            vec![0, 100, 100, 0]
        );
        assert_eq!(
            Color::rgb(0, 0, 0).convert_to(Colorspace::Cmyk).to_array(),
            vec![0, 0, 0, 100]
        );
        assert_eq!(
            Color::rgb(255, 255, 255)
                .convert_to(Colorspace::Cmyk)
                .to_array(),
            vec![0, 0, 0, 0]
        );
    }

    #[test]
    fn cmyk_round_trip_within_tolerance() {
        for r in (0..=255).step_by(17) {
            for g in (0..=255).step_by(51) {
                for b in (0..=255).step_by(51) {
                    let original = Color::rgb(r, g, b);
                    let back = original
                        .convert_to(Colorspace::Cmyk)
                        .convert_to(Colorspace::Rgb);
                    let original = original.to_array();
                    let back = back.to_array();
                    for i in 0..3 {
                        assert!(
                            (original[i] - back[i]).abs() <= 1,
                            "channel {i} of ({r}, {g}, {b}) round-tripped to {}",
                            back[i]
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn cmyk_to_rgb_is_opaque() {
        let rgb = Color::cmyk(0, 100, 100, 0).convert_to(Colorspace::Rgb);
        assert_eq!(rgb.to_array(), vec![255, 0, 0, 255]);
    }

    #[test]
    fn same_space_is_identity() {
        let color = Color::rgba(10, 20, 30, 40);
        assert_eq!(color.convert_to(Colorspace::Rgb), color);
    }
}
