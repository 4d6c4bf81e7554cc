//! Color model: ordered named channels over a colorspace.
//!
//! A [`Color`] is an immutable, fixed-arity tuple of [`Channel`]s whose
//! order and identities are declared by its [`Colorspace`]. Colors are
//! created by a colorspace factory, the decoder chain, or the direct
//! constructors here; once constructed they never change.

pub mod channel;
pub mod decode;
pub mod names;
pub mod space;

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

pub use channel::{Channel, ChannelKind};
pub use decode::ColorInput;
pub use space::Colorspace;

use crate::error::{Error, Result};

// ============================================================================
// Color
// ============================================================================

/// An ordered, fixed-arity tuple of channels in one colorspace.
///
/// All channels are always present; channel order matches the colorspace's
/// declaration. Construction clamps raw values into each channel's domain.
///
/// # Example
///
/// ```
/// use pigmenta::{Color, Colorspace};
///
/// let color = Color::decode("#b53717").unwrap();
/// assert_eq!(color.to_hex("#"), "#b53717");
///
/// let cmyk = color.convert_to(Colorspace::Cmyk);
/// assert_eq!(cmyk.colorspace(), Colorspace::Cmyk);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    space: Colorspace,
    channels: Vec<Channel>,
}

impl Color {
    /// Creates a fully opaque RGB color.
    pub fn rgb(r: i64, g: i64, b: i64) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Creates an RGB color with an explicit alpha channel.
    pub fn rgba(r: i64, g: i64, b: i64, a: i64) -> Self {
        Self {
            space: Colorspace::Rgb,
            channels: vec![
                Channel::new(ChannelKind::Red, r),
                Channel::new(ChannelKind::Green, g),
                Channel::new(ChannelKind::Blue, b),
                Channel::new(ChannelKind::Alpha, a),
            ],
        }
    }

    /// Creates a CMYK color. CMYK carries no alpha channel.
    pub fn cmyk(c: i64, m: i64, y: i64, k: i64) -> Self {
        Self {
            space: Colorspace::Cmyk,
            channels: vec![
                Channel::new(ChannelKind::Cyan, c),
                Channel::new(ChannelKind::Magenta, m),
                Channel::new(ChannelKind::Yellow, y),
                Channel::new(ChannelKind::Key, k),
            ],
        }
    }

    /// Decodes an arbitrary color description through the decoder chain.
    ///
    /// Accepts hex strings, `rgb()`/`rgba()` forms, the `transparent`
    /// literal, standard color names, and component arrays.
    pub fn decode(input: impl Into<ColorInput>) -> Result<Self> {
        decode::decode(&input.into())
    }

    pub(crate) fn from_channels(space: Colorspace, channels: Vec<Channel>) -> Self {
        Self { space, channels }
    }

    /// The colorspace declaring this color's channels.
    pub fn colorspace(&self) -> Colorspace {
        self.space
    }

    /// The channels in declared order.
    pub fn channels(&self) -> &[Channel] {
        &self.channels
    }

    /// Looks up a channel by kind within the ordered channel list.
    pub fn channel(&self, kind: ChannelKind) -> Result<Channel> {
        self.channels
            .iter()
            .find(|channel| channel.kind() == kind)
            .copied()
            .ok_or(Error::ChannelNotFound {
                space: self.space,
                kind,
            })
    }

    /// The red channel of an RGB color.
    pub fn red(&self) -> Result<Channel> {
        self.channel(ChannelKind::Red)
    }

    /// The green channel of an RGB color.
    pub fn green(&self) -> Result<Channel> {
        self.channel(ChannelKind::Green)
    }

    /// The blue channel of an RGB color.
    pub fn blue(&self) -> Result<Channel> {
        self.channel(ChannelKind::Blue)
    }

    /// The alpha channel of an RGB color.
    pub fn alpha(&self) -> Result<Channel> {
        self.channel(ChannelKind::Alpha)
    }

    /// The cyan channel of a CMYK color.
    pub fn cyan(&self) -> Result<Channel> {
        self.channel(ChannelKind::Cyan)
    }

    /// The magenta channel of a CMYK color.
    pub fn magenta(&self) -> Result<Channel> {
        self.channel(ChannelKind::Magenta)
    }

    /// The yellow channel of a CMYK color.
    pub fn yellow(&self) -> Result<Channel> {
        self.channel(ChannelKind::Yellow)
    }

    /// The key (black) channel of a CMYK color.
    pub fn key(&self) -> Result<Channel> {
        self.channel(ChannelKind::Key)
    }

    /// Channel values in declared order.
    pub fn to_array(&self) -> Vec<i64> {
        self.channels.iter().map(Channel::value).collect()
    }

    /// Lowercase hex representation with a caller-supplied prefix: six
    /// digits when fully opaque, eight with alpha otherwise.
    ///
    /// Non-RGB colors are converted to RGB first.
    pub fn to_hex(&self, prefix: &str) -> String {
        let rgb = self.convert_to(Colorspace::Rgb);
        let values = rgb.to_array();
        let (r, g, b, a) = (values[0], values[1], values[2], values[3]);

        if a == 255 {
            format!("{prefix}{r:02x}{g:02x}{b:02x}")
        } else {
            format!("{prefix}{r:02x}{g:02x}{b:02x}{a:02x}")
        }
    }

    /// True when the color has no alpha channel or its alpha is at the
    /// domain maximum.
    pub fn is_fully_opaque(&self) -> bool {
        match self.channel(ChannelKind::Alpha) {
            Ok(alpha) => alpha.value() == 255,
            Err(_) => true,
        }
    }

    /// True when the color-forming channels are all equal: red/green/blue
    /// for RGB, cyan/magenta/yellow for CMYK.
    pub fn is_greyscale(&self) -> bool {
        let values = self.to_array();
        values[0] == values[1] && values[1] == values[2]
    }

    /// Converts this color into the target colorspace. Converting into the
    /// color's own space returns it unchanged.
    pub fn convert_to(&self, space: Colorspace) -> Color {
        space.convert(self)
    }
}

impl fmt::Display for Color {
    /// `rgb(r, g, b)` when fully opaque, `rgba(r, g, b, a)` with the alpha
    /// as a one-decimal fraction otherwise; `cmyk(c, m, y, k)` for CMYK.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.to_array();
        match self.space {
            Colorspace::Rgb if self.is_fully_opaque() => {
                write!(f, "rgb({}, {}, {})", values[0], values[1], values[2])
            }
            Colorspace::Rgb => {
                let alpha = values[3] as f64 / 255.0;
                write!(
                    f,
                    "rgba({}, {}, {}, {:.1})",
                    values[0], values[1], values[2], alpha
                )
            }
            Colorspace::Cmyk => write!(
                f,
                "cmyk({}, {}, {}, {})",
                values[0], values[1], values[2], values[3]
            ),
        }
    }
}

impl Serialize for Color {
    /// Serializes as the hex string form, e.g. `"#b53717"`.
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex("#"))
    }
}

impl<'de> Deserialize<'de> for Color {
    /// Deserializes through the decoder chain, accepting any supported
    /// textual form.
    fn deserialize<D: Deserializer<'de>>(
        deserializer: D,
    ) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::decode(text.as_str()).map_err(serde::de::Error::custom)
    }
}
