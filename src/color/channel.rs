//! Named color channels and their value domains.
//!
//! A [`Channel`] is a single numeric color component tagged with a
//! [`ChannelKind`]. Each kind declares an integer domain: RGB and alpha
//! channels run 0..=255, CMYK channels run 0..=100. Values are clamped into
//! the domain at construction and never change afterwards.

/// The identity of a color channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChannelKind {
    Red,
    Green,
    Blue,
    Alpha,
    Cyan,
    Magenta,
    Yellow,
    Key,
}

impl ChannelKind {
    /// Upper bound of the integer domain for this channel kind.
    pub fn domain_max(self) -> i64 {
        match self {
            Self::Red | Self::Green | Self::Blue | Self::Alpha => 255,
            Self::Cyan | Self::Magenta | Self::Yellow | Self::Key => 100,
        }
    }
}

/// A single immutable color component.
///
/// Out-of-range raw values saturate to the domain bounds instead of raising
/// an error, matching integer channel semantics such as 0-255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Channel {
    kind: ChannelKind,
    value: i64,
}

impl Channel {
    /// Creates a channel, clamping `value` into the kind's domain.
    pub fn new(kind: ChannelKind, value: i64) -> Self {
        Self {
            kind,
            value: value.clamp(0, kind.domain_max()),
        }
    }

    /// Maps a normalized float in [0, 1] back into the integer domain via
    /// `round(f * domain_max)`.
    pub fn from_normalized(kind: ChannelKind, normalized: f64) -> Self {
        let max = kind.domain_max() as f64;
        Self::new(kind, (normalized.clamp(0.0, 1.0) * max).round() as i64)
    }

    /// The channel's identity.
    pub fn kind(&self) -> ChannelKind {
        self.kind
    }

    /// The integer channel value within its declared domain.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// The channel value normalized into [0, 1].
    pub fn normalize(&self) -> f64 {
        self.value as f64 / self.kind.domain_max() as f64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_to_domain() {
        assert_eq!(Channel::new(ChannelKind::Red, 300).value(), 255);
        assert_eq!(Channel::new(ChannelKind::Red, -5).value(), 0);
        assert_eq!(Channel::new(ChannelKind::Cyan, 150).value(), 100);
    }

    #[test]
    fn normalize_round_trip() {
        let channel = Channel::new(ChannelKind::Green, 128);
        let back = Channel::from_normalized(ChannelKind::Green, channel.normalize());
        assert_eq!(back.value(), 128);

        let key = Channel::new(ChannelKind::Key, 73);
        let back = Channel::from_normalized(ChannelKind::Key, key.normalize());
        assert_eq!(back.value(), 73);
    }

    #[test]
    fn from_normalized_rounds() {
        assert_eq!(Channel::from_normalized(ChannelKind::Alpha, 0.5).value(), 128);
        assert_eq!(Channel::from_normalized(ChannelKind::Alpha, 1.0).value(), 255);
        assert_eq!(Channel::from_normalized(ChannelKind::Alpha, -0.2).value(), 0);
    }
}
