//! Geometric primitives shared by image operations.

use serde::{Deserialize, Serialize};

/// A position in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }
}

/// Anchor naming where a window sits inside an outer area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

impl Anchor {
    /// Resolves the top-left offset of an `inner` window anchored inside
    /// `outer`. The window must not exceed the outer dimensions; callers
    /// clamp beforehand.
    pub fn resolve(self, outer: (u32, u32), inner: (u32, u32)) -> (u32, u32) {
        let (ow, oh) = outer;
        let (iw, ih) = inner;
        let right = ow.saturating_sub(iw);
        let bottom = oh.saturating_sub(ih);

        match self {
            Self::TopLeft => (0, 0),
            Self::TopRight => (right, 0),
            Self::BottomLeft => (0, bottom),
            Self::BottomRight => (right, bottom),
            Self::Center => (right / 2, bottom / 2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn anchor_corners() {
        let outer = (640, 480);
        let inner = (200, 200);
        assert_eq!(Anchor::TopLeft.resolve(outer, inner), (0, 0));
        assert_eq!(Anchor::TopRight.resolve(outer, inner), (440, 0));
        assert_eq!(Anchor::BottomLeft.resolve(outer, inner), (0, 280));
        assert_eq!(Anchor::BottomRight.resolve(outer, inner), (440, 280));
        assert_eq!(Anchor::Center.resolve(outer, inner), (220, 140));
    }

    #[test]
    fn anchor_saturates_on_oversized_window() {
        assert_eq!(Anchor::BottomRight.resolve((100, 100), (200, 200)), (0, 0));
    }

    #[test]
    fn anchor_serializes_kebab_case() {
        let json = serde_json::to_string(&Anchor::BottomRight).unwrap();
        assert_eq!(json, "\"bottom-right\"");
    }
}
