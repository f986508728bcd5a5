//! # Colors
//!
//! RGBA color values stored in a PolySet palette.

use serde::{Deserialize, Serialize};

/// An RGBA color with `f32` channels in `[0.0, 1.0]`.
///
/// A color with any negative, infinite or NaN channel is *invalid*; it is what
/// callers pass when a face has no explicit color.
///
/// # Example
///
/// ```rust
/// use openscad_polyset::Color4f;
///
/// let red = Color4f::new(1.0, 0.0, 0.0, 1.0);
/// assert!(red.is_valid());
/// assert!(!Color4f::INVALID.is_valid());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color4f {
    /// Red channel.
    pub r: f32,
    /// Green channel.
    pub g: f32,
    /// Blue channel.
    pub b: f32,
    /// Alpha channel.
    pub a: f32,
}

impl Color4f {
    /// The "no color" value.
    pub const INVALID: Color4f = Color4f {
        r: -1.0,
        g: -1.0,
        b: -1.0,
        a: -1.0,
    };

    /// Creates a color from its channels.
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color.
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Returns true if every channel is finite and non-negative.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.to_array()
            .iter()
            .all(|channel| channel.is_finite() && *channel >= 0.0)
    }

    /// Returns the channels as an array.
    #[inline]
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl Default for Color4f {
    fn default() -> Self {
        Self::INVALID
    }
}

impl From<[f32; 4]> for Color4f {
    fn from(rgba: [f32; 4]) -> Self {
        Self::new(rgba[0], rgba[1], rgba[2], rgba[3])
    }
}
