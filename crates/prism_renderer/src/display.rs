//! Conversion of a rendered viewport into displayable 8-bit RGBA.
//!
//! Colors are mapped linearly from the viewport's `[min, max]` channel range
//! onto `[0, 255]`, so a render is normalized as a whole rather than clamped
//! per pixel.

use crate::{Color, Viewport};

/// Linear mapping from a channel range onto `[0, 255]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelRange {
    min: f32,
    scale: f32,
    flat: bool,
}

impl ChannelRange {
    /// Build the mapping for a viewport.
    ///
    /// A flat image (every channel equal) uses a scale of 1 and maps every
    /// channel to the top of the range.
    pub fn from_viewport(viewport: &Viewport) -> Self {
        match viewport.min_max() {
            Some((min, max)) if max > min => Self {
                min,
                scale: 1.0 / (max - min),
                flat: false,
            },
            Some((min, _)) => Self {
                min,
                scale: 1.0,
                flat: true,
            },
            None => Self {
                min: 0.0,
                scale: 1.0,
                flat: true,
            },
        }
    }

    /// Map one channel value to a byte.
    #[inline]
    pub fn to_byte(&self, value: f32) -> u8 {
        let normalized = if self.flat {
            1.0
        } else {
            (value - self.min) * self.scale
        };
        (normalized * 255.0).round().clamp(0.0, 255.0) as u8
    }

    /// Map a color to RGBA with alpha forced to 255.
    pub fn color_to_rgba(&self, color: Color) -> [u8; 4] {
        [
            self.to_byte(color.x),
            self.to_byte(color.y),
            self.to_byte(color.z),
            255,
        ]
    }
}

/// Convert a viewport to RGBA bytes, row-major, four bytes per pixel.
pub fn to_rgba(viewport: &Viewport) -> Vec<u8> {
    let range = ChannelRange::from_viewport(viewport);

    let mut bytes = Vec::with_capacity(viewport.pixels().len() * 4);
    for color in viewport.pixels() {
        bytes.extend_from_slice(&range.color_to_rgba(*color));
    }
    bytes
}
