//! Viewport pixel buffer.

use crate::Color;

/// Dense `width × height` grid of unclamped colors, stored row-major.
///
/// Pixels are addressed as `(col, row)` with `col < width` and
/// `row < height`.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    width: u32,
    height: u32,
    pixels: Vec<Color>,
}

impl Viewport {
    /// Create a new viewport filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// True when either dimension is zero.
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn index(&self, col: u32, row: u32) -> usize {
        assert!(
            col < self.width && row < self.height,
            "pixel ({col}, {row}) outside {}x{} viewport",
            self.width,
            self.height
        );
        row as usize * self.width as usize + col as usize
    }

    /// Get the pixel at (col, row).
    pub fn get(&self, col: u32, row: u32) -> Color {
        self.pixels[self.index(col, row)]
    }

    /// Set the pixel at (col, row).
    pub fn set(&mut self, col: u32, row: u32, color: Color) {
        let index = self.index(col, row);
        self.pixels[index] = color;
    }

    /// All pixels in row-major order.
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    pub(crate) fn pixels_mut(&mut self) -> &mut [Color] {
        &mut self.pixels
    }

    /// Smallest and largest channel value over every pixel.
    ///
    /// Returns `None` for an empty viewport.
    pub fn min_max(&self) -> Option<(f32, f32)> {
        if self.pixels.is_empty() {
            return None;
        }

        let (min, max) = self.pixels.iter().fold(
            (f32::INFINITY, f32::NEG_INFINITY),
            |(min, max), color| (min.min(color.min_element()), max.max(color.max_element())),
        );
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_black() {
        let viewport = Viewport::new(4, 3);
        assert_eq!(viewport.width(), 4);
        assert_eq!(viewport.height(), 3);
        assert_eq!(viewport.pixels().len(), 12);
        assert!(viewport.pixels().iter().all(|c| *c == Color::ZERO));
    }

    #[test]
    fn test_get_set_row_major() {
        let mut viewport = Viewport::new(4, 3);
        viewport.set(3, 1, Color::new(1.0, 2.0, 3.0));

        assert_eq!(viewport.get(3, 1), Color::new(1.0, 2.0, 3.0));
        assert_eq!(viewport.pixels()[1 * 4 + 3], Color::new(1.0, 2.0, 3.0));
        assert_eq!(viewport.get(1, 3 - 1), Color::ZERO);
    }

    #[test]
    #[should_panic(expected = "outside 4x3 viewport")]
    fn test_set_past_row_end_panics() {
        // Column past the end must not wrap into the next row
        let mut viewport = Viewport::new(4, 3);
        viewport.set(4, 0, Color::ONE);
    }

    #[test]
    #[should_panic]
    fn test_get_out_of_bounds_panics() {
        let viewport = Viewport::new(4, 3);
        let _ = viewport.get(0, 3);
    }

    #[test]
    fn test_min_max_over_all_channels() {
        let mut viewport = Viewport::new(2, 1);
        viewport.set(0, 0, Color::new(0.2, -0.5, 0.1));
        viewport.set(1, 0, Color::new(0.3, 0.4, 1.7));

        assert_eq!(viewport.min_max(), Some((-0.5, 1.7)));
    }

    #[test]
    fn test_min_max_blue_channel_max() {
        // Largest value sits in the blue channel while green is small
        let mut viewport = Viewport::new(1, 1);
        viewport.set(0, 0, Color::new(0.1, 0.0, 0.9));

        assert_eq!(viewport.min_max(), Some((0.0, 0.9)));
    }

    #[test]
    fn test_empty_viewport() {
        let viewport = Viewport::new(0, 10);
        assert!(viewport.is_empty());
        assert_eq!(viewport.min_max(), None);
    }
}
