//! Logical to physical pixel reordering
//!
//! Animations address pixels by their position around the vehicle. The
//! physical transmission order follows the wiring, which runs the right side
//! in the opposite direction. [`Frame`] hides the permutation: it is written
//! with logical indices and transmitted in physical order.

use crate::bounds::PIXEL_COUNT;
use crate::color::{OFF, Rgb};

/// Physical slot for every logical pixel.
///
/// Logical 42..=68 run back to front on the right side, so they map to
/// physical 68 down to 42. Everything else keeps its position.
#[rustfmt::skip]
pub const ORDER_MAP: [u8; PIXEL_COUNT] = [
    // left side, back to front
    0, 1, 2, 3, 4, 5, 6, 7, 8, 9,
    10, 11, 12, 13, 14, 15, 16, 17, 18, 19,
    20, 21, 22, 23, 24, 25, 26,
    // front side, left to right
    27, 28, 29, 30, 31, 32, 33, 34, 35, 36,
    37, 38, 39, 40, 41,
    // right side, back to front
    68, 67, 66, 65, 64, 63, 62, 61, 60, 59,
    58, 57, 56, 55, 54, 53, 52, 51, 50, 49,
    48, 47, 46, 45, 44, 43, 42,
    // back side, right to left
    69, 70, 71, 72, 73, 74, 75, 76, 77, 78,
    79, 80, 81, 82, 83,
];

/// Map a logical pixel index to its physical transmission slot.
///
/// # Panics
///
/// Panics if `logical` is outside `[0, PIXEL_COUNT)`. That is a defect in the
/// caller, never a runtime condition.
#[inline]
pub const fn map(logical: usize) -> usize {
    assert!(logical < PIXEL_COUNT, "logical pixel index out of range");
    ORDER_MAP[logical] as usize
}

/// Drawable frame stored in physical order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pixels: [Rgb; PIXEL_COUNT],
}

impl Frame {
    pub const fn new() -> Self {
        Self {
            pixels: [OFF; PIXEL_COUNT],
        }
    }

    /// Set a pixel by logical index
    #[inline]
    pub fn set(&mut self, logical: usize, color: Rgb) {
        self.pixels[map(logical)] = color;
    }

    /// Get a pixel by logical index
    #[inline]
    pub fn get(&self, logical: usize) -> Rgb {
        self.pixels[map(logical)]
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.pixels = [OFF; PIXEL_COUNT];
    }

    /// Pixels in physical transmission order
    pub fn physical(&self) -> &[Rgb] {
        &self.pixels
    }
}

impl Default for Frame {
    fn default() -> Self {
        Self::new()
    }
}
