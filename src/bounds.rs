//! Strip geometry
//!
//! The perimeter is driven as two output channels of 42 pixels each. The
//! 84 logical pixels are split into four contiguous segments, one per side
//! of the vehicle.

/// Pixels on a single output channel
pub const LEDS_PER_CHANNEL: usize = 42;

/// Number of output channels
pub const CHANNEL_COUNT: usize = 2;

/// Total number of logical (and physical) pixels
pub const PIXEL_COUNT: usize = LEDS_PER_CHANNEL * CHANNEL_COUNT;

/// Left side, back to front
pub const LEFT: Segment = Segment::new(0, 27);
/// Front side, left to right
pub const FRONT: Segment = Segment::new(27, 42);
/// Right side
pub const RIGHT: Segment = Segment::new(42, 68);
/// Back side, right to left
pub const BACK: Segment = Segment::new(68, 84);

/// All segments in logical order
pub const SEGMENTS: [Segment; 4] = [LEFT, FRONT, RIGHT, BACK];

/// Half-open range `[start, end)` of logical pixel indices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Segment {
    pub start: u8,
    pub end: u8,
}

impl Segment {
    pub const fn new(start: u8, end: u8) -> Self {
        assert!(start < end, "segment must not be empty");
        Self { start, end }
    }

    /// Get the number of pixels in the segment
    pub const fn count(self) -> u8 {
        self.end - self.start
    }

    /// Check if the logical index lies inside the segment
    pub const fn contains(self, index: usize) -> bool {
        index >= self.start as usize && index < self.end as usize
    }

    /// Logical index of the `offset`-th pixel of the segment
    pub const fn pixel(self, offset: u8) -> usize {
        assert!(offset < self.count(), "offset outside of segment");
        self.start as usize + offset as usize
    }
}
