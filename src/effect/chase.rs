//! Side marker chase
//!
//! A saturated marker walks forward along one segment, then a dim marker
//! walks the same way again. Only the marker pixel is written each tick, so
//! earlier markers stay lit until overwritten.

use super::Effect;
use crate::bounds::Segment;
use crate::color::{FORWARD_MARKER, RETURN_MARKER};
use crate::pixel_map::Frame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChaseEffect {
    segment: Segment,
}

impl ChaseEffect {
    pub const fn new(segment: Segment) -> Self {
        Self { segment }
    }

    pub const fn segment(&self) -> Segment {
        self.segment
    }
}

impl Effect for ChaseEffect {
    fn period(&self) -> u16 {
        u16::from(self.segment.count()) * 2
    }

    #[allow(clippy::cast_possible_truncation)]
    fn render(&self, phase: u16, frame: &mut Frame) {
        let count = u16::from(self.segment.count());
        if phase < count {
            frame.set(self.segment.pixel(phase as u8), FORWARD_MARKER);
        } else {
            frame.set(self.segment.pixel((phase - count) as u8), RETURN_MARKER);
        }
    }
}
