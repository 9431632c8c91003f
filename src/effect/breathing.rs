//! Idle glow
//!
//! Single-channel breathing: a fast gamma-corrected rise over 64 ticks and a
//! slow fall over 255 ticks. The glow never drops below a visible floor.

use super::Effect;
use crate::bounds::PIXEL_COUNT;
use crate::color::glow;
use crate::math8::gamma;
use crate::pixel_map::Frame;

const RISE_TICKS: u16 = 64;
const FALL_TICKS: u16 = 255;
const BREATHING_PERIOD: u16 = RISE_TICKS + FALL_TICKS;

/// Lowest intensity shown while the lights are enabled
pub const FLOOR_INTENSITY: u8 = 8;

/// Glow intensity at `phase`, before it is placed into a color
#[allow(clippy::cast_possible_truncation)]
pub const fn breathing_intensity(phase: u16, dimmed: bool) -> u8 {
    let raw = if phase < RISE_TICKS {
        gamma((phase * 4 + 3) as u8)
    } else if phase < BREATHING_PERIOD {
        gamma((BREATHING_PERIOD - phase) as u8)
    } else {
        0
    };
    let clamped = if raw < FLOOR_INTENSITY {
        FLOOR_INTENSITY
    } else {
        raw
    };
    if dimmed { clamped / 2 } else { clamped }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BreathingEffect {
    dimmed: bool,
}

impl BreathingEffect {
    pub const fn new(dimmed: bool) -> Self {
        Self { dimmed }
    }
}

impl Effect for BreathingEffect {
    fn period(&self) -> u16 {
        BREATHING_PERIOD
    }

    fn render(&self, phase: u16, frame: &mut Frame) {
        let color = glow(breathing_intensity(phase, self.dimmed));
        for i in 0..PIXEL_COUNT {
            frame.set(i, color);
        }
    }
}
