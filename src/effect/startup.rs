//! Boot sweep
//!
//! A white head runs along each output channel with a fading gray trail.
//! Both channels show the same picture.

use super::Effect;
use crate::bounds::LEDS_PER_CHANNEL;
use crate::color::{OFF, WHITE, gray};
use crate::math8::dim_phase;
use crate::pixel_map::Frame;

const STARTUP_PERIOD: u16 = 256;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartupEffect;

impl Effect for StartupEffect {
    fn period(&self) -> u16 {
        STARTUP_PERIOD
    }

    fn render(&self, phase: u16, frame: &mut Frame) {
        for i in 0..LEDS_PER_CHANNEL {
            #[allow(clippy::cast_possible_truncation)]
            let position = i as u16;
            let color = if position == phase {
                WHITE
            } else if position < phase {
                gray(dim_phase(phase - position))
            } else {
                OFF
            };
            frame.set(i, color);
            frame.set(i + LEDS_PER_CHANNEL, color);
        }
    }
}
