//! Shared mocks for the integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use std::cell::Cell;
use std::collections::VecDeque;
use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use perimeter_lights::channel::CommandReceiver;
use perimeter_lights::{
    Board, FirmwareConfig, FrameScheduler, OutputDriver, PIXEL_COUNT, Rgb, VoltageSensor,
};

/// Raw reading well below the low threshold (~10.8 V)
pub const RAW_LOW: u16 = 600;
/// Raw reading between the low and dim thresholds (~12.6 V)
pub const RAW_DIM: u16 = 700;
/// Raw reading above the dim threshold (~14.4 V)
pub const RAW_FULL: u16 = 800;

// ============================================================================
// Mock LED driver
// ============================================================================

/// Records every submitted frame
#[derive(Default)]
pub struct MockDriver {
    pub frames: Vec<[Rgb; PIXEL_COUNT]>,
    pub busy: Cell<bool>,
}

impl OutputDriver for MockDriver {
    fn write(&mut self, frame: &[Rgb]) {
        let mut copy = [Rgb::default(); PIXEL_COUNT];
        copy.copy_from_slice(frame);
        self.frames.push(copy);
    }

    fn is_busy(&self) -> bool {
        self.busy.get()
    }
}

// ============================================================================
// Mock voltage sensor
// ============================================================================

/// Replays queued readings, then repeats the last one
pub struct MockSensor {
    readings: VecDeque<u16>,
    last: u16,
}

impl MockSensor {
    pub fn new(readings: &[u16]) -> Self {
        Self {
            readings: readings.iter().copied().collect(),
            last: RAW_FULL,
        }
    }

    pub fn push(&mut self, raw: u16) {
        self.readings.push_back(raw);
    }
}

impl VoltageSensor for MockSensor {
    fn read_raw(&mut self) -> u16 {
        if let Some(raw) = self.readings.pop_front() {
            self.last = raw;
        }
        self.last
    }
}

// ============================================================================
// Mock output pin
// ============================================================================

/// Output pin that keeps its level history
#[derive(Default)]
pub struct MockPin {
    pub history: Vec<bool>,
}

impl MockPin {
    pub fn is_high(&self) -> bool {
        self.history.last().copied().unwrap_or(false)
    }
}

impl ErrorType for MockPin {
    type Error = Infallible;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.history.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.history.push(true);
        Ok(())
    }
}

// ============================================================================
// Scheduler helpers
// ============================================================================

pub type TestScheduler<'a> =
    FrameScheduler<'a, MockDriver, MockSensor, MockPin, MockPin, String, 16>;

pub fn board(readings: &[u16]) -> Board<MockDriver, MockSensor, MockPin, MockPin> {
    Board {
        leds: MockDriver::default(),
        sensor: MockSensor::new(readings),
        power_gate: MockPin::default(),
        indicator: MockPin::default(),
    }
}

pub fn scheduler<'a>(readings: &[u16], commands: CommandReceiver<'a, 16>) -> TestScheduler<'a> {
    FrameScheduler::new(
        board(readings),
        String::new(),
        commands,
        &FirmwareConfig::default(),
    )
}
