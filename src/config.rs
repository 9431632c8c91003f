//! Firmware configuration
//!
//! Timing cadences and power hysteresis constants. The defaults match the
//! installed hardware; tests shorten or reuse them as needed.

use embassy_time::Duration;

/// Default display cadence (~60 FPS)
pub const DEFAULT_DISPLAY_INTERVAL: Duration = Duration::from_micros(16_600);

/// Default voltage sampling cadence
pub const DEFAULT_SAMPLE_INTERVAL: Duration = Duration::from_secs(1);

/// Divider calibration: volts at [`CALIBRATION_RAW`]
pub const CALIBRATION_VOLTS: f32 = 12.9;

/// Divider calibration: raw reading at [`CALIBRATION_VOLTS`]
pub const CALIBRATION_RAW: f32 = 719.0;

/// Convert a raw ADC reading into battery volts
#[inline]
pub fn raw_to_volts(raw: u16) -> f32 {
    f32::from(raw) * CALIBRATION_VOLTS / CALIBRATION_RAW
}

/// Hysteresis thresholds for the power gate
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PowerConfig {
    /// Below this the battery is considered low
    pub low_volts: f32,
    /// Below this (but not low) output is dimmed
    pub dim_volts: f32,
    /// Output is disabled once the counter exceeds this while low
    pub disable_after: u32,
    /// Output is enabled once the counter exceeds this while good
    pub enable_after: u32,
    /// Counter value right after re-enabling
    pub rearm_count: u32,
}

impl Default for PowerConfig {
    fn default() -> Self {
        Self {
            low_volts: 11.8,
            dim_volts: 14.0,
            disable_after: 5,
            enable_after: 10,
            rearm_count: 4,
        }
    }
}

/// Configuration for the frame scheduler and everything it owns
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FirmwareConfig {
    pub display_interval: Duration,
    pub sample_interval: Duration,
    pub power: PowerConfig,
}

impl Default for FirmwareConfig {
    fn default() -> Self {
        Self {
            display_interval: DEFAULT_DISPLAY_INTERVAL,
            sample_interval: DEFAULT_SAMPLE_INTERVAL,
            power: PowerConfig::default(),
        }
    }
}
