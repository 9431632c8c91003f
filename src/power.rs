//! Battery protection
//!
//! Hysteresis over periodic voltage samples. A run of low samples disables
//! the output; a longer run of good samples enables it again. The counter is
//! re-armed to a non-zero value on enable, so a dip right after recovery
//! disables the output again after only a couple of samples.
//!
//! The counter only ever holds the length of the current run of same-direction
//! samples, so it never grows past the larger of the two thresholds plus one.

#[cfg(feature = "log")]
use esp_println::println;

use crate::config::{PowerConfig, raw_to_volts};

/// Whether the LED output is powered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PowerStatus {
    #[default]
    Disabled,
    Enabled,
}

impl PowerStatus {
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::Enabled)
    }
}

/// Side effects of a sample that the animation side has to apply
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SampleEffects {
    /// Restart the animation from Startup, phase 0
    pub reset_animation: bool,
    /// Blank every pixel
    pub clear_lights: bool,
    /// New status, if this sample changed it
    pub transition: Option<PowerStatus>,
}

impl SampleEffects {
    /// Check if any effects need to be applied
    pub const fn has_effects(&self) -> bool {
        self.reset_animation || self.clear_lights || self.transition.is_some()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PowerController {
    config: PowerConfig,
    status: PowerStatus,
    voltage_count: u32,
    dimmed: bool,
    suppress_lights: bool,
    last_volts: f32,
}

impl PowerController {
    /// Create a disabled controller with a cleared counter
    pub const fn new(config: PowerConfig) -> Self {
        Self {
            config,
            status: PowerStatus::Disabled,
            voltage_count: 0,
            dimmed: false,
            suppress_lights: false,
            last_volts: 0.0,
        }
    }

    pub const fn status(&self) -> PowerStatus {
        self.status
    }

    pub const fn is_enabled(&self) -> bool {
        self.status.is_enabled()
    }

    pub const fn voltage_count(&self) -> u32 {
        self.voltage_count
    }

    pub const fn is_dimmed(&self) -> bool {
        self.dimmed
    }

    pub const fn suppress_lights(&self) -> bool {
        self.suppress_lights
    }

    /// Last measured battery voltage
    pub const fn last_volts(&self) -> f32 {
        self.last_volts
    }

    /// Feed a raw ADC reading
    pub fn sample(&mut self, raw: u16) -> SampleEffects {
        self.sample_volts(raw_to_volts(raw))
    }

    /// Feed a reading that is already in volts
    pub fn sample_volts(&mut self, volts: f32) -> SampleEffects {
        self.last_volts = volts;
        if volts < self.config.low_volts {
            self.on_low()
        } else {
            self.dimmed = volts < self.config.dim_volts;
            self.on_ok()
        }
    }

    fn on_low(&mut self) -> SampleEffects {
        let mut effects = SampleEffects::default();
        self.suppress_lights = true;

        match self.status {
            PowerStatus::Enabled => {
                self.voltage_count += 1;
                effects.clear_lights = self.suppress_lights;
                if self.voltage_count > self.config.disable_after {
                    self.status = PowerStatus::Disabled;
                    self.voltage_count = 0;
                    effects.transition = Some(PowerStatus::Disabled);
                    #[cfg(feature = "log")]
                    println!("[PowerController] low battery ({}V), disabling", self.last_volts);
                }
            }
            PowerStatus::Disabled => {
                // A low reading breaks the run of good samples
                self.voltage_count = 0;
                effects.reset_animation = true;
            }
        }

        effects
    }

    fn on_ok(&mut self) -> SampleEffects {
        let mut effects = SampleEffects::default();

        match self.status {
            PowerStatus::Disabled => {
                self.voltage_count += 1;
                if self.voltage_count > self.config.enable_after {
                    self.status = PowerStatus::Enabled;
                    self.voltage_count = self.config.rearm_count;
                    effects.transition = Some(PowerStatus::Enabled);
                    #[cfg(feature = "log")]
                    println!("[PowerController] battery ok ({}V), enabling", self.last_volts);
                }
            }
            PowerStatus::Enabled => {
                self.voltage_count = 0;
                self.suppress_lights = false;
            }
        }

        effects
    }

    /// Manual override: flip the output and hide the lights while disabled
    ///
    /// The debounce counter is left alone.
    pub fn toggle_enabled(&mut self) -> PowerStatus {
        self.status = match self.status {
            PowerStatus::Enabled => PowerStatus::Disabled,
            PowerStatus::Disabled => PowerStatus::Enabled,
        };
        self.suppress_lights = !self.status.is_enabled();
        self.status
    }
}

impl Default for PowerController {
    fn default() -> Self {
        Self::new(PowerConfig::default())
    }
}
