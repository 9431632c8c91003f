//! Application state aggregate
//!
//! Everything the main loop mutates lives here: the animation engine (with
//! its frame), the power controller and the console echo flag. The frame
//! scheduler owns one `AppState` and lends it to the power sampling and
//! command duties, so there is exactly one writer at any time.

use core::fmt::Write;

use crate::config::FirmwareConfig;
use crate::engine::AnimationEngine;
use crate::power::{PowerController, SampleEffects};

#[derive(Debug, Clone, PartialEq)]
pub struct AppState {
    engine: AnimationEngine,
    power: PowerController,
    measuring: bool,
}

impl AppState {
    /// Boot state: Startup at phase 0, output disabled, echo off
    pub fn new(config: &FirmwareConfig) -> Self {
        Self {
            engine: AnimationEngine::new(),
            power: PowerController::new(config.power),
            measuring: false,
        }
    }

    pub const fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut AnimationEngine {
        &mut self.engine
    }

    pub const fn power(&self) -> &PowerController {
        &self.power
    }

    pub fn power_mut(&mut self) -> &mut PowerController {
        &mut self.power
    }

    /// Whether every voltage sample is echoed to the console
    pub const fn is_measuring(&self) -> bool {
        self.measuring
    }

    pub fn set_measuring(&mut self, measuring: bool) {
        self.measuring = measuring;
    }

    /// Advance the animation by one display tick
    ///
    /// Does nothing while the output is disabled.
    pub fn animate(&mut self) {
        if !self.power.is_enabled() {
            return;
        }
        let dimmed = self.power.is_dimmed();
        self.engine.step(dimmed);
    }

    /// Feed a raw voltage reading and apply what it implies
    pub fn sample_voltage<W: Write>(&mut self, raw: u16, console: &mut W) -> SampleEffects {
        let effects = self.power.sample(raw);
        if self.measuring {
            let _ = write!(console, "{:.2}\r\n", self.power.last_volts());
        }
        self.apply_effects(&effects, console);
        effects
    }

    fn apply_effects<W: Write>(&mut self, effects: &SampleEffects, console: &mut W) {
        if effects.clear_lights {
            self.engine.clear();
        }
        if effects.reset_animation {
            self.engine.reset();
        }
        if let Some(status) = effects.transition {
            if self.measuring {
                let _ = writeln!(console, "enabled: {}", u8::from(status.is_enabled()));
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&FirmwareConfig::default())
    }
}
