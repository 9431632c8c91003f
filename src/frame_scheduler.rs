//! Cooperative main loop.
//!
//! One call to [`FrameScheduler::tick`] runs at most one duty, in priority
//! order: display, voltage sampling, then a single console command. The
//! display cadence is authoritative; the other duties only run in iterations
//! where no frame is due.
//!
//! There is no waiting inside the scheduler. When the LED peripheral is
//! still transmitting the previous frame, the display tick is consumed and
//! the frame skipped rather than spinning on the hardware.

use core::fmt::Write;

use embassy_time::Instant;
use embedded_hal::digital::{OutputPin, PinState};

#[cfg(feature = "log")]
use esp_println::println;

use crate::channel::CommandReceiver;
use crate::command::{CommandAction, CommandDispatcher};
use crate::config::FirmwareConfig;
use crate::power::SampleEffects;
use crate::state::AppState;
use crate::{OutputDriver, VoltageSensor};

/// Hardware the scheduler drives
pub struct Board<D, S, P, I> {
    /// LED transmission peripheral
    pub leds: D,
    /// Battery voltage input
    pub sensor: S,
    /// Power gate for the LED supply
    pub power_gate: P,
    /// Pulsed high while a frame is submitted
    pub indicator: I,
}

/// What happened on a display tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// Frame rendered and handed to the driver
    Submitted,
    /// Previous transmission still in flight, frame skipped
    Busy,
    /// Output disabled, nothing rendered
    PoweredOff,
}

/// Duty performed by a single [`FrameScheduler::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Duty {
    Display(DisplayOutcome),
    Sample(SampleEffects),
    /// Console poll; carries the action that ran, if any
    Command(Option<CommandAction>),
}

pub struct FrameScheduler<'a, D, S, P, I, W, const SIZE: usize>
where
    D: OutputDriver,
    S: VoltageSensor,
    P: OutputPin,
    I: OutputPin,
    W: Write,
{
    board: Board<D, S, P, I>,
    console: W,
    dispatcher: CommandDispatcher<'a, SIZE>,
    state: AppState,
    config: FirmwareConfig,
    last_display: Instant,
    last_sample: Instant,
}

impl<'a, D, S, P, I, W, const SIZE: usize> FrameScheduler<'a, D, S, P, I, W, SIZE>
where
    D: OutputDriver,
    S: VoltageSensor,
    P: OutputPin,
    I: OutputPin,
    W: Write,
{
    /// Create a scheduler in the boot state
    ///
    /// The power gate is driven to match the initial disabled state.
    pub fn new(
        board: Board<D, S, P, I>,
        console: W,
        commands: CommandReceiver<'a, SIZE>,
        config: &FirmwareConfig,
    ) -> Self {
        let mut scheduler = Self {
            board,
            console,
            dispatcher: CommandDispatcher::new(commands),
            state: AppState::new(config),
            config: *config,
            last_display: Instant::from_millis(0),
            last_sample: Instant::from_millis(0),
        };
        scheduler.drive_power_gate();
        scheduler
    }

    /// Run one loop iteration
    pub fn tick(&mut self, now: Instant) -> Duty {
        if now.saturating_duration_since(self.last_display) >= self.config.display_interval {
            self.last_display = now;
            Duty::Display(self.display())
        } else if now.saturating_duration_since(self.last_sample) >= self.config.sample_interval {
            self.last_sample = now;
            Duty::Sample(self.sample_voltage())
        } else {
            Duty::Command(self.dispatcher.poll(&mut self.state, &mut self.console))
        }
    }

    fn display(&mut self) -> DisplayOutcome {
        if !self.state.power().is_enabled() {
            return DisplayOutcome::PoweredOff;
        }
        if self.board.leds.is_busy() {
            #[cfg(feature = "log")]
            println!("[FrameScheduler.display] transmission busy, skipping frame");
            return DisplayOutcome::Busy;
        }

        self.state.animate();

        let _ = self.board.indicator.set_high();
        self.board.leds.write(self.state.engine().frame().physical());
        let _ = self.board.indicator.set_low();

        DisplayOutcome::Submitted
    }

    fn sample_voltage(&mut self) -> SampleEffects {
        let raw = self.board.sensor.read_raw();
        let effects = self.state.sample_voltage(raw, &mut self.console);
        self.drive_power_gate();
        effects
    }

    fn drive_power_gate(&mut self) {
        let level = PinState::from(self.state.power().is_enabled());
        let _ = self.board.power_gate.set_state(level);
    }

    pub const fn state(&self) -> &AppState {
        &self.state
    }

    pub const fn board(&self) -> &Board<D, S, P, I> {
        &self.board
    }

    pub const fn console(&self) -> &W {
        &self.console
    }
}
