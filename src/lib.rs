#![no_std]

pub mod bounds;
pub mod channel;
pub mod color;
pub mod command;
pub mod config;
pub mod effect;
pub mod engine;
pub mod frame_scheduler;
pub mod math8;
pub mod pixel_map;
pub mod power;
pub mod state;

pub use bounds::{PIXEL_COUNT, Segment};
pub use channel::{CommandChannel, CommandReceiver, CommandSender, TrySendError};
pub use command::{COMMANDS, Command, CommandAction, CommandDispatcher, dispatch};
pub use config::{FirmwareConfig, PowerConfig};
pub use effect::{AnimationMode, EffectSlot};
pub use engine::AnimationEngine;
pub use frame_scheduler::{Board, DisplayOutcome, Duty, FrameScheduler};
pub use pixel_map::Frame;
pub use power::{PowerController, PowerStatus, SampleEffects};
pub use state::AppState;

pub use color::Rgb;
pub use embassy_time::{Duration, Instant};

/// Abstract LED driver trait
///
/// Implement this trait for the transmission peripheral. Frames are handed
/// over in physical slot order.
pub trait OutputDriver {
    /// Start transmitting a frame
    fn write(&mut self, frame: &[Rgb]);

    /// Check if a previous frame is still being transmitted
    fn is_busy(&self) -> bool {
        false
    }
}

/// Source of raw battery voltage readings
pub trait VoltageSensor {
    /// Take one 12-bit ADC sample
    fn read_raw(&mut self) -> u16;
}
