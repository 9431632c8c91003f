//! Animation effects with compile-time known variants
//!
//! Every animation mode maps to one effect stored in [`EffectSlot`], so
//! switching modes never allocates. Effects are pure functions of the phase:
//! the engine owns the phase counter and advances it after each render.

mod breathing;
mod chase;
mod startup;

pub use breathing::{BreathingEffect, FLOOR_INTENSITY, breathing_intensity};
pub use chase::ChaseEffect;
pub use startup::StartupEffect;

use crate::bounds::{BACK, FRONT, LEFT, RIGHT};
use crate::pixel_map::Frame;

const MODE_NAME_STARTUP: &str = "startup";
const MODE_NAME_RUNNING: &str = "running";
const MODE_NAME_LEFT: &str = "left";
const MODE_NAME_FRONT: &str = "front";
const MODE_NAME_RIGHT: &str = "right";
const MODE_NAME_BACK: &str = "back";

const MODE_ID_STARTUP: u8 = 0;
const MODE_ID_RUNNING: u8 = 1;
const MODE_ID_LEFT: u8 = 2;
const MODE_ID_FRONT: u8 = 3;
const MODE_ID_RIGHT: u8 = 4;
const MODE_ID_BACK: u8 = 5;

pub trait Effect {
    /// Number of ticks before the phase wraps
    fn period(&self) -> u16;

    /// Render the frame for `phase`
    ///
    /// Effects only write the pixels they own; everything else keeps its
    /// previous value.
    fn render(&self, phase: u16, frame: &mut Frame);
}

/// Effect slot - enum containing all possible effects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSlot {
    /// White sweep with a fading trail, shown once after boot
    Startup(StartupEffect),
    /// Monochrome idle glow
    Breathing(BreathingEffect),
    /// One-pixel chase along a single side
    Chase(ChaseEffect),
}

impl EffectSlot {
    pub fn period(&self) -> u16 {
        match self {
            Self::Startup(effect) => effect.period(),
            Self::Breathing(effect) => effect.period(),
            Self::Chase(effect) => effect.period(),
        }
    }

    pub fn render(&self, phase: u16, frame: &mut Frame) {
        match self {
            Self::Startup(effect) => effect.render(phase, frame),
            Self::Breathing(effect) => effect.render(phase, frame),
            Self::Chase(effect) => effect.render(phase, frame),
        }
    }
}

/// Animation modes that can be selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum AnimationMode {
    #[default]
    Startup = MODE_ID_STARTUP,
    Running = MODE_ID_RUNNING,
    AnimateLeft = MODE_ID_LEFT,
    AnimateFront = MODE_ID_FRONT,
    AnimateRight = MODE_ID_RIGHT,
    AnimateBack = MODE_ID_BACK,
}

impl AnimationMode {
    pub fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            MODE_ID_STARTUP => Self::Startup,
            MODE_ID_RUNNING => Self::Running,
            MODE_ID_LEFT => Self::AnimateLeft,
            MODE_ID_FRONT => Self::AnimateFront,
            MODE_ID_RIGHT => Self::AnimateRight,
            MODE_ID_BACK => Self::AnimateBack,
            _ => return None,
        })
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Build the effect for this mode
    ///
    /// `dimmed` only affects the idle glow.
    pub fn to_slot(self, dimmed: bool) -> EffectSlot {
        match self {
            Self::Startup => EffectSlot::Startup(StartupEffect),
            Self::Running => EffectSlot::Breathing(BreathingEffect::new(dimmed)),
            Self::AnimateLeft => EffectSlot::Chase(ChaseEffect::new(LEFT)),
            Self::AnimateFront => EffectSlot::Chase(ChaseEffect::new(FRONT)),
            Self::AnimateRight => EffectSlot::Chase(ChaseEffect::new(RIGHT)),
            Self::AnimateBack => EffectSlot::Chase(ChaseEffect::new(BACK)),
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Startup => MODE_NAME_STARTUP,
            Self::Running => MODE_NAME_RUNNING,
            Self::AnimateLeft => MODE_NAME_LEFT,
            Self::AnimateFront => MODE_NAME_FRONT,
            Self::AnimateRight => MODE_NAME_RIGHT,
            Self::AnimateBack => MODE_NAME_BACK,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            MODE_NAME_STARTUP => Some(Self::Startup),
            MODE_NAME_RUNNING => Some(Self::Running),
            MODE_NAME_LEFT => Some(Self::AnimateLeft),
            MODE_NAME_FRONT => Some(Self::AnimateFront),
            MODE_NAME_RIGHT => Some(Self::AnimateRight),
            MODE_NAME_BACK => Some(Self::AnimateBack),
            _ => None,
        }
    }
}
