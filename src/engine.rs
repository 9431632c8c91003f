//! Animation engine
//!
//! Holds the active mode, its phase counter and the drawable frame. Each
//! display tick renders the current phase and then advances it; the phase
//! wraps at the mode's period. Startup is the only mode that changes on its
//! own: when it wraps the engine moves on to Running.

#[cfg(feature = "log")]
use esp_println::println;

use crate::effect::{AnimationMode, EffectSlot};
use crate::pixel_map::Frame;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnimationEngine {
    mode: AnimationMode,
    phase: u16,
    animating: bool,
    frame: Frame,
}

impl AnimationEngine {
    /// Create an engine in Startup with phase 0 and a dark frame
    pub const fn new() -> Self {
        Self {
            mode: AnimationMode::Startup,
            phase: 0,
            animating: true,
            frame: Frame::new(),
        }
    }

    pub const fn mode(&self) -> AnimationMode {
        self.mode
    }

    pub const fn phase(&self) -> u16 {
        self.phase
    }

    pub const fn is_animating(&self) -> bool {
        self.animating
    }

    /// Master switch: when off, [`step`](Self::step) leaves the frame alone
    pub fn set_animating(&mut self, animating: bool) {
        self.animating = animating;
    }

    pub const fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Switch to `mode` and restart its phase
    pub fn select(&mut self, mode: AnimationMode) {
        #[cfg(feature = "log")]
        if mode != self.mode {
            println!(
                "[AnimationEngine.select] {} -> {}",
                self.mode.as_str(),
                mode.as_str()
            );
        }
        self.mode = mode;
        self.phase = 0;
    }

    /// Switch to a mode given by its numeric id
    ///
    /// Unknown ids blank the frame and restart from Startup.
    pub fn select_raw(&mut self, raw: u8) {
        if let Some(mode) = AnimationMode::from_raw(raw) {
            self.select(mode);
        } else {
            #[cfg(feature = "log")]
            println!("[AnimationEngine.select_raw] unknown mode {}, restarting", raw);
            self.clear();
            self.reset();
        }
    }

    /// Back to Startup, phase 0
    pub fn reset(&mut self) {
        self.select(AnimationMode::Startup);
    }

    /// Turn every pixel off
    pub fn clear(&mut self) {
        self.frame.clear();
    }

    /// Render one tick of the current mode and advance the phase
    pub fn step(&mut self, dimmed: bool) {
        if !self.animating {
            return;
        }
        let slot = self.mode.to_slot(dimmed);
        slot.render(self.phase, &mut self.frame);
        self.advance(&slot);
    }

    fn advance(&mut self, slot: &EffectSlot) {
        self.phase += 1;
        if self.phase < slot.period() {
            return;
        }
        self.phase = 0;
        if self.mode == AnimationMode::Startup {
            #[cfg(feature = "log")]
            println!("[AnimationEngine.advance] startup finished");
            self.mode = AnimationMode::Running;
        }
    }
}

impl Default for AnimationEngine {
    fn default() -> Self {
        Self::new()
    }
}
