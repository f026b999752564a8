//! Animation system
//!
//! Drives the model once per display refresh:
//! - Rotation stepping by the configured speed
//! - Snapshot of projected vertices and edges
//! - Double buffering so readers always see a complete frame

use std::time::{Duration, Instant};

use tesseract_core::{FrameSnapshot, HypercubeModel};
use tesseract_input::ControlIntent;

/// Per-frame driver for a [`HypercubeModel`]
///
/// Owns two snapshot buffers. [`AnimationSystem::update`] writes the new
/// frame into the back buffer and swaps it to the front, so
/// [`AnimationSystem::front`] always returns the last completed frame.
pub struct AnimationSystem {
    front: FrameSnapshot,
    back: FrameSnapshot,
    frame_count: u64,
    started: Instant,
}

impl AnimationSystem {
    /// Create an animation system showing the model's current state
    pub fn new(model: &HypercubeModel) -> Self {
        let front = model.snapshot();
        Self {
            front,
            back: front,
            frame_count: 0,
            started: Instant::now(),
        }
    }

    /// Run one animation frame
    ///
    /// Advances the rotation by the model's speed and returns the new frame.
    pub fn update(&mut self, model: &mut HypercubeModel) -> &FrameSnapshot {
        model.step_frame();
        self.back = model.snapshot();
        std::mem::swap(&mut self.front, &mut self.back);
        self.frame_count += 1;
        &self.front
    }

    /// Apply a UI intent, logging rejected ones
    ///
    /// Returns whether the intent was applied.
    pub fn apply_intent(&mut self, model: &mut HypercubeModel, intent: ControlIntent) -> bool {
        match intent.apply(model) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("Ignoring {:?}: {}", intent, e);
                false
            }
        }
    }

    /// The last completed frame
    #[inline]
    pub fn front(&self) -> &FrameSnapshot {
        &self.front
    }

    /// Frames produced so far
    #[inline]
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }

    /// Wall time since creation
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }
}
