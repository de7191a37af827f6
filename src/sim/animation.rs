//! Sprite frame selection
//!
//! A counter-driven state machine: idle pins frame 0, grounded movement
//! cycles frames at a sprint-dependent rate, airborne movement freezes on
//! the current frame. Deterministic, no randomness.

use serde::{Deserialize, Serialize};

use crate::tuning::Tuning;

/// Frame-cycling state for the player sprite
///
/// Invariant: `frame` is always within the active frame-set's length.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnimState {
    /// Index into the active frame-set
    pub frame: usize,
    /// Ticks accumulated toward the next frame advance
    pub counter: u32,
}

impl AnimState {
    /// Advance the selector by one tick
    ///
    /// `moving`/`grounded`/`sprinting` are the player flags sampled this
    /// tick; the sprint flag picks both the frame-set length and the
    /// cycling threshold (smaller threshold, faster cycling).
    pub fn advance(&mut self, moving: bool, grounded: bool, sprinting: bool, tuning: &Tuning) {
        let (frames, threshold) = if sprinting {
            (tuning.run_frames, tuning.run_frame_threshold)
        } else {
            (tuning.walk_frames, tuning.walk_frame_threshold)
        };

        // A set switch can leave the index past the new set's end; fold it
        // back before anything reads it.
        self.frame %= frames;

        if !moving {
            // Idle pose
            self.frame = 0;
            self.counter = 0;
        } else if grounded {
            self.counter += 1;
            if self.counter >= threshold {
                self.frame = (self.frame + 1) % frames;
                self.counter = 0;
            }
        }
        // Moving but airborne: hold the current frame
    }
}
