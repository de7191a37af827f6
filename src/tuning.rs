//! Data-driven engine tuning
//!
//! Level variants differ only in constants and in their horizontal bounding
//! policy, so the engine is parameterized once and selected per level
//! instead of duplicated per variant. Values are validated at session
//! construction; a bad config is a startup error, never a runtime fault.
//!
//! Units: world units per tick for speeds, per tick² for gravity.

use core::fmt;

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Horizontal bounding policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum BoundaryPolicy {
    /// Position clamped to `[0, viewport_width - player_width]`
    #[default]
    Clamp,
    /// Infinite runner: free position, accumulating world-scroll offset and
    /// a scaled distance metric
    Scroll,
}

/// Engine parameters for one level/variant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tuning {
    /// Downward acceleration per tick²
    pub gravity: f32,
    /// Multiplicative horizontal decay per idle tick, in (0, 1)
    pub friction: f32,
    /// Per-tick velocity increment toward the speed cap
    pub accel: f32,
    /// Walking speed cap
    pub max_speed: f32,
    /// Cap multiplier while sprint is held
    pub sprint_multiplier: f32,
    /// Instant upward impulse on jump
    pub jump_force: f32,
    /// Inset from visual bounds to collision hitbox, all four sides
    pub hitbox_padding: f32,
    /// Ticks per frame advance while walking
    pub walk_frame_threshold: u32,
    /// Ticks per frame advance while sprinting (smaller = faster cycling)
    pub run_frame_threshold: u32,
    /// Length of the walk frame-set
    pub walk_frames: usize,
    /// Length of the run frame-set
    pub run_frames: usize,
    /// World units of velocity → distance metric (Scroll policy)
    pub distance_scale: f32,
    /// Goal threshold: travelled distance under Scroll, player x under Clamp
    pub goal: Option<f32>,
    /// Player visual size
    pub player_size: Vec2,
    pub boundary: BoundaryPolicy,
}

impl Default for Tuning {
    fn default() -> Self {
        Self::clamped()
    }
}

impl Tuning {
    /// Bounded-arena variant: classic keyboard-platformer feel
    pub fn clamped() -> Self {
        Self {
            gravity: 0.6,
            friction: 0.8,
            accel: 1.0,
            max_speed: 5.0,
            sprint_multiplier: 1.8,
            jump_force: 12.0,
            hitbox_padding: 0.0,
            walk_frame_threshold: 8,
            run_frame_threshold: 4,
            walk_frames: 4,
            run_frames: 4,
            distance_scale: 0.1,
            goal: None,
            player_size: Vec2::new(60.0, 80.0),
            boundary: BoundaryPolicy::Clamp,
        }
    }

    /// Infinite-runner variant: free horizontal movement, padded hitbox,
    /// distance goal
    pub fn scrolling() -> Self {
        Self {
            hitbox_padding: 6.0,
            goal: Some(500.0),
            boundary: BoundaryPolicy::Scroll,
            ..Self::clamped()
        }
    }

    /// Validate once at startup
    pub fn validate(&self) -> Result<(), TuningError> {
        for (field, value) in [
            ("gravity", self.gravity),
            ("accel", self.accel),
            ("max_speed", self.max_speed),
            ("sprint_multiplier", self.sprint_multiplier),
            ("jump_force", self.jump_force),
            ("distance_scale", self.distance_scale),
            ("player_width", self.player_size.x),
            ("player_height", self.player_size.y),
        ] {
            if value <= 0.0 || !value.is_finite() {
                return Err(TuningError::NonPositive { field, value });
            }
        }

        if !(self.friction > 0.0 && self.friction < 1.0) {
            return Err(TuningError::FrictionOutOfRange {
                value: self.friction,
            });
        }

        if self.walk_frame_threshold == 0 {
            return Err(TuningError::ZeroFrameThreshold { set: "walk" });
        }
        if self.run_frame_threshold == 0 {
            return Err(TuningError::ZeroFrameThreshold { set: "run" });
        }
        if self.walk_frames == 0 {
            return Err(TuningError::EmptyFrameSet { set: "walk" });
        }
        if self.run_frames == 0 {
            return Err(TuningError::EmptyFrameSet { set: "run" });
        }

        // The hitbox must not invert
        let max_padding = self.player_size.min_element() / 2.0;
        if self.hitbox_padding < 0.0 || self.hitbox_padding >= max_padding {
            return Err(TuningError::PaddingOutOfRange {
                padding: self.hitbox_padding,
                max: max_padding,
            });
        }

        Ok(())
    }
}

/// Configuration rejected at startup
#[derive(Debug, Clone, PartialEq)]
pub enum TuningError {
    NonPositive { field: &'static str, value: f32 },
    FrictionOutOfRange { value: f32 },
    ZeroFrameThreshold { set: &'static str },
    EmptyFrameSet { set: &'static str },
    PaddingOutOfRange { padding: f32, max: f32 },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositive { field, value } => {
                write!(f, "{field} must be positive and finite, got {value}")
            }
            Self::FrictionOutOfRange { value } => {
                write!(f, "friction must be in (0, 1), got {value}")
            }
            Self::ZeroFrameThreshold { set } => {
                write!(f, "{set} frame threshold must be at least 1 tick")
            }
            Self::EmptyFrameSet { set } => write!(f, "{set} frame-set must not be empty"),
            Self::PaddingOutOfRange { padding, max } => {
                write!(
                    f,
                    "hitbox padding {padding} out of range (must be in [0, {max}))"
                )
            }
        }
    }
}

impl std::error::Error for TuningError {}
