//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One discrete step per invocation, fixed tick units
//! - No randomness
//! - No rendering, DOM, or platform dependencies
//! - Exactly one writer (the tick) and one reader (the snapshot) per step

pub mod animation;
pub mod collision;
pub mod kinematics;
pub mod rect;
pub mod state;
pub mod tick;

pub use animation::AnimState;
pub use collision::resolve_platform_collisions;
pub use rect::Rect;
pub use state::{
    Camera, Facing, FrameSet, GameEvent, GamePhase, GameState, Player, RenderFrame,
};
pub use tick::{TickInput, tick};
