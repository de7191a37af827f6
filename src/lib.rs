//! Icarus Core - deterministic side-scrolling platformer simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, collisions, animation, state)
//! - `session`: Lifecycle control surface (start/pause/resume/reset, events)
//! - `tuning`: Data-driven, validated engine parameters per level variant
//!
//! The crate knows nothing about rendering, DOM panels, or assets: the host
//! drives `Session::tick` once per frame and hands the returned
//! [`sim::RenderFrame`] to its own presentation layer.

pub mod session;
pub mod sim;
pub mod tuning;

pub use session::Session;
pub use sim::{GameEvent, GamePhase, GameState, Rect, RenderFrame, TickInput};
pub use tuning::{BoundaryPolicy, Tuning, TuningError};

/// Game configuration constants
pub mod consts {
    /// Nominal seconds per tick (one tick per animation frame at 60 Hz);
    /// used only for elapsed-time accounting, never inside the physics
    pub const SIM_DT: f32 = 1.0 / 60.0;

    /// Fixed spawn x position
    pub const SPAWN_X: f32 = 100.0;
    /// Spawn height above the viewport bottom
    pub const SPAWN_MARGIN_Y: f32 = 150.0;

    /// Hearts at the start of a run
    pub const STARTING_LIVES: u8 = 3;
}
