//! Game state and core simulation types
//!
//! All state that must survive a tick (or a save/continue round-trip) lives
//! here. The tick pipeline in [`super::tick`] is the only writer.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::animation::AnimState;
use super::rect::Rect;
use crate::consts::{SPAWN_MARGIN_Y, SPAWN_X, STARTING_LIVES};
use crate::tuning::Tuning;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GamePhase {
    /// Start screen; simulation is not running
    #[default]
    Menu,
    /// Active gameplay
    Playing,
    /// Frozen mid-run; resumes into Playing
    Paused,
}

/// Which way the player sprite faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Which sprite frame-set is active
///
/// Asset selection is the renderer's concern; the core only tracks which set
/// is live and how many frames it has (from tuning).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum FrameSet {
    #[default]
    Walk,
    Run,
}

/// The player entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Visual bounds; the collision hitbox is these inset by the tuned padding
    pub bounds: Rect,
    /// Velocity in world units per tick
    pub vel: Vec2,
    pub facing: Facing,
    /// Resting on top of a platform (recomputed every tick)
    pub grounded: bool,
    /// A direction key was held this tick
    pub moving: bool,
    /// Sprint was held this tick
    pub sprinting: bool,
    /// Sprite frame selector state
    pub anim: AnimState,
}

impl Player {
    /// Spawn at the fixed start point for the given viewport
    pub fn spawn(viewport: Vec2, size: Vec2) -> Self {
        Self {
            bounds: Rect {
                pos: Vec2::new(SPAWN_X, viewport.y - SPAWN_MARGIN_Y),
                size,
            },
            vel: Vec2::ZERO,
            facing: Facing::Right,
            grounded: false,
            moving: false,
            sprinting: false,
            anim: AnimState::default(),
        }
    }

    /// Collision hitbox: visual bounds inset on all sides
    #[inline]
    pub fn hitbox(&self, padding: f32) -> Rect {
        self.bounds.inset(padding)
    }

    /// Active frame-set, derived from the sprint flag
    #[inline]
    pub fn frame_set(&self) -> FrameSet {
        if self.sprinting {
            FrameSet::Run
        } else {
            FrameSet::Walk
        }
    }
}

/// World-scroll state for the infinite-runner boundary policy
///
/// Derived entirely from player velocity; never independently settable.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Camera {
    /// Cumulative horizontal displacement, negated (background scrolls
    /// opposite to movement)
    pub offset: f32,
    /// Cumulative `|velX| * distance_scale`
    pub distance: f32,
}

/// One-shot notifications for the host (audio cues, stage transitions)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    Jumped,
    Landed,
    /// The configured distance/position threshold was crossed.
    /// Fires exactly once per run.
    GoalReached { distance: f32 },
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub phase: GamePhase,
    pub player: Player,
    pub camera: Camera,
    /// Static platform rectangles, host-supplied (read-only to the tick)
    pub platforms: Vec<Rect>,
    /// Logical viewport size; horizontal clamp bound under the Clamp policy
    pub viewport: Vec2,
    /// Ticks elapsed while Playing (excludes menu and pause by construction)
    pub time_ticks: u64,
    pub lives: u8,
    /// Latched once the goal threshold is crossed
    pub goal_reached: bool,
    /// Pending events, drained by the host each tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Fresh state in the Menu phase with a host-supplied layout
    pub fn new(tuning: &Tuning, viewport: Vec2, platforms: Vec<Rect>) -> Self {
        Self {
            phase: GamePhase::Menu,
            player: Player::spawn(viewport, tuning.player_size),
            camera: Camera::default(),
            platforms,
            viewport,
            time_ticks: 0,
            lives: STARTING_LIVES,
            goal_reached: false,
            events: Vec::new(),
        }
    }

    /// Begin (or restart) a run: respawn, zero the clock, enter Playing
    pub fn start(&mut self, tuning: &Tuning) {
        self.player = Player::spawn(self.viewport, tuning.player_size);
        self.camera = Camera::default();
        self.time_ticks = 0;
        self.lives = STARTING_LIVES;
        self.goal_reached = false;
        self.events.clear();
        self.phase = GamePhase::Playing;
    }

    /// Replace the layout (host recomputes platforms on viewport resize)
    ///
    /// Mid-run the spawn height is re-seated so the player is not stranded
    /// above or below the relaid ground.
    pub fn set_layout(&mut self, viewport: Vec2, platforms: Vec<Rect>) {
        self.viewport = viewport;
        self.platforms = platforms;
        if self.phase != GamePhase::Menu {
            self.player.bounds.pos.y = viewport.y - SPAWN_MARGIN_Y;
        }
    }

    pub fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Read-only snapshot for the presentation layer
    pub fn render_frame(&self) -> RenderFrame {
        RenderFrame {
            player_bounds: self.player.bounds,
            facing: self.player.facing,
            frame_set: self.player.frame_set(),
            frame_index: self.player.anim.frame,
            grounded: self.player.grounded,
            camera_offset: self.camera.offset,
            distance: self.camera.distance,
            lives: self.lives,
            time_ticks: self.time_ticks,
        }
    }
}

/// What the presentation layer gets to see each frame
///
/// Drawing, DOM text, hearts, and asset readiness are all external; the core
/// always has well-defined numbers here regardless of what has loaded.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RenderFrame {
    pub player_bounds: Rect,
    pub facing: Facing,
    pub frame_set: FrameSet,
    pub frame_index: usize,
    pub grounded: bool,
    pub camera_offset: f32,
    pub distance: f32,
    pub lives: u8,
    pub time_ticks: u64,
}
