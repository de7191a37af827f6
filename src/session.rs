//! Session lifecycle and the host-facing control surface
//!
//! `menu → playing ⇄ paused; playing → menu (reset)`. The host's frame loop
//! owns scheduling: while playing and unpaused it calls [`Session::tick`]
//! once per frame and hands the returned snapshot to the presentation layer.
//! While paused it simply stops calling (ticking anyway is harmless; the
//! core guards itself).

use glam::Vec2;

use crate::consts::SIM_DT;
use crate::sim::rect::Rect;
use crate::sim::state::{GameEvent, GamePhase, GameState, RenderFrame};
use crate::sim::tick::{TickInput, tick};
use crate::tuning::{Tuning, TuningError};

/// A configured, running (or runnable) game
#[derive(Debug, Clone)]
pub struct Session {
    tuning: Tuning,
    state: GameState,
    /// Snapshot of the most recent tick
    frame: RenderFrame,
}

impl Session {
    /// Validate the tuning and build a session in the Menu phase
    ///
    /// `viewport` and `platforms` come from the host environment, which
    /// recomputes them on resize and pushes updates via [`Session::set_layout`].
    pub fn new(tuning: Tuning, viewport: Vec2, platforms: Vec<Rect>) -> Result<Self, TuningError> {
        tuning.validate()?;
        let state = GameState::new(&tuning, viewport, platforms);
        let frame = state.render_frame();
        log::info!(
            "session created ({:?} boundary, {} platforms)",
            tuning.boundary,
            state.platforms.len()
        );
        Ok(Self {
            tuning,
            state,
            frame,
        })
    }

    /// Menu (or mid-run) → a fresh run
    pub fn start(&mut self) {
        self.state.start(&self.tuning);
        self.frame = self.state.render_frame();
        log::info!("run started");
    }

    /// Freeze the run; the tick driver should stop invoking `tick`
    pub fn pause(&mut self) {
        if self.state.phase == GamePhase::Playing {
            self.state.phase = GamePhase::Paused;
            log::info!("paused at tick {}", self.state.time_ticks);
        }
    }

    /// Resume a paused run
    pub fn resume(&mut self) {
        if self.state.phase == GamePhase::Paused {
            self.state.phase = GamePhase::Playing;
            log::info!("resumed at tick {}", self.state.time_ticks);
        }
    }

    pub fn toggle_pause(&mut self) {
        match self.state.phase {
            GamePhase::Playing => self.pause(),
            GamePhase::Paused => self.resume(),
            GamePhase::Menu => {}
        }
    }

    /// Abandon the run and return to the menu; all run state is superseded
    pub fn reset(&mut self) {
        let viewport = self.state.viewport;
        let platforms = std::mem::take(&mut self.state.platforms);
        self.state = GameState::new(&self.tuning, viewport, platforms);
        self.frame = self.state.render_frame();
        log::info!("reset to menu");
    }

    /// Advance one tick and return the renderable snapshot
    pub fn tick(&mut self, input: &TickInput) -> &RenderFrame {
        tick(&mut self.state, input, &self.tuning);
        self.frame = self.state.render_frame();
        &self.frame
    }

    /// Take this tick's pending events (goal signal, audio cues)
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.state.events)
    }

    /// Host-recomputed platform layout (viewport resize)
    pub fn set_layout(&mut self, viewport: Vec2, platforms: Vec<Rect>) {
        self.state.set_layout(viewport, platforms);
    }

    /// Explicit pause flag for the frame driver
    pub fn is_paused(&self) -> bool {
        self.state.phase == GamePhase::Paused
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Seconds of play time; pause never accumulates because paused ticks
    /// never run
    pub fn elapsed_secs(&self) -> f32 {
        self.state.time_ticks as f32 * SIM_DT
    }

    pub fn lives(&self) -> u8 {
        self.state.lives
    }

    /// Deduct one life (host-signaled: hazards are the host's rules).
    /// Losing the last one ends the run back at the menu.
    pub fn lose_life(&mut self) -> u8 {
        self.state.lives = self.state.lives.saturating_sub(1);
        if self.state.lives == 0 && self.state.phase != GamePhase::Menu {
            log::info!("out of lives, run over");
            self.state.phase = GamePhase::Menu;
        }
        self.state.lives
    }

    pub fn goal_reached(&self) -> bool {
        self.state.goal_reached
    }

    /// Latest snapshot without advancing (e.g. to redraw while paused)
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }
}
