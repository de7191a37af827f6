//! The per-tick state transition
//!
//! One call advances exactly one discrete simulation step. The core owns no
//! timers and schedules nothing; the host's frame loop decides when (and
//! whether) to invoke this, which makes the whole simulation pausable,
//! resumable, and testable by calling it a fixed number of times.
//!
//! Tick order is fixed: drive → jump → gravity → integrate → unground →
//! resolve collisions → boundary → goal → animation.

use super::collision::resolve_platform_collisions;
use super::kinematics::{apply_boundary, apply_gravity, drive_horizontal, integrate, try_jump};
use super::state::{GameEvent, GamePhase, GameState};
use crate::tuning::{BoundaryPolicy, Tuning};

/// Input flags sampled once per tick (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub jump: bool,
    pub sprint: bool,
    /// Pause toggle edge (pressed this tick, not held)
    pub pause: bool,
}

/// Advance the game state by one tick
///
/// A no-op outside the Playing phase, except that the pause toggle flips
/// Playing ↔ Paused. The host is expected to stop invoking `tick` while
/// paused anyway; this guard just makes the core safe against a driver that
/// does not.
pub fn tick(state: &mut GameState, input: &TickInput, tuning: &Tuning) {
    if input.pause {
        match state.phase {
            GamePhase::Playing => {
                state.phase = GamePhase::Paused;
                return;
            }
            GamePhase::Paused => {
                state.phase = GamePhase::Playing;
            }
            GamePhase::Menu => {}
        }
    }

    if state.phase != GamePhase::Playing {
        return;
    }

    // Events describe this tick only
    state.events.clear();

    let was_grounded = state.player.grounded;

    drive_horizontal(
        &mut state.player,
        input.left,
        input.right,
        input.sprint,
        tuning,
    );

    if try_jump(&mut state.player, input.jump, tuning) {
        state.push_event(GameEvent::Jumped);
    }

    apply_gravity(&mut state.player, tuning);
    integrate(&mut state.player);

    // Re-derived from scratch every tick: stepping off a platform becomes
    // airborne on the very next tick
    state.player.grounded = false;
    resolve_platform_collisions(&mut state.player, &state.platforms, tuning.hitbox_padding);

    if !was_grounded && state.player.grounded {
        state.push_event(GameEvent::Landed);
    }

    apply_boundary(
        &mut state.player,
        &mut state.camera,
        state.viewport,
        tuning,
    );

    check_goal(state, tuning);

    let (moving, grounded, sprinting) = (
        state.player.moving,
        state.player.grounded,
        state.player.sprinting,
    );
    state.player.anim.advance(moving, grounded, sprinting, tuning);

    state.time_ticks += 1;
}

/// Latch and emit the goal signal when the threshold is crossed
///
/// Scroll variants measure travelled distance; clamped variants measure the
/// player's x position. Consuming the event (e.g. to navigate to the next
/// stage) is the host's business.
fn check_goal(state: &mut GameState, tuning: &Tuning) {
    if state.goal_reached {
        return;
    }
    let Some(goal) = tuning.goal else {
        return;
    };

    // The metric is travelled distance for runners, raw x for bounded arenas
    let metric = match tuning.boundary {
        BoundaryPolicy::Scroll => state.camera.distance,
        BoundaryPolicy::Clamp => state.player.bounds.left(),
    };

    if metric >= goal {
        state.goal_reached = true;
        log::debug!(
            "goal crossed at {metric:.1} (tick {})",
            state.time_ticks
        );
        state.push_event(GameEvent::GoalReached { distance: metric });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rect::Rect;
    use glam::Vec2;

    const VIEWPORT: Vec2 = Vec2::new(800.0, 600.0);

    /// Full-width ground platform, top at y=560
    fn ground() -> Vec<Rect> {
        vec![Rect::new(0.0, 560.0, 800.0, 40.0)]
    }

    fn playing_state(tuning: &Tuning) -> GameState {
        let mut state = GameState::new(tuning, VIEWPORT, ground());
        state.start(tuning);
        state
    }

    /// Run ticks until the player has settled on the ground
    fn settle(state: &mut GameState, tuning: &Tuning) {
        for _ in 0..300 {
            tick(state, &TickInput::default(), tuning);
            if state.player.grounded {
                return;
            }
        }
        panic!("player never settled");
    }

    const RIGHT: TickInput = TickInput {
        left: false,
        right: true,
        jump: false,
        sprint: false,
        pause: false,
    };

    #[test]
    fn test_settles_on_ground() {
        let tuning = Tuning::clamped();
        let mut state = playing_state(&tuning);
        settle(&mut state, &tuning);

        assert!(state.player.grounded);
        assert_eq!(state.player.vel.y, 0.0);
        assert_eq!(
            state.player.bounds.bottom(),
            560.0 + tuning.hitbox_padding
        );
    }

    #[test]
    fn test_grounded_position_is_fixed_without_input() {
        let tuning = Tuning::clamped();
        let mut state = playing_state(&tuning);
        settle(&mut state, &tuning);

        // Let residual velX decay to the visual epsilon
        for _ in 0..100 {
            tick(&mut state, &TickInput::default(), &tuning);
        }
        let pos = state.player.bounds.pos;
        for _ in 0..50 {
            tick(&mut state, &TickInput::default(), &tuning);
        }
        assert!((state.player.bounds.pos - pos).length() < 0.01);
        assert!(state.player.vel.x.abs() < 0.01);
    }

    #[test]
    fn test_jump_scenario_flight_time() {
        let tuning = Tuning::clamped();
        let mut state = playing_state(&tuning);
        settle(&mut state, &tuning);

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, &tuning);
        // Jump tick: impulse applied, then gravity, airborne
        assert!(!state.player.grounded);
        assert_eq!(
            state.player.vel.y,
            -tuning.jump_force + tuning.gravity
        );
        assert!(state.events.contains(&GameEvent::Jumped));

        // Lands within ceil(2 * jump_force / gravity) further ticks
        let flight = (2.0 * tuning.jump_force / tuning.gravity).ceil() as u32;
        let mut landed_events = 0;
        for _ in 0..flight {
            tick(&mut state, &TickInput::default(), &tuning);
            landed_events += state
                .events
                .iter()
                .filter(|e| **e == GameEvent::Landed)
                .count();
        }
        assert!(state.player.grounded);
        assert_eq!(state.player.vel.y, 0.0);
        assert_eq!(landed_events, 1);
    }

    #[test]
    fn test_airborne_jump_input_ignored() {
        let tuning = Tuning::clamped();
        let mut state = playing_state(&tuning);
        settle(&mut state, &tuning);

        let jump = TickInput {
            jump: true,
            ..Default::default()
        };
        tick(&mut state, &jump, &tuning);
        let vel_after_first = state.player.vel.y;

        // Held jump while airborne must not re-trigger
        tick(&mut state, &jump, &tuning);
        assert_eq!(
            state.player.vel.y,
            vel_after_first + tuning.gravity
        );
        assert!(!state.events.contains(&GameEvent::Jumped));
    }

    #[test]
    fn test_walking_off_platform_ungrounds_next_tick() {
        let tuning = Tuning::clamped();
        // Narrow ledge under the spawn point
        let mut state = GameState::new(&tuning, VIEWPORT, vec![Rect::new(80.0, 560.0, 120.0, 40.0)]);
        state.start(&tuning);
        settle(&mut state, &tuning);

        for _ in 0..200 {
            tick(&mut state, &RIGHT, &tuning);
            if !state.player.grounded {
                break;
            }
        }
        assert!(!state.player.grounded);
        assert!(state.player.vel.y > 0.0);
    }

    #[test]
    fn test_pause_toggle_freezes_and_resumes() {
        let tuning = Tuning::clamped();
        let mut state = playing_state(&tuning);
        settle(&mut state, &tuning);

        let pause = TickInput {
            pause: true,
            ..Default::default()
        };
        tick(&mut state, &pause, &tuning);
        assert_eq!(state.phase, GamePhase::Paused);

        // Ticks while paused change nothing
        let frozen = state.player.bounds.pos;
        let frozen_ticks = state.time_ticks;
        for _ in 0..10 {
            tick(&mut state, &RIGHT, &tuning);
        }
        assert_eq!(state.player.bounds.pos, frozen);
        assert_eq!(state.time_ticks, frozen_ticks);

        // Toggle back: the unpausing tick also advances
        tick(&mut state, &pause, &tuning);
        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.time_ticks, frozen_ticks + 1);
    }

    #[test]
    fn test_menu_phase_is_inert() {
        let tuning = Tuning::clamped();
        let mut state = GameState::new(&tuning, VIEWPORT, ground());

        let pos = state.player.bounds.pos;
        for _ in 0..10 {
            tick(&mut state, &RIGHT, &tuning);
        }
        assert_eq!(state.phase, GamePhase::Menu);
        assert_eq!(state.player.bounds.pos, pos);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_scroll_distance_accumulation() {
        let tuning = Tuning::scrolling();
        let mut state = playing_state(&tuning);
        settle(&mut state, &tuning);

        // Reach the walk cap, then measure over a fixed window
        for _ in 0..20 {
            tick(&mut state, &RIGHT, &tuning);
        }
        assert_eq!(state.player.vel.x, tuning.max_speed);

        let base_distance = state.camera.distance;
        let base_offset = state.camera.offset;
        let n = 50;
        for _ in 0..n {
            tick(&mut state, &RIGHT, &tuning);
        }
        let expected = n as f32 * tuning.max_speed * tuning.distance_scale;
        assert!((state.camera.distance - base_distance - expected).abs() < 1e-3);
        assert!((base_offset - state.camera.offset - n as f32 * tuning.max_speed).abs() < 1e-3);
    }

    #[test]
    fn test_scroll_never_clamps_position() {
        let mut tuning = Tuning::scrolling();
        tuning.goal = None;
        let mut state = playing_state(&tuning);
        settle(&mut state, &tuning);

        for _ in 0..2000 {
            tick(&mut state, &RIGHT, &tuning);
        }
        assert!(state.player.bounds.left() > VIEWPORT.x);
    }

    #[test]
    fn test_goal_event_fires_once() {
        let mut tuning = Tuning::scrolling();
        tuning.goal = Some(50.0);
        let mut state = playing_state(&tuning);
        settle(&mut state, &tuning);

        let mut goal_events = 0;
        for _ in 0..2000 {
            tick(&mut state, &RIGHT, &tuning);
            goal_events += state
                .events
                .iter()
                .filter(|e| matches!(e, GameEvent::GoalReached { .. }))
                .count();
        }
        assert!(state.goal_reached);
        assert_eq!(goal_events, 1);
    }

    #[test]
    fn test_goal_by_position_in_clamped_variant() {
        let mut tuning = Tuning::clamped();
        tuning.goal = Some(300.0);
        let mut state = playing_state(&tuning);
        settle(&mut state, &tuning);

        let mut fired = false;
        for _ in 0..500 {
            tick(&mut state, &RIGHT, &tuning);
            fired |= state
                .events
                .iter()
                .any(|e| matches!(e, GameEvent::GoalReached { .. }));
        }
        assert!(fired);
        assert!(state.player.bounds.left() >= 300.0);
    }

    #[test]
    fn test_determinism_identical_scripts() {
        let tuning = Tuning::scrolling();
        let mut a = playing_state(&tuning);
        let mut b = playing_state(&tuning);

        let script = |i: u64| TickInput {
            right: i % 3 != 0,
            left: i % 17 == 0,
            jump: i % 50 == 0,
            sprint: i % 7 < 3,
            pause: false,
        };

        for i in 0..600 {
            let input = script(i);
            tick(&mut a, &input, &tuning);
            tick(&mut b, &input, &tuning);
        }

        assert_eq!(a.player.bounds.pos, b.player.bounds.pos);
        assert_eq!(a.player.vel, b.player.vel);
        assert_eq!(a.player.anim.frame, b.player.anim.frame);
        assert_eq!(a.camera.distance, b.camera.distance);
        assert_eq!(a.time_ticks, b.time_ticks);
    }

    #[test]
    fn test_save_continue_round_trip_matches() {
        let tuning = Tuning::scrolling();
        let mut live = playing_state(&tuning);

        let script = |i: u64| TickInput {
            right: true,
            jump: i % 40 == 0,
            sprint: i % 2 == 0,
            ..Default::default()
        };

        for i in 0..200 {
            tick(&mut live, &script(i), &tuning);
        }

        // Snapshot mid-run, keep ticking both
        let json = serde_json::to_string(&live).unwrap();
        let mut restored: GameState = serde_json::from_str(&json).unwrap();

        for i in 200..400 {
            let input = script(i);
            tick(&mut live, &input, &tuning);
            tick(&mut restored, &input, &tuning);
        }

        assert_eq!(live.player.bounds.pos, restored.player.bounds.pos);
        assert_eq!(live.camera.distance, restored.camera.distance);
        assert_eq!(live.time_ticks, restored.time_ticks);
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        fn input_strategy() -> impl Strategy<Value = TickInput> {
            (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
                |(left, right, jump, sprint)| TickInput {
                    left,
                    right,
                    jump,
                    sprint,
                    pause: false,
                },
            )
        }

        proptest! {
            #[test]
            fn grounded_implies_zero_vertical_velocity(
                inputs in proptest::collection::vec(input_strategy(), 1..400)
            ) {
                let tuning = Tuning::clamped();
                let mut state = GameState::new(&tuning, VIEWPORT, vec![
                    Rect::new(0.0, 560.0, 800.0, 40.0),
                    Rect::new(300.0, 480.0, 150.0, 20.0),
                ]);
                state.start(&tuning);

                for input in &inputs {
                    tick(&mut state, input, &tuning);
                    if state.player.grounded {
                        prop_assert_eq!(state.player.vel.y, 0.0);
                    }
                }
            }

            #[test]
            fn frame_index_stays_in_active_set(
                inputs in proptest::collection::vec(input_strategy(), 1..400)
            ) {
                let tuning = Tuning::scrolling();
                let mut state = GameState::new(&tuning, VIEWPORT, vec![
                    Rect::new(0.0, 560.0, 800.0, 40.0),
                ]);
                state.start(&tuning);

                for input in &inputs {
                    tick(&mut state, input, &tuning);
                    let len = if state.player.sprinting {
                        tuning.run_frames
                    } else {
                        tuning.walk_frames
                    };
                    prop_assert!(state.player.anim.frame < len);
                    if !state.player.moving {
                        prop_assert_eq!(state.player.anim.frame, 0);
                    }
                }
            }

            #[test]
            fn replaying_a_script_is_deterministic(
                inputs in proptest::collection::vec(input_strategy(), 1..200)
            ) {
                let tuning = Tuning::clamped();
                let mut a = GameState::new(&tuning, VIEWPORT, vec![
                    Rect::new(0.0, 560.0, 800.0, 40.0),
                ]);
                let mut b = a.clone();
                a.start(&tuning);
                b.start(&tuning);

                for input in &inputs {
                    tick(&mut a, input, &tuning);
                    tick(&mut b, input, &tuning);
                }
                prop_assert_eq!(a.player.bounds.pos, b.player.bounds.pos);
                prop_assert_eq!(a.player.vel, b.player.vel);
                prop_assert_eq!(a.player.anim.frame, b.player.anim.frame);
            }
        }
    }
}
