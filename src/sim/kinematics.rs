//! Player kinematics: horizontal drive, jumping, gravity, Euler integration
//! and the per-variant boundary policy.
//!
//! Units are world units per tick (velocities) and per tick² (gravity); one
//! call per function per tick, sequenced by [`super::tick`].

use glam::Vec2;

use super::state::{Camera, Facing, Player};
use crate::tuning::{BoundaryPolicy, Tuning};

/// Step a value toward a target without overshooting
#[inline]
pub fn move_toward(value: f32, target: f32, step: f32) -> f32 {
    if value < target {
        (value + step).min(target)
    } else {
        (value - step).max(target)
    }
}

/// Apply directional input to horizontal velocity
///
/// Held direction accelerates toward the signed speed cap by `accel` per
/// tick (sprint raises the cap; an over-cap velocity is pulled back at the
/// same rate). With nothing held, velocity decays multiplicatively and is
/// never hard-zeroed, so a sub-visual residual drift remains.
pub fn drive_horizontal(player: &mut Player, left: bool, right: bool, sprint: bool, tuning: &Tuning) {
    player.sprinting = sprint;
    player.moving = left || right;

    let cap = if sprint {
        tuning.max_speed * tuning.sprint_multiplier
    } else {
        tuning.max_speed
    };

    if right {
        player.vel.x = move_toward(player.vel.x, cap, tuning.accel);
        player.facing = Facing::Right;
    }
    if left {
        // Left wins facing when both directions are held
        player.vel.x = move_toward(player.vel.x, -cap, tuning.accel);
        player.facing = Facing::Left;
    }
    if !player.moving {
        player.vel.x *= tuning.friction;
    }
}

/// Jump if permitted: grounded only, instant impulse, ungrounds immediately
///
/// Returns whether a jump actually happened (the host gets a `Jumped` event).
pub fn try_jump(player: &mut Player, jump: bool, tuning: &Tuning) -> bool {
    if jump && player.grounded {
        player.vel.y = -tuning.jump_force;
        player.grounded = false;
        true
    } else {
        false
    }
}

/// Constant downward acceleration, applied every tick unconditionally
#[inline]
pub fn apply_gravity(player: &mut Player, tuning: &Tuning) {
    player.vel.y += tuning.gravity;
}

/// Euler integration: `position += velocity`, no sub-stepping
#[inline]
pub fn integrate(player: &mut Player) {
    player.bounds.pos += player.vel;
}

/// Horizontal bounding, per variant
///
/// Clamp: position pinned to `[0, viewport_width - player_width]`, velocity
/// untouched (no bounce). Scroll: position runs free while the camera
/// accumulates the negated displacement and a scaled distance metric.
pub fn apply_boundary(player: &mut Player, camera: &mut Camera, viewport: Vec2, tuning: &Tuning) {
    match tuning.boundary {
        BoundaryPolicy::Clamp => {
            let max_x = viewport.x - player.bounds.size.x;
            if player.bounds.pos.x < 0.0 {
                player.bounds.pos.x = 0.0;
            }
            if player.bounds.pos.x > max_x {
                player.bounds.pos.x = max_x;
            }
        }
        BoundaryPolicy::Scroll => {
            camera.offset -= player.vel.x;
            camera.distance += player.vel.x.abs() * tuning.distance_scale;
        }
    }
}
