//! Platform collision resolution
//!
//! Only top-of-platform landings are resolved: an overlap between the
//! player's inset hitbox and a platform, while vertical velocity is
//! non-negative, snaps the player onto the platform top. Side and overhead
//! contacts pass through unresolved, and there is no swept test, so a
//! sufficiently fast fall can tunnel a thin platform. Known, accepted
//! behavior of the source material.

use super::rect::Rect;
use super::state::Player;

/// Resolve the player against every platform, post-integration
///
/// The caller must clear `grounded` before this pass; the pass re-derives it
/// from scratch. Zero platforms is valid (the player simply never grounds).
pub fn resolve_platform_collisions(player: &mut Player, platforms: &[Rect], padding: f32) {
    for platform in platforms {
        // Recompute per platform: an earlier snap moves the hitbox
        let hitbox = player.hitbox(padding);
        if hitbox.overlaps(platform) && player.vel.y >= 0.0 {
            // Land: hitbox bottom onto the platform top
            player.bounds.pos.y = platform.top() - player.bounds.size.y + padding;
            player.vel.y = 0.0;
            player.grounded = true;
        }
    }
}
