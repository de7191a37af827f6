//! Axis-aligned rectangle geometry for player bounds and platforms
//!
//! World coordinates: x grows rightward, y grows downward (screen space).
//! A rect is its top-left corner plus a size; `bottom()` is therefore the
//! numerically largest y edge.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle in world space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (both non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    /// Strict AABB overlap test
    ///
    /// Edge-touching rects do NOT overlap; a player resting exactly on a
    /// platform top only re-grounds after gravity moves it inside.
    #[inline]
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Shrink the rect by `padding` on all four sides
    ///
    /// Used to derive the collision hitbox from visual bounds. Padding must
    /// be small enough that the rect does not invert (validated in tuning).
    pub fn inset(&self, padding: f32) -> Rect {
        Rect {
            pos: self.pos + Vec2::splat(padding),
            size: self.size - Vec2::splat(2.0 * padding),
        }
    }

    /// Check if a point is inside the rect (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }
}
