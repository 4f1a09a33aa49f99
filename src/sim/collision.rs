//! Axis-aligned bounding-box overlap
//!
//! Boxes live in ground-relative coordinates: x grows right, y grows up from
//! the ground line. Overlap uses strict inequalities, so boxes that only share
//! an edge do not collide.

use glam::Vec2;

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Left/bottom corner
    pub min: Vec2,
    /// Right/top corner
    pub max: Vec2,
}

impl Aabb {
    /// Box with its left/bottom corner at (x, y)
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            max: Vec2::new(x + width, y + height),
        }
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.max.y
    }

    /// True iff the projections overlap on both axes
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}
