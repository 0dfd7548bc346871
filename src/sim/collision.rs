//! Collision primitives
//!
//! The only shape pair this game needs: a circle (the ball) against an
//! axis-aligned rectangle (a paddle).

use glam::Vec2;

/// An axis-aligned rectangle, positioned by its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }
}

/// Check whether a circle overlaps an axis-aligned rectangle
///
/// Clamps the circle center onto the rectangle to find the closest point,
/// then compares squared distances. Touching counts as overlap.
pub fn circle_rect_overlap(center: Vec2, radius: f32, rect: &Rect) -> bool {
    let closest = Vec2::new(
        center.x.clamp(rect.x, rect.x + rect.w),
        center.y.clamp(rect.y, rect.y + rect.h),
    );
    center.distance_squared(closest) <= radius * radius
}
