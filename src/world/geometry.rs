//! Screen-space geometry shared by every gameplay entity.
//!
//! Gameplay runs in screen pixels with the origin at the top-left corner and
//! y growing downward. Rendering converts to Bevy's centered, y-up world space
//! only when transforms are synced.

use bevy::prelude::*;

/// Current drawable area in logical pixels.
///
/// Refreshed from the primary window every tick, so a resized window is
/// respected on the next update.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Inclusive containment test against `[0, width] × [0, height]`.
    pub fn contains(&self, point: Vec2) -> bool {
        (0.0..=self.width).contains(&point.x) && (0.0..=self.height).contains(&point.y)
    }

    /// Convert a screen-space point into world space for a centered 2D camera.
    pub fn to_world(&self, point: Vec2) -> Vec2 {
        Vec2::new(point.x - self.width / 2.0, self.height / 2.0 - point.y)
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// Axis-aligned bounding rect of an entity, in screen space.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct ScreenRect {
    pub center: Vec2,
    pub size: Vec2,
}

impl ScreenRect {
    pub fn new(center: Vec2, size: Vec2) -> Self {
        Self { center, size }
    }

    pub fn left(&self) -> f32 {
        self.center.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.center.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.center.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.center.y + self.size.y / 2.0
    }

    pub fn translate(&mut self, delta: Vec2) {
        self.center += delta;
    }

    /// Strict overlap test; rects that only share an edge do not collide.
    pub fn intersects(&self, other: &ScreenRect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Whether the whole rect lies inside the screen, edges included.
    pub fn fits_within(&self, bounds: ScreenBounds) -> bool {
        self.left() >= 0.0
            && self.top() >= 0.0
            && self.right() <= bounds.width
            && self.bottom() <= bounds.height
    }

    /// Move the rect so it lies fully inside the screen.
    ///
    /// A rect larger than the screen is centered on that axis.
    pub fn clamp_within(&mut self, bounds: ScreenBounds) {
        self.center.x = clamp_axis(self.center.x, self.size.x, bounds.width);
        self.center.y = clamp_axis(self.center.y, self.size.y, bounds.height);
    }
}

fn clamp_axis(center: f32, extent: f32, limit: f32) -> f32 {
    let half = extent / 2.0;
    if extent >= limit {
        limit / 2.0
    } else {
        center.clamp(half, limit - half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn touching_edges_do_not_intersect() {
        let a = ScreenRect::new(Vec2::new(10.0, 10.0), Vec2::splat(20.0));
        let b = ScreenRect::new(Vec2::new(30.0, 10.0), Vec2::splat(20.0));
        assert!(!a.intersects(&b));

        let c = ScreenRect::new(Vec2::new(29.0, 10.0), Vec2::splat(20.0));
        assert!(a.intersects(&c));
    }

    #[test]
    fn clamp_keeps_rect_on_screen() {
        let bounds = ScreenBounds::new(200.0, 100.0);
        let mut rect = ScreenRect::new(Vec2::new(-50.0, 500.0), Vec2::splat(20.0));
        rect.clamp_within(bounds);
        assert_eq!(rect.center, Vec2::new(10.0, 90.0));
    }

    #[test]
    fn fits_within_includes_edges() {
        let bounds = ScreenBounds::new(100.0, 100.0);
        assert!(ScreenRect::new(Vec2::splat(10.0), Vec2::splat(20.0)).fits_within(bounds));
        assert!(!ScreenRect::new(Vec2::new(9.0, 50.0), Vec2::splat(20.0)).fits_within(bounds));
    }

    #[test]
    fn screen_to_world_flips_y_around_center() {
        let bounds = ScreenBounds::new(200.0, 100.0);
        assert_eq!(bounds.to_world(Vec2::ZERO), Vec2::new(-100.0, 50.0));
        assert_eq!(bounds.to_world(Vec2::new(100.0, 50.0)), Vec2::ZERO);
    }
}
