//! Axis-aligned rectangles and circles
//!
//! Screen-style coordinates: x grows right, y grows down, origin at the
//! top-left corner of the play field.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, stored as top-left corner plus size
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(width, height),
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.min + self.size * 0.5
    }

    /// Point inside (or on) the rectangle nearest to `p`
    pub fn closest_point(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.min + self.size)
    }
}

/// A circle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Circle-rectangle overlap via the nearest point on the rectangle
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let closest = rect.closest_point(self.center);
        self.center.distance_squared(closest) < self.radius * self.radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
        assert_eq!(r.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_circle_rect_side_and_corner() {
        let rect = Rect::new(0.0, 0.0, 20.0, 10.0);

        // Beside the right edge, inside radius
        assert!(Circle::new(Vec2::new(25.0, 5.0), 6.0).intersects_rect(&rect));
        // Beside the right edge, out of reach
        assert!(!Circle::new(Vec2::new(27.0, 5.0), 6.0).intersects_rect(&rect));
        // Diagonal from the corner: within the bounding box but not the circle
        assert!(!Circle::new(Vec2::new(24.0, 14.0), 5.0).intersects_rect(&rect));
        // Center inside the rectangle
        assert!(Circle::new(Vec2::new(5.0, 5.0), 1.0).intersects_rect(&rect));
    }
}
