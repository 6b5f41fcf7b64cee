//! Axis-aligned rectangle geometry for the runner and its obstacles
//!
//! Scene coordinates: x grows rightward, y grows downward, the ground line
//! sits at `consts::GROUND_Y`. Entities standing on the ground have their
//! bottom edge at the ground line.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
    pub min: Vec2,
    /// Width and height (non-negative)
    pub size: Vec2,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    /// Left edge
    #[inline]
    pub fn left(&self) -> f32 {
        self.min.x
    }

    /// Right edge
    #[inline]
    pub fn right(&self) -> f32 {
        self.min.x + self.size.x
    }

    /// Top edge
    #[inline]
    pub fn top(&self) -> f32 {
        self.min.y
    }

    /// Bottom edge
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.min.y + self.size.y
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Get the center point
    pub fn center(&self) -> Vec2 {
        self.min + self.size / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 40.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 60.0);
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(r.contains_point(Vec2::new(50.0, 25.0)));
        // Edges are inclusive for containment
        assert!(r.contains_point(Vec2::new(0.0, 0.0)));
        assert!(r.contains_point(Vec2::new(100.0, 50.0)));
        assert!(!r.contains_point(Vec2::new(101.0, 25.0)));
        assert!(!r.contains_point(Vec2::new(50.0, -1.0)));
    }

    #[test]
    fn test_center() {
        let r = Rect::new(10.0, 10.0, 20.0, 40.0);
        assert_eq!(r.center(), Vec2::new(20.0, 30.0));
    }
}
