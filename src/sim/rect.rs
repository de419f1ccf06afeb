//! Axis-aligned bounding region
//!
//! Screen coordinates: origin at the top-left, y grows downward.

use glam::Vec2;
use serde::Serialize;

/// An axis-aligned rectangle stored as top-left corner plus extent
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
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

    #[inline]
    pub fn center(&self) -> Vec2 {
        self.pos + self.size * 0.5
    }

    /// Half-open containment: the left and top edges belong to the region,
    /// the right and bottom edges do not
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges_and_center() {
        let r = Rect::new(Vec2::new(10.0, 20.0), Vec2::splat(100.0));
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 110.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 120.0);
        assert_eq!(r.center(), Vec2::new(60.0, 70.0));
    }

    #[test]
    fn test_contains_is_half_open() {
        let r = Rect::new(Vec2::new(0.0, 0.0), Vec2::splat(100.0));
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(99.9, 99.9)));
        assert!(!r.contains(Vec2::new(100.0, 50.0)));
        assert!(!r.contains(Vec2::new(50.0, 100.0)));
        assert!(!r.contains(Vec2::new(-0.1, 50.0)));
    }
}
