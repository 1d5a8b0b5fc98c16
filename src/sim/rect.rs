//! Axis-aligned rectangle geometry
//!
//! Positions are top-left corners in world space with y growing downward.
//! Two overlap tests exist on purpose: platforms use a closed "landing band"
//! test, sweets use a strict open-interval intersection.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Top-left corner
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

    /// Whether this box's bottom edge rests inside `surface`'s vertical
    /// extent while the two overlap horizontally. All bounds are inclusive,
    /// so touching edges count.
    pub fn in_landing_band(&self, surface: &Rect) -> bool {
        self.bottom() >= surface.top()
            && self.bottom() <= surface.bottom()
            && self.right() >= surface.left()
            && self.left() <= surface.right()
    }

    /// Strict overlap on both axes; boxes that only share an edge miss.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f32, y: f32, w: f32, h: f32) -> Rect {
        Rect::new(Vec2::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn test_edges() {
        let r = rect(10.0, 20.0, 32.0, 48.0);
        assert_eq!(r.left(), 10.0);
        assert_eq!(r.right(), 42.0);
        assert_eq!(r.top(), 20.0);
        assert_eq!(r.bottom(), 68.0);
    }

    #[test]
    fn test_landing_band_is_closed() {
        let floor = rect(0.0, 500.0, 800.0, 32.0);
        // Bottom exactly on the top edge
        assert!(rect(100.0, 452.0, 32.0, 48.0).in_landing_band(&floor));
        // Bottom exactly on the bottom edge
        assert!(rect(100.0, 484.0, 32.0, 48.0).in_landing_band(&floor));
        // Just above
        assert!(!rect(100.0, 451.0, 32.0, 48.0).in_landing_band(&floor));
        // Below the band
        assert!(!rect(100.0, 485.0, 32.0, 48.0).in_landing_band(&floor));
        // Horizontal edge contact still counts
        let block = rect(300.0, 400.0, 100.0, 32.0);
        assert!(rect(268.0, 352.0, 32.0, 48.0).in_landing_band(&block));
        assert!(rect(400.0, 352.0, 32.0, 48.0).in_landing_band(&block));
        assert!(!rect(401.0, 352.0, 32.0, 48.0).in_landing_band(&block));
    }

    #[test]
    fn test_intersects_is_open() {
        let sweet = rect(200.0, 300.0, 32.0, 32.0);
        assert!(rect(190.0, 290.0, 32.0, 48.0).intersects(&sweet));
        // Sharing an edge is not an overlap
        assert!(!rect(168.0, 300.0, 32.0, 48.0).intersects(&sweet));
        assert!(!rect(200.0, 252.0, 32.0, 48.0).intersects(&sweet));
        assert!(!rect(232.0, 300.0, 32.0, 48.0).intersects(&sweet));
    }
}
