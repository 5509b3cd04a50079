//! Broad-phase collision between projectiles and asteroids
//!
//! Entities are drawn as circles but collide as axis-aligned boxes of side
//! 2 × radius centered on their position.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::state::Asteroid;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    /// Square box of half-extent `radius` centered at `center`
    #[inline]
    pub fn around(center: Vec2, radius: f32) -> Self {
        let half = Vec2::splat(radius);
        Self {
            min: center - half,
            max: center + half,
        }
    }

    /// Strict overlap: boxes that only share an edge do not intersect
    #[inline]
    pub fn intersects(&self, other: &Aabb) -> bool {
        let lo = self.min.max(other.min);
        let hi = self.max.min(other.max);
        lo.x < hi.x && lo.y < hi.y
    }
}

/// Index of the first asteroid in scan order whose box overlaps `bounds`
///
/// Asteroids flagged in `destroyed` are skipped. `destroyed` must be the same
/// length as `asteroids`.
pub fn first_hit(bounds: &Aabb, asteroids: &[Asteroid], destroyed: &[bool]) -> Option<usize> {
    debug_assert_eq!(asteroids.len(), destroyed.len());
    asteroids
        .iter()
        .zip(destroyed)
        .position(|(asteroid, &gone)| !gone && bounds.intersects(&asteroid.bounds()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_around() {
        let b = Aabb::around(Vec2::new(100.0, 50.0), 20.0);
        assert_eq!(b.min, Vec2::new(80.0, 30.0));
        assert_eq!(b.max, Vec2::new(120.0, 70.0));
    }

    #[test]
    fn test_aabb_overlap() {
        let a = Aabb::around(Vec2::ZERO, 10.0);
        assert!(a.intersects(&Aabb::around(Vec2::new(15.0, 5.0), 10.0)));
        assert!(a.intersects(&Aabb::around(Vec2::ZERO, 1.0)));
        assert!(!a.intersects(&Aabb::around(Vec2::new(25.0, 0.0), 10.0)));
    }

    #[test]
    fn test_aabb_touching_edges_do_not_overlap() {
        let a = Aabb::around(Vec2::ZERO, 10.0);
        let b = Aabb::around(Vec2::new(20.0, 0.0), 10.0);
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_boxes_overlap_where_circles_would_not() {
        // Diagonal corners overlap even though the circles are ~28 apart
        let a = Aabb::around(Vec2::ZERO, 10.0);
        let b = Aabb::around(Vec2::new(19.0, 19.0), 10.0);
        assert!(a.intersects(&b));
    }

    #[test]
    fn test_first_hit_picks_scan_order() {
        let asteroids = vec![
            Asteroid::spawn(1, Vec2::new(500.0, 500.0), 20.0),
            Asteroid::spawn(2, Vec2::new(100.0, 100.0), 20.0),
            Asteroid::spawn(3, Vec2::new(105.0, 100.0), 20.0),
        ];
        let bounds = Aabb::around(Vec2::new(100.0, 100.0), 2.0);

        assert_eq!(first_hit(&bounds, &asteroids, &[false, false, false]), Some(1));
        assert_eq!(first_hit(&bounds, &asteroids, &[false, true, false]), Some(2));
        assert_eq!(first_hit(&bounds, &asteroids, &[false, true, true]), None);
    }
}
