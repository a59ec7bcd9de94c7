//! Axis-aligned rectangular collider.
//!
//! The collider's AABB is centered on the entity's
//! [`MapPosition`](super::mapposition::MapPosition) plus `offset`. Trigger
//! colliders overlap without blocking; solid collision resolution and the
//! physical-state probes ignore them where the contract says they must.

use bevy_ecs::prelude::Component;
use glam::Vec2;

#[derive(Debug, Clone, Copy, PartialEq, Component)]
pub struct BoxCollider {
    /// Full extents of the box in world units.
    pub size: Vec2,
    /// Displacement of the box center from the entity position.
    pub offset: Vec2,
    /// Trigger colliders report contacts but never block movement and never
    /// satisfy ground/wall probes.
    pub is_trigger: bool,
}

impl BoxCollider {
    /// Create a solid BoxCollider with the given size, centered on the entity.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Vec2::new(width, height),
            offset: Vec2::ZERO,
            is_trigger: false,
        }
    }

    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.offset = offset;
        self
    }

    pub fn trigger(mut self) -> Self {
        self.is_trigger = true;
        self
    }

    /// Returns (min, max) of the collider AABB for a given entity position.
    /// Handles negative size by normalizing to proper min/max.
    pub fn aabb(&self, position: Vec2) -> (Vec2, Vec2) {
        let half = self.size * 0.5;
        let center = position + self.offset;
        let p0 = center - half;
        let p1 = center + half;
        let min = Vec2::new(p0.x.min(p1.x), p0.y.min(p1.y));
        let max = Vec2::new(p0.x.max(p1.x), p0.y.max(p1.y));
        (min, max)
    }

    /// AABB vs AABB overlap test against another BoxCollider at a different
    /// entity position.
    pub fn overlaps(&self, position: Vec2, other: &Self, other_position: Vec2) -> bool {
        let (min_a, max_a) = self.aabb(position);
        let (min_b, max_b) = other.aabb(other_position);
        min_a.x < max_b.x && max_a.x > min_b.x && min_a.y < max_b.y && max_a.y > min_b.y
    }

    /// Overlap test against a free-floating AABB given as (min, max).
    ///
    /// Used by the physical-state probes, which are not colliders themselves.
    pub fn overlaps_aabb(&self, position: Vec2, probe_min: Vec2, probe_max: Vec2) -> bool {
        let (min, max) = self.aabb(position);
        min.x < probe_max.x && max.x > probe_min.x && min.y < probe_max.y && max.y > probe_min.y
    }

    /// Point containment in world space.
    #[allow(dead_code)]
    pub fn contains_point(&self, position: Vec2, point: Vec2) -> bool {
        let (min, max) = self.aabb(position);
        point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_centered_on_position() {
        let col = BoxCollider::new(2.0, 4.0);
        let (min, max) = col.aabb(Vec2::new(10.0, 10.0));
        assert_eq!(min, Vec2::new(9.0, 8.0));
        assert_eq!(max, Vec2::new(11.0, 12.0));
    }

    #[test]
    fn test_aabb_with_offset() {
        let col = BoxCollider::new(2.0, 2.0).with_offset(Vec2::new(0.0, -0.5));
        let (min, max) = col.aabb(Vec2::ZERO);
        assert_eq!(min, Vec2::new(-1.0, -1.5));
        assert_eq!(max, Vec2::new(1.0, 0.5));
    }

    #[test]
    fn test_overlaps_true() {
        let a = BoxCollider::new(2.0, 2.0);
        let b = BoxCollider::new(2.0, 2.0);
        assert!(a.overlaps(Vec2::ZERO, &b, Vec2::new(1.5, 0.0)));
    }

    #[test]
    fn test_overlaps_false_when_touching_edges() {
        let a = BoxCollider::new(2.0, 2.0);
        let b = BoxCollider::new(2.0, 2.0);
        // Exactly touching edges do not count as overlap.
        assert!(!a.overlaps(Vec2::ZERO, &b, Vec2::new(2.0, 0.0)));
    }

    #[test]
    fn test_overlaps_aabb_probe() {
        let col = BoxCollider::new(2.0, 2.0);
        assert!(col.overlaps_aabb(
            Vec2::ZERO,
            Vec2::new(-0.5, -1.2),
            Vec2::new(0.5, -0.9)
        ));
        assert!(!col.overlaps_aabb(Vec2::ZERO, Vec2::new(5.0, 5.0), Vec2::new(6.0, 6.0)));
    }

    #[test]
    fn test_contains_point() {
        let col = BoxCollider::new(2.0, 2.0);
        assert!(col.contains_point(Vec2::ZERO, Vec2::new(0.5, 0.5)));
        assert!(!col.contains_point(Vec2::ZERO, Vec2::new(1.5, 0.0)));
    }
}
