//! Collision shape profiles for stance changes.
//!
//! Stance-changing actions (crouch, crawl, slide) swap the character's
//! collider between three named variants. The normal variant is captured
//! once at spawn and restored exactly by the engine's cleanup step, no
//! matter how many stance changes happened in between.

use bevy_ecs::prelude::Component;
use glam::Vec2;

use super::boxcollider::BoxCollider;

/// One named collider variant: full size plus center offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColliderShape {
    pub size: Vec2,
    pub offset: Vec2,
}

impl ColliderShape {
    pub fn new(size: Vec2, offset: Vec2) -> Self {
        Self { size, offset }
    }

    /// Write this shape into a collider, keeping its trigger flag.
    pub fn apply(&self, collider: &mut BoxCollider) {
        collider.size = self.size;
        collider.offset = self.offset;
    }

    /// Whether a collider currently matches this shape.
    pub fn matches(&self, collider: &BoxCollider) -> bool {
        collider.size == self.size && collider.offset == self.offset
    }
}

/// The three stances a collider can be in. Mutually exclusive at any instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Stance {
    #[default]
    Normal,
    Crouch,
    Slide,
}

/// Geometry variants the engine swaps in and out during stance actions.
#[derive(Component, Debug, Clone, Copy)]
pub struct ShapeProfile {
    pub normal: ColliderShape,
    pub crouch: ColliderShape,
    pub slide: ColliderShape,
}

impl ShapeProfile {
    /// Capture the entity's current collider as the normal variant and derive
    /// the crouch/slide variants from it.
    ///
    /// Crouch keeps the width and halves the height; slide matches the
    /// original controller's low, full-width box. Both drop the box so the
    /// feet stay planted.
    pub fn capture(collider: &BoxCollider) -> Self {
        let normal = ColliderShape::new(collider.size, collider.offset);
        let crouch_size = Vec2::new(collider.size.x, collider.size.y * 0.5);
        let crouch_offset = collider.offset + Vec2::new(0.0, -collider.size.y * 0.25);
        let slide_size = Vec2::new(collider.size.x, collider.size.y * 0.5);
        let slide_offset = collider.offset + Vec2::new(0.0, -collider.size.y * 0.25);
        Self {
            normal,
            crouch: ColliderShape::new(crouch_size, crouch_offset),
            slide: ColliderShape::new(slide_size, slide_offset),
        }
    }

    pub fn shape(&self, stance: Stance) -> &ColliderShape {
        match stance {
            Stance::Normal => &self.normal,
            Stance::Crouch => &self.crouch,
            Stance::Slide => &self.slide,
        }
    }
}
