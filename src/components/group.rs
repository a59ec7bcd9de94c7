//! Tag component for grouping entities by name.
//!
//! Collision reactors match on group names ("player", "enemy", "hazard",
//! "goal", "breakable", "bullet", "deathzone", "solid") instead of concrete types, so new
//! reactive behaviors can be layered on without touching the engine.

use bevy_ecs::prelude::Component;

#[derive(Component, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct Group(String);

impl Group {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }

    pub fn is(&self, name: &str) -> bool {
        self.0 == name
    }
}
