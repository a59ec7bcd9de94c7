//! Health and knockback state for damageable entities.
//!
//! Reactors apply damage through this component. Knockback deliberately
//! overrides engine-owned velocity: the damage reactors run after the
//! engine's per-tick write, so knockback always wins within a tick.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone)]
pub struct Health {
    pub current: i32,
    pub max: i32,
    /// Seconds of invincibility left after a hit. While positive, further
    /// damage is ignored.
    pub invincibility_timer: f32,
    /// Invincibility window granted per hit, in seconds.
    pub invincibility_duration: f32,
    /// Impulse magnitude applied away from the damage source.
    pub knockback_force: f32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self {
            current: max,
            max,
            invincibility_timer: 0.0,
            invincibility_duration: 1.5,
            knockback_force: 8.0,
        }
    }

    pub fn is_invincible(&self) -> bool {
        self.invincibility_timer > 0.0
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    /// Apply damage if not invincible. Returns true when damage landed.
    pub fn take_damage(&mut self, amount: i32) -> bool {
        if self.is_invincible() {
            return false;
        }
        self.current -= amount;
        self.invincibility_timer = self.invincibility_duration;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_damage_starts_invincibility() {
        let mut h = Health::new(3);
        assert!(h.take_damage(1));
        assert_eq!(h.current, 2);
        assert!(h.is_invincible());
    }

    #[test]
    fn test_damage_ignored_while_invincible() {
        let mut h = Health::new(3);
        h.take_damage(1);
        assert!(!h.take_damage(1));
        assert_eq!(h.current, 2);
    }

    #[test]
    fn test_death() {
        let mut h = Health::new(1);
        h.take_damage(1);
        assert!(h.is_dead());
    }
}
