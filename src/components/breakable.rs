//! Breakable obstacle component.
//!
//! Breakables take hits from the player's attack/break actions (the engine
//! drives them through [`AttackEvent`](crate::events::action::AttackEvent))
//! and optionally from below, Mario style, via contact normals.

use bevy_ecs::prelude::Component;

#[derive(Component, Debug, Clone)]
pub struct Breakable {
    pub hits_to_break: u32,
    pub hits: u32,
    /// Break when the player hits the block from below.
    pub break_from_below: bool,
    /// Break when struck by an attack/break action.
    pub break_from_attack: bool,
}

impl Breakable {
    pub fn new(hits_to_break: u32) -> Self {
        Self {
            hits_to_break: hits_to_break.max(1),
            hits: 0,
            break_from_below: true,
            break_from_attack: true,
        }
    }

    /// Register one attack hit. Returns true once the block should break.
    pub fn on_attacked(&mut self) -> bool {
        if !self.break_from_attack {
            return false;
        }
        self.hit()
    }

    /// Register one hit from any source. Returns true once broken.
    pub fn hit(&mut self) -> bool {
        self.hits += 1;
        self.hits >= self.hits_to_break
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_breaks_at_threshold() {
        let mut b = Breakable::new(2);
        assert!(!b.on_attacked());
        assert!(b.on_attacked());
    }

    #[test]
    fn test_attack_disabled() {
        let mut b = Breakable::new(1);
        b.break_from_attack = false;
        assert!(!b.on_attacked());
        assert_eq!(b.hits, 0);
    }

    #[test]
    fn test_threshold_minimum_one() {
        let mut b = Breakable::new(0);
        assert!(b.on_attacked());
    }
}
