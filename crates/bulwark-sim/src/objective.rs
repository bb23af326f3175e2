//! Objective data model: the defended asset agents are walking toward.
//!
//! Owned by `GameWorld`, NOT an ECS entity. All damage goes through
//! [`Objective::absorb`]; the active-phase guard and the game-over
//! transition live in the movement system's strike path.

use glam::IVec2;

/// The defended asset. Health never drops below zero.
#[derive(Debug, Clone)]
pub struct Objective {
    pub position: IVec2,
    pub health: i32,
}

impl Objective {
    pub fn new(position: IVec2, health: i32) -> Self {
        Self { position, health }
    }

    /// Apply a strike. Health clamps at zero; returns true when this
    /// particular hit brought it there, so the caller can trigger the
    /// game-over transition exactly once.
    pub fn absorb(&mut self, amount: i32) -> bool {
        let was_standing = self.health > 0;
        self.health = (self.health - amount).max(0);
        was_standing && self.health == 0
    }
}
