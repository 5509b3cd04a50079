//! Immutable copies of entity state for readers outside the step
//!
//! A render thread can hold the latest snapshot while the simulation keeps
//! ticking; `generation` tells it whether a newer one has been published.

use serde::{Deserialize, Serialize};

use super::state::{Asteroid, Projectile, Ship, SimState};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tick count at capture time
    pub generation: u64,
    pub ship: Ship,
    pub projectiles: Vec<Projectile>,
    pub asteroids: Vec<Asteroid>,
}

impl Snapshot {
    pub fn capture(state: &SimState) -> Self {
        Self {
            generation: state.time_ticks,
            ship: state.ship.clone(),
            projectiles: state.projectiles.clone(),
            asteroids: state.asteroids.clone(),
        }
    }

    /// True if `self` was captured after `other`
    pub fn is_newer_than(&self, other: &Snapshot) -> bool {
        self.generation > other.generation
    }
}
