//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Seeded RNG only, owned by the state
//! - Stable iteration order (spawn order)
//! - No rendering or platform dependencies

pub mod clock;
pub mod collision;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use clock::FrameClock;
pub use collision::{Aabb, first_hit};
pub use snapshot::Snapshot;
pub use state::{Asteroid, Projectile, Ship, SimEvent, SimState, initialize};
pub use tick::{TickInput, step};
