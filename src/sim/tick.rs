//! Simulation step
//!
//! Advances the whole field by one tick: ship controls, projectile flight and
//! expiry, firing, then the projectile/asteroid collision pass.

use super::collision::first_hit;
use super::state::{SimEvent, SimState};

/// Held input for a single tick (sampled state, not buffered events)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
    pub shrink: bool,
    pub grow: bool,
    /// Fires one projectile per tick while held (no cooldown)
    pub fire: bool,
}

/// Advance the simulation by `dt` seconds
pub fn step(state: &mut SimState, input: &TickInput, dt: f32) {
    state.events.clear();

    apply_controls(state, input, dt);
    advance_projectiles(state, dt);

    // Fired after the flight update so a fresh projectile starts exactly at the ship
    if input.fire {
        state.fire();
    }

    resolve_collisions(state);

    state.time_ticks += 1;
    state.elapsed += f64::from(dt);
}

fn apply_controls(state: &mut SimState, input: &TickInput, dt: f32) {
    let turn = state.settings.ship_rotation_speed * dt;
    let resize = state.settings.ship_resize_rate * dt;
    let ship = &mut state.ship;

    if input.rotate_left {
        ship.rotate(-turn);
    }
    if input.rotate_right {
        ship.rotate(turn);
    }
    if input.thrust {
        ship.advance(dt);
    }
    if input.shrink {
        ship.resize(-resize);
    }
    if input.grow {
        ship.resize(resize);
    }
}

fn advance_projectiles(state: &mut SimState, dt: f32) {
    let lifetime = state.settings.projectile_lifetime;
    let events = &mut state.events;

    state.projectiles.retain_mut(|p| {
        p.advance(dt);
        if p.is_expired(lifetime) {
            log::debug!("Projectile {} expired after {:.3}s", p.id, p.age);
            events.push(SimEvent::ProjectileExpired { id: p.id });
            false
        } else {
            true
        }
    });
}

/// Each projectile destroys at most the first overlapping asteroid.
///
/// Hits are flagged during the scan and removed afterwards, so indices stay
/// stable while both collections are walked. Fragments are appended as soon
/// as their parent is hit, so a later projectile in the same pass can hit them.
fn resolve_collisions(state: &mut SimState) {
    if state.projectiles.is_empty() || state.asteroids.is_empty() {
        return;
    }

    let threshold = state.settings.split_threshold;
    let mut destroyed = vec![false; state.asteroids.len()];
    let mut consumed = vec![false; state.projectiles.len()];

    for pi in 0..state.projectiles.len() {
        let projectile_id = state.projectiles[pi].id;
        let bounds = state.projectiles[pi].bounds();
        let Some(ai) = first_hit(&bounds, &state.asteroids, &destroyed) else {
            continue;
        };
        let asteroid = &state.asteroids[ai];
        let (asteroid_id, asteroid_size) = (asteroid.id, asteroid.size);
        let children = asteroid.split(threshold);

        log::debug!(
            "Projectile {} hit asteroid {} (size {}), {} fragments",
            projectile_id,
            asteroid_id,
            asteroid_size,
            children.len()
        );
        state.events.push(SimEvent::AsteroidDestroyed {
            id: asteroid_id,
            children: children.len() as u8,
        });

        destroyed[ai] = true;
        consumed[pi] = true;
        for (pos, size) in children {
            state.spawn_asteroid(pos, size);
            destroyed.push(false);
        }
    }

    let mut idx = 0;
    state.projectiles.retain(|_| {
        let keep = !consumed[idx];
        idx += 1;
        keep
    });

    let mut idx = 0;
    state.asteroids.retain(|_| {
        let keep = !destroyed[idx];
        idx += 1;
        keep
    });

    state.asteroids_destroyed += destroyed.iter().filter(|&&d| d).count() as u64;
}
