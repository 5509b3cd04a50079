//! CPU-side draw list generation
//!
//! Reads a finished [`SimState`] and emits colored triangles. Any backend can
//! upload the result with [`vertex::as_bytes`]; nothing here touches a GPU.

pub mod shapes;
pub mod vertex;

pub use vertex::{Vertex, as_bytes, colors};

use crate::sim::SimState;

/// Circle tessellation for asteroids
const ASTEROID_SEGMENTS: u32 = 24;
/// Projectiles are tiny, a coarse circle is enough
const PROJECTILE_SEGMENTS: u32 = 6;

/// Build the full frame: asteroids, then projectiles, then the ship on top
pub fn build_frame(state: &SimState) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(
        state.asteroids().len() * (ASTEROID_SEGMENTS as usize) * 3
            + state.projectiles().len() * (PROJECTILE_SEGMENTS as usize) * 3
            + 3,
    );

    for asteroid in state.asteroids() {
        vertices.extend(shapes::circle(
            asteroid.position(),
            asteroid.radius(),
            colors::ASTEROID,
            ASTEROID_SEGMENTS,
        ));
    }

    for projectile in state.projectiles() {
        vertices.extend(shapes::circle(
            projectile.position(),
            projectile.radius(),
            colors::PROJECTILE,
            PROJECTILE_SEGMENTS,
        ));
    }

    let ship = state.ship();
    vertices.extend(shapes::ship_triangle(
        ship.position(),
        ship.radius(),
        ship.heading(),
        colors::SHIP,
    ));

    vertices
}
