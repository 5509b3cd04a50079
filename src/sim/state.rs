//! Simulation state and entity models
//!
//! Everything a tick reads or writes lives here, including the RNG handle.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::Aabb;
use crate::consts::*;
use crate::error::ConfigError;
use crate::settings::Settings;
use crate::{heading_to_unit, normalize_degrees};

/// Something that happened during the most recent tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimEvent {
    ProjectileFired { id: u32 },
    ProjectileExpired { id: u32 },
    /// `children` is 2 when the asteroid split, 0 when it was too small
    AsteroidDestroyed { id: u32, children: u8 },
}

/// The player's ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ship {
    pub pos: Vec2,
    /// Heading in degrees, kept in [0, 360)
    pub heading: f32,
    pub radius: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    /// Units per second while thrusting
    pub forward_speed: f32,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            heading: 0.0,
            radius: SHIP_RADIUS,
            min_radius: SHIP_MIN_RADIUS,
            max_radius: SHIP_MAX_RADIUS,
            forward_speed: SHIP_FORWARD_SPEED,
        }
    }

    pub fn from_settings(pos: Vec2, settings: &Settings) -> Self {
        Self {
            pos,
            heading: 0.0,
            radius: settings
                .ship_radius
                .clamp(settings.ship_min_radius, settings.ship_max_radius),
            min_radius: settings.ship_min_radius,
            max_radius: settings.ship_max_radius,
            forward_speed: settings.ship_forward_speed,
        }
    }

    /// Turn by `delta` degrees (positive is clockwise in screen space)
    pub fn rotate(&mut self, delta: f32) {
        self.heading = normalize_degrees(self.heading + delta);
    }

    /// Move forward along the heading for `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.pos += heading_to_unit(self.heading) * self.forward_speed * dt;
    }

    /// Grow (positive) or shrink (negative), clamped to the radius bounds
    pub fn resize(&mut self, delta: f32) {
        self.radius = (self.radius + delta).clamp(self.min_radius, self.max_radius);
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn heading(&self) -> f32 {
        self.heading
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::around(self.pos, self.radius)
    }
}

/// A projectile fired from the ship
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u32,
    pub pos: Vec2,
    /// Unit vector, fixed at creation
    pub dir: Vec2,
    /// Units per second
    pub speed: f32,
    pub radius: f32,
    /// Seconds this projectile has existed
    pub age: f32,
}

impl Projectile {
    pub fn spawn(id: u32, origin: Vec2, heading_degrees: f32, speed: f32) -> Self {
        Self {
            id,
            pos: origin,
            dir: heading_to_unit(heading_degrees),
            speed,
            radius: PROJECTILE_RADIUS,
            age: 0.0,
        }
    }

    /// Move along the firing direction and age by `dt` seconds
    pub fn advance(&mut self, dt: f32) {
        self.pos += self.dir * self.speed * dt;
        self.age += dt;
    }

    pub fn is_expired(&self, lifetime: f32) -> bool {
        self.age >= lifetime - LIFETIME_EPSILON
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::around(self.pos, self.radius)
    }
}

/// A rock drifting in the field (stationary until hit)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Asteroid {
    pub id: u32,
    pub pos: Vec2,
    /// Radius, used for both collision and the split rule
    pub size: f32,
}

impl Asteroid {
    pub fn spawn(id: u32, pos: Vec2, size: f32) -> Self {
        Self { id, pos, size }
    }

    /// Fragments produced when this asteroid is destroyed, as (position, size)
    ///
    /// Two half-size fragments at the same spot when larger than `threshold`,
    /// nothing otherwise. Does not touch `self`; the caller removes the parent.
    pub fn split(&self, threshold: f32) -> Vec<(Vec2, f32)> {
        if self.size > threshold {
            let half = self.size / 2.0;
            vec![(self.pos, half), (self.pos, half)]
        } else {
            Vec::new()
        }
    }

    pub fn position(&self) -> Vec2 {
        self.pos
    }

    pub fn radius(&self) -> f32 {
        self.size
    }

    pub fn bounds(&self) -> Aabb {
        Aabb::around(self.pos, self.size)
    }
}

/// Complete simulation state (deterministic given seed and inputs)
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Explicit random source, seeded from `seed`
    pub rng: Pcg32,
    pub settings: Settings,
    pub ship: Ship,
    /// Live projectiles in spawn order
    pub projectiles: Vec<Projectile>,
    /// Live asteroids in spawn order
    pub asteroids: Vec<Asteroid>,
    /// Events from the most recent tick
    pub events: Vec<SimEvent>,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Simulated seconds
    pub elapsed: f64,
    /// Session totals (diagnostics only)
    pub projectiles_fired: u64,
    pub asteroids_destroyed: u64,
    next_id: u32,
}

/// Build a state with `asteroid_count` rocks scattered over a `width` x `height` world
pub fn initialize(
    seed: u64,
    asteroid_count: i64,
    width: f32,
    height: f32,
) -> Result<SimState, ConfigError> {
    let asteroid_count = u32::try_from(asteroid_count)
        .map_err(|_| ConfigError::InvalidAsteroidCount(asteroid_count))?;
    let settings = Settings {
        world_width: width,
        world_height: height,
        asteroid_count,
        ..Default::default()
    };
    SimState::with_settings(seed, &settings)
}

impl SimState {
    /// Create a new state from validated settings
    pub fn with_settings(seed: u64, settings: &Settings) -> Result<Self, ConfigError> {
        settings.validate()?;

        let center = Vec2::new(settings.world_width / 2.0, settings.world_height / 2.0);
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings: settings.clone(),
            ship: Ship::from_settings(center, settings),
            projectiles: Vec::new(),
            asteroids: Vec::with_capacity(settings.asteroid_count as usize),
            events: Vec::new(),
            time_ticks: 0,
            elapsed: 0.0,
            projectiles_fired: 0,
            asteroids_destroyed: 0,
            next_id: 1,
        };

        for _ in 0..settings.asteroid_count {
            let pos = Vec2::new(
                state.rng.random_range(0.0..settings.world_width),
                state.rng.random_range(0.0..settings.world_height),
            );
            state.spawn_asteroid(pos, settings.asteroid_size);
        }

        log::info!(
            "Initialized seed {} with {} asteroids in {}x{} world",
            seed,
            state.asteroids.len(),
            settings.world_width,
            settings.world_height
        );

        Ok(state)
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Spawn an asteroid and return its ID
    pub fn spawn_asteroid(&mut self, pos: Vec2, size: f32) -> u32 {
        let id = self.next_entity_id();
        self.asteroids.push(Asteroid::spawn(id, pos, size));
        id
    }

    /// Fire a projectile from the ship's current position and heading
    pub fn fire(&mut self) -> u32 {
        let id = self.next_entity_id();
        let mut projectile = Projectile::spawn(
            id,
            self.ship.pos,
            self.ship.heading,
            self.settings.projectile_speed,
        );
        projectile.radius = self.settings.projectile_radius;
        self.projectiles.push(projectile);
        self.projectiles_fired += 1;
        self.events.push(SimEvent::ProjectileFired { id });
        id
    }

    pub fn ship(&self) -> &Ship {
        &self.ship
    }

    pub fn projectiles(&self) -> &[Projectile] {
        &self.projectiles
    }

    pub fn asteroids(&self) -> &[Asteroid] {
        &self.asteroids
    }
}
