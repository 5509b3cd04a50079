//! Rock Splitter - An arcade asteroid-splitting simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (ship, projectiles, asteroids, collisions)
//! - `renderer`: CPU-side draw list generation for any backend
//! - `settings`: Data-driven tuning with validation
//! - `error`: Configuration errors

pub mod error;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::ConfigError;
pub use settings::Settings;
pub use sim::{SimState, TickInput, initialize, step};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (60 Hz, matching the classic frame loop)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Longest frame the clock will accept before clamping (seconds)
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Default world dimensions
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;

    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 20.0;
    /// Forward speed while thrusting (units/s)
    pub const SHIP_FORWARD_SPEED: f32 = 100.0;
    /// Rotation rate while turning (degrees/s) - 5° per 60 Hz tick
    pub const SHIP_ROTATION_SPEED: f32 = 300.0;
    /// Radius change while shrinking/growing (units/s) - 1 unit per 60 Hz tick
    pub const SHIP_RESIZE_RATE: f32 = 60.0;
    pub const SHIP_MIN_RADIUS: f32 = 4.0;
    pub const SHIP_MAX_RADIUS: f32 = 40.0;

    /// Projectile defaults
    pub const PROJECTILE_RADIUS: f32 = 2.0;
    /// 10 units per 60 Hz tick
    pub const PROJECTILE_SPEED: f32 = 600.0;
    /// Seconds a projectile lives
    pub const PROJECTILE_LIFETIME: f32 = 2.0;
    /// Slack absorbing f32 accumulation of dt in projectile age
    pub const LIFETIME_EPSILON: f32 = 1e-4;

    /// Asteroid defaults
    pub const ASTEROID_COUNT: u32 = 10;
    pub const ASTEROID_SIZE: f32 = 20.0;
    /// Asteroids larger than this split in two when hit
    pub const SPLIT_THRESHOLD: f32 = 5.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(angle: f32) -> f32 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Unit vector pointing along a heading given in degrees
#[inline]
pub fn heading_to_unit(heading_degrees: f32) -> Vec2 {
    let theta = heading_degrees.to_radians();
    Vec2::new(theta.cos(), theta.sin())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert!((normalize_degrees(-5.0) - 355.0).abs() < 1e-4);
        assert!((normalize_degrees(725.0) - 5.0).abs() < 1e-3);
        assert!(normalize_degrees(-1e-9) < 360.0);
    }

    #[test]
    fn test_heading_to_unit() {
        let right = heading_to_unit(0.0);
        assert!((right - Vec2::X).length() < 1e-6);

        let down = heading_to_unit(90.0);
        assert!(down.x.abs() < 1e-6);
        assert!((down.y - 1.0).abs() < 1e-6);

        assert!((heading_to_unit(123.4).length() - 1.0).abs() < 1e-6);
    }
}
