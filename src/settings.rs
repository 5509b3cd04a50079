//! Simulation settings and tuning
//!
//! Every field defaults to the matching constant in [`crate::consts`], so a
//! JSON file only needs the values it wants to override.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::ConfigError;

/// Tunable simulation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === World ===
    pub world_width: f32,
    pub world_height: f32,
    /// Asteroids spawned at initialization
    pub asteroid_count: u32,
    /// Size of each initial asteroid
    pub asteroid_size: f32,
    /// Asteroids larger than this split when hit
    pub split_threshold: f32,

    // === Ship ===
    pub ship_radius: f32,
    pub ship_min_radius: f32,
    pub ship_max_radius: f32,
    /// Units per second while thrusting
    pub ship_forward_speed: f32,
    /// Degrees per second while turning
    pub ship_rotation_speed: f32,
    /// Radius units per second while shrinking/growing
    pub ship_resize_rate: f32,

    // === Projectiles ===
    pub projectile_radius: f32,
    /// Units per second
    pub projectile_speed: f32,
    /// Seconds
    pub projectile_lifetime: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            world_width: WORLD_WIDTH,
            world_height: WORLD_HEIGHT,
            asteroid_count: ASTEROID_COUNT,
            asteroid_size: ASTEROID_SIZE,
            split_threshold: SPLIT_THRESHOLD,

            ship_radius: SHIP_RADIUS,
            ship_min_radius: SHIP_MIN_RADIUS,
            ship_max_radius: SHIP_MAX_RADIUS,
            ship_forward_speed: SHIP_FORWARD_SPEED,
            ship_rotation_speed: SHIP_ROTATION_SPEED,
            ship_resize_rate: SHIP_RESIZE_RATE,

            projectile_radius: PROJECTILE_RADIUS,
            projectile_speed: PROJECTILE_SPEED,
            projectile_lifetime: PROJECTILE_LIFETIME,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NonPositive { name, value })
    }
}

impl Settings {
    /// Parse settings from a JSON string (missing keys use defaults)
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let settings: Settings = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load and validate settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Reject settings that would produce undefined entity states
    pub fn validate(&self) -> Result<(), ConfigError> {
        let world_ok = self.world_width.is_finite()
            && self.world_height.is_finite()
            && self.world_width > 0.0
            && self.world_height > 0.0;
        if !world_ok {
            return Err(ConfigError::InvalidWorldSize {
                width: self.world_width,
                height: self.world_height,
            });
        }

        positive("asteroid_size", self.asteroid_size)?;
        positive("split_threshold", self.split_threshold)?;

        let (min, max) = (self.ship_min_radius, self.ship_max_radius);
        if !(min.is_finite() && max.is_finite() && min > 0.0 && min <= max) {
            return Err(ConfigError::InvalidRadiusBounds { min, max });
        }
        positive("ship_radius", self.ship_radius)?;
        positive("ship_forward_speed", self.ship_forward_speed)?;
        positive("ship_rotation_speed", self.ship_rotation_speed)?;
        positive("ship_resize_rate", self.ship_resize_rate)?;

        positive("projectile_radius", self.projectile_radius)?;
        positive("projectile_speed", self.projectile_speed)?;
        positive("projectile_lifetime", self.projectile_lifetime)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert!(Settings::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let settings = Settings::from_json(r#"{ "asteroid_count": 3, "world_width": 1024 }"#)
            .expect("valid settings");
        assert_eq!(settings.asteroid_count, 3);
        assert_eq!(settings.world_width, 1024.0);
        assert_eq!(settings.world_height, WORLD_HEIGHT);
        assert_eq!(settings.projectile_lifetime, PROJECTILE_LIFETIME);
    }

    #[test]
    fn test_rejects_bad_world() {
        let err = Settings::from_json(r#"{ "world_height": 0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidWorldSize { .. }));
    }

    #[test]
    fn test_rejects_inverted_radius_bounds() {
        let settings = Settings {
            ship_min_radius: 30.0,
            ship_max_radius: 10.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::InvalidRadiusBounds { .. })
        ));
    }

    #[test]
    fn test_rejects_negative_count_in_json() {
        let err = Settings::from_json(r#"{ "asteroid_count": -4 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_zero_lifetime() {
        let settings = Settings {
            projectile_lifetime: 0.0,
            ..Default::default()
        };
        assert!(matches!(
            settings.validate(),
            Err(ConfigError::NonPositive { name: "projectile_lifetime", .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Settings::load("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}
