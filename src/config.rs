//! Game tuning configuration
//!
//! Loaded once at startup and never mutated afterwards. A JSON override may be
//! stored in LocalStorage; any field it omits keeps its default.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Why a configuration was rejected
#[derive(Debug)]
pub enum ConfigError {
    /// Override text is not valid JSON for `Config`
    Parse(serde_json::Error),
    /// A value is out of range
    Invalid(&'static str),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Parse(e) => write!(f, "config parse error: {}", e),
            ConfigError::Invalid(reason) => write!(f, "invalid config: {}", reason),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Parse(e) => Some(e),
            ConfigError::Invalid(_) => None,
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(e: serde_json::Error) -> Self {
        ConfigError::Parse(e)
    }
}

/// Game tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // === Canvas ===
    /// Canvas width before the first container measurement
    pub canvas_width: f32,
    /// Canvas height before the first container measurement
    pub canvas_height: f32,
    /// Ground band height at the bottom of the canvas
    pub ground_height: f32,

    // === Physics ===
    pub gravity: f32,
    /// Negative: upward
    pub jump_impulse: f32,

    // === Difficulty ===
    pub initial_speed: f32,
    pub speed_increment: f32,
    pub max_speed: f32,

    // === Entities ===
    pub player_x: f32,
    pub player_width: f32,
    pub player_height: f32,
    pub obstacle_width: f32,
    pub obstacle_height: f32,

    // === Spawning ===
    pub spawn_min_distance: f32,
    pub spawn_max_distance: f32,

    // === Scoring ===
    /// Score is accumulated in f64 so long sessions do not drift
    pub obstacle_bonus: f64,
    pub score_per_frame: f64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            canvas_width: CANVAS_WIDTH,
            canvas_height: CANVAS_HEIGHT,
            ground_height: GROUND_HEIGHT,

            gravity: GRAVITY,
            jump_impulse: JUMP_IMPULSE,

            initial_speed: INITIAL_SPEED,
            speed_increment: SPEED_INCREMENT,
            max_speed: MAX_SPEED,

            player_x: PLAYER_X,
            player_width: PLAYER_WIDTH,
            player_height: PLAYER_HEIGHT,
            obstacle_width: OBSTACLE_WIDTH,
            obstacle_height: OBSTACLE_HEIGHT,

            spawn_min_distance: SPAWN_MIN_DISTANCE,
            spawn_max_distance: SPAWN_MAX_DISTANCE,

            obstacle_bonus: OBSTACLE_BONUS,
            score_per_frame: SCORE_PER_FRAME,
        }
    }
}

impl Config {
    /// Parse a (possibly partial) JSON override and validate it
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every value is in range
    pub fn validate(&self) -> Result<(), ConfigError> {
        let positive = [
            (self.canvas_width, "canvas_width must be positive"),
            (self.canvas_height, "canvas_height must be positive"),
            (self.ground_height, "ground_height must be positive"),
            (self.gravity, "gravity must be positive"),
            (self.initial_speed, "initial_speed must be positive"),
            (self.speed_increment, "speed_increment must be positive"),
            (self.max_speed, "max_speed must be positive"),
            (self.player_width, "player_width must be positive"),
            (self.player_height, "player_height must be positive"),
            (self.obstacle_width, "obstacle_width must be positive"),
            (self.obstacle_height, "obstacle_height must be positive"),
            (self.spawn_min_distance, "spawn_min_distance must be positive"),
        ];
        // `!(v > 0.0)` also rejects NaN
        if let Some((_, reason)) = positive.iter().find(|(v, _)| !(*v > 0.0)) {
            return Err(ConfigError::Invalid(*reason));
        }
        if !(self.obstacle_bonus > 0.0) {
            return Err(ConfigError::Invalid("obstacle_bonus must be positive"));
        }
        if !(self.score_per_frame > 0.0) {
            return Err(ConfigError::Invalid("score_per_frame must be positive"));
        }
        if !(self.jump_impulse < 0.0) {
            return Err(ConfigError::Invalid("jump_impulse must be negative (upward)"));
        }
        if self.initial_speed > self.max_speed {
            return Err(ConfigError::Invalid("initial_speed exceeds max_speed"));
        }
        if self.spawn_min_distance >= self.spawn_max_distance {
            return Err(ConfigError::Invalid(
                "spawn_min_distance must be below spawn_max_distance",
            ));
        }
        if self.ground_height >= self.canvas_height {
            return Err(ConfigError::Invalid("ground_height must be below canvas_height"));
        }
        Ok(())
    }

    /// Screen-space y of the ground line for a canvas of the given height
    pub fn ground_y(&self, canvas_height: f32) -> f32 {
        canvas_height - self.ground_height
    }

    /// LocalStorage key for the optional override
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "dinoRunnerConfig";

    /// Load the configuration, applying a LocalStorage override if present (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(config) => {
                        log::info!("Loaded config override from LocalStorage");
                        return config;
                    }
                    Err(e) => log::warn!("Ignoring config override: {}", e),
                }
            }
        }

        log::info!("Using default config");
        Self::default()
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.initial_speed, 6.0);
        assert_eq!(config.max_speed, 12.0);
        assert_eq!(config.spawn_min_distance, 400.0);
    }

    #[test]
    fn test_partial_override_keeps_defaults() {
        let config = Config::from_json(r#"{ "gravity": 0.8, "max_speed": 15.0 }"#).unwrap();
        assert_eq!(config.gravity, 0.8);
        assert_eq!(config.max_speed, 15.0);
        assert_eq!(config.jump_impulse, JUMP_IMPULSE);
        assert_eq!(config.ground_height, GROUND_HEIGHT);
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        let err = Config::from_json("{ gravity: ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_rejects_out_of_range_values() {
        let err = Config::from_json(r#"{ "jump_impulse": 5.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_json(r#"{ "initial_speed": 20.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_json(r#"{ "spawn_min_distance": 800.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = Config::from_json(r#"{ "gravity": 0.0 }"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid config: gravity must be positive");

        let err = Config::from_json(r#"{ "score_per_frame": -0.1 }"#).unwrap_err();
        assert_eq!(err.to_string(), "invalid config: score_per_frame must be positive");

        let err = Config::from_json(r#"{ "spawn_min_distance": 700.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_ground_y() {
        let config = Config::default();
        assert_eq!(config.ground_y(600.0), 500.0);
    }
}
