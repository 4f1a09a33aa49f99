//! Dino Runner - An endless-runner arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, spawning, collisions, session state)
//! - `renderer`: 2D canvas rendering over a small drawing-surface trait
//! - `config`: Tuning values, loaded once at startup
//! - `highscores`: Best-score persistence
//! - `headless`: Browserless sessions with an optional autopilot
//! - `ui`: DOM text sinks and overlay screens (browser only)

pub mod config;
pub mod headless;
pub mod highscores;
pub mod renderer;
pub mod sim;
#[cfg(target_arch = "wasm32")]
pub mod ui;

pub use config::{Config, ConfigError};
pub use highscores::HighScore;

/// Default tuning values
pub mod consts {
    /// Canvas size used until the first container measurement
    pub const CANVAS_WIDTH: f32 = 1200.0;
    pub const CANVAS_HEIGHT: f32 = 600.0;

    /// Height of the ground band at the bottom of the canvas
    pub const GROUND_HEIGHT: f32 = 100.0;

    /// Downward acceleration, units/frame²
    pub const GRAVITY: f32 = 0.6;
    /// Vertical velocity set by a jump (negative is upward)
    pub const JUMP_IMPULSE: f32 = -12.0;

    /// Scroll speed, units/frame
    pub const INITIAL_SPEED: f32 = 6.0;
    pub const SPEED_INCREMENT: f32 = 0.005;
    pub const MAX_SPEED: f32 = 12.0;

    /// Player defaults - fixed column, jumps in place
    pub const PLAYER_X: f32 = 100.0;
    pub const PLAYER_WIDTH: f32 = 50.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 30.0;
    pub const OBSTACLE_HEIGHT: f32 = 60.0;

    /// Spawn gap beyond the right edge, uniformly drawn from [min, max)
    pub const SPAWN_MIN_DISTANCE: f32 = 400.0;
    pub const SPAWN_MAX_DISTANCE: f32 = 700.0;

    /// Score awarded per obstacle that scrolls off the left edge
    pub const OBSTACLE_BONUS: f64 = 10.0;
    /// Continuous score accrued per running frame
    pub const SCORE_PER_FRAME: f64 = 0.1;
}
