//! Game state and core simulation types
//!
//! Vertical positions are offsets above the ground line (y grows upward);
//! horizontal positions are canvas x coordinates.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::collision::Aabb;
use crate::config::Config;

/// Current phase of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// Before the first start; start screen showing
    #[default]
    Idle,
    /// Loop actively stepping
    Running,
    /// Collision ended the session; game-over screen showing
    GameOver,
}

/// Notable things that happened during a transition or step
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GameEvent {
    /// A new session began (all mutable state reset)
    SessionStarted,
    /// An obstacle scrolled off the left edge and paid its bonus
    ObstacleCleared,
    /// Collision ended the session
    GameOver {
        /// Floored score at the moment of collision
        final_score: u32,
        /// Whether `final_score` replaced the stored high score
        new_high_score: bool,
    },
}

/// The player character
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    /// Fixed horizontal position (left edge)
    pub x: f32,
    /// Offset above the ground line, never negative
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Per-frame vertical velocity; negative moves up
    pub velocity_y: f32,
    pub is_jumping: bool,
}

impl Player {
    pub fn new(config: &Config) -> Self {
        Self {
            x: config.player_x,
            y: 0.0,
            width: config.player_width,
            height: config.player_height,
            velocity_y: 0.0,
            is_jumping: false,
        }
    }

    /// Apply one frame of vertical kinematics while airborne
    pub fn update(&mut self, gravity: f32) {
        if self.is_jumping || self.y > 0.0 {
            self.velocity_y += gravity;
            self.y -= self.velocity_y;

            if self.y <= 0.0 {
                self.reset();
            }
        }
    }

    /// Start a jump if grounded. Returns whether the jump happened.
    pub fn jump(&mut self, impulse: f32) -> bool {
        if !self.is_grounded() {
            return false;
        }
        self.velocity_y = impulse;
        self.is_jumping = true;
        true
    }

    /// Return to rest on the ground line
    pub fn reset(&mut self) {
        self.y = 0.0;
        self.velocity_y = 0.0;
        self.is_jumping = false;
    }

    pub fn is_grounded(&self) -> bool {
        !self.is_jumping && self.y == 0.0
    }

    /// Bounding box in ground-relative coordinates
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, self.y, self.width, self.height)
    }
}

/// A ground-standing obstacle scrolling toward the player
#[derive(Debug, Clone, PartialEq)]
pub struct Obstacle {
    /// Left edge
    pub x: f32,
    pub width: f32,
    pub height: f32,
}

impl Obstacle {
    pub fn new(x: f32, config: &Config) -> Self {
        Self {
            x,
            width: config.obstacle_width,
            height: config.obstacle_height,
        }
    }

    /// Scroll left by the current speed
    pub fn advance(&mut self, speed: f32) {
        self.x -= speed;
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Trailing edge has passed the left edge of the view
    pub fn is_off_screen(&self) -> bool {
        self.aabb().right() < 0.0
    }

    /// Bounding box in ground-relative coordinates (always standing on the ground)
    pub fn aabb(&self) -> Aabb {
        Aabb::new(self.x, 0.0, self.width, self.height)
    }

    pub fn collides_with(&self, player: &Player) -> bool {
        self.aabb().overlaps(&player.aabb())
    }
}

/// Complete simulation context, owned by the loop driver
#[derive(Debug, Clone)]
pub struct GameState {
    /// Tuning values; not modified after construction
    pub config: Config,
    /// Seed the obstacle RNG was created from
    pub seed: u64,
    pub rng: Pcg32,
    pub phase: SessionPhase,
    /// Running but frozen (no stepping, no jumping)
    pub paused: bool,
    /// Fractional score; displayed floored
    pub score: f64,
    /// Scroll speed, ramps toward `config.max_speed`
    pub speed: f32,
    /// Best floored score seen, including previous processes
    pub high_score: u32,
    /// Timestamp (ms) of the last processed frame
    pub last_frame_ms: f64,
    /// Current drawing-surface size
    pub view_width: f32,
    pub view_height: f32,
    pub player: Player,
    /// Oldest (leftmost) first
    pub obstacles: VecDeque<Obstacle>,
}

impl GameState {
    /// Create an idle game with the given seed and previously stored high score.
    /// An out-of-range config is replaced by the defaults.
    pub fn new(config: Config, seed: u64, high_score: u32) -> Self {
        let config = match config.validate() {
            Ok(()) => config,
            Err(e) => {
                log::warn!("{}; using default config", e);
                Config::default()
            }
        };
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: SessionPhase::Idle,
            paused: false,
            score: 0.0,
            speed: config.initial_speed,
            high_score,
            last_frame_ms: 0.0,
            view_width: config.canvas_width,
            view_height: config.canvas_height,
            player: Player::new(&config),
            obstacles: VecDeque::new(),
            config,
        }
    }

    pub fn is_running(&self) -> bool {
        self.phase == SessionPhase::Running
    }

    /// Score as shown to the player
    pub fn display_score(&self) -> u32 {
        self.score.floor() as u32
    }

    /// Screen-space y of the ground line for the current view
    pub fn ground_y(&self) -> f32 {
        self.config.ground_y(self.view_height)
    }

    /// Track a new drawing-surface size
    pub fn resize(&mut self, width: f32, height: f32) {
        self.view_width = width;
        self.view_height = height;
    }

    /// Record a processed frame, returning ms elapsed since the previous one
    pub fn record_frame(&mut self, now_ms: f64) -> f64 {
        let delta = now_ms - self.last_frame_ms;
        self.last_frame_ms = now_ms;
        delta
    }

    /// Reset all per-session state for a fresh run
    pub(crate) fn reset_session(&mut self, now_ms: f64) {
        self.paused = false;
        self.score = 0.0;
        self.speed = self.config.initial_speed;
        self.obstacles.clear();
        self.player.reset();
        self.last_frame_ms = now_ms;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn test_player_starts_grounded() {
        let player = Player::new(&config());
        assert!(player.is_grounded());
        assert_eq!(player.x, 100.0);
        assert_eq!((player.width, player.height), (50.0, 50.0));
    }

    #[test]
    fn test_jump_sets_impulse() {
        let cfg = config();
        let mut player = Player::new(&cfg);
        assert!(player.jump(cfg.jump_impulse));
        assert_eq!(player.velocity_y, -12.0);
        assert!(player.is_jumping);
    }

    #[test]
    fn test_jump_ignored_while_airborne() {
        let cfg = config();
        let mut player = Player::new(&cfg);
        player.jump(cfg.jump_impulse);
        player.update(cfg.gravity);
        let before = player.clone();
        assert!(!player.jump(cfg.jump_impulse));
        assert_eq!(player, before);

        // Off the ground but flag cleared still counts as airborne
        let mut player = Player::new(&cfg);
        player.y = 5.0;
        assert!(!player.jump(cfg.jump_impulse));
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_first_frame_of_jump() {
        let cfg = config();
        let mut player = Player::new(&cfg);
        player.jump(cfg.jump_impulse);
        player.update(cfg.gravity);
        assert!((player.velocity_y - -11.4).abs() < 1e-5);
        assert!((player.y - 11.4).abs() < 1e-5);
    }

    #[test]
    fn test_full_jump_lands_at_rest() {
        let cfg = config();
        let mut player = Player::new(&cfg);
        player.jump(cfg.jump_impulse);

        let mut frames = 0;
        let mut apex: f32 = 0.0;
        while !player.is_grounded() {
            player.update(cfg.gravity);
            apex = apex.max(player.y);
            frames += 1;
            assert!(frames < 1000, "player never landed");
        }
        assert_eq!(player.y, 0.0);
        assert_eq!(player.velocity_y, 0.0);
        assert!(!player.is_jumping);
        assert!(apex > cfg.obstacle_height, "jump must clear an obstacle");
        assert!((38..=42).contains(&frames), "airtime was {} frames", frames);
    }

    #[test]
    fn test_update_is_noop_at_rest() {
        let cfg = config();
        let mut player = Player::new(&cfg);
        player.update(cfg.gravity);
        assert!(player.is_grounded());
        assert_eq!(player.velocity_y, 0.0);
    }

    #[test]
    fn test_obstacle_scrolls_and_leaves() {
        let cfg = config();
        let mut obstacle = Obstacle::new(10.0, &cfg);
        obstacle.advance(6.0);
        assert_eq!(obstacle.x, 4.0);
        assert!(!obstacle.is_off_screen());

        // Right edge exactly at 0 is still on screen
        obstacle.x = -30.0;
        assert!(!obstacle.is_off_screen());
        obstacle.advance(0.5);
        assert!(obstacle.is_off_screen());
    }

    #[test]
    fn test_new_state_is_idle() {
        let state = GameState::new(config(), 7, 40);
        assert_eq!(state.phase, SessionPhase::Idle);
        assert!(!state.paused);
        assert_eq!(state.speed, 6.0);
        assert_eq!(state.high_score, 40);
        assert!(state.obstacles.is_empty());
        assert_eq!(state.ground_y(), 500.0);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let cfg = Config {
            spawn_min_distance: 500.0,
            spawn_max_distance: 500.0,
            ..Config::default()
        };
        let mut state = GameState::new(cfg, 7, 0);
        assert_eq!(state.config, Config::default());

        // Spawning draws from a non-empty range
        state.phase = SessionPhase::Running;
        assert!(crate::sim::maybe_spawn(&mut state));
        assert!(state.obstacles[0].x >= state.view_width + 400.0);
    }

    #[test]
    fn test_record_frame_delta() {
        let mut state = GameState::new(config(), 7, 0);
        state.record_frame(1000.0);
        let delta = state.record_frame(1016.5);
        assert_eq!(delta, 16.5);
        assert_eq!(state.last_frame_ms, 1016.5);
    }

    proptest! {
        #[test]
        fn prop_airborne_kinematics(y in 0.1f32..200.0, vy in -12.0f32..12.0) {
            let cfg = config();
            let mut player = Player::new(&cfg);
            player.y = y;
            player.velocity_y = vy;
            player.is_jumping = true;

            player.update(cfg.gravity);

            let expected_vy = vy + cfg.gravity;
            let expected_y = y - expected_vy;
            if expected_y <= 0.0 {
                prop_assert_eq!(player.y, 0.0);
                prop_assert_eq!(player.velocity_y, 0.0);
                prop_assert!(!player.is_jumping);
            } else {
                prop_assert!((player.velocity_y - expected_vy).abs() < 1e-4);
                prop_assert!((player.y - expected_y).abs() < 1e-4);
            }
        }

        #[test]
        fn prop_player_never_below_ground(frames in 0usize..100) {
            let cfg = config();
            let mut player = Player::new(&cfg);
            player.jump(cfg.jump_impulse);
            for _ in 0..frames {
                player.update(cfg.gravity);
                prop_assert!(player.y >= 0.0);
            }
        }
    }
}
