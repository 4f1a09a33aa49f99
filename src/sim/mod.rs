//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One step per animation frame, no wall-clock scaling
//! - Seeded RNG only
//! - No rendering or platform dependencies

pub mod collision;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::Aabb;
pub use spawner::{maybe_spawn, spawn_offset};
pub use state::{GameEvent, GameState, Obstacle, Player, SessionPhase};
pub use tick::{JumpOutcome, game_over, handle_jump, start_session, step, toggle_pause};
