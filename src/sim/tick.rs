//! Per-frame simulation step and session transitions
//!
//! The loop driver calls `step` once per animation frame; input handlers call
//! `handle_jump` / `toggle_pause` synchronously between frames.

use super::spawner::maybe_spawn;
use super::state::{GameEvent, GameState, SessionPhase};

/// What a jump input did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpOutcome {
    /// Started a new session from Idle or GameOver
    Started,
    /// Player left the ground
    Jumped,
    /// Cleared the paused flag without jumping
    Resumed,
    /// Airborne; nothing changed
    Ignored,
}

/// Begin a new session, resetting score, speed, obstacles and player
pub fn start_session(state: &mut GameState, now_ms: f64) -> GameEvent {
    state.reset_session(now_ms);
    state.phase = SessionPhase::Running;
    log::info!(
        "Session started (high score {}, seed {})",
        state.high_score,
        state.seed
    );
    GameEvent::SessionStarted
}

/// Dispatch the shared jump input (Space / click)
///
/// Starts a session from the start or game-over screen, resumes a paused
/// session, otherwise jumps. A jump input while already running never
/// restarts the session.
pub fn handle_jump(state: &mut GameState, now_ms: f64) -> JumpOutcome {
    match state.phase {
        SessionPhase::Idle | SessionPhase::GameOver => {
            start_session(state, now_ms);
            JumpOutcome::Started
        }
        SessionPhase::Running if state.paused => {
            state.paused = false;
            log::info!("Resumed");
            JumpOutcome::Resumed
        }
        SessionPhase::Running => {
            if state.player.jump(state.config.jump_impulse) {
                JumpOutcome::Jumped
            } else {
                JumpOutcome::Ignored
            }
        }
    }
}

/// Toggle pause while running. Returns the resulting paused flag.
pub fn toggle_pause(state: &mut GameState) -> bool {
    if state.phase != SessionPhase::Running {
        return false;
    }
    state.paused = !state.paused;
    log::info!("{}", if state.paused { "Paused" } else { "Resumed" });
    state.paused
}

/// End the session: floor the score and raise the high score if beaten
pub fn game_over(state: &mut GameState) -> GameEvent {
    state.phase = SessionPhase::GameOver;

    let final_score = state.display_score();
    let new_high_score = final_score > state.high_score;
    if new_high_score {
        state.high_score = final_score;
        log::info!("New high score: {}", final_score);
    }
    log::info!("Game over with score {}", final_score);

    GameEvent::GameOver {
        final_score,
        new_high_score,
    }
}

/// Advance the simulation by one frame
pub fn step(state: &mut GameState) -> Vec<GameEvent> {
    let mut events = Vec::new();
    if state.phase != SessionPhase::Running || state.paused {
        return events;
    }

    // Physics
    state.player.update(state.config.gravity);

    // Uniform scroll
    for obstacle in state.obstacles.iter_mut() {
        obstacle.advance(state.speed);
    }

    // Collisions end the session, but the rest of the frame still runs
    let hit = state
        .obstacles
        .iter()
        .any(|o| o.collides_with(&state.player));
    if hit {
        events.push(game_over(state));
    }

    // Front of the queue is always the leftmost obstacle
    while state.obstacles.front().is_some_and(|o| o.is_off_screen()) {
        state.obstacles.pop_front();
        state.score += state.config.obstacle_bonus;
        events.push(GameEvent::ObstacleCleared);
    }

    maybe_spawn(state);

    if state.is_running() {
        state.score += state.config.score_per_frame;
    }

    // Difficulty ramp, never past the cap
    state.speed = (state.speed + state.config.speed_increment).min(state.config.max_speed);

    events
}
