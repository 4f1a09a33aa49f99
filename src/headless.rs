//! Headless sessions without a browser
//!
//! Used by the native binary and by tests. The autopilot jumps when the next
//! obstacle is a fixed number of frames away at the current speed, which
//! clears every obstacle for the default tuning.

use crate::sim::{GameEvent, GameState, JumpOutcome, handle_jump, step};

/// Frames of lead time before an obstacle reaches the player
const AUTOPILOT_LEAD_FRAMES: f32 = 9.0;

/// Nominal frame length used for synthetic timestamps
const FRAME_MS: f64 = 1000.0 / 60.0;

/// Outcome of a headless session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSummary {
    pub final_score: u32,
    pub frames: u64,
    pub obstacles_cleared: u32,
    /// Session ended by collision rather than the frame cap
    pub crashed: bool,
    pub new_high_score: bool,
}

/// Whether the autopilot would jump this frame
pub fn should_jump(state: &GameState) -> bool {
    if !state.player.is_grounded() {
        return false;
    }
    let player = &state.player;
    let front = player.x + player.width;
    state
        .obstacles
        .iter()
        .find(|o| o.right() > player.x)
        .is_some_and(|o| {
            let gap = o.x - front;
            gap >= 0.0 && gap <= state.speed * AUTOPILOT_LEAD_FRAMES
        })
}

/// Start a session and step it until collision or `max_frames`
pub fn run_session(state: &mut GameState, max_frames: u64, autopilot: bool) -> SessionSummary {
    let mut now = state.last_frame_ms;
    if !state.is_running() {
        handle_jump(state, now);
    }

    let mut summary = SessionSummary {
        final_score: 0,
        frames: 0,
        obstacles_cleared: 0,
        crashed: false,
        new_high_score: false,
    };

    while summary.frames < max_frames && state.is_running() {
        if autopilot && should_jump(state) {
            let outcome = handle_jump(state, now);
            debug_assert_eq!(outcome, JumpOutcome::Jumped);
        }

        now += FRAME_MS;
        state.record_frame(now);
        summary.frames += 1;

        for event in step(state) {
            match event {
                GameEvent::ObstacleCleared => summary.obstacles_cleared += 1,
                GameEvent::GameOver {
                    final_score,
                    new_high_score,
                } => {
                    summary.crashed = true;
                    summary.final_score = final_score;
                    summary.new_high_score = new_high_score;
                }
                GameEvent::SessionStarted => {}
            }
        }
    }

    if !summary.crashed {
        summary.final_score = state.display_score();
    }
    log::debug!(
        "Headless session: {} frames, {} cleared, score {}",
        summary.frames,
        summary.obstacles_cleared,
        summary.final_score
    );
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::sim::{Obstacle, start_session};

    #[test]
    fn test_autopilot_waits_for_lead_window() {
        let mut state = GameState::new(Config::default(), 1, 0);
        start_session(&mut state, 0.0);
        let cfg = state.config.clone();

        state.obstacles.push_back(Obstacle::new(400.0, &cfg));
        assert!(!should_jump(&state));

        // 150 + 9 * 6 = 204
        state.obstacles[0].x = 204.0;
        assert!(should_jump(&state));

        // Already airborne
        state.player.jump(cfg.jump_impulse);
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_autopilot_ignores_obstacles_behind() {
        let mut state = GameState::new(Config::default(), 1, 0);
        start_session(&mut state, 0.0);
        let cfg = state.config.clone();
        state.obstacles.push_back(Obstacle::new(40.0, &cfg));
        assert!(!should_jump(&state));
    }

    #[test]
    fn test_frame_cap_stops_session() {
        let mut state = GameState::new(Config::default(), 5, 0);
        let summary = run_session(&mut state, 10, true);
        assert_eq!(summary.frames, 10);
        assert!(!summary.crashed);
        assert!(state.is_running());
        // Ten frames of 0.1 each
        assert!(summary.final_score <= 1);
    }
}
