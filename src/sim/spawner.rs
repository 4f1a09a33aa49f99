//! Distance-gated obstacle spawning
//!
//! A new obstacle appears only once the newest one has scrolled at least
//! `spawn_min_distance` in from the right edge, so the minimum gap holds no
//! matter how frames are paced. The random extra offset keeps the cadence from
//! being memorizable.

use rand::Rng;

use super::state::{GameState, Obstacle};
use crate::config::Config;

/// Distance beyond the right edge for a new obstacle, uniform in [min, max)
pub fn spawn_offset<R: Rng>(rng: &mut R, config: &Config) -> f32 {
    rng.random_range(config.spawn_min_distance..config.spawn_max_distance)
}

/// Spawn an obstacle if the gap behind the newest one is wide enough.
/// Returns whether an obstacle was added.
pub fn maybe_spawn(state: &mut GameState) -> bool {
    let gate = state.view_width - state.config.spawn_min_distance;
    let ready = state.obstacles.back().is_none_or(|last| last.x < gate);
    if !ready {
        return false;
    }

    let x = state.view_width + spawn_offset(&mut state.rng, &state.config);
    state.obstacles.push_back(Obstacle::new(x, &state.config));
    log::trace!("Spawned obstacle at x={:.1}", x);
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn state(seed: u64) -> GameState {
        GameState::new(Config::default(), seed, 0)
    }

    #[test]
    fn test_spawns_when_empty() {
        let mut state = state(1);
        assert!(maybe_spawn(&mut state));
        assert_eq!(state.obstacles.len(), 1);
        let x = state.obstacles[0].x;
        assert!((1600.0..1900.0).contains(&x), "spawned at {}", x);
    }

    #[test]
    fn test_gated_until_last_obstacle_clears_min_distance() {
        let mut state = state(1);
        maybe_spawn(&mut state);

        // Exactly at the gate is not enough
        state.obstacles[0].x = state.view_width - state.config.spawn_min_distance;
        assert!(!maybe_spawn(&mut state));
        assert_eq!(state.obstacles.len(), 1);

        state.obstacles[0].x -= 0.01;
        assert!(maybe_spawn(&mut state));
        assert_eq!(state.obstacles.len(), 2);
    }

    #[test]
    fn test_offset_respects_bounds() {
        let config = Config::default();
        let mut rng = state(99).rng;
        for _ in 0..1000 {
            let d = spawn_offset(&mut rng, &config);
            assert!(d >= 400.0 && d < 700.0, "offset {} out of range", d);
        }
    }

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = state(42);
        let mut b = state(42);
        for _ in 0..5 {
            a.obstacles.clear();
            b.obstacles.clear();
            maybe_spawn(&mut a);
            maybe_spawn(&mut b);
            assert_eq!(a.obstacles, b.obstacles);
        }
    }

    proptest! {
        #[test]
        fn prop_spawn_gap_at_least_min_distance(seed in any::<u64>(), speed in 1.0f32..12.0) {
            let mut state = state(seed);
            let min = state.config.spawn_min_distance;
            for _ in 0..2000 {
                for o in state.obstacles.iter_mut() {
                    o.advance(speed);
                }
                let prev = state.obstacles.back().map(|o| o.x);
                if maybe_spawn(&mut state) {
                    let new_x = state.obstacles.back().map(|o| o.x).unwrap();
                    if let Some(prev_x) = prev {
                        prop_assert!(new_x - prev_x >= min, "gap {} < {}", new_x - prev_x, min);
                    }
                }
            }
        }
    }
}
