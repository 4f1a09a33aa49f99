//! Scene composition: background, ground, obstacles, player

use glam::Vec2;

use super::Surface;
use super::palette::*;
use crate::sim::GameState;

/// Draw one frame of the current state
pub fn render<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let (w, h) = (state.view_width, state.view_height);
    surface.clear(w, h);

    draw_background(surface, w, h);
    draw_ground(state, surface);

    // Obstacles stand on the ground line
    let ground_y = state.ground_y();
    for obstacle in &state.obstacles {
        surface.fill_rect(
            obstacle.x,
            ground_y - obstacle.height,
            obstacle.width,
            obstacle.height,
            OBSTACLE,
        );
    }

    let player = &state.player;
    surface.fill_rect(
        player.x,
        ground_y - player.y - player.height,
        player.width,
        player.height,
        PLAYER,
    );
}

fn draw_background<S: Surface + ?Sized>(surface: &mut S, w: f32, h: f32) {
    surface.fill_vertical_gradient(0.0, 0.0, w, h, &[(0.0, SKY_TOP), (0.6, SKY_HAZE), (1.0, SAND)]);
}

fn draw_ground<S: Surface + ?Sized>(state: &GameState, surface: &mut S) {
    let ground_y = state.ground_y();
    let w = state.view_width;

    surface.fill_rect(0.0, ground_y, w, state.config.ground_height, SAND);
    surface.stroke_line(
        Vec2::new(0.0, ground_y),
        Vec2::new(w, ground_y),
        GROUND_LINE_WIDTH,
        GROUND_LINE,
    );
}
