//! Per-frame scene drawing

use glam::Vec2;

use super::surface::Surface;
use crate::sim::GameState;

/// Draw the whole frame. Reads the state only.
pub fn draw_scene(state: &GameState, surface: &mut impl Surface) {
    let config = &state.config;
    let ball = &state.ball;

    surface.clear(Vec2::new(config.width, config.height));

    // Sling band from the anchor to the ball
    surface.stroke_line(config.origin, ball.pos, &config.sling_color, config.sling_width);

    surface.fill_circle(ball.pos, ball.radius, &config.ball_color);

    for target in &state.targets {
        surface.fill_circle(target.pos, target.radius, &target.color.to_css());
    }
}
