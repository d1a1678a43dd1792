//! Ball motion: explicit Euler with gravity, drag and bounces
//!
//! Units are per frame, not per second; one call is one frame.

use super::state::Ball;
use crate::config::GameConfig;

/// Advance a free ball by one frame. A held ball is left alone.
pub fn step_ball(ball: &mut Ball, config: &GameConfig) {
    if ball.dragging {
        return;
    }

    ball.vel.y += config.gravity;
    ball.pos += ball.vel;
    ball.vel *= config.drag;

    // Side walls only flip direction; the ball may sit past the wall for a frame
    if ball.pos.x - ball.radius < 0.0 || ball.pos.x + ball.radius > config.width {
        ball.vel.x = -ball.vel.x;
    }

    if ball.pos.y + ball.radius > config.height {
        ball.vel.y = -ball.vel.y * config.floor_restitution;
        ball.pos.y = config.height - ball.radius;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;
    use proptest::prelude::*;

    fn ball_at(x: f32, y: f32, vx: f32, vy: f32) -> Ball {
        let mut ball = Ball::new(Vec2::new(x, y), 15.0);
        ball.vel = Vec2::new(vx, vy);
        ball
    }

    #[test]
    fn test_gravity_then_drag() {
        let config = GameConfig::default();
        let mut ball = ball_at(300.0, 200.0, 4.0, -2.0);
        step_ball(&mut ball, &config);
        assert_eq!(ball.pos, Vec2::new(304.0, 198.5));
        assert_eq!(ball.vel.x, 4.0 * 0.98);
        assert_eq!(ball.vel.y, (-2.0 + 0.5) * 0.98);
    }

    #[test]
    fn test_dragging_ball_does_not_move() {
        let config = GameConfig::default();
        let mut ball = ball_at(300.0, 200.0, 4.0, -2.0);
        ball.dragging = true;
        let before = ball.clone();
        step_ball(&mut ball, &config);
        assert_eq!(ball, before);
    }

    #[test]
    fn test_floor_bounce_clamps_and_loses_energy() {
        let config = GameConfig::default();
        let mut ball = ball_at(300.0, 380.0, 0.0, 10.0);
        step_ball(&mut ball, &config);
        let dragged_vy = (10.0 + 0.5) * 0.98;
        assert_eq!(ball.pos.y, 385.0);
        assert_eq!(ball.vel.y, -dragged_vy * 0.8);
    }

    #[test]
    fn test_right_wall_flips_without_clamp() {
        let config = GameConfig::default();
        let mut ball = ball_at(590.0, 200.0, 8.0, 0.0);
        step_ball(&mut ball, &config);
        assert_eq!(ball.pos.x, 598.0);
        assert_eq!(ball.vel.x, -8.0 * 0.98);
    }

    #[test]
    fn test_left_wall_flips_without_clamp() {
        let config = GameConfig::default();
        let mut ball = ball_at(10.0, 200.0, -8.0, 0.0);
        step_ball(&mut ball, &config);
        assert_eq!(ball.pos.x, 2.0);
        assert_eq!(ball.vel.x, 8.0 * 0.98);
    }

    #[test]
    fn test_no_ceiling() {
        let config = GameConfig::default();
        let mut ball = ball_at(300.0, 5.0, 0.0, -20.0);
        step_ball(&mut ball, &config);
        assert!(ball.pos.y < 0.0);
        assert!(ball.vel.y < 0.0);
    }

    proptest! {
        #[test]
        fn prop_free_flight_velocity(
            x in 50.0f32..550.0,
            y in 50.0f32..300.0,
            vx in -20.0f32..20.0,
            vy in -20.0f32..20.0,
        ) {
            let config = GameConfig::default();
            let mut ball = ball_at(x, y, vx, vy);
            step_ball(&mut ball, &config);
            let nx = x + vx;
            let ny = y + vy + 0.5;
            prop_assume!(nx - 15.0 >= 0.0 && nx + 15.0 <= 600.0 && ny + 15.0 <= 400.0);
            prop_assert_eq!(ball.vel.x, vx * 0.98);
            prop_assert_eq!(ball.vel.y, (vy + 0.5) * 0.98);
        }

        #[test]
        fn prop_floor_contact_clamps(x in 50.0f32..550.0, vy in 20.0f32..60.0) {
            let config = GameConfig::default();
            let mut ball = ball_at(x, 380.0, 0.0, vy);
            step_ball(&mut ball, &config);
            prop_assert_eq!(ball.pos.y, 400.0 - 15.0);
            prop_assert_eq!(ball.vel.y, -((vy + 0.5) * 0.98) * 0.8);
        }
    }
}
