//! Pointer handling: grab, drag and release the ball

use glam::Vec2;

use super::state::GameState;
use crate::circles_touch;

/// A pointer event in surface-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    Down(Vec2),
    Move(Vec2),
    Up,
}

/// Apply one pointer event to the ball
pub fn handle_pointer(state: &mut GameState, event: PointerEvent) {
    let ball = &mut state.ball;
    match event {
        PointerEvent::Down(pos) => {
            // Hit test against the live position, so a flying ball can be caught
            if circles_touch(pos, 0.0, ball.pos, ball.radius) {
                ball.dragging = true;
                ball.released = false;
                log::debug!("Ball grabbed at ({:.1}, {:.1})", pos.x, pos.y);
            }
        }
        PointerEvent::Move(pos) => {
            if ball.dragging {
                ball.pos = pos;
            }
        }
        PointerEvent::Up => {
            if ball.dragging {
                ball.dragging = false;
                ball.released = true;
                ball.vel = launch_velocity(state.config.origin, ball.pos, state.config.launch_power);
                log::debug!("Ball launched with velocity ({:.2}, {:.2})", ball.vel.x, ball.vel.y);
            }
        }
    }
}

/// Velocity imparted on release: pulls the ball back toward and past the origin
#[inline]
pub fn launch_velocity(origin: Vec2, pos: Vec2, power: f32) -> Vec2 {
    (origin - pos) * power
}
