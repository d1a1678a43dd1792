//! Ball vs target collision detection and scoring

use super::state::GameState;
use crate::circles_touch;
use crate::scoreboard::ScoreUpdate;

/// Remove every target the ball touches and award its points.
///
/// Only a launched ball scores. All overlapping targets count in the same
/// pass; the survivors keep their order. Returns the display text of each
/// award in hit order.
pub fn resolve_target_hits(state: &mut GameState) -> Vec<ScoreUpdate> {
    if !state.ball.released {
        return Vec::new();
    }

    let ball = &state.ball;
    let score = &mut state.score;
    let mut updates = Vec::new();

    state.targets.retain(|target| {
        if circles_touch(ball.pos, ball.radius, target.pos, target.radius) {
            updates.push(score.award(target.points));
            log::debug!("Hit target {} for {} points", target.id, target.points);
            false
        } else {
            true
        }
    });

    updates
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Hsl, Target};
    use glam::Vec2;
    use proptest::prelude::*;

    fn target(id: u32, x: f32, y: f32, radius: f32, points: u32) -> Target {
        Target {
            id,
            pos: Vec2::new(x, y),
            radius,
            color: Hsl {
                hue: 0.0,
                saturation: 70.0,
                lightness: 50.0,
            },
            points,
        }
    }

    fn launched_state_at(x: f32, y: f32) -> GameState {
        let mut state = GameState::new(11);
        state.ball.pos = Vec2::new(x, y);
        state.ball.released = true;
        state
    }

    #[test]
    fn test_two_hits_in_one_pass() {
        let mut state = launched_state_at(300.0, 200.0);
        state.targets.push(target(1, 320.0, 200.0, 30.0, 1));
        state.targets.push(target(2, 300.0, 225.0, 15.0, 2));
        state.targets.push(target(3, 500.0, 100.0, 15.0, 2));

        let updates = resolve_target_hits(&mut state);

        assert_eq!(updates.len(), 2);
        assert_eq!(state.score.current(), 3);
        assert_eq!(state.score.highest(), 3);
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.targets[0].id, 3);
        assert_eq!(updates[0].current_text, "Score: 1");
        assert_eq!(updates[1].current_text, "Score: 3");
        assert_eq!(updates[1].highest_text.as_deref(), Some("Highest: 3"));
    }

    #[test]
    fn test_unreleased_ball_never_scores() {
        let mut state = launched_state_at(300.0, 200.0);
        state.ball.released = false;
        state.targets.push(target(1, 300.0, 200.0, 30.0, 1));

        assert!(resolve_target_hits(&mut state).is_empty());
        assert_eq!(state.targets.len(), 1);
        assert_eq!(state.score.current(), 0);
    }

    #[test]
    fn test_touching_edges_count() {
        let mut state = launched_state_at(300.0, 200.0);
        state.targets.push(target(1, 345.0, 200.0, 30.0, 1));
        resolve_target_hits(&mut state);
        assert!(state.targets.is_empty());
    }

    #[test]
    fn test_target_scores_once() {
        let mut state = launched_state_at(300.0, 200.0);
        state.targets.push(target(1, 300.0, 200.0, 15.0, 2));
        resolve_target_hits(&mut state);
        resolve_target_hits(&mut state);
        assert_eq!(state.score.current(), 2);
    }

    proptest! {
        #[test]
        fn prop_hit_iff_within_radius_sum(
            dx in -80.0f32..80.0,
            dy in -80.0f32..80.0,
            large in any::<bool>(),
        ) {
            let radius = if large { 30.0 } else { 15.0 };
            let mut state = launched_state_at(300.0, 200.0);
            let pos = Vec2::new(300.0 + dx, 200.0 + dy);
            state.targets.push(target(1, pos.x, pos.y, radius, 1));

            let touching = state.ball.pos.distance(pos) <= state.ball.radius + radius;
            resolve_target_hits(&mut state);

            prop_assert_eq!(state.targets.is_empty(), touching);
            prop_assert_eq!(state.score.current(), if touching { 1 } else { 0 });
        }
    }
}
