//! Timed target generation

use glam::Vec2;
use rand::Rng;

use super::state::{GameState, Hsl, Target};

/// Append one freshly rolled target to the live set
pub fn spawn_target(state: &mut GameState) -> u32 {
    let id = state.next_entity_id();
    let config = &state.config;
    let rng = &mut state.rng;

    let size = if rng.random_bool(0.5) {
        config.large_target
    } else {
        config.small_target
    };
    let pos = config.spawn_min
        + Vec2::new(
            rng.random::<f32>() * config.spawn_size.x,
            rng.random::<f32>() * config.spawn_size.y,
        );
    let color = Hsl {
        hue: rng.random::<f32>() * 360.0,
        saturation: config.target_saturation,
        lightness: config.target_lightness,
    };

    state.targets.push(Target {
        id,
        pos,
        radius: size.radius,
        color,
        points: size.points,
    });
    log::debug!(
        "Spawned target {} r={} at ({:.0}, {:.0}), {} live",
        id,
        size.radius,
        pos.x,
        pos.y,
        state.targets.len()
    );
    id
}

/// Turns elapsed wall-clock time into spawn firings, for hosts without an interval timer
#[derive(Debug, Clone)]
pub struct SpawnTimer {
    interval_ms: f64,
    elapsed_ms: f64,
}

impl SpawnTimer {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            interval_ms: f64::from(interval_ms.max(1)),
            elapsed_ms: 0.0,
        }
    }

    /// Advance by `dt_ms`, returning how many times the timer fired
    pub fn advance(&mut self, dt_ms: f64) -> u32 {
        if !dt_ms.is_finite() {
            log::warn!("Ignoring non-finite spawn timer step {}", dt_ms);
            return 0;
        }
        self.elapsed_ms += dt_ms.max(0.0);
        let fired = (self.elapsed_ms / self.interval_ms).floor();
        self.elapsed_ms %= self.interval_ms;
        // Saturates at u32::MAX
        fired as u32
    }
}
