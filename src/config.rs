//! Game tuning
//!
//! Every knob defaults to the values in [`crate::consts`]. Hosts may
//! override any subset from JSON; missing fields keep their defaults.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Target size class
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSize {
    pub radius: f32,
    pub points: u32,
}

/// Game tuning values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // === Surface ===
    pub width: f32,
    pub height: f32,

    // === Sling & ball ===
    pub origin: Vec2,
    pub ball_radius: f32,
    pub launch_power: f32,

    // === Physics ===
    pub gravity: f32,
    pub drag: f32,
    pub floor_restitution: f32,

    // === Spawner ===
    pub spawn_interval_ms: u32,
    pub large_target: TargetSize,
    pub small_target: TargetSize,
    pub spawn_min: Vec2,
    pub spawn_size: Vec2,
    pub target_saturation: f32,
    pub target_lightness: f32,

    // === Look ===
    pub sling_color: String,
    pub sling_width: f32,
    pub ball_color: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: CANVAS_WIDTH,
            height: CANVAS_HEIGHT,

            origin: SLINGSHOT_ORIGIN,
            ball_radius: BALL_RADIUS,
            launch_power: LAUNCH_POWER,

            gravity: GRAVITY,
            drag: DRAG,
            floor_restitution: FLOOR_RESTITUTION,

            spawn_interval_ms: SPAWN_INTERVAL_MS,
            large_target: TargetSize {
                radius: TARGET_RADIUS_LARGE,
                points: TARGET_POINTS_LARGE,
            },
            small_target: TargetSize {
                radius: TARGET_RADIUS_SMALL,
                points: TARGET_POINTS_SMALL,
            },
            spawn_min: SPAWN_AREA_MIN,
            spawn_size: SPAWN_AREA_SIZE,
            target_saturation: TARGET_SATURATION,
            target_lightness: TARGET_LIGHTNESS,

            sling_color: "brown".to_string(),
            sling_width: SLING_WIDTH,
            ball_color: "red".to_string(),
        }
    }
}

impl GameConfig {
    /// Parse overrides from JSON. Unknown fields are ignored, missing ones default.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Replace values the simulation cannot run with by their defaults
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();

        if !(self.width > 0.0 && self.height > 0.0) {
            log::warn!("Invalid surface size {}x{}, using default", self.width, self.height);
            self.width = defaults.width;
            self.height = defaults.height;
        }
        if !(self.drag > 0.0 && self.drag <= 1.0) {
            log::warn!("Drag {} outside (0, 1], using {}", self.drag, defaults.drag);
            self.drag = defaults.drag;
        }
        if !(self.ball_radius > 0.0) {
            log::warn!("Ball radius {} must be positive, using {}", self.ball_radius, defaults.ball_radius);
            self.ball_radius = defaults.ball_radius;
        }
        if self.spawn_interval_ms == 0 {
            log::warn!("Spawn interval must be non-zero, using {} ms", defaults.spawn_interval_ms);
            self.spawn_interval_ms = defaults.spawn_interval_ms;
        }
        if !(self.large_target.radius > 0.0) {
            log::warn!(
                "Large target radius {} must be positive, using {}",
                self.large_target.radius,
                defaults.large_target.radius
            );
            self.large_target = defaults.large_target;
        }
        if !(self.small_target.radius > 0.0) {
            log::warn!(
                "Small target radius {} must be positive, using {}",
                self.small_target.radius,
                defaults.small_target.radius
            );
            self.small_target = defaults.small_target;
        }
        self
    }
}
