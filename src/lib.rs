//! Slingshot - drag the ball, let it fly, pop the targets
//!
//! Core modules:
//! - `sim`: Simulation (input, physics, spawning, scoring)
//! - `scoreboard`: Current/highest score bookkeeping and display text
//! - `renderer`: Drawing surface abstraction and per-frame scene
//! - `session`: Single-owner event queue driving the loop
//! - `config`: Data-driven tuning

pub mod config;
pub mod renderer;
pub mod scoreboard;
pub mod session;
pub mod sim;

pub use config::GameConfig;
pub use scoreboard::{ScoreSink, Scoreboard};
pub use session::{HostEvent, Session};

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Drawable surface dimensions (logical units)
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 400.0;

    /// Fixed anchor of the sling; the ball also starts here
    pub const SLINGSHOT_ORIGIN: Vec2 = Vec2::new(100.0, 300.0);

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 15.0;

    /// Downward acceleration added to vy every frame
    pub const GRAVITY: f32 = 0.5;
    /// Air resistance, multiplied into velocity every frame
    pub const DRAG: f32 = 0.98;
    /// Fraction of vertical speed kept after hitting the floor
    pub const FLOOR_RESTITUTION: f32 = 0.8;
    /// Launch velocity per unit of pull-back distance
    pub const LAUNCH_POWER: f32 = 0.2;

    /// Target spawn cadence
    pub const SPAWN_INTERVAL_MS: u32 = 2000;
    pub const TARGET_RADIUS_LARGE: f32 = 30.0;
    pub const TARGET_RADIUS_SMALL: f32 = 15.0;
    pub const TARGET_POINTS_LARGE: u32 = 1;
    pub const TARGET_POINTS_SMALL: u32 = 2;
    /// Spawn area (min corner, size) - keeps targets away from the edges
    pub const SPAWN_AREA_MIN: Vec2 = Vec2::new(150.0, 100.0);
    pub const SPAWN_AREA_SIZE: Vec2 = Vec2::new(400.0, 200.0);
    pub const TARGET_SATURATION: f32 = 70.0;
    pub const TARGET_LIGHTNESS: f32 = 50.0;

    /// Sling line style
    pub const SLING_WIDTH: f32 = 5.0;

    /// Nominal host refresh rate, used where frames must be mapped to wall-clock time
    pub const FRAME_MS: f64 = 1000.0 / 60.0;
}

/// Distance test shared by the pointer hit test and target collisions
#[inline]
pub fn circles_touch(a: Vec2, a_radius: f32, b: Vec2, b_radius: f32) -> bool {
    a.distance(b) <= a_radius + b_radius
}
