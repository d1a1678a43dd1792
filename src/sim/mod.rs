//! Simulation module
//!
//! All gameplay logic lives here, free of rendering and platform code:
//! - One explicit `GameState`, mutated through `&mut`
//! - Seeded RNG only
//! - Targets kept in spawn order

pub mod collision;
pub mod input;
pub mod physics;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::resolve_target_hits;
pub use input::{PointerEvent, handle_pointer, launch_velocity};
pub use physics::step_ball;
pub use spawner::{SpawnTimer, spawn_target};
pub use state::{Ball, BallPhase, GameState, Hsl, Target};
pub use tick::tick;
