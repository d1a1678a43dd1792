//! Game state and core simulation types
//!
//! Everything the input handler, spawner and update step touch lives in
//! [`GameState`], which the host owns and passes in by `&mut`.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::config::GameConfig;
use crate::scoreboard::Scoreboard;

/// Where the ball's motion comes from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallPhase {
    /// Never launched; sitting at the sling origin
    Resting,
    /// Held by the pointer, position is input-driven
    Dragging,
    /// Launched at least once and physics-driven
    Flying,
}

/// The player's ball
#[derive(Debug, Clone, PartialEq)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Held by the pointer (no physics)
    pub dragging: bool,
    /// Launched since the last grab; targets only score while set
    pub released: bool,
}

impl Ball {
    pub fn new(pos: Vec2, radius: f32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            radius,
            dragging: false,
            released: false,
        }
    }

    pub fn phase(&self) -> BallPhase {
        if self.dragging {
            BallPhase::Dragging
        } else if self.released {
            BallPhase::Flying
        } else {
            BallPhase::Resting
        }
    }
}

/// Fill color of a target, as hue/saturation/lightness
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    /// Degrees, [0, 360)
    pub hue: f32,
    /// Percent
    pub saturation: f32,
    /// Percent
    pub lightness: f32,
}

impl Hsl {
    /// CSS color string, e.g. `hsl(120, 70%, 50%)`
    pub fn to_css(&self) -> String {
        format!("hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

/// A scoring circle
#[derive(Debug, Clone, PartialEq)]
pub struct Target {
    pub id: u32,
    pub pos: Vec2,
    pub radius: f32,
    pub color: Hsl,
    pub points: u32,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub rng: Pcg32,
    pub config: GameConfig,
    pub ball: Ball,
    /// Live targets in spawn order (also the draw order)
    pub targets: Vec<Target>,
    pub score: Scoreboard,
    /// Frames stepped so far
    pub time_ticks: u64,
    /// Next entity ID
    next_id: u32,
}

impl GameState {
    /// Create a new game state with default tuning
    pub fn new(seed: u64) -> Self {
        Self::with_config(seed, GameConfig::default())
    }

    pub fn with_config(seed: u64, config: GameConfig) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            ball: Ball::new(config.origin, config.ball_radius),
            config,
            targets: Vec::new(),
            score: Scoreboard::new(),
            time_ticks: 0,
            next_id: 1,
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}
