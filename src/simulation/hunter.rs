//! The hunter agent.
//!
//! A singleton agent with a position and a vision range. The hunter has no
//! energy, gender, or species; it cannot die, reproduce, or be hunted.

use serde::{Deserialize, Serialize};

use super::geometry::{self, Located};
use super::params::Params;
use super::random::RandomSource;

/// Direction offsets shared with animal movement.
const DX: [i32; 4] = [0, 1, 0, -1];
const DY: [i32; 4] = [1, 0, -1, 0];

/// The hunter stalking the world for the whole run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hunter {
    /// X coordinate, clamped to world bounds.
    pub x: i32,
    /// Y coordinate, clamped to world bounds.
    pub y: i32,
    /// Maximum Manhattan distance at which the hunter sees a target.
    pub vision_range: i32,
}

impl Hunter {
    /// Creates a hunter at the given position with the configured vision.
    pub fn new(x: i32, y: i32, params: &Params) -> Self {
        Self {
            x,
            y,
            vision_range: params.hunter_vision_range,
        }
    }

    /// Creates a hunter at a uniformly random position.
    pub fn new_random(params: &Params, rng: &mut impl RandomSource) -> Self {
        let x = rng.position(params.world_size);
        let y = rng.position(params.world_size);
        Self::new(x, y, params)
    }

    /// Moves one step in a uniform cardinal direction, truncated at the
    /// world edges. The hunter has no energy model.
    pub fn move_step(&mut self, params: &Params, rng: &mut impl RandomSource) {
        let direction = rng.pick(4);
        self.x = geometry::clamp_to_world(self.x + DX[direction] * params.hunter_speed, params.world_size);
        self.y = geometry::clamp_to_world(self.y + DY[direction] * params.hunter_speed, params.world_size);
    }
}

impl Located for Hunter {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}
