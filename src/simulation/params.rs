//! Simulation parameters.

use serde::{Deserialize, Serialize};

use super::error::SimulationError;

/// Simulation parameters that control world geometry, survival odds, and
/// initial population sizes.
///
/// [`Params::default`] reproduces the reference behavior; every knob can be
/// overridden from a JSON params file in the CLI.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Side length of the square world. Coordinates are clamped to
    /// `[0, world_size - 1]` on each axis.
    pub world_size: i32,
    /// Per-tick probability that a moving animal loses one energy.
    pub energy_decay_chance: f64,
    /// How far the hunter can see when picking its target.
    pub hunter_vision_range: i32,
    /// Probability that the hunter kills the nearest animal in range.
    pub hunter_kill_chance: f64,
    /// Movement speed of the hunter, in units per tick.
    pub hunter_speed: i32,
    /// Probability that a predator kill attempt on in-range prey succeeds.
    pub hunt_success_chance: f64,
    /// Energy a predator gains from a successful kill.
    pub hunt_energy_reward: u32,
    /// Maximum Manhattan distance at which a pair can mate.
    pub mating_distance: i32,
    /// Probability that a compatible pair actually mates.
    pub mating_chance: f64,
    /// Energy each parent loses on mating.
    pub mating_energy_cost: u32,
    /// Minimum energy required to be eligible for mating.
    pub min_mating_energy: u32,
    /// Probability that a fowl offspring is a hen rather than a rooster.
    pub hen_offspring_chance: f64,
    /// Living population above which a species triggers a disaster.
    pub disaster_threshold: usize,
    /// Fraction of the species population targeted by one disaster pass.
    pub disaster_kill_fraction: f64,
    /// Per-animal sickness probability during a disaster scan.
    pub disaster_kill_chance: f64,
    /// Initial male/female sheep pairs.
    pub initial_sheep_pairs: usize,
    /// Initial male/female cow pairs.
    pub initial_cow_pairs: usize,
    /// Initial hens (all female).
    pub initial_hens: usize,
    /// Initial roosters (all male).
    pub initial_roosters: usize,
    /// Initial male/female wolf pairs.
    pub initial_wolf_pairs: usize,
    /// Initial male/female lion pairs.
    pub initial_lion_pairs: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            world_size: 500,
            energy_decay_chance: 0.1,
            hunter_vision_range: 8,
            hunter_kill_chance: 0.3,
            hunter_speed: 1,
            hunt_success_chance: 0.5,
            hunt_energy_reward: 5,
            mating_distance: 3,
            mating_chance: 0.15,
            mating_energy_cost: 3,
            min_mating_energy: 10,
            hen_offspring_chance: 0.7,
            disaster_threshold: 100,
            disaster_kill_fraction: 0.2,
            disaster_kill_chance: 0.25,
            initial_sheep_pairs: 15,
            initial_cow_pairs: 5,
            initial_hens: 10,
            initial_roosters: 10,
            initial_wolf_pairs: 5,
            initial_lion_pairs: 4,
        }
    }
}

impl Params {
    /// Rejects configurations the tick loop cannot run on.
    ///
    /// Called once before the loop starts; a valid `Params` never produces a
    /// runtime error inside a tick.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.world_size < 1 {
            return Err(SimulationError::InvalidWorldSize(self.world_size));
        }

        let probabilities = [
            ("energy_decay_chance", self.energy_decay_chance),
            ("hunter_kill_chance", self.hunter_kill_chance),
            ("hunt_success_chance", self.hunt_success_chance),
            ("mating_chance", self.mating_chance),
            ("hen_offspring_chance", self.hen_offspring_chance),
            ("disaster_kill_fraction", self.disaster_kill_fraction),
            ("disaster_kill_chance", self.disaster_kill_chance),
        ];

        for (name, value) in probabilities {
            if !(0.0..=1.0).contains(&value) {
                return Err(SimulationError::InvalidProbability { name, value });
            }
        }

        Ok(())
    }
}
