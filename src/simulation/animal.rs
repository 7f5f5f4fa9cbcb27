//! Animal state, species, and gender definitions.
//!
//! Species and gender are closed enums so speed, prey-set, and hunt-range
//! lookups are exhaustive matches checked by the compiler; an unknown species
//! cannot reach the engine.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::SimulationError;
use super::geometry::{self, Located};
use super::params::Params;
use super::random::RandomSource;

/// The six animal species in the world.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Species {
    /// Herbivore, prey of both lions and wolves.
    Sheep,
    /// Herbivore, prey of lions only.
    Cow,
    /// Fowl, always female, prey of wolves.
    Chicken,
    /// Fowl, always male, prey of wolves.
    Rooster,
    /// Carnivore hunting sheep and fowl.
    Wolf,
    /// Carnivore hunting sheep and cows.
    Lion,
}

impl Species {
    /// All species, in initialization and reporting order.
    pub const ALL: [Species; 6] = [
        Species::Sheep,
        Species::Cow,
        Species::Chicken,
        Species::Rooster,
        Species::Wolf,
        Species::Lion,
    ];

    /// Movement speed in units per tick.
    pub fn speed(self) -> i32 {
        match self {
            Species::Sheep | Species::Cow => 2,
            Species::Chicken | Species::Rooster => 1,
            Species::Wolf => 3,
            Species::Lion => 4,
        }
    }

    /// Maximum Manhattan distance at which this species can hunt, or `None`
    /// for non-predators.
    pub fn hunt_range(self) -> Option<i32> {
        match self {
            Species::Wolf => Some(4),
            Species::Lion => Some(5),
            Species::Sheep | Species::Cow | Species::Chicken | Species::Rooster => None,
        }
    }

    /// Whether this species hunts the given prey species.
    ///
    /// Lions take the large herbivores; wolves take sheep and fowl. The prey
    /// sets overlap only on sheep.
    pub fn preys_on(self, prey: Species) -> bool {
        match self {
            Species::Lion => matches!(prey, Species::Sheep | Species::Cow),
            Species::Wolf => {
                matches!(prey, Species::Sheep | Species::Chicken | Species::Rooster)
            }
            Species::Sheep | Species::Cow | Species::Chicken | Species::Rooster => false,
        }
    }

    /// Whether this species belongs to the fowl class (chicken or rooster).
    ///
    /// Fowl mate across the two species; everyone else mates strictly within
    /// their own.
    pub fn is_fowl(self) -> bool {
        matches!(self, Species::Chicken | Species::Rooster)
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Species::Sheep => "sheep",
            Species::Cow => "cow",
            Species::Chicken => "chicken",
            Species::Rooster => "rooster",
            Species::Wolf => "wolf",
            Species::Lion => "lion",
        };
        f.write_str(label)
    }
}

impl FromStr for Species {
    type Err = SimulationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sheep" => Ok(Species::Sheep),
            "cow" => Ok(Species::Cow),
            "chicken" => Ok(Species::Chicken),
            "rooster" => Ok(Species::Rooster),
            "wolf" => Ok(Species::Wolf),
            "lion" => Ok(Species::Lion),
            _ => Err(SimulationError::UnknownSpecies(s.to_string())),
        }
    }
}

/// Animal gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

/// Cardinal direction offsets, indexed by one uniform draw per move.
const DX: [i32; 4] = [0, 1, 0, -1];
const DY: [i32; 4] = [1, 0, -1, 0];

/// A single animal agent.
///
/// Energy starts at 100 and only increases through a successful predator
/// kill. `alive` is irreversible: once an animal dies from energy exhaustion,
/// predation, or a disaster, it is never mutated again and is removed at the
/// end of the tick.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Animal {
    /// Species of this animal.
    pub species: Species,
    /// Gender of this animal.
    pub gender: Gender,
    /// X coordinate, clamped to world bounds.
    pub x: i32,
    /// Y coordinate, clamped to world bounds.
    pub y: i32,
    /// Remaining energy. Death at zero.
    pub energy: u32,
    /// Whether the animal is still alive.
    pub alive: bool,
    /// Ticks survived so far.
    pub age: u32,
    /// Total Manhattan distance actually covered, after edge truncation.
    pub distance_traveled: u32,
    /// Number of successful matings.
    pub mating_count: u32,
    /// Tick on which this animal was born (0 for the initial population).
    pub birth_tick: u64,
}

impl Animal {
    /// Creates a live animal with full energy.
    pub fn new(species: Species, gender: Gender, x: i32, y: i32, birth_tick: u64) -> Self {
        Self {
            species,
            gender,
            x,
            y,
            energy: 100,
            alive: true,
            age: 0,
            distance_traveled: 0,
            mating_count: 0,
            birth_tick,
        }
    }

    /// Performs one movement step: a uniform cardinal direction, displaced by
    /// the species speed and truncated at the world edges.
    ///
    /// With probability `energy_decay_chance` the animal loses one energy;
    /// reaching zero is an energy death, distinct from being hunted.
    pub fn move_step(&mut self, params: &Params, rng: &mut impl RandomSource) {
        let direction = rng.pick(4);
        let speed = self.species.speed();

        let (old_x, old_y) = (self.x, self.y);
        self.x = geometry::clamp_to_world(self.x + DX[direction] * speed, params.world_size);
        self.y = geometry::clamp_to_world(self.y + DY[direction] * speed, params.world_size);

        self.distance_traveled += ((self.x - old_x).abs() + (self.y - old_y).abs()) as u32;
        self.age += 1;

        if rng.chance(params.energy_decay_chance) {
            self.energy = self.energy.saturating_sub(1);
        }

        if self.energy == 0 {
            self.alive = false;
        }
    }

    /// Marks the animal dead. Irreversible.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Adds energy from a successful kill.
    pub fn gain_energy(&mut self, amount: u32) {
        self.energy += amount;
    }
}

impl Located for Animal {
    fn x(&self) -> i32 {
        self.x
    }

    fn y(&self) -> i32 {
        self.y
    }
}
