//! World state and per-tick orchestration.
//!
//! One tick runs, in order: disaster pass, movement for every living animal,
//! hunter movement, then the combined predation and mating pass over the same
//! pre-filter collection. Dead and hunted animals are removed once, at the
//! end of the tick, and newborns are appended after the filter, so positional
//! indices stay valid for the whole tick.

use std::collections::HashSet;

use serde::Serialize;

use super::animal::{Animal, Gender, Species};
use super::disaster;
use super::hunter::Hunter;
use super::params::Params;
use super::predation;
use super::random::RandomSource;
use super::reproduction;
use super::stats::{SimStats, Snapshot};

/// The full simulation state: the shared agent collection, the hunter, the
/// current tick, and the run's cumulative counters.
#[derive(Debug, Clone, Serialize)]
pub struct World {
    /// All animals, living and (until the end-of-tick filter) dead.
    pub animals: Vec<Animal>,
    /// The hunter agent.
    pub hunter: Hunter,
    /// Number of completed ticks.
    pub tick: u64,
    stats: SimStats,
}

impl World {
    /// Creates a world with the initial per-species population at random
    /// positions and a hunter at a random position.
    ///
    /// Counters start at zero; constructing a fresh world is the explicit
    /// reset point for a run.
    pub fn new(params: &Params, rng: &mut impl RandomSource) -> Self {
        let animals = initialize_population(params, rng);
        let hunter = Hunter::new_random(params, rng);

        Self {
            animals,
            hunter,
            tick: 0,
            stats: SimStats::default(),
        }
    }

    /// Creates a world from an explicit agent collection.
    ///
    /// Used to set up exact scenarios; counters start at zero.
    pub fn with_population(animals: Vec<Animal>, hunter: Hunter) -> Self {
        Self {
            animals,
            hunter,
            tick: 0,
            stats: SimStats::default(),
        }
    }

    /// Advances the simulation by one tick.
    pub fn step(&mut self, params: &Params, rng: &mut impl RandomSource) {
        disaster::apply_disasters(&mut self.animals, params, &mut self.stats, rng);

        for animal in &mut self.animals {
            if animal.alive {
                animal.move_step(params, rng);
                if !animal.alive {
                    self.stats.energy_deaths += 1;
                }
            }
        }

        self.hunter.move_step(params, rng);

        // Predation and mating share one frozen index space; `hunted` is the
        // exclusivity set every later phase consults before acting.
        let mut hunted: HashSet<usize> = HashSet::new();
        predation::hunter_phase(
            &mut self.animals,
            &self.hunter,
            &mut hunted,
            params,
            &mut self.stats,
            rng,
        );
        predation::predator_phase(
            Species::Lion,
            &mut self.animals,
            &mut hunted,
            params,
            &mut self.stats,
            rng,
        );
        predation::predator_phase(
            Species::Wolf,
            &mut self.animals,
            &mut hunted,
            params,
            &mut self.stats,
            rng,
        );

        let newborns = reproduction::mating_phase(
            &mut self.animals,
            &hunted,
            self.tick,
            params,
            &mut self.stats,
            rng,
        );

        // Single removal/insertion point per tick.
        let mut index = 0;
        self.animals.retain(|animal| {
            let keep = animal.alive && !hunted.contains(&index);
            index += 1;
            keep
        });
        self.animals.extend(newborns);

        self.tick += 1;
    }

    /// Runs the tick loop for the given number of ticks.
    pub fn run(&mut self, params: &Params, ticks: u64, rng: &mut impl RandomSource) {
        for _ in 0..ticks {
            self.step(params, rng);
        }
    }

    /// Read-only view of the cumulative event counters.
    pub fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Captures the current population snapshot.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::capture(self.tick, &self.animals)
    }

    /// Iterates over the living animals.
    pub fn living(&self) -> impl Iterator<Item = &Animal> {
        self.animals.iter().filter(|a| a.alive)
    }
}

/// Builds the fixed starting population at random positions.
///
/// Sheep, cows, wolves, and lions start as male/female pairs; chickens are
/// all hens and roosters all male, matching their fixed offspring genders.
pub fn initialize_population(params: &Params, rng: &mut impl RandomSource) -> Vec<Animal> {
    let mut animals = Vec::new();

    for _ in 0..params.initial_sheep_pairs {
        animals.push(spawn(Species::Sheep, Gender::Male, params, rng));
        animals.push(spawn(Species::Sheep, Gender::Female, params, rng));
    }
    for _ in 0..params.initial_cow_pairs {
        animals.push(spawn(Species::Cow, Gender::Male, params, rng));
        animals.push(spawn(Species::Cow, Gender::Female, params, rng));
    }
    for _ in 0..params.initial_hens {
        animals.push(spawn(Species::Chicken, Gender::Female, params, rng));
    }
    for _ in 0..params.initial_roosters {
        animals.push(spawn(Species::Rooster, Gender::Male, params, rng));
    }
    for _ in 0..params.initial_wolf_pairs {
        animals.push(spawn(Species::Wolf, Gender::Male, params, rng));
        animals.push(spawn(Species::Wolf, Gender::Female, params, rng));
    }
    for _ in 0..params.initial_lion_pairs {
        animals.push(spawn(Species::Lion, Gender::Male, params, rng));
        animals.push(spawn(Species::Lion, Gender::Female, params, rng));
    }

    animals
}

fn spawn(
    species: Species,
    gender: Gender,
    params: &Params,
    rng: &mut impl RandomSource,
) -> Animal {
    let x = rng.position(params.world_size);
    let y = rng.position(params.world_size);
    Animal::new(species, gender, x, y, 0)
}
