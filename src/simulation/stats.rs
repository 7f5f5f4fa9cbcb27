//! Cumulative event counters and population snapshots.
//!
//! The statistics context is owned by the world and passed explicitly into
//! each phase, so there is no process-wide mutable state. External reporting
//! reads these counters; formatting is out of scope here.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::animal::{Animal, Species};

/// Cumulative event counters for one simulation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimStats {
    /// Animals born through mating.
    pub born: u64,
    /// Animals killed by the hunter.
    pub hunter_kills: u64,
    /// Animals killed by lions.
    pub lion_kills: u64,
    /// Animals killed by wolves.
    pub wolf_kills: u64,
    /// Animals that died from energy exhaustion.
    pub energy_deaths: u64,
    /// Animals culled by disaster events.
    pub disaster_deaths: u64,
}

impl SimStats {
    /// Total deaths attributable to predation (hunter, lion, wolf).
    pub fn predation_deaths(&self) -> u64 {
        self.hunter_kills + self.lion_kills + self.wolf_kills
    }

    /// Credits a kill to the given predator species.
    pub fn record_predator_kill(&mut self, predator: Species) {
        match predator {
            Species::Lion => self.lion_kills += 1,
            Species::Wolf => self.wolf_kills += 1,
            // Non-predator species never claim kills.
            Species::Sheep | Species::Cow | Species::Chicken | Species::Rooster => {}
        }
    }
}

/// A point-in-time view of the population, for periodic trend reporting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    /// Tick at which the snapshot was taken.
    pub tick: u64,
    /// Number of living animals.
    pub living: usize,
    /// Living animals per species.
    pub per_species: BTreeMap<Species, usize>,
}

impl Snapshot {
    /// Builds a snapshot from the current living collection.
    pub fn capture(tick: u64, animals: &[Animal]) -> Self {
        let mut per_species = BTreeMap::new();
        let mut living = 0;

        for animal in animals {
            if animal.alive {
                living += 1;
                *per_species.entry(animal.species).or_insert(0) += 1;
            }
        }

        Self {
            tick,
            living,
            per_species,
        }
    }

    /// Living count for one species (0 if absent).
    pub fn count(&self, species: Species) -> usize {
        self.per_species.get(&species).copied().unwrap_or(0)
    }
}
