//! Threshold-triggered population-control culling.
//!
//! When a species grows past the disaster threshold, a sickness sweeps
//! through it: the pass targets 20% of the living population but rolls an
//! independent 25% chance per animal in collection order, so realized deaths
//! may fall short of the target. Disaster deaths carry no predator credit.

use tracing::warn;

use super::animal::{Animal, Species};
use super::params::Params;
use super::random::RandomSource;
use super::stats::SimStats;

/// Runs the disaster pass over every species, before movement.
pub fn apply_disasters(
    animals: &mut [Animal],
    params: &Params,
    stats: &mut SimStats,
    rng: &mut impl RandomSource,
) {
    for species in Species::ALL {
        let count = animals
            .iter()
            .filter(|a| a.alive && a.species == species)
            .count();

        if count <= params.disaster_threshold {
            continue;
        }

        warn!(
            %species,
            population = count,
            "population at critical level, disease breaking out"
        );

        let kill_target = (count as f64 * params.disaster_kill_fraction) as usize;
        let mut killed = 0;

        for animal in animals.iter_mut() {
            if killed >= kill_target {
                break;
            }
            if animal.species == species && animal.alive && rng.chance(params.disaster_kill_chance)
            {
                animal.kill();
                killed += 1;
                stats.disaster_deaths += 1;
            }
        }

        warn!(%species, killed, "disaster pass finished");
    }
}
