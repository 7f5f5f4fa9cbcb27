//! Hunter, lion, and wolf hunting phases.
//!
//! The three phases run in a fixed order (hunter, then lions, then wolves)
//! against the same pre-filter collection. Every claim goes through the
//! shared `hunted` index set, so each prey falls to at most one predator per
//! tick, while a single predator may take several distinct prey. Later
//! phases, and the mating phase after them, observe earlier claims through
//! that set; this ordering is part of the observable behavior.

use std::collections::HashSet;

use tracing::debug;

use super::animal::{Animal, Species};
use super::geometry::manhattan_distance;
use super::hunter::Hunter;
use super::params::Params;
use super::random::RandomSource;
use super::stats::SimStats;

/// Resolves the hunter's single shot at the nearest visible animal.
///
/// The nearest living animal within vision is selected with a strict `<`
/// comparison, so ties go to the first animal in scan order. If a target
/// exists, one draw against `hunter_kill_chance` decides the kill.
pub fn hunter_phase(
    animals: &mut [Animal],
    hunter: &Hunter,
    hunted: &mut HashSet<usize>,
    params: &Params,
    stats: &mut SimStats,
    rng: &mut impl RandomSource,
) {
    let mut shortest = hunter.vision_range + 1;
    let mut closest: Option<usize> = None;

    for (i, animal) in animals.iter().enumerate() {
        if !animal.alive {
            continue;
        }
        let distance = manhattan_distance(hunter, animal);
        if distance <= hunter.vision_range && distance < shortest {
            shortest = distance;
            closest = Some(i);
        }
    }

    if let Some(index) = closest {
        if rng.chance(params.hunter_kill_chance) {
            animals[index].kill();
            hunted.insert(index);
            stats.hunter_kills += 1;
            debug!(target_species = %animals[index].species, distance = shortest, "hunter kill");
        }
    }
}

/// Resolves one predator species' hunting pass.
///
/// Every living predator of `predator` scans all animals; each living,
/// unclaimed prey in its species' prey set and hunt range is attempted with
/// one draw against `hunt_success_chance`. A kill claims the prey, feeds the
/// predator, and credits the species' kill counter.
pub fn predator_phase(
    predator: Species,
    animals: &mut [Animal],
    hunted: &mut HashSet<usize>,
    params: &Params,
    stats: &mut SimStats,
    rng: &mut impl RandomSource,
) {
    let Some(range) = predator.hunt_range() else {
        return;
    };

    for i in 0..animals.len() {
        if !animals[i].alive || animals[i].species != predator {
            continue;
        }

        for j in 0..animals.len() {
            if i == j || !animals[j].alive || hunted.contains(&j) {
                continue;
            }
            if !predator.preys_on(animals[j].species) {
                continue;
            }
            if manhattan_distance(&animals[i], &animals[j]) > range {
                continue;
            }

            if rng.chance(params.hunt_success_chance) {
                animals[j].kill();
                hunted.insert(j);
                animals[i].gain_energy(params.hunt_energy_reward);
                stats.record_predator_kill(predator);
                debug!(%predator, prey = %animals[j].species, "predator kill");
            }
        }
    }
}
