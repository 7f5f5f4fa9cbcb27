//! Pairwise mating and offspring generation.
//!
//! Runs after predation over the same pre-filter collection. Each animal
//! mates at most once per tick, with the first compatible partner found in
//! scan order rather than the nearest one. Fowl are the special case: a hen
//! and a rooster pair across species, and the offspring species is a separate
//! 70/30 draw.

use std::collections::HashSet;

use tracing::debug;

use super::animal::{Animal, Gender, Species};
use super::geometry::{manhattan_distance, midpoint};
use super::params::Params;
use super::random::RandomSource;
use super::stats::SimStats;

/// Whether two animals can pair at all, ignoring distance and luck.
///
/// Non-fowl require identical species; the two fowl species form one mating
/// class. Gender must differ in both cases.
fn compatible(a: &Animal, b: &Animal) -> bool {
    let same_class = a.species == b.species || (a.species.is_fowl() && b.species.is_fowl());
    same_class && a.gender != b.gender
}

/// Draws the offspring for a successful pairing.
///
/// Direct reproducers pass their species on, with a 50/50 gender draw. Fowl
/// offspring are 70% hen (always female), 30% rooster (always male),
/// regardless of which fowl species the parents were.
fn draw_offspring(
    parents: (&Animal, &Animal),
    birth_tick: u64,
    params: &Params,
    rng: &mut impl RandomSource,
) -> Animal {
    let (first, second) = parents;
    let x = midpoint(first.x, second.x);
    let y = midpoint(first.y, second.y);

    let (species, gender) = if first.species.is_fowl() {
        if rng.chance(params.hen_offspring_chance) {
            (Species::Chicken, Gender::Female)
        } else {
            (Species::Rooster, Gender::Male)
        }
    } else {
        let gender = if rng.chance(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        (first.species, gender)
    };

    Animal::new(species, gender, x, y, birth_tick)
}

/// Runs the mating pass and returns the newborns.
///
/// Scans all index pairs `(i, j)` with `i < j`. Eligibility on both sides:
/// alive, not claimed by a predator this tick, not already mated this tick,
/// and energy at or above the mating minimum. A qualifying pair succeeds with
/// one draw against `mating_chance`; on success both parents pay the energy
/// cost and the outer animal stops searching.
pub fn mating_phase(
    animals: &mut [Animal],
    hunted: &HashSet<usize>,
    birth_tick: u64,
    params: &Params,
    stats: &mut SimStats,
    rng: &mut impl RandomSource,
) -> Vec<Animal> {
    let mut newborns = Vec::new();
    let mut mated: HashSet<usize> = HashSet::new();

    let eligible = |animal: &Animal, index: usize, mated: &HashSet<usize>| {
        animal.alive
            && !mated.contains(&index)
            && !hunted.contains(&index)
            && animal.energy >= params.min_mating_energy
    };

    for i in 0..animals.len() {
        if !eligible(&animals[i], i, &mated) {
            continue;
        }

        for j in (i + 1)..animals.len() {
            if !eligible(&animals[j], j, &mated) {
                continue;
            }
            if !compatible(&animals[i], &animals[j]) {
                continue;
            }
            if manhattan_distance(&animals[i], &animals[j]) > params.mating_distance {
                continue;
            }
            if !rng.chance(params.mating_chance) {
                continue;
            }

            let offspring = draw_offspring((&animals[i], &animals[j]), birth_tick, params, rng);
            debug!(species = %offspring.species, x = offspring.x, y = offspring.y, "birth");
            newborns.push(offspring);

            animals[i].energy = animals[i].energy.saturating_sub(params.mating_energy_cost);
            animals[j].energy = animals[j].energy.saturating_sub(params.mating_energy_cost);
            animals[i].mating_count += 1;
            animals[j].mating_count += 1;
            mated.insert(i);
            mated.insert(j);
            stats.born += 1;
            break;
        }
    }

    newborns
}
