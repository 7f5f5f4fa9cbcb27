#![allow(missing_docs)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use fauna::simulation::animal::{Animal, Gender, Species};
use fauna::simulation::disaster::apply_disasters;
use fauna::simulation::params::Params;
use fauna::simulation::random::Fixed;
use fauna::simulation::stats::SimStats;

fn herd(species: Species, count: usize) -> Vec<Animal> {
    (0..count)
        .map(|i| {
            Animal::new(
                species,
                if i % 2 == 0 { Gender::Male } else { Gender::Female },
                (i % 500) as i32,
                0,
                0,
            )
        })
        .collect()
}

#[test]
fn test_population_at_threshold_does_not_trigger() {
    let params = Params::default();
    let mut stats = SimStats::default();
    let mut animals = herd(Species::Sheep, 100);

    // Fixed(0.0) would kill every scanned animal, so any death proves a
    // trigger.
    apply_disasters(&mut animals, &params, &mut stats, &mut Fixed(0.0));

    assert!(animals.iter().all(|a| a.alive));
    assert_eq!(stats.disaster_deaths, 0);
}

#[test]
fn test_population_above_threshold_triggers() {
    let params = Params::default();
    let mut stats = SimStats::default();
    let mut animals = herd(Species::Sheep, 101);

    apply_disasters(&mut animals, &params, &mut stats, &mut Fixed(0.0));

    // Kill target is floor(0.2 * 101) = 20, and every roll succeeds.
    let dead = animals.iter().filter(|a| !a.alive).count();
    assert_eq!(dead, 20);
    assert_eq!(stats.disaster_deaths, 20);
    // Scan order: the first 20 animals got sick.
    assert!(animals[..20].iter().all(|a| !a.alive));
    assert!(animals[20..].iter().all(|a| a.alive));
}

#[test]
fn test_kills_never_exceed_target() {
    let params = Params::default();
    for seed in 0..20 {
        let mut stats = SimStats::default();
        let mut animals = herd(Species::Cow, 150);
        let mut rng = StdRng::seed_from_u64(seed);

        apply_disasters(&mut animals, &params, &mut stats, &mut rng);

        let dead = animals.iter().filter(|a| !a.alive).count();
        assert!(dead <= 30, "seed {seed} killed {dead} of a target of 30");
        assert_eq!(stats.disaster_deaths as usize, dead);
    }
}

#[test]
fn test_realized_deaths_may_fall_short_of_target() {
    let params = Params::default();
    let mut stats = SimStats::default();
    let mut animals = herd(Species::Wolf, 120);

    // 0.5 >= 0.25 per-animal chance: the disaster triggers but nobody dies.
    apply_disasters(&mut animals, &params, &mut stats, &mut Fixed(0.5));

    assert!(animals.iter().all(|a| a.alive));
    assert_eq!(stats.disaster_deaths, 0);
}

#[test]
fn test_disaster_is_per_species() {
    let params = Params::default();
    let mut stats = SimStats::default();
    let mut animals = herd(Species::Sheep, 101);
    animals.extend(herd(Species::Cow, 5));

    apply_disasters(&mut animals, &params, &mut stats, &mut Fixed(0.0));

    // Only sheep are culled; the small cow herd is untouched.
    assert!(animals.iter().filter(|a| a.species == Species::Cow).all(|a| a.alive));
    assert_eq!(stats.disaster_deaths, 20);
}

#[test]
fn test_dead_animals_do_not_count_toward_population() {
    let params = Params::default();
    let mut stats = SimStats::default();
    let mut animals = herd(Species::Sheep, 101);
    animals[0].kill();

    // 100 living sheep: below the trigger.
    apply_disasters(&mut animals, &params, &mut stats, &mut Fixed(0.0));

    assert_eq!(stats.disaster_deaths, 0);
}
