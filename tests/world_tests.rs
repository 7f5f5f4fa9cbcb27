#![allow(missing_docs)]

use rand::SeedableRng;
use rand::rngs::StdRng;

use fauna::simulation::animal::{Animal, Gender, Species};
use fauna::simulation::hunter::Hunter;
use fauna::simulation::params::Params;
use fauna::simulation::random::{Fixed, Sequence};
use fauna::simulation::world::World;

fn far_hunter(params: &Params) -> Hunter {
    Hunter::new(400, 400, params)
}

#[test]
fn test_initial_population_counts() {
    let params = Params::default();
    let mut rng = StdRng::seed_from_u64(1);
    let world = World::new(&params, &mut rng);

    let snapshot = world.snapshot();
    assert_eq!(snapshot.count(Species::Sheep), 30);
    assert_eq!(snapshot.count(Species::Cow), 10);
    assert_eq!(snapshot.count(Species::Chicken), 10);
    assert_eq!(snapshot.count(Species::Rooster), 10);
    assert_eq!(snapshot.count(Species::Wolf), 10);
    assert_eq!(snapshot.count(Species::Lion), 8);
    assert_eq!(snapshot.living, 78);

    for animal in &world.animals {
        assert!(animal.alive);
        assert_eq!(animal.energy, 100);
        assert_eq!(animal.birth_tick, 0);
        assert!(animal.x >= 0 && animal.x < params.world_size);
        assert!(animal.y >= 0 && animal.y < params.world_size);
    }

    // Chickens are all hens, roosters all male.
    assert!(
        world
            .animals
            .iter()
            .filter(|a| a.species == Species::Chicken)
            .all(|a| a.gender == Gender::Female)
    );
    assert!(
        world
            .animals
            .iter()
            .filter(|a| a.species == Species::Rooster)
            .all(|a| a.gender == Gender::Male)
    );
}

#[test]
fn test_positions_stay_in_bounds() {
    let mut params = Params::default();
    params.world_size = 20;

    let mut rng = StdRng::seed_from_u64(7);
    let mut world = World::new(&params, &mut rng);

    for _ in 0..60 {
        world.step(&params, &mut rng);
        for animal in &world.animals {
            assert!(animal.x >= 0 && animal.x < params.world_size);
            assert!(animal.y >= 0 && animal.y < params.world_size);
        }
        assert!(world.hunter.x >= 0 && world.hunter.x < params.world_size);
        assert!(world.hunter.y >= 0 && world.hunter.y < params.world_size);
    }
}

#[test]
fn test_determinism_under_fixed_seed() {
    let params = Params::default();

    let mut rng_a = StdRng::seed_from_u64(42);
    let mut world_a = World::new(&params, &mut rng_a);
    world_a.run(&params, 50, &mut rng_a);

    let mut rng_b = StdRng::seed_from_u64(42);
    let mut world_b = World::new(&params, &mut rng_b);
    world_b.run(&params, 50, &mut rng_b);

    let animals_a = serde_json::to_string(&world_a.animals).unwrap();
    let animals_b = serde_json::to_string(&world_b.animals).unwrap();
    assert_eq!(animals_a, animals_b);

    let stats_a = serde_json::to_string(world_a.stats()).unwrap();
    let stats_b = serde_json::to_string(world_b.stats()).unwrap();
    assert_eq!(stats_a, stats_b);
    assert_eq!(world_a.hunter.x, world_b.hunter.x);
    assert_eq!(world_a.hunter.y, world_b.hunter.y);
}

#[test]
fn test_run_matches_manual_stepping() {
    let params = Params::default();

    let mut rng_a = StdRng::seed_from_u64(9);
    let mut world_a = World::new(&params, &mut rng_a);
    world_a.run(&params, 10, &mut rng_a);

    let mut rng_b = StdRng::seed_from_u64(9);
    let mut world_b = World::new(&params, &mut rng_b);
    for _ in 0..10 {
        world_b.step(&params, &mut rng_b);
    }

    assert_eq!(world_a.tick, 10);
    assert_eq!(
        serde_json::to_string(&world_a.animals).unwrap(),
        serde_json::to_string(&world_b.animals).unwrap()
    );
}

#[test]
fn test_movement_truncates_at_edges() {
    let params = Params::default();
    let animals = vec![Animal::new(Species::Sheep, Gender::Male, 0, 5, 0)];
    let mut world = World::with_population(animals, far_hunter(&params));

    // 0.99 picks direction 3 (west) and fails every other roll.
    world.step(&params, &mut Fixed(0.99));

    let sheep = &world.animals[0];
    assert_eq!((sheep.x, sheep.y), (0, 5));
    assert_eq!(sheep.distance_traveled, 0);
    assert_eq!(sheep.energy, 100);
    assert_eq!(sheep.age, 1);
    assert_eq!(world.tick, 1);
}

#[test]
fn test_energy_exhaustion_is_death_by_end_of_tick() {
    let params = Params::default();
    let mut animals = vec![
        Animal::new(Species::Sheep, Gender::Male, 10, 10, 0),
        Animal::new(Species::Cow, Gender::Female, 30, 30, 0),
        Animal::new(Species::Rooster, Gender::Male, 50, 50, 0),
    ];
    for animal in &mut animals {
        animal.energy = 1;
    }
    let mut world = World::with_population(animals, far_hunter(&params));

    // Every decay roll succeeds, draining the last energy of each animal.
    world.step(&params, &mut Fixed(0.0));

    assert!(world.animals.is_empty());
    assert_eq!(world.stats().energy_deaths, 3);
    assert_eq!(world.stats().predation_deaths(), 0);
}

#[test]
fn test_full_tick_mating_appends_newborn() {
    let params = Params::default();
    let animals = vec![
        Animal::new(Species::Sheep, Gender::Male, 10, 10, 0),
        Animal::new(Species::Sheep, Gender::Female, 10, 12, 0),
    ];
    let mut world = World::with_population(animals, far_hunter(&params));

    // Script, in draw order: male move + decay, female move + decay, hunter
    // move, mating success, gender draw. Both sheep step south and stay
    // within mating distance; the hunter is out of vision so its phase draws
    // nothing.
    let mut rng = Sequence::new([0.5, 0.9, 0.5, 0.9, 0.5, 0.1, 0.5]);
    world.step(&params, &mut rng);
    assert_eq!(rng.remaining(), 0);

    assert_eq!(world.animals.len(), 3);
    assert_eq!(world.stats().born, 1);

    let lamb = &world.animals[2];
    assert_eq!(lamb.species, Species::Sheep);
    assert_eq!((lamb.x, lamb.y), (10, 9));
    assert_eq!(lamb.birth_tick, 0);
    assert_eq!(world.animals[0].energy, 97);
    assert_eq!(world.animals[1].energy, 97);
}

#[test]
fn test_hunted_partner_is_lost_to_reproduction() {
    let params = Params::default();
    // After everyone steps east, the lion reaches exactly hunt range of the
    // ewe while the ram ends up outside it but within mating distance of
    // her. The lion claims the ewe before the mating scan runs, so no lamb
    // is born.
    let animals = vec![
        Animal::new(Species::Sheep, Gender::Male, 16, 13, 0),
        Animal::new(Species::Sheep, Gender::Female, 13, 13, 0),
        Animal::new(Species::Lion, Gender::Male, 6, 13, 0),
    ];
    let mut world = World::with_population(animals, far_hunter(&params));

    // Moves (all east), decay misses, hunter move, then the lion's one kill
    // attempt at 0.4 < 0.5.
    let mut rng = Sequence::new([0.3, 0.9, 0.3, 0.9, 0.3, 0.9, 0.3, 0.4]);
    world.step(&params, &mut rng);
    assert_eq!(rng.remaining(), 0);

    assert_eq!(world.stats().lion_kills, 1);
    assert_eq!(world.stats().born, 0);
    assert_eq!(world.animals.len(), 2);
    assert!(
        world
            .animals
            .iter()
            .all(|a| a.gender == Gender::Male)
    );
}

#[test]
fn test_snapshot_counts_only_living() {
    let params = Params::default();
    let mut animals = vec![
        Animal::new(Species::Wolf, Gender::Male, 0, 0, 0),
        Animal::new(Species::Wolf, Gender::Female, 5, 5, 0),
        Animal::new(Species::Lion, Gender::Male, 9, 9, 0),
    ];
    animals[1].kill();
    let world = World::with_population(animals, far_hunter(&params));

    let snapshot = world.snapshot();
    assert_eq!(snapshot.living, 2);
    assert_eq!(snapshot.count(Species::Wolf), 1);
    assert_eq!(snapshot.count(Species::Lion), 1);
    assert_eq!(snapshot.count(Species::Sheep), 0);
    assert_eq!(world.living().count(), 2);
}
