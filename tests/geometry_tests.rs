#![allow(missing_docs)]

use fauna::simulation::animal::{Animal, Gender, Species};
use fauna::simulation::geometry::{Located, clamp_to_world, manhattan_distance, midpoint};
use fauna::simulation::hunter::Hunter;
use fauna::simulation::params::Params;

#[test]
fn test_manhattan_distance() {
    let a = Animal::new(Species::Sheep, Gender::Male, 10, 10, 0);
    let b = Animal::new(Species::Sheep, Gender::Female, 13, 6, 0);

    assert_eq!(manhattan_distance(&a, &b), 7);
    assert_eq!(manhattan_distance(&b, &a), 7);
    assert_eq!(manhattan_distance(&a, &a), 0);
}

#[test]
fn test_manhattan_distance_mixes_agent_kinds() {
    let params = Params::default();
    let animal = Animal::new(Species::Wolf, Gender::Male, 0, 0, 0);
    let hunter = Hunter::new(3, 4, &params);

    assert_eq!(hunter.x(), 3);
    assert_eq!(hunter.y(), 4);
    assert_eq!(manhattan_distance(&hunter, &animal), 7);
}

#[test]
fn test_clamp_to_world() {
    assert_eq!(clamp_to_world(-5, 500), 0);
    assert_eq!(clamp_to_world(0, 500), 0);
    assert_eq!(clamp_to_world(250, 500), 250);
    assert_eq!(clamp_to_world(499, 500), 499);
    assert_eq!(clamp_to_world(500, 500), 499);
    assert_eq!(clamp_to_world(1200, 500), 499);
}

#[test]
fn test_midpoint_rounds_halves_up() {
    assert_eq!(midpoint(0, 4), 2);
    assert_eq!(midpoint(0, 3), 2);
    assert_eq!(midpoint(0, 2), 1);
    assert_eq!(midpoint(7, 7), 7);
    assert_eq!(midpoint(10, 13), 12);
}
