//! # Fauna - Agent-Based Ecosystem Simulation
//!
//! A discrete-time simulation of a bounded 2-D world populated by six animal
//! species and a single hunter. Each tick applies population control, random
//! movement with energy decay, predation, and reproduction to one shared
//! agent collection.
//!
//! ## Features
//!
//! - Six species (sheep, cow, chicken, rooster, wolf, lion) with per-species
//!   movement speeds, prey sets, and hunting ranges
//! - A roaming hunter that kills the nearest animal within its vision range
//! - Threshold-triggered disaster events that thin overgrown populations
//! - Pairwise mating with a fowl cross-species special case
//! - Cumulative event counters and periodic population snapshots
//! - Pluggable randomness source for fully deterministic replays
//!
//! ## Core Modules
//!
//! - [`simulation::world`] - World state, tick orchestration, and the run loop
//! - [`simulation::animal`] - Species, gender, and animal state
//! - [`simulation::predation`] - Hunter, lion, and wolf hunting phases
//! - [`simulation::reproduction`] - Pairwise mating and offspring placement
//! - [`simulation::disaster`] - Population-control culling
//! - [`simulation::random`] - Substitutable uniform randomness source

/// Core simulation logic and data structures.
pub mod simulation {
    /// Animal state, species, and gender definitions.
    pub mod animal;
    /// Threshold-triggered population-control culling.
    pub mod disaster;
    /// Simulation error types.
    pub mod error;
    /// Manhattan distance and world-bounds clamping.
    pub mod geometry;
    /// The hunter agent that stalks the nearest animal.
    pub mod hunter;
    /// Simulation parameters.
    pub mod params;
    /// Hunter, lion, and wolf hunting phases.
    pub mod predation;
    /// Uniform randomness source, substitutable for deterministic tests.
    pub mod random;
    /// Pairwise mating and offspring generation.
    pub mod reproduction;
    /// Cumulative event counters and population snapshots.
    pub mod stats;
    /// World state and per-tick orchestration.
    pub mod world;
}
