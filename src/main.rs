//! Command-line runner for the ecosystem simulation.
//!
//! Builds the initial population, runs the tick loop with periodic population
//! snapshots, and prints a census and counter report at the end. All
//! formatting lives here; the engine only exposes counters and snapshots.

use std::error::Error;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

use fauna::simulation::animal::Species;
use fauna::simulation::params::Params;
use fauna::simulation::stats::Snapshot;
use fauna::simulation::world::World;

struct Args {
    ticks: u64,
    seed: Option<u64>,
    snapshot_every: u64,
    params_path: Option<String>,
    watch: Option<Species>,
}

const USAGE: &str = "usage: fauna [--ticks N] [--seed N] [--snapshot-every N] \
                     [--params FILE.json] [--watch SPECIES]";

fn parse_args() -> Result<Args, Box<dyn Error>> {
    let mut args = Args {
        ticks: 1000,
        seed: None,
        snapshot_every: 100,
        params_path: None,
        watch: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(flag) = iter.next() {
        let mut value = || {
            iter.next()
                .ok_or_else(|| format!("missing value for {flag}"))
        };
        match flag.as_str() {
            "--ticks" => args.ticks = value()?.parse()?,
            "--seed" => args.seed = Some(value()?.parse()?),
            "--snapshot-every" => args.snapshot_every = value()?.parse()?,
            "--params" => args.params_path = Some(value()?),
            "--watch" => args.watch = Some(value()?.parse()?),
            _ => return Err(format!("unknown argument `{flag}`\n{USAGE}").into()),
        }
    }

    Ok(args)
}

fn print_census(header: &str, snapshot: &Snapshot, baseline: Option<&Snapshot>) {
    println!("{header}");
    println!("{}", "=".repeat(40));
    for species in Species::ALL {
        let count = snapshot.count(species);
        match baseline {
            Some(baseline) => {
                let delta = count as i64 - baseline.count(species) as i64;
                println!("{:<8}: {:>4}  ({:+})", species.to_string(), count, delta);
            }
            None => println!("{:<8}: {:>4}", species.to_string(), count),
        }
    }
    println!("{}", "-".repeat(40));
    println!("{:<8}: {:>4}", "total", snapshot.living);
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = parse_args()?;

    let params: Params = match &args.params_path {
        Some(path) => serde_json::from_str(&std::fs::read_to_string(path)?)?,
        None => Params::default(),
    };
    params.validate()?;

    let seed = args.seed.unwrap_or_else(|| rand::rng().random());
    let mut rng = StdRng::seed_from_u64(seed);

    let mut world = World::new(&params, &mut rng);
    let initial = world.snapshot();

    println!(
        "ecosystem simulation - {} (seed {seed})",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    print_census("initial population", &initial, None);
    println!(
        "hunter at ({}, {}), running {} ticks",
        world.hunter.x, world.hunter.y, args.ticks
    );

    let start = Instant::now();
    let mut remaining = args.ticks;
    while remaining > 0 {
        let chunk = remaining.min(args.snapshot_every.max(1));
        world.run(&params, chunk, &mut rng);
        remaining -= chunk;

        let snapshot = world.snapshot();
        info!(
            tick = snapshot.tick,
            living = snapshot.living,
            "population snapshot"
        );
        if let Some(species) = args.watch {
            info!(%species, count = snapshot.count(species), "watched species");
        }
    }
    let elapsed = start.elapsed();

    print_census("surviving population", &world.snapshot(), Some(&initial));
    println!("elapsed: {} ms", elapsed.as_millis());

    let stats = world.stats();
    println!("\nrun statistics");
    println!("{}", "=".repeat(40));
    println!("born            : {}", stats.born);
    println!("hunter kills    : {}", stats.hunter_kills);
    println!("lion kills      : {}", stats.lion_kills);
    println!("wolf kills      : {}", stats.wolf_kills);
    println!("energy deaths   : {}", stats.energy_deaths);
    println!("disaster deaths : {}", stats.disaster_deaths);
    println!("predation deaths: {}", stats.predation_deaths());

    let oldest = world.living().map(|a| a.age).max().unwrap_or(0);
    let traveled: u64 = world.living().map(|a| u64::from(a.distance_traveled)).sum();
    let matings: u64 = world.living().map(|a| u64::from(a.mating_count)).sum();
    println!("\noldest survivor : {oldest} ticks");
    println!("distance covered: {traveled} (survivors)");
    println!("matings         : {matings} (survivors)");

    Ok(())
}
