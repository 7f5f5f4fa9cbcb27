//! Uniform randomness source for all stochastic simulation outcomes.
//!
//! Every draw in the engine (movement direction, energy decay, hunt and
//! mating resolution, disaster culling) flows through [`RandomSource`], so a
//! seeded [`rand::rngs::StdRng`] makes a whole run deterministic, and the
//! scripted sources below let tests force individual outcomes.

use rand::Rng;

/// A uniform `[0, 1)` generator driving all stochastic outcomes.
///
/// Blanket-implemented for every [`rand::Rng`]. The provided methods derive
/// every other draw shape from [`next_f64`](RandomSource::next_f64) so a
/// scripted source controls them all through one value stream.
pub trait RandomSource {
    /// Returns the next uniform value in `[0, 1)`.
    fn next_f64(&mut self) -> f64;

    /// Returns `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }

    /// Picks a uniform index in `[0, n)` by floor-scaling one draw.
    fn pick(&mut self, n: usize) -> usize {
        let idx = (self.next_f64() * n as f64) as usize;
        idx.min(n - 1)
    }

    /// Picks a uniform coordinate in `[0, bound)`.
    fn position(&mut self, bound: i32) -> i32 {
        self.pick(bound as usize) as i32
    }
}

impl<R: Rng> RandomSource for R {
    fn next_f64(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// A source that always returns the same value.
///
/// Useful for forcing a single outcome in tests, e.g. `Fixed(0.4)` makes
/// every 50% hunt succeed while every 30% hunter shot fails.
#[derive(Debug, Clone, Copy)]
pub struct Fixed(pub f64);

impl RandomSource for Fixed {
    fn next_f64(&mut self) -> f64 {
        self.0
    }
}

/// A source that replays a fixed sequence of values, then panics.
///
/// Exhausting the script is a test bug, so it fails fast rather than
/// silently recycling values.
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Vec<f64>,
    next: usize,
}

impl Sequence {
    /// Creates a scripted source from the given value sequence.
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        Self {
            values: values.into(),
            next: 0,
        }
    }

    /// Number of values not yet consumed.
    pub fn remaining(&self) -> usize {
        self.values.len() - self.next
    }
}

impl RandomSource for Sequence {
    fn next_f64(&mut self) -> f64 {
        let value = self.values.get(self.next).copied().unwrap_or_else(|| {
            panic!("scripted random sequence exhausted after {} draws", self.next)
        });
        self.next += 1;
        value
    }
}
