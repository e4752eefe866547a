//! Random die sources.
//!
//! A [`DieSource`] produces one face value per call. Resolvers validate die
//! sizes before asking, so implementations may assume `sides >= 2`.

use std::collections::VecDeque;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Produces uniformly distributed face values.
pub trait DieSource {
    /// Roll one die with `sides` faces, returning a value in `1..=sides`.
    fn roll_die(&mut self, sides: u32) -> u32;
}

/// A die source backed by [`StdRng`].
#[derive(Debug, Clone)]
pub struct RngSource {
    rng: StdRng,
}

impl RngSource {
    /// A reproducible source.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A source seeded from operating system entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl DieSource for RngSource {
    fn roll_die(&mut self, sides: u32) -> u32 {
        self.rng.random_range(1..=sides)
    }
}

/// Replays a fixed sequence of face values, cycling once exhausted.
///
/// Values are handed out as given; they are not reduced modulo `sides`.
#[derive(Debug, Clone)]
pub struct ScriptedSource {
    values: VecDeque<u32>,
}

impl ScriptedSource {
    /// Create a source that replays `values` in order.
    pub fn new(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }

    /// How many values are left before the sequence repeats.
    pub fn remaining(&self) -> usize {
        self.values.len()
    }
}

impl DieSource for ScriptedSource {
    fn roll_die(&mut self, _sides: u32) -> u32 {
        match self.values.pop_front() {
            Some(value) => {
                self.values.push_back(value);
                value
            }
            // An empty script always shows the lowest face.
            None => 1,
        }
    }
}
