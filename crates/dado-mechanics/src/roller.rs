//! The roller: a die source and a clock behind the resolver entry points.

use chrono::{DateTime, Utc};

use dado_core::EngineResult;

use crate::clock::{Clock, SystemClock};
use crate::config::RollerConfig;
use crate::resolve::validate_sides;
use crate::source::{DieSource, RngSource};

/// Owns the randomness and time used by every resolver.
///
/// The resolvers (`roll_dice_pool`, `roll_with_penalty`, `roll_damage`,
/// `roll_custom_dice`, `roll_legacy`) are methods on this type. All of them
/// check their preconditions before the first die is rolled.
#[derive(Debug, Clone)]
pub struct Roller<S = RngSource, C = SystemClock> {
    source: S,
    clock: C,
}

impl Roller {
    /// A roller with a reproducible RNG.
    pub fn seeded(seed: u64) -> Self {
        Self::new(RngSource::from_seed(seed))
    }

    /// A roller seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self::new(RngSource::from_entropy())
    }

    /// Build a roller from configuration.
    pub fn from_config(config: &RollerConfig) -> Self {
        match config.seed {
            Some(seed) => Self::seeded(seed),
            None => Self::from_entropy(),
        }
    }
}

impl Default for Roller {
    fn default() -> Self {
        Self::from_entropy()
    }
}

impl<S: DieSource> Roller<S, SystemClock> {
    /// A roller over the given source, stamped with wall-clock time.
    pub fn new(source: S) -> Self {
        Self {
            source,
            clock: SystemClock,
        }
    }
}

impl<S: DieSource, C: Clock> Roller<S, C> {
    /// Replace the clock used for result timestamps.
    pub fn with_clock<C2: Clock>(self, clock: C2) -> Roller<S, C2> {
        Roller {
            source: self.source,
            clock,
        }
    }

    /// Borrow the underlying die source.
    pub fn source(&self) -> &S {
        &self.source
    }

    /// Roll a single die with `sides` faces.
    pub fn roll_die(&mut self, sides: u32) -> EngineResult<u32> {
        validate_sides(sides)?;
        Ok(self.source.roll_die(sides))
    }

    pub(crate) fn roll_one(&mut self, sides: u32) -> u32 {
        self.source.roll_die(sides)
    }

    pub(crate) fn roll_many(&mut self, count: u32, sides: u32) -> Vec<u32> {
        (0..count).map(|_| self.source.roll_die(sides)).collect()
    }

    pub(crate) fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }
}
