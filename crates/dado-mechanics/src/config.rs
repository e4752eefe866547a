//! Configuration for a [`Roller`](crate::Roller).

use serde::{Deserialize, Serialize};

use dado_core::{EngineError, EngineResult};

/// Configuration for a roller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollerConfig {
    /// RNG seed for reproducible rolls. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl RollerConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }
}
