//! Configuration for a [`HistoryLog`](crate::HistoryLog).

use serde::{Deserialize, Serialize};

use dado_core::{EngineError, EngineResult};

/// Configuration for a history log.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HistoryConfig {
    /// Keep at most this many entries, dropping the oldest. `None` is unbounded.
    pub max_entries: Option<usize>,
}

impl HistoryConfig {
    /// Cap the number of retained entries (at least one is always kept).
    pub fn with_max_entries(mut self, max_entries: usize) -> Self {
        self.max_entries = Some(max_entries.max(1));
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> EngineResult<Self> {
        serde_json::from_str(json).map_err(|e| EngineError::InvalidConfig(e.to_string()))
    }
}
