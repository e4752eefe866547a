//! Pool die sizes and per-die classification.
//!
//! Pool rolls use a closed set of die sizes (d6 through d12). The size is
//! display metadata for the proficiency tier: success and cancellation
//! thresholds are the same for every size.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Face value at or above which a pool die counts as a success.
pub const SUCCESS_THRESHOLD: u32 = 6;

/// Face value that cancels one success.
pub const CANCELLATION_VALUE: u32 = 1;

/// The die size used for a pool roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DieSize {
    /// Six-sided die (untrained).
    D6,
    /// Eight-sided die.
    D8,
    /// Ten-sided die.
    D10,
    /// Twelve-sided die (mastery).
    D12,
}

impl DieSize {
    /// Every pool tier, from lowest to highest.
    pub const ALL: [DieSize; 4] = [Self::D6, Self::D8, Self::D10, Self::D12];

    /// Returns the number of sides on this die.
    pub fn sides(self) -> u32 {
        match self {
            Self::D6 => 6,
            Self::D8 => 8,
            Self::D10 => 10,
            Self::D12 => 12,
        }
    }

    /// Parse a die size from a tag like "d6" or "D10".
    pub fn from_str_tag(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "d6" => Some(Self::D6),
            "d8" => Some(Self::D8),
            "d10" => Some(Self::D10),
            "d12" => Some(Self::D12),
            _ => None,
        }
    }

    /// Look up the pool tier with exactly `sides` faces.
    pub fn from_sides(sides: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|d| d.sides() == sides)
    }
}

impl FromStr for DieSize {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_str_tag(s).ok_or_else(|| EngineError::UnknownDieSize(s.to_string()))
    }
}

impl std::fmt::Display for DieSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "d{}", self.sides())
    }
}

/// A single classified die from a pool roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DieOutcome {
    /// The face value rolled.
    pub value: u32,
    /// The size of the die that produced it.
    pub die_size: DieSize,
    /// Whether the die scores a success (value >= 6).
    pub is_success: bool,
    /// Whether the die cancels a success (value == 1).
    pub is_cancellation: bool,
}

impl DieOutcome {
    /// Classify a rolled value.
    pub fn classify(value: u32, die_size: DieSize) -> Self {
        Self {
            value,
            die_size,
            is_success: value >= SUCCESS_THRESHOLD,
            is_cancellation: value == CANCELLATION_VALUE,
        }
    }

    /// True when the die neither succeeds nor cancels (values 2 to 5).
    pub fn is_neutral(&self) -> bool {
        !self.is_success && !self.is_cancellation
    }
}
