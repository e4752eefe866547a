//! The tagged union of roll outcomes stored in history and handed to renderers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::result::{CustomResult, DamageResult, PoolResult};

/// Discriminant of a [`RollEntry`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RollKind {
    /// A success-counting pool roll (including penalty rolls).
    Pool,
    /// A damage roll.
    Damage,
    /// A custom NdY roll.
    Custom,
}

impl std::fmt::Display for RollKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pool => write!(f, "pool"),
            Self::Damage => write!(f, "damage"),
            Self::Custom => write!(f, "custom"),
        }
    }
}

/// Any roll outcome. Serialized with an explicit `"kind"` tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum RollEntry {
    /// A pool or penalty roll.
    Pool(PoolResult),
    /// A damage roll.
    Damage(DamageResult),
    /// A custom roll.
    Custom(CustomResult),
}

impl RollEntry {
    /// The variant discriminant.
    pub fn kind(&self) -> RollKind {
        match self {
            Self::Pool(_) => RollKind::Pool,
            Self::Damage(_) => RollKind::Damage,
            Self::Custom(_) => RollKind::Custom,
        }
    }

    /// The display formula of the underlying result.
    pub fn formula(&self) -> &str {
        match self {
            Self::Pool(r) => &r.formula,
            Self::Damage(r) => &r.formula,
            Self::Custom(r) => &r.formula,
        }
    }

    /// When the roll was made.
    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            Self::Pool(r) => r.timestamp,
            Self::Damage(r) => r.timestamp,
            Self::Custom(r) => r.timestamp,
        }
    }

    /// The caller-supplied label, if any.
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::Pool(r) => r.context.as_deref(),
            Self::Damage(r) => r.context.as_deref(),
            Self::Custom(r) => r.context.as_deref(),
        }
    }

    /// Every face value rolled.
    pub fn rolls(&self) -> &[u32] {
        match self {
            Self::Pool(r) => &r.rolls,
            Self::Damage(r) => &r.rolls,
            Self::Custom(r) => &r.rolls,
        }
    }

    /// Whether this is a pool roll.
    pub fn is_pool(&self) -> bool {
        matches!(self, Self::Pool(_))
    }

    /// Whether this is a damage roll.
    pub fn is_damage(&self) -> bool {
        matches!(self, Self::Damage(_))
    }

    /// Whether this is a custom roll.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Borrow the pool result, if this is one.
    pub fn as_pool(&self) -> Option<&PoolResult> {
        match self {
            Self::Pool(r) => Some(r),
            _ => None,
        }
    }

    /// Borrow the damage result, if this is one.
    pub fn as_damage(&self) -> Option<&DamageResult> {
        match self {
            Self::Damage(r) => Some(r),
            _ => None,
        }
    }

    /// Borrow the custom result, if this is one.
    pub fn as_custom(&self) -> Option<&CustomResult> {
        match self {
            Self::Custom(r) => Some(r),
            _ => None,
        }
    }

    /// Serialize to JSON for hosts that render or transport entries.
    pub fn to_json(&self) -> EngineResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

impl std::fmt::Display for RollEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pool(r) => write!(f, "{r}"),
            Self::Damage(r) => write!(f, "{r}"),
            Self::Custom(r) => write!(f, "{r}"),
        }
    }
}

impl From<PoolResult> for RollEntry {
    fn from(r: PoolResult) -> Self {
        Self::Pool(r)
    }
}

impl From<DamageResult> for RollEntry {
    fn from(r: DamageResult) -> Self {
        Self::Damage(r)
    }
}

impl From<CustomResult> for RollEntry {
    fn from(r: CustomResult) -> Self {
        Self::Custom(r)
    }
}
