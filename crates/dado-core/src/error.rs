//! Error types for the dice engine.

/// Errors raised when a roll request violates a precondition.
///
/// Every variant is a programmer error on the calling side. Resolvers return
/// them before consuming any random value, so a rejected request leaves the
/// die source untouched.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A die with fewer than two faces was requested.
    #[error("invalid die: a die needs at least 2 sides, got {0}")]
    InvalidDieSides(u32),

    /// A non-positive number of dice was passed to a resolver that needs at least one.
    #[error("invalid dice count: {0} (at least 1 die is required)")]
    InvalidDiceCount(i64),

    /// A die tag that is not one of the pool tiers (d6, d8, d10, d12).
    #[error("unknown die size: {0}")]
    UnknownDieSize(String),

    /// A configuration document could not be parsed.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// A result could not be serialized.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience result type for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;
