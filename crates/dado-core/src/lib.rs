//! Core types for dado: die sizes, roll outcome records, and errors.
//!
//! This crate holds the data model shared by the resolvers in
//! `dado-mechanics` and the history log in `dado-history`. It performs no
//! randomness of its own; results are built from already-rolled values.

/// The tagged union of roll outcomes.
pub mod entry;
/// Pool die sizes and per-die classification.
pub mod die;
/// Error types used throughout the workspace.
pub mod error;
/// Dice formula rendering helpers.
pub mod formula;
/// Pool, damage and custom outcome records.
pub mod result;

/// Re-export die types.
pub use die::{CANCELLATION_VALUE, DieOutcome, DieSize, SUCCESS_THRESHOLD};
/// Re-export the roll union.
pub use entry::{RollEntry, RollKind};
/// Re-export error types.
pub use error::{EngineError, EngineResult};
/// Re-export result records.
pub use result::{CustomResult, DamageResult, PENALTY_MARKER, PoolResult};
