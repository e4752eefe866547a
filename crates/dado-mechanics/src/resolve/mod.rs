//! Resolvers that turn a roll request into an outcome record.
//!
//! - **Pool**: roll same-size dice, count 6+ as successes and 1s as
//!   cancellations; collapsed pools fall back to a two-dice keep-lower roll
//! - **Damage**: sum the dice and add a flat modifier
//! - **Custom**: any NdY, either summed with a modifier or listed

pub mod custom;
pub mod damage;
pub mod pool;

pub use custom::{CUSTOM_MAX_QUANTITY, CUSTOM_MAX_SIDES};

use dado_core::{EngineError, EngineResult};

/// Reject dice with fewer than two faces.
pub(crate) fn validate_sides(sides: u32) -> EngineResult<()> {
    if sides < 2 {
        tracing::warn!(sides, "rejected roll: die needs at least 2 sides");
        return Err(EngineError::InvalidDieSides(sides));
    }
    Ok(())
}

/// Reject non-positive dice counts, returning the count as unsigned.
pub(crate) fn validate_count(count: i32) -> EngineResult<u32> {
    match u32::try_from(count) {
        Ok(n) if n > 0 => Ok(n),
        _ => {
            tracing::warn!(count, "rejected roll: at least 1 die is required");
            Err(EngineError::InvalidDiceCount(i64::from(count)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sides_bounds() {
        assert!(validate_sides(2).is_ok());
        assert!(matches!(validate_sides(1), Err(EngineError::InvalidDieSides(1))));
    }

    #[test]
    fn count_bounds() {
        assert_eq!(validate_count(1).unwrap(), 1);
        assert_eq!(validate_count(99).unwrap(), 99);
        assert!(matches!(validate_count(0), Err(EngineError::InvalidDiceCount(0))));
        assert!(matches!(validate_count(-3), Err(EngineError::InvalidDiceCount(-3))));
    }
}
