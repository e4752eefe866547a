//! Damage rolls: dice summed plus a flat modifier.
//!
//! Critical rules (maximized or doubled dice) belong to the caller, which
//! flags the result with [`DamageResult::with_critical`] and may rewrite its
//! rolls or formula before storing it.

use dado_core::{DamageResult, EngineResult};

use crate::clock::Clock;
use crate::resolve::{validate_count, validate_sides};
use crate::roller::Roller;
use crate::source::DieSource;

impl<S: DieSource, C: Clock> Roller<S, C> {
    /// Roll `dice_count` dice of `dice_type` faces and add `modifier`.
    pub fn roll_damage(
        &mut self,
        dice_count: i32,
        dice_type: u32,
        modifier: i32,
        context: Option<&str>,
    ) -> EngineResult<DamageResult> {
        validate_sides(dice_type)?;
        let count = validate_count(dice_count)?;
        let rolls = self.roll_many(count, dice_type);
        let result = DamageResult::new(
            dice_type,
            rolls,
            modifier,
            context.map(str::to_owned),
            self.now(),
        );
        tracing::debug!(
            formula = %result.formula,
            base = result.base_result,
            total = result.final_result,
            "damage roll"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;
    use dado_core::EngineError;

    #[test]
    fn sums_with_modifier() {
        let mut roller = Roller::new(ScriptedSource::new([4, 5]));
        let r = roller.roll_damage(2, 6, 3, Some("Machado")).unwrap();
        assert_eq!(r.rolls, vec![4, 5]);
        assert_eq!(r.base_result, 9);
        assert_eq!(r.final_result, 12);
        assert_eq!(r.formula, "2d6+3");
        assert!(!r.is_critical);
    }

    #[test]
    fn negative_total_is_not_clamped() {
        let mut roller = Roller::new(ScriptedSource::new([1]));
        let r = roller.roll_damage(1, 4, -2, None).unwrap();
        assert_eq!(r.final_result, -1);
    }

    #[test]
    fn rejects_bad_requests() {
        let mut roller = Roller::seeded(3);
        assert!(matches!(
            roller.roll_damage(0, 6, 0, None),
            Err(EngineError::InvalidDiceCount(0))
        ));
        assert!(matches!(
            roller.roll_damage(2, 1, 0, None),
            Err(EngineError::InvalidDieSides(1))
        ));
    }

    #[test]
    fn rejected_request_consumes_nothing() {
        let mut roller = Roller::new(ScriptedSource::new([2, 6]));
        assert!(roller.roll_damage(0, 6, 0, None).is_err());
        assert!(roller.roll_damage(2, 1, 0, None).is_err());
        let r = roller.roll_damage(2, 6, 0, None).unwrap();
        assert_eq!(r.rolls, vec![2, 6]);
    }

    #[test]
    fn seeded_rolls_stay_in_range() {
        let mut roller = Roller::seeded(11);
        let r = roller.roll_damage(8, 6, 0, None).unwrap();
        assert_eq!(r.rolls.len(), 8);
        assert!(r.rolls.iter().all(|v| (1..=6).contains(v)));
        assert!((8..=48).contains(&r.final_result));
    }
}
