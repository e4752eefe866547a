//! Success-counting pool rolls and the keep-lower penalty roll.
//!
//! Each die showing 6 or more is a success and each 1 cancels one success;
//! net successes never drop below zero. When the effective pool would be
//! empty or negative, the caller asks for a penalty roll instead: two dice
//! are rolled and only the lower one is evaluated.

use dado_core::{DieSize, EngineResult, PoolResult};

use crate::clock::Clock;
use crate::resolve::validate_count;
use crate::roller::Roller;
use crate::source::DieSource;

impl<S: DieSource, C: Clock> Roller<S, C> {
    /// Roll `dice_count` dice of `die_size` and count net successes.
    pub fn roll_dice_pool(
        &mut self,
        dice_count: i32,
        die_size: DieSize,
        context: Option<&str>,
    ) -> EngineResult<PoolResult> {
        self.roll_dice_pool_with_modifier(dice_count, die_size, 0, context)
    }

    /// Like [`roll_dice_pool`](Self::roll_dice_pool), carrying a dice
    /// adjustment the caller already folded into `dice_count`.
    ///
    /// `dice_modifier` is recorded for display only.
    pub fn roll_dice_pool_with_modifier(
        &mut self,
        dice_count: i32,
        die_size: DieSize,
        dice_modifier: i32,
        context: Option<&str>,
    ) -> EngineResult<PoolResult> {
        let count = validate_count(dice_count)?;
        let rolls = self.roll_many(count, die_size.sides());
        for (i, value) in rolls.iter().enumerate() {
            tracing::trace!(die = i, value, %die_size, "pool die");
        }
        let result = PoolResult::standard(
            die_size,
            rolls,
            dice_modifier,
            context.map(str::to_owned),
            self.now(),
        );
        tracing::debug!(
            formula = %result.formula,
            successes = result.successes,
            cancellations = result.cancellations,
            net = result.net_successes,
            "pool roll"
        );
        Ok(result)
    }

    /// Roll two dice of `die_size` and keep the lower one.
    pub fn roll_with_penalty(&mut self, die_size: DieSize, context: Option<&str>) -> PoolResult {
        self.roll_with_penalty_and_modifier(die_size, 0, context)
    }

    /// Like [`roll_with_penalty`](Self::roll_with_penalty), carrying the dice
    /// adjustment that collapsed the pool.
    pub fn roll_with_penalty_and_modifier(
        &mut self,
        die_size: DieSize,
        dice_modifier: i32,
        context: Option<&str>,
    ) -> PoolResult {
        let sides = die_size.sides();
        let first = self.roll_one(sides);
        let second = self.roll_one(sides);
        let result = PoolResult::penalty(
            die_size,
            [first, second],
            dice_modifier,
            context.map(str::to_owned),
            self.now(),
        );
        tracing::debug!(
            formula = %result.formula,
            first,
            second,
            net = result.net_successes,
            "penalty roll"
        );
        result
    }

    /// Roll `base_count + dice_modifier` dice, or a penalty roll when that
    /// sum is zero or negative. The modifier is carried on the result.
    pub fn resolve_pool(
        &mut self,
        base_count: i32,
        dice_modifier: i32,
        die_size: DieSize,
        context: Option<&str>,
    ) -> EngineResult<PoolResult> {
        let effective = base_count.saturating_add(dice_modifier);
        if effective <= 0 {
            tracing::debug!(base_count, dice_modifier, "pool collapsed, rolling penalty");
            return Ok(self.roll_with_penalty_and_modifier(die_size, dice_modifier, context));
        }
        self.roll_dice_pool_with_modifier(effective, die_size, dice_modifier, context)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;
    use dado_core::EngineError;

    fn scripted(values: &[u32]) -> Roller<ScriptedSource> {
        Roller::new(ScriptedSource::new(values.iter().copied()))
    }

    #[test]
    fn one_success_one_cancel() {
        let mut roller = scripted(&[6, 4, 1]);
        let r = roller.roll_dice_pool(3, DieSize::D6, None).unwrap();
        assert_eq!(r.rolls, vec![6, 4, 1]);
        assert_eq!(r.successes, 1);
        assert_eq!(r.cancellations, 1);
        assert_eq!(r.net_successes, 0);
        assert_eq!(r.formula, "3d6");
    }

    #[test]
    fn two_successes_one_cancel() {
        let mut roller = scripted(&[6, 6, 3, 1]);
        let r = roller.roll_dice_pool(4, DieSize::D6, Some("Luta")).unwrap();
        assert_eq!(r.successes, 2);
        assert_eq!(r.cancellations, 1);
        assert_eq!(r.net_successes, 1);
        assert_eq!(r.context.as_deref(), Some("Luta"));
    }

    #[test]
    fn larger_dice_use_same_threshold() {
        let mut roller = scripted(&[12, 7, 5, 1]);
        let r = roller.roll_dice_pool(4, DieSize::D12, None).unwrap();
        assert_eq!(r.successes, 2);
        assert_eq!(r.net_successes, 1);
        assert_eq!(r.formula, "4d12");
    }

    #[test]
    fn non_positive_pool_rejected_before_rolling() {
        let mut roller = scripted(&[6]);
        assert!(matches!(
            roller.roll_dice_pool(0, DieSize::D6, None),
            Err(EngineError::InvalidDiceCount(0))
        ));
        assert!(roller.roll_dice_pool(-2, DieSize::D6, None).is_err());
        let r = roller.roll_dice_pool(1, DieSize::D6, None).unwrap();
        assert_eq!(r.rolls, vec![6]);
    }

    #[test]
    fn penalty_keeps_lower() {
        let mut roller = scripted(&[5, 2]);
        let r = roller.roll_with_penalty(DieSize::D6, None);
        assert!(r.is_penalty_roll);
        assert_eq!(r.dice_count, 1);
        assert_eq!(r.kept_value(), Some(2));
        assert_eq!(r.net_successes, 0);
        assert_eq!(r.formula, "2d6 (menor)");
    }

    #[test]
    fn penalty_can_still_succeed() {
        let mut roller = scripted(&[7, 9]);
        let r = roller.roll_with_penalty(DieSize::D10, None);
        assert_eq!(r.kept_value(), Some(7));
        assert_eq!(r.net_successes, 1);
    }

    #[test]
    fn modifier_is_pass_through() {
        let mut roller = scripted(&[2, 3]);
        let r = roller
            .roll_dice_pool_with_modifier(2, DieSize::D8, -1, None)
            .unwrap();
        assert_eq!(r.dice_count, 2);
        assert_eq!(r.dice_modifier, -1);
    }

    #[test]
    fn resolve_pool_switches_to_penalty() {
        let mut roller = scripted(&[6, 1]);
        let r = roller.resolve_pool(1, -1, DieSize::D6, None).unwrap();
        assert!(r.is_penalty_roll);
        assert_eq!(r.dice_modifier, -1);
        assert_eq!(r.kept_value(), Some(1));
        assert_eq!(r.cancellations, 1);

        let mut roller = scripted(&[6, 6, 6]);
        let r = roller.resolve_pool(1, 2, DieSize::D6, None).unwrap();
        assert!(!r.is_penalty_roll);
        assert_eq!(r.dice_count, 3);
        assert_eq!(r.dice_modifier, 2);
        assert_eq!(r.net_successes, 3);
    }
}
