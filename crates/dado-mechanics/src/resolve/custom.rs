//! Custom NdY rolls, either summed with a modifier or listed die by die.

use dado_core::{CustomResult, EngineResult};

use crate::clock::Clock;
use crate::resolve::{validate_count, validate_sides};
use crate::roller::Roller;
use crate::source::DieSource;

/// Largest die a custom-roll form usually offers. Callers clamp; the engine does not.
pub const CUSTOM_MAX_SIDES: u32 = 100;

/// Largest quantity a custom-roll form usually offers. Callers clamp; the engine does not.
pub const CUSTOM_MAX_QUANTITY: i32 = 99;

impl<S: DieSource, C: Clock> Roller<S, C> {
    /// Roll `quantity` dice of `dice_type` faces.
    ///
    /// When `summed`, the result carries `sum + modifier` as its total;
    /// otherwise the individual rolls are the result and no total is set.
    pub fn roll_custom_dice(
        &mut self,
        dice_type: u32,
        quantity: i32,
        modifier: i32,
        summed: bool,
        context: Option<&str>,
    ) -> EngineResult<CustomResult> {
        validate_sides(dice_type)?;
        let count = validate_count(quantity)?;
        let rolls = self.roll_many(count, dice_type);
        let result = CustomResult::new(
            dice_type,
            rolls,
            modifier,
            summed,
            context.map(str::to_owned),
            self.now(),
        );
        tracing::debug!(formula = %result.formula, total = ?result.total, "custom roll");
        Ok(result)
    }
}
