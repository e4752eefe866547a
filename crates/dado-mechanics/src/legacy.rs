//! Legacy keep-one rolls with advantage or disadvantage.
//!
//! An older single-die ruleset: roll `n` dice, keep the highest
//! (advantage) or the lowest (disadvantage), add a modifier. Non-damage
//! rolls are also classified as a triumph or a disaster. This path does not
//! share any rules with the pool resolver and its results are not history
//! entries.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use dado_core::EngineResult;
use dado_core::formula::format_formula;

use crate::clock::Clock;
use crate::resolve::{validate_count, validate_sides};
use crate::roller::Roller;
use crate::source::DieSource;

/// Largest margin over the difficulty that still counts as a triumph.
pub const TRIUMPH_MAX_MARGIN: i64 = 5;

/// Which die a legacy roll keeps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Vantage {
    /// Keep the highest die.
    Advantage,
    /// Keep the lowest die.
    Disadvantage,
}

impl Vantage {
    fn keep(self, rolls: &[u32]) -> u32 {
        let kept = match self {
            Self::Advantage => rolls.iter().max(),
            Self::Disadvantage => rolls.iter().min(),
        };
        kept.copied().unwrap_or(0)
    }

    fn marker(self) -> &'static str {
        match self {
            Self::Advantage => "(maior)",
            Self::Disadvantage => "(menor)",
        }
    }
}

/// A legacy roll request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyRequest {
    /// Number of dice rolled (one is kept).
    pub dice_count: i32,
    /// Faces per die.
    pub sides: u32,
    /// Which die is kept.
    pub mode: Vantage,
    /// Flat modifier added to the kept die.
    pub modifier: i32,
    /// Target the final result is compared against, if any.
    pub difficulty: Option<i32>,
    /// Damage rolls never triumph nor suffer a disaster.
    pub is_damage: bool,
}

impl LegacyRequest {
    /// A non-damage request with no modifier and no difficulty.
    pub fn new(dice_count: i32, sides: u32, mode: Vantage) -> Self {
        Self {
            dice_count,
            sides,
            mode,
            modifier: 0,
            difficulty: None,
            is_damage: false,
        }
    }

    /// Set the flat modifier.
    pub fn with_modifier(mut self, modifier: i32) -> Self {
        self.modifier = modifier;
        self
    }

    /// Set the difficulty.
    pub fn with_difficulty(mut self, difficulty: i32) -> Self {
        self.difficulty = Some(difficulty);
        self
    }

    /// Mark the request as a damage roll.
    pub fn damage(mut self) -> Self {
        self.is_damage = true;
        self
    }
}

/// The outcome of a legacy roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyResult {
    /// Display formula, e.g. "2d20+3 (maior)".
    pub formula: String,
    /// The request that produced this result.
    pub request: LegacyRequest,
    /// Every face value rolled.
    pub rolls: Vec<u32>,
    /// The kept die.
    pub base_result: u32,
    /// `base_result + modifier`.
    pub final_result: i64,
    /// Critical success of the legacy ruleset.
    pub is_triumph: bool,
    /// Critical failure of the legacy ruleset.
    pub is_disaster: bool,
    /// When the roll was made.
    pub timestamp: DateTime<Utc>,
}

/// Whether a kept die is a triumph.
///
/// The kept die must show the highest face and, when a difficulty is set,
/// the final result must meet it by no more than [`TRIUMPH_MAX_MARGIN`].
pub fn is_triumph(kept: u32, sides: u32, final_result: i64, difficulty: Option<i32>) -> bool {
    if kept != sides {
        return false;
    }
    match difficulty {
        None => true,
        Some(dc) => {
            let margin = final_result - i64::from(dc);
            (0..=TRIUMPH_MAX_MARGIN).contains(&margin)
        }
    }
}

/// Whether a set of rolls is a disaster.
///
/// A single die is a disaster on a 1. With several dice, a disaster needs
/// more than half of the rolled dice (`n / 2 + 1`) to share one value that
/// is not the highest face.
pub fn is_disaster(rolls: &[u32], sides: u32) -> bool {
    match rolls {
        [] => false,
        [only] => *only == 1,
        _ => {
            let needed = rolls.len() / 2 + 1;
            let mut counts: HashMap<u32, usize> = HashMap::new();
            for &v in rolls.iter().filter(|&&v| v != sides) {
                *counts.entry(v).or_default() += 1;
            }
            counts.values().any(|&n| n >= needed)
        }
    }
}

impl<S: DieSource, C: Clock> Roller<S, C> {
    /// Roll a legacy keep-one request.
    pub fn roll_legacy(&mut self, request: &LegacyRequest) -> EngineResult<LegacyResult> {
        validate_sides(request.sides)?;
        let count = validate_count(request.dice_count)?;
        let rolls = self.roll_many(count, request.sides);
        let base_result = request.mode.keep(&rolls);
        let final_result = i64::from(base_result) + i64::from(request.modifier);

        let (is_triumph, is_disaster) = if request.is_damage {
            (false, false)
        } else {
            (
                is_triumph(base_result, request.sides, final_result, request.difficulty),
                is_disaster(&rolls, request.sides),
            )
        };

        let formula = format!(
            "{} {}",
            format_formula(count, request.sides, request.modifier),
            request.mode.marker()
        );
        tracing::debug!(
            %formula,
            kept = base_result,
            total = final_result,
            is_triumph,
            is_disaster,
            "legacy roll"
        );

        Ok(LegacyResult {
            formula,
            request: request.clone(),
            rolls,
            base_result,
            final_result,
            is_triumph,
            is_disaster,
            timestamp: self.now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::ScriptedSource;

    fn scripted(values: &[u32]) -> Roller<ScriptedSource> {
        Roller::new(ScriptedSource::new(values.iter().copied()))
    }

    #[test]
    fn advantage_keeps_highest() {
        let mut roller = scripted(&[7, 15]);
        let req = LegacyRequest::new(2, 20, Vantage::Advantage).with_modifier(3);
        let r = roller.roll_legacy(&req).unwrap();
        assert_eq!(r.base_result, 15);
        assert_eq!(r.final_result, 18);
        assert_eq!(r.formula, "2d20+3 (maior)");
    }

    #[test]
    fn disadvantage_keeps_lowest() {
        let mut roller = scripted(&[7, 15]);
        let req = LegacyRequest::new(2, 20, Vantage::Disadvantage);
        let r = roller.roll_legacy(&req).unwrap();
        assert_eq!(r.base_result, 7);
        assert_eq!(r.formula, "2d20 (menor)");
    }

    #[test]
    fn triumph_without_difficulty() {
        assert!(is_triumph(20, 20, 25, None));
        assert!(!is_triumph(19, 20, 25, None));
    }

    #[test]
    fn triumph_within_margin() {
        assert!(is_triumph(12, 12, 15, Some(10)));
        assert!(is_triumph(12, 12, 10, Some(10)));
        assert!(!is_triumph(12, 12, 16, Some(10)));
        assert!(!is_triumph(12, 12, 9, Some(10)));
    }

    #[test]
    fn disaster_single_die() {
        assert!(is_disaster(&[1], 20));
        assert!(!is_disaster(&[2], 20));
        assert!(!is_disaster(&[], 20));
    }

    #[test]
    fn disaster_needs_majority_of_matching_non_max_dice() {
        // 3 dice: needs 2 matching.
        assert!(is_disaster(&[3, 3, 9], 10));
        assert!(!is_disaster(&[3, 4, 9], 10));
        // Matching max faces do not count.
        assert!(!is_disaster(&[10, 10, 4], 10));
        // 4 dice: needs 3 matching.
        assert!(!is_disaster(&[2, 2, 5, 6], 10));
        assert!(is_disaster(&[2, 2, 2, 6], 10));
    }

    #[test]
    fn damage_rolls_are_never_classified() {
        let mut roller = scripted(&[1]);
        let req = LegacyRequest::new(1, 20, Vantage::Advantage).damage();
        let r = roller.roll_legacy(&req).unwrap();
        assert!(!r.is_disaster);
        assert!(!r.is_triumph);

        let mut roller = scripted(&[20]);
        let req = LegacyRequest::new(1, 20, Vantage::Advantage).damage();
        assert!(!roller.roll_legacy(&req).unwrap().is_triumph);
    }

    #[test]
    fn roll_classifies_non_damage() {
        let mut roller = scripted(&[20, 4]);
        let req = LegacyRequest::new(2, 20, Vantage::Advantage)
            .with_modifier(2)
            .with_difficulty(18);
        let r = roller.roll_legacy(&req).unwrap();
        assert!(r.is_triumph);
        assert!(!r.is_disaster);

        let mut roller = scripted(&[1]);
        let r = roller
            .roll_legacy(&LegacyRequest::new(1, 20, Vantage::Disadvantage))
            .unwrap();
        assert!(r.is_disaster);
    }

    #[test]
    fn rejects_bad_requests() {
        let mut roller = Roller::seeded(1);
        assert!(roller
            .roll_legacy(&LegacyRequest::new(0, 20, Vantage::Advantage))
            .is_err());
        assert!(roller
            .roll_legacy(&LegacyRequest::new(2, 1, Vantage::Advantage))
            .is_err());
    }
}
