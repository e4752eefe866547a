//! Roll outcome records.
//!
//! Each resolver produces one of three immutable records. Derived fields
//! (success counts, totals, formulas) are computed by the constructors here,
//! so a record built through them always satisfies its arithmetic invariants.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::die::{DieOutcome, DieSize};
use crate::formula::{format_formula, format_modifier, format_rolls};

/// Suffix marking a penalty roll in its formula.
pub const PENALTY_MARKER: &str = "(menor)";

fn sum_rolls(rolls: &[u32]) -> i64 {
    rolls.iter().map(|&v| i64::from(v)).sum()
}

fn count_u32(n: usize) -> u32 {
    u32::try_from(n).unwrap_or(u32::MAX)
}

/// The outcome of a success-counting pool roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolResult {
    /// Display formula, e.g. "3d6" or "2d6 (menor)".
    pub formula: String,
    /// Die size rolled.
    pub die_size: DieSize,
    /// Number of dice that count toward the result (1 for a penalty roll).
    pub dice_count: u32,
    /// The classified dice that count toward the result.
    pub dice: Vec<DieOutcome>,
    /// Every face value rolled, in roll order.
    pub rolls: Vec<u32>,
    /// Dice showing 6 or more.
    pub successes: u32,
    /// Dice showing 1.
    pub cancellations: u32,
    /// `max(0, successes - cancellations)`.
    pub net_successes: u32,
    /// Whether this was a two-dice keep-lower penalty roll.
    pub is_penalty_roll: bool,
    /// Situational dice adjustment the caller already applied, kept for display.
    pub dice_modifier: i32,
    /// Optional label from the caller (attribute, skill, action).
    pub context: Option<String>,
    /// When the roll was made.
    pub timestamp: DateTime<Utc>,
}

impl PoolResult {
    /// Build a standard pool result where every rolled die counts.
    pub fn standard(
        die_size: DieSize,
        rolls: Vec<u32>,
        dice_modifier: i32,
        context: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let dice: Vec<DieOutcome> = rolls
            .iter()
            .map(|&v| DieOutcome::classify(v, die_size))
            .collect();
        let formula = format!("{}{die_size}", rolls.len());
        Self::tally(formula, die_size, dice, rolls, false, dice_modifier, context, timestamp)
    }

    /// Build a penalty result: of the two rolled values only the lower one counts.
    pub fn penalty(
        die_size: DieSize,
        rolls: [u32; 2],
        dice_modifier: i32,
        context: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let kept = rolls[0].min(rolls[1]);
        let dice = vec![DieOutcome::classify(kept, die_size)];
        let formula = format!("2{die_size} {PENALTY_MARKER}");
        Self::tally(
            formula,
            die_size,
            dice,
            rolls.to_vec(),
            true,
            dice_modifier,
            context,
            timestamp,
        )
    }

    #[allow(clippy::too_many_arguments)]
    fn tally(
        formula: String,
        die_size: DieSize,
        dice: Vec<DieOutcome>,
        rolls: Vec<u32>,
        is_penalty_roll: bool,
        dice_modifier: i32,
        context: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let successes = count_u32(dice.iter().filter(|d| d.is_success).count());
        let cancellations = count_u32(dice.iter().filter(|d| d.is_cancellation).count());
        Self {
            formula,
            die_size,
            dice_count: count_u32(dice.len()),
            dice,
            rolls,
            successes,
            cancellations,
            net_successes: successes.saturating_sub(cancellations),
            is_penalty_roll,
            dice_modifier,
            context,
            timestamp,
        }
    }

    /// Dice that neither succeeded nor cancelled.
    pub fn neutral_count(&self) -> u32 {
        count_u32(self.dice.iter().filter(|d| d.is_neutral()).count())
    }

    /// The single kept value of a penalty roll.
    pub fn kept_value(&self) -> Option<u32> {
        match (self.is_penalty_roll, self.dice.as_slice()) {
            (true, [kept]) => Some(kept.value),
            _ => None,
        }
    }

    /// Whether at least one net success remains.
    pub fn is_success(&self) -> bool {
        self.net_successes > 0
    }
}

impl std::fmt::Display for PoolResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} = {} net ({} success, {} cancel)",
            self.formula,
            format_rolls(&self.rolls),
            self.net_successes,
            self.successes,
            self.cancellations
        )?;
        if self.dice_modifier != 0 {
            write!(f, " [{}d]", format_modifier(self.dice_modifier))?;
        }
        Ok(())
    }
}

/// The outcome of a damage roll: dice summed plus a flat modifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageResult {
    /// Display formula, e.g. "2d6+3".
    pub formula: String,
    /// Faces per die.
    pub dice_type: u32,
    /// Number of dice rolled.
    pub dice_count: u32,
    /// Each face value rolled.
    pub rolls: Vec<u32>,
    /// Flat modifier added to the dice.
    pub modifier: i32,
    /// Sum of `rolls`.
    pub base_result: i64,
    /// `base_result + modifier`.
    pub final_result: i64,
    /// Set by the caller when its critical rule applies. Never derived here.
    pub is_critical: bool,
    /// Optional label from the caller.
    pub context: Option<String>,
    /// When the roll was made.
    pub timestamp: DateTime<Utc>,
}

impl DamageResult {
    /// Build a damage result from rolled values.
    pub fn new(
        dice_type: u32,
        rolls: Vec<u32>,
        modifier: i32,
        context: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let dice_count = count_u32(rolls.len());
        let base_result = sum_rolls(&rolls);
        Self {
            formula: format_formula(dice_count, dice_type, modifier),
            dice_type,
            dice_count,
            rolls,
            modifier,
            base_result,
            final_result: base_result + i64::from(modifier),
            is_critical: false,
            context,
            timestamp,
        }
    }

    /// Flag the result as critical (or not).
    pub fn with_critical(mut self, is_critical: bool) -> Self {
        self.is_critical = is_critical;
        self
    }

    /// Replace the display formula, e.g. to annotate a maximized roll.
    pub fn with_formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = formula.into();
        self
    }

    /// Replace the face values and recompute the totals from them.
    pub fn with_rolls(mut self, rolls: Vec<u32>) -> Self {
        self.dice_count = count_u32(rolls.len());
        self.base_result = sum_rolls(&rolls);
        self.final_result = self.base_result + i64::from(self.modifier);
        self.rolls = rolls;
        self
    }
}

impl std::fmt::Display for DamageResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} = {}",
            self.formula,
            format_rolls(&self.rolls),
            self.final_result
        )?;
        if self.is_critical {
            write!(f, " (critical)")?;
        }
        Ok(())
    }
}

/// The outcome of an arbitrary NdY roll.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomResult {
    /// Display formula, e.g. "1d20+5".
    pub formula: String,
    /// Faces per die.
    pub dice_type: u32,
    /// Number of dice rolled.
    pub dice_count: u32,
    /// Each face value rolled.
    pub rolls: Vec<u32>,
    /// Flat modifier (only applied when `summed`).
    pub modifier: i32,
    /// `sum(rolls) + modifier` when summed, otherwise `None`.
    pub total: Option<i64>,
    /// Whether the dice were reduced to a single total.
    pub summed: bool,
    /// Optional label from the caller.
    pub context: Option<String>,
    /// When the roll was made.
    pub timestamp: DateTime<Utc>,
}

impl CustomResult {
    /// Build a custom result from rolled values.
    pub fn new(
        dice_type: u32,
        rolls: Vec<u32>,
        modifier: i32,
        summed: bool,
        context: Option<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        let dice_count = count_u32(rolls.len());
        let (formula, total) = if summed {
            (
                format_formula(dice_count, dice_type, modifier),
                Some(sum_rolls(&rolls) + i64::from(modifier)),
            )
        } else {
            (format_formula(dice_count, dice_type, 0), None)
        };
        Self {
            formula,
            dice_type,
            dice_count,
            rolls,
            modifier,
            total,
            summed,
            context,
            timestamp,
        }
    }
}

impl std::fmt::Display for CustomResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.total {
            Some(total) => write!(f, "{} {} = {total}", self.formula, format_rolls(&self.rolls)),
            None => write!(f, "{} {}", self.formula, format_rolls(&self.rolls)),
        }
    }
}
