//! Arithmetic invariants of the result records.

use chrono::{DateTime, Utc};
use dado_core::{CustomResult, DamageResult, DieSize, PoolResult, RollEntry};
use proptest::prelude::*;

fn at() -> DateTime<Utc> {
    DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

fn die_size() -> impl Strategy<Value = DieSize> {
    prop::sample::select(DieSize::ALL.to_vec())
}

proptest! {
    #[test]
    fn pool_counts_partition_the_dice(
        size in die_size(),
        rolls in prop::collection::vec(1u32..=12, 1..20),
    ) {
        let rolls: Vec<u32> = rolls.into_iter().map(|v| v.min(size.sides())).collect();
        let r = PoolResult::standard(size, rolls.clone(), 0, None, at());

        prop_assert_eq!(r.dice_count as usize, rolls.len());
        prop_assert_eq!(r.successes + r.cancellations + r.neutral_count(), r.dice_count);
        prop_assert_eq!(r.net_successes, r.successes.saturating_sub(r.cancellations));
        prop_assert_eq!(r.successes as usize, rolls.iter().filter(|&&v| v >= 6).count());
        prop_assert_eq!(r.cancellations as usize, rolls.iter().filter(|&&v| v == 1).count());
        prop_assert_eq!(&r.rolls, &rolls);
    }

    #[test]
    fn penalty_always_keeps_one_lower_die(
        size in die_size(),
        a in 1u32..=6,
        b in 1u32..=6,
    ) {
        let r = PoolResult::penalty(size, [a, b], 0, None, at());
        prop_assert_eq!(r.dice_count, 1);
        prop_assert!(r.is_penalty_roll);
        prop_assert_eq!(r.kept_value(), Some(a.min(b)));
        prop_assert_eq!(r.successes + r.cancellations + r.neutral_count(), 1);
    }

    #[test]
    fn damage_final_minus_modifier_is_sum(
        sides in 2u32..=100,
        rolls in prop::collection::vec(1u32..=100, 1..30),
        modifier in -50i32..=50,
    ) {
        let r = DamageResult::new(sides, rolls.clone(), modifier, None, at());
        let sum: i64 = rolls.iter().map(|&v| i64::from(v)).sum();
        prop_assert_eq!(r.base_result, sum);
        prop_assert_eq!(r.final_result - i64::from(modifier), r.base_result);
    }

    #[test]
    fn custom_summed_total_matches(
        rolls in prop::collection::vec(1u32..=100, 1..30),
        modifier in -50i32..=50,
        summed in any::<bool>(),
    ) {
        let r = CustomResult::new(100, rolls.clone(), modifier, summed, None, at());
        prop_assert_eq!(&r.rolls, &rolls);
        if summed {
            let sum: i64 = rolls.iter().map(|&v| i64::from(v)).sum();
            prop_assert_eq!(r.total.map(|t| t - i64::from(modifier)), Some(sum));
        } else {
            prop_assert_eq!(r.total, None);
        }
    }
}

#[test]
fn entries_round_trip_through_json_with_kind() {
    let entries: Vec<RollEntry> = vec![
        PoolResult::penalty(DieSize::D6, [5, 2], -1, Some("Agilidade".into()), at()).into(),
        DamageResult::new(6, vec![4, 5], 3, None, at())
            .with_critical(true)
            .into(),
        CustomResult::new(100, vec![42, 7], 0, false, None, at()).into(),
    ];
    let json = serde_json::to_string(&entries).unwrap();
    assert!(json.contains(r#""kind":"pool""#));
    assert!(json.contains(r#""kind":"damage""#));
    assert!(json.contains(r#""kind":"custom""#));

    let back: Vec<RollEntry> = serde_json::from_str(&json).unwrap();
    assert_eq!(back, entries);
}
