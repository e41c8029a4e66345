//! Recency-weighted summary of an actor's chosen-mode history.
//!
//! The habit weight of a mode is how strongly the actor's past choices pull
//! toward choosing it again. Recent days count for more than distant ones:
//! with a log of length `n`, the most recent entry weighs `2/(n+1)` and each
//! step back multiplies by the fixed ratio `1 - 2/(n+1)` -- except the very
//! oldest entry, which always contributes a flat `1.0` regardless of the
//! decay schedule.
//!
//! The result is a weighted sum, not a normalized average: total weight
//! grows with log length. That is the observed behavior of the model being
//! reproduced and must not be "corrected" to sum to one.
//!
//! The walk is iterative. Logs grow by one entry per simulated day without
//! bound, so recursion depth must never be a function of log length.

use commute_types::TransportMode;
use rust_decimal::Decimal;

use crate::weights::ModeWeights;

/// Summarize a chosen-mode log into a habit weight per mode.
///
/// The log is ordered oldest first; one entry per simulated day. An empty
/// log yields an empty map (construction-time seeding guarantees callers
/// inside the core never observe one).
pub fn habit_weights(log: &[TransportMode]) -> ModeWeights {
    let mut weights = ModeWeights::new();
    let Some((&oldest, recent)) = log.split_first() else {
        return weights;
    };

    // Starting weight 2/(n+1) and decay ratio 1 - 2/(n+1), both evaluated
    // once from the full log length n.
    let len = Decimal::from(u64::try_from(log.len()).unwrap_or(u64::MAX));
    // Divisor is n + 1 >= 2, so the division cannot fail.
    let start = Decimal::TWO
        .checked_div(len.saturating_add(Decimal::ONE))
        .unwrap_or(Decimal::ZERO);
    let ratio = Decimal::ONE.saturating_sub(start);

    // Walk from the most recent entry down to index 1, decaying as we go.
    let mut weight = start;
    for &mode in recent.iter().rev() {
        let entry = weights.entry(mode).or_insert(Decimal::ZERO);
        *entry = entry.saturating_add(weight);
        weight = weight.saturating_mul(ratio);
    }

    // The oldest entry contributes exactly 1.0, overriding the schedule.
    let entry = weights.entry(oldest).or_insert(Decimal::ZERO);
    *entry = entry.saturating_add(Decimal::ONE);

    weights
}
