//! Mode-weight maps and the operations shared by every decision routine.
//!
//! A [`ModeWeights`] map assigns a [`Decimal`] weight to a subset of the
//! four transport modes; a mode absent from the map carries weight zero.
//! Weights may go negative (the resolve term subtracts from active modes),
//! so nothing here assumes non-negativity.
//!
//! [`accumulate`] is the single pointwise-add merge used everywhere two or
//! more weight maps are combined -- call sites never reimplement it.
//! [`dominant_mode`] is the matching argmax with the fixed deterministic
//! tie-break.

use std::collections::BTreeMap;

use commute_types::TransportMode;
use rust_decimal::Decimal;

/// A mapping from transport mode to influence weight.
///
/// Absent modes carry weight zero. A `BTreeMap` keyed by [`TransportMode`]
/// iterates in the enum's declared tie-break order, which
/// [`dominant_mode`] relies on.
pub type ModeWeights = BTreeMap<TransportMode, Decimal>;

/// Combine any number of weight maps into one by pointwise addition.
///
/// Every mode present in any input appears in the output with the sum of
/// its values across inputs. Pure and total: addition saturates at the
/// `Decimal` range ends instead of failing, which is unreachable for the
/// unit-scale weights this system produces.
pub fn accumulate<'a, I>(maps: I) -> ModeWeights
where
    I: IntoIterator<Item = &'a ModeWeights>,
{
    let mut total = ModeWeights::new();
    for map in maps {
        for (&mode, &weight) in map {
            let entry = total.entry(mode).or_insert(Decimal::ZERO);
            *entry = entry.saturating_add(weight);
        }
    }
    total
}

/// Multiply every weight in the map by a common factor.
///
/// Scaling by zero yields a map of explicit zeros rather than an empty
/// map; the distinction never changes an argmax but keeps the set of
/// contributing modes visible.
pub fn scale(weights: &ModeWeights, factor: Decimal) -> ModeWeights {
    weights
        .iter()
        .map(|(&mode, &weight)| (mode, weight.saturating_mul(factor)))
        .collect()
}

/// Return the mode with the greatest weight.
///
/// Ties are broken toward the least mode under the [`TransportMode`] order
/// (`Car < Cycle < Walk < PublicTransport`): the map is walked in
/// ascending key order and an entry replaces the current best only when
/// strictly greater. Returns `None` only for an empty map.
pub fn dominant_mode(weights: &ModeWeights) -> Option<TransportMode> {
    let mut best: Option<(TransportMode, Decimal)> = None;
    for (&mode, &weight) in weights {
        match best {
            Some((_, best_weight)) if weight <= best_weight => {}
            _ => best = Some((mode, weight)),
        }
    }
    best.map(|(mode, _)| mode)
}
