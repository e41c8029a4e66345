//! Shared group entities read by actors during decision making.
//!
//! A [`Subculture`] and a [`Neighbourhood`] are each referenced by many
//! actors at once (shared ownership, lifetime of the simulation run) and are
//! strictly read-only from an actor's perspective. All weights are
//! [`Decimal`] values; they are influence strengths, not probabilities, and
//! are not required to sum to 1.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::enums::TransportMode;
use crate::ids::{NeighbourhoodId, SubcultureId};

/// A cultural group whose members share a sense of which modes are desirable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subculture {
    /// Unique identifier for this subculture.
    pub id: SubcultureId,
    /// Human-readable name (e.g. "cycling enthusiasts").
    pub name: String,
    /// How desirable each mode is to members of this subculture.
    /// Modes absent from the map carry zero desirability.
    pub desirability: BTreeMap<TransportMode, Decimal>,
}

impl Subculture {
    /// Create a subculture with a fresh ID.
    pub fn new(name: impl Into<String>, desirability: BTreeMap<TransportMode, Decimal>) -> Self {
        Self {
            id: SubcultureId::new(),
            name: name.into(),
            desirability,
        }
    }
}

/// A residential area whose infrastructure supports some modes better
/// than others.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbourhood {
    /// Unique identifier for this neighbourhood.
    pub id: NeighbourhoodId,
    /// Human-readable name (e.g. "riverside").
    pub name: String,
    /// How well the neighbourhood supports each mode (cycle lanes, bus
    /// stops, parking). Modes absent from the map carry zero support.
    pub supportiveness: BTreeMap<TransportMode, Decimal>,
}

impl Neighbourhood {
    /// Create a neighbourhood with a fresh ID.
    pub fn new(
        name: impl Into<String>,
        supportiveness: BTreeMap<TransportMode, Decimal>,
    ) -> Self {
        Self {
            id: NeighbourhoodId::new(),
            name: name.into(),
            supportiveness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn desirability() -> BTreeMap<TransportMode, Decimal> {
        let mut map = BTreeMap::new();
        map.insert(TransportMode::Cycle, Decimal::new(8, 1));
        map.insert(TransportMode::Car, Decimal::new(2, 1));
        map
    }

    #[test]
    fn subcultures_get_unique_ids() {
        let a = Subculture::new("a", desirability());
        let b = Subculture::new("b", desirability());
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn absent_modes_are_simply_absent() {
        let sub = Subculture::new("cyclists", desirability());
        assert_eq!(sub.desirability.get(&TransportMode::Walk), None);
    }

    #[test]
    fn neighbourhood_roundtrip_serde() {
        let hood = Neighbourhood::new("riverside", desirability());
        let json = serde_json::to_string(&hood).ok();
        assert!(json.is_some());
        let back: Result<Neighbourhood, _> =
            serde_json::from_str(json.as_deref().unwrap_or(""));
        assert_eq!(back.ok(), Some(hood));
    }
}
