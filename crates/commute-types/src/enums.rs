//! Enumeration types for the Commute simulation.
//!
//! Every weighted mapping in the system is keyed by [`TransportMode`], so
//! its cardinality is fixed at exactly four and its declaration order is
//! load-bearing: the derived [`Ord`] is the total order used to break ties
//! when two modes score equally.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Transport modes
// ---------------------------------------------------------------------------

/// A commuting method an actor can choose for a day's journey.
///
/// The enumeration is closed: no fifth mode exists anywhere in the system.
/// Variants are declared in tie-break order -- when an argmax over mode
/// weights is ambiguous, the least variant under the derived [`Ord`]
/// (`Car < Cycle < Walk < PublicTransport`) wins, so repeated runs with
/// identical inputs always select the same mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TransportMode {
    /// Driving a private car.
    Car,
    /// Riding a bicycle.
    Cycle,
    /// Walking the whole way.
    Walk,
    /// Bus, tram, or train.
    PublicTransport,
}

impl TransportMode {
    /// All four modes, in tie-break order.
    pub const ALL: [Self; 4] = [Self::Car, Self::Cycle, Self::Walk, Self::PublicTransport];

    /// Whether this mode is physically active (exposed to the weather).
    ///
    /// Active modes are the only ones the weather modifier and the resolve
    /// bonus apply to.
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Cycle | Self::Walk)
    }
}

// ---------------------------------------------------------------------------
// Journey types
// ---------------------------------------------------------------------------

/// Categorical bucket of commute distance.
///
/// Used only as the lookup key into an actor's perceived-effort table;
/// no algorithm branches on the distance itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum JourneyType {
    /// A commute within walking range.
    Short,
    /// A commute within cycling range.
    Medium,
    /// A commute that realistically needs a vehicle.
    Long,
}

// ---------------------------------------------------------------------------
// Weather
// ---------------------------------------------------------------------------

/// Daily weather state, supplied per simulated day by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weather {
    /// Dry, comfortable conditions.
    Good,
    /// Rain, wind, or cold that penalizes active modes.
    Bad,
}
