//! Shared type definitions for the Commute simulation.
//!
//! This crate is the single source of truth for the data model used across
//! the Commute workspace: typed identifiers, the closed enumerations that
//! key every weighted mapping, and the shared group entities actors read
//! but never write.
//!
//! # Modules
//!
//! - [`ids`] -- Type-safe UUID wrappers for all entity identifiers
//! - [`enums`] -- Enumeration types (transport modes, journey types, weather)
//! - [`structs`] -- Shared group entities (subcultures, neighbourhoods)

pub mod enums;
pub mod ids;
pub mod structs;

// Re-export all public types at crate root for convenience.
pub use enums::{JourneyType, TransportMode, Weather};
pub use ids::{ActorId, NeighbourhoodId, SubcultureId};
pub use structs::{Neighbourhood, Subculture};
