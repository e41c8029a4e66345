//! Actor state and daily mode-choice decision logic for the Commute
//! simulation.
//!
//! This crate contains the decision core -- everything that operates on an
//! actor's own state without touching I/O. It sits between `commute-types`
//! (which defines the data model) and `commute-core` (which orchestrates
//! simulated days).
//!
//! Three cooperating algorithms make up the core:
//!
//! - the weighted-sum accumulator in [`weights`], which every combination
//!   of mode weights goes through;
//! - the decaying habit average in [`habit`], summarizing an actor's
//!   chosen-mode history;
//! - the norm-update and mode-choice routines on [`Actor`], which combine
//!   social, subculture, neighbourhood, weather, and effort influences into
//!   a single daily decision.
//!
//! # Modules
//!
//! - [`actor`] -- The [`Actor`] entity, its construction, and its two
//!   decision routines
//! - [`error`] -- Error types for all actor operations ([`ActorError`])
//! - [`habit`] -- Recency-weighted summary of the chosen-mode log
//! - [`population`] -- Arena of actors and the social/neighbour relation
//!   graph ([`Population`])
//! - [`weights`] -- Mode-weight maps, the accumulator, and the
//!   deterministic argmax

pub mod actor;
pub mod error;
pub mod habit;
pub mod population;
pub mod weights;

// Re-export primary types at crate root for convenience.
pub use actor::{Actor, ActorParams};
pub use error::ActorError;
pub use habit::habit_weights;
pub use population::{HabitSnapshot, Population};
pub use weights::{ModeWeights, accumulate, dominant_mode, scale};
