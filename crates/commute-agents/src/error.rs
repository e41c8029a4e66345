//! Error types for the commute-agents crate.
//!
//! All operations that can fail return typed errors rather than panicking.
//! Every condition here is structural and deterministic -- nothing is
//! transient, so no caller should retry.

use commute_types::{ActorId, JourneyType};
use rust_decimal::Decimal;

/// Errors that can occur during actor operations.
#[derive(Debug, thiserror::Error)]
pub enum ActorError {
    /// The actor's perceived-effort table has no entry for its own commute
    /// length. Fatal to the mode choice it interrupts; prevented by
    /// validating the table at construction time.
    #[error("no perceived-effort entry for commute length {journey:?}")]
    MissingEffortData {
        /// The journey type that was looked up.
        journey: JourneyType,
    },

    /// A trait parameter was outside its documented range at construction.
    #[error("parameter {name} = {value} outside valid range [{min}, {max}]")]
    ParameterOutOfRange {
        /// Name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: Decimal,
        /// Lower bound of the valid range (inclusive).
        min: Decimal,
        /// Upper bound of the valid range (inclusive).
        max: Decimal,
    },

    /// Actor with the given ID was not found in the population.
    #[error("actor not found: {0}")]
    ActorNotFound(ActorId),

    /// An actor with the given ID is already registered in the population.
    #[error("duplicate actor id: {0}")]
    DuplicateActor(ActorId),
}
