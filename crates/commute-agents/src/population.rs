//! The population registry: an arena of actors and their relation graph.
//!
//! Actors refer to each other only by [`ActorId`]; the registry owns every
//! actor instance for the lifetime of the simulation run. Setup code
//! registers actors and links them into social networks and neighbour
//! sets; the driver then reads habit snapshots out of the arena before
//! each day's updates, so no actor ever observes another's same-day
//! mutation.

use std::collections::BTreeMap;

use commute_types::{ActorId, TransportMode};

use crate::actor::Actor;
use crate::error::ActorError;

/// Snapshot of every actor's habit, keyed by ID.
///
/// Taken by the driver before any actor mutates for the day; all
/// cross-actor reads during norm updates go through it.
pub type HabitSnapshot = BTreeMap<ActorId, TransportMode>;

/// Arena of actors keyed by their stable identifiers.
#[derive(Debug, Default)]
pub struct Population {
    /// All registered actors.
    actors: BTreeMap<ActorId, Actor>,
}

impl Population {
    /// Create an empty population.
    pub const fn new() -> Self {
        Self {
            actors: BTreeMap::new(),
        }
    }

    /// Register an actor. Returns its ID.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::DuplicateActor`] if the ID is already
    /// registered (possible only when re-inserting a removed actor's clone).
    pub fn register(&mut self, actor: Actor) -> Result<ActorId, ActorError> {
        let id = actor.id();
        if self.actors.contains_key(&id) {
            return Err(ActorError::DuplicateActor(id));
        }
        self.actors.insert(id, actor);
        Ok(id)
    }

    /// Look up an actor by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::ActorNotFound`] if the ID is unknown.
    pub fn actor(&self, id: ActorId) -> Result<&Actor, ActorError> {
        self.actors.get(&id).ok_or(ActorError::ActorNotFound(id))
    }

    /// Look up an actor mutably by ID.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::ActorNotFound`] if the ID is unknown.
    pub fn actor_mut(&mut self, id: ActorId) -> Result<&mut Actor, ActorError> {
        self.actors.get_mut(&id).ok_or(ActorError::ActorNotFound(id))
    }

    /// Link two actors into each other's social networks.
    ///
    /// Acquaintance is treated as symmetric; a driver that wants directed
    /// edges can reach the sets through [`Population::actor_mut`].
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::ActorNotFound`] if either ID is unknown.
    pub fn link_social(&mut self, a: ActorId, b: ActorId) -> Result<(), ActorError> {
        self.ensure_known(a)?;
        self.ensure_known(b)?;
        if let Some(actor) = self.actors.get_mut(&a) {
            actor.add_social_contact(b);
        }
        if let Some(actor) = self.actors.get_mut(&b) {
            actor.add_social_contact(a);
        }
        Ok(())
    }

    /// Link two actors as neighbours of each other.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::ActorNotFound`] if either ID is unknown.
    pub fn link_neighbours(&mut self, a: ActorId, b: ActorId) -> Result<(), ActorError> {
        self.ensure_known(a)?;
        self.ensure_known(b)?;
        if let Some(actor) = self.actors.get_mut(&a) {
            actor.add_neighbour(b);
        }
        if let Some(actor) = self.actors.get_mut(&b) {
            actor.add_neighbour(a);
        }
        Ok(())
    }

    /// Snapshot every actor's habit for the day's read phase.
    pub fn habit_snapshot(&self) -> HabitSnapshot {
        self.actors
            .iter()
            .map(|(&id, actor)| (id, actor.habit()))
            .collect()
    }

    /// IDs of all registered actors, in stable order.
    pub fn ids(&self) -> Vec<ActorId> {
        self.actors.keys().copied().collect()
    }

    /// Iterate over all actors in stable ID order.
    pub fn iter(&self) -> impl Iterator<Item = (&ActorId, &Actor)> {
        self.actors.iter()
    }

    /// Number of registered actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Whether the population is empty.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Fail with [`ActorError::ActorNotFound`] unless the ID is registered.
    fn ensure_known(&self, id: ActorId) -> Result<(), ActorError> {
        if self.actors.contains_key(&id) {
            Ok(())
        } else {
            Err(ActorError::ActorNotFound(id))
        }
    }
}
