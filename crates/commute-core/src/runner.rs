//! The reference day runner: drives a population through simulated days.
//!
//! Each day runs as two phases so that no actor ever observes another
//! actor's same-day mutation:
//!
//! 1. **Read** -- advance the clock, derive `change_in_weather`, and take a
//!    habit snapshot of the whole population (the previous day's state).
//! 2. **Commit** -- refresh norms against the snapshot when the cadence
//!    fires, then let every actor choose its mode for the day. Mode
//!    choices read no cross-actor state, so committing them in place
//!    preserves the barrier.
//!
//! Each actor makes exactly one mode choice per day; norm refreshes run at
//! the configured cadence, which may be never.

use std::collections::BTreeMap;

use commute_agents::{ActorError, Population};
use commute_types::{ActorId, TransportMode, Weather};
use tracing::{debug, info};

use crate::clock::{ClockError, DayClock};
use crate::config::ScenarioConfig;

/// Errors that can occur while running simulated days.
#[derive(Debug, thiserror::Error)]
pub enum SimulationError {
    /// A clock operation failed.
    #[error("clock error: {source}")]
    Clock {
        /// The underlying clock error.
        #[from]
        source: ClockError,
    },

    /// An actor operation failed.
    #[error("actor error for {actor_id}: {source}")]
    Actor {
        /// The actor that caused the error.
        actor_id: ActorId,
        /// The underlying actor error.
        source: ActorError,
    },
}

/// Summary of a single simulated day.
#[derive(Debug, Clone)]
pub struct DaySummary {
    /// The day number that was executed (1-based).
    pub day: u64,
    /// The weather during this day.
    pub weather: Weather,
    /// Whether the weather differed from the previous day's.
    pub change_in_weather: bool,
    /// Whether the norm refresh cadence fired this day.
    pub norms_updated: bool,
    /// The mode each actor chose.
    pub choices: BTreeMap<ActorId, TransportMode>,
}

/// A population of actors plus the clock that paces their days.
#[derive(Debug)]
pub struct Simulation {
    /// The actor arena and relation graph.
    population: Population,
    /// The day clock.
    clock: DayClock,
    /// Refresh norms every this many days; 0 means never.
    norm_update_interval: u64,
}

impl Simulation {
    /// Create a simulation over an already-populated actor arena.
    pub const fn new(population: Population, norm_update_interval: u64) -> Self {
        Self {
            population,
            clock: DayClock::new(),
            norm_update_interval,
        }
    }

    /// The actor arena.
    pub const fn population(&self) -> &Population {
        &self.population
    }

    /// Mutable access to the actor arena (setup and inspection).
    pub const fn population_mut(&mut self) -> &mut Population {
        &mut self.population
    }

    /// The day clock.
    pub const fn clock(&self) -> &DayClock {
        &self.clock
    }

    /// Execute one simulated day under the given weather.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError`] if the clock overflows or an actor
    /// update fails; a failed day leaves no partial commits for days after
    /// it to observe.
    pub fn run_day(&mut self, weather: Weather) -> Result<DaySummary, SimulationError> {
        let day = self.clock.advance(weather)?;
        let change_in_weather = self.clock.change_in_weather();
        info!(day, ?weather, change_in_weather, "Day started");

        // Phase 1: read. The snapshot is the previous day's habits; all
        // cross-actor reads below go through it.
        let snapshot = self.population.habit_snapshot();
        let ids = self.population.ids();

        // Phase 2: commit. Norm refreshes first, against previous-day state.
        let norms_updated = self.norm_update_interval > 0
            && day.checked_rem(self.norm_update_interval) == Some(0);
        if norms_updated {
            for &id in &ids {
                self.actor_mut(id)?.update_norm(&snapshot);
            }
            debug!(day, actors = ids.len(), "Norms refreshed");
        }

        let mut choices = BTreeMap::new();
        for &id in &ids {
            let mode = self
                .actor_mut(id)?
                .choose_mode(weather, change_in_weather)
                .map_err(|source| SimulationError::Actor { actor_id: id, source })?;
            choices.insert(id, mode);
        }

        Ok(DaySummary {
            day,
            weather,
            change_in_weather,
            norms_updated,
            choices,
        })
    }

    /// Run a whole scenario, returning one summary per day.
    ///
    /// # Errors
    ///
    /// Returns the first [`SimulationError`] a day produces.
    pub fn run(&mut self, config: &ScenarioConfig) -> Result<Vec<DaySummary>, SimulationError> {
        let mut summaries = Vec::with_capacity(usize::try_from(config.days).unwrap_or(0));
        for _ in 0..config.days {
            let next_day = self.clock.day().saturating_add(1);
            let weather = config.weather_for_day(next_day);
            summaries.push(self.run_day(weather)?);
        }
        Ok(summaries)
    }

    /// Look up an actor mutably, wrapping failures with its ID.
    fn actor_mut(
        &mut self,
        id: ActorId,
    ) -> Result<&mut commute_agents::Actor, SimulationError> {
        self.population
            .actor_mut(id)
            .map_err(|source| SimulationError::Actor { actor_id: id, source })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::collections::BTreeMap;
    use std::sync::Arc;

    use commute_agents::{Actor, ActorParams, ModeWeights};
    use commute_types::TransportMode::{Car, Cycle, PublicTransport, Walk};
    use commute_types::{JourneyType, Neighbourhood, Subculture};
    use rust_decimal::Decimal;

    use super::*;

    fn make_actor(initial: TransportMode) -> Actor {
        let mut effort = BTreeMap::new();
        effort.insert(
            JourneyType::Medium,
            ModeWeights::from([
                (Car, Decimal::new(3, 1)),
                (Cycle, Decimal::new(5, 1)),
                (Walk, Decimal::new(8, 1)),
                (PublicTransport, Decimal::new(4, 1)),
            ]),
        );
        Actor::new(ActorParams {
            subculture: Arc::new(Subculture::new("s", ModeWeights::new())),
            neighbourhood: Arc::new(Neighbourhood::new("n", ModeWeights::new())),
            commute_length: JourneyType::Medium,
            perceived_effort: effort,
            weather_sensitivity: Decimal::new(5, 1),
            autonomy: Decimal::new(8, 1),
            consistency: Decimal::new(3, 1),
            suggestibility: Decimal::ONE,
            social_connectivity: Decimal::new(5, 1),
            subculture_connectivity: Decimal::new(5, 1),
            neighbourhood_connectivity: Decimal::new(5, 1),
            days_in_habit_average: 30,
            initial_mode: initial,
            initial_habit: initial,
            initial_norm: initial,
        })
        .unwrap()
    }

    fn two_actor_simulation(norm_update_interval: u64) -> Simulation {
        let mut population = Population::new();
        let a = population.register(make_actor(Car)).unwrap();
        let b = population.register(make_actor(Cycle)).unwrap();
        population.link_social(a, b).unwrap();
        Simulation::new(population, norm_update_interval)
    }

    #[test]
    fn each_day_appends_one_log_entry_per_actor() {
        let mut simulation = two_actor_simulation(0);
        for _ in 0..5 {
            let _ = simulation.run_day(Weather::Good).unwrap();
        }
        for (_, actor) in simulation.population().iter() {
            // Seed entry plus one per day.
            assert_eq!(actor.log().len(), 6);
        }
    }

    #[test]
    fn summary_reports_every_choice() {
        let mut simulation = two_actor_simulation(0);
        let summary = simulation.run_day(Weather::Good).unwrap();
        assert_eq!(summary.day, 1);
        assert_eq!(summary.choices.len(), 2);
        assert!(!summary.change_in_weather);
        assert!(!summary.norms_updated);
    }

    #[test]
    fn change_in_weather_follows_the_clock() {
        let mut simulation = two_actor_simulation(0);
        let first = simulation.run_day(Weather::Good).unwrap();
        let second = simulation.run_day(Weather::Bad).unwrap();
        let third = simulation.run_day(Weather::Bad).unwrap();
        assert!(!first.change_in_weather);
        assert!(second.change_in_weather);
        assert!(!third.change_in_weather);
    }

    #[test]
    fn norm_cadence_fires_on_multiples() {
        let mut simulation = two_actor_simulation(3);
        let fired: Vec<bool> = (0..6)
            .map(|_| simulation.run_day(Weather::Good).unwrap().norms_updated)
            .collect();
        assert_eq!(fired, vec![false, false, true, false, false, true]);
    }

    #[test]
    fn zero_interval_never_updates_norms() {
        let mut simulation = two_actor_simulation(0);
        for _ in 0..10 {
            assert!(!simulation.run_day(Weather::Bad).unwrap().norms_updated);
        }
    }

    #[test]
    fn run_honors_the_scenario_length() {
        let config = ScenarioConfig {
            days: 4,
            norm_update_interval: 2,
            weather_pattern: vec![Weather::Good, Weather::Bad],
        };
        let mut simulation = two_actor_simulation(config.norm_update_interval);
        let summaries = simulation.run(&config).unwrap();
        assert_eq!(summaries.len(), 4);
        assert_eq!(summaries.first().map(|s| s.weather), Some(Weather::Good));
        assert_eq!(summaries.get(1).map(|s| s.weather), Some(Weather::Bad));
        assert_eq!(simulation.clock().day(), 4);
    }
}
