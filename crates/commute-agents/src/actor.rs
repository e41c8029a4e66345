//! The [`Actor`] entity and its two decision routines.
//!
//! An actor models one commuter inside a larger social simulation. Each
//! simulated day the driver asks it to choose a transport mode
//! ([`Actor::choose_mode`]); at whatever cadence the driver prefers it also
//! recomputes the actor's aspirational mode ([`Actor::update_norm`]).
//!
//! Actors read, never write, the state of related actors and of the shared
//! [`Subculture`] / [`Neighbourhood`] entities. Cross-actor reads go through
//! a [`HabitSnapshot`] taken by the driver before any actor mutates, which
//! is how the per-day two-phase barrier reaches this core: every actor
//! computes from the previous day's habits no matter how the driver orders
//! its update loop.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

use commute_types::{ActorId, JourneyType, Neighbourhood, Subculture, TransportMode, Weather};
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::ActorError;
use crate::habit::habit_weights;
use crate::population::HabitSnapshot;
use crate::weights::{ModeWeights, accumulate, dominant_mode, scale};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Upper bound for suggestibility (all other traits cap at 1).
const SUGGESTIBILITY_MAX: Decimal = Decimal::TWO;

/// Resolve bonus for keeping an active habit through stable weather (+0.1).
fn resolve_reward() -> Decimal {
    Decimal::new(1, 1)
}

/// Resolve penalty for a sedentary habit in stable weather (-0.1).
fn resolve_penalty() -> Decimal {
    Decimal::new(-1, 1)
}

/// The resolve term applied to active modes' weather resistance.
///
/// Stable weather rewards an already-active habit and nudges a sedentary
/// one; a change in weather resets the term to zero.
fn resolve_term(habit: TransportMode, change_in_weather: bool) -> Decimal {
    if change_in_weather {
        Decimal::ZERO
    } else if habit.is_active() {
        resolve_reward()
    } else {
        resolve_penalty()
    }
}

// ---------------------------------------------------------------------------
// Construction parameters
// ---------------------------------------------------------------------------

/// Parameters for constructing an [`Actor`].
///
/// Bundles the immutable traits, shared references, and initial mutable
/// state into a single struct to keep the constructor signature manageable.
#[derive(Debug, Clone)]
pub struct ActorParams {
    /// The subculture this actor belongs to (shared, read-only).
    pub subculture: Arc<Subculture>,
    /// The neighbourhood this actor lives in (shared, read-only).
    pub neighbourhood: Arc<Neighbourhood>,
    /// Distance category of the actor's commute.
    pub commute_length: JourneyType,
    /// Subjective effort per journey type and mode, each value in [0, 1].
    /// Must contain an entry for `commute_length`.
    pub perceived_effort: BTreeMap<JourneyType, ModeWeights>,
    /// How strongly bad weather deters active modes, in [0, 1].
    pub weather_sensitivity: Decimal,
    /// Weight of the actor's own norm in every decision, in [0, 1].
    pub autonomy: Decimal,
    /// Weight of habit in the daily choice, in [0, 1].
    pub consistency: Decimal,
    /// Openness to social influence, in [0, 2].
    pub suggestibility: Decimal,
    /// Weight of the social network's behavior, in [0, 1].
    pub social_connectivity: Decimal,
    /// Weight of the subculture's desirability, in [0, 1].
    pub subculture_connectivity: Decimal,
    /// Weight of the neighbours' behavior, in [0, 1].
    pub neighbourhood_connectivity: Decimal,
    /// Configured habit lookback horizon in days. Accepted and stored for
    /// configuration compatibility; the decaying average derives its
    /// schedule from the log length instead.
    pub days_in_habit_average: u32,
    /// Mode the actor used before the simulation starts. Also seeds the
    /// first entry of the chosen-mode log.
    pub initial_mode: TransportMode,
    /// Habit the actor starts with.
    pub initial_habit: TransportMode,
    /// Aspirational mode the actor starts with.
    pub initial_norm: TransportMode,
}

// ---------------------------------------------------------------------------
// Actor
// ---------------------------------------------------------------------------

/// One commuting actor: immutable traits, shared group references, and the
/// mutable decision state the algorithms maintain.
///
/// The social and neighbour sets hold IDs only -- relation and lookup,
/// never ownership. The population registry owns all actor instances.
#[derive(Debug, Clone)]
pub struct Actor {
    /// Unique identifier, assigned at construction.
    id: ActorId,
    /// Shared subculture reference.
    subculture: Arc<Subculture>,
    /// Shared neighbourhood reference.
    neighbourhood: Arc<Neighbourhood>,
    /// Distance category of the commute.
    commute_length: JourneyType,
    /// Subjective effort per journey type and mode.
    perceived_effort: BTreeMap<JourneyType, ModeWeights>,
    /// How strongly bad weather deters active modes.
    weather_sensitivity: Decimal,
    /// Weight of the actor's own norm.
    autonomy: Decimal,
    /// Weight of habit in the daily choice.
    consistency: Decimal,
    /// Openness to social influence.
    suggestibility: Decimal,
    /// Weight of the social network's behavior.
    social_connectivity: Decimal,
    /// Weight of the subculture's desirability.
    subculture_connectivity: Decimal,
    /// Weight of the neighbours' behavior.
    neighbourhood_connectivity: Decimal,
    /// Configured habit lookback horizon (stored, not consumed).
    days_in_habit_average: u32,
    /// Mode chosen for the current simulated day.
    current_mode: TransportMode,
    /// Mode used on the previous simulated day.
    habit: TransportMode,
    /// The actor's aspirational mode.
    norm: TransportMode,
    /// IDs of actors in this actor's social network.
    social_network: BTreeSet<ActorId>,
    /// IDs of actors living in the same neighbourhood.
    neighbours: BTreeSet<ActorId>,
    /// Append-only chosen-mode history, oldest first, one entry per day.
    log: Vec<TransportMode>,
}

impl Actor {
    /// Construct an actor, validating its parameters.
    ///
    /// The chosen-mode log is seeded with one entry equal to
    /// `initial_mode`, so the habit average always has at least one entry
    /// to work with on the first simulated day.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::ParameterOutOfRange`] if a trait lies outside
    /// its documented range, and [`ActorError::MissingEffortData`] if the
    /// perceived-effort table lacks an entry for `commute_length`.
    pub fn new(params: ActorParams) -> Result<Self, ActorError> {
        check_unit_range("weather_sensitivity", params.weather_sensitivity)?;
        check_unit_range("autonomy", params.autonomy)?;
        check_unit_range("consistency", params.consistency)?;
        check_range(
            "suggestibility",
            params.suggestibility,
            Decimal::ZERO,
            SUGGESTIBILITY_MAX,
        )?;
        check_unit_range("social_connectivity", params.social_connectivity)?;
        check_unit_range("subculture_connectivity", params.subculture_connectivity)?;
        check_unit_range("neighbourhood_connectivity", params.neighbourhood_connectivity)?;

        if !params.perceived_effort.contains_key(&params.commute_length) {
            return Err(ActorError::MissingEffortData {
                journey: params.commute_length,
            });
        }
        for table in params.perceived_effort.values() {
            for &effort in table.values() {
                check_unit_range("perceived_effort", effort)?;
            }
        }

        Ok(Self {
            id: ActorId::new(),
            subculture: params.subculture,
            neighbourhood: params.neighbourhood,
            commute_length: params.commute_length,
            perceived_effort: params.perceived_effort,
            weather_sensitivity: params.weather_sensitivity,
            autonomy: params.autonomy,
            consistency: params.consistency,
            suggestibility: params.suggestibility,
            social_connectivity: params.social_connectivity,
            subculture_connectivity: params.subculture_connectivity,
            neighbourhood_connectivity: params.neighbourhood_connectivity,
            days_in_habit_average: params.days_in_habit_average,
            current_mode: params.initial_mode,
            habit: params.initial_habit,
            norm: params.initial_norm,
            social_network: BTreeSet::new(),
            neighbours: BTreeSet::new(),
            log: vec![params.initial_mode],
        })
    }

    /// Recompute the actor's aspirational mode from social, neighbourhood,
    /// subculture, prior-norm, and habit influences.
    ///
    /// `habits` is the driver's snapshot of every actor's previous-day
    /// habit; both group terms read through it, never through live actors.
    /// The side effect is limited to `norm` -- `current_mode`, `habit`, and
    /// the log are untouched.
    pub fn update_norm(&mut self, habits: &HabitSnapshot) {
        let social_vals = scale(
            &group_mode_shares(&self.social_network, habits),
            self.social_connectivity.saturating_mul(self.suggestibility),
        );
        let neighbour_vals = scale(
            &group_mode_shares(&self.neighbours, habits),
            self.neighbourhood_connectivity.saturating_mul(self.suggestibility),
        );
        let subculture_vals = scale(
            &self.subculture.desirability,
            self.subculture_connectivity.saturating_mul(self.suggestibility),
        );
        let norm_vals = ModeWeights::from([(self.norm, self.autonomy)]);
        let habit_vals = habit_weights(&self.log);

        let combined = accumulate([
            &social_vals,
            &neighbour_vals,
            &subculture_vals,
            &norm_vals,
            &habit_vals,
        ]);

        // norm_vals always carries one entry, so the argmax cannot be empty.
        if let Some(new_norm) = dominant_mode(&combined) {
            debug!(actor = %self.id, old = ?self.norm, new = ?new_norm, "norm updated");
            self.norm = new_norm;
        }
    }

    /// Choose the transport mode for the current simulated day and commit
    /// it to history.
    ///
    /// `change_in_weather` is computed by the driver by comparing today's
    /// weather to yesterday's. Side effects, in order: the mode used before
    /// this call becomes the new `habit`, the chosen mode is appended to
    /// the log, and `current_mode` is set to it.
    ///
    /// Weather and effort terms combine additively with the rest -- that is
    /// the model's literal behavior, reproduced deliberately.
    ///
    /// # Errors
    ///
    /// Returns [`ActorError::MissingEffortData`] if the perceived-effort
    /// table has no entry for the actor's commute length. Construction
    /// validates the table, so this cannot occur for an actor built
    /// through [`Actor::new`].
    pub fn choose_mode(
        &mut self,
        weather: Weather,
        change_in_weather: bool,
    ) -> Result<TransportMode, ActorError> {
        // Yesterday's choice becomes today's habit before anything reads it.
        self.habit = self.current_mode;

        let norm_val = ModeWeights::from([(self.norm, self.autonomy)]);
        let habit_val = scale(&habit_weights(&self.log), self.consistency);
        let intermediate =
            accumulate([&norm_val, &habit_val, &self.neighbourhood.supportiveness]);

        let effort_table = self
            .perceived_effort
            .get(&self.commute_length)
            .ok_or(ActorError::MissingEffortData {
                journey: self.commute_length,
            })?;
        // High perceived effort should count against a mode, so invert it.
        let effort: ModeWeights = effort_table
            .iter()
            .map(|(&mode, &effort)| (mode, Decimal::ONE.saturating_sub(effort)))
            .collect();

        let resolve = resolve_term(self.habit, change_in_weather);
        let active_weight = Decimal::ONE
            .saturating_sub(self.weather_sensitivity)
            .saturating_add(resolve);
        let weather_modifier = ModeWeights::from([
            (TransportMode::Car, Decimal::ONE),
            (TransportMode::Cycle, active_weight),
            (TransportMode::Walk, active_weight),
            (TransportMode::PublicTransport, Decimal::ONE),
        ]);

        let combined = match weather {
            Weather::Good => accumulate([&intermediate, &effort]),
            Weather::Bad => accumulate([&intermediate, &weather_modifier, &effort]),
        };

        // norm_val always carries one entry, so the argmax cannot be empty.
        let new_mode = dominant_mode(&combined).unwrap_or(self.current_mode);
        self.log.push(new_mode);
        self.current_mode = new_mode;

        debug!(
            actor = %self.id,
            mode = ?new_mode,
            ?weather,
            change_in_weather,
            "mode chosen"
        );
        Ok(new_mode)
    }

    /// Add another actor to this actor's social network. Returns `false`
    /// if the contact was already present.
    pub fn add_social_contact(&mut self, other: ActorId) -> bool {
        self.social_network.insert(other)
    }

    /// Add another actor to this actor's neighbour set. Returns `false`
    /// if the neighbour was already present.
    pub fn add_neighbour(&mut self, other: ActorId) -> bool {
        self.neighbours.insert(other)
    }

    /// The actor's unique identifier.
    pub const fn id(&self) -> ActorId {
        self.id
    }

    /// The mode chosen for the current simulated day.
    pub const fn current_mode(&self) -> TransportMode {
        self.current_mode
    }

    /// The mode used on the previous simulated day.
    pub const fn habit(&self) -> TransportMode {
        self.habit
    }

    /// The actor's aspirational mode.
    pub const fn norm(&self) -> TransportMode {
        self.norm
    }

    /// The append-only chosen-mode history, oldest first.
    pub fn log(&self) -> &[TransportMode] {
        &self.log
    }

    /// Distance category of the actor's commute.
    pub const fn commute_length(&self) -> JourneyType {
        self.commute_length
    }

    /// IDs of the actors in this actor's social network.
    pub const fn social_network(&self) -> &BTreeSet<ActorId> {
        &self.social_network
    }

    /// IDs of this actor's neighbours.
    pub const fn neighbours(&self) -> &BTreeSet<ActorId> {
        &self.neighbours
    }

    /// The shared subculture this actor reads.
    pub const fn subculture(&self) -> &Arc<Subculture> {
        &self.subculture
    }

    /// The shared neighbourhood this actor reads.
    pub const fn neighbourhood(&self) -> &Arc<Neighbourhood> {
        &self.neighbourhood
    }

    /// Configured habit lookback horizon (stored, not consumed).
    pub const fn days_in_habit_average(&self) -> u32 {
        self.days_in_habit_average
    }
}

/// Fraction of a group whose habit is each mode.
///
/// An empty group contributes the empty mapping -- zero influence, not a
/// division failure. IDs missing from the snapshot are skipped in the
/// count while the group size stays the denominator.
fn group_mode_shares(group: &BTreeSet<ActorId>, habits: &HabitSnapshot) -> ModeWeights {
    let mut shares = ModeWeights::new();
    if group.is_empty() {
        return shares;
    }

    let mut counts: BTreeMap<TransportMode, u64> = BTreeMap::new();
    for id in group {
        if let Some(&mode) = habits.get(id) {
            let count = counts.entry(mode).or_insert(0);
            *count = count.saturating_add(1);
        }
    }

    let size = Decimal::from(u64::try_from(group.len()).unwrap_or(u64::MAX));
    for (mode, count) in counts {
        // size >= 1: the empty case returned above.
        let share = Decimal::from(count).checked_div(size).unwrap_or(Decimal::ZERO);
        shares.insert(mode, share);
    }
    shares
}

/// Validate a trait parameter against the standard [0, 1] range.
fn check_unit_range(name: &'static str, value: Decimal) -> Result<(), ActorError> {
    check_range(name, value, Decimal::ZERO, Decimal::ONE)
}

/// Validate a trait parameter against an inclusive range.
fn check_range(
    name: &'static str,
    value: Decimal,
    min: Decimal,
    max: Decimal,
) -> Result<(), ActorError> {
    if value < min || value > max {
        return Err(ActorError::ParameterOutOfRange {
            name,
            value,
            min,
            max,
        });
    }
    Ok(())
}
