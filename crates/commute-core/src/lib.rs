//! Day clock, scenario configuration, and the reference day runner for
//! the Commute simulation.
//!
//! `commute-agents` defines what a single actor does; this crate supplies
//! the minimal orchestration around it: a clock that paces simulated days
//! and derives weather changes, a YAML scenario format, and a runner that
//! honors the per-day two-phase barrier (read the whole population's
//! previous-day habits, then commit every actor's updates).
//!
//! # Modules
//!
//! - [`clock`] -- The day counter and weather-change derivation
//!   ([`DayClock`])
//! - [`config`] -- Scenario loading from YAML ([`ScenarioConfig`])
//! - [`runner`] -- The two-phase day loop ([`Simulation`])

pub mod clock;
pub mod config;
pub mod runner;

// Re-export primary types at crate root for convenience.
pub use clock::{ClockError, DayClock};
pub use config::{ConfigError, ScenarioConfig};
pub use runner::{DaySummary, Simulation, SimulationError};
