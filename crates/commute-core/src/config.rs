//! Scenario configuration loading for the Commute simulation.
//!
//! A scenario names how many days to simulate, how often norms refresh,
//! and the weather pattern the driver feeds in. Configuration is YAML,
//! mirrored into typed structs with defaults for every field:
//!
//! ```yaml
//! days: 60
//! norm_update_interval: 7
//! weather_pattern: [Good, Good, Bad]
//! ```

use std::path::Path;

use commute_types::Weather;
use serde::Deserialize;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        source: serde_yml::Error,
    },

    /// The configuration parsed but is not usable.
    #[error("invalid scenario configuration: {reason}")]
    Invalid {
        /// Explanation of what is wrong with the configuration.
        reason: String,
    },
}

impl From<serde_yml::Error> for ConfigError {
    fn from(source: serde_yml::Error) -> Self {
        Self::Yaml { source }
    }
}

/// A simulation scenario: run length, norm cadence, and weather.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScenarioConfig {
    /// Number of days to simulate (default: 30).
    #[serde(default = "default_days")]
    pub days: u64,

    /// Update norms every this many days; 0 means never (default: 7).
    #[serde(default = "default_norm_update_interval")]
    pub norm_update_interval: u64,

    /// Weather for each day, cycled when shorter than the run
    /// (default: a single Good day, i.e. permanently good weather).
    #[serde(default = "default_weather_pattern")]
    pub weather_pattern: Vec<Weather>,
}

/// Default run length.
const fn default_days() -> u64 {
    30
}

/// Default norm refresh cadence.
const fn default_norm_update_interval() -> u64 {
    7
}

/// Default weather pattern.
fn default_weather_pattern() -> Vec<Weather> {
    vec![Weather::Good]
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            days: default_days(),
            norm_update_interval: default_norm_update_interval(),
            weather_pattern: default_weather_pattern(),
        }
    }
}

impl ScenarioConfig {
    /// Parse a scenario from a YAML string and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] on malformed YAML and
    /// [`ConfigError::Invalid`] if the parsed scenario is unusable.
    pub fn from_yaml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load a scenario from a YAML file and validate it.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, plus the
    /// errors of [`ScenarioConfig::from_yaml_str`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Weather for a given day number (1-based), cycling the pattern.
    ///
    /// Falls back to [`Weather::Good`] if the pattern is empty, which
    /// validation prevents for loaded configurations.
    pub fn weather_for_day(&self, day: u64) -> Weather {
        let len = u64::try_from(self.weather_pattern.len()).unwrap_or(u64::MAX);
        if len == 0 {
            return Weather::Good;
        }
        // day is 1-based; index from 0.
        let index = day.saturating_sub(1).checked_rem(len).unwrap_or(0);
        let index = usize::try_from(index).unwrap_or(0);
        self.weather_pattern.get(index).copied().unwrap_or(Weather::Good)
    }

    /// Check the scenario for unusable values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.weather_pattern.is_empty() {
            return Err(ConfigError::Invalid {
                reason: "weather_pattern must contain at least one day".to_owned(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn defaults_fill_an_empty_document() {
        let config = ScenarioConfig::from_yaml_str("{}").unwrap();
        assert_eq!(config, ScenarioConfig::default());
        assert_eq!(config.days, 30);
        assert_eq!(config.norm_update_interval, 7);
    }

    #[test]
    fn explicit_values_override_defaults() {
        let config = ScenarioConfig::from_yaml_str(
            "days: 10\nnorm_update_interval: 0\nweather_pattern: [Good, Bad]\n",
        )
        .unwrap();
        assert_eq!(config.days, 10);
        assert_eq!(config.norm_update_interval, 0);
        assert_eq!(config.weather_pattern, vec![Weather::Good, Weather::Bad]);
    }

    #[test]
    fn empty_weather_pattern_rejected() {
        let result = ScenarioConfig::from_yaml_str("weather_pattern: []\n");
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn malformed_yaml_rejected() {
        let result = ScenarioConfig::from_yaml_str("days: [not a number\n");
        assert!(matches!(result, Err(ConfigError::Yaml { .. })));
    }

    #[test]
    fn weather_pattern_cycles_across_days() {
        let config = ScenarioConfig {
            weather_pattern: vec![Weather::Good, Weather::Good, Weather::Bad],
            ..ScenarioConfig::default()
        };
        assert_eq!(config.weather_for_day(1), Weather::Good);
        assert_eq!(config.weather_for_day(3), Weather::Bad);
        assert_eq!(config.weather_for_day(4), Weather::Good);
        assert_eq!(config.weather_for_day(6), Weather::Bad);
    }
}
