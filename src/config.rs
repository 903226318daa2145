// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Skill settings.

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::adjust::step_size;
use crate::error::ConfigError;
use crate::registry::DEFAULT_MIN_MATCH_SCORE;
use crate::types::Dimension;

/// Default transition applied to every device command.
pub const DEFAULT_TRANSITION_MS: u64 = 1250;

/// Default relative step as a fraction of the full range.
pub const DEFAULT_PERCENT_STEP: f64 = 0.1;

/// Default bound on startup discovery.
pub const DEFAULT_DISCOVERY_TIMEOUT_MS: u64 = 5000;

/// Settings for [`LightSkill`](crate::LightSkill).
///
/// Every field has a default, so a settings file only needs the values it
/// changes.
///
/// # Examples
///
/// ```
/// use lifx_skill::SkillConfig;
///
/// let config = SkillConfig::from_json_str(r#"{"percent_step": 0.25}"#).unwrap();
/// assert_eq!(config.dim_step(), 16383);
/// assert_eq!(config.transition().as_millis(), 1250);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SkillConfig {
    /// Share of the full range moved by one relative step, in `(0, 1]`.
    pub percent_step: f64,
    /// Transition duration in milliseconds for every device command.
    pub transition_ms: u64,
    /// Minimum similarity (0-100) a spoken name needs to resolve.
    pub min_match_score: u8,
    /// Upper bound on startup discovery in milliseconds.
    pub discovery_timeout_ms: u64,
}

impl Default for SkillConfig {
    fn default() -> Self {
        Self {
            percent_step: DEFAULT_PERCENT_STEP,
            transition_ms: DEFAULT_TRANSITION_MS,
            min_match_score: DEFAULT_MIN_MATCH_SCORE,
            discovery_timeout_ms: DEFAULT_DISCOVERY_TIMEOUT_MS,
        }
    }
}

impl SkillConfig {
    /// Creates the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses and validates a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Json` for malformed JSON and
    /// `ConfigError::Invalid` for out-of-range settings.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read, otherwise as
    /// [`from_json_str`](Self::from_json_str).
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        let config = Self::from_json_str(&contents)?;
        tracing::info!(path = %path.display(), "Loaded skill settings");
        Ok(config)
    }

    /// Checks every setting against its valid range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Invalid` naming the first offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.percent_step > 0.0 && self.percent_step <= 1.0) {
            return Err(ConfigError::Invalid {
                field: "percent_step",
                message: format!("{} is not in (0, 1]", self.percent_step),
            });
        }
        if self.min_match_score > 100 {
            return Err(ConfigError::Invalid {
                field: "min_match_score",
                message: format!("{} exceeds 100", self.min_match_score),
            });
        }
        Ok(())
    }

    /// Sets the relative step fraction.
    #[must_use]
    pub fn with_percent_step(mut self, percent_step: f64) -> Self {
        self.percent_step = percent_step;
        self
    }

    /// Sets the transition duration.
    #[must_use]
    pub fn with_transition(mut self, transition: Duration) -> Self {
        self.transition_ms = u64::try_from(transition.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Sets the resolver threshold.
    #[must_use]
    pub fn with_min_match_score(mut self, score: u8) -> Self {
        self.min_match_score = score;
        self
    }

    /// Sets the discovery timeout.
    #[must_use]
    pub fn with_discovery_timeout(mut self, timeout: Duration) -> Self {
        self.discovery_timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Transition duration for device commands.
    #[must_use]
    pub fn transition(&self) -> Duration {
        Duration::from_millis(self.transition_ms)
    }

    /// Upper bound on startup discovery.
    #[must_use]
    pub fn discovery_timeout(&self) -> Duration {
        Duration::from_millis(self.discovery_timeout_ms)
    }

    /// Brightness change of one dim step.
    #[must_use]
    pub fn dim_step(&self) -> u16 {
        step_size(self.percent_step, Dimension::Brightness)
    }

    /// Kelvin change of one warmth step.
    #[must_use]
    pub fn temperature_step(&self) -> u16 {
        step_size(self.percent_step, Dimension::Kelvin)
    }
}
