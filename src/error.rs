// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the skill.
//!
//! Errors fall in two groups. Conditions the user caused by what they said
//! (an unknown light, an unknown color, a garbled percentage) are converted
//! into a spoken acknowledgement via [`Error::acknowledgement`]. Everything
//! else, device faults and broken intent contracts included, propagates to
//! the embedding runtime unchanged.

use thiserror::Error;

use crate::dialog::Acknowledgement;

/// The main error type for this crate.
#[derive(Debug, Error)]
pub enum Error {
    /// Error occurred during value validation.
    #[error("value error: {0}")]
    Value(#[from] ValueError),

    /// The intent message did not match any supported command shape.
    #[error("intent error: {0}")]
    Intent(#[from] IntentError),

    /// A device command or discovery failed.
    #[error("device error: {0}")]
    Device(#[from] DeviceError),

    /// The skill configuration could not be loaded.
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    /// No known light or group matched the spoken name closely enough.
    #[error("no device matches {query:?} (best score {best_score})")]
    NoSuchDevice {
        /// The spoken name.
        query: String,
        /// The highest similarity score seen, 0 when nothing is registered.
        best_score: u8,
    },

    /// The spoken color is not a known color name.
    #[error("unknown color: {0}")]
    UnknownColor(String),
}

impl Error {
    /// Returns `true` if this error should be reported to the user rather
    /// than propagated.
    #[must_use]
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::NoSuchDevice { .. }
                | Self::UnknownColor(_)
                | Self::Value(ValueError::InvalidPercent(_) | ValueError::OutOfRange { .. })
        )
    }

    /// Builds the spoken acknowledgement for a user-facing error.
    ///
    /// Returns `None` for errors the user cannot act on.
    #[must_use]
    pub fn acknowledgement(&self) -> Option<Acknowledgement> {
        match self {
            Self::NoSuchDevice { query, .. } => {
                Some(Acknowledgement::new("NotFound").with_field("name", query))
            }
            Self::UnknownColor(color) => {
                Some(Acknowledgement::new("UnknownColor").with_field("color", color))
            }
            Self::Value(ValueError::InvalidPercent(value)) => {
                Some(Acknowledgement::new("InvalidPercent").with_field("value", value))
            }
            Self::Value(ValueError::OutOfRange { actual, .. }) => Some(
                Acknowledgement::new("InvalidPercent").with_field("value", format!("{actual}%")),
            ),
            _ => None,
        }
    }
}

/// Errors related to value validation and constraints.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValueError {
    /// A numeric value is outside the allowed range.
    #[error("value {actual} is out of range [{min}, {max}]")]
    OutOfRange {
        /// Minimum allowed value.
        min: u32,
        /// Maximum allowed value.
        max: u32,
        /// The actual value that was provided.
        actual: u32,
    },

    /// A percentage string could not be parsed.
    #[error("invalid percentage: {0:?}")]
    InvalidPercent(String),
}

/// Errors raised while classifying an intent message.
///
/// These indicate the upstream intent matcher delivered a slot set that no
/// handler accepts, which is a contract violation rather than bad user input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IntentError {
    /// The slot combination matches no supported command.
    #[error("unrecognized intent {slots:?} for utterance {utterance:?}")]
    Unrecognized {
        /// The original utterance, if the message carried one.
        utterance: Option<String>,
        /// The slot names present on the message.
        slots: Vec<String>,
    },

    /// A slot was present but carried no usable text.
    #[error("slot {0} is empty or not a string")]
    MissingSlot(&'static str),
}

/// Errors reported by the device collaborator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DeviceError {
    /// The device or network could not be reached.
    #[error("device unreachable: {0}")]
    Unreachable(String),

    /// The device rejected or failed a command.
    #[error("command failed: {0}")]
    CommandFailed(String),

    /// Discovery did not finish in time.
    #[error("discovery timed out after {0} ms")]
    DiscoveryTimedOut(u64),
}

/// Errors related to loading the skill configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration is not valid JSON for [`SkillConfig`](crate::SkillConfig).
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),

    /// A setting holds a value outside its valid range.
    #[error("invalid setting {field}: {message}")]
    Invalid {
        /// The offending setting.
        field: &'static str,
        /// Description of the constraint.
        message: String,
    },
}

/// A specialized Result type for this crate.
pub type Result<T> = std::result::Result<T, Error>;
