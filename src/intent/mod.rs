// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Intent messages and their classification into commands.
//!
//! The intent matcher delivers a bag of slots. [`Intent::classify`] turns
//! that bag into exactly one [`Intent`] variant, so handlers never see a
//! slot combination they cannot act on.
//!
//! # Supported shapes
//!
//! | Variant | Required slots |
//! |---------|----------------|
//! | [`Intent::SetPercent`] | `Turn`, `Light`/`Group`, `Brightness`/`Temperature`/`Saturation`, `Percent` |
//! | [`Intent::Color`] | `Turn`, `Light`/`Group`, `Color` |
//! | [`Intent::Power`] | `Turn`, `Light`/`Group`, `On`/`Off` |
//! | [`Intent::Warmth`] | `Turn`, `Light`, `Temperature`, `Increase`/`Decrease` |
//! | [`Intent::Dim`] | `Light`, `Increase`/`Decrease` (`Turn` optional) |
//!
//! Shapes are checked top to bottom; the first that fits wins. Within a
//! shape, `Light` is preferred over `Group`, `Off` over `On`, and
//! `Increase` over `Decrease`.

mod message;

pub use message::IntentMessage;

use std::fmt;

use crate::adjust::Direction;
use crate::error::{Error, IntentError, Result};
use crate::types::{Dimension, Percent};

/// Slot names used by the intent matcher.
pub mod slots {
    /// Verb slot ("turn", "set", "make").
    pub const TURN: &str = "Turn";
    /// Individual light name.
    pub const LIGHT: &str = "Light";
    /// Group name.
    pub const GROUP: &str = "Group";
    /// Power on keyword.
    pub const ON: &str = "On";
    /// Power off keyword.
    pub const OFF: &str = "Off";
    /// Color name.
    pub const COLOR: &str = "Color";
    /// Brighter or warmer keyword.
    pub const INCREASE: &str = "Increase";
    /// Darker or cooler keyword.
    pub const DECREASE: &str = "Decrease";
    /// Brightness keyword.
    pub const BRIGHTNESS: &str = "Brightness";
    /// Saturation keyword.
    pub const SATURATION: &str = "Saturation";
    /// Color temperature keyword.
    pub const TEMPERATURE: &str = "Temperature";
    /// Spoken percentage, e.g. `"25%"`.
    pub const PERCENT: &str = "Percent";
    /// Test-mode flag.
    pub const TEST_RUNNER: &str = "_TestRunner";
    /// The original sentence.
    pub const UTTERANCE: &str = "utterance";
}

/// A spoken reference to a light or a group.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TargetRef {
    /// An individual light.
    Light(String),
    /// A group of lights.
    Group(String),
}

impl TargetRef {
    /// The spoken name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Light(name) | Self::Group(name) => name,
        }
    }
}

impl fmt::Display for TargetRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Light(name) => write!(f, "light {name:?}"),
            Self::Group(name) => write!(f, "group {name:?}"),
        }
    }
}

/// A fully classified voice command.
#[derive(Debug, Clone, PartialEq)]
pub enum Intent {
    /// Switch a light or group on or off.
    Power {
        /// What to switch.
        target: TargetRef,
        /// `true` for on.
        on: bool,
    },
    /// Set a light or group to a named color.
    Color {
        /// What to color.
        target: TargetRef,
        /// The spoken color name.
        color: String,
    },
    /// Brighten or darken a light by one step.
    Dim {
        /// The spoken light name.
        light: String,
        /// Brighter or darker.
        direction: Direction,
    },
    /// Make a light warmer or cooler by one step.
    Warmth {
        /// The spoken light name.
        light: String,
        /// Warmer or cooler.
        direction: Direction,
    },
    /// Set brightness, saturation or color temperature to a percentage.
    SetPercent {
        /// What to adjust.
        target: TargetRef,
        /// Which component.
        dimension: Dimension,
        /// The requested percentage.
        percent: Percent,
    },
}

impl Intent {
    /// Classifies a message into a command.
    ///
    /// # Errors
    ///
    /// - [`IntentError::Unrecognized`] if no supported shape fits.
    /// - [`IntentError::MissingSlot`] if a name slot is present but not text.
    /// - [`ValueError`](crate::error::ValueError) if the percentage is not a
    ///   whole number from 0 to 100.
    pub fn classify(message: &IntentMessage) -> Result<Self> {
        let has = |slot: &str| message.has(slot);
        let has_target = has(slots::LIGHT) || has(slots::GROUP);
        let direction = if has(slots::INCREASE) {
            Some(Direction::Increase)
        } else if has(slots::DECREASE) {
            Some(Direction::Decrease)
        } else {
            None
        };

        let dimension = if has(slots::BRIGHTNESS) {
            Some(Dimension::Brightness)
        } else if has(slots::TEMPERATURE) {
            Some(Dimension::Kelvin)
        } else if has(slots::SATURATION) {
            Some(Dimension::Saturation)
        } else {
            None
        };

        let intent = if let Some(dimension) =
            dimension.filter(|_| has(slots::TURN) && has_target && has(slots::PERCENT))
        {
            let percent = required(message, slots::PERCENT)?.parse::<Percent>()?;
            Self::SetPercent {
                target: target(message)?,
                dimension,
                percent,
            }
        } else if has(slots::TURN) && has_target && has(slots::COLOR) {
            Self::Color {
                target: target(message)?,
                color: required(message, slots::COLOR)?.to_string(),
            }
        } else if has(slots::TURN) && has_target && (has(slots::OFF) || has(slots::ON)) {
            Self::Power {
                target: target(message)?,
                on: !has(slots::OFF),
            }
        } else if let Some(direction) = direction.filter(|_| has(slots::LIGHT)) {
            let light = required(message, slots::LIGHT)?.to_string();
            if has(slots::TEMPERATURE) && has(slots::TURN) {
                Self::Warmth { light, direction }
            } else {
                Self::Dim { light, direction }
            }
        } else {
            return Err(unrecognized(message));
        };

        tracing::debug!(?intent, "Classified intent");
        Ok(intent)
    }
}

fn required<'a>(message: &'a IntentMessage, slot: &'static str) -> Result<&'a str> {
    message
        .slot(slot)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or(Error::Intent(IntentError::MissingSlot(slot)))
}

fn target(message: &IntentMessage) -> Result<TargetRef> {
    if message.has(slots::LIGHT) {
        Ok(TargetRef::Light(required(message, slots::LIGHT)?.to_string()))
    } else {
        Ok(TargetRef::Group(required(message, slots::GROUP)?.to_string()))
    }
}

fn unrecognized(message: &IntentMessage) -> Error {
    let err = IntentError::Unrecognized {
        utterance: message.utterance().map(ToString::to_string),
        slots: message.slot_names(),
    };
    tracing::error!(%err, "Intent fired without a supported slot combination");
    err.into()
}
