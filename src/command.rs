// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device commands issued by the intent handlers.
//!
//! Each handler ends in exactly one [`DeviceCommand`]. Keeping the command
//! as a value lets a handler decide what to send before it decides whether
//! to send it (test mode skips the send).
//!
//! # Examples
//!
//! ```
//! use lifx_skill::command::DeviceCommand;
//! use lifx_skill::types::{Dimension, Percent};
//!
//! let cmd = DeviceCommand::for_percent(Dimension::Kelvin, Percent::new(25).unwrap());
//! assert_eq!(cmd, DeviceCommand::ColorTemp(4125));
//! assert_eq!(cmd.name(), "set_colortemp");
//! ```

use std::fmt;
use std::time::Duration;

use crate::error::DeviceError;
use crate::target::Target;
use crate::types::{Dimension, Hsbk, Percent};

/// A single call on a [`Target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceCommand {
    /// Switch power.
    Power(bool),
    /// Set the full color state.
    Color(Hsbk),
    /// Set brightness (0-65535).
    Brightness(u16),
    /// Set saturation (0-65535).
    Saturation(u16),
    /// Set color temperature in Kelvin.
    ColorTemp(u16),
}

impl DeviceCommand {
    /// The setter that applies `percent` to `dimension`.
    #[must_use]
    pub fn for_percent(dimension: Dimension, percent: Percent) -> Self {
        Self::for_value(dimension, percent.to_device_value(dimension))
    }

    /// The setter that writes a device-native `value` to `dimension`.
    #[must_use]
    pub const fn for_value(dimension: Dimension, value: u16) -> Self {
        match dimension {
            Dimension::Brightness => Self::Brightness(value),
            Dimension::Saturation => Self::Saturation(value),
            Dimension::Kelvin => Self::ColorTemp(value),
        }
    }

    /// Name of the target method this command calls.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Power(_) => "set_power",
            Self::Color(_) => "set_color",
            Self::Brightness(_) => "set_brightness",
            Self::Saturation(_) => "set_saturation",
            Self::ColorTemp(_) => "set_colortemp",
        }
    }

    /// Sends this command to `target`.
    ///
    /// # Errors
    ///
    /// Returns the target's `DeviceError` unchanged.
    pub async fn send<T: Target + ?Sized>(
        self,
        target: &T,
        transition: Duration,
    ) -> Result<(), DeviceError> {
        match self {
            Self::Power(on) => target.set_power(on, transition).await,
            Self::Color(color) => target.set_color(color, transition).await,
            Self::Brightness(value) => target.set_brightness(value, transition).await,
            Self::Saturation(value) => target.set_saturation(value, transition).await,
            Self::ColorTemp(kelvin) => target.set_colortemp(kelvin, transition).await,
        }
    }
}

impl fmt::Display for DeviceCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Power(on) => write!(f, "{}({on})", self.name()),
            Self::Color(color) => write!(f, "{}({color})", self.name()),
            Self::Brightness(v) | Self::Saturation(v) | Self::ColorTemp(v) => {
                write!(f, "{}({v})", self.name())
            }
        }
    }
}
