// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Device-control seams.
//!
//! The skill does not speak the LIFX LAN protocol itself. The embedding
//! application implements these traits on top of whatever device library it
//! uses; the skill only calls them.
//!
//! - [`Target`]: anything that accepts light commands (a bulb or a group)
//! - [`Light`]: an individual bulb, which can also report its state
//! - [`LightGroup`]: a named set of lights that forwards each command
//!
//! Calls are awaited one at a time and carry no timeout or retry; a failing
//! call surfaces as [`DeviceError`].

use std::time::Duration;

use crate::error::DeviceError;
use crate::types::Hsbk;

/// A controllable light or group of lights.
#[allow(async_fn_in_trait)]
pub trait Target {
    /// Switches power on or off.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the command fails.
    async fn set_power(&self, on: bool, transition: Duration) -> Result<(), DeviceError>;

    /// Sets the full color state.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the command fails.
    async fn set_color(&self, color: Hsbk, transition: Duration) -> Result<(), DeviceError>;

    /// Sets brightness (0-65535).
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the command fails.
    async fn set_brightness(&self, value: u16, transition: Duration) -> Result<(), DeviceError>;

    /// Sets saturation (0-65535).
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the command fails.
    async fn set_saturation(&self, value: u16, transition: Duration) -> Result<(), DeviceError>;

    /// Sets color temperature in Kelvin (2500-9000).
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the command fails.
    async fn set_colortemp(&self, kelvin: u16, transition: Duration) -> Result<(), DeviceError>;
}

/// An individual bulb.
#[allow(async_fn_in_trait)]
pub trait Light: Target {
    /// The bulb's label.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the label cannot be queried.
    async fn label(&self) -> Result<String, DeviceError>;

    /// The label of the group the bulb belongs to.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the group cannot be queried.
    async fn group_label(&self) -> Result<String, DeviceError>;

    /// Reads the bulb's current color state.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the state cannot be read.
    async fn get_color(&self) -> Result<Hsbk, DeviceError>;
}

/// A group of targets controlled together.
///
/// Commands go to each member in order; the first failure stops the
/// sequence and is returned, leaving later members unchanged.
#[derive(Debug, Clone)]
pub struct LightGroup<T> {
    label: String,
    members: Vec<T>,
}

impl<T> LightGroup<T> {
    /// Creates a group from its label and members.
    #[must_use]
    pub fn new(label: impl Into<String>, members: Vec<T>) -> Self {
        Self {
            label: label.into(),
            members,
        }
    }

    /// The group's label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The group's members.
    #[must_use]
    pub fn members(&self) -> &[T] {
        &self.members
    }
}

impl<T: Target> Target for LightGroup<T> {
    async fn set_power(&self, on: bool, transition: Duration) -> Result<(), DeviceError> {
        for member in &self.members {
            member.set_power(on, transition).await?;
        }
        Ok(())
    }

    async fn set_color(&self, color: Hsbk, transition: Duration) -> Result<(), DeviceError> {
        for member in &self.members {
            member.set_color(color, transition).await?;
        }
        Ok(())
    }

    async fn set_brightness(&self, value: u16, transition: Duration) -> Result<(), DeviceError> {
        for member in &self.members {
            member.set_brightness(value, transition).await?;
        }
        Ok(())
    }

    async fn set_saturation(&self, value: u16, transition: Duration) -> Result<(), DeviceError> {
        for member in &self.members {
            member.set_saturation(value, transition).await?;
        }
        Ok(())
    }

    async fn set_colortemp(&self, kelvin: u16, transition: Duration) -> Result<(), DeviceError> {
        for member in &self.members {
            member.set_colortemp(kelvin, transition).await?;
        }
        Ok(())
    }
}

impl<T: Target> Target for std::sync::Arc<T> {
    async fn set_power(&self, on: bool, transition: Duration) -> Result<(), DeviceError> {
        T::set_power(self, on, transition).await
    }

    async fn set_color(&self, color: Hsbk, transition: Duration) -> Result<(), DeviceError> {
        T::set_color(self, color, transition).await
    }

    async fn set_brightness(&self, value: u16, transition: Duration) -> Result<(), DeviceError> {
        T::set_brightness(self, value, transition).await
    }

    async fn set_saturation(&self, value: u16, transition: Duration) -> Result<(), DeviceError> {
        T::set_saturation(self, value, transition).await
    }

    async fn set_colortemp(&self, kelvin: u16, transition: Duration) -> Result<(), DeviceError> {
        T::set_colortemp(self, kelvin, transition).await
    }
}

impl<T: Light> Light for std::sync::Arc<T> {
    async fn label(&self) -> Result<String, DeviceError> {
        T::label(self).await
    }

    async fn group_label(&self) -> Result<String, DeviceError> {
        T::group_label(self).await
    }

    async fn get_color(&self) -> Result<Hsbk, DeviceError> {
        T::get_color(self).await
    }
}
