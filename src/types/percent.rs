// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Percentage type and conversion onto device value ranges.
//!
//! Brightness and saturation map linearly onto 0-65535. Color temperature
//! maps 0% onto 2500K and 100% onto 9000K, so a higher percentage means a
//! higher Kelvin value.

use std::fmt;
use std::str::FromStr;

use crate::error::ValueError;

use super::Dimension;

/// A whole percentage (0-100).
///
/// # Examples
///
/// ```
/// use lifx_skill::types::{Dimension, Percent};
///
/// let quarter: Percent = "25%".parse().unwrap();
/// assert_eq!(quarter.value(), 25);
/// assert_eq!(quarter.to_device_value(Dimension::Kelvin), 4125);
///
/// assert!("120%".parse::<Percent>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Percent(u8);

impl Percent {
    /// 0%.
    pub const MIN: Self = Self(0);

    /// 100%.
    pub const MAX: Self = Self(100);

    /// Creates a percentage.
    ///
    /// # Errors
    ///
    /// Returns `ValueError::OutOfRange` if value exceeds 100.
    pub fn new(value: u8) -> Result<Self, ValueError> {
        if value > 100 {
            return Err(ValueError::OutOfRange {
                min: 0,
                max: 100,
                actual: u32::from(value),
            });
        }
        Ok(Self(value))
    }

    /// Returns the percentage value.
    #[must_use]
    pub const fn value(&self) -> u8 {
        self.0
    }

    /// Converts this percentage into the device-native value of `dimension`.
    ///
    /// The result truncates toward zero.
    #[must_use]
    pub fn to_device_value(&self, dimension: Dimension) -> u16 {
        convert_percent(*self, dimension)
    }
}

/// Maps a percentage onto the device range of `dimension`.
///
/// - Brightness, saturation: `percent / 100 * 65535`
/// - Kelvin: `percent / 100 * (9000 - 2500) + 2500`
///
/// # Examples
///
/// ```
/// use lifx_skill::types::{convert_percent, Dimension, Percent};
///
/// assert_eq!(convert_percent(Percent::MAX, Dimension::Brightness), 65535);
/// assert_eq!(convert_percent(Percent::MIN, Dimension::Kelvin), 2500);
/// assert_eq!(convert_percent(Percent::MAX, Dimension::Kelvin), 9000);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn convert_percent(percent: Percent, dimension: Dimension) -> u16 {
    let scaled = u32::from(percent.0) * u32::from(dimension.span()) / 100;
    // Safe: scaled <= span, and min + span == max
    (u32::from(dimension.min()) + scaled) as u16
}

impl fmt::Display for Percent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

impl FromStr for Percent {
    type Err = ValueError;

    /// Parses `"25%"`, `"25 %"` or `"25"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.trim().trim_end_matches('%').trim_end();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ValueError::InvalidPercent(s.to_string()));
        }
        // All digits, so a parse failure can only be overflow
        let value: u32 = digits.parse().unwrap_or(u32::MAX);
        let value = u8::try_from(value).map_err(|_| ValueError::OutOfRange {
            min: 0,
            max: 100,
            actual: value,
        })?;
        Self::new(value)
    }
}

impl TryFrom<u8> for Percent {
    type Error = ValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}
