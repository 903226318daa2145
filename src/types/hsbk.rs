// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HSBK color state and the device value ranges.

use std::fmt;

/// Largest hue, saturation or brightness value a LIFX device accepts.
pub const MAX_VALUE: u16 = u16::MAX;

/// Lowest color temperature in Kelvin.
pub const MIN_KELVIN: u16 = 2500;

/// Highest color temperature in Kelvin.
pub const MAX_KELVIN: u16 = 9000;

/// Kelvin used when a color is set from RGB.
pub const DEFAULT_KELVIN: u16 = 3500;

/// Color state of a light as Hue, Saturation, Brightness, Kelvin.
///
/// Hue, saturation and brightness span the full 16-bit range. Kelvin is
/// reported by the device and is not validated here; setters clamp it to
/// [`MIN_KELVIN`]..=[`MAX_KELVIN`].
///
/// # Examples
///
/// ```
/// use lifx_skill::types::Hsbk;
///
/// let warm_white = Hsbk::new(0, 0, 65535, 2700);
/// assert_eq!(warm_white.brightness(), 65535);
/// assert_eq!(warm_white.kelvin(), 2700);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct Hsbk {
    hue: u16,
    saturation: u16,
    brightness: u16,
    kelvin: u16,
}

impl Hsbk {
    /// Creates a color state from its four components.
    #[must_use]
    pub const fn new(hue: u16, saturation: u16, brightness: u16, kelvin: u16) -> Self {
        Self {
            hue,
            saturation,
            brightness,
            kelvin,
        }
    }

    /// Returns the hue (0-65535).
    #[must_use]
    pub const fn hue(&self) -> u16 {
        self.hue
    }

    /// Returns the saturation (0-65535).
    #[must_use]
    pub const fn saturation(&self) -> u16 {
        self.saturation
    }

    /// Returns the brightness (0-65535).
    #[must_use]
    pub const fn brightness(&self) -> u16 {
        self.brightness
    }

    /// Returns the color temperature in Kelvin.
    #[must_use]
    pub const fn kelvin(&self) -> u16 {
        self.kelvin
    }
}

impl Default for Hsbk {
    fn default() -> Self {
        Self::new(0, 0, MAX_VALUE, DEFAULT_KELVIN)
    }
}

impl From<(u16, u16, u16, u16)> for Hsbk {
    fn from((hue, saturation, brightness, kelvin): (u16, u16, u16, u16)) -> Self {
        Self::new(hue, saturation, brightness, kelvin)
    }
}

impl fmt::Display for Hsbk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HSBK({}, {}, {}, {}K)",
            self.hue, self.saturation, self.brightness, self.kelvin
        )
    }
}

/// A color component a percentage can be applied to.
///
/// Hue has no variant: no spoken command addresses it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Brightness, 0-65535.
    Brightness,
    /// Saturation, 0-65535.
    Saturation,
    /// Color temperature, 2500-9000 Kelvin.
    Kelvin,
}

impl Dimension {
    /// Lowest device value for this dimension.
    #[must_use]
    pub const fn min(&self) -> u16 {
        match self {
            Self::Brightness | Self::Saturation => 0,
            Self::Kelvin => MIN_KELVIN,
        }
    }

    /// Highest device value for this dimension.
    #[must_use]
    pub const fn max(&self) -> u16 {
        match self {
            Self::Brightness | Self::Saturation => MAX_VALUE,
            Self::Kelvin => MAX_KELVIN,
        }
    }

    /// Width of the device range.
    #[must_use]
    pub const fn span(&self) -> u16 {
        self.max() - self.min()
    }

    /// Clamps a signed value into this dimension's range.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn clamp(&self, value: i64) -> u16 {
        // Safe: clamped into a u16 range first
        value.clamp(i64::from(self.min()), i64::from(self.max())) as u16
    }

    /// Name used in spoken acknowledgements.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Brightness => "brightness",
            Self::Saturation => "saturation",
            Self::Kelvin => "temperature",
        }
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dimension_ranges() {
        assert_eq!(Dimension::Brightness.min(), 0);
        assert_eq!(Dimension::Brightness.max(), 65535);
        assert_eq!(Dimension::Saturation.max(), 65535);
        assert_eq!(Dimension::Kelvin.min(), 2500);
        assert_eq!(Dimension::Kelvin.max(), 9000);
        assert_eq!(Dimension::Kelvin.span(), 6500);
    }

    #[test]
    fn dimension_clamp() {
        assert_eq!(Dimension::Brightness.clamp(-10), 0);
        assert_eq!(Dimension::Brightness.clamp(70_000), 65535);
        assert_eq!(Dimension::Kelvin.clamp(1000), 2500);
        assert_eq!(Dimension::Kelvin.clamp(9500), 9000);
        assert_eq!(Dimension::Kelvin.clamp(4000), 4000);
    }

    #[test]
    fn hsbk_display() {
        assert_eq!(
            Hsbk::new(0, 0, 65535, 3500).to_string(),
            "HSBK(0, 0, 65535, 3500K)"
        );
    }
}
