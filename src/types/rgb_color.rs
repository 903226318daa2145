// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! RGB color type and HSBK conversion.

use super::{Hsbk, MAX_VALUE};

/// RGB color with 8-bit channels (0-255).
///
/// # Examples
///
/// ```
/// use lifx_skill::types::RgbColor;
///
/// let red = RgbColor::new(255, 0, 0);
/// let hsbk = red.to_hsbk(3500);
/// assert_eq!(hsbk.hue(), 0);
/// assert_eq!(hsbk.saturation(), 65535);
/// assert_eq!(hsbk.brightness(), 65535);
/// assert_eq!(hsbk.kelvin(), 3500);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct RgbColor {
    red: u8,
    green: u8,
    blue: u8,
}

impl RgbColor {
    /// Creates a new RGB color.
    #[must_use]
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Returns the red component.
    #[must_use]
    pub const fn red(&self) -> u8 {
        self.red
    }

    /// Returns the green component.
    #[must_use]
    pub const fn green(&self) -> u8 {
        self.green
    }

    /// Returns the blue component.
    #[must_use]
    pub const fn blue(&self) -> u8 {
        self.blue
    }

    /// Converts this color to HSBK with the given color temperature.
    ///
    /// Hue, saturation and brightness are scaled onto 0-65535 and truncated.
    #[must_use]
    pub fn to_hsbk(&self, kelvin: u16) -> Hsbk {
        let (hue, saturation, brightness) = rgb_to_hsb16(self.red, self.green, self.blue);
        Hsbk::new(hue, saturation, brightness, kelvin)
    }
}

/// Converts RGB values to 16-bit hue, saturation and brightness.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::many_single_char_names
)]
fn rgb_to_hsb16(r: u8, g: u8, b: u8) -> (u16, u16, u16) {
    let full = f64::from(MAX_VALUE);
    let (rf, gf, bf) = (f64::from(r), f64::from(g), f64::from(b));

    let max = rf.max(gf).max(bf);
    let min = rf.min(gf).min(bf);
    let delta = max - min;

    // Safe: every ratio below lies in [0, 1]
    let brightness = (max / 255.0 * full) as u16;
    if delta == 0.0 {
        return (0, 0, brightness);
    }

    let saturation = (delta / max * full) as u16;

    let red_c = (max - rf) / delta;
    let green_c = (max - gf) / delta;
    let blue_c = (max - bf) / delta;

    let sector = if r >= g && r >= b {
        blue_c - green_c
    } else if g >= b {
        2.0 + red_c - blue_c
    } else {
        4.0 + green_c - red_c
    };

    let mut hue = sector / 6.0;
    if hue < 0.0 {
        hue += 1.0;
    }

    ((hue * full) as u16, saturation, brightness)
}
