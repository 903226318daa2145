// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Relative brightness and warmth steps.
//!
//! A relative request ("dim the bedroom", "make the bedroom warmer") reads
//! the light's current value, moves it by a fixed step and clamps the result
//! to the dimension's range.
//!
//! The read and the write are separate device calls with nothing held in
//! between. Two adjustments racing on the same light may both read the same
//! starting value, so one step is lost. Requests are handled one at a time,
//! which keeps this from happening in practice.

use crate::types::{Dimension, Hsbk};

/// Direction of a relative adjustment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Brighter, or warmer for color temperature.
    Increase,
    /// Darker, or cooler for color temperature.
    Decrease,
}

impl Direction {
    /// `1` for [`Increase`](Self::Increase), `-1` for [`Decrease`](Self::Decrease).
    #[must_use]
    pub const fn sign(&self) -> i64 {
        match self {
            Self::Increase => 1,
            Self::Decrease => -1,
        }
    }
}

/// Size of one relative step for `dimension`.
///
/// `fraction` is the configured share of the dimension's span, e.g. `0.1`
/// moves brightness by 6553 and color temperature by 650 Kelvin.
///
/// # Examples
///
/// ```
/// use lifx_skill::adjust::step_size;
/// use lifx_skill::types::Dimension;
///
/// assert_eq!(step_size(0.1, Dimension::Brightness), 6553);
/// assert_eq!(step_size(0.1, Dimension::Kelvin), 650);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn step_size(fraction: f64, dimension: Dimension) -> u16 {
    // Safe: clamped into [0, span] before the cast
    (fraction * f64::from(dimension.span())).clamp(0.0, f64::from(dimension.span())) as u16
}

/// Moves `current` by `step` in `direction`, clamped to `dimension`'s range.
///
/// # Examples
///
/// ```
/// use lifx_skill::adjust::{adjust, Direction};
/// use lifx_skill::types::Dimension;
///
/// assert_eq!(adjust(1000, 6553, Direction::Decrease, Dimension::Brightness), 0);
/// assert_eq!(adjust(8800, 650, Direction::Increase, Dimension::Kelvin), 9000);
/// ```
#[must_use]
pub fn adjust(current: u16, step: u16, direction: Direction, dimension: Dimension) -> u16 {
    dimension.clamp(i64::from(current) + i64::from(step) * direction.sign())
}

/// New brightness after one dim step.
#[must_use]
pub fn next_brightness(state: &Hsbk, step: u16, direction: Direction) -> u16 {
    adjust(state.brightness(), step, direction, Dimension::Brightness)
}

/// New color temperature after one warmth step.
///
/// Warmer light has a lower Kelvin value, so [`Direction::Increase`]
/// lowers Kelvin and [`Direction::Decrease`] raises it.
#[must_use]
pub fn next_kelvin(state: &Hsbk, step: u16, warmth: Direction) -> u16 {
    let kelvin = match warmth {
        Direction::Increase => Direction::Decrease,
        Direction::Decrease => Direction::Increase,
    };
    adjust(state.kelvin(), step, kelvin, Dimension::Kelvin)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_sizes_truncate() {
        assert_eq!(step_size(0.25, Dimension::Brightness), 16383);
        assert_eq!(step_size(0.25, Dimension::Kelvin), 1625);
        assert_eq!(step_size(1.0, Dimension::Brightness), 65535);
    }

    #[test]
    fn step_size_clamps_odd_fractions() {
        assert_eq!(step_size(-0.5, Dimension::Brightness), 0);
        assert_eq!(step_size(3.0, Dimension::Kelvin), 6500);
    }

    #[test]
    fn repeated_dimming_never_goes_below_zero() {
        let step = step_size(0.1, Dimension::Brightness);
        let mut state = Hsbk::new(0, 0, 3000, 3500);
        for _ in 0..20 {
            let next = next_brightness(&state, step, Direction::Decrease);
            state = Hsbk::new(0, 0, next, 3500);
        }
        assert_eq!(state.brightness(), 0);
    }

    #[test]
    fn repeated_brightening_saturates() {
        let step = step_size(0.1, Dimension::Brightness);
        let mut brightness = 60_000;
        for _ in 0..20 {
            brightness = adjust(brightness, step, Direction::Increase, Dimension::Brightness);
        }
        assert_eq!(brightness, 65535);
    }

    #[test]
    fn kelvin_stays_within_bounds() {
        let step = step_size(0.1, Dimension::Kelvin);

        let mut up = 8000;
        for _ in 0..20 {
            up = adjust(up, step, Direction::Increase, Dimension::Kelvin);
            assert!(up <= 9000);
        }
        assert_eq!(up, 9000);

        let mut down = 3000;
        for _ in 0..20 {
            down = adjust(down, step, Direction::Decrease, Dimension::Kelvin);
            assert!(down >= 2500);
        }
        assert_eq!(down, 2500);
    }

    #[test]
    fn warmer_lowers_kelvin() {
        let state = Hsbk::new(0, 0, 0, 3500);
        assert_eq!(next_kelvin(&state, 650, Direction::Increase), 2850);
        assert_eq!(next_kelvin(&state, 650, Direction::Decrease), 4150);
    }
}
