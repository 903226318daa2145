// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Value types for light control.
//!
//! # Types
//!
//! - [`Hsbk`] - Color state (hue, saturation, brightness 0-65535; Kelvin 2500-9000)
//! - [`Dimension`] - The component a percentage or step applies to
//! - [`Percent`] - A whole percentage (0-100) and its device-value conversion
//! - [`RgbColor`] - An 8-bit RGB color, convertible to HSBK
//! - [`named_color`] - CSS3 color keyword lookup

mod color_names;
mod hsbk;
mod percent;
mod rgb_color;

pub use color_names::{CSS3_COLORS, color_names, named_color};
pub use hsbk::{DEFAULT_KELVIN, Dimension, Hsbk, MAX_KELVIN, MAX_VALUE, MIN_KELVIN};
pub use percent::{Percent, convert_percent};
pub use rgb_color::RgbColor;
