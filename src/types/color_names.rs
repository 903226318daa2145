// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! CSS3 named colors.
//!
//! These names are registered as `Color` vocabulary at startup and resolved
//! back to RGB when a color intent fires.

use super::RgbColor;

/// The 147 CSS3 color keywords.
pub const CSS3_COLORS: &[(&str, RgbColor)] = &[
    ("aliceblue", RgbColor::new(240, 248, 255)),
    ("antiquewhite", RgbColor::new(250, 235, 215)),
    ("aqua", RgbColor::new(0, 255, 255)),
    ("aquamarine", RgbColor::new(127, 255, 212)),
    ("azure", RgbColor::new(240, 255, 255)),
    ("beige", RgbColor::new(245, 245, 220)),
    ("bisque", RgbColor::new(255, 228, 196)),
    ("black", RgbColor::new(0, 0, 0)),
    ("blanchedalmond", RgbColor::new(255, 235, 205)),
    ("blue", RgbColor::new(0, 0, 255)),
    ("blueviolet", RgbColor::new(138, 43, 226)),
    ("brown", RgbColor::new(165, 42, 42)),
    ("burlywood", RgbColor::new(222, 184, 135)),
    ("cadetblue", RgbColor::new(95, 158, 160)),
    ("chartreuse", RgbColor::new(127, 255, 0)),
    ("chocolate", RgbColor::new(210, 105, 30)),
    ("coral", RgbColor::new(255, 127, 80)),
    ("cornflowerblue", RgbColor::new(100, 149, 237)),
    ("cornsilk", RgbColor::new(255, 248, 220)),
    ("crimson", RgbColor::new(220, 20, 60)),
    ("cyan", RgbColor::new(0, 255, 255)),
    ("darkblue", RgbColor::new(0, 0, 139)),
    ("darkcyan", RgbColor::new(0, 139, 139)),
    ("darkgoldenrod", RgbColor::new(184, 134, 11)),
    ("darkgray", RgbColor::new(169, 169, 169)),
    ("darkgrey", RgbColor::new(169, 169, 169)),
    ("darkgreen", RgbColor::new(0, 100, 0)),
    ("darkkhaki", RgbColor::new(189, 183, 107)),
    ("darkmagenta", RgbColor::new(139, 0, 139)),
    ("darkolivegreen", RgbColor::new(85, 107, 47)),
    ("darkorange", RgbColor::new(255, 140, 0)),
    ("darkorchid", RgbColor::new(153, 50, 204)),
    ("darkred", RgbColor::new(139, 0, 0)),
    ("darksalmon", RgbColor::new(233, 150, 122)),
    ("darkseagreen", RgbColor::new(143, 188, 143)),
    ("darkslateblue", RgbColor::new(72, 61, 139)),
    ("darkslategray", RgbColor::new(47, 79, 79)),
    ("darkslategrey", RgbColor::new(47, 79, 79)),
    ("darkturquoise", RgbColor::new(0, 206, 209)),
    ("darkviolet", RgbColor::new(148, 0, 211)),
    ("deeppink", RgbColor::new(255, 20, 147)),
    ("deepskyblue", RgbColor::new(0, 191, 255)),
    ("dimgray", RgbColor::new(105, 105, 105)),
    ("dimgrey", RgbColor::new(105, 105, 105)),
    ("dodgerblue", RgbColor::new(30, 144, 255)),
    ("firebrick", RgbColor::new(178, 34, 34)),
    ("floralwhite", RgbColor::new(255, 250, 240)),
    ("forestgreen", RgbColor::new(34, 139, 34)),
    ("fuchsia", RgbColor::new(255, 0, 255)),
    ("gainsboro", RgbColor::new(220, 220, 220)),
    ("ghostwhite", RgbColor::new(248, 248, 255)),
    ("gold", RgbColor::new(255, 215, 0)),
    ("goldenrod", RgbColor::new(218, 165, 32)),
    ("gray", RgbColor::new(128, 128, 128)),
    ("grey", RgbColor::new(128, 128, 128)),
    ("green", RgbColor::new(0, 128, 0)),
    ("greenyellow", RgbColor::new(173, 255, 47)),
    ("honeydew", RgbColor::new(240, 255, 240)),
    ("hotpink", RgbColor::new(255, 105, 180)),
    ("indianred", RgbColor::new(205, 92, 92)),
    ("indigo", RgbColor::new(75, 0, 130)),
    ("ivory", RgbColor::new(255, 255, 240)),
    ("khaki", RgbColor::new(240, 230, 140)),
    ("lavender", RgbColor::new(230, 230, 250)),
    ("lavenderblush", RgbColor::new(255, 240, 245)),
    ("lawngreen", RgbColor::new(124, 252, 0)),
    ("lemonchiffon", RgbColor::new(255, 250, 205)),
    ("lightblue", RgbColor::new(173, 216, 230)),
    ("lightcoral", RgbColor::new(240, 128, 128)),
    ("lightcyan", RgbColor::new(224, 255, 255)),
    ("lightgoldenrodyellow", RgbColor::new(250, 250, 210)),
    ("lightgray", RgbColor::new(211, 211, 211)),
    ("lightgrey", RgbColor::new(211, 211, 211)),
    ("lightgreen", RgbColor::new(144, 238, 144)),
    ("lightpink", RgbColor::new(255, 182, 193)),
    ("lightsalmon", RgbColor::new(255, 160, 122)),
    ("lightseagreen", RgbColor::new(32, 178, 170)),
    ("lightskyblue", RgbColor::new(135, 206, 250)),
    ("lightslategray", RgbColor::new(119, 136, 153)),
    ("lightslategrey", RgbColor::new(119, 136, 153)),
    ("lightsteelblue", RgbColor::new(176, 196, 222)),
    ("lightyellow", RgbColor::new(255, 255, 224)),
    ("lime", RgbColor::new(0, 255, 0)),
    ("limegreen", RgbColor::new(50, 205, 50)),
    ("linen", RgbColor::new(250, 240, 230)),
    ("magenta", RgbColor::new(255, 0, 255)),
    ("maroon", RgbColor::new(128, 0, 0)),
    ("mediumaquamarine", RgbColor::new(102, 205, 170)),
    ("mediumblue", RgbColor::new(0, 0, 205)),
    ("mediumorchid", RgbColor::new(186, 85, 211)),
    ("mediumpurple", RgbColor::new(147, 112, 219)),
    ("mediumseagreen", RgbColor::new(60, 179, 113)),
    ("mediumslateblue", RgbColor::new(123, 104, 238)),
    ("mediumspringgreen", RgbColor::new(0, 250, 154)),
    ("mediumturquoise", RgbColor::new(72, 209, 204)),
    ("mediumvioletred", RgbColor::new(199, 21, 133)),
    ("midnightblue", RgbColor::new(25, 25, 112)),
    ("mintcream", RgbColor::new(245, 255, 250)),
    ("mistyrose", RgbColor::new(255, 228, 225)),
    ("moccasin", RgbColor::new(255, 228, 181)),
    ("navajowhite", RgbColor::new(255, 222, 173)),
    ("navy", RgbColor::new(0, 0, 128)),
    ("oldlace", RgbColor::new(253, 245, 230)),
    ("olive", RgbColor::new(128, 128, 0)),
    ("olivedrab", RgbColor::new(107, 142, 35)),
    ("orange", RgbColor::new(255, 165, 0)),
    ("orangered", RgbColor::new(255, 69, 0)),
    ("orchid", RgbColor::new(218, 112, 214)),
    ("palegoldenrod", RgbColor::new(238, 232, 170)),
    ("palegreen", RgbColor::new(152, 251, 152)),
    ("paleturquoise", RgbColor::new(175, 238, 238)),
    ("palevioletred", RgbColor::new(219, 112, 147)),
    ("papayawhip", RgbColor::new(255, 239, 213)),
    ("peachpuff", RgbColor::new(255, 218, 185)),
    ("peru", RgbColor::new(205, 133, 63)),
    ("pink", RgbColor::new(255, 192, 203)),
    ("plum", RgbColor::new(221, 160, 221)),
    ("powderblue", RgbColor::new(176, 224, 230)),
    ("purple", RgbColor::new(128, 0, 128)),
    ("red", RgbColor::new(255, 0, 0)),
    ("rosybrown", RgbColor::new(188, 143, 143)),
    ("royalblue", RgbColor::new(65, 105, 225)),
    ("saddlebrown", RgbColor::new(139, 69, 19)),
    ("salmon", RgbColor::new(250, 128, 114)),
    ("sandybrown", RgbColor::new(244, 164, 96)),
    ("seagreen", RgbColor::new(46, 139, 87)),
    ("seashell", RgbColor::new(255, 245, 238)),
    ("sienna", RgbColor::new(160, 82, 45)),
    ("silver", RgbColor::new(192, 192, 192)),
    ("skyblue", RgbColor::new(135, 206, 235)),
    ("slateblue", RgbColor::new(106, 90, 205)),
    ("slategray", RgbColor::new(112, 128, 144)),
    ("slategrey", RgbColor::new(112, 128, 144)),
    ("snow", RgbColor::new(255, 250, 250)),
    ("springgreen", RgbColor::new(0, 255, 127)),
    ("steelblue", RgbColor::new(70, 130, 180)),
    ("tan", RgbColor::new(210, 180, 140)),
    ("teal", RgbColor::new(0, 128, 128)),
    ("thistle", RgbColor::new(216, 191, 216)),
    ("tomato", RgbColor::new(255, 99, 71)),
    ("turquoise", RgbColor::new(64, 224, 208)),
    ("violet", RgbColor::new(238, 130, 238)),
    ("wheat", RgbColor::new(245, 222, 179)),
    ("white", RgbColor::new(255, 255, 255)),
    ("whitesmoke", RgbColor::new(245, 245, 245)),
    ("yellow", RgbColor::new(255, 255, 0)),
    ("yellowgreen", RgbColor::new(154, 205, 50)),
];

/// Looks up a CSS3 color by name.
///
/// Matching ignores case and whitespace, so `"Light Blue"` finds
/// `lightblue`.
///
/// # Examples
///
/// ```
/// use lifx_skill::types::{named_color, RgbColor};
///
/// assert_eq!(named_color("Red"), Some(RgbColor::new(255, 0, 0)));
/// assert_eq!(named_color("light blue"), Some(RgbColor::new(173, 216, 230)));
/// assert_eq!(named_color("blurple"), None);
/// ```
#[must_use]
pub fn named_color(name: &str) -> Option<RgbColor> {
    let key: String = name
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect();
    CSS3_COLORS
        .iter()
        .find(|(css, _)| *css == key)
        .map(|(_, rgb)| *rgb)
}

/// Iterates over every known color name.
pub fn color_names() -> impl Iterator<Item = &'static str> {
    CSS3_COLORS.iter().map(|(name, _)| *name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_every_css3_keyword() {
        assert_eq!(CSS3_COLORS.len(), 147);
        assert_eq!(color_names().count(), 147);
    }

    #[test]
    fn names_are_lowercase_and_unique() {
        let mut names: Vec<&str> = color_names().collect();
        assert!(names.iter().all(|n| n.chars().all(|c| c.is_ascii_lowercase())));
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), 147);
    }

    #[test]
    fn synonyms_share_a_value() {
        assert_eq!(named_color("aqua"), named_color("cyan"));
        assert_eq!(named_color("fuchsia"), named_color("magenta"));
        assert_eq!(named_color("gray"), named_color("grey"));
    }

    #[test]
    fn lookup_ignores_case_and_spacing() {
        assert_eq!(named_color("REBECCA"), None);
        assert_eq!(named_color("Dark Orange"), Some(RgbColor::new(255, 140, 0)));
        assert_eq!(named_color(" white "), Some(RgbColor::new(255, 255, 255)));
    }
}
