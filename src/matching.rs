// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! String similarity for spoken device names.
//!
//! Speech transcription rarely reproduces a light's label exactly, so names
//! are compared with an edit-distance ratio instead of equality. The ratio
//! is based on the insertion/deletion distance: a substitution costs two
//! edits, which makes the score equal to `2 * LCS / (len(a) + len(b))`
//! expressed on a 0-100 scale.

/// Returns the similarity of `a` and `b` on a 0-100 scale.
///
/// Comparison is per Unicode scalar value and case-sensitive. Identical
/// strings score 100; an empty string scores 0 against anything.
///
/// # Examples
///
/// ```
/// use lifx_skill::matching::ratio;
///
/// assert_eq!(ratio("Bedroom", "Bedroom"), 100);
/// assert_eq!(ratio("bedroom", "Bedroom"), 86);
/// assert!(ratio("bedroom", "Room 1") < 50);
/// ```
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn ratio(a: &str, b: &str) -> u8 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let common = longest_common_subsequence(&a, &b);
    // Safe: 2 * common <= total, so the value lies in [0, 100]
    (200.0 * common as f64 / total as f64).round() as u8
}

/// Insertion/deletion edit distance between `a` and `b`.
///
/// # Examples
///
/// ```
/// use lifx_skill::matching::indel_distance;
///
/// assert_eq!(indel_distance("kitten", "sitting"), 5);
/// assert_eq!(indel_distance("", "abc"), 3);
/// ```
#[must_use]
pub fn indel_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    a.len() + b.len() - 2 * longest_common_subsequence(&a, &b)
}

// Two-row dynamic programming table over `b`.
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for ca in a {
        for (j, cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j] + 1
            } else {
                prev[j + 1].max(curr[j])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_strings_score_full() {
        assert_eq!(ratio("Living Room", "Living Room"), 100);
    }

    #[test]
    fn empty_strings_score_zero() {
        assert_eq!(ratio("", "Bedroom"), 0);
        assert_eq!(ratio("Bedroom", ""), 0);
        assert_eq!(ratio("", ""), 0);
    }

    #[test]
    fn disjoint_strings_score_zero() {
        assert_eq!(ratio("abc", "xyz"), 0);
    }

    #[test]
    fn case_difference_costs_two_edits() {
        // LCS "edroom" = 6 of 14 characters
        assert_eq!(indel_distance("bedroom", "Bedroom"), 2);
        assert_eq!(ratio("bedroom", "Bedroom"), 86);
    }

    #[test]
    fn close_match_beats_distant_match() {
        assert!(ratio("bedroom", "Bedroom") > ratio("bedroom", "Room 1"));
        assert_eq!(ratio("bedroom", "Room 1"), 46);
    }

    #[test]
    fn ratio_is_symmetric() {
        assert_eq!(ratio("kitchen", "kitchen lamp"), ratio("kitchen lamp", "kitchen"));
    }

    #[test]
    fn handles_multibyte_characters() {
        assert_eq!(ratio("Küche", "Küche"), 100);
        assert_eq!(indel_distance("Küche", "Kuche"), 2);
    }

    #[test]
    fn kitten_sitting() {
        // LCS "ittn" = 4
        assert_eq!(indel_distance("kitten", "sitting"), 5);
        assert_eq!(ratio("kitten", "sitting"), 62);
    }
}
