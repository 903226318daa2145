// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Name registries and spoken-name resolution.
//!
//! A [`Registry`] maps device names to device handles in registration
//! order. Resolution scores the spoken name against every registered name
//! with [`ratio`](crate::matching::ratio) and returns the best match, or
//! [`Error::NoSuchDevice`] when nothing reaches the minimum score.

use std::fmt;

use crate::error::{Error, Result};
use crate::matching::ratio;

/// Default minimum similarity a spoken name needs to resolve.
pub const DEFAULT_MIN_MATCH_SCORE: u8 = 50;

/// An insertion-ordered mapping from device name to device handle.
///
/// Registering an existing name replaces its handle but keeps the original
/// position, so the last registration wins while tie-breaking order stays
/// stable.
///
/// # Examples
///
/// ```
/// use lifx_skill::registry::Registry;
///
/// let mut lights = Registry::new();
/// lights.insert("Bedroom", 1);
/// lights.insert("Room 1", 2);
///
/// let found = lights.resolve("bedroom", 50).unwrap();
/// assert_eq!(found.name(), "Bedroom");
/// assert_eq!(*found.target(), 1);
/// ```
#[derive(Clone)]
pub struct Registry<T> {
    entries: Vec<(String, T)>,
}

impl<T> Registry<T> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Registers `target` under `name`, returning the handle it replaced.
    pub fn insert(&mut self, name: impl Into<String>, target: T) -> Option<T> {
        let name = name.into();
        if let Some((_, existing)) = self.entries.iter_mut().find(|(n, _)| *n == name) {
            return Some(std::mem::replace(existing, target));
        }
        self.entries.push((name, target));
        None
    }

    /// Returns the handle registered under exactly `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&T> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, target)| target)
    }

    /// Returns `true` if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(n, _)| n.as_str())
    }

    /// Iterates over `(name, handle)` pairs in registration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(n, t)| (n.as_str(), t))
    }

    /// Finds the registered name most similar to `query`.
    ///
    /// Ties keep the earliest-registered name. The search is deterministic:
    /// the same registry and query always produce the same result.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchDevice`] if the registry is empty, if the best
    /// score is zero, or if it is below `min_score`.
    pub fn resolve(&self, query: &str, min_score: u8) -> Result<Resolved<'_, T>> {
        let mut best: Option<(u8, &str, &T)> = None;

        for (name, target) in &self.entries {
            let score = ratio(query, name);
            tracing::trace!(query, name = name.as_str(), score, "Scored candidate");
            if best.is_none_or(|(best_score, _, _)| score > best_score) {
                best = Some((score, name.as_str(), target));
            }
        }

        match best {
            Some((score, name, target)) if score > 0 && score >= min_score => {
                tracing::debug!(query, name, score, "Resolved spoken name");
                Ok(Resolved {
                    name,
                    target,
                    score,
                })
            }
            other => {
                let best_score = other.map_or(0, |(score, _, _)| score);
                tracing::warn!(query, best_score, min_score, "No device matches spoken name");
                Err(Error::NoSuchDevice {
                    query: query.to_string(),
                    best_score,
                })
            }
        }
    }
}

impl<T> Default for Registry<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for Registry<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

impl<N: Into<String>, T> FromIterator<(N, T)> for Registry<T> {
    fn from_iter<I: IntoIterator<Item = (N, T)>>(iter: I) -> Self {
        let mut registry = Self::new();
        for (name, target) in iter {
            registry.insert(name, target);
        }
        registry
    }
}

/// The outcome of a successful resolution.
#[derive(Debug)]
pub struct Resolved<'a, T> {
    name: &'a str,
    target: &'a T,
    score: u8,
}

impl<'a, T> Resolved<'a, T> {
    /// The registered name that matched.
    #[must_use]
    pub fn name(&self) -> &'a str {
        self.name
    }

    /// The device handle registered under that name.
    #[must_use]
    pub fn target(&self) -> &'a T {
        self.target
    }

    /// The similarity score of the match (1-100).
    #[must_use]
    pub fn score(&self) -> u8 {
        self.score
    }
}

impl<T> Clone for Resolved<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Resolved<'_, T> {}
