// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Vocabulary registration with the upstream intent matcher.

use std::fmt;

use crate::discovery::Snapshot;
use crate::intent::slots;
use crate::types::color_names;

/// The vocabulary class a term is registered under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VocabularyKind {
    /// An individual light label.
    Light,
    /// A group label.
    Group,
    /// A color name.
    Color,
}

impl VocabularyKind {
    /// The slot name the matcher fills when a term of this kind is heard.
    #[must_use]
    pub const fn slot(&self) -> &'static str {
        match self {
            Self::Light => slots::LIGHT,
            Self::Group => slots::GROUP,
            Self::Color => slots::COLOR,
        }
    }
}

impl fmt::Display for VocabularyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slot())
    }
}

/// The registration collaborator: teaches the intent matcher new terms.
pub trait VocabularyRegistrar {
    /// Registers `term` as recognizable vocabulary of `kind`.
    fn register_vocabulary(&self, term: &str, kind: VocabularyKind);
}

/// Registers every light label, group label and color name.
///
/// Returns the number of terms registered.
pub fn register_all<L, G, R>(snapshot: &Snapshot<L, G>, registrar: &R) -> usize
where
    R: VocabularyRegistrar + ?Sized,
{
    let mut count = 0;

    for name in snapshot.lights().names() {
        registrar.register_vocabulary(name, VocabularyKind::Light);
        count += 1;
    }
    for name in snapshot.groups().names() {
        registrar.register_vocabulary(name, VocabularyKind::Group);
        count += 1;
    }
    for name in color_names() {
        registrar.register_vocabulary(name, VocabularyKind::Color);
        count += 1;
    }

    tracing::debug!(count, "Registered vocabulary");
    count
}
