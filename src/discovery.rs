// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Startup discovery of lights and groups.
//!
//! Discovery runs once per [`Snapshot`]. The device library finds the
//! bulbs on the network; every bulb is registered under its label and each
//! distinct group label is fetched once and registered as a group.
//!
//! Discovery never fails startup. If the network cannot be searched, or the
//! search runs past its timeout, a warning is logged and whatever was found
//! up to that point (possibly nothing) becomes the snapshot.
//!
//! # Examples
//!
//! ```ignore
//! use std::time::Duration;
//! use lifx_skill::discovery::discover;
//!
//! let snapshot = discover(&my_lan, Duration::from_secs(5)).await;
//! println!("{} lights in {} groups", snapshot.lights().len(), snapshot.groups().len());
//! ```

use std::time::Duration;

use crate::error::DeviceError;
use crate::registry::Registry;
use crate::target::{Light, Target};

/// The discovery collaborator: the device library's network search.
#[allow(async_fn_in_trait)]
pub trait Discovery {
    /// Handle to an individual bulb.
    type Light: Light;
    /// Handle to a group of bulbs.
    type Group: Target;

    /// Finds every bulb on the network.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the search fails.
    async fn lights(&self) -> Result<Vec<Self::Light>, DeviceError>;

    /// Returns a handle controlling every bulb in the named group.
    ///
    /// # Errors
    ///
    /// Returns `DeviceError` if the group cannot be assembled.
    async fn group(&self, label: &str) -> Result<Self::Group, DeviceError>;
}

/// An immutable view of the known lights and groups.
///
/// Snapshots are never updated in place; a refresh builds a new one.
#[derive(Debug, Clone)]
pub struct Snapshot<L, G> {
    lights: Registry<L>,
    groups: Registry<G>,
}

impl<L, G> Snapshot<L, G> {
    /// Creates a snapshot from populated registries.
    #[must_use]
    pub fn new(lights: Registry<L>, groups: Registry<G>) -> Self {
        Self { lights, groups }
    }

    /// Known lights by label.
    #[must_use]
    pub fn lights(&self) -> &Registry<L> {
        &self.lights
    }

    /// Known groups by label.
    #[must_use]
    pub fn groups(&self) -> &Registry<G> {
        &self.groups
    }

    /// Returns `true` if no light and no group is known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lights.is_empty() && self.groups.is_empty()
    }
}

impl<L, G> Default for Snapshot<L, G> {
    fn default() -> Self {
        Self::new(Registry::new(), Registry::new())
    }
}

/// Runs discovery and builds a snapshot, bounded by `timeout`.
///
/// Errors and timeouts are logged, not returned.
pub async fn discover<D: Discovery>(
    discovery: &D,
    timeout: Duration,
) -> Snapshot<D::Light, D::Group> {
    let mut lights = Registry::new();
    let mut groups = Registry::new();

    match tokio::time::timeout(timeout, populate(discovery, &mut lights, &mut groups)).await {
        Ok(Ok(())) => {}
        Ok(Err(err)) => {
            tracing::warn!(%err, "Error discovering LIFX lights, functionality might be limited");
        }
        Err(_) => {
            let err =
                DeviceError::DiscoveryTimedOut(u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX));
            tracing::warn!(%err, "Error discovering LIFX lights, functionality might be limited");
        }
    }

    if lights.is_empty() {
        tracing::warn!("No lights found during search");
    }

    tracing::info!(
        lights = lights.len(),
        groups = groups.len(),
        "Discovery finished"
    );
    Snapshot::new(lights, groups)
}

async fn populate<D: Discovery>(
    discovery: &D,
    lights: &mut Registry<D::Light>,
    groups: &mut Registry<D::Group>,
) -> Result<(), DeviceError> {
    for light in discovery.lights().await? {
        let label = light.label().await?;
        let group_label = light.group_label().await?;

        tracing::info!(light = %label, "Light found");
        lights.insert(label, light);

        if !groups.contains(&group_label) {
            let group = discovery.group(&group_label).await?;
            tracing::info!(group = %group_label, "Group found");
            groups.insert(group_label, group);
        }
    }
    Ok(())
}
