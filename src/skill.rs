// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The skill: classify, resolve, command, acknowledge.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::adjust::{Direction, next_brightness, next_kelvin};
use crate::command::DeviceCommand;
use crate::config::SkillConfig;
use crate::dialog::{Acknowledgement, Presenter};
use crate::discovery::{Discovery, Snapshot, discover};
use crate::error::{Error, Result};
use crate::intent::{Intent, IntentMessage, TargetRef, slots};
use crate::registry::Resolved;
use crate::target::{Light, Target};
use crate::types::{DEFAULT_KELVIN, Dimension, Hsbk, Percent, named_color};
use crate::vocabulary::{VocabularyRegistrar, register_all};

/// The voice-assistant skill.
///
/// Holds the configuration and the current [`Snapshot`] of known lights
/// and groups. Commands are handled one at a time; the snapshot is only
/// replaced by [`refresh`](Self::refresh).
///
/// # Examples
///
/// ```ignore
/// use lifx_skill::{IntentMessage, LightSkill, SkillConfig};
///
/// let skill = LightSkill::initialize(SkillConfig::default(), &lan, &runtime).await;
///
/// let message: IntentMessage = serde_json::from_str(
///     r#"{"Turn": "turn", "Light": "bedroom", "Off": "off"}"#,
/// )?;
/// skill.handle(&message, &runtime).await?;
/// ```
#[derive(Debug)]
pub struct LightSkill<L, G> {
    config: SkillConfig,
    snapshot: RwLock<Arc<Snapshot<L, G>>>,
}

impl<L: Light, G: Target> LightSkill<L, G> {
    /// Creates a skill over an existing snapshot.
    #[must_use]
    pub fn new(config: SkillConfig, snapshot: Snapshot<L, G>) -> Self {
        Self {
            config,
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    /// Discovers devices, registers vocabulary and creates the skill.
    ///
    /// Discovery problems are logged; the skill then starts with whatever
    /// was found.
    pub async fn initialize<D, R>(config: SkillConfig, discovery: &D, registrar: &R) -> Self
    where
        D: Discovery<Light = L, Group = G>,
        R: VocabularyRegistrar + ?Sized,
    {
        let snapshot = discover(discovery, config.discovery_timeout()).await;
        register_all(&snapshot, registrar);
        Self::new(config, snapshot)
    }

    /// Re-runs discovery and swaps in the new snapshot.
    ///
    /// Commands already in flight keep using the snapshot they started
    /// with. Newly found names are registered as vocabulary.
    pub async fn refresh<D, R>(&self, discovery: &D, registrar: &R)
    where
        D: Discovery<Light = L, Group = G>,
        R: VocabularyRegistrar + ?Sized,
    {
        let snapshot = discover(discovery, self.config.discovery_timeout()).await;
        register_all(&snapshot, registrar);
        *self.snapshot.write() = Arc::new(snapshot);
    }

    /// The skill's configuration.
    #[must_use]
    pub fn config(&self) -> &SkillConfig {
        &self.config
    }

    /// The current snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Snapshot<L, G>> {
        Arc::clone(&self.snapshot.read())
    }

    /// Handles one intent message end to end.
    ///
    /// The message is classified, its target resolved and the device
    /// command issued (unless the message is in test mode). The resulting
    /// acknowledgement is spoken through `presenter` and returned.
    ///
    /// Conditions the user can fix, such as an unknown device name, are
    /// spoken and returned as an acknowledgement too.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Intent`] if the message fits no supported command
    /// and [`Error::Device`] if the device call fails.
    pub async fn handle<P: Presenter + ?Sized>(
        &self,
        message: &IntentMessage,
        presenter: &P,
    ) -> Result<Acknowledgement> {
        let outcome = match Intent::classify(message) {
            Ok(intent) => self.execute(&intent, message.is_test_mode()).await,
            Err(err) => Err(err),
        };

        let ack = match outcome {
            Ok(ack) => ack,
            Err(err) => match err.acknowledgement() {
                Some(ack) => {
                    tracing::info!(%err, "Reporting error to user");
                    ack
                }
                None => return Err(err),
            },
        };

        presenter.speak(&ack);
        if let Some(hint) = ack.context() {
            presenter.set_context(hint);
        }
        Ok(ack)
    }

    /// Runs a classified intent and returns its acknowledgement.
    ///
    /// With `test_mode` set, no device is read or written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoSuchDevice`] if the target does not resolve,
    /// [`Error::UnknownColor`] for an unknown color name and
    /// [`Error::Device`] if the device call fails.
    pub async fn execute(&self, intent: &Intent, test_mode: bool) -> Result<Acknowledgement> {
        let snapshot = self.snapshot();

        match intent {
            Intent::Power { target, on } => {
                let status = if *on { "On" } else { "Off" };
                let name = self
                    .send(&snapshot, target, DeviceCommand::Power(*on), test_mode)
                    .await?;
                Ok(Acknowledgement::new("Switch")
                    .with_field("name", name)
                    .with_field("status", status))
            }
            Intent::Color { target, color } => {
                let rgb = named_color(color).ok_or_else(|| Error::UnknownColor(color.clone()))?;
                let command = DeviceCommand::Color(rgb.to_hsbk(DEFAULT_KELVIN));
                let name = self.send(&snapshot, target, command, test_mode).await?;
                Ok(Acknowledgement::new("Color")
                    .with_field("name", name)
                    .with_field("color", color.as_str()))
            }
            Intent::Dim { light, direction } => {
                let change = match direction {
                    Direction::Increase => "Brighten",
                    Direction::Decrease => "Darken",
                };
                let (step, direction) = (self.config.dim_step(), *direction);
                let name = self
                    .adjust(
                        &snapshot,
                        light,
                        |state| DeviceCommand::Brightness(next_brightness(state, step, direction)),
                        test_mode,
                    )
                    .await?;
                Ok(Acknowledgement::new("Dim")
                    .with_field("name", name.as_str())
                    .with_field("change", change)
                    .with_context(slots::LIGHT, name))
            }
            Intent::Warmth { light, direction } => {
                let temperature = match direction {
                    Direction::Increase => "Hot",
                    Direction::Decrease => "Cold",
                };
                let (step, direction) = (self.config.temperature_step(), *direction);
                let name = self
                    .adjust(
                        &snapshot,
                        light,
                        |state| DeviceCommand::ColorTemp(next_kelvin(state, step, direction)),
                        test_mode,
                    )
                    .await?;
                Ok(Acknowledgement::new("Temperature")
                    .with_field("name", name.as_str())
                    .with_field("temperature", temperature)
                    .with_context(slots::LIGHT, name))
            }
            Intent::SetPercent {
                target,
                dimension,
                percent,
            } => {
                let command = DeviceCommand::for_percent(*dimension, *percent);
                let name = self.send(&snapshot, target, command, test_mode).await?;
                Ok(percent_ack(&name, *dimension, *percent))
            }
        }
    }

    /// Resolves `target` and sends `command` to it, returning the resolved
    /// name.
    async fn send(
        &self,
        snapshot: &Snapshot<L, G>,
        target: &TargetRef,
        command: DeviceCommand,
        test_mode: bool,
    ) -> Result<String> {
        let min_score = self.config.min_match_score;
        match target {
            TargetRef::Light(spoken) => {
                let resolved = snapshot.lights().resolve(spoken, min_score)?;
                self.dispatch(resolved, command, test_mode).await
            }
            TargetRef::Group(spoken) => {
                let resolved = snapshot.groups().resolve(spoken, min_score)?;
                self.dispatch(resolved, command, test_mode).await
            }
        }
    }

    async fn dispatch<T: Target>(
        &self,
        resolved: Resolved<'_, T>,
        command: DeviceCommand,
        test_mode: bool,
    ) -> Result<String> {
        if test_mode {
            tracing::debug!(name = resolved.name(), %command, "Test mode, skipping device call");
        } else {
            tracing::debug!(name = resolved.name(), %command, "Sending device command");
            command
                .send(resolved.target(), self.config.transition())
                .await?;
        }
        Ok(resolved.name().to_string())
    }

    /// Reads the light's state, derives the next command from it with
    /// `next` and sends that command.
    ///
    /// The read and the write are not atomic; see [`crate::adjust`].
    async fn adjust(
        &self,
        snapshot: &Snapshot<L, G>,
        spoken: &str,
        next: impl FnOnce(&Hsbk) -> DeviceCommand,
        test_mode: bool,
    ) -> Result<String> {
        let resolved = snapshot
            .lights()
            .resolve(spoken, self.config.min_match_score)?;

        if test_mode {
            tracing::debug!(name = resolved.name(), "Test mode, skipping adjustment");
            return Ok(resolved.name().to_string());
        }

        let light = resolved.target();
        let current = light.get_color().await?;
        let command = next(&current);
        tracing::debug!(name = resolved.name(), from = %current, %command, "Adjusting light");
        command.send(light, self.config.transition()).await?;
        Ok(resolved.name().to_string())
    }
}

fn percent_ack(name: &str, dimension: Dimension, percent: Percent) -> Acknowledgement {
    Acknowledgement::new("SetPercent")
        .with_field("name", name)
        .with_field("param", dimension.as_str())
        .with_field("value", percent.to_string())
}
