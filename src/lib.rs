// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! `lifx_skill` - Voice control for LIFX smart lights.
//!
//! This crate maps spoken intents ("turn the bedroom light off", "set room 1
//! temperature to 25%") onto calls against a LAN smart-bulb library.
//!
//! The crate owns the parts in between:
//!
//! - **Classification**: a matched intent's slots become one [`Intent`]
//! - **Resolution**: a spoken name is fuzzy-matched against known lights and
//!   groups ([`registry`])
//! - **Conversion**: percentages map onto device ranges ([`types::Percent`])
//!   and relative steps are clamped ([`adjust`])
//! - **Acknowledgement**: every command produces a templated reply
//!   ([`dialog`])
//!
//! The host runtime and the device library stay outside. They are reached
//! through traits: [`Target`] and [`Light`] for bulbs, [`Discovery`] for the
//! network search, [`Presenter`] for speech and [`VocabularyRegistrar`] for
//! the intent matcher.
//!
//! # Quick Start
//!
//! ```ignore
//! use lifx_skill::{IntentMessage, LightSkill, SkillConfig};
//!
//! #[tokio::main]
//! async fn main() -> lifx_skill::Result<()> {
//!     let config = SkillConfig::from_file("settings.json")?;
//!     let skill = LightSkill::initialize(config, &lan, &runtime).await;
//!
//!     let message: IntentMessage = serde_json::from_str(
//!         r#"{"Turn": "turn", "Group": "room 1", "Temperature": "temperature", "Percent": "25%"}"#,
//!     )
//!     .expect("valid message");
//!
//!     // Sets Room 1 to 4125K and speaks "Setting Room 1 temperature to 25%"
//!     skill.handle(&message, &runtime).await?;
//!     Ok(())
//! }
//! ```

pub mod adjust;
pub mod command;
mod config;
pub mod dialog;
pub mod discovery;
pub mod error;
pub mod intent;
pub mod matching;
pub mod registry;
mod skill;
pub mod target;
pub mod types;
pub mod vocabulary;

pub use command::DeviceCommand;
pub use config::SkillConfig;
pub use dialog::{Acknowledgement, ContextHint, DialogTemplates, Presenter};
pub use discovery::{Discovery, Snapshot};
pub use error::{ConfigError, DeviceError, Error, IntentError, Result, ValueError};
pub use intent::{Intent, IntentMessage, TargetRef};
pub use registry::{Registry, Resolved};
pub use skill::LightSkill;
pub use target::{Light, LightGroup, Target};
pub use types::{Dimension, Hsbk, Percent, RgbColor};
pub use vocabulary::{VocabularyKind, VocabularyRegistrar};
