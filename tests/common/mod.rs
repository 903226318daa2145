// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! In-memory devices and host collaborators shared by the integration tests.

#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use lifx_skill::dialog::{Acknowledgement, ContextHint, Presenter};
use lifx_skill::{
    DeviceCommand, DeviceError, Discovery, Hsbk, Light, LightGroup, Registry, Snapshot, Target,
    VocabularyKind, VocabularyRegistrar,
};
use parking_lot::Mutex;

/// A bulb that records every command and keeps its state in memory.
#[derive(Debug)]
pub struct MockLight {
    label: String,
    group: String,
    color: Mutex<Hsbk>,
    power: Mutex<bool>,
    calls: Mutex<Vec<(DeviceCommand, Duration)>>,
    reads: Mutex<usize>,
    fail_with: Option<DeviceError>,
}

impl MockLight {
    pub fn new(label: &str, group: &str) -> Self {
        Self {
            label: label.to_string(),
            group: group.to_string(),
            color: Mutex::new(Hsbk::new(0, 0, 0, 3500)),
            power: Mutex::new(false),
            calls: Mutex::new(Vec::new()),
            reads: Mutex::new(0),
            fail_with: None,
        }
    }

    pub fn with_color(self, color: Hsbk) -> Self {
        *self.color.lock() = color;
        self
    }

    pub fn failing(mut self, err: DeviceError) -> Self {
        self.fail_with = Some(err);
        self
    }

    pub fn color(&self) -> Hsbk {
        *self.color.lock()
    }

    pub fn power(&self) -> bool {
        *self.power.lock()
    }

    pub fn calls(&self) -> Vec<DeviceCommand> {
        self.calls.lock().iter().map(|(cmd, _)| *cmd).collect()
    }

    pub fn transitions(&self) -> Vec<Duration> {
        self.calls.lock().iter().map(|(_, t)| *t).collect()
    }

    pub fn reads(&self) -> usize {
        *self.reads.lock()
    }

    fn record(&self, command: DeviceCommand, transition: Duration) -> Result<(), DeviceError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        self.calls.lock().push((command, transition));
        let mut color = self.color.lock();
        let c = *color;
        match command {
            DeviceCommand::Power(on) => *self.power.lock() = on,
            DeviceCommand::Color(hsbk) => *color = hsbk,
            DeviceCommand::Brightness(v) => {
                *color = Hsbk::new(c.hue(), c.saturation(), v, c.kelvin());
            }
            DeviceCommand::Saturation(v) => {
                *color = Hsbk::new(c.hue(), v, c.brightness(), c.kelvin());
            }
            DeviceCommand::ColorTemp(k) => {
                *color = Hsbk::new(c.hue(), c.saturation(), c.brightness(), k);
            }
        }
        Ok(())
    }
}

impl Target for MockLight {
    async fn set_power(&self, on: bool, transition: Duration) -> Result<(), DeviceError> {
        self.record(DeviceCommand::Power(on), transition)
    }

    async fn set_color(&self, color: Hsbk, transition: Duration) -> Result<(), DeviceError> {
        self.record(DeviceCommand::Color(color), transition)
    }

    async fn set_brightness(&self, value: u16, transition: Duration) -> Result<(), DeviceError> {
        self.record(DeviceCommand::Brightness(value), transition)
    }

    async fn set_saturation(&self, value: u16, transition: Duration) -> Result<(), DeviceError> {
        self.record(DeviceCommand::Saturation(value), transition)
    }

    async fn set_colortemp(&self, kelvin: u16, transition: Duration) -> Result<(), DeviceError> {
        self.record(DeviceCommand::ColorTemp(kelvin), transition)
    }
}

impl Light for MockLight {
    async fn label(&self) -> Result<String, DeviceError> {
        Ok(self.label.clone())
    }

    async fn group_label(&self) -> Result<String, DeviceError> {
        Ok(self.group.clone())
    }

    async fn get_color(&self) -> Result<Hsbk, DeviceError> {
        if let Some(err) = &self.fail_with {
            return Err(err.clone());
        }
        *self.reads.lock() += 1;
        Ok(self.color())
    }
}

/// A group handle that only records what it was told.
#[derive(Debug, Default)]
pub struct MockGroup {
    calls: Mutex<Vec<DeviceCommand>>,
}

impl MockGroup {
    pub fn calls(&self) -> Vec<DeviceCommand> {
        self.calls.lock().clone()
    }
}

impl Target for MockGroup {
    async fn set_power(&self, on: bool, _: Duration) -> Result<(), DeviceError> {
        self.calls.lock().push(DeviceCommand::Power(on));
        Ok(())
    }

    async fn set_color(&self, color: Hsbk, _: Duration) -> Result<(), DeviceError> {
        self.calls.lock().push(DeviceCommand::Color(color));
        Ok(())
    }

    async fn set_brightness(&self, value: u16, _: Duration) -> Result<(), DeviceError> {
        self.calls.lock().push(DeviceCommand::Brightness(value));
        Ok(())
    }

    async fn set_saturation(&self, value: u16, _: Duration) -> Result<(), DeviceError> {
        self.calls.lock().push(DeviceCommand::Saturation(value));
        Ok(())
    }

    async fn set_colortemp(&self, kelvin: u16, _: Duration) -> Result<(), DeviceError> {
        self.calls.lock().push(DeviceCommand::ColorTemp(kelvin));
        Ok(())
    }
}

/// A network of mock bulbs.
///
/// `fail_after: Some(0)` makes the search itself fail; `Some(n)` lets `n`
/// group fetches succeed and fails the next one.
#[derive(Debug, Default)]
pub struct MockLan {
    pub lights: Vec<Arc<MockLight>>,
    pub fail_after: Option<usize>,
    pub delay: Option<Duration>,
    pub group_requests: Mutex<Vec<String>>,
}

impl MockLan {
    pub fn with_lights(lights: Vec<Arc<MockLight>>) -> Self {
        Self {
            lights,
            ..Self::default()
        }
    }
}

impl Discovery for MockLan {
    type Light = Arc<MockLight>;
    type Group = LightGroup<Arc<MockLight>>;

    async fn lights(&self) -> Result<Vec<Self::Light>, DeviceError> {
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_after == Some(0) {
            return Err(DeviceError::Unreachable("broadcast failed".to_string()));
        }
        Ok(self.lights.clone())
    }

    async fn group(&self, label: &str) -> Result<Self::Group, DeviceError> {
        let mut requests = self.group_requests.lock();
        if let Some(limit) = self.fail_after {
            if requests.len() >= limit {
                return Err(DeviceError::Unreachable(format!("group {label}")));
            }
        }
        requests.push(label.to_string());
        drop(requests);

        let mut members = Vec::new();
        for light in &self.lights {
            if light.group_label().await? == label {
                members.push(Arc::clone(light));
            }
        }
        Ok(LightGroup::new(label, members))
    }
}

/// Captures everything the skill says.
#[derive(Debug, Default)]
pub struct RecordingPresenter {
    spoken: Mutex<Vec<Acknowledgement>>,
    context: Mutex<Vec<ContextHint>>,
}

impl RecordingPresenter {
    pub fn spoken(&self) -> Vec<Acknowledgement> {
        self.spoken.lock().clone()
    }

    pub fn context(&self) -> Vec<ContextHint> {
        self.context.lock().clone()
    }
}

impl Presenter for RecordingPresenter {
    fn speak(&self, acknowledgement: &Acknowledgement) {
        self.spoken.lock().push(acknowledgement.clone());
    }

    fn set_context(&self, hint: &ContextHint) {
        self.context.lock().push(hint.clone());
    }
}

/// Captures registered vocabulary.
#[derive(Debug, Default)]
pub struct RecordingRegistrar {
    terms: Mutex<Vec<(String, VocabularyKind)>>,
}

impl RecordingRegistrar {
    pub fn terms_of(&self, kind: VocabularyKind) -> Vec<String> {
        self.terms
            .lock()
            .iter()
            .filter(|(_, k)| *k == kind)
            .map(|(t, _)| t.clone())
            .collect()
    }
}

impl VocabularyRegistrar for RecordingRegistrar {
    fn register_vocabulary(&self, term: &str, kind: VocabularyKind) {
        self.terms.lock().push((term.to_string(), kind));
    }
}

/// The fixture used throughout: light "Bedroom" in group "Room 1".
pub struct Fixture {
    pub bedroom: Arc<MockLight>,
    pub room: Arc<MockGroup>,
}

impl Fixture {
    pub fn new() -> Self {
        Self {
            bedroom: Arc::new(MockLight::new("Bedroom", "Room 1")),
            room: Arc::new(MockGroup::default()),
        }
    }

    pub fn with_bedroom(bedroom: MockLight) -> Self {
        Self {
            bedroom: Arc::new(bedroom),
            room: Arc::new(MockGroup::default()),
        }
    }

    pub fn snapshot(&self) -> Snapshot<Arc<MockLight>, Arc<MockGroup>> {
        let mut lights = Registry::new();
        lights.insert("Bedroom", Arc::clone(&self.bedroom));
        let mut groups = Registry::new();
        groups.insert("Room 1", Arc::clone(&self.room));
        Snapshot::new(lights, groups)
    }
}
