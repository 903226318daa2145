// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Discovery, snapshot refresh and vocabulary registration.

mod common;

use std::sync::Arc;
use std::time::Duration;

use common::{MockLan, MockLight, RecordingPresenter, RecordingRegistrar};
use lifx_skill::discovery::discover;
use lifx_skill::intent::slots;
use lifx_skill::types::CSS3_COLORS;
use lifx_skill::{
    DeviceCommand, DeviceError, IntentMessage, LightGroup, LightSkill, SkillConfig, Target,
    VocabularyKind,
};

fn lan() -> MockLan {
    MockLan::with_lights(vec![
        Arc::new(MockLight::new("Bedroom", "Upstairs")),
        Arc::new(MockLight::new("Bathroom", "Upstairs")),
        Arc::new(MockLight::new("Kitchen", "Downstairs")),
    ])
}

#[tokio::test]
async fn discovery_registers_lights_and_groups_once() {
    let lan = lan();
    let snapshot = discover(&lan, Duration::from_secs(5)).await;

    let lights: Vec<_> = snapshot.lights().names().collect();
    assert_eq!(lights, vec!["Bedroom", "Bathroom", "Kitchen"]);

    let groups: Vec<_> = snapshot.groups().names().collect();
    assert_eq!(groups, vec!["Upstairs", "Downstairs"]);
    assert_eq!(
        *lan.group_requests.lock(),
        vec!["Upstairs".to_string(), "Downstairs".to_string()]
    );

    let upstairs = snapshot.groups().get("Upstairs").unwrap();
    assert_eq!(upstairs.members().len(), 2);
}

#[tokio::test]
async fn failed_search_yields_empty_snapshot() {
    let lan = MockLan {
        fail_after: Some(0),
        ..lan()
    };
    let snapshot = discover(&lan, Duration::from_secs(5)).await;
    assert!(snapshot.is_empty());
}

#[tokio::test]
async fn failed_group_fetch_keeps_partial_results() {
    let lan = MockLan {
        fail_after: Some(1),
        ..lan()
    };
    let snapshot = discover(&lan, Duration::from_secs(5)).await;

    let lights: Vec<_> = snapshot.lights().names().collect();
    assert_eq!(lights, vec!["Bedroom", "Bathroom", "Kitchen"]);
    let groups: Vec<_> = snapshot.groups().names().collect();
    assert_eq!(groups, vec!["Upstairs"]);
}

#[tokio::test(start_paused = true)]
async fn slow_search_times_out() {
    let lan = MockLan {
        delay: Some(Duration::from_secs(60)),
        ..lan()
    };
    let snapshot = discover(&lan, Duration::from_secs(5)).await;
    assert!(snapshot.is_empty());
}

#[tokio::test]
async fn initialize_registers_vocabulary() {
    let lan = lan();
    let registrar = RecordingRegistrar::default();
    let skill = LightSkill::initialize(SkillConfig::default(), &lan, &registrar).await;

    assert_eq!(skill.snapshot().lights().len(), 3);
    assert_eq!(
        registrar.terms_of(VocabularyKind::Light),
        vec!["Bedroom", "Bathroom", "Kitchen"]
    );
    assert_eq!(
        registrar.terms_of(VocabularyKind::Group),
        vec!["Upstairs", "Downstairs"]
    );
    assert_eq!(
        registrar.terms_of(VocabularyKind::Color).len(),
        CSS3_COLORS.len()
    );
}

#[tokio::test]
async fn refresh_swaps_the_snapshot() {
    let registrar = RecordingRegistrar::default();
    let empty = MockLan::default();
    let skill = LightSkill::initialize(SkillConfig::default(), &empty, &registrar).await;
    assert!(skill.snapshot().is_empty());

    let before = skill.snapshot();
    let lan = lan();
    skill.refresh(&lan, &registrar).await;

    assert!(before.is_empty());
    assert_eq!(skill.snapshot().groups().len(), 2);

    let message = IntentMessage::new()
        .with_keyword(slots::TURN)
        .with_slot(slots::GROUP, "upstairs")
        .with_keyword(slots::ON);
    let ack = skill
        .handle(&message, &RecordingPresenter::default())
        .await
        .unwrap();

    assert_eq!(ack.field("name"), Some("Upstairs"));
    for light in &lan.lights[..2] {
        assert_eq!(light.calls(), vec![DeviceCommand::Power(true)]);
    }
    assert!(lan.lights[2].calls().is_empty());
}

#[tokio::test]
async fn group_stops_at_first_failing_member() {
    let first = Arc::new(MockLight::new("A", "G"));
    let broken = Arc::new(
        MockLight::new("B", "G").failing(DeviceError::CommandFailed("busy".to_string())),
    );
    let last = Arc::new(MockLight::new("C", "G"));
    let group = LightGroup::new(
        "G",
        vec![Arc::clone(&first), Arc::clone(&broken), Arc::clone(&last)],
    );

    let err = group
        .set_brightness(100, Duration::ZERO)
        .await
        .unwrap_err();

    assert_eq!(err, DeviceError::CommandFailed("busy".to_string()));
    assert_eq!(first.calls(), vec![DeviceCommand::Brightness(100)]);
    assert!(last.calls().is_empty());
}
