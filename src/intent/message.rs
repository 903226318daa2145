// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Inbound intent-match events.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::slots;

/// The slot data of a matched intent, as delivered by the intent matcher.
///
/// Serializes as a flat JSON object: keyword slots map to the matched text,
/// `utterance` holds the original sentence, and `_TestRunner` flags test
/// mode.
///
/// # Examples
///
/// ```
/// use lifx_skill::intent::IntentMessage;
///
/// let message: IntentMessage = serde_json::from_str(
///     r#"{"Turn": "turn", "Light": "bedroom", "On": "on", "_TestRunner": true}"#,
/// )
/// .unwrap();
///
/// assert_eq!(message.slot("Light"), Some("bedroom"));
/// assert!(message.is_test_mode());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntentMessage {
    data: Map<String, Value>,
}

impl IntentMessage {
    /// Creates a message with no slots.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a slot with the matched text.
    #[must_use]
    pub fn with_slot(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.data.insert(name.into(), Value::String(value.into()));
        self
    }

    /// Adds a keyword slot whose text is the keyword itself.
    #[must_use]
    pub fn with_keyword(self, name: &str) -> Self {
        self.with_slot(name, name.to_lowercase())
    }

    /// Sets the original utterance.
    #[must_use]
    pub fn with_utterance(self, utterance: impl Into<String>) -> Self {
        self.with_slot(slots::UTTERANCE, utterance)
    }

    /// Marks the message as a test run, suppressing device calls.
    #[must_use]
    pub fn with_test_mode(mut self) -> Self {
        self.data
            .insert(slots::TEST_RUNNER.to_string(), Value::Bool(true));
        self
    }

    /// Returns `true` if the slot is present, whatever its value.
    #[must_use]
    pub fn has(&self, name: &str) -> bool {
        self.data.contains_key(name)
    }

    /// Returns the slot's text if it is a string.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<&str> {
        self.data.get(name).and_then(Value::as_str)
    }

    /// The original utterance, if the matcher supplied it.
    #[must_use]
    pub fn utterance(&self) -> Option<&str> {
        self.slot(slots::UTTERANCE)
    }

    /// Returns `true` if the test-mode flag is set to a truthy value.
    #[must_use]
    pub fn is_test_mode(&self) -> bool {
        match self.data.get(slots::TEST_RUNNER) {
            None | Some(Value::Null) => false,
            Some(Value::Bool(flag)) => *flag,
            Some(Value::String(s)) => !s.is_empty() && !s.eq_ignore_ascii_case("false"),
            Some(Value::Number(n)) => n.as_f64().is_some_and(|n| n != 0.0),
            Some(Value::Array(a)) => !a.is_empty(),
            Some(Value::Object(o)) => !o.is_empty(),
        }
    }

    /// Names of the keyword slots present, excluding bookkeeping entries.
    #[must_use]
    pub fn slot_names(&self) -> Vec<String> {
        self.data
            .keys()
            .filter(|k| k.as_str() != slots::UTTERANCE && k.as_str() != slots::TEST_RUNNER)
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_sets_slots() {
        let message = IntentMessage::new()
            .with_keyword(slots::TURN)
            .with_slot(slots::LIGHT, "Bedroom")
            .with_utterance("turn the bedroom on");

        assert!(message.has(slots::TURN));
        assert_eq!(message.slot(slots::TURN), Some("turn"));
        assert_eq!(message.slot(slots::LIGHT), Some("Bedroom"));
        assert_eq!(message.utterance(), Some("turn the bedroom on"));
        assert!(!message.is_test_mode());
    }

    #[test]
    fn test_mode_truthiness() {
        let parse = |json: &str| serde_json::from_str::<IntentMessage>(json).unwrap();
        assert!(parse(r#"{"_TestRunner": true}"#).is_test_mode());
        assert!(parse(r#"{"_TestRunner": "yes"}"#).is_test_mode());
        assert!(parse(r#"{"_TestRunner": 1}"#).is_test_mode());
        assert!(!parse(r#"{"_TestRunner": false}"#).is_test_mode());
        assert!(!parse(r#"{"_TestRunner": ""}"#).is_test_mode());
        assert!(!parse(r#"{"_TestRunner": null}"#).is_test_mode());
        assert!(!parse("{}").is_test_mode());
    }

    #[test]
    fn slot_names_skip_bookkeeping() {
        let message = IntentMessage::new()
            .with_keyword(slots::ON)
            .with_utterance("on")
            .with_test_mode();
        assert_eq!(message.slot_names(), vec!["On".to_string()]);
    }

    #[test]
    fn serializes_flat() {
        let message = IntentMessage::new().with_slot(slots::PERCENT, "25%");
        assert_eq!(
            serde_json::to_string(&message).unwrap(),
            r#"{"Percent":"25%"}"#
        );
    }
}
