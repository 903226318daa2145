// SPDX-License-Identifier: MPL-2.0
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Spoken acknowledgements.
//!
//! Handlers do not produce sentences. They produce an [`Acknowledgement`]:
//! a dialog template name plus named fields. The host runtime's
//! [`Presenter`] turns it into speech, usually by rendering it through
//! [`DialogTemplates`].

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Conversation context a handler asks the host to remember.
///
/// After "dim the bedroom" the host can keep `Light = Bedroom`, so that a
/// follow-up "a bit more" resolves to the same light.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextHint {
    /// The slot to fill on later utterances.
    pub slot: String,
    /// The value to fill it with.
    pub value: String,
}

/// A templated acknowledgement.
///
/// # Examples
///
/// ```
/// use lifx_skill::dialog::{Acknowledgement, DialogTemplates};
///
/// let ack = Acknowledgement::new("Switch")
///     .with_field("name", "Bedroom")
///     .with_field("status", "On");
///
/// let templates = DialogTemplates::default();
/// assert_eq!(templates.render(&ack), "Turning Bedroom On");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    dialog: String,
    fields: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    context: Option<ContextHint>,
}

impl Acknowledgement {
    /// Creates an acknowledgement for the named dialog template.
    #[must_use]
    pub fn new(dialog: impl Into<String>) -> Self {
        Self {
            dialog: dialog.into(),
            fields: BTreeMap::new(),
            context: None,
        }
    }

    /// Adds a substitution field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Attaches a context hint.
    #[must_use]
    pub fn with_context(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        self.context = Some(ContextHint {
            slot: slot.into(),
            value: value.into(),
        });
        self
    }

    /// The dialog template name.
    #[must_use]
    pub fn dialog(&self) -> &str {
        &self.dialog
    }

    /// Returns a substitution field.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields.get(name).map(String::as_str)
    }

    /// All substitution fields, ordered by name.
    #[must_use]
    pub fn fields(&self) -> &BTreeMap<String, String> {
        &self.fields
    }

    /// The context hint, if the handler set one.
    #[must_use]
    pub fn context(&self) -> Option<&ContextHint> {
        self.context.as_ref()
    }
}

impl fmt::Display for Acknowledgement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.dialog)?;
        for (name, value) in &self.fields {
            write!(f, " {name}={value:?}")?;
        }
        Ok(())
    }
}

/// The presentation collaborator: speaks acknowledgements to the user.
pub trait Presenter {
    /// Speaks an acknowledgement.
    fn speak(&self, acknowledgement: &Acknowledgement);

    /// Stores a context hint. The default implementation ignores it.
    fn set_context(&self, hint: &ContextHint) {
        let _ = hint;
    }
}

/// Built-in English dialog templates.
const DEFAULT_TEMPLATES: &[(&str, &str)] = &[
    ("Switch", "Turning {name} {status}"),
    ("Color", "Changing {name} to {color}"),
    ("Dim", "{change} {name}"),
    ("Temperature", "Making {name} {temperature}"),
    ("SetPercent", "Setting {name} {param} to {value}"),
    ("NotFound", "I couldn't find a light called {name}"),
    ("UnknownColor", "I don't know the color {color}"),
    ("InvalidPercent", "{value} is not a percentage I can use"),
];

/// Dialog templates keyed by dialog name.
///
/// Templates use `{field}` placeholders. Unknown placeholders are left as
/// written; `{{` and `}}` produce literal braces.
#[derive(Debug, Clone)]
pub struct DialogTemplates {
    templates: HashMap<String, String>,
}

impl DialogTemplates {
    /// Creates an empty template set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Replaces or adds a template.
    #[must_use]
    pub fn with_template(mut self, dialog: impl Into<String>, template: impl Into<String>) -> Self {
        self.templates.insert(dialog.into(), template.into());
        self
    }

    /// Returns the template for `dialog`.
    #[must_use]
    pub fn template(&self, dialog: &str) -> Option<&str> {
        self.templates.get(dialog).map(String::as_str)
    }

    /// Renders an acknowledgement.
    ///
    /// Without a template for its dialog, the acknowledgement's
    /// [`Display`](fmt::Display) form is returned.
    #[must_use]
    pub fn render(&self, acknowledgement: &Acknowledgement) -> String {
        match self.template(acknowledgement.dialog()) {
            Some(template) => substitute(template, acknowledgement.fields()),
            None => {
                tracing::warn!(dialog = acknowledgement.dialog(), "No template for dialog");
                acknowledgement.to_string()
            }
        }
    }
}

impl Default for DialogTemplates {
    fn default() -> Self {
        DEFAULT_TEMPLATES
            .iter()
            .fold(Self::empty(), |templates, (dialog, template)| {
                templates.with_template(*dialog, *template)
            })
    }
}

fn substitute(template: &str, fields: &BTreeMap<String, String>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(pos) = rest.find(['{', '}']) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];

        if tail.starts_with("{{") || tail.starts_with("}}") {
            out.push_str(&tail[..1]);
            rest = &tail[2..];
            continue;
        }

        if let Some(end) = tail.strip_prefix('{').and_then(|t| t.find('}')) {
            let name = &tail[1..=end];
            match fields.get(name) {
                Some(value) => out.push_str(value),
                None => out.push_str(&tail[..end + 2]),
            }
            rest = &tail[end + 2..];
        } else {
            out.push_str(&tail[..1]);
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
