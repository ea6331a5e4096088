//! The value a feature's render hook hands back to the dashboard.

use std::rc::Rc;

use dioxus::prelude::*;
use serde::Serialize;

use crate::client::dashboard::{capability::Capability, error::SerializeError};

/// Whether saving is offered when a render does not say.
pub const DEFAULT_CAN_SAVE: bool = true;

pub type SerializeFn = dyn Fn() -> Result<FeatureBody, SerializeError>;
pub type ResetFn = dyn Fn();

/// Result of rendering one feature's editor.
///
/// Created on every render of the editor and dropped with it.
pub struct FeatureRender {
    /// Save bar is hidden when this is `Some(false)`.
    pub can_save: Option<bool>,
    /// Produces the body of the feature update request.
    pub serialize: Rc<SerializeFn>,
    /// Restores the editor to the last loaded value.
    pub reset: Capability<Rc<ResetFn>>,
    pub component: Element,
}

impl FeatureRender {
    pub fn new(
        serialize: impl Fn() -> Result<FeatureBody, SerializeError> + 'static,
        component: Element,
    ) -> Self {
        Self {
            can_save: None,
            serialize: Rc::new(serialize),
            reset: Capability::Unsupported,
            component,
        }
    }

    pub fn with_can_save(mut self, can_save: bool) -> Self {
        self.can_save = Some(can_save);
        self
    }

    pub fn with_reset(mut self, reset: impl Fn() + 'static) -> Self {
        self.reset = Capability::Supported(Rc::new(reset));
        self
    }

    /// The save bar behaviour of this render, detached from its component.
    pub fn actions(&self) -> SaveActions {
        SaveActions {
            can_save: self.can_save,
            serialize: self.serialize.clone(),
            reset: self.reset.clone(),
        }
    }

    pub fn into_parts(self) -> (SaveActions, Element) {
        let actions = self.actions();
        (actions, self.component)
    }
}

/// Save and reset behaviour of a rendered feature editor.
#[derive(Clone)]
pub struct SaveActions {
    can_save: Option<bool>,
    serialize: Rc<SerializeFn>,
    reset: Capability<Rc<ResetFn>>,
}

impl SaveActions {
    pub fn save_enabled(&self) -> bool {
        self.can_save.unwrap_or(DEFAULT_CAN_SAVE)
    }

    pub fn can_reset(&self) -> bool {
        self.reset.is_supported()
    }

    pub fn serialize(&self) -> Result<FeatureBody, SerializeError> {
        (self.serialize)()
    }

    /// Runs the reset hook, returning whether the feature supports resetting.
    pub fn reset(&self) -> bool {
        match &self.reset {
            Capability::Supported(reset) => {
                reset();
                true
            }
            Capability::Unsupported => false,
        }
    }
}

/// Body of a feature update request.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureBody {
    /// Sent verbatim; JSON text is labelled as such.
    Text(String),
    Form(FormBody),
}

impl FeatureBody {
    pub fn json<T: Serialize>(value: &T) -> Result<Self, SerializeError> {
        Ok(FeatureBody::Text(serde_json::to_string(value)?))
    }

    pub fn content_type(&self) -> &'static str {
        match self {
            FeatureBody::Text(text) => {
                if serde_json::from_str::<serde::de::IgnoredAny>(text).is_ok() {
                    "application/json"
                } else {
                    "text/plain;charset=UTF-8"
                }
            }
            FeatureBody::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    pub fn encode(&self) -> String {
        match self {
            FeatureBody::Text(text) => text.clone(),
            FeatureBody::Form(form) => form.encode(),
        }
    }
}

/// Ordered form fields, encoded as `application/x-www-form-urlencoded`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormBody {
    fields: Vec<(String, String)>,
}

impl FormBody {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Adds the field only when a value is present.
    pub fn optional_field(self, name: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.field(name, value),
            None => self,
        }
    }

    pub fn encode(&self) -> String {
        url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.fields.iter())
            .finish()
    }
}

#[cfg(test)]
mod test;
