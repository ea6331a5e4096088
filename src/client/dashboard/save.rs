//! Save protocol for a feature editor.
//!
//! A save serializes the editor, and only when that succeeds sends the body as
//! `PATCH /guilds/{guild}/features/{feature}`. There is no retry; a failed save
//! leaves the edits in place for the user to try again.

use crate::{
    client::dashboard::{
        error::FeatureError,
        render::{FeatureBody, SaveActions},
    },
    model::feature::FeatureId,
};

/// Backend path of one feature of one guild.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureEndpoint {
    pub guild_id: u64,
    pub feature: FeatureId,
}

impl FeatureEndpoint {
    pub fn new(guild_id: u64, feature: FeatureId) -> Self {
        Self { guild_id, feature }
    }

    pub fn path(&self) -> String {
        format!("/guilds/{}/features/{}", self.guild_id, self.feature)
    }
}

/// A serialized update ready to be sent.
/// Stored settings of a feature as fetched for one revision.
///
/// An editor mounted for a snapshot never sees another value; a new revision
/// gets a new editor, which starts its draft from the fetched data.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedSettings {
    pub endpoint: FeatureEndpoint,
    pub revision: u32,
    pub data: serde_json::Value,
}

impl LoadedSettings {
    pub fn new(endpoint: FeatureEndpoint, revision: u32, data: serde_json::Value) -> Self {
        Self {
            endpoint,
            revision,
            data,
        }
    }

    /// Component key identifying this snapshot.
    pub fn editor_key(&self) -> String {
        format!(
            "{}-{}-{}",
            self.endpoint.guild_id, self.endpoint.feature, self.revision
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FeatureUpdate {
    pub endpoint: FeatureEndpoint,
    pub body: FeatureBody,
}

impl FeatureUpdate {
    /// Serializes the editor into an update for `endpoint`.
    ///
    /// # Returns
    /// - `Ok(FeatureUpdate)` - Body produced, ready to send
    /// - `Err(FeatureError::SaveDisabled)` - The render turned saving off
    /// - `Err(FeatureError::Serialize)` - The editor could not be serialized; nothing
    ///   must be sent
    pub fn prepare(endpoint: FeatureEndpoint, actions: &SaveActions) -> Result<Self, FeatureError> {
        if !actions.save_enabled() {
            return Err(FeatureError::SaveDisabled(endpoint.feature));
        }

        let body = actions
            .serialize()
            .map_err(|source| FeatureError::Serialize {
                feature: endpoint.feature,
                source,
            })?;

        Ok(Self { endpoint, body })
    }
}

/// Progress of the current save.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum SaveStatus {
    #[default]
    Idle,
    Saving,
    Saved,
    Failed(String),
}

impl SaveStatus {
    /// Moves to `Saving`; returns false when a save is already in flight.
    pub fn begin(&mut self) -> bool {
        if self.is_saving() {
            return false;
        }
        *self = SaveStatus::Saving;
        true
    }

    pub fn succeed(&mut self) {
        *self = SaveStatus::Saved;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        *self = SaveStatus::Failed(message.into());
    }

    /// Clears a finished save's outcome. An in-flight save is left alone.
    pub fn dismiss(&mut self) {
        if !self.is_saving() {
            *self = SaveStatus::Idle;
        }
    }

    pub fn is_saving(&self) -> bool {
        matches!(self, SaveStatus::Saving)
    }
}

/// Which save bar controls to show for an editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveBarControls {
    pub show_save: bool,
    pub show_reset: bool,
    pub busy: bool,
}

impl SaveBarControls {
    pub fn for_actions(actions: &SaveActions, status: &SaveStatus) -> Self {
        Self {
            show_save: actions.save_enabled(),
            show_reset: actions.can_reset(),
            busy: status.is_saving(),
        }
    }

    /// Whether the save bar is rendered at all.
    pub fn visible(&self) -> bool {
        self.show_save || self.show_reset
    }
}

#[cfg(test)]
mod test;
