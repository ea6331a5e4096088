//! The closed set of bot features and the data each one is configured with.
//!
//! Every feature has an identifier in [`FeatureId`], a marker type implementing
//! [`CustomFeature`], and a data type holding its stored settings. Adding a feature
//! means adding all three; the dashboard registry then fails to compile until the
//! feature is configured.

use std::{fmt, str::FromStr};

use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;

/// Identifier of a bot feature, as used in backend paths and guild state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FeatureId {
    WelcomeMessage,
    Meme,
    Music,
}

impl FeatureId {
    pub const ALL: [FeatureId; 3] = [FeatureId::WelcomeMessage, FeatureId::Meme, FeatureId::Music];

    pub fn as_str(self) -> &'static str {
        match self {
            FeatureId::WelcomeMessage => "welcome-message",
            FeatureId::Meme => "meme",
            FeatureId::Music => "music",
        }
    }
}

impl fmt::Display for FeatureId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A feature identifier that is not part of [`FeatureId`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown feature identifier '{0}'")]
pub struct UnknownFeature(pub String);

impl FromStr for FeatureId {
    type Err = UnknownFeature;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FeatureId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| UnknownFeature(s.to_string()))
    }
}

/// Ties a feature marker type to its identifier and stored data type.
pub trait CustomFeature: 'static {
    const ID: FeatureId;
    type Data: DeserializeOwned + Serialize + Clone + PartialEq + 'static;
}

pub struct WelcomeMessage;

impl CustomFeature for WelcomeMessage {
    const ID: FeatureId = FeatureId::WelcomeMessage;
    type Data = WelcomeMessageFeature;
}

pub struct Meme;

impl CustomFeature for Meme {
    const ID: FeatureId = FeatureId::Meme;
    type Data = MemeFeature;
}

pub struct Music;

impl CustomFeature for Music {
    const ID: FeatureId = FeatureId::Music;
    type Data = MusicFeature;
}

/// Message posted when a member joins.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct WelcomeMessageFeature {
    pub channel: Option<String>,
    #[serde(default)]
    pub message: String,
}

/// Periodic memes posted to a channel.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct MemeFeature {
    pub channel: Option<String>,
    #[serde(default)]
    pub source: MemeSource,
}

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone, Copy, Default)]
#[serde(rename_all = "lowercase")]
pub enum MemeSource {
    #[default]
    Youtube,
    Twitter,
    Discord,
}

impl MemeSource {
    pub const ALL: [MemeSource; 3] = [MemeSource::Youtube, MemeSource::Twitter, MemeSource::Discord];

    pub fn as_str(self) -> &'static str {
        match self {
            MemeSource::Youtube => "youtube",
            MemeSource::Twitter => "twitter",
            MemeSource::Discord => "discord",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MemeSource::Youtube => "YouTube",
            MemeSource::Twitter => "Twitter",
            MemeSource::Discord => "Discord",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        MemeSource::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// Music playback; enabling it is the only setting.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
pub struct MusicFeature {}
