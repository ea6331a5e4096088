use serde::{Deserialize, Serialize};

/// Bot-side state of a guild, as reported by the backend.
///
/// Only present when the bot has joined the guild. The identifiers are plain strings
/// because the backend may know features this dashboard build does not.
#[derive(Debug, Serialize, Deserialize, PartialEq, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct GuildInfo {
    #[serde(default)]
    pub enabled_features: Vec<String>,
}

impl GuildInfo {
    /// Whether the backend lists `feature` as enabled.
    pub fn is_enabled(&self, feature: &str) -> bool {
        self.enabled_features.iter().any(|f| f == feature)
    }

    /// Records `feature` as enabled after the backend accepted it.
    pub fn enable(&mut self, feature: &str) {
        if !self.is_enabled(feature) {
            self.enabled_features.push(feature.to_string());
        }
    }

    pub fn disable(&mut self, feature: &str) {
        self.enabled_features.retain(|f| f != feature);
    }
}
