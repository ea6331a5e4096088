//! Test factories for bot backend payloads.
//!
//! The backend reports which features are enabled for a guild and returns the
//! stored settings of each feature. These factories build those payloads.

use serde_json::{json, Value};

/// Creates a guild state payload listing the enabled feature identifiers.
///
/// Identifiers are written verbatim, so unknown or misspelled identifiers can be
/// included to test how the dashboard skips them.
pub fn create_test_guild_info(enabled_features: &[&str]) -> Value {
    json!({
        "enabledFeatures": enabled_features,
    })
}

/// Creates stored welcome message settings.
pub fn create_test_welcome_message(channel: Option<&str>, message: &str) -> Value {
    json!({
        "channel": channel,
        "message": message,
    })
}

/// Creates stored meme settings.
///
/// `source` is one of the lowercase source names the backend accepts
/// (`youtube`, `twitter`, `discord`).
pub fn create_test_meme(channel: Option<&str>, source: &str) -> Value {
    json!({
        "channel": channel,
        "source": source,
    })
}

/// Creates stored music settings, which carry no fields.
pub fn create_test_music() -> Value {
    json!({})
}
