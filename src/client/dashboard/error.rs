use std::num::ParseIntError;

use thiserror::Error;

use crate::model::feature::{FeatureId, UnknownFeature};

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required build-time environment variable is not set.
    ///
    /// The web client is configured when it is compiled; set the variable in the
    /// environment of the build.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("Bot name must not be empty")]
    EmptyName,

    #[error("Invite URL must not be empty")]
    EmptyInviteUrl,

    #[error("Invalid invite URL '{url}': {source}")]
    InvalidInviteUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The backend API URL is neither an absolute http(s) URL nor a path.
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidApiUrl { url: String, reason: String },
}

/// A guild filter predicate could not decide.
///
/// The guild is treated as not configurable.
#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Guild {guild_id} has an invalid permission field '{value}': {source}")]
    InvalidPermissions {
        guild_id: u64,
        value: String,
        #[source]
        source: ParseIntError,
    },
}

/// Failure to turn an editor's state into an update request body.
#[derive(Error, Debug)]
pub enum SerializeError {
    /// The edited value is not acceptable; the message is shown to the user.
    #[error("{0}")]
    Invalid(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum FeatureError {
    #[error(transparent)]
    UnknownFeature(#[from] UnknownFeature),

    /// Stored settings returned by the backend do not match the feature's data type.
    #[error("Failed to decode {feature} settings: {source}")]
    InvalidData {
        feature: FeatureId,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to serialize {feature} settings: {source}")]
    Serialize {
        feature: FeatureId,
        #[source]
        source: SerializeError,
    },

    #[error("Saving is disabled for {0}")]
    SaveDisabled(FeatureId),
}
