use dioxus_logger::tracing;

use crate::client::{
    config::ClientConfig,
    dashboard::{FeatureEndpoint, FeatureUpdate},
    model::error::ApiError,
};

use super::helper::{
    delete, get, parse_empty_response, parse_response, patch, post, send_request,
};

/// Get the stored settings of a feature
///
/// Returned undecoded; the feature registry decodes it into the feature's type.
pub async fn get_feature(
    config: &ClientConfig,
    endpoint: FeatureEndpoint,
) -> Result<serde_json::Value, ApiError> {
    let response = send_request(get(&config.endpoint(&endpoint.path()))).await?;
    parse_response(response).await
}

/// Enable a feature for a guild
pub async fn enable_feature(
    config: &ClientConfig,
    endpoint: FeatureEndpoint,
) -> Result<(), ApiError> {
    let response = send_request(post(&config.endpoint(&endpoint.path()))).await?;
    parse_empty_response(response).await
}

/// Disable a feature for a guild
pub async fn disable_feature(
    config: &ClientConfig,
    endpoint: FeatureEndpoint,
) -> Result<(), ApiError> {
    let response = send_request(delete(&config.endpoint(&endpoint.path()))).await?;
    parse_empty_response(response).await
}

/// Send a serialized feature update
pub async fn update_feature(config: &ClientConfig, update: &FeatureUpdate) -> Result<(), ApiError> {
    let url = config.endpoint(&update.endpoint.path());
    let request = patch(&url, update.body.content_type()).body(update.body.encode());

    let response = send_request(request).await?;
    parse_empty_response(response).await?;

    tracing::info!(
        "Saved {} for guild {}",
        update.endpoint.feature,
        update.endpoint.guild_id
    );

    Ok(())
}
