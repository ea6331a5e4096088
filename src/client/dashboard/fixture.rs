//! Registry and configuration fixtures for dashboard tests.
//!
//! Render functions here do not use hooks so they can be called outside a running
//! virtual DOM.

use dioxus::prelude::*;
use serde::de::DeserializeOwned;

use crate::{
    client::dashboard::{
        AppConfig, Capability, FeatureBody, FeatureConfig, FeatureRender, Features, FormBody,
        GuildConfig, GuildFilter, Pages,
    },
    model::feature::{MemeFeature, MusicFeature, WelcomeMessageFeature},
};

pub const TEST_INVITE_URL: &str =
    "https://discord.com/api/oauth2/authorize?client_id=907955781972918281&permissions=8&scope=bot";

fn render_welcome_message(data: WelcomeMessageFeature) -> FeatureRender {
    FeatureRender::new(move || FeatureBody::json(&data), VNode::empty())
}

fn render_meme(data: MemeFeature) -> FeatureRender {
    FeatureRender::new(
        move || {
            Ok(FeatureBody::Form(
                FormBody::new()
                    .optional_field("channel", data.channel.as_deref())
                    .field("source", data.source.as_str()),
            ))
        },
        VNode::empty(),
    )
}

fn render_music(_data: MusicFeature) -> FeatureRender {
    FeatureRender::new(|| Ok(FeatureBody::Text(String::new())), VNode::empty()).with_can_save(false)
}

pub fn test_features() -> Features {
    Features {
        welcome_message: FeatureConfig::new("Welcome Message", render_welcome_message)
            .with_description("Greets new members"),
        meme: FeatureConfig::new("Memes", render_meme),
        music: FeatureConfig::new("Music", render_music),
    }
}

pub fn test_app_config(filter: GuildFilter) -> AppConfig {
    AppConfig {
        name: "MyBot".to_string(),
        icon: Capability::Unsupported,
        guild: GuildConfig::new(filter, test_features()),
        invite_url: TEST_INVITE_URL.to_string(),
        pages: Pages::default(),
    }
}

/// Deserializes a test-utils payload into a DTO.
pub fn decode<T: DeserializeOwned>(value: serde_json::Value) -> T {
    serde_json::from_value(value).expect("fixture payload should deserialize")
}
