use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaHandshake, Icon};

use crate::{
    client::dashboard::{Draft, FeatureBody, FeatureConfig, FeatureRender, SerializeError},
    model::feature::{WelcomeMessage, WelcomeMessageFeature},
};

/// Discord's message length limit.
const MAX_MESSAGE_LENGTH: usize = 2000;

pub fn config() -> FeatureConfig<WelcomeMessage> {
    FeatureConfig::new("Welcome Message", use_render)
        .with_description("Send a message when a member **joins** the server.")
        .with_icon(icon)
        .with_skeleton(use_skeleton)
}

fn icon() -> Element {
    rsx!(Icon {
        width: 24,
        height: 24,
        icon: FaHandshake
    })
}

/// Builds the request body for the stored settings.
///
/// A blank channel is sent as no channel. The message must not be blank and must
/// fit in a Discord message.
pub fn serialize(settings: &WelcomeMessageFeature) -> Result<FeatureBody, SerializeError> {
    let message = settings.message.trim();
    if message.is_empty() {
        return Err(SerializeError::Invalid(
            "Welcome message must not be empty".to_string(),
        ));
    }
    if message.chars().count() > MAX_MESSAGE_LENGTH {
        return Err(SerializeError::Invalid(format!(
            "Welcome message must be at most {} characters",
            MAX_MESSAGE_LENGTH
        )));
    }

    FeatureBody::json(&WelcomeMessageFeature {
        channel: settings
            .channel
            .as_deref()
            .map(str::trim)
            .filter(|channel| !channel.is_empty())
            .map(str::to_string),
        message: message.to_string(),
    })
}

fn use_render(data: WelcomeMessageFeature) -> FeatureRender {
    render_draft(use_signal(|| Draft::new(data)))
}

pub(super) fn render_draft(draft: Signal<Draft<WelcomeMessageFeature>>) -> FeatureRender {
    FeatureRender::new(
        move || serialize(draft.read().current()),
        rsx!(WelcomeMessageEditor { draft }),
    )
    .with_reset(move || {
        let mut draft = draft;
        draft.write().reset();
    })
}

fn use_skeleton() -> Element {
    rsx!(div {
        class: "flex flex-col gap-4 w-full",
        div { class: "skeleton h-10 w-full" }
        div { class: "skeleton h-32 w-full" }
    })
}

#[component]
fn WelcomeMessageEditor(mut draft: Signal<Draft<WelcomeMessageFeature>>) -> Element {
    let current = draft.read().current().clone();
    let channel = current.channel.unwrap_or_default();
    let length = current.message.chars().count();

    rsx!(div {
        class: "flex flex-col gap-4 w-full",
        label {
            class: "form-control w-full",
            span { class: "label-text mb-1", "Channel ID" }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                placeholder: "System channel",
                value: "{channel}",
                oninput: move |evt| {
                    let value = evt.value();
                    draft.write().edit(|settings| settings.channel = Some(value));
                },
            }
        }
        label {
            class: "form-control w-full",
            span { class: "label-text mb-1", "Message" }
            textarea {
                class: "textarea textarea-bordered h-32 w-full",
                placeholder: "Welcome to the server!",
                value: "{current.message}",
                oninput: move |evt| {
                    let value = evt.value();
                    draft.write().edit(|settings| settings.message = value);
                },
            }
            span {
                class: if length > MAX_MESSAGE_LENGTH { "text-sm text-error mt-1" } else { "text-sm opacity-60 mt-1" },
                "{length}/{MAX_MESSAGE_LENGTH}"
            }
        }
        if draft.read().is_dirty() {
            p { class: "text-sm opacity-70", "You have unsaved changes" }
        }
    })
}
