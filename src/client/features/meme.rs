use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaFaceLaughSquint, Icon};

use crate::{
    client::dashboard::{Draft, FeatureBody, FeatureConfig, FeatureRender, FormBody},
    model::feature::{Meme, MemeFeature, MemeSource},
};

pub fn config() -> FeatureConfig<Meme> {
    FeatureConfig::new("Memes", use_render)
        .with_description("Post a meme to a channel every day, picked from your favourite source.")
        .with_icon(icon)
}

fn icon() -> Element {
    rsx!(Icon {
        width: 24,
        height: 24,
        icon: FaFaceLaughSquint
    })
}

/// Builds the form body for the stored settings; a blank channel is left out.
pub fn serialize(settings: &MemeFeature) -> FeatureBody {
    let channel = settings
        .channel
        .as_deref()
        .map(str::trim)
        .filter(|channel| !channel.is_empty());

    FeatureBody::Form(
        FormBody::new()
            .optional_field("channel", channel)
            .field("source", settings.source.as_str()),
    )
}

fn use_render(data: MemeFeature) -> FeatureRender {
    render_draft(use_signal(|| Draft::new(data)))
}

pub(super) fn render_draft(draft: Signal<Draft<MemeFeature>>) -> FeatureRender {
    FeatureRender::new(
        move || Ok(serialize(draft.read().current())),
        rsx!(MemeEditor { draft }),
    )
    .with_reset(move || {
        let mut draft = draft;
        draft.write().reset();
    })
}

#[component]
fn MemeEditor(mut draft: Signal<Draft<MemeFeature>>) -> Element {
    let current = draft.read().current().clone();
    let channel = current.channel.unwrap_or_default();

    rsx!(div {
        class: "flex flex-col gap-4 w-full",
        label {
            class: "form-control w-full",
            span { class: "label-text mb-1", "Channel ID" }
            input {
                r#type: "text",
                class: "input input-bordered w-full",
                value: "{channel}",
                oninput: move |evt| {
                    let value = evt.value();
                    draft.write().edit(|settings| settings.channel = Some(value));
                },
            }
        }
        label {
            class: "form-control w-full",
            span { class: "label-text mb-1", "Source" }
            select {
                class: "select select-bordered w-full",
                value: current.source.as_str(),
                onchange: move |evt| {
                    if let Some(source) = MemeSource::from_value(&evt.value()) {
                        draft.write().edit(|settings| settings.source = source);
                    }
                },
                for source in MemeSource::ALL {
                    option {
                        value: source.as_str(),
                        selected: source == current.source,
                        {source.label()}
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_utils::feature::create_test_meme;

    fn stored(channel: Option<&str>, source: &str) -> MemeFeature {
        serde_json::from_value(create_test_meme(channel, source)).unwrap()
    }

    /// Tests the form body of stored settings.
    ///
    /// Expected: "channel=42&source=twitter"
    #[test]
    fn serializes_as_form() {
        let body = serialize(&stored(Some("42"), "twitter"));
        assert_eq!(body.encode(), "channel=42&source=twitter");
    }

    /// Tests that a blank channel is left out of the form.
    ///
    /// Expected: "source=discord"
    #[test]
    fn omits_blank_channel() {
        let body = serialize(&stored(Some(" "), "discord"));
        assert_eq!(body.encode(), "source=discord");
    }
}
