use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_solid_icons::FaMusic, Icon};

use crate::{
    client::dashboard::{FeatureBody, FeatureConfig, FeatureRender},
    model::feature::{Music, MusicFeature},
};

pub fn config() -> FeatureConfig<Music> {
    FeatureConfig::new("Music", use_render)
        .with_description("Play music in voice channels with `/play`.")
        .with_icon(icon)
}

fn icon() -> Element {
    rsx!(Icon {
        width: 24,
        height: 24,
        icon: FaMusic
    })
}

// Nothing to configure; the feature is only switched on or off.
fn use_render(data: MusicFeature) -> FeatureRender {
    FeatureRender::new(
        move || FeatureBody::json(&data),
        rsx!(div {
            class: "flex flex-col gap-2",
            p { "Music has no settings. Use " code { "/play" } " in a voice channel to get started." }
        }),
    )
    .with_can_save(false)
}
