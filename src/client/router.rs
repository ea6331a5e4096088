use dioxus::prelude::*;

use crate::{
    client::{
        component::Layout,
        route::{FeatureSettings, GuildFeatures, GuildSelect, Home, NotFound, Profile},
    },
    model::feature::FeatureId,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
    #[route("/")]
    Home {},

    #[nest("/guilds")]
        #[route("/")]
        GuildSelect {},

        #[route("/:guild_id")]
        GuildFeatures { guild_id: u64 },

        #[route("/:guild_id/features/:feature")]
        FeatureSettings { guild_id: u64, feature: FeatureId },
    #[end_nest]

    #[route("/profile")]
    Profile {},
    #[end_layout]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
