use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page},
        config::Dashboard,
        model::cache::Cache,
        router::Route,
    },
    model::discord::UserGuildDto,
};

#[cfg(feature = "web")]
use crate::client::api::get_user_guilds;

#[cfg(feature = "web")]
use dioxus_logger::tracing;

#[component]
pub fn GuildSelect() -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();
    let guilds = use_context::<Signal<Cache<Vec<UserGuildDto>>>>();

    // Fetch guilds once per session
    #[cfg(feature = "web")]
    {
        let dashboard = dashboard.clone();
        let mut guilds = guilds;
        use_effect(move || {
            if guilds.peek().is_fetched() {
                return;
            }
            guilds.set(Cache::Loading);

            let client = dashboard.client.clone();
            spawn(async move {
                match get_user_guilds(&client).await {
                    Ok(list) => guilds.set(Cache::Fetched(list)),
                    Err(err) => {
                        tracing::error!("Failed to fetch guilds: {}", err);
                        guilds.set(Cache::Error(err));
                    }
                }
            });
        });
    }

    let cache = guilds.read();

    rsx! {
        Title { "Servers | {dashboard.app.name}" }
        match &*cache {
            Cache::Fetched(list) => {
                let configurable = dashboard.app.guild.configurable_guilds(list);

                rsx! {
                    Page {
                        class: "flex flex-col items-center w-full h-full",
                        div {
                            class: "w-full max-w-6xl",
                            h1 {
                                class: "text-2xl font-bold mb-6",
                                "Select a server"
                            }
                            if configurable.is_empty() {
                                p {
                                    class: "opacity-80",
                                    "You don't manage any servers {dashboard.app.name} can be configured in."
                                }
                            } else {
                                div {
                                    class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                                    for guild in configurable {
                                        GuildCard { key: "{guild.id}", guild: guild.clone() }
                                    }
                                }
                            }
                        }
                    }
                }
            }
            Cache::Error(err) => rsx! {
                ErrorPage { status: err.status, message: err.message.clone() }
            },
            Cache::NotFetched | Cache::Loading => rsx! {
                LoadingPage {}
            },
        }
    }
}

#[component]
fn GuildCard(guild: UserGuildDto) -> Element {
    rsx! {
        Link {
            to: Route::GuildFeatures { guild_id: guild.id },
            class: "flex items-center gap-4 p-4 border border-neutral rounded-lg hover:bg-base-200",
            GuildIcon { guild: guild.clone() }
            div {
                class: "flex-1 min-w-0",
                h3 {
                    class: "font-semibold truncate",
                    "{guild.name}"
                }
                if guild.owner {
                    p { class: "text-sm opacity-70", "Owner" }
                }
            }
        }
    }
}

/// Guild icon from the Discord CDN, or the guild's initial when it has none.
#[component]
pub fn GuildIcon(guild: UserGuildDto) -> Element {
    match guild.icon_url() {
        Some(url) => rsx! {
            img {
                src: "{url}",
                alt: "{guild.name} icon",
                class: "w-12 h-12 rounded-full",
            }
        },
        None => rsx! {
            div {
                class: "w-12 h-12 rounded-full bg-neutral flex items-center justify-center font-bold",
                "{guild.initial()}"
            }
        },
    }
}
