use std::rc::Rc;

use dioxus::prelude::*;

use crate::{
    client::{
        component::{ConfirmationModal, ErrorPage, LoadingPage, Markdown, Page},
        config::Dashboard,
        dashboard::Capability,
        model::cache::{Cache, GuildCache},
        route::guild_select::GuildIcon,
        router::Route,
    },
    model::{discord::UserGuildDto, feature::FeatureId, guild::GuildInfo},
};

#[cfg(feature = "web")]
use crate::client::{
    api::{disable_feature, enable_feature, get_guild_info},
    dashboard::FeatureEndpoint,
};

#[cfg(feature = "web")]
use dioxus_logger::tracing;

/// Feature list of one guild, or an invite prompt when the bot has not joined it.
#[component]
pub fn GuildFeatures(guild_id: u64) -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();
    let info = use_context::<Signal<GuildCache<Option<GuildInfo>>>>();
    let guilds = use_context::<Signal<Cache<Vec<UserGuildDto>>>>();

    #[cfg(feature = "web")]
    {
        let dashboard = dashboard.clone();
        let mut info = info;
        use_effect(use_reactive!(|guild_id| {
            if info.peek().is_for(guild_id) {
                return;
            }
            info.set(GuildCache::Loading { guild_id });

            let client = dashboard.client.clone();
            spawn(async move {
                match get_guild_info(&client, guild_id).await {
                    Ok(data) => info.set(GuildCache::Fetched { guild_id, data }),
                    Err(error) => {
                        tracing::error!("Failed to fetch guild {}: {}", guild_id, error);
                        info.set(GuildCache::Error { guild_id, error });
                    }
                }
            });
        }));
    }

    let guild = guilds
        .read()
        .data()
        .and_then(|list| list.iter().find(|g| g.id == guild_id).cloned());
    let cache = info.read();

    if !cache.is_for(guild_id) {
        return rsx!(LoadingPage {});
    }

    rsx! {
        Title { "Features | {dashboard.app.name}" }
        match &*cache {
            GuildCache::Fetched { data: Some(data), .. } => {
                let statuses = dashboard.app.guild.features.statuses(data);

                rsx! {
                    Page {
                        class: "flex flex-col items-center w-full h-full",
                        div {
                            class: "w-full max-w-6xl",
                            GuildHeader { guild: guild.clone() }
                            div {
                                class: "grid grid-cols-1 md:grid-cols-2 gap-4",
                                for status in statuses {
                                    FeatureCard {
                                        key: "{status.view.id()}",
                                        guild_id,
                                        feature: status.view.id(),
                                        enabled: status.enabled,
                                    }
                                }
                            }
                        }
                    }
                }
            }
            GuildCache::Fetched { data: None, .. } => rsx! {
                InviteCard { guild_id, guild: guild.clone() }
            },
            GuildCache::Error { error, .. } => rsx! {
                ErrorPage { status: error.status, message: error.message.clone() }
            },
            GuildCache::NotFetched | GuildCache::Loading { .. } => rsx! {
                LoadingPage {}
            },
        }
    }
}

#[component]
fn GuildHeader(guild: Option<UserGuildDto>) -> Element {
    rsx! {
        Link {
            to: Route::GuildSelect {},
            class: "btn btn-ghost mb-4",
            "← Back to servers"
        }
        if let Some(guild) = guild {
            div {
                class: "flex items-center gap-4 mb-6",
                GuildIcon { guild: guild.clone() }
                h1 {
                    class: "text-2xl font-bold",
                    "{guild.name}"
                }
            }
        }
    }
}

#[component]
fn InviteCard(guild_id: u64, guild: Option<UserGuildDto>) -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();
    let invite_url = dashboard.app.invite_url_for(guild_id);

    rsx! {
        Page {
            class: "flex flex-col items-center justify-center gap-6",
            if let Some(guild) = guild {
                GuildIcon { guild: guild.clone() }
            }
            p {
                class: "text-xl text-center",
                "{dashboard.app.name} hasn't joined this server yet"
            }
            a {
                href: "{invite_url}",
                target: "_blank",
                class: "btn btn-primary",
                "Invite {dashboard.app.name}"
            }
        }
    }
}

#[component]
fn FeatureCard(guild_id: u64, feature: FeatureId, enabled: bool) -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();
    let info = use_context::<Signal<GuildCache<Option<GuildInfo>>>>();
    let mut pending = use_signal(|| false);
    let mut show_disable = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let view = dashboard.app.guild.features.get(feature);
    let name = view.name().to_string();

    let toggle = {
        let dashboard = dashboard.clone();
        move |enable: bool| {
            if pending() {
                return;
            }
            pending.set(true);
            error.set(None);

            #[cfg(feature = "web")]
            {
                let client = dashboard.client.clone();
                let mut info = info;
                spawn(async move {
                    let endpoint = FeatureEndpoint::new(guild_id, feature);
                    let result = if enable {
                        enable_feature(&client, endpoint).await
                    } else {
                        disable_feature(&client, endpoint).await
                    };

                    match result {
                        Ok(()) => {
                            tracing::info!(
                                "{} {} for guild {}",
                                if enable { "Enabled" } else { "Disabled" },
                                feature,
                                guild_id
                            );
                            if let GuildCache::Fetched { data: Some(data), .. } = &mut *info.write() {
                                if enable {
                                    data.enable(feature.as_str());
                                } else {
                                    data.disable(feature.as_str());
                                }
                            }
                        }
                        Err(err) => {
                            tracing::error!("Failed to toggle {}: {}", feature, err);
                            error.set(Some(err.message));
                        }
                    }
                    pending.set(false);
                    show_disable.set(false);
                });
            }

            #[cfg(not(feature = "web"))]
            {
                let _ = (&dashboard, info, enable);
                error.set(Some("Changing features requires the web client".to_string()));
                pending.set(false);
                show_disable.set(false);
            }
        }
    };
    let mut toggle_confirm = toggle.clone();
    let mut toggle_enable = toggle;

    rsx! {
        div {
            class: "flex flex-col gap-3 p-4 border border-neutral rounded-lg",
            div {
                class: "flex items-center gap-3",
                if let Capability::Supported(icon) = view.icon() {
                    {icon()}
                }
                h3 {
                    class: "flex-1 text-lg font-semibold",
                    "{name}"
                }
                if enabled {
                    span { class: "badge badge-success", "Enabled" }
                } else {
                    span { class: "badge badge-ghost", "Disabled" }
                }
            }
            if let Some(description) = view.description() {
                Markdown { source: description.to_string(), class: "text-sm opacity-80" }
            }
            if let Some(message) = error() {
                p { class: "text-error text-sm", "{message}" }
            }
            div {
                class: "flex gap-2 justify-end",
                if enabled {
                    Link {
                        to: Route::FeatureSettings { guild_id, feature },
                        class: "btn btn-sm btn-primary",
                        "Configure"
                    }
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-outline btn-error",
                        disabled: pending(),
                        onclick: move |_| show_disable.set(true),
                        "Disable"
                    }
                } else {
                    button {
                        r#type: "button",
                        class: "btn btn-sm btn-primary",
                        disabled: pending(),
                        onclick: move |_| toggle_enable(true),
                        if pending() {
                            span { class: "loading loading-spinner loading-sm mr-2" }
                        }
                        "Enable"
                    }
                }
            }
        }
        ConfirmationModal {
            show: show_disable,
            title: format!("Disable {}?", name),
            message: "Its settings are kept and come back when you enable it again.".to_string(),
            confirm_text: "Disable".to_string(),
            is_processing: pending(),
            on_confirm: move |_| toggle_confirm(false),
        }
    }
}
