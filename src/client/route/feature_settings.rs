use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::{ErrorPage, LoadingPage, Page, SaveBar},
        config::Dashboard,
        dashboard::{
            Capability, FeatureEndpoint, FeatureUpdate, LoadedSettings, SaveBarControls,
            SaveStatus,
        },
        model::error::ApiError,
        router::Route,
    },
    model::feature::FeatureId,
};

#[cfg(feature = "web")]
use crate::client::api::{get_feature, update_feature};

#[cfg(feature = "web")]
const STATUS_DISMISS_MS: u32 = 3_000;

/// Settings page of one feature in one guild.
///
/// Fetches the stored settings, hands them to the feature's editor and sends
/// the serialized result back on save. A successful save refetches the settings;
/// the editor is keyed by the fetched snapshot, so it remounts with the saved
/// value as its baseline only once that value has arrived.
#[component]
pub fn FeatureSettings(guild_id: u64, feature: FeatureId) -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();
    let mut refetch_trigger = use_signal(|| 0u32);
    let status = use_signal(SaveStatus::default);

    #[cfg(feature = "web")]
    let settings = {
        let dashboard = dashboard.clone();
        use_resource(use_reactive!(|(guild_id, feature)| {
            let client = dashboard.client.clone();
            async move {
                let revision = refetch_trigger(); // Read trigger to track changes
                let endpoint = FeatureEndpoint::new(guild_id, feature);
                get_feature(&client, endpoint)
                    .await
                    .map(|data| LoadedSettings::new(endpoint, revision, data))
            }
        }))
    };

    // Saved and failed notices fade after a while
    #[cfg(feature = "web")]
    {
        let mut status = status;
        use_effect(move || {
            if matches!(*status.read(), SaveStatus::Saved | SaveStatus::Failed(_)) {
                spawn(async move {
                    gloo_timers::future::TimeoutFuture::new(STATUS_DISMISS_MS).await;
                    status.write().dismiss();
                });
            }
        });
    }

    #[cfg(feature = "web")]
    let loaded: Option<Result<LoadedSettings, ApiError>> = settings.cloned();

    #[cfg(not(feature = "web"))]
    let loaded: Option<Result<LoadedSettings, ApiError>> = None;

    // A snapshot of the previous route is kept until the new one arrives
    let endpoint = FeatureEndpoint::new(guild_id, feature);
    let loaded = loaded.filter(|result| match result {
        Ok(settings) => settings.endpoint == endpoint,
        Err(_) => true,
    });

    let view = dashboard.app.guild.features.get(feature);

    rsx! {
        Title { "{view.name()} | {dashboard.app.name}" }
        match loaded {
            Some(Ok(settings)) => rsx! {
                Page {
                    class: "flex flex-col items-center w-full h-full pb-28",
                    div {
                        class: "w-full max-w-3xl",
                        SettingsHeader { guild_id, feature }
                        FeatureEditor {
                            key: "{settings.editor_key()}",
                            settings,
                            status,
                            on_saved: move |_| refetch_trigger += 1,
                        }
                    }
                }
            },
            Some(Err(err)) => {
                tracing::error!("Failed to fetch {} settings: {}", feature, err);
                rsx! {
                    ErrorPage { status: err.status, message: err.message }
                }
            }
            None => match view.skeleton() {
                Capability::Supported(skeleton) => rsx! {
                    Page {
                        class: "flex flex-col items-center w-full h-full",
                        div {
                            class: "w-full max-w-3xl",
                            SettingsHeader { guild_id, feature }
                            {skeleton()}
                        }
                    }
                },
                Capability::Unsupported => rsx! {
                    LoadingPage {}
                },
            },
        }
    }
}

#[component]
fn SettingsHeader(guild_id: u64, feature: FeatureId) -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();
    let view = dashboard.app.guild.features.get(feature);

    rsx! {
        Link {
            to: Route::GuildFeatures { guild_id },
            class: "btn btn-ghost mb-4",
            "← Back to features"
        }
        div {
            class: "flex items-center gap-3 mb-6",
            if let Capability::Supported(icon) = view.icon() {
                {icon()}
            }
            h1 {
                class: "text-2xl font-bold",
                "{view.name()}"
            }
        }
    }
}

/// Runs the feature's render hook with one set of loaded settings.
///
/// The hook is called on every render of this component, so the parent keys it
/// by the settings snapshot instead of swapping the data in place.
#[component]
fn FeatureEditor(
    settings: LoadedSettings,
    mut status: Signal<SaveStatus>,
    on_saved: EventHandler<()>,
) -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();
    let LoadedSettings { endpoint, data, .. } = settings;
    let feature = endpoint.feature;
    let view = dashboard.app.guild.features.get(feature);

    let render = match view.render(data) {
        Ok(render) => render,
        Err(err) => {
            tracing::error!("{}", err);
            return rsx! {
                div {
                    class: "alert alert-error",
                    "{err}"
                }
            };
        }
    };

    let (actions, component) = render.into_parts();
    let controls = SaveBarControls::for_actions(&actions, &status.read());
    let reset_actions = actions.clone();

    let save = move |_| {
        if !status.write().begin() {
            return;
        }

        let update = match FeatureUpdate::prepare(endpoint, &actions) {
            Ok(update) => update,
            Err(err) => {
                tracing::warn!("Not saving: {}", err);
                status.write().fail(err.to_string());
                return;
            }
        };

        #[cfg(feature = "web")]
        {
            let client = dashboard.client.clone();
            spawn(async move {
                match update_feature(&client, &update).await {
                    Ok(()) => {
                        status.write().succeed();
                        on_saved.call(());
                    }
                    Err(err) => {
                        tracing::error!("Failed to save {}: {}", feature, err);
                        status.write().fail(err.message);
                    }
                }
            });
        }

        #[cfg(not(feature = "web"))]
        {
            let _ = (update, on_saved);
            status.write().fail("Saving requires the web client");
        }
    };

    let reset = move |_| {
        if reset_actions.reset() {
            status.write().dismiss();
        }
    };

    rsx! {
        {component}
        SaveBar {
            controls,
            status: status(),
            on_save: save,
            on_reset: reset,
        }
    }
}
