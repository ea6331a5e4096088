use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        component::ErrorPage,
        config::{self, Dashboard},
        model::cache::{Cache, GuildCache},
        router::Route,
    },
    model::{discord::UserGuildDto, guild::GuildInfo},
};

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@5";
const TAILWIND_JS: &str = "https://cdn.jsdelivr.net/npm/@tailwindcss/browser@4";

#[component]
pub fn App() -> Element {
    let dashboard = use_hook(|| {
        config::load().map(Rc::new).map_err(|err| {
            tracing::error!("Invalid dashboard configuration: {}", err);
            err.to_string()
        })
    });

    rsx! {
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        match dashboard {
            Ok(dashboard) => rsx! {
                DashboardRoot { dashboard }
            },
            Err(message) => rsx! {
                Title { "Configuration error" }
                ErrorPage { status: 500, message }
            },
        }
    }
}

/// Provides the dashboard configuration and session caches to every route.
#[component]
fn DashboardRoot(dashboard: Rc<Dashboard>) -> Element {
    use_context_provider(|| dashboard.clone());
    use_context_provider(|| Signal::new(Cache::<Vec<UserGuildDto>>::default()));
    use_context_provider(|| Signal::new(GuildCache::<Option<GuildInfo>>::default()));

    rsx! {
        Title { "{dashboard.app.name}" }
        Router::<Route> {}
    }
}
