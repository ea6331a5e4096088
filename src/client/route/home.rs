use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{component::Page, config::Dashboard, dashboard::Capability, router::Route};

#[component]
pub fn Home() -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();
    let app = &dashboard.app;

    rsx! {
        Title { "{app.name}" }
        if let Capability::Supported(page) = app.pages.use_dashboard {
            Page {
                {page()}
            }
        } else {
            Page {
                class: "flex flex-col gap-6 items-center justify-center w-full h-full",
                div {
                    class: "flex flex-col items-center gap-4 text-center",
                    if let Capability::Supported(icon) = app.icon {
                        {icon()}
                    }
                    h1 {
                        class: "text-4xl font-bold",
                        "{app.name}"
                    }
                    p {
                        class: "opacity-80 max-w-xl",
                        "Pick a server to turn features on and off and change their settings."
                    }
                }
                div {
                    class: "flex flex-wrap gap-2 justify-center",
                    Link {
                        to: Route::GuildSelect {},
                        class: "btn btn-primary",
                        "Manage servers"
                    }
                    a {
                        href: "{app.invite_url}",
                        target: "_blank",
                        div {
                            class: "btn btn-outline flex gap-2 items-center",
                            Icon {
                                width: 24,
                                height: 24,
                                icon: FaDiscord
                            }
                            p { "Add to Discord" }
                        }
                    }
                }
            }
        }
    }
}
