use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_free_icons::{icons::fa_brands_icons::FaDiscord, Icon};

use crate::client::{config::Dashboard, dashboard::Capability, router::Route};

#[component]
pub fn Header() -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();
    let app = &dashboard.app;

    rsx!(div {
        class: "fixed flex justify-between gap-4 w-full h-20 py-2 px-4 bg-base-200 z-20",
        div {
            class: "flex items-center",
            Link {
                to: Route::Home {},
                div {
                    class: "flex items-center gap-3",
                    if let Capability::Supported(icon) = app.icon {
                        {icon()}
                    }
                    p {
                        class: "md:text-xl text-wrap",
                        "{app.name}"
                    }
                }
            }
        }
        div {
            class: "flex items-center gap-2",
            Link {
                to: Route::GuildSelect {},
                class: "btn btn-outline",
                "Servers"
            }
            if app.pages.use_profile.is_supported() {
                Link {
                    to: Route::Profile {},
                    class: "btn btn-outline",
                    "Profile"
                }
            }
            a {
                href: "{app.invite_url}",
                target: "_blank",
                div {
                    class: "btn btn-primary flex gap-2 items-center",
                    Icon {
                        width: 22,
                        height: 22,
                        icon: FaDiscord
                    }
                    p {
                        "Invite"
                    }
                }
            }
        }
    })
}
