use std::rc::Rc;

use dioxus::prelude::*;

use crate::client::{
    component::{ErrorPage, Page},
    config::Dashboard,
    dashboard::Capability,
};

/// Optional page supplied by the bot configuration.
#[component]
pub fn Profile() -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();

    match dashboard.app.pages.use_profile {
        Capability::Supported(page) => rsx! {
            Title { "Profile | {dashboard.app.name}" }
            Page { {page()} }
        },
        Capability::Unsupported => rsx! {
            ErrorPage {
                status: 404,
                message: "This dashboard has no profile page.".to_string()
            }
        },
    }
}
