use std::rc::Rc;

use dioxus::prelude::*;

use crate::client::{component::Header, config::Dashboard, router::Route};

#[component]
pub fn Layout() -> Element {
    let dashboard = use_context::<Rc<Dashboard>>();

    rsx!(div {
        class: "flex flex-col min-h-screen",
        Header {  }
        main {
            class: "flex-1",
            Outlet::<Route> {}
        }
        footer {
            class: "footer footer-center p-4 bg-base-200 text-sm opacity-70",
            p { "{dashboard.app.name} dashboard" }
        }
    })
}
