use dioxus::prelude::*;

use crate::client::component::ErrorPage;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        Title { "Not found" }
        ErrorPage {
            status: 404,
            message: format!("Nothing lives at /{}", path)
        }
    }
}
