use dioxus::prelude::*;
use pulldown_cmark::{html, Options, Parser};

/// Renders trusted Markdown from the dashboard configuration.
#[component]
pub fn Markdown(source: String, class: Option<&'static str>) -> Element {
    let class: &str = class.unwrap_or_default();
    let html_output = render_markdown(&source);

    rsx!(div {
        class: "prose {class}",
        dangerous_inner_html: "{html_output}"
    })
}

pub fn render_markdown(source: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    let parser = Parser::new_ext(source, options);

    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}
