use dioxus::prelude::*;

use crate::client::dashboard::{SaveBarControls, SaveStatus};

/// Bar pinned to the bottom of a feature editor with save and reset controls.
///
/// Renders nothing when the editor offers neither control.
#[component]
pub fn SaveBar(
    controls: SaveBarControls,
    status: SaveStatus,
    on_save: EventHandler<()>,
    on_reset: EventHandler<()>,
) -> Element {
    if !controls.visible() {
        return rsx!();
    }

    rsx!(div {
        class: "fixed bottom-0 left-0 right-0 z-20 flex flex-wrap items-center justify-between gap-4 p-4 bg-base-300 border-t border-base-content/10",
        div {
            class: "text-sm",
            {match &status {
                SaveStatus::Idle => rsx!(span { class: "opacity-70", "Save your changes" }),
                SaveStatus::Saving => rsx!(span { class: "opacity-70", "Saving..." }),
                SaveStatus::Saved => rsx!(span { class: "text-success", "Changes saved" }),
                SaveStatus::Failed(message) => rsx!(span { class: "text-error", "{message}" }),
            }}
        }
        div {
            class: "flex gap-2",
            if controls.show_reset {
                button {
                    r#type: "button",
                    class: "btn btn-ghost",
                    disabled: controls.busy,
                    onclick: move |_| on_reset.call(()),
                    "Reset"
                }
            }
            if controls.show_save {
                button {
                    r#type: "button",
                    class: "btn btn-primary",
                    disabled: controls.busy,
                    onclick: move |_| on_save.call(()),
                    if controls.busy {
                        span { class: "loading loading-spinner loading-sm mr-2" }
                        "Saving"
                    } else {
                        "Save"
                    }
                }
            }
        }
    })
}
