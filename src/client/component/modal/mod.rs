pub mod confirmation_modal;

use dioxus::prelude::*;

pub use confirmation_modal::ConfirmationModal;

/// Dialog shown over the page while `show` is true.
///
/// Escape and the backdrop close it unless `prevent_close` is set, for example
/// while the action it confirms is running.
#[component]
pub fn Modal(mut show: Signal<bool>, title: String, prevent_close: bool, children: Element) -> Element {
    #[cfg(feature = "web")]
    use_effect(move || {
        if show() {
            document::eval(r#"document.querySelector('.modal-open')?.focus()"#);
        }
    });

    let mut close = move || {
        if !prevent_close {
            show.set(false);
        }
    };

    rsx!(
        div {
            class: if show() { "modal modal-open" } else { "modal" },
            tabindex: "-1",
            onkeydown: move |evt| {
                if evt.key() == Key::Escape {
                    close();
                }
            },
            div {
                class: "modal-box border border-base-300 w-11/12 max-w-lg",
                h3 {
                    class: "font-bold text-lg mb-4",
                    "{title}"
                }
                {children}
            }
            div {
                class: "modal-backdrop",
                onclick: move |_| close(),
            }
        }
    )
}
