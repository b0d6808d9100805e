//! Back button component

use dioxus::prelude::*;

/// Back-navigation control: a single button with a chevron and a label.
///
/// Where to go back to is the caller's decision; each activation fires
/// `on_click` once and nothing else.
#[component]
pub fn BackButton(
    /// Label next to the chevron (default: "Back")
    #[props(default = "Back".to_string())]
    text: String,
    on_click: EventHandler<()>,
) -> Element {
    rsx! {
        div { class: "back-button mb-6",
            button {
                class: "inline-flex items-center text-gray-400 hover:text-white transition-colors",
                "data-testid": "back-button",
                onclick: move |_| on_click.call(()),
                svg {
                    class: "w-5 h-5 mr-2",
                    fill: "none",
                    stroke: "currentColor",
                    view_box: "0 0 24 24",
                    path {
                        stroke_linecap: "round",
                        stroke_linejoin: "round",
                        stroke_width: "2",
                        d: "M15 19l-7-7 7-7",
                    }
                }
                "{text}"
            }
        }
    }
}
