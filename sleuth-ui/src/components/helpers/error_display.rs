//! Error display component

use dioxus::prelude::*;

/// Error box shown when a page's data fetch fails
#[component]
pub fn ErrorDisplay(message: String) -> Element {
    rsx! {
        div {
            class: "bg-red-900 border border-red-700 text-red-100 px-4 py-3 rounded mb-4",
            "data-testid": "error-display",
            p { "{message}" }
        }
    }
}
