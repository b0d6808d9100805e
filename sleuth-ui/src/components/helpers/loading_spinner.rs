//! Loading spinner component

use dioxus::prelude::*;

/// Centered spinner shown while a page's data is in flight
#[component]
pub fn LoadingSpinner(
    /// Message next to the spinner (default: "Loading...")
    #[props(default = "Loading...".to_string())]
    message: String,
) -> Element {
    rsx! {
        div { class: "flex justify-center items-center py-12",
            div { class: "animate-spin rounded-full h-10 w-10 border-b-2 border-blue-500" }
            p { class: "ml-4 text-gray-300", "{message}" }
        }
    }
}
