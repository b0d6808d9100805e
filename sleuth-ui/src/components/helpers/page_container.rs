//! Page container component

use dioxus::prelude::*;

/// Content area wrapper with the app's standard width and padding
#[component]
pub fn PageContainer(children: Element) -> Element {
    rsx! {
        div { class: "content container mx-auto p-6", {children} }
    }
}
