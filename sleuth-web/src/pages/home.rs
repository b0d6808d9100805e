use super::{nav_items, navigate_to};
use dioxus::prelude::*;
use sleuth_ui::HomeView;

/// Landing page: the static home shell wired to the router.
#[component]
pub fn Home() -> Element {
    rsx! {
        HomeView {
            nav_items: nav_items("home"),
            on_nav_click: move |id: String| navigate_to(&id),
        }
    }
}
