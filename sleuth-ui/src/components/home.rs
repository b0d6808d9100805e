//! Home view component

use super::navbar::{NavItem, NavbarView};
use dioxus::prelude::*;

/// Static home page shell: a navbar and a placeholder heading.
///
/// Holds no state of its own; nav selection is forwarded unchanged.
#[component]
pub fn HomeView(nav_items: Vec<NavItem>, on_nav_click: EventHandler<String>) -> Element {
    rsx! {
        div { class: "page",
            NavbarView { nav_items, on_nav_click }
            div { class: "content container mx-auto p-6",
                h1 { class: "text-3xl font-bold text-white", "Home" }
            }
        }
    }
}
