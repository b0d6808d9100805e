//! Navigation bar view component
//!
//! Pure, props-based component for the top navigation bar.

use dioxus::prelude::*;

/// Navigation item for the navbar
#[derive(Clone, PartialEq)]
pub struct NavItem {
    pub id: String,
    pub label: String,
    pub is_active: bool,
}

/// Navigation bar view (pure, props-based)
///
/// Renders the brand and one button per nav item; selection is reported
/// through `on_nav_click` with the item's id.
#[component]
pub fn NavbarView(nav_items: Vec<NavItem>, on_nav_click: EventHandler<String>) -> Element {
    rsx! {
        nav {
            class: "h-12 bg-gray-800 flex items-center justify-between px-4 border-b border-gray-700",
            span { class: "text-white font-semibold tracking-wide", "Sleuth" }
            div { class: "flex gap-2 items-center",
                for item in nav_items.iter() {
                    NavButton {
                        key: "{item.id}",
                        is_active: item.is_active,
                        on_click: {
                            let id = item.id.clone();
                            move |_| on_nav_click.call(id.clone())
                        },
                        "{item.label}"
                    }
                }
            }
        }
    }
}

#[component]
fn NavButton(is_active: bool, on_click: EventHandler<()>, children: Element) -> Element {
    let class = if is_active {
        "text-white text-sm px-3 py-1.5 rounded bg-blue-600 transition-colors"
    } else {
        "text-gray-400 text-sm px-3 py-1.5 rounded hover:bg-gray-700 hover:text-white transition-colors"
    };

    rsx! {
        button { class, onclick: move |_| on_click.call(()), {children} }
    }
}
