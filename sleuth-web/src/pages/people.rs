use super::{nav_items, navigate_to};
use crate::api;
use crate::Route;
use dioxus::prelude::*;
use sleuth_ui::{ErrorDisplay, LoadingSpinner, NavbarView, PageContainer, PeopleListView};

/// People index: every collected person, linking to their detail page.
#[component]
pub fn People() -> Element {
    let data = use_resource(api::fetch_people);
    let read = data.read();

    let result = match &*read {
        Some(Ok(people)) => Ok(people.clone()),
        Some(Err(e)) => Err(e.clone()),
        None => {
            return rsx! {
                div { class: "page",
                    NavbarView {
                        nav_items: nav_items("people"),
                        on_nav_click: move |id: String| navigate_to(&id),
                    }
                    PageContainer {
                        LoadingSpinner {}
                    }
                }
            };
        }
    };
    drop(read);

    let content = match result {
        Ok(people) => rsx! {
            PeopleListView {
                people,
                on_person_click: move |person_id: i64| {
                    navigator().push(Route::PersonDetail { person_id });
                },
            }
        },
        Err(e) => rsx! {
            ErrorDisplay { message: "Failed to load people: {e}" }
        },
    };

    rsx! {
        div { class: "page",
            NavbarView {
                nav_items: nav_items("people"),
                on_nav_click: move |id: String| navigate_to(&id),
            }
            PageContainer {
                h1 { class: "text-3xl font-bold text-white mb-6", "People" }
                {content}
            }
        }
    }
}
