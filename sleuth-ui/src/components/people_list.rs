//! People list view component

use crate::display_types::Person;
use dioxus::prelude::*;

/// List of collected people (pure, props-based)
///
/// Renders one row per person, or an empty state when nothing has been
/// collected yet. Clicks are reported with the person's id.
#[component]
pub fn PeopleListView(people: Vec<Person>, on_person_click: EventHandler<i64>) -> Element {
    if people.is_empty() {
        return rsx! {
            div { class: "text-gray-400 text-center py-12", "No people collected yet." }
        };
    }

    rsx! {
        ul { class: "divide-y divide-gray-700",
            for person in people.iter() {
                PersonRow {
                    key: "{person.id}",
                    person: person.clone(),
                    on_click: {
                        let id = person.id;
                        move |_| on_person_click.call(id)
                    },
                }
            }
        }
    }
}

#[component]
fn PersonRow(person: Person, on_click: EventHandler<()>) -> Element {
    rsx! {
        li {
            class: "flex items-center justify-between px-4 py-3 hover:bg-gray-800 cursor-pointer",
            "data-testid": "person-row",
            onclick: move |_| on_click.call(()),
            div {
                p { class: "text-white", "{person.full_name}" }
                if let Some(facebook_id) = &person.facebook_id {
                    p { class: "text-gray-500 text-sm", "{facebook_id}" }
                }
            }
            if let Some(email) = &person.email {
                span { class: "text-gray-400 text-sm", "{email}" }
            }
        }
    }
}
