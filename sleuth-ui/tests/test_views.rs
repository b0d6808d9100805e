//! Headless render tests for the pure view components.
//!
//! Components are mounted in a `VirtualDom` and rendered to HTML with
//! `dioxus-ssr`, then assertions run on the markup.

use dioxus::dioxus_core::ElementId;
use dioxus::prelude::*;
use dioxus_html::{
    set_event_converter, PlatformEventData, SerializedHtmlEventConverter, SerializedMouseData,
};
use sleuth_ui::display_types::{
    FamilyMember, Friend, ImageItem, Person, Place, Review, WorkAndEducation,
};
use sleuth_ui::{BackButton, HomeView, NavItem, PeopleListView, PersonDetailView};
use std::rc::Rc;
use std::sync::atomic::{AtomicU32, Ordering};

fn render(app: fn() -> Element) -> String {
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

fn nav_items() -> Vec<NavItem> {
    vec![
        NavItem {
            id: "home".to_string(),
            label: "Home".to_string(),
            is_active: true,
        },
        NavItem {
            id: "people".to_string(),
            label: "People".to_string(),
            is_active: false,
        },
    ]
}

fn person(id: i64, full_name: &str) -> Person {
    Person {
        id,
        full_name: full_name.to_string(),
        url: None,
        facebook_id: None,
        phone_number: None,
        email: None,
    }
}

#[test]
fn back_button_has_single_activation_target() {
    fn app() -> Element {
        rsx! {
            BackButton { on_click: move |_| {} }
        }
    }

    let html = render(app);
    assert_eq!(html.matches("<button").count(), 1);
    assert_eq!(html.matches(r#"data-testid="back-button""#).count(), 1);
    assert!(html.contains("Back"));
}

#[test]
fn back_button_click_invokes_handler_exactly_once() {
    static CLICKS: AtomicU32 = AtomicU32::new(0);

    // Dispatching serialized events requires the serialized converter to be
    // registered with dioxus-html first.
    set_event_converter(Box::new(SerializedHtmlEventConverter));

    fn app() -> Element {
        rsx! {
            BackButton {
                on_click: move |_| {
                    CLICKS.fetch_add(1, Ordering::SeqCst);
                },
            }
        }
    }

    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();

    // The button is the only element with a click listener. Target every
    // mounted element without bubbling, so exactly one dispatch can land;
    // ids without a listener are no-ops.
    for id in 0..16 {
        let data = Rc::new(PlatformEventData::new(Box::<SerializedMouseData>::default()));
        dom.handle_event("click", data, ElementId(id), false);
    }

    assert_eq!(CLICKS.load(Ordering::SeqCst), 1);
}

#[test]
fn back_button_shows_custom_text() {
    fn app() -> Element {
        rsx! {
            BackButton { text: "Back to people", on_click: move |_| {} }
        }
    }

    assert!(render(app).contains("Back to people"));
}

#[test]
fn home_view_renders_one_navbar_and_one_heading() {
    fn app() -> Element {
        rsx! {
            HomeView { nav_items: nav_items(), on_nav_click: move |_| {} }
        }
    }

    let html = render(app);
    assert_eq!(html.matches("<nav").count(), 1);
    assert_eq!(html.matches("<h1").count(), 1);
    assert!(html.contains("Home"));
}

#[test]
fn home_view_render_is_idempotent() {
    fn app() -> Element {
        rsx! {
            HomeView { nav_items: nav_items(), on_nav_click: move |_| {} }
        }
    }

    let first = render(app);
    let second = render(app);
    assert_eq!(first, second);

    // Re-rendering the same mounted dom must not change the output either
    let mut dom = VirtualDom::new(app);
    dom.rebuild_in_place();
    assert_eq!(dioxus_ssr::render(&dom), dioxus_ssr::render(&dom));
}

#[test]
fn navbar_marks_only_the_active_item() {
    fn app() -> Element {
        rsx! {
            HomeView { nav_items: nav_items(), on_nav_click: move |_| {} }
        }
    }

    // Active styling shows up exactly once even with multiple items
    let html = render(app);
    assert_eq!(html.matches("bg-blue-600").count(), 1);
}

#[test]
fn people_list_renders_one_row_per_person() {
    fn app() -> Element {
        let people = vec![person(1, "Jan Kowalski"), person(2, "Ada Nowak")];
        rsx! {
            PeopleListView { people, on_person_click: move |_| {} }
        }
    }

    let html = render(app);
    assert_eq!(html.matches(r#"data-testid="person-row""#).count(), 2);
    assert!(html.contains("Jan Kowalski"));
    assert!(html.contains("Ada Nowak"));
}

#[test]
fn people_list_shows_empty_state() {
    fn app() -> Element {
        rsx! {
            PeopleListView { people: vec![], on_person_click: move |_| {} }
        }
    }

    let html = render(app);
    assert!(html.contains("No people collected yet."));
    assert_eq!(html.matches(r#"data-testid="person-row""#).count(), 0);
}

#[test]
fn person_detail_renders_back_control_and_sections() {
    fn app() -> Element {
        let person = Person {
            email: Some("jan@example.com".to_string()),
            ..person(1, "Jan Kowalski")
        };
        let friends = vec![Friend {
            id: 10,
            full_name: "Ada Nowak".to_string(),
            url: None,
        }];
        let work_and_education = vec![WorkAndEducation {
            id: 20,
            name: "Example University".to_string(),
        }];
        let images = vec![ImageItem {
            id: 30,
            url: "/image/30/view".to_string(),
        }];

        rsx! {
            PersonDetailView {
                person,
                friends,
                work_and_education,
                images,
                on_back: move |_| {},
            }
        }
    }

    let html = render(app);
    assert_eq!(html.matches(r#"data-testid="back-button""#).count(), 1);
    assert!(html.contains("Jan Kowalski"));
    assert!(html.contains("Friends"));
    assert!(html.contains("Example University"));
    assert!(html.contains(r#"src="/image/30/view""#));
}

#[test]
fn person_detail_renders_collection_sections() {
    fn app() -> Element {
        let family_members = vec![FamilyMember {
            id: 40,
            full_name: "Maria Kowalska".to_string(),
            relationship: Some("Mother".to_string()),
        }];
        let places = vec![Place {
            id: 50,
            name: "Example Cafe".to_string(),
            date: Some("2023-05-01".to_string()),
        }];
        let reviews = vec![Review {
            id: 60,
            company: "Example Cafe".to_string(),
            review: "Great coffee.".to_string(),
        }];

        rsx! {
            PersonDetailView {
                person: person(1, "Jan Kowalski"),
                family_members,
                places,
                reviews,
                on_back: move |_| {},
            }
        }
    }

    let html = render(app);
    assert!(html.contains("Family members"));
    assert!(html.contains("Maria Kowalska"));
    assert!(html.contains("Mother"));
    assert!(html.contains("Places"));
    assert!(html.contains("Reviews"));
    assert!(html.contains("Great coffee."));
    // Unpopulated collections stay omitted
    assert!(!html.contains("Videos"));
    assert!(!html.contains("Reels"));
}

#[test]
fn person_detail_omits_empty_sections() {
    fn app() -> Element {
        rsx! {
            PersonDetailView {
                person: person(1, "Jan Kowalski"),
                friends: vec![],
                work_and_education: vec![],
                images: vec![],
                on_back: move |_| {},
            }
        }
    }

    let html = render(app);
    assert_eq!(html.matches("<section").count(), 0);
    assert!(!html.contains("Friends"));
    assert!(!html.contains("<img"));
}
