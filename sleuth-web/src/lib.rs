pub mod api;
pub mod pages;

use dioxus::prelude::*;
use pages::{Home, People, PersonDetail};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/people")]
    People {},
    #[route("/person/:person_id")]
    PersonDetail { person_id: i64 },
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen bg-gray-900", Router::<Route> {} }
    }
}
