mod home;
mod people;
mod person_detail;

pub use home::Home;
pub use people::People;
pub use person_detail::PersonDetail;

use crate::Route;
use dioxus::prelude::*;
use sleuth_ui::NavItem;

/// Navbar entries, with the current page marked active
pub(crate) fn nav_items(active_id: &str) -> Vec<NavItem> {
    [("home", "Home"), ("people", "People")]
        .into_iter()
        .map(|(id, label)| NavItem {
            id: id.to_string(),
            label: label.to_string(),
            is_active: id == active_id,
        })
        .collect()
}

/// Route a navbar click to the matching page
pub(crate) fn navigate_to(id: &str) {
    match id {
        "home" => {
            navigator().push(Route::Home {});
        }
        "people" => {
            navigator().push(Route::People {});
        }
        _ => {}
    }
}
