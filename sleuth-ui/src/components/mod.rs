//! Shared UI components

pub mod helpers;
pub mod home;
pub mod navbar;
pub mod people_list;
pub mod person_detail;

pub use helpers::{BackButton, ErrorDisplay, LoadingSpinner, PageContainer};
pub use home::HomeView;
pub use navbar::{NavItem, NavbarView};
pub use people_list::PeopleListView;
pub use person_detail::PersonDetailView;
