//! Person detail view component

use crate::components::helpers::BackButton;
use crate::display_types::{
    FamilyMember, Friend, ImageItem, Person, Place, RecentPlace, ReelItem, Review, VideoItem,
    WorkAndEducation,
};
use dioxus::prelude::*;

/// Detail page for one person (pure, props-based)
///
/// Header with contact fields, then one section per populated collection.
/// Empty sections are omitted entirely.
#[component]
pub fn PersonDetailView(
    person: Person,
    #[props(default)] friends: Vec<Friend>,
    #[props(default)] family_members: Vec<FamilyMember>,
    #[props(default)] work_and_education: Vec<WorkAndEducation>,
    #[props(default)] places: Vec<Place>,
    #[props(default)] recent_places: Vec<RecentPlace>,
    #[props(default)] reviews: Vec<Review>,
    #[props(default)] videos: Vec<VideoItem>,
    #[props(default)] reels: Vec<ReelItem>,
    #[props(default)] images: Vec<ImageItem>,
    on_back: EventHandler<()>,
) -> Element {
    rsx! {
        div {
            BackButton { on_click: move |_| on_back.call(()) }

            header { class: "mb-8",
                h1 { class: "text-3xl font-bold text-white", "{person.full_name}" }
                div { class: "mt-2 space-y-1",
                    if let Some(url) = &person.url {
                        p { class: "text-gray-400 text-sm",
                            a { class: "hover:text-white underline", href: "{url}", "{url}" }
                        }
                    }
                    if let Some(phone) = &person.phone_number {
                        p { class: "text-gray-400 text-sm", "{phone}" }
                    }
                    if let Some(email) = &person.email {
                        p { class: "text-gray-400 text-sm", "{email}" }
                    }
                }
            }

            if !friends.is_empty() {
                Section { title: "Friends",
                    ul { class: "divide-y divide-gray-700",
                        for friend in friends.iter() {
                            li { key: "{friend.id}", class: "py-2 text-gray-300", "{friend.full_name}" }
                        }
                    }
                }
            }

            if !family_members.is_empty() {
                Section { title: "Family members",
                    ul { class: "divide-y divide-gray-700",
                        for member in family_members.iter() {
                            li { key: "{member.id}", class: "py-2 flex items-center justify-between",
                                span { class: "text-gray-300", "{member.full_name}" }
                                if let Some(relationship) = &member.relationship {
                                    span { class: "text-gray-500 text-sm", "{relationship}" }
                                }
                            }
                        }
                    }
                }
            }

            if !work_and_education.is_empty() {
                Section { title: "Work and education",
                    ul { class: "divide-y divide-gray-700",
                        for entry in work_and_education.iter() {
                            li { key: "{entry.id}", class: "py-2 text-gray-300", "{entry.name}" }
                        }
                    }
                }
            }

            if !places.is_empty() {
                Section { title: "Places",
                    ul { class: "divide-y divide-gray-700",
                        for place in places.iter() {
                            li { key: "{place.id}", class: "py-2 flex items-center justify-between",
                                span { class: "text-gray-300", "{place.name}" }
                                if let Some(date) = &place.date {
                                    span { class: "text-gray-500 text-sm", "{date}" }
                                }
                            }
                        }
                    }
                }
            }

            if !recent_places.is_empty() {
                Section { title: "Recent places",
                    ul { class: "divide-y divide-gray-700",
                        for place in recent_places.iter() {
                            li { key: "{place.id}", class: "py-2 flex items-center justify-between",
                                span { class: "text-gray-300", "{place.localization}" }
                                if let Some(date) = &place.date {
                                    span { class: "text-gray-500 text-sm", "{date}" }
                                }
                            }
                        }
                    }
                }
            }

            if !reviews.is_empty() {
                Section { title: "Reviews",
                    ul { class: "divide-y divide-gray-700",
                        for review in reviews.iter() {
                            li { key: "{review.id}", class: "py-2",
                                p { class: "text-white text-sm font-semibold", "{review.company}" }
                                p { class: "text-gray-300 text-sm", "{review.review}" }
                            }
                        }
                    }
                }
            }

            if !videos.is_empty() {
                Section { title: "Videos",
                    LinkList { entries: videos.iter().map(|v| (v.id, v.url.clone())).collect() }
                }
            }

            if !reels.is_empty() {
                Section { title: "Reels",
                    LinkList { entries: reels.iter().map(|r| (r.id, r.url.clone())).collect() }
                }
            }

            if !images.is_empty() {
                Section { title: "Images",
                    div { class: "grid grid-cols-4 gap-4",
                        for image in images.iter() {
                            img {
                                key: "{image.id}",
                                class: "rounded object-cover w-full",
                                src: "{image.url}",
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Section(title: String, children: Element) -> Element {
    rsx! {
        section { class: "mb-8",
            h2 { class: "text-xl font-semibold text-white mb-3", "{title}" }
            {children}
        }
    }
}

/// Rows of collected links; entries without a url show only their id.
#[component]
fn LinkList(entries: Vec<(i64, Option<String>)>) -> Element {
    rsx! {
        ul { class: "divide-y divide-gray-700",
            for (id, url) in entries.iter() {
                li { key: "{id}", class: "py-2 text-sm",
                    if let Some(url) = url {
                        a { class: "text-gray-300 hover:text-white underline", href: "{url}", "{url}" }
                    } else {
                        span { class: "text-gray-500", "#{id}" }
                    }
                }
            }
        }
    }
}
