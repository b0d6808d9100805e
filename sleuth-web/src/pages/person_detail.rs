use crate::api;
use dioxus::prelude::*;
use sleuth_ui::display_types::{
    FamilyMember, Friend, ImageItem, Person, Place, RecentPlace, ReelItem, Review, VideoItem,
    WorkAndEducation,
};
use sleuth_ui::{ErrorDisplay, LoadingSpinner, PageContainer, PersonDetailView};
use std::future::Future;
use tracing::warn;

#[derive(Clone)]
struct PersonData {
    person: Person,
    friends: Vec<Friend>,
    family_members: Vec<FamilyMember>,
    work_and_education: Vec<WorkAndEducation>,
    places: Vec<Place>,
    recent_places: Vec<RecentPlace>,
    reviews: Vec<Review>,
    videos: Vec<VideoItem>,
    reels: Vec<ReelItem>,
    images: Vec<ImageItem>,
}

/// A failed section fetch degrades to an empty section.
async fn section<T>(
    fut: impl Future<Output = Result<Vec<T>, String>>,
    what: &str,
    person_id: i64,
) -> Vec<T> {
    fut.await.unwrap_or_else(|e| {
        warn!("failed to load {what} for person {person_id}: {e}");
        vec![]
    })
}

/// Load a person plus their sections. Only the person itself is load-bearing.
async fn fetch_person_data(person_id: i64) -> Result<PersonData, String> {
    let person = api::fetch_person(person_id).await?;

    Ok(PersonData {
        person,
        friends: section(api::fetch_friends(person_id), "friends", person_id).await,
        family_members: section(
            api::fetch_family_members(person_id),
            "family members",
            person_id,
        )
        .await,
        work_and_education: section(
            api::fetch_work_and_education(person_id),
            "work and education",
            person_id,
        )
        .await,
        places: section(api::fetch_places(person_id), "places", person_id).await,
        recent_places: section(
            api::fetch_recent_places(person_id),
            "recent places",
            person_id,
        )
        .await,
        reviews: section(api::fetch_reviews(person_id), "reviews", person_id).await,
        videos: section(api::fetch_videos(person_id), "videos", person_id).await,
        reels: section(api::fetch_reels(person_id), "reels", person_id).await,
        images: section(api::fetch_images(person_id), "images", person_id).await,
    })
}

/// Person detail page, reached from the people index. The back control
/// delegates to the router's history.
#[component]
pub fn PersonDetail(person_id: i64) -> Element {
    let data = use_resource(move || fetch_person_data(person_id));
    let read = data.read();

    let result = match &*read {
        Some(Ok(loaded)) => Ok(loaded.clone()),
        Some(Err(e)) => Err(e.clone()),
        None => {
            return rsx! {
                PageContainer {
                    LoadingSpinner {}
                }
            };
        }
    };
    drop(read);

    let content = match result {
        Ok(loaded) => rsx! {
            PersonDetailView {
                person: loaded.person,
                friends: loaded.friends,
                family_members: loaded.family_members,
                work_and_education: loaded.work_and_education,
                places: loaded.places,
                recent_places: loaded.recent_places,
                reviews: loaded.reviews,
                videos: loaded.videos,
                reels: loaded.reels,
                images: loaded.images,
                on_back: move |_| {
                    navigator().go_back();
                },
            }
        },
        Err(e) => rsx! {
            ErrorDisplay { message: "Failed to load person: {e}" }
        },
    };

    rsx! {
        PageContainer { {content} }
    }
}
