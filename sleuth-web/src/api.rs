//! REST client for the sleuth backend
//!
//! Thin async wrappers over the backend's JSON endpoints, mapping wire
//! schemas to the display types the views consume. The backend answers 404
//! for empty collections, so list fetches fold that into an empty Vec.

use serde::Deserialize;
use sleuth_ui::display_types::{
    FamilyMember, Friend, ImageItem, Person, Place, RecentPlace, ReelItem, Review, VideoItem,
    WorkAndEducation,
};

#[derive(Deserialize)]
struct PersonSchema {
    id: i64,
    full_name: Option<String>,
    url: Option<String>,
    facebook_id: Option<String>,
    phone_number: Option<String>,
    email: Option<String>,
}

#[derive(Deserialize)]
struct FriendSchema {
    id: i64,
    full_name: Option<String>,
    url: Option<String>,
}

#[derive(Deserialize)]
struct FamilyMemberSchema {
    id: i64,
    full_name: Option<String>,
    relationship: Option<String>,
}

#[derive(Deserialize)]
struct WorkAndEducationSchema {
    id: i64,
    name: Option<String>,
}

#[derive(Deserialize)]
struct PlaceSchema {
    id: i64,
    name: Option<String>,
    date: Option<String>,
}

#[derive(Deserialize)]
struct RecentPlaceSchema {
    id: i64,
    localization: Option<String>,
    date: Option<String>,
}

#[derive(Deserialize)]
struct ReviewSchema {
    id: i64,
    company: Option<String>,
    review: Option<String>,
}

#[derive(Deserialize)]
struct VideoSchema {
    id: i64,
    url: Option<String>,
}

#[derive(Deserialize)]
struct ReelSchema {
    id: i64,
    url: Option<String>,
}

#[derive(Deserialize)]
struct ImageSchema {
    id: i64,
}

fn person_display(p: PersonSchema) -> Person {
    Person {
        id: p.id,
        full_name: p.full_name.unwrap_or_else(|| "Unknown".to_string()),
        url: p.url,
        facebook_id: p.facebook_id,
        phone_number: p.phone_number,
        email: p.email,
    }
}

fn friend_display(f: FriendSchema) -> Friend {
    Friend {
        id: f.id,
        full_name: f.full_name.unwrap_or_else(|| "Unknown".to_string()),
        url: f.url,
    }
}

fn family_member_display(m: FamilyMemberSchema) -> FamilyMember {
    FamilyMember {
        id: m.id,
        full_name: m.full_name.unwrap_or_else(|| "Unknown".to_string()),
        relationship: m.relationship,
    }
}

fn work_display(w: WorkAndEducationSchema) -> WorkAndEducation {
    WorkAndEducation {
        id: w.id,
        name: w.name.unwrap_or_default(),
    }
}

fn place_display(p: PlaceSchema) -> Place {
    Place {
        id: p.id,
        name: p.name.unwrap_or_default(),
        date: p.date,
    }
}

fn recent_place_display(p: RecentPlaceSchema) -> RecentPlace {
    RecentPlace {
        id: p.id,
        localization: p.localization.unwrap_or_default(),
        date: p.date,
    }
}

fn review_display(r: ReviewSchema) -> Review {
    Review {
        id: r.id,
        company: r.company.unwrap_or_default(),
        review: r.review.unwrap_or_default(),
    }
}

fn video_display(v: VideoSchema) -> VideoItem {
    VideoItem { id: v.id, url: v.url }
}

fn reel_display(r: ReelSchema) -> ReelItem {
    ReelItem { id: r.id, url: r.url }
}

/// URL the backend serves the raw image file from
fn image_view_url(image_id: i64) -> String {
    format!("/image/{image_id}/view")
}

fn image_display(i: ImageSchema) -> ImageItem {
    ImageItem {
        url: image_view_url(i.id),
        id: i.id,
    }
}

async fn fetch_list<T: serde::de::DeserializeOwned>(url: &str) -> Result<Vec<T>, String> {
    let resp = reqwest::get(url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    // Empty collection, not a failure
    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Ok(vec![]);
    }
    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    resp.json().await.map_err(|e| format!("Parse error: {e}"))
}

/// Fetch every collected person
pub async fn fetch_people() -> Result<Vec<Person>, String> {
    let raw: Vec<PersonSchema> = fetch_list("/person/").await?;
    Ok(raw.into_iter().map(person_display).collect())
}

/// Fetch a single person by id
pub async fn fetch_person(person_id: i64) -> Result<Person, String> {
    let url = format!("/person/{person_id}");
    let resp = reqwest::get(&url)
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if resp.status() == reqwest::StatusCode::NOT_FOUND {
        return Err("Person not found.".to_string());
    }
    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    let raw: PersonSchema = resp.json().await.map_err(|e| format!("Parse error: {e}"))?;
    Ok(person_display(raw))
}

/// Fetch a person's friends
pub async fn fetch_friends(person_id: i64) -> Result<Vec<Friend>, String> {
    let raw: Vec<FriendSchema> = fetch_list(&format!("/friend/{person_id}")).await?;
    Ok(raw.into_iter().map(friend_display).collect())
}

/// Fetch a person's family members
pub async fn fetch_family_members(person_id: i64) -> Result<Vec<FamilyMember>, String> {
    let raw: Vec<FamilyMemberSchema> = fetch_list(&format!("/family_member/{person_id}")).await?;
    Ok(raw.into_iter().map(family_member_display).collect())
}

/// Fetch a person's work and education entries
pub async fn fetch_work_and_education(person_id: i64) -> Result<Vec<WorkAndEducation>, String> {
    let raw: Vec<WorkAndEducationSchema> =
        fetch_list(&format!("/work_and_education/{person_id}")).await?;
    Ok(raw.into_iter().map(work_display).collect())
}

/// Fetch places the person has listed
pub async fn fetch_places(person_id: i64) -> Result<Vec<Place>, String> {
    let raw: Vec<PlaceSchema> = fetch_list(&format!("/place/{person_id}")).await?;
    Ok(raw.into_iter().map(place_display).collect())
}

/// Fetch a person's recently visited places
pub async fn fetch_recent_places(person_id: i64) -> Result<Vec<RecentPlace>, String> {
    let raw: Vec<RecentPlaceSchema> = fetch_list(&format!("/recent_place/{person_id}")).await?;
    Ok(raw.into_iter().map(recent_place_display).collect())
}

/// Fetch reviews the person has written
pub async fn fetch_reviews(person_id: i64) -> Result<Vec<Review>, String> {
    let raw: Vec<ReviewSchema> = fetch_list(&format!("/review/{person_id}")).await?;
    Ok(raw.into_iter().map(review_display).collect())
}

/// Fetch a person's collected videos
pub async fn fetch_videos(person_id: i64) -> Result<Vec<VideoItem>, String> {
    let raw: Vec<VideoSchema> = fetch_list(&format!("/video/{person_id}")).await?;
    Ok(raw.into_iter().map(video_display).collect())
}

/// Fetch a person's collected reels
pub async fn fetch_reels(person_id: i64) -> Result<Vec<ReelItem>, String> {
    let raw: Vec<ReelSchema> = fetch_list(&format!("/reel/{person_id}")).await?;
    Ok(raw.into_iter().map(reel_display).collect())
}

/// Fetch a person's collected images
pub async fn fetch_images(person_id: i64) -> Result<Vec<ImageItem>, String> {
    let raw: Vec<ImageSchema> = fetch_list(&format!("/image/{person_id}")).await?;
    Ok(raw.into_iter().map(image_display).collect())
}
