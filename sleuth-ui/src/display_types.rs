//! Display types for UI components
//!
//! Lightweight versions of the backend's wire schemas, containing only the
//! fields the views need. They keep components props-based and independent of
//! the API layer.

/// Person display info
#[derive(Clone, Debug, PartialEq)]
pub struct Person {
    pub id: i64,
    pub full_name: String,
    pub url: Option<String>,
    pub facebook_id: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
}

/// Friend entry on a person's detail page
#[derive(Clone, Debug, PartialEq)]
pub struct Friend {
    pub id: i64,
    pub full_name: String,
    pub url: Option<String>,
}

/// Family member entry
#[derive(Clone, Debug, PartialEq)]
pub struct FamilyMember {
    pub id: i64,
    pub full_name: String,
    pub relationship: Option<String>,
}

/// Work or education entry
#[derive(Clone, Debug, PartialEq)]
pub struct WorkAndEducation {
    pub id: i64,
    pub name: String,
}

/// Place the person has listed
#[derive(Clone, Debug, PartialEq)]
pub struct Place {
    pub id: i64,
    pub name: String,
    pub date: Option<String>,
}

/// Recently visited place
#[derive(Clone, Debug, PartialEq)]
pub struct RecentPlace {
    pub id: i64,
    pub localization: String,
    pub date: Option<String>,
}

/// Review the person has written
#[derive(Clone, Debug, PartialEq)]
pub struct Review {
    pub id: i64,
    pub company: String,
    pub review: String,
}

/// Collected video link
#[derive(Clone, Debug, PartialEq)]
pub struct VideoItem {
    pub id: i64,
    pub url: Option<String>,
}

/// Collected reel link
#[derive(Clone, Debug, PartialEq)]
pub struct ReelItem {
    pub id: i64,
    pub url: Option<String>,
}

/// Collected image, resolvable through the backend's image view endpoint
#[derive(Clone, Debug, PartialEq)]
pub struct ImageItem {
    pub id: i64,
    pub url: String,
}
