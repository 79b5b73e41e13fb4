//! Catalog - the read-only app data a listing is computed from, and the
//! records a listing hands back.
//!
//! `Item` and `Collection` are snapshots supplied by a
//! [`CatalogStore`](crate::CatalogStore) per request. `Card` and
//! `CollectionPage` are produced fresh for every response and never mutated
//! afterwards.

mod platform;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use platform::known_platforms;
pub use platform::{Platform, PlatformFilter, UnknownPlatform, ALL_PLATFORMS};

/// Screenshots of an app rendered for one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScreenshotSet {
    pub platform: Platform,
    #[serde(default)]
    pub screenshots: Vec<String>,
}

/// An app in the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    /// Category tag, e.g. `"watchapp"` or `"watchface"`.
    #[serde(rename = "type")]
    pub kind: String,
    /// Unrecognized tags are dropped on deserialize.
    #[serde(default, deserialize_with = "known_platforms")]
    pub supported_platforms: Vec<Platform>,
    /// Popularity score.
    #[serde(default)]
    pub thumbs_up: u64,
    pub published: DateTime<Utc>,
    #[serde(default)]
    pub screenshots: Vec<ScreenshotSet>,
}

impl Item {
    pub fn supports(&self, platform: Platform) -> bool {
        self.supported_platforms.contains(&platform)
    }

    /// The first screenshot available across all platform sets.
    pub fn preview_image(&self) -> Option<&str> {
        self.screenshots
            .iter()
            .flat_map(|set| set.screenshots.iter())
            .map(String::as_str)
            .next()
    }

    /// Project this item into the record shown on a listing page.
    pub fn to_card(&self) -> Card {
        Card {
            id: self.id.clone(),
            title: self.name.clone(),
            kind: self.kind.clone(),
            image_url: self.preview_image().unwrap_or_default().to_string(),
            thumbs_up: self.thumbs_up,
        }
    }
}

/// A named grouping of apps browsed as one listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collection {
    pub id: String,
    pub name: String,
    /// Member app ids. Order carries no meaning.
    #[serde(default)]
    pub members: Vec<String>,
}

/// Display record for one app on a listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Empty when the app has no screenshots.
    pub image_url: String,
    pub thumbs_up: u64,
}

/// One page of a collection listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionPage {
    pub id: String,
    pub name: String,
    /// Total number of pages, capped at [`MAX_PAGES`](crate::MAX_PAGES).
    pub pages: usize,
    pub cards: Vec<Card>,
}
