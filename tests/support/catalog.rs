//! Test catalog fixtures.

use chrono::{TimeZone, Utc};
use storefront::{
    Collection, InMemoryCatalogStore, Item, Platform, PlatformFilter, ScreenshotSet, SortOrder,
};

pub const COLLECTION_ID: &str = "featured";
pub const COLLECTION_NAME: &str = "Featured Apps";

pub fn app(id: &str, thumbs_up: u64, published: i64, platforms: &[Platform]) -> Item {
    Item {
        id: id.to_string(),
        name: format!("App {}", id),
        kind: "watchapp".to_string(),
        supported_platforms: platforms.to_vec(),
        thumbs_up,
        published: Utc.timestamp_opt(published, 0).unwrap(),
        screenshots: vec![ScreenshotSet {
            platform: platforms.first().copied().unwrap_or(Platform::Basalt),
            screenshots: vec![format!("https://img.example/{}.png", id)],
        }],
    }
}

/// `count` apps with distinct scores and publish times. Even-numbered apps
/// run on basalt, odd ones on aplite, every third one also on chalk.
pub fn numbered_apps(count: usize) -> Vec<Item> {
    (0..count)
        .map(|n| {
            let mut platforms = vec![if n % 2 == 0 {
                Platform::Basalt
            } else {
                Platform::Aplite
            }];
            if n % 3 == 0 {
                platforms.push(Platform::Chalk);
            }
            // Scores and publish times deliberately disagree on order.
            let thumbs_up = ((n * 37) % 1000) as u64;
            app(
                &format!("app-{:04}", n),
                thumbs_up,
                1_400_000_000 + n as i64 * 60,
                &platforms,
            )
        })
        .collect()
}

/// A store holding one collection, `featured`, with all of `apps` as members.
pub fn store_with(apps: Vec<Item>) -> InMemoryCatalogStore {
    let store = InMemoryCatalogStore::new();
    let members = apps.iter().map(|app| app.id.clone()).collect();
    for app in apps {
        store.insert_app(app).unwrap();
    }
    store
        .insert_collection(Collection {
            id: COLLECTION_ID.to_string(),
            name: COLLECTION_NAME.to_string(),
            members,
        })
        .unwrap();
    store
}

/// Filter then fully sort: what a listing must agree with.
pub fn naive_ranking(apps: &[Item], platform: PlatformFilter, order: SortOrder) -> Vec<Item> {
    let mut accepted: Vec<Item> = apps
        .iter()
        .filter(|app| platform.accepts(app))
        .cloned()
        .collect();
    accepted.sort_by(|a, b| order.compare(a, b));
    accepted
}

pub fn query(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
