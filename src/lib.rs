mod catalog;
mod listing;
mod ranking;
mod store;

#[cfg(feature = "http")]
pub mod http;

pub use catalog::{
    Card, Collection, CollectionPage, Item, Platform, PlatformFilter, ScreenshotSet,
    UnknownPlatform, ALL_PLATFORMS,
};
pub use listing::{ListingError, ListingRequest, Storefront};
pub use ranking::{
    count_compatible, rank, retain_top_k, slice_page, total_pages, Ranked, SliceError, SortOrder,
    TopK, UnknownSortOrder, MAX_PAGES, PAGE_SIZE,
};
pub use store::{CatalogSeed, CatalogStore, InMemoryCatalogStore, StoreError};
