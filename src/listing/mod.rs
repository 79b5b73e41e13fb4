//! Listing - request validation and page assembly for collection listings.
//!
//! A listing request moves through three stages:
//!
//! 1. [`ListingRequest::parse`] validates the collection id and the
//!    `order`, `platform` and `page` query parameters.
//! 2. [`Storefront::collection_page`] loads the collection snapshot from the
//!    store, sizes the listing and runs the ranking engine.
//! 3. The surviving items are projected into [`Card`](crate::Card)s.
//!
//! A request either yields a complete [`CollectionPage`](crate::CollectionPage)
//! or exactly one [`ListingError`].

mod error;
mod request;
mod service;

pub use error::ListingError;
pub use request::ListingRequest;
pub use service::Storefront;
