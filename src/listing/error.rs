//! Error types for collection listings.

use std::error::Error;
use std::fmt;

use crate::ranking::SliceError;
use crate::store::StoreError;

/// Why a listing request produced no page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingError {
    MissingCollectionId,
    /// The query string could not be decoded at all.
    MalformedQuery(String),
    /// A query parameter was given more than once.
    DuplicateParameter(&'static str),
    InvalidOrder(String),
    InvalidPlatform(String),
    /// Page was not a positive integer.
    InvalidPage(String),
    /// Page is past the last page of the listing.
    PageOutOfRange { page: usize, total_pages: usize },
    CollectionNotFound(String),
    /// Data access failed.
    Store(StoreError),
    /// Page count and retained items disagree. Always a bug.
    Inconsistent(SliceError),
}

impl fmt::Display for ListingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListingError::MissingCollectionId => write!(f, "missing 'id' parameter"),
            ListingError::MalformedQuery(reason) => {
                write!(f, "malformed query string: {}", reason)
            }
            ListingError::DuplicateParameter(name) => {
                write!(f, "multiple '{}' parameters are not allowed", name)
            }
            ListingError::InvalidOrder(value) => write!(f, "invalid 'order' parameter: {}", value),
            ListingError::InvalidPlatform(value) => {
                write!(f, "invalid 'platform' parameter: {}", value)
            }
            ListingError::InvalidPage(value) => write!(
                f,
                "parameter 'page' should be a positive, non-zero integer, got: {}",
                value
            ),
            ListingError::PageOutOfRange { page, total_pages } => write!(
                f,
                "requested page {} does not exist (listing has {} pages)",
                page, total_pages
            ),
            ListingError::CollectionNotFound(id) => write!(f, "collection not found: {}", id),
            ListingError::Store(e) => write!(f, "store error: {}", e),
            ListingError::Inconsistent(e) => write!(f, "inconsistent pagination: {}", e),
        }
    }
}

impl Error for ListingError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ListingError::Store(e) => Some(e),
            ListingError::Inconsistent(e) => Some(e),
            _ => None,
        }
    }
}

impl From<StoreError> for ListingError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::CollectionNotFound(id) => ListingError::CollectionNotFound(id),
            other => ListingError::Store(other),
        }
    }
}

impl From<SliceError> for ListingError {
    fn from(err: SliceError) -> Self {
        ListingError::Inconsistent(err)
    }
}

impl ListingError {
    /// Map this error to an HTTP-style status code.
    pub fn status_code(&self) -> u16 {
        match self {
            ListingError::MissingCollectionId => 400,
            ListingError::MalformedQuery(_) => 400,
            ListingError::DuplicateParameter(_) => 400,
            ListingError::InvalidOrder(_) => 400,
            ListingError::InvalidPlatform(_) => 400,
            ListingError::InvalidPage(_) => 400,
            ListingError::PageOutOfRange { .. } => 400,
            ListingError::CollectionNotFound(_) => 404,
            ListingError::Store(_) => 500,
            ListingError::Inconsistent(_) => 500,
        }
    }

    /// True for failures on our side rather than the caller's.
    pub fn is_internal(&self) -> bool {
        self.status_code() >= 500
    }
}
