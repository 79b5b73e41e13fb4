use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::catalog::Item;

/// The rank comparator a listing is ordered by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SortOrder {
    /// Most thumbs-up first.
    Popular,
    /// Most recently published first.
    #[default]
    New,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Popular => "popular",
            SortOrder::New => "new",
        }
    }

    /// Compare two items by rank. `Less` means `a` is listed before `b`.
    ///
    /// Equal scores fall back to the item id, ascending, so the order is
    /// total and does not depend on the order the store returned members in.
    pub fn compare(&self, a: &Item, b: &Item) -> Ordering {
        let primary = match self {
            SortOrder::Popular => b.thumbs_up.cmp(&a.thumbs_up),
            SortOrder::New => b.published.cmp(&a.published),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortOrder(pub String);

impl fmt::Display for UnknownSortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort order: {}", self.0)
    }
}

impl std::error::Error for UnknownSortOrder {}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "popular" => Ok(SortOrder::Popular),
            "new" => Ok(SortOrder::New),
            other => Err(UnknownSortOrder(other.to_string())),
        }
    }
}
