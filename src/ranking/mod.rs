//! Ranking - the pagination engine.
//!
//! A page is computed without sorting the whole collection:
//!
//! 1. [`count_compatible`] scans every member once to size the listing.
//! 2. [`retain_top_k`] streams the accepted members through a bounded
//!    [`TopK`], keeping only the best `page * PAGE_SIZE`.
//! 3. [`rank`] orders that small set.
//! 4. [`slice_page`] cuts the requested window out of it.
//!
//! Every step is request-local and holds no shared state.

mod order;
mod slice;
mod top_k;

pub use order::{SortOrder, UnknownSortOrder};
pub use slice::{slice_page, SliceError};
pub use top_k::{count_compatible, rank, retain_top_k, Ranked, TopK};

/// Cards per listing page.
pub const PAGE_SIZE: usize = 12;

/// Listings never report more pages than this, however large the collection.
pub const MAX_PAGES: usize = 20;

/// Pages needed for `compatible` items, capped at [`MAX_PAGES`].
pub fn total_pages(compatible: usize) -> usize {
    compatible.div_ceil(PAGE_SIZE).min(MAX_PAGES)
}
