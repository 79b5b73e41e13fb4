//! Storefront - composes the ranking engine with a catalog store.

use tracing::{debug, error};

use super::{ListingError, ListingRequest};
use crate::catalog::{Card, CollectionPage};
use crate::ranking::{self, PAGE_SIZE};
use crate::store::CatalogStore;

/// Serves collection listing pages from a [`CatalogStore`].
///
/// Holds no per-request state, so one instance can serve any number of
/// concurrent requests.
pub struct Storefront<S> {
    store: S,
}

impl<S: CatalogStore> Storefront<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Validate raw request parameters and serve the page they name.
    pub fn list(
        &self,
        collection_id: Option<&str>,
        query: &[(String, String)],
    ) -> Result<CollectionPage, ListingError> {
        let request = ListingRequest::parse(collection_id, query)?;
        self.collection_page(&request)
    }

    /// Compute one page of a collection listing.
    pub fn collection_page(
        &self,
        request: &ListingRequest,
    ) -> Result<CollectionPage, ListingError> {
        let id = request.collection_id.as_str();
        let members = self.store.members(id)?;
        let name = self.store.collection_name(id)?;

        let compatible = ranking::count_compatible(&members, request.platform);
        let total_pages = ranking::total_pages(compatible);
        if request.page > total_pages {
            return Err(ListingError::PageOutOfRange {
                page: request.page,
                total_pages,
            });
        }

        let k = request.page * PAGE_SIZE;
        let retained = ranking::retain_top_k(&members, request.platform, request.order, k);
        let ranked = ranking::rank(retained, request.order);
        let window = ranking::slice_page(&ranked, request.page, PAGE_SIZE, total_pages)
            .inspect_err(|err| {
                error!(collection = id, compatible, k, error = %err, "page slice out of range");
            })?;

        debug!(
            collection = id,
            order = %request.order,
            platform = %request.platform,
            page = request.page,
            total_pages,
            compatible,
            cards = window.len(),
            "served collection page"
        );

        Ok(CollectionPage {
            id: id.to_string(),
            name,
            pages: total_pages,
            cards: window.iter().map(|item| item.to_card()).collect::<Vec<Card>>(),
        })
    }
}
