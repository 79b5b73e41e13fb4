use super::ListingError;
use crate::catalog::PlatformFilter;
use crate::ranking::SortOrder;

/// A validated request for one page of a collection listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRequest {
    pub collection_id: String,
    pub order: SortOrder,
    pub platform: PlatformFilter,
    /// 1-based.
    pub page: usize,
}

impl ListingRequest {
    /// First page of a collection, newest first, every platform.
    pub fn new(collection_id: impl Into<String>) -> Self {
        Self {
            collection_id: collection_id.into(),
            order: SortOrder::default(),
            platform: PlatformFilter::default(),
            page: 1,
        }
    }

    pub fn order(mut self, order: SortOrder) -> Self {
        self.order = order;
        self
    }

    pub fn platform(mut self, platform: PlatformFilter) -> Self {
        self.platform = platform;
        self
    }

    pub fn page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }

    /// Validate a raw request: the collection id from the path plus the
    /// decoded query pairs. Unrecognized query parameters are ignored.
    pub fn parse(
        collection_id: Option<&str>,
        query: &[(String, String)],
    ) -> Result<Self, ListingError> {
        let collection_id = collection_id
            .filter(|id| !id.is_empty())
            .ok_or(ListingError::MissingCollectionId)?;

        let order = match single(query, "order")? {
            Some(value) => value
                .parse()
                .map_err(|_| ListingError::InvalidOrder(value.to_string()))?,
            None => SortOrder::default(),
        };

        let platform = match single(query, "platform")? {
            Some(value) => value
                .parse()
                .map_err(|_| ListingError::InvalidPlatform(value.to_string()))?,
            None => PlatformFilter::All,
        };

        let page = match single(query, "page")? {
            Some(value) => value
                .parse::<usize>()
                .ok()
                .filter(|page| *page >= 1)
                .ok_or_else(|| ListingError::InvalidPage(value.to_string()))?,
            None => 1,
        };

        Ok(Self {
            collection_id: collection_id.to_string(),
            order,
            platform,
            page,
        })
    }
}

/// The value of a parameter that may appear at most once.
fn single<'q>(
    query: &'q [(String, String)],
    name: &'static str,
) -> Result<Option<&'q str>, ListingError> {
    let mut values = query
        .iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value.as_str());
    let first = values.next();
    if values.next().is_some() {
        return Err(ListingError::DuplicateParameter(name));
    }
    Ok(first)
}
