use std::fmt;

/// The requested page does not fit the ranked sequence it is cut from.
///
/// With a consistent page count and retention size this cannot happen, so
/// callers treat it as an internal fault rather than a bad request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceError {
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub len: usize,
}

impl fmt::Display for SliceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "page {} of {} (page size {}) is out of range for {} ranked items",
            self.page, self.total_pages, self.page_size, self.len
        )
    }
}

impl std::error::Error for SliceError {}

/// Cut page `page` (1-based) out of a best-first sequence.
///
/// The last page takes everything from its start to the end of `ranked`;
/// any other page takes exactly `page_size` elements.
pub fn slice_page<T>(
    ranked: &[T],
    page: usize,
    page_size: usize,
    total_pages: usize,
) -> Result<&[T], SliceError> {
    let err = || SliceError {
        page,
        page_size,
        total_pages,
        len: ranked.len(),
    };

    let start = page.checked_sub(1).ok_or_else(err)? * page_size;
    let window = if page == total_pages {
        ranked.get(start..)
    } else {
        ranked.get(start..start + page_size)
    };
    window.ok_or_else(err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn middle_page_is_exact() {
        let ranked: Vec<u32> = (0..36).collect();
        let page = slice_page(&ranked, 2, 12, 3).unwrap();
        assert_eq!(page, &ranked[12..24]);
    }

    #[test]
    fn last_page_takes_the_rest() {
        let ranked: Vec<u32> = (0..25).collect();
        assert_eq!(slice_page(&ranked, 3, 12, 3).unwrap(), &[24]);
    }

    #[test]
    fn single_page_takes_everything() {
        let ranked: Vec<u32> = (0..5).collect();
        assert_eq!(slice_page(&ranked, 1, 12, 1).unwrap(), &ranked[..]);
    }

    #[test]
    fn first_page_of_many_is_bounded() {
        let ranked: Vec<u32> = (0..12).collect();
        assert_eq!(slice_page(&ranked, 1, 12, 20).unwrap().len(), 12);
    }

    #[test]
    fn start_past_end_is_an_error() {
        let ranked: Vec<u32> = (0..10).collect();
        let err = slice_page(&ranked, 3, 12, 3).unwrap_err();
        assert_eq!(err.len, 10);
        assert_eq!(err.page, 3);
    }

    #[test]
    fn short_middle_page_is_an_error() {
        let ranked: Vec<u32> = (0..20).collect();
        assert!(slice_page(&ranked, 2, 12, 3).is_err());
    }

    #[test]
    fn page_zero_is_an_error() {
        let ranked: Vec<u32> = (0..20).collect();
        assert!(slice_page(&ranked, 0, 12, 2).is_err());
    }
}
