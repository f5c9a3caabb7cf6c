//! Page-number pagination over an ordered slice.
//!
//! # Design
//! `PageRequest` is always valid once built: out-of-range or malformed inputs
//! are replaced by defaults, never rejected. `PageRequest::apply` works on a
//! plain slice so the store can run it under a single read lock.

/// Page used when none (or a non-positive one) is requested.
pub const DEFAULT_PAGE: u64 = 1;
/// Items per page used when no (or a non-positive) limit is requested.
pub const DEFAULT_LIMIT: u64 = 10;
/// Upper bound for the per-page limit.
pub const MAX_LIMIT: u64 = 100;

/// A normalized page selection: `page >= 1`, `1 <= limit <= MAX_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    page: u64,
    limit: u64,
}

impl Default for PageRequest {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl PageRequest {
    pub fn new(page: Option<i64>, limit: Option<i64>) -> Self {
        let page = page
            .and_then(|p| u64::try_from(p).ok())
            .filter(|&p| p > 0)
            .unwrap_or(DEFAULT_PAGE);
        let limit = limit
            .and_then(|l| u64::try_from(l).ok())
            .filter(|&l| l > 0)
            .map_or(DEFAULT_LIMIT, |l| l.min(MAX_LIMIT));
        Self { page, limit }
    }

    /// Builds a request from raw query values. Values that are not integers
    /// are ignored.
    pub fn from_query(page: Option<&str>, limit: Option<&str>) -> Self {
        let parse = |raw: Option<&str>| raw.and_then(|s| s.parse::<i64>().ok());
        Self::new(parse(page), parse(limit))
    }

    pub fn page(&self) -> u64 {
        self.page
    }

    pub fn limit(&self) -> u64 {
        self.limit
    }

    /// Index of the first item on this page.
    pub fn offset(&self) -> u64 {
        (self.page - 1).saturating_mul(self.limit)
    }

    /// Selects this page out of `items`, cloning only the selected entries.
    pub fn apply<T: Clone>(&self, items: &[T]) -> Page<T> {
        let total_count = items.len() as u64;
        let total_pages = total_count.div_ceil(self.limit).max(1);
        let offset = self.offset();
        let has_prev = self.page > 1;

        if offset >= total_count {
            return Page {
                items: Vec::new(),
                total_count,
                current_page: self.page,
                total_pages,
                per_page: self.limit,
                has_next: false,
                has_prev,
            };
        }

        let end = offset.saturating_add(self.limit).min(total_count);
        Page {
            items: items[offset as usize..end as usize].to_vec(),
            total_count,
            current_page: self.page,
            total_pages,
            per_page: self.limit,
            has_next: self.page < total_pages,
            has_prev,
        }
    }
}

/// One page of results plus the metadata needed to navigate the rest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u64,
    pub total_pages: u64,
    pub per_page: u64,
    pub has_next: bool,
    pub has_prev: bool,
}
