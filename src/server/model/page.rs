//! Shared pagination and sort types for list operations.

/// Default page number for list queries (pages are 1-indexed at the API).
pub const DEFAULT_PAGE: u64 = 1;

/// Default number of items per page.
pub const DEFAULT_LIMIT: u64 = 10;

/// Sort direction for list queries. Listings default to newest-first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDir {
    Asc,
    #[default]
    Desc,
}

impl SortDir {
    /// Parses a query-string value, defaulting to descending for anything
    /// other than an explicit "asc".
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("asc") {
            Self::Asc
        } else {
            Self::Desc
        }
    }
}
