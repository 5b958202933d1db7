use crate::constants::request;

/// Represents the `from`/`size` window of a search request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    pub from: u32,
    pub size: u32,
}

impl Pagination {
    /// No hits, aggregations only
    pub fn aggregations_only() -> Self {
        Self {
            from: request::FIRST_PAGE,
            size: request::NO_HITS,
        }
    }

    pub fn is_aggregations_only(&self) -> bool {
        self.size == request::NO_HITS
    }
}

impl Default for Pagination {
    fn default() -> Self {
        Self::aggregations_only()
    }
}
