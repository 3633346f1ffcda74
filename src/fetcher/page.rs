use crate::model::Snowflake;
use serde::Serialize;

/// Pagination state derived from one response
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
    pub end_cursor: Option<Snowflake>,
}

impl PageInfo {
    /// Derive page info from the raw items of a response
    ///
    /// Discord has no "more results" flag. A page exactly as long as the
    /// requested limit is assumed to have a successor, so a final page that
    /// happens to be full costs one extra request that comes back empty.
    ///
    /// The end cursor is read from the raw items because some normalized
    /// records no longer expose the id the endpoint pages on.
    pub fn from_raw<R>(raw: &[R], limit: usize, cursor: impl Fn(&R) -> &Snowflake) -> Self {
        Self {
            has_next_page: raw.len() == limit,
            end_cursor: raw.last().map(|item| cursor(item).clone()),
        }
    }
}

/// One page of normalized results
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResultPage<T> {
    pub page_info: PageInfo,
    pub results: Vec<T>,
}
