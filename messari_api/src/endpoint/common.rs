//! Shared endpoint infrastructure: the [`Query`] trait, [`PaginationOptions`], and [`build_endpoint`].

use std::str::FromStr;

/// Results per page when the caller asks for fewer than one.
pub const DEFAULT_LIMIT: i64 = 20;
/// Largest page size the service accepts.
pub const MAX_LIMIT: i64 = 500;

/// Trait implemented by everything that contributes query parameters to an endpoint.
///
/// Pairs are emitted in a fixed order so that outgoing requests are reproducible.
pub trait Query {
    /// Returns the `(name, value)` pairs this query contributes, already normalized.
    fn query_pairs(&self) -> Vec<(&'static str, String)>;
}

impl<Q: Query> Query for Option<Q> {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        match self {
            Some(query) => query.query_pairs(),
            None => Vec::new(),
        }
    }
}

impl<A: Query, B: Query> Query for (A, B) {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = self.0.query_pairs();
        pairs.extend(self.1.query_pairs());
        pairs
    }
}

/// Composes `base_path` with the rendered query string of `query`.
///
/// Returns `base_path` unchanged when there is no query or it renders no pairs.
/// Values come from closed sets (integers, enum names) and are rendered verbatim.
pub fn build_endpoint(base_path: &str, query: Option<&dyn Query>) -> String {
    let pairs = match query {
        Some(query) => query.query_pairs(),
        None => return base_path.to_string(),
    };
    if pairs.is_empty() {
        return base_path.to_string();
    }
    let rendered = pairs
        .iter()
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");
    format!("{}?{}", base_path, rendered)
}

/// Sort key accepted by paginated endpoints.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortBy {
    /// Sort by asset id. This is the only key the service accepts.
    #[default]
    Id,
}
impl std::fmt::Display for SortBy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                SortBy::Id => "id",
            }
        )?;
        Ok(())
    }
}
impl FromStr for SortBy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(SortBy::Id),
            _ => Err(()),
        }
    }
}

/// Pagination fields shared by the list endpoints. Unset fields are not sent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PaginationOptions {
    /// Page number (1-indexed). Values below 1 are sent as 1.
    pub page: Option<i64>,
    /// Results per page. Values below 1 are sent as 20, values above 500 as 500.
    pub limit: Option<i64>,
    /// Sort key.
    pub sort: Option<SortBy>,
}

impl PaginationOptions {
    /// Sets the page number (1-indexed).
    pub fn with_page(mut self, page: i64) -> Self {
        self.page = Some(page);
        self
    }

    /// Sets the number of results per page.
    pub fn with_limit(mut self, limit: i64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the sort key.
    pub fn with_sort(mut self, sort: SortBy) -> Self {
        self.sort = Some(sort);
        self
    }
}

impl Query for PaginationOptions {
    fn query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(page) = self.page {
            pairs.push(("page", format_page(page).to_string()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", format_limit(limit).to_string()));
        }
        if let Some(sort) = self.sort {
            pairs.push(("sort", sort.to_string()));
        }
        pairs
    }
}

fn format_page(page: i64) -> i64 {
    if page < 1 {
        1
    } else {
        page
    }
}

fn format_limit(limit: i64) -> i64 {
    if limit < 1 {
        DEFAULT_LIMIT
    } else {
        limit.min(MAX_LIMIT)
    }
}
