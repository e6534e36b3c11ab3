//! Limit/offset pagination shared by the list endpoints.

use serde::{Deserialize, Serialize};

use crate::config::PaginationSettings;

/// Raw `?limit=&offset=` query parameters.
///
/// Kept as strings so garbage input falls back to defaults instead of
/// rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<String>,
    pub offset: Option<String>,
}

/// A resolved page window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRequest {
    pub limit: i64,
    pub offset: i64,
}

impl PageRequest {
    pub fn from_query(query: &PageQuery, settings: &PaginationSettings) -> Self {
        let limit = query
            .limit
            .as_deref()
            .and_then(|l| l.parse::<i64>().ok())
            .filter(|l| *l > 0)
            .map(|l| l.min(settings.max_limit))
            .unwrap_or(settings.default_limit);

        let offset = query
            .offset
            .as_deref()
            .and_then(|o| o.parse::<i64>().ok())
            .filter(|o| *o >= 0)
            .unwrap_or(0);

        Self { limit, offset }
    }
}

/// Paginated list envelope.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub count: i64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(results: Vec<T>, count: i64, request: PageRequest) -> Self {
        let PageRequest { limit, offset } = request;

        let next = offset
            .checked_add(limit)
            .filter(|end| *end < count)
            .map(|end| link(limit, end));
        let previous = (offset > 0).then(|| link(limit, (offset - limit).max(0)));

        Self {
            count,
            next,
            previous,
            results,
        }
    }

    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            count: self.count,
            next: self.next,
            previous: self.previous,
            results: self.results.into_iter().map(f).collect(),
        }
    }
}

fn link(limit: i64, offset: i64) -> String {
    format!("?limit={}&offset={}", limit, offset)
}
