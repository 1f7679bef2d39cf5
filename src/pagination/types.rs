//! Pagination types
//!
//! Request options sent with every list call and the pagination metadata
//! that list responses carry back.

use serde::{Deserialize, Serialize};
use url::Url;

/// Page size used when the caller does not pick one
pub const DEFAULT_PER_PAGE: u32 = 200;

// ============================================================================
// Request Options
// ============================================================================

/// Options for a single list request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListOptions {
    /// Page number, starting at 1
    pub page: u32,
    /// Items per page
    pub per_page: u32,
}

impl Default for ListOptions {
    fn default() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl ListOptions {
    /// Create options for the first page
    pub fn new() -> Self {
        Self::default()
    }

    /// Start at a given page (0 is treated as 1)
    #[must_use]
    pub fn with_page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    /// Use a fixed page size (0 is treated as 1)
    #[must_use]
    pub fn with_per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// The same options advanced by one page
    #[must_use]
    pub fn next(self) -> Self {
        Self {
            page: self.page + 1,
            ..self
        }
    }

    /// Query parameters for this request
    pub fn query(&self) -> [(&'static str, String); 2] {
        [
            ("page", self.page.to_string()),
            ("per_page", self.per_page.to_string()),
        ]
    }
}

// ============================================================================
// Response Metadata
// ============================================================================

/// Pagination links of a list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Links {
    /// Page navigation URLs
    #[serde(default)]
    pub pages: Option<Pages>,
}

/// Navigation URLs between pages
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pages {
    #[serde(default)]
    pub first: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub last: Option<String>,
}

/// Totals of a list response
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Meta {
    /// Total items across all pages
    #[serde(default)]
    pub total: Option<u64>,
}

/// Response descriptor carried next to a page of items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub links: Option<Links>,
    #[serde(default)]
    pub meta: Option<Meta>,
}

/// Result of deciding whether to keep paging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextPage {
    /// Fetch this page next
    Continue(u32),
    /// No more pages
    Done,
}

impl NextPage {
    /// Check if this is a done result
    pub fn is_done(&self) -> bool {
        matches!(self, Self::Done)
    }

    /// Check if this is a continue result
    pub fn is_continue(&self) -> bool {
        matches!(self, Self::Continue(_))
    }
}

impl Response {
    /// Create a descriptor with a `next` link
    pub fn with_next(url: impl Into<String>) -> Self {
        Self {
            links: Some(Links {
                pages: Some(Pages {
                    next: Some(url.into()),
                    ..Pages::default()
                }),
            }),
            meta: None,
        }
    }

    /// Create a descriptor with only a `last` link
    pub fn with_last(url: impl Into<String>) -> Self {
        Self {
            links: Some(Links {
                pages: Some(Pages {
                    last: Some(url.into()),
                    ..Pages::default()
                }),
            }),
            meta: None,
        }
    }

    fn pages(&self) -> Option<&Pages> {
        self.links.as_ref()?.pages.as_ref()
    }

    /// Page number of the `last` link, if it parses
    pub fn last_page(&self) -> Option<u32> {
        let last = self.pages()?.last.as_deref()?;
        page_param(last)
    }

    /// Whether a non-empty `next` link is present
    pub fn has_next(&self) -> bool {
        self.pages()
            .and_then(|p| p.next.as_deref())
            .is_some_and(|next| !next.trim().is_empty())
    }

    /// Decide which page follows `current`.
    ///
    /// Missing or malformed metadata means there is nothing more to fetch.
    pub fn next_page(&self, current: u32) -> NextPage {
        let Some(following) = current.checked_add(1) else {
            return NextPage::Done;
        };
        if self.has_next() {
            return NextPage::Continue(following);
        }
        match self.last_page() {
            Some(last) if current < last => NextPage::Continue(following),
            _ => NextPage::Done,
        }
    }
}

/// Extract the `page` query parameter from a link URL
fn page_param(link: &str) -> Option<u32> {
    let url = Url::parse(link).ok()?;
    url.query_pairs()
        .find(|(key, _)| key == "page")
        .and_then(|(_, value)| value.parse().ok())
}

// ============================================================================
// Page
// ============================================================================

/// One page of typed items and the descriptor it came with
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub response: Response,
}

impl<T> Page<T> {
    /// Create a page
    pub fn new(items: Vec<T>, response: Response) -> Self {
        Self { items, response }
    }

    /// Create a page that reports no further pages
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            response: Response::default(),
        }
    }

    /// Convert the items, keeping order and metadata
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            response: self.response,
        }
    }
}
