//! Page-draining loop
//!
//! Drives a page-fetch function from the start page until the server
//! reports no further pages, collecting every item in API order.

use super::types::{ListOptions, NextPage, Page};
use crate::error::Result;
use std::future::Future;
use tracing::debug;

/// Drains a paginated list endpoint into a single collection
#[derive(Debug, Clone, Copy, Default)]
pub struct Paginator {
    options: ListOptions,
}

impl Paginator {
    /// Create a paginator starting at page 1 with the default page size
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paginator from explicit base options
    pub fn with_options(options: ListOptions) -> Self {
        Self { options }
    }

    /// Set the first page to fetch
    #[must_use]
    pub fn start_page(mut self, page: u32) -> Self {
        self.options = self.options.with_page(page);
        self
    }

    /// Set the page size sent with every request
    #[must_use]
    pub fn per_page(mut self, per_page: u32) -> Self {
        self.options = self.options.with_per_page(per_page);
        self
    }

    /// Base options used for the first request
    pub fn options(&self) -> ListOptions {
        self.options
    }

    /// Fetch every page and return all items in order.
    ///
    /// The first failing fetch aborts the run and its error is returned
    /// unchanged; items gathered before it are dropped.
    pub async fn collect<T, F, Fut>(&self, mut fetch: F) -> Result<Vec<T>>
    where
        F: FnMut(ListOptions) -> Fut,
        Fut: Future<Output = Result<Page<T>>>,
    {
        let mut options = self.options;
        let mut items = Vec::new();

        loop {
            let Page {
                items: page_items,
                response,
            } = fetch(options).await?;

            let received = page_items.len();
            items.extend(page_items);
            debug!(
                page = options.page,
                received,
                total = items.len(),
                "Fetched page"
            );

            match response.next_page(options.page) {
                NextPage::Continue(next) => options.page = next,
                NextPage::Done => break,
            }
        }

        Ok(items)
    }
}

/// Drain a paginated endpoint from page 1 with the default page size
pub async fn paginate<T, F, Fut>(fetch: F) -> Result<Vec<T>>
where
    F: FnMut(ListOptions) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    Paginator::new().collect(fetch).await
}
