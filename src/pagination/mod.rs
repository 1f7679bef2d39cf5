//! Pagination module
//!
//! Turns a paginated list endpoint into one ordered `Vec<T>`.
//!
//! # Overview
//!
//! List calls take a [`ListOptions`] (page number and page size) and return a
//! [`Page`] of typed items plus the [`Response`] descriptor with the
//! server's pagination links. The [`Paginator`] keeps requesting the next
//! page until the descriptor reports no more, stopping on the first error.

mod paginator;
mod types;

pub use paginator::{paginate, Paginator};
pub use types::{ListOptions, Links, Meta, NextPage, Page, Pages, Response, DEFAULT_PER_PAGE};
