//! HTTP client module
//!
//! Thin async JSON client over reqwest used by the API services.
//!
//! # Features
//!
//! - **Bearer Token**: Sent with every request when configured
//! - **Base URL**: Relative paths are joined onto it; absolute URLs pass through
//! - **Error Mapping**: Non-success statuses become `Error::HttpStatus`

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
