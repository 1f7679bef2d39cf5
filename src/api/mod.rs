//! API module
//!
//! Typed services over the REST endpoints used by the CLI.
//!
//! # Overview
//!
//! - `models` - resource and request shapes
//! - `DropletsService` - droplets and their sub-resources
//! - `VpcsService` - partner interconnect attachments
//!
//! Every list call drains all pages through the [`Paginator`] before
//! returning, so callers always see complete collections.

mod droplets;
pub mod models;
mod vpcs;

pub use droplets::{DropletsService, HttpDropletsService};
pub use models::*;
pub use vpcs::{HttpVpcsService, VpcsService};

use crate::config::Config;
use crate::error::{Error, Result};
use crate::http::{HttpClient, HttpClientConfig, RequestConfig};
use crate::pagination::{Page, Paginator, Response};
use crate::types::JsonValue;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tracing::warn;

/// Service bundle built from a config
#[derive(Debug, Clone)]
pub struct Client {
    /// Droplet endpoints
    pub droplets: Arc<HttpDropletsService>,
    /// VPC endpoints
    pub vpcs: Arc<HttpVpcsService>,
}

impl Client {
    /// Build the HTTP client and services for `config`.
    ///
    /// Fails when no access token is configured.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http_config = HttpClientConfig::builder()
            .base_url(config.api_url.clone())
            .access_token(config.require_token()?)
            .build();
        let http = Arc::new(HttpClient::with_config(http_config)?);

        Ok(Self {
            droplets: Arc::new(
                HttpDropletsService::new(Arc::clone(&http))
                    .with_per_page(config.per_page)
                    .with_wait_policy(config.wait.policy()),
            ),
            vpcs: Arc::new(HttpVpcsService::new(http).with_per_page(config.per_page)),
        })
    }
}

// ============================================================================
// Envelopes
// ============================================================================

/// Take the object stored under `key` in a response body
pub(crate) fn item_from_body<T: DeserializeOwned>(mut body: JsonValue, key: &str) -> Result<T> {
    let value = body
        .get_mut(key)
        .map(JsonValue::take)
        .ok_or_else(|| Error::decode(format!("response has no `{key}` field")))?;
    Ok(serde_json::from_value(value)?)
}

/// Split a list response into the items under `key` and its pagination data
pub(crate) fn page_from_body<T: DeserializeOwned>(mut body: JsonValue, key: &str) -> Result<Page<T>> {
    let items = match body.get_mut(key).map(JsonValue::take) {
        Some(JsonValue::Null) | None => Vec::new(),
        Some(value) => serde_json::from_value(value)?,
    };
    Ok(Page::new(items, response_from_body(body)))
}

/// Read the pagination data left in a list response.
///
/// Badly typed `links` or `meta` end the listing instead of failing it.
pub(crate) fn response_from_body(body: JsonValue) -> Response {
    serde_json::from_value(body).unwrap_or_else(|e| {
        warn!(error = %e, "Ignoring malformed pagination metadata");
        Response::default()
    })
}

/// Drain every page of a list endpoint.
///
/// `filters` are sent with every request ahead of the paging parameters.
pub(crate) async fn list_all<T: DeserializeOwned>(
    client: &HttpClient,
    path: &str,
    key: &str,
    filters: &[(&str, &str)],
    per_page: u32,
) -> Result<Vec<T>> {
    Paginator::new()
        .per_page(per_page)
        .collect(move |options| async move {
            let mut request = RequestConfig::new();
            for (name, value) in filters {
                request = request.query(*name, *value);
            }
            for (name, value) in options.query() {
                request = request.query(name, value);
            }
            let body: JsonValue = client.get_json_with_config(path, request).await?;
            page_from_body(body, key)
        })
        .await
}

#[cfg(test)]
mod tests;
