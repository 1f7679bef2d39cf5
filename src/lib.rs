// Allow common clippy pedantic lints that aren't critical for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::ref_option)]
#![allow(clippy::unused_self)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::items_after_statements)]
#![allow(clippy::unnecessary_wraps)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::needless_pass_by_value)]
#![allow(clippy::unused_async)]

//! # oceanctl
//!
//! A command-line client for a cloud provider's REST API, covering droplets
//! and partner interconnect attachments.
//!
//! ## Features
//!
//! - **Complete Listings**: every list call drains all pages before returning
//! - **Waiting**: `--wait` polls a resource until it reaches a target state
//! - **Text or JSON Output**: column selection with `--format`
//! - **Layered Config**: YAML file, environment, then flags
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use oceanctl::api::{Client, DropletsService};
//! use oceanctl::config::Config;
//!
//! #[tokio::main]
//! async fn main() -> oceanctl::Result<()> {
//!     let config = Config::load(None, Default::default())?;
//!     let client = Client::from_config(&config)?;
//!
//!     for droplet in client.droplets.list().await? {
//!         println!("{} {}", droplet.id, droplet.name);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                 CLI (clap) → Runner                      │
//! │   droplet ...            network interconnect-attachment │
//! └──────────────────────────────────────────────────────────┘
//!                            │
//! ┌──────────────┬───────────┴──────────┬────────────────────┐
//! │  Services    │  Paginator           │  StateWaiter       │
//! ├──────────────┼──────────────────────┼────────────────────┤
//! │ Droplets     │ next / last links    │ 360 × 5s budget    │
//! │ VPCs         │ page + per_page      │ progress dots      │
//! └──────────────┴──────────────────────┴────────────────────┘
//!                            │
//!                   HTTP client (reqwest)
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Runtime configuration
pub mod config;

/// JSON HTTP client
pub mod http;

/// Page-draining for list endpoints
pub mod pagination;

/// Poll-until-state waiting
pub mod wait;

/// Typed API services
pub mod api;

/// Table and JSON rendering
pub mod display;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use pagination::{paginate, ListOptions, Page, Paginator};
pub use wait::{StateWaiter, Stateful, WaitOutcome, WaitPolicy};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
