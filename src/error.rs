//! Error types for oceanctl
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for oceanctl
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    #[error("Failed to decode response: {message}")]
    Decode { message: String },

    // ============================================================================
    // Wait Errors
    // ============================================================================
    #[error("{kind} ({id}) entered status `{state}`")]
    WaitErrorState {
        kind: String,
        id: String,
        state: String,
    },

    #[error("timeout waiting for {kind} ({id}) to become {desired}")]
    WaitTimeout {
        kind: String,
        id: String,
        desired: String,
    },

    #[error("interrupted while waiting for {kind} ({id})")]
    Interrupted { kind: String, id: String },

    // ============================================================================
    // Command Errors
    // ============================================================================
    #[error("operation aborted")]
    Aborted,

    #[error("unsupported attachment type: {0}")]
    UnsupportedAttachmentType(String),

    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// Create a not-found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Create a decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Check if this error means the requested resource does not exist.
    ///
    /// API errors are matched on status where one is available and on the
    /// rendered message otherwise, so errors wrapped by callers still match.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound { .. } => true,
            Error::HttpStatus { status: 404, .. } => true,
            other => other.to_string().contains("not found"),
        }
    }
}

/// Result type alias for oceanctl
pub type Result<T> = std::result::Result<T, Error>;
