// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Error types for photo-catalog

use reqwest::StatusCode;
use thiserror::Error;

/// Result type alias for catalog operations
pub type Result<T> = std::result::Result<T, CatalogError>;

/// Catalog error types
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("File system error: {0}")]
    FileSystem(#[from] std::io::Error),

    #[error("Listing request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Listing endpoint {url} returned status {status}")]
    FetchStatus { status: StatusCode, url: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CatalogError {
    /// HTTP status carried by the error, if the server answered at all
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::FetchStatus { status, .. } => Some(*status),
            Self::Fetch(e) => e.status(),
            _ => None,
        }
    }
}
