// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! GitHub contents API client for directory listings

use async_trait::async_trait;
use reqwest::header::{ACCEPT, USER_AGENT};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::config::{AppConfig, SourceConfig};
use crate::{CatalogError, Result};

/// One entry of a directory listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingEntry {
    pub name: String,
    /// `"file"`, `"dir"`, `"symlink"` or `"submodule"`
    #[serde(rename = "type")]
    pub entry_type: String,
    #[serde(default)]
    pub download_url: Option<String>,
}

impl ListingEntry {
    pub fn is_file(&self) -> bool {
        self.entry_type == "file"
    }
}

/// Anything that can produce a directory listing
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch the listing once; no retries
    async fn fetch_listing(&self) -> Result<Vec<ListingEntry>>;
}

/// Contents API client bound to one repository directory
pub struct GitHubClient {
    client: Client,
    listing_url: String,
    user_agent: String,
}

impl GitHubClient {
    /// Create a client for the directory named in `config.source`
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http.timeout_secs))
            .build()?;

        Ok(Self::with_client(client, &config.source, &config.http.user_agent))
    }

    /// Reuse an existing HTTP client
    pub fn with_client(client: Client, source: &SourceConfig, user_agent: &str) -> Self {
        Self {
            client,
            listing_url: source.listing_url(),
            user_agent: user_agent.to_string(),
        }
    }

    pub fn listing_url(&self) -> &str {
        &self.listing_url
    }
}

#[async_trait]
impl ListingSource for GitHubClient {
    async fn fetch_listing(&self) -> Result<Vec<ListingEntry>> {
        debug!("Requesting listing: {}", self.listing_url);

        // GitHub rejects requests without a user agent
        let response = self
            .client
            .get(&self.listing_url)
            .header(USER_AGENT, &self.user_agent)
            .header(ACCEPT, "application/vnd.github+json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::FetchStatus {
                status,
                url: self.listing_url.clone(),
            });
        }

        let body = response.text().await?;
        let entries: Vec<ListingEntry> = serde_json::from_str(&body)?;

        debug!("Listing returned {} entries", entries.len());
        Ok(entries)
    }
}

/// Fixed listing held in memory
#[derive(Debug, Clone, Default)]
pub struct StaticListing {
    entries: Vec<ListingEntry>,
}

impl StaticListing {
    pub fn new(entries: Vec<ListingEntry>) -> Self {
        Self { entries }
    }
}

#[async_trait]
impl ListingSource for StaticListing {
    async fn fetch_listing(&self) -> Result<Vec<ListingEntry>> {
        Ok(self.entries.clone())
    }
}
