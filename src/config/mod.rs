// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Configuration management for photo-catalog

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Repository that holds the photos
pub const DEFAULT_OWNER: &str = "StevenMKay";
pub const DEFAULT_REPO: &str = "DRaz-Photography";
pub const DEFAULT_PHOTOS_PATH: &str = "Photos";

/// Main application configuration
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct AppConfig {
    /// Where the listing comes from and where raw files are served
    #[serde(default)]
    pub source: SourceConfig,

    /// Which listing entries count as images
    #[serde(default)]
    pub image: ImageFilterConfig,

    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Static dataset to use when the live listing is unavailable
    #[serde(default)]
    pub fallback: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SourceConfig {
    #[serde(default = "default_api_url")]
    pub api_url: String,
    #[serde(default = "default_raw_url")]
    pub raw_url: String,
    #[serde(default = "default_owner")]
    pub owner: String,
    #[serde(default = "default_repo")]
    pub repo: String,
    #[serde(default = "default_path")]
    pub path: String,
    #[serde(default = "default_branch")]
    pub branch: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ImageFilterConfig {
    /// Lower-case extensions without the leading dot
    #[serde(default = "default_formats")]
    pub formats: Vec<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

// Default value functions
fn default_api_url() -> String { "https://api.github.com".to_string() }
fn default_raw_url() -> String { "https://raw.githubusercontent.com".to_string() }
fn default_owner() -> String { DEFAULT_OWNER.to_string() }
fn default_repo() -> String { DEFAULT_REPO.to_string() }
fn default_path() -> String { DEFAULT_PHOTOS_PATH.to_string() }
fn default_branch() -> String { "main".to_string() }
fn default_timeout() -> u64 { 30 }
fn default_user_agent() -> String {
    concat!("photo-catalog/", env!("CARGO_PKG_VERSION")).to_string()
}

fn default_formats() -> Vec<String> {
    vec!["jpg", "jpeg", "png", "webp", "gif"]
        .into_iter()
        .map(String::from)
        .collect()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            api_url: default_api_url(),
            raw_url: default_raw_url(),
            owner: default_owner(),
            repo: default_repo(),
            path: default_path(),
            branch: default_branch(),
        }
    }
}

impl Default for ImageFilterConfig {
    fn default() -> Self {
        Self {
            formats: default_formats(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl SourceConfig {
    /// Contents endpoint for the configured directory
    pub fn listing_url(&self) -> String {
        format!(
            "{}/repos/{}/{}/contents/{}",
            self.api_url.trim_end_matches('/'),
            self.owner,
            self.repo,
            self.path.trim_matches('/'),
        )
    }
}

impl AppConfig {
    /// Load configuration from a JSON file
    pub fn load(path: &Path) -> crate::Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Self = serde_json::from_str(&content).map_err(|e| {
                crate::CatalogError::Config(format!("Failed to parse config: {}", e))
            })?;
            config.validate()?;
            Ok(config)
        } else {
            tracing::info!("Config file not found at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Save configuration to a JSON file
    pub fn save(&self, path: &Path) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Reject settings that would make every request or URL meaningless
    pub fn validate(&self) -> crate::Result<()> {
        let source = &self.source;
        for (field, value) in [
            ("source.api_url", &source.api_url),
            ("source.raw_url", &source.raw_url),
            ("source.owner", &source.owner),
            ("source.repo", &source.repo),
            ("source.branch", &source.branch),
        ] {
            if value.trim().is_empty() {
                return Err(crate::CatalogError::Config(format!("{} must not be empty", field)));
            }
        }

        if self.image.formats.is_empty() {
            return Err(crate::CatalogError::Config(
                "image.formats must list at least one extension".to_string(),
            ));
        }

        // An empty extension would match every name ending in "."
        if let Some(blank) = self
            .image
            .formats
            .iter()
            .find(|ext| ext.trim().trim_start_matches('.').is_empty())
        {
            return Err(crate::CatalogError::Config(format!(
                "image.formats contains a blank extension: {:?}",
                blank
            )));
        }

        Ok(())
    }
}
