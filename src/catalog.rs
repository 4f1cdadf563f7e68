// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Catalog loading with fallback signalling
//!
//! Loading never surfaces a network or parse error to the caller. Any failure
//! is logged and reported as `None`, which tells the caller to use its own
//! fallback dataset instead.

use chrono::Utc;
use std::path::Path;
use tracing::{info, warn};

use crate::config::AppConfig;
use crate::github::ListingSource;
use crate::photo::{filter_images, map_entries, PhotoRecord};
use crate::Result;

/// Fetch, filter and map one batch with ids starting at `base + 1`
async fn load_batch(
    source: &dyn ListingSource,
    config: &AppConfig,
    base: u64,
) -> Option<Vec<PhotoRecord>> {
    let entries = match source.fetch_listing().await {
        Ok(entries) => entries,
        Err(e) => {
            warn!("Error loading photos from listing: {}", e);
            return None;
        }
    };

    let images = filter_images(&entries, &config.image.formats);
    if images.is_empty() {
        warn!("Listing had {} entries but no images", entries.len());
        return None;
    }

    let records = map_entries(&images, base, &config.source, Utc::now());
    info!("Loaded {} photos from {} listing entries", records.len(), entries.len());
    Some(records)
}

/// Load a fresh set of records, numbered from 1
///
/// Returns `None` when the listing cannot be fetched or holds no images.
pub async fn load_photos(
    source: &dyn ListingSource,
    config: &AppConfig,
) -> Option<Vec<PhotoRecord>> {
    load_batch(source, config, 0).await
}

/// Read a static dataset of records from a JSON array on disk
pub fn load_fallback(path: &Path) -> Result<Vec<PhotoRecord>> {
    let content = std::fs::read_to_string(path)?;
    let records: Vec<PhotoRecord> = serde_json::from_str(&content)?;
    info!("Loaded {} fallback photos from {:?}", records.len(), path);
    Ok(records)
}

/// Caller-owned photo collection
#[derive(Debug, Clone, Default)]
pub struct PhotoCatalog {
    records: Vec<PhotoRecord>,
}

impl PhotoCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the contents with a freshly loaded batch
    ///
    /// On failure the catalog is left untouched and `None` is returned.
    /// Repeated refreshes from the same listing produce the same ids.
    pub async fn refresh(
        &mut self,
        source: &dyn ListingSource,
        config: &AppConfig,
    ) -> Option<&[PhotoRecord]> {
        let records = load_photos(source, config).await?;
        self.records = records;
        Some(self.records.as_slice())
    }

    /// Append a freshly loaded batch after the existing records
    ///
    /// Ids continue from the current length. Loading the same listing twice
    /// this way yields duplicate photos under new ids.
    pub async fn append_from(
        &mut self,
        source: &dyn ListingSource,
        config: &AppConfig,
    ) -> Option<&[PhotoRecord]> {
        let batch = load_batch(source, config, self.len() as u64).await?;
        self.records.extend(batch);
        Some(self.records.as_slice())
    }

    /// Add externally supplied records as they are
    pub fn extend_fallback(&mut self, records: Vec<PhotoRecord>) {
        self.records.extend(records);
    }

    pub fn records(&self) -> &[PhotoRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn into_records(self) -> Vec<PhotoRecord> {
        self.records
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::{Color, Theme};
    use crate::github::{ListingEntry, StaticListing};
    use crate::CatalogError;
    use async_trait::async_trait;
    use reqwest::StatusCode;
    use tokio_test::{assert_err, assert_ok};

    struct FailingListing;

    #[async_trait]
    impl ListingSource for FailingListing {
        async fn fetch_listing(&self) -> Result<Vec<ListingEntry>> {
            Err(CatalogError::FetchStatus {
                status: StatusCode::NOT_FOUND,
                url: "http://example.invalid/contents/Photos".to_string(),
            })
        }
    }

    fn entry(name: &str, entry_type: &str) -> ListingEntry {
        ListingEntry {
            name: name.to_string(),
            entry_type: entry_type.to_string(),
            download_url: Some(format!("https://example.invalid/{}", name)),
        }
    }

    fn sample_listing() -> StaticListing {
        StaticListing::new(vec![
            entry("README.md", "file"),
            entry("golden-gate_bridge.jpg", "file"),
            entry("thumbs", "dir"),
            entry("sunset over ocean.png", "file"),
            entry("city_street.webp", "file"),
        ])
    }

    #[tokio::test]
    async fn test_load_photos_maps_images_only() {
        let records = load_photos(&sample_listing(), &AppConfig::default()).await.unwrap();

        assert_eq!(records.len(), 3);
        assert_eq!(records[0].id, 1);
        assert_eq!(records[0].title, "Golden Gate Bridge");
        assert_eq!(records[0].theme, Theme::Architecture);
        assert_eq!(records[0].color, Color::Yellow);

        assert_eq!(records[1].id, 2);
        assert_eq!(records[1].title, "Sunset Over Ocean");
        assert_eq!(records[1].color, Color::Blue);
        assert_eq!(records[1].tags, vec!["sunset", "ocean"]);
        assert_eq!(
            records[1].src,
            "https://raw.githubusercontent.com/StevenMKay/DRaz-Photography/main/Photos/sunset%20over%20ocean.png"
        );

        assert_eq!(records[2].id, 3);
        assert_eq!(records[2].filename, "city_street.webp");
    }

    #[tokio::test]
    async fn test_failure_gives_none() {
        assert!(load_photos(&FailingListing, &AppConfig::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_listing_without_images_gives_none() {
        let listing = StaticListing::new(vec![entry("notes.txt", "file"), entry("2023", "dir")]);
        assert!(load_photos(&listing, &AppConfig::default()).await.is_none());
        assert!(load_photos(&StaticListing::default(), &AppConfig::default()).await.is_none());
    }

    #[tokio::test]
    async fn test_refresh_is_repeatable() {
        let config = AppConfig::default();
        let listing = sample_listing();
        let mut catalog = PhotoCatalog::new();

        let first = catalog.refresh(&listing, &config).await.unwrap().to_vec();
        let second = catalog.refresh(&listing, &config).await.unwrap().to_vec();

        assert_eq!(catalog.len(), 3);
        assert_eq!(first.len(), second.len());
        for (a, b) in first.iter().zip(&second) {
            assert!(a.same_photo(b));
        }
    }

    #[tokio::test]
    async fn test_failed_refresh_leaves_catalog_unchanged() {
        let config = AppConfig::default();
        let mut catalog = PhotoCatalog::new();
        catalog.refresh(&sample_listing(), &config).await.unwrap();
        let before = catalog.records().to_vec();

        assert!(catalog.refresh(&FailingListing, &config).await.is_none());
        assert_eq!(catalog.records(), before.as_slice());
    }

    #[tokio::test]
    async fn test_failed_refresh_on_empty_catalog() {
        let mut catalog = PhotoCatalog::new();
        assert!(catalog.refresh(&FailingListing, &AppConfig::default()).await.is_none());
        assert!(catalog.is_empty());
    }

    #[tokio::test]
    async fn test_append_continues_ids() {
        let config = AppConfig::default();
        let listing = sample_listing();
        let mut catalog = PhotoCatalog::new();

        catalog.append_from(&listing, &config).await.unwrap();
        let all = catalog.append_from(&listing, &config).await.unwrap();

        let ids: Vec<u64> = all.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(all[3].filename, all[0].filename);
    }

    #[tokio::test]
    async fn test_fallback_then_clear() {
        let config = AppConfig::default();
        let records = load_photos(&sample_listing(), &config).await.unwrap();

        let mut catalog = PhotoCatalog::new();
        catalog.extend_fallback(records.clone());
        assert_eq!(catalog.records(), records.as_slice());

        catalog.clear();
        assert!(catalog.is_empty());
        assert!(catalog.into_records().is_empty());
    }

    #[tokio::test]
    async fn test_load_fallback_file() {
        let records = load_photos(&sample_listing(), &AppConfig::default()).await.unwrap();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("fallback.json");
        std::fs::write(&path, serde_json::to_string_pretty(&records).unwrap()).unwrap();

        let loaded = assert_ok!(load_fallback(&path));
        assert_eq!(loaded, records);
    }

    #[test]
    fn test_load_fallback_errors() {
        let dir = tempfile::tempdir().unwrap();
        assert_err!(load_fallback(&dir.path().join("missing.json")));

        let path = dir.path().join("broken.json");
        std::fs::write(&path, r#"{"photos": []}"#).unwrap();
        let err = assert_err!(load_fallback(&path));
        assert!(matches!(err, CatalogError::Json(_)));
    }
}
