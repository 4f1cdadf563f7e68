// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! photo-catalog: a photo gallery catalog built from a GitHub directory listing
//!
//! The listing is fetched once, filtered to image files, and every image gets
//! a title, theme, color and tags derived from its filename.

pub mod catalog;
pub mod classify;
pub mod config;
pub mod error;
pub mod github;
pub mod photo;

pub use catalog::{load_fallback, load_photos, PhotoCatalog};
pub use config::AppConfig;
pub use error::{CatalogError, Result};
pub use github::{GitHubClient, ListingEntry, ListingSource, StaticListing};
pub use photo::{derive_title, PhotoRecord};
