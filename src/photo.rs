// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Photo records built from listing entries
//!
//! Filtering keeps regular files with an image extension. Mapping turns each
//! surviving entry into a [`PhotoRecord`] whose title, theme, color and tags
//! are derived from the filename alone.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::classify::{detect_color, detect_theme, generate_tags, Color, Theme};
use crate::config::SourceConfig;
use crate::github::ListingEntry;

/// Orientation assigned to every photo; images are never inspected
pub const DEFAULT_ORIENTATION: &str = "horizontal";
/// Proportion assigned to every photo
pub const DEFAULT_PROPORTION: &str = "16:9";

/// A catalog entry for one image file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhotoRecord {
    pub id: u64,
    pub title: String,
    pub theme: Theme,
    pub color: Color,
    pub orientation: String,
    pub proportion: String,
    pub src: String,
    pub tags: Vec<String>,
    /// When the record was built, not when the photo was taken
    pub date: DateTime<Utc>,
    pub filename: String,
}

impl PhotoRecord {
    /// True when both records describe the same photo, ignoring `date`
    pub fn same_photo(&self, other: &Self) -> bool {
        self.id == other.id
            && self.title == other.title
            && self.theme == other.theme
            && self.color == other.color
            && self.orientation == other.orientation
            && self.proportion == other.proportion
            && self.src == other.src
            && self.tags == other.tags
            && self.filename == other.filename
    }
}

/// Check whether an entry is a regular file with one of `formats` as extension
pub fn is_image_entry(entry: &ListingEntry, formats: &[String]) -> bool {
    if !entry.is_file() {
        return false;
    }

    let name = entry.name.to_lowercase();
    formats.iter().any(|ext| {
        let ext = ext.trim_start_matches('.').to_lowercase();
        name.strip_suffix(ext.as_str())
            .is_some_and(|stem| stem.ends_with('.'))
    })
}

/// Keep only image files, preserving listing order
pub fn filter_images<'a>(
    entries: &'a [ListingEntry],
    formats: &[String],
) -> Vec<&'a ListingEntry> {
    entries
        .iter()
        .filter(|entry| {
            let keep = is_image_entry(entry, formats);
            if !keep {
                debug!("Skipping non-image entry: {} ({})", entry.name, entry.entry_type);
            }
            keep
        })
        .collect()
}

/// Strip the last `.suffix`, as long as the suffix is non-empty and holds no `.` or `/`
fn strip_extension(filename: &str) -> &str {
    match filename.rfind('.') {
        Some(idx) => {
            let suffix = &filename[idx + 1..];
            if suffix.is_empty() || suffix.contains('/') {
                filename
            } else {
                &filename[..idx]
            }
        }
        None => filename,
    }
}

/// Turn a filename into a display title
///
/// `golden-gate_bridge.jpg` becomes `Golden Gate Bridge`. Only the first
/// character of each word changes; the rest keeps its original case.
pub fn derive_title(filename: &str) -> String {
    let mut title = String::with_capacity(filename.len());
    let mut at_word_start = true;

    for c in strip_extension(filename).chars() {
        let c = if c == '-' || c == '_' { ' ' } else { c };

        if c.is_alphanumeric() {
            if at_word_start {
                title.extend(c.to_uppercase());
            } else {
                title.push(c);
            }
            at_word_start = false;
        } else {
            title.push(c);
            at_word_start = true;
        }
    }

    title
}

/// Percent-encode a path segment the way browsers' `encodeURIComponent` does
pub fn encode_component(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for b in s.bytes() {
        match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9'
            | b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')' => {
                out.push(b as char);
            }
            _ => {
                out.push('%');
                out.push(char::from(HEX[(b >> 4) as usize]));
                out.push(char::from(HEX[(b & 0x0f) as usize]));
            }
        }
    }
    out
}

const HEX: [u8; 16] = *b"0123456789ABCDEF";

/// Direct-download URL for a file in the configured directory
pub fn raw_content_url(source: &SourceConfig, filename: &str) -> String {
    let dir = source.path.trim_matches('/');
    let mut url = format!(
        "{}/{}/{}/{}",
        source.raw_url.trim_end_matches('/'),
        source.owner,
        source.repo,
        source.branch,
    );
    if !dir.is_empty() {
        url.push('/');
        url.push_str(dir);
    }
    url.push('/');
    url.push_str(&encode_component(filename));
    url
}

/// Build the record for one entry; `id` is supplied by the caller
pub fn build_record(
    entry: &ListingEntry,
    id: u64,
    source: &SourceConfig,
    processed_at: DateTime<Utc>,
) -> PhotoRecord {
    let title = derive_title(&entry.name);
    let text = title.to_lowercase();

    PhotoRecord {
        id,
        theme: detect_theme(&text),
        color: detect_color(&text),
        tags: generate_tags(&text),
        title,
        orientation: DEFAULT_ORIENTATION.to_string(),
        proportion: DEFAULT_PROPORTION.to_string(),
        src: raw_content_url(source, &entry.name),
        date: processed_at,
        filename: entry.name.clone(),
    }
}

/// Map filtered entries to records with ids `base + 1, base + 2, ...`
pub fn map_entries(
    entries: &[&ListingEntry],
    base: u64,
    source: &SourceConfig,
    processed_at: DateTime<Utc>,
) -> Vec<PhotoRecord> {
    entries
        .iter()
        .zip(base + 1..)
        .map(|(entry, id)| {
            let record = build_record(entry, id, source, processed_at);
            debug!(
                "Photo {}: {:?} theme={} color={} tags={:?}",
                record.id, record.title, record.theme, record.color, record.tags
            );
            record
        })
        .collect()
}
