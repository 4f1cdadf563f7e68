// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Filename heuristics: theme, color and tag inference
//!
//! Each classifier is a pure function over lower-cased text. Theme and color
//! use ordered keyword tables where the first label with a matching keyword
//! wins, so the declaration order of a table is part of its behavior.

pub mod color;
pub mod tags;
pub mod theme;

pub use color::{detect_color, Color, COLOR_KEYWORDS};
pub use tags::{generate_tags, MAX_TAGS, STOP_WORDS};
pub use theme::{detect_theme, Theme, THEME_KEYWORDS};

/// An ordered keyword table: `(label, trigger substrings)` evaluated top to bottom
pub type KeywordTable<L> = [(L, &'static [&'static str])];

/// Labels that can be picked from a keyword table
pub trait Label: Copy + 'static {
    /// Label used when no keyword in the table matches
    const FALLBACK: Self;

    /// Lower-case name as it appears in catalog records
    fn as_str(&self) -> &'static str;
}

/// Return the first label whose keywords contain a substring of `text`,
/// or `L::FALLBACK` when nothing matches
pub fn first_match<L: Label>(table: &KeywordTable<L>, text: &str) -> L {
    table
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(label, _)| *label)
        .unwrap_or(L::FALLBACK)
}
