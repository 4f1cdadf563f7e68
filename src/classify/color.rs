// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Dominant color guess from photo titles

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{first_match, KeywordTable, Label};

/// Color family used for gallery filtering
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Blue,
    Green,
    Red,
    Yellow,
    Orange,
    Pink,
    Warm,
    Cool,
    Neutral,
    /// No color could be inferred; matches every color filter
    All,
}

/// Color keywords in precedence order
pub const COLOR_KEYWORDS: &KeywordTable<Color> = &[
    (Color::Blue, &["blue", "ocean", "sea", "sky", "water", "lake", "river"]),
    (Color::Green, &["green", "forest", "leaf", "grass", "jungle", "meadow"]),
    (Color::Red, &["red", "rose", "crimson", "scarlet"]),
    (Color::Yellow, &["yellow", "gold", "sunflower", "lemon"]),
    (Color::Orange, &["orange", "autumn", "pumpkin"]),
    (Color::Pink, &["pink", "blossom", "cherry", "magenta"]),
    (Color::Warm, &["warm", "sunset", "sunrise", "fire", "desert", "dusk"]),
    (Color::Cool, &["cool", "snow", "winter", "frost", "glacier"]),
    (Color::Neutral, &["neutral", "gray", "grey", "black", "white", "fog", "mist"]),
];

impl Label for Color {
    const FALLBACK: Self = Color::All;

    fn as_str(&self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Green => "green",
            Color::Red => "red",
            Color::Yellow => "yellow",
            Color::Orange => "orange",
            Color::Pink => "pink",
            Color::Warm => "warm",
            Color::Cool => "cool",
            Color::Neutral => "neutral",
            Color::All => "all",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Detect the color family of a lower-cased title
pub fn detect_color(text: &str) -> Color {
    first_match(COLOR_KEYWORDS, text)
}
