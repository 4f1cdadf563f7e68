// SPDX-License-Identifier: MIT
// SPDX-FileCopyrightText: 2025 Jonathan D. A. Jewell <hyperpolymath>

//! Tag extraction from photo titles

/// Maximum number of tags kept per photo
pub const MAX_TAGS: usize = 5;

/// Words that never become tags
pub const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "over",
    "from", "by", "into", "is",
];

/// Words of this many characters or fewer are dropped
const MIN_DROPPED_LEN: usize = 2;

fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(&word)
}

/// Pick up to [`MAX_TAGS`] significant words from a lower-cased title,
/// in order and without deduplication
pub fn generate_tags(text: &str) -> Vec<String> {
    text.split_whitespace()
        .filter(|word| word.chars().count() > MIN_DROPPED_LEN && !is_stop_word(word))
        .take(MAX_TAGS)
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stop_words_dropped() {
        assert_eq!(
            generate_tags("the quick brown fox jumps over"),
            vec!["quick", "brown", "fox", "jumps"]
        );
    }

    #[test]
    fn test_short_words_dropped() {
        assert_eq!(generate_tags("me at la pier"), vec!["pier"]);
    }

    #[test]
    fn test_limit_of_five() {
        assert_eq!(
            generate_tags("one two three four five six seven"),
            vec!["one", "two", "three", "four", "five"]
        );
    }

    #[test]
    fn test_repeats_kept() {
        assert_eq!(generate_tags("wave wave wave"), vec!["wave", "wave", "wave"]);
    }

    #[test]
    fn test_whitespace_runs() {
        assert_eq!(generate_tags("  misty \t  morning\n"), vec!["misty", "morning"]);
    }

    #[test]
    fn test_empty_input() {
        assert!(generate_tags("").is_empty());
        assert!(generate_tags("   ").is_empty());
    }

    #[test]
    fn test_length_counts_characters() {
        // Three characters, more than two bytes each
        assert_eq!(generate_tags("été"), vec!["été"]);
    }
}
