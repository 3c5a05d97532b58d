//! Title comparison used to spot the same story published under different
//! headlines.

use std::collections::BTreeSet;

pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.70;

/// Words of this many characters or fewer are ignored when comparing titles.
pub const DEFAULT_MIN_WORD_LEN: usize = 3;

/// Lowercases a title, then turns every character that is neither a word
/// character (ASCII letter, digit, `_`) nor whitespace into a space, collapses
/// runs of whitespace and trims the ends.
///
/// Lowercasing comes first, so `İ` yields `i` followed by a separator.
pub fn normalize_title(title: &str) -> String {
    let mut normalized = String::with_capacity(title.len());
    let mut space_pending = false;

    for ch in title.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_alphanumeric() || ch == '_' {
            if space_pending && !normalized.is_empty() {
                normalized.push(' ');
            }
            space_pending = false;
            normalized.push(ch);
        } else {
            space_pending = true;
        }
    }

    normalized
}

/// The distinct words of a normalized title longer than `min_len` characters.
pub fn significant_words(normalized: &str, min_len: usize) -> BTreeSet<&str> {
    normalized
        .split_whitespace()
        .filter(|word| word.chars().count() > min_len)
        .collect()
}

/// Word-overlap comparison between normalized titles. The shared word count
/// is divided by the size of the smaller word set, so a short headline folds
/// into a longer paraphrase of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TitleMatcher {
    pub threshold: f64,
    pub min_word_len: usize,
}

impl Default for TitleMatcher {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_SIMILARITY_THRESHOLD,
            min_word_len: DEFAULT_MIN_WORD_LEN,
        }
    }
}

impl TitleMatcher {
    pub fn new(threshold: f64, min_word_len: usize) -> Self {
        Self {
            threshold,
            min_word_len,
        }
    }

    /// Returns `None` when either title has no significant words.
    pub fn overlap_ratio(&self, a: &str, b: &str) -> Option<f64> {
        let words_a = significant_words(a, self.min_word_len);
        let words_b = significant_words(b, self.min_word_len);
        if words_a.is_empty() || words_b.is_empty() {
            return None;
        }

        let common = words_a.intersection(&words_b).count();
        let smaller = words_a.len().min(words_b.len());
        Some(common as f64 / smaller as f64)
    }

    pub fn is_similar(&self, a: &str, b: &str) -> bool {
        self.overlap_ratio(a, b)
            .map_or(false, |ratio| ratio >= self.threshold)
    }
}

/// [`TitleMatcher::is_similar`] with the default threshold and word length.
pub fn is_similar_title(a: &str, b: &str) -> bool {
    TitleMatcher::default().is_similar(a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_title() {
        assert_eq!(
            normalize_title("  Traffic Update: Third-Mainland   Bridge!! "),
            "traffic update third mainland bridge"
        );
        assert_eq!(normalize_title("Burna_Boy LIVE @ Eko"), "burna_boy live eko");
        assert_eq!(normalize_title("\tNew\nvenue\r\n"), "new venue");
        assert_eq!(normalize_title("Café Neo"), "caf neo");
        assert_eq!(normalize_title("İstanbul Nights"), "i stanbul nights");
        assert_eq!(normalize_title("KELVIN \u{212A}lub"), "kelvin klub");
        assert_eq!(normalize_title("?!..."), "");
        assert_eq!(normalize_title(""), "");
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for title in [
            "Lagos Traffic Update on Third Mainland Bridge",
            "  -- Détente: Ikoyi's 'best' rooftop bars (2024) --  ",
            "a\u{00a0}b\u{2003}c",
            "İKEJA İstanbul Grill",
            "",
        ] {
            let once = normalize_title(title);
            assert_eq!(normalize_title(&once), once);
        }
    }

    #[test]
    fn test_significant_words() {
        let words = significant_words("the new club opens near lekki lekki", 3);
        assert_eq!(words.into_iter().collect::<Vec<_>>(), vec!["club", "lekki", "near", "opens"]);
    }

    #[test]
    fn test_similarity_ratio_uses_smaller_set() {
        let matcher = TitleMatcher::default();
        let a = normalize_title("Lagos Traffic Update on Third Mainland Bridge");
        let b = normalize_title("Traffic Update: Third Mainland Bridge Congestion");

        let ratio = matcher.overlap_ratio(&a, &b).unwrap();
        assert!((ratio - 5.0 / 6.0).abs() < 1e-9);
        assert!(matcher.is_similar(&a, &b));
        assert!(matcher.is_similar(&b, &a));
    }

    #[test]
    fn test_short_titles_are_never_similar() {
        assert!(!is_similar_title("new bar", "new bar"));
        assert!(!is_similar_title("", "lagos nightlife guide"));
    }

    #[test]
    fn test_disjoint_titles() {
        assert!(!is_similar_title("lagos fashion week returns", "ikeja power outage continues"));
    }

    #[test]
    fn test_threshold_boundary() {
        // 7 of 10 shared words is exactly the default threshold.
        let a = "alpha bravo charlie delta echoes foxtrot golfs hotel india juliet";
        let b = "alpha bravo charlie delta echoes foxtrot golfs kilo lima mike";
        let matcher = TitleMatcher::default();
        assert!((matcher.overlap_ratio(a, b).unwrap() - 0.7).abs() < 1e-9);
        assert!(matcher.is_similar(a, b));
        assert!(!TitleMatcher::new(0.75, DEFAULT_MIN_WORD_LEN).is_similar(a, b));
    }
}
