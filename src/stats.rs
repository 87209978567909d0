//! Word frequency statistics

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashMap;

/// Number of entries kept in [`WordStats::common`]
pub const COMMON_WORDS_LIMIT: usize = 10;

// Letters, numbers and underscore. Combining marks and other `\w` extras split words.
static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\p{L}\p{N}_]+").unwrap());

/// Word counts for a text
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WordStats {
    /// All word tokens, repeats included
    pub total: usize,
    /// Distinct lowercase tokens
    pub unique: usize,
    /// Most frequent tokens with their counts, highest first.
    /// Equal counts keep the order in which the words first appeared.
    pub common: Vec<(String, usize)>,
}

/// Compute word statistics over the lowercased text
///
/// Tokens are maximal runs of Unicode letters, numbers and underscores.
/// A decomposed accent (base letter plus combining mark) ends the token at
/// the mark, while numeric symbols such as `²` stay part of the word.
pub fn word_stats(text: &str) -> WordStats {
    let lowered = text.to_lowercase();

    // Counts in first-occurrence order; the map only stores indices into it
    let mut counts: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut total = 0;

    for token in WORD_RE.find_iter(&lowered) {
        total += 1;
        match index.get(token.as_str()) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token.as_str(), counts.len());
                counts.push((token.as_str().to_string(), 1));
            }
        }
    }

    let unique = counts.len();

    // sort_by is stable, so ties stay in first-occurrence order
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.truncate(COMMON_WORDS_LIMIT);

    WordStats {
        total,
        unique,
        common: counts,
    }
}
