//! String similarity scoring.
//!
//! Font names typed into subtitle scripts rarely match the embedded font
//! metadata exactly, so every comparison goes through a normalized score in
//! the range 0-100 (100 = identical). Scores are case-sensitive; callers
//! lowercase first when they want case-insensitive matching.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A normalized string similarity measure.
pub trait Similarity: Send + Sync + fmt::Debug {
    /// Score the similarity of two strings, 0-100.
    ///
    /// Must be symmetric and deterministic.
    fn similarity(&self, a: &str, b: &str) -> u8;
}

/// Built-in similarity measures backed by `strsim`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SimilarityAlgorithm {
    /// Normalized Levenshtein edit distance.
    #[default]
    Levenshtein,
    /// Normalized Damerau-Levenshtein (transpositions count as one edit).
    DamerauLevenshtein,
    /// Jaro-Winkler (favours common prefixes).
    JaroWinkler,
    /// Sorensen-Dice over character bigrams.
    SorensenDice,
}

impl SimilarityAlgorithm {
    fn ratio(&self, a: &str, b: &str) -> f64 {
        match self {
            Self::Levenshtein => strsim::normalized_levenshtein(a, b),
            Self::DamerauLevenshtein => strsim::normalized_damerau_levenshtein(a, b),
            Self::JaroWinkler => strsim::jaro_winkler(a, b),
            Self::SorensenDice => strsim::sorensen_dice(a, b),
        }
    }
}

impl Similarity for SimilarityAlgorithm {
    fn similarity(&self, a: &str, b: &str) -> u8 {
        if a == b {
            return 100;
        }
        to_score(self.ratio(a, b))
    }
}

impl fmt::Display for SimilarityAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Levenshtein => write!(f, "levenshtein"),
            Self::DamerauLevenshtein => write!(f, "damerau_levenshtein"),
            Self::JaroWinkler => write!(f, "jaro_winkler"),
            Self::SorensenDice => write!(f, "sorensen_dice"),
        }
    }
}

/// Convert a 0.0-1.0 ratio into a rounded 0-100 score.
fn to_score(ratio: f64) -> u8 {
    (ratio.clamp(0.0, 1.0) * 100.0).round() as u8
}
