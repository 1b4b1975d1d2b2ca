//! Match results and their ranking.
//!
//! Results are ranked by `family_match_score * 1000 + subfamily_match_score`,
//! so the family score always dominates. Ranking goes through
//! [`compare_results`]; `FontResult` itself has no ordering.

use std::cmp::Ordering;

use serde::Serialize;

use super::font::Font;

/// Outcome of matching one requirement against one library font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FontResult<'a> {
    /// The matched font.
    pub font: &'a Font,
    /// Confidence of the family (or full name) match, 0-100.
    pub family_match_score: u8,
    /// Confidence of the subfamily match, 0-100.
    pub subfamily_match_score: u8,
    /// The match ignored the requested subfamily.
    pub downgrade: bool,
}

impl<'a> FontResult<'a> {
    pub fn new(font: &'a Font, family_match_score: u8, subfamily_match_score: u8) -> Self {
        Self {
            font,
            family_match_score,
            subfamily_match_score,
            downgrade: false,
        }
    }

    /// Create a result flagged as a downgrade.
    pub fn downgraded(font: &'a Font, family_match_score: u8, subfamily_match_score: u8) -> Self {
        Self {
            downgrade: true,
            ..Self::new(font, family_match_score, subfamily_match_score)
        }
    }

    /// Combined ranking score.
    pub fn total_score(&self) -> u32 {
        u32::from(self.family_match_score) * 1000 + u32::from(self.subfamily_match_score)
    }
}

/// Compare two results by combined score.
pub fn compare_results(a: &FontResult<'_>, b: &FontResult<'_>) -> Ordering {
    a.total_score().cmp(&b.total_score())
}

/// Pick the best result.
///
/// Among equally scored results the last one wins, which is the element a
/// stable ascending sort would leave at the end.
pub fn best_result<'a>(results: impl IntoIterator<Item = FontResult<'a>>) -> Option<FontResult<'a>> {
    results.into_iter().max_by(compare_results)
}

/// Sort results best first. Equal scores keep their original order.
pub fn sort_descending(results: &mut [FontResult<'_>]) {
    results.sort_by(|a, b| compare_results(b, a));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FontMetadata;

    fn font(path: &str) -> Font {
        Font::from_metadata(FontMetadata::new("Arial", "Regular", "Arial"), path)
    }

    #[test]
    fn family_score_dominates() {
        let (a, b) = (font("a.ttf"), font("b.ttf"));
        let high_family = FontResult::new(&a, 91, 0);
        let high_subfamily = FontResult::new(&b, 90, 100);

        assert_eq!(compare_results(&high_family, &high_subfamily), Ordering::Greater);
        assert_eq!(high_family.total_score(), 91_000);
        assert_eq!(high_subfamily.total_score(), 90_100);
    }

    #[test]
    fn best_result_prefers_last_of_equal_scores() {
        let (a, b, c) = (font("a.ttf"), font("b.ttf"), font("c.ttf"));
        let results = vec![
            FontResult::new(&a, 95, 10),
            FontResult::new(&b, 95, 10),
            FontResult::new(&c, 80, 100),
        ];

        let best = best_result(results).unwrap();
        assert_eq!(best.font.path(), b.path());
    }

    #[test]
    fn best_result_of_nothing_is_none() {
        assert!(best_result(Vec::new()).is_none());
    }

    #[test]
    fn sort_descending_is_stable() {
        let (a, b, c) = (font("a.ttf"), font("b.ttf"), font("c.ttf"));
        let mut results = vec![
            FontResult::new(&a, 90, 0),
            FontResult::new(&b, 100, 0),
            FontResult::new(&c, 90, 0),
        ];

        sort_descending(&mut results);

        let order: Vec<_> = results.iter().map(|r| r.font.path().to_owned()).collect();
        assert_eq!(order, vec![b.path, a.path, c.path]);
    }

    #[test]
    fn downgraded_sets_flag() {
        let a = font("a.ttf");
        let result = FontResult::downgraded(&a, 92, 0);
        assert!(result.downgrade);
        assert!(!FontResult::new(&a, 92, 0).downgrade);
    }
}
