//! Font library index and fuzzy font resolution.
//!
//! Matching is precision first: the strictest, most structured comparison
//! runs first, and the search only relaxes toward "any font whose name
//! roughly looks like this family" when nothing clears the threshold and
//! the caller allows a downgrade.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::LibraryError;
use super::metadata::{MetadataProvider, TtfMetadataProvider};
use super::similarity::{Similarity, SimilarityAlgorithm};
use crate::models::{best_result, sort_descending, Font, FontRequirement, FontResult};

/// File extensions treated as library members (compared case-insensitively).
pub const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Subfamily tokens removed on both sides when ignoring regular styles.
const REGULAR_STYLE_TOKENS: [&str; 2] = ["bold", "italic"];

/// Check whether a path has a recognized font extension.
pub fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

/// What to do when a font file's metadata cannot be read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetadataErrorPolicy {
    /// Stop indexing and return the error.
    #[default]
    Abort,
    /// Log a warning and leave the file out of the library.
    Skip,
}

/// Which matching algorithm [`FontLibrary::resolve`] uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// Compare "family + style words" against font full names.
    #[default]
    FullName,
    /// Compare family and subfamily separately.
    Families,
}

impl std::fmt::Display for MatchStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStrategy::FullName => write!(f, "full_name"),
            MatchStrategy::Families => write!(f, "families"),
        }
    }
}

/// Options for [`FontLibrary::resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchOptions {
    /// Matching algorithm.
    pub strategy: MatchStrategy,
    /// Minimum score (0-100) a candidate must reach.
    pub threshold: u8,
    /// Fall back to family-only matching when nothing else matches.
    pub allow_downgrade: bool,
    /// Strip "bold"/"italic" from subfamilies before comparing them
    /// (families strategy only).
    pub ignore_regular: bool,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::FullName,
            threshold: 90,
            allow_downgrade: true,
            ignore_regular: false,
        }
    }
}

/// An immutable index of the fonts in one directory.
#[derive(Debug)]
pub struct FontLibrary {
    root: PathBuf,
    fonts: Vec<Font>,
    scorer: Box<dyn Similarity>,
}

impl FontLibrary {
    /// Index a directory with the default provider, aborting on unreadable fonts.
    pub fn open(dir: impl AsRef<Path>) -> Result<Self, LibraryError> {
        Self::build(dir, &TtfMetadataProvider, MetadataErrorPolicy::Abort)
    }

    /// Index every `.ttf`/`.otf` file directly inside `dir`.
    ///
    /// Files are visited in path order so the library order, and with it
    /// tie-breaking between equal scores, is the same on every run.
    /// Other files are skipped.
    pub fn build(
        dir: impl AsRef<Path>,
        provider: &dyn MetadataProvider,
        policy: MetadataErrorPolicy,
    ) -> Result<Self, LibraryError> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|e| LibraryError::read_dir(dir, e))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| LibraryError::read_dir(dir, e))?.path();
            if !path.is_file() {
                continue;
            }
            if !is_font_file(&path) {
                tracing::trace!("Skipping non-font file {}", path.display());
                continue;
            }
            paths.push(path);
        }
        paths.sort();

        let mut fonts = Vec::with_capacity(paths.len());
        for path in paths {
            match provider.extract(&path) {
                Ok(metadata) => fonts.push(Font::from_metadata(metadata, path)),
                Err(e) => match policy {
                    MetadataErrorPolicy::Abort => return Err(e.into()),
                    MetadataErrorPolicy::Skip => {
                        tracing::warn!("Skipping unreadable font: {}", e);
                    }
                },
            }
        }

        tracing::info!("Indexed {} fonts from {}", fonts.len(), dir.display());
        Ok(Self::from_fonts(dir, fonts))
    }

    /// Create a library from already-built font records.
    pub fn from_fonts(root: impl Into<PathBuf>, fonts: Vec<Font>) -> Self {
        Self {
            root: root.into(),
            fonts,
            scorer: Box::new(SimilarityAlgorithm::default()),
        }
    }

    /// Replace the similarity measure.
    pub fn with_similarity(mut self, scorer: Box<dyn Similarity>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Directory the library was built from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Fonts in library order.
    pub fn fonts(&self) -> &[Font] {
        &self.fonts
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Resolve a requirement with the configured strategy.
    pub fn resolve(
        &self,
        requirement: &FontRequirement,
        options: &MatchOptions,
    ) -> Option<FontResult<'_>> {
        match options.strategy {
            MatchStrategy::FullName => {
                self.find_by_full_name(requirement, options.threshold, options.allow_downgrade)
            }
            MatchStrategy::Families => self.find_by_family_and_subfamily(
                requirement,
                options.threshold,
                options.ignore_regular,
                options.allow_downgrade,
            ),
        }
    }

    /// Find a font by comparing family and subfamily separately.
    ///
    /// Candidates are the fonts whose family score reaches `threshold`; the
    /// subfamily score only ranks them. When there are none and
    /// `allow_downgrade` is set, the family-only retry flags its result as a
    /// downgrade.
    pub fn find_by_family_and_subfamily(
        &self,
        requirement: &FontRequirement,
        threshold: u8,
        ignore_regular: bool,
        allow_downgrade: bool,
    ) -> Option<FontResult<'_>> {
        let wanted = subfamily_key(
            requirement.subfamily.iter().map(|attr| attr.token()),
            ignore_regular,
        );

        let scored: Vec<FontResult<'_>> = self
            .fonts
            .iter()
            .map(|font| {
                let family_score = self.scorer.similarity(&requirement.family, &font.family);
                let have = subfamily_key(font.subfamily.iter().map(String::as_str), ignore_regular);
                let subfamily_score = self.scorer.similarity(&wanted, &have);
                FontResult::new(font, family_score, subfamily_score)
            })
            .collect();

        let mut best = best_result(
            scored
                .iter()
                .copied()
                .filter(|r| r.family_match_score >= threshold),
        );

        if best.is_none() && allow_downgrade {
            best = best_result(
                scored
                    .iter()
                    .filter(|r| r.family_match_score >= threshold)
                    .map(|r| {
                        FontResult::downgraded(r.font, r.family_match_score, r.subfamily_match_score)
                    }),
            );
        }

        log_outcome(requirement, best.as_ref());
        best
    }

    /// Find a font by comparing "family + style words" against full names.
    ///
    /// Tiers, each tried only when the previous one found nothing:
    /// 1. the styled name against each full name (case-insensitive)
    /// 2. the same, with "semi" removed from every full name word
    /// 3. with `allow_downgrade`, the bare family against each full name
    pub fn find_by_full_name(
        &self,
        requirement: &FontRequirement,
        threshold: u8,
        allow_downgrade: bool,
    ) -> Option<FontResult<'_>> {
        let query = requirement.styled_name().to_lowercase();

        let mut best = best_result(self.score_full_names(&query, threshold, str::to_lowercase));

        if best.is_none() {
            best = best_result(self.score_full_names(&query, threshold, strip_semi));
        }

        if best.is_none() && allow_downgrade {
            let family = requirement.family.to_lowercase();
            best = best_result(
                self.score_full_names(&family, threshold, str::to_lowercase)
                    .map(|r| FontResult::downgraded(r.font, r.family_match_score, 0)),
            );
        }

        log_outcome(requirement, best.as_ref());
        best
    }

    /// Every font whose family reaches `threshold`, best first.
    ///
    /// Subfamily scores are 0.
    pub fn find_by_family(&self, family: &str, threshold: u8) -> Vec<FontResult<'_>> {
        let mut results: Vec<FontResult<'_>> = self
            .fonts
            .iter()
            .filter_map(|font| {
                let score = self.scorer.similarity(family, &font.family);
                (score >= threshold).then(|| FontResult::new(font, score, 0))
            })
            .collect();
        sort_descending(&mut results);
        results
    }

    fn score_full_names<'a, 'q>(
        &'a self,
        query: &'q str,
        threshold: u8,
        normalize: fn(&str) -> String,
    ) -> impl Iterator<Item = FontResult<'a>> + 'q
    where
        'a: 'q,
    {
        self.fonts.iter().filter_map(move |font| {
            let score = self.scorer.similarity(query, &normalize(&font.full_name));
            (score >= threshold).then(|| FontResult::new(font, score, 0))
        })
    }
}

/// Join subfamily tokens, optionally dropping "bold"/"italic".
fn subfamily_key<'a>(tokens: impl Iterator<Item = &'a str>, ignore_regular: bool) -> String {
    tokens
        .filter(|token| !ignore_regular || !REGULAR_STYLE_TOKENS.contains(token))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Lowercase a full name and remove "semi" from each word ("Semibold" -> "bold").
fn strip_semi(full_name: &str) -> String {
    full_name
        .to_lowercase()
        .split(' ')
        .map(|word| word.replace("semi", ""))
        .collect::<Vec<_>>()
        .join(" ")
}

fn log_outcome(requirement: &FontRequirement, result: Option<&FontResult<'_>>) {
    match result {
        None => tracing::warn!(
            "Could not find font: {}, subfamilies: {}",
            requirement.family,
            requirement.subfamily_display()
        ),
        Some(result) => {
            let flag = if result.downgrade { "↓" } else { " " };
            tracing::debug!(
                "Found font: [{}{:>3}%] {}, subfamilies: {}",
                flag,
                result.family_match_score,
                result.font.family,
                result.font.subfamily_display()
            );
        }
    }
}
