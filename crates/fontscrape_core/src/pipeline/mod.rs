//! Batch orchestration.
//!
//! Extracts the font requirements of each subtitle document, resolves them
//! against one font library, and collects the matched fonts. A document
//! that cannot be read or parsed is reported and skipped; it never aborts
//! the rest of the batch.

use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::Settings;
use crate::fonts::{FontLibrary, LibraryError, MatchOptions, MetadataProvider, TtfMetadataProvider};
use crate::models::{Font, FontRequirement, FontResult};
use crate::subtitles::{is_subtitle_file, SubtitleError, SubtitleFonts};

/// A requirement together with the font it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedRequirement {
    pub requirement: FontRequirement,
    pub font: Font,
    pub family_match_score: u8,
    pub subfamily_match_score: u8,
    pub downgrade: bool,
}

impl ResolvedRequirement {
    fn new(requirement: &FontRequirement, result: &FontResult<'_>) -> Self {
        Self {
            requirement: requirement.clone(),
            font: result.font.clone(),
            family_match_score: result.family_match_score,
            subfamily_match_score: result.subfamily_match_score,
            downgrade: result.downgrade,
        }
    }
}

/// Outcome for one subtitle document.
#[derive(Debug)]
pub struct DocumentReport {
    /// Subtitle document path.
    pub path: PathBuf,
    /// Requirements that matched a font, in extraction order.
    pub resolved: Vec<ResolvedRequirement>,
    /// Requirements with no match, in extraction order.
    pub unresolved: Vec<FontRequirement>,
    /// Set when the document could not be loaded or parsed.
    pub error: Option<SubtitleError>,
}

impl DocumentReport {
    /// The document was processed.
    pub fn is_ok(&self) -> bool {
        self.error.is_none()
    }
}

/// Outcome for a batch of subtitle documents.
#[derive(Debug, Default)]
pub struct BatchReport {
    /// Per-document reports, in input order.
    pub documents: Vec<DocumentReport>,
}

impl BatchReport {
    /// Matched fonts without duplicates (by path), in first-seen order.
    pub fn fonts(&self) -> Vec<&Font> {
        let mut seen = HashSet::new();
        self.documents
            .iter()
            .flat_map(|doc| doc.resolved.iter())
            .map(|resolved| &resolved.font)
            .filter(|font| seen.insert(*font))
            .collect()
    }

    /// Documents that could not be processed.
    pub fn failed(&self) -> impl Iterator<Item = &DocumentReport> {
        self.documents.iter().filter(|doc| !doc.is_ok())
    }

    /// Total number of unresolved requirements across all documents.
    pub fn unresolved_count(&self) -> usize {
        self.documents.iter().map(|doc| doc.unresolved.len()).sum()
    }
}

/// Resolve every requirement of one document.
pub fn resolve_requirements(
    library: &FontLibrary,
    fonts: &SubtitleFonts,
    options: &MatchOptions,
) -> (Vec<ResolvedRequirement>, Vec<FontRequirement>) {
    let mut resolved = Vec::new();
    let mut unresolved = Vec::new();

    for requirement in fonts {
        match library.resolve(requirement, options) {
            Some(result) => resolved.push(ResolvedRequirement::new(requirement, &result)),
            None => unresolved.push(requirement.clone()),
        }
    }

    (resolved, unresolved)
}

/// Load, extract, and resolve one subtitle document.
pub fn resolve_document(
    library: &FontLibrary,
    path: impl AsRef<Path>,
    options: &MatchOptions,
) -> DocumentReport {
    let path = path.as_ref();
    tracing::info!("Processing subtitle file: {}", path.display());

    match SubtitleFonts::from_file(path) {
        Ok(fonts) => {
            let (resolved, unresolved) = resolve_requirements(library, &fonts, options);
            DocumentReport {
                path: path.to_path_buf(),
                resolved,
                unresolved,
                error: None,
            }
        }
        Err(e) => {
            tracing::error!("{}", e);
            DocumentReport {
                path: path.to_path_buf(),
                resolved: Vec::new(),
                unresolved: Vec::new(),
                error: Some(e),
            }
        }
    }
}

/// Resolve a batch of subtitle documents against one library.
pub fn resolve_documents<P: AsRef<Path>>(
    library: &FontLibrary,
    subtitle_paths: &[P],
    options: &MatchOptions,
) -> BatchReport {
    let report = BatchReport {
        documents: subtitle_paths
            .iter()
            .map(|path| resolve_document(library, path, options))
            .collect(),
    };

    for font in report.fonts() {
        tracing::info!("Found font: {}", font.path().display());
    }
    report
}

/// Build the font library described by `settings` and resolve a batch.
pub fn run<P: AsRef<Path>>(
    settings: &Settings,
    subtitle_paths: &[P],
) -> Result<BatchReport, LibraryError> {
    run_with_provider(settings, &TtfMetadataProvider, subtitle_paths)
}

/// Like [`run`], reading font metadata through `provider`.
pub fn run_with_provider<P: AsRef<Path>>(
    settings: &Settings,
    provider: &dyn MetadataProvider,
    subtitle_paths: &[P],
) -> Result<BatchReport, LibraryError> {
    let library = FontLibrary::build(
        &settings.library.font_dir,
        provider,
        settings.library.metadata_errors,
    )?
    .with_similarity(Box::new(settings.matching.similarity));

    Ok(resolve_documents(
        &library,
        subtitle_paths,
        &settings.matching.to_options(),
    ))
}

/// List the `.ssa`/`.ass` files directly inside `dir`, sorted by path.
pub fn discover_subtitles(dir: impl AsRef<Path>) -> io::Result<Vec<PathBuf>> {
    let mut paths = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.is_file() && is_subtitle_file(&path) {
            paths.push(path);
        }
    }
    paths.sort();
    Ok(paths)
}
