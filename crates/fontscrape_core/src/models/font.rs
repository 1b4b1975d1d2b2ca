//! Font records.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};
use std::path::{Path, PathBuf};

use serde::Serialize;

/// Name strings read from a font file's `name` table.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FontMetadata {
    /// Best family name (e.g., "Arial").
    pub family: String,
    /// Best subfamily name as written in the font (e.g., "Bold Italic").
    pub subfamily_raw: String,
    /// Best full name (e.g., "Arial Bold Italic").
    pub full_name: String,
}

impl FontMetadata {
    /// Create metadata from the three name strings.
    pub fn new(
        family: impl Into<String>,
        subfamily_raw: impl Into<String>,
        full_name: impl Into<String>,
    ) -> Self {
        Self {
            family: family.into(),
            subfamily_raw: subfamily_raw.into(),
            full_name: full_name.into(),
        }
    }
}

/// A single font file in the library.
///
/// Identity is the file path: two `Font`s are equal, and hash the same,
/// exactly when their paths are equal.
#[derive(Debug, Clone, Serialize)]
pub struct Font {
    /// Font family.
    pub family: String,
    /// Lowercase subfamily tokens (e.g., `{"bold", "italic"}`).
    pub subfamily: BTreeSet<String>,
    /// Full name of the font.
    pub full_name: String,
    /// Location of the font file.
    pub path: PathBuf,
}

impl Font {
    /// Create a font record from provider metadata.
    ///
    /// The raw subfamily is lowercased and split on whitespace.
    pub fn from_metadata(metadata: FontMetadata, path: impl Into<PathBuf>) -> Self {
        let subfamily = metadata
            .subfamily_raw
            .split_whitespace()
            .map(str::to_lowercase)
            .collect();
        Self {
            family: metadata.family,
            subfamily,
            full_name: metadata.full_name,
            path: path.into(),
        }
    }

    /// Get the font file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Human-readable subfamily list for log output.
    pub fn subfamily_display(&self) -> String {
        if self.subfamily.is_empty() {
            "None".to_string()
        } else {
            self.subfamily
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}

impl PartialEq for Font {
    fn eq(&self, other: &Self) -> bool {
        self.path == other.path
    }
}

impl Eq for Font {}

impl Hash for Font {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.path.hash(state);
    }
}
