//! Font metadata extraction.
//!
//! Reads the family, subfamily, and full name strings from a font file's
//! `name` table using `ttf-parser`.

use std::fs;
use std::path::Path;

use ttf_parser::{name_id, Face, PlatformId};

use super::error::MetadataError;
use crate::models::FontMetadata;

/// Source of font metadata for library indexing.
pub trait MetadataProvider: Send + Sync {
    /// Extract the name strings of the font at `path`.
    fn extract(&self, path: &Path) -> Result<FontMetadata, MetadataError>;
}

/// Metadata provider for TrueType/OpenType files.
///
/// Only the first face of a file is read.
#[derive(Debug, Clone, Copy, Default)]
pub struct TtfMetadataProvider;

impl MetadataProvider for TtfMetadataProvider {
    fn extract(&self, path: &Path) -> Result<FontMetadata, MetadataError> {
        let data = fs::read(path).map_err(|e| MetadataError::read(path, e))?;
        metadata_from_bytes(&data, path)
    }
}

/// Windows English (United States).
const WINDOWS_ENGLISH_US: u16 = 0x0409;
/// Macintosh English.
const MACINTOSH_ENGLISH: u16 = 0;

/// Parse font data and pick the best names.
///
/// Family and subfamily prefer the WWS names, then the typographic names,
/// then the legacy ones. The full name prefers a family/subfamily pair from
/// the same tier, then the full name record, then the PostScript name.
pub(crate) fn metadata_from_bytes(data: &[u8], path: &Path) -> Result<FontMetadata, MetadataError> {
    let face = Face::parse(data, 0).map_err(|source| MetadataError::Parse {
        path: path.to_path_buf(),
        source,
    })?;

    let family = first_name(&face, &[name_id::WWS_FAMILY, name_id::TYPOGRAPHIC_FAMILY, name_id::FAMILY])
        .ok_or_else(|| missing(path, "family"))?;
    let subfamily = first_name(
        &face,
        &[name_id::WWS_SUBFAMILY, name_id::TYPOGRAPHIC_SUBFAMILY, name_id::SUBFAMILY],
    )
    .ok_or_else(|| missing(path, "subfamily"))?;
    let full_name = best_full_name(&face).ok_or_else(|| missing(path, "full"))?;

    tracing::trace!(
        "Read font names from {}: family={:?} subfamily={:?} full_name={:?}",
        path.display(),
        family,
        subfamily,
        full_name
    );

    Ok(FontMetadata::new(family, subfamily, full_name))
}

fn missing(path: &Path, name: &'static str) -> MetadataError {
    MetadataError::MissingName {
        path: path.to_path_buf(),
        name,
    }
}

fn best_full_name(face: &Face<'_>) -> Option<String> {
    let pairs = [
        (name_id::WWS_FAMILY, name_id::WWS_SUBFAMILY),
        (name_id::TYPOGRAPHIC_FAMILY, name_id::TYPOGRAPHIC_SUBFAMILY),
        (name_id::FAMILY, name_id::SUBFAMILY),
    ];
    for (family_id, subfamily_id) in pairs {
        let (Some(family), Some(subfamily)) = (name(face, family_id), name(face, subfamily_id))
        else {
            continue;
        };
        if subfamily.eq_ignore_ascii_case("regular") {
            return Some(family);
        }
        return Some(format!("{} {}", family, subfamily));
    }
    first_name(face, &[name_id::FULL_NAME, name_id::POST_SCRIPT_NAME])
}

fn first_name(face: &Face<'_>, ids: &[u16]) -> Option<String> {
    ids.iter().find_map(|&id| name(face, id))
}

/// Look up a single name ID, preferring English records.
fn name(face: &Face<'_>, id: u16) -> Option<String> {
    let mut fallback = None;
    for record in face.names() {
        if record.name_id != id {
            continue;
        }
        let Some(value) = record.to_string().filter(|v| !v.trim().is_empty()) else {
            continue;
        };
        let english = match record.platform_id {
            PlatformId::Windows => record.language_id == WINDOWS_ENGLISH_US,
            PlatformId::Macintosh => record.language_id == MACINTOSH_ENGLISH,
            _ => false,
        };
        if english {
            return Some(value);
        }
        fallback.get_or_insert(value);
    }
    fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.ttf");

        let err = TtfMetadataProvider.extract(&path).unwrap_err();
        assert!(matches!(err, MetadataError::Read { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn garbage_is_parse_error() {
        let mut file = NamedTempFile::with_suffix(".ttf").unwrap();
        file.write_all(b"definitely not a font").unwrap();

        let err = TtfMetadataProvider.extract(file.path()).unwrap_err();
        assert!(matches!(err, MetadataError::Parse { .. }));
        assert!(err.to_string().contains("Failed to parse font"));
    }

    #[test]
    fn empty_data_is_parse_error() {
        let err = metadata_from_bytes(&[], Path::new("empty.otf")).unwrap_err();
        assert!(matches!(err, MetadataError::Parse { .. }));
    }
}
