//! Font library error types.

use std::path::PathBuf;

/// Errors that can occur while reading metadata from a font file.
#[derive(Debug, thiserror::Error)]
pub enum MetadataError {
    /// Failed to read the font file.
    #[error("Failed to read font '{path}': {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The file is not a valid font container.
    #[error("Failed to parse font '{path}': {source}")]
    Parse {
        path: PathBuf,
        source: ttf_parser::FaceParsingError,
    },

    /// The `name` table has no usable entry for a required name.
    #[error("Font '{path}' has no {name} name")]
    MissingName { path: PathBuf, name: &'static str },
}

/// Errors that can occur while building a font library.
#[derive(Debug, thiserror::Error)]
pub enum LibraryError {
    /// Failed to list the library directory.
    #[error("Failed to read font directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// A font file could not be indexed.
    #[error(transparent)]
    Metadata(#[from] MetadataError),
}

impl MetadataError {
    /// Create a read error.
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    /// Path of the offending font file.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } | Self::MissingName { path, .. } => {
                path
            }
        }
    }
}

impl LibraryError {
    /// Create a directory listing error.
    pub fn read_dir(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }
}
