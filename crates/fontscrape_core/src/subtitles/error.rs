//! Subtitle error types.

use std::io;
use std::path::PathBuf;

/// Errors that can occur while loading a subtitle document.
#[derive(Debug, thiserror::Error)]
pub enum SubtitleError {
    /// The subtitle file does not exist.
    #[error("File does not exist: '{path}'")]
    NotFound { path: PathBuf },

    /// The subtitle file exists but cannot be opened.
    #[error("Cannot open the file '{path}': {source}")]
    AccessDenied { path: PathBuf, source: io::Error },

    /// Any other read failure.
    #[error("Failed to read file '{path}': {source}")]
    ReadError { path: PathBuf, source: io::Error },

    /// The file was read but its content is invalid.
    #[error("Failed to parse '{path}': {source}")]
    ParseError { path: PathBuf, source: ParseError },
}

/// Errors that can occur during subtitle parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Invalid style definition.
    #[error("Invalid style at line {line}: {message}")]
    InvalidStyle { line: usize, message: String },

    /// Invalid dialogue line.
    #[error("Invalid event at line {line}: {message}")]
    InvalidEvent { line: usize, message: String },

    /// A dialogue line names a style that is not defined.
    #[error("Dialogue at line {line} references unknown style '{style}'")]
    UnknownStyle { line: usize, style: String },
}

impl SubtitleError {
    /// Classify an I/O error raised while opening or reading `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::AccessDenied { path, source },
            _ => Self::ReadError { path, source },
        }
    }

    /// Attach a path to a parse error.
    pub fn parse(path: impl Into<PathBuf>, source: ParseError) -> Self {
        Self::ParseError {
            path: path.into(),
            source,
        }
    }

    /// Path of the offending document.
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::NotFound { path }
            | Self::AccessDenied { path, .. }
            | Self::ReadError { path, .. }
            | Self::ParseError { path, .. } => path,
        }
    }
}

impl ParseError {
    /// Create an invalid style error.
    pub fn invalid_style(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidStyle {
            line,
            message: message.into(),
        }
    }

    /// Create an invalid event error.
    pub fn invalid_event(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidEvent {
            line,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_errors_are_classified_by_kind() {
        let not_found = SubtitleError::read("a.ssa", io::Error::from(io::ErrorKind::NotFound));
        assert!(matches!(not_found, SubtitleError::NotFound { .. }));
        assert!(not_found.to_string().contains("a.ssa"));

        let denied = SubtitleError::read("b.ssa", io::Error::from(io::ErrorKind::PermissionDenied));
        assert!(matches!(denied, SubtitleError::AccessDenied { .. }));

        let other = SubtitleError::read("c.ssa", io::Error::from(io::ErrorKind::InvalidData));
        assert!(matches!(other, SubtitleError::ReadError { .. }));
        assert_eq!(other.path(), std::path::Path::new("c.ssa"));
    }
}
