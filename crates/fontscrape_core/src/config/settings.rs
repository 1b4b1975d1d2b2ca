//! Settings struct with TOML-based sections.
//!
//! Settings are organized into logical sections that map to TOML tables.

use serde::{Deserialize, Serialize};

use crate::fonts::{MatchOptions, MatchStrategy, MetadataErrorPolicy, SimilarityAlgorithm};
use crate::logging::LogLevel;

/// Root settings structure containing all configuration sections.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Font library settings.
    #[serde(default)]
    pub library: LibrarySettings,

    /// Font matching settings.
    #[serde(default)]
    pub matching: MatchingSettings,

    /// Logging configuration.
    #[serde(default)]
    pub logging: LoggingSettings,
}

/// Configuration sections (TOML tables).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSection {
    Library,
    Matching,
    Logging,
}

impl ConfigSection {
    /// All sections, in file order.
    pub const ALL: [ConfigSection; 3] = [
        ConfigSection::Library,
        ConfigSection::Matching,
        ConfigSection::Logging,
    ];

    /// TOML table name of the section.
    pub fn table_name(&self) -> &'static str {
        match self {
            ConfigSection::Library => "library",
            ConfigSection::Matching => "matching",
            ConfigSection::Logging => "logging",
        }
    }

    /// Comment written above the section.
    pub(crate) fn description(&self) -> &'static str {
        match self {
            ConfigSection::Library => "Font library location and indexing",
            ConfigSection::Matching => "Fuzzy font matching",
            ConfigSection::Logging => "Logging configuration",
        }
    }
}

/// Font library settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LibrarySettings {
    /// Directory containing the font files.
    #[serde(default = "default_font_dir")]
    pub font_dir: String,

    /// What to do with fonts whose metadata cannot be read.
    #[serde(default)]
    pub metadata_errors: MetadataErrorPolicy,
}

fn default_font_dir() -> String {
    "fonts".to_string()
}

impl Default for LibrarySettings {
    fn default() -> Self {
        Self {
            font_dir: default_font_dir(),
            metadata_errors: MetadataErrorPolicy::default(),
        }
    }
}

/// Font matching settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchingSettings {
    /// Matching algorithm.
    #[serde(default)]
    pub strategy: MatchStrategy,

    /// Minimum similarity score (0-100).
    #[serde(default = "default_threshold")]
    pub threshold: u8,

    /// Allow family-only matches when nothing else matches.
    #[serde(default = "default_true")]
    pub downgrade: bool,

    /// Ignore bold/italic when comparing subfamilies.
    #[serde(default)]
    pub ignore_regular: bool,

    /// String similarity measure.
    #[serde(default)]
    pub similarity: SimilarityAlgorithm,
}

fn default_threshold() -> u8 {
    90
}

fn default_true() -> bool {
    true
}

impl Default for MatchingSettings {
    fn default() -> Self {
        Self {
            strategy: MatchStrategy::default(),
            threshold: default_threshold(),
            downgrade: default_true(),
            ignore_regular: false,
            similarity: SimilarityAlgorithm::default(),
        }
    }
}

impl MatchingSettings {
    /// Build matching options for the font library.
    pub fn to_options(&self) -> MatchOptions {
        MatchOptions {
            strategy: self.strategy,
            threshold: self.threshold,
            allow_downgrade: self.downgrade,
            ignore_regular: self.ignore_regular,
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// Default log level (RUST_LOG takes precedence).
    #[serde(default)]
    pub level: LogLevel,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let settings = Settings::default();
        assert_eq!(settings.library.font_dir, "fonts");
        assert_eq!(settings.library.metadata_errors, MetadataErrorPolicy::Abort);
        assert_eq!(settings.matching.threshold, 90);
        assert!(settings.matching.downgrade);
        assert_eq!(settings.matching.strategy, MatchStrategy::FullName);
        assert_eq!(settings.logging.level, LogLevel::Info);
        assert_eq!(settings.matching.to_options(), MatchOptions::default());
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let settings: Settings = toml::from_str(
            "[matching]\nstrategy = \"families\"\nthreshold = 80\n\n[library]\nmetadata_errors = \"skip\"\n",
        )
        .unwrap();

        assert_eq!(settings.matching.strategy, MatchStrategy::Families);
        assert_eq!(settings.matching.threshold, 80);
        assert!(settings.matching.downgrade);
        assert_eq!(settings.library.font_dir, "fonts");
        assert_eq!(settings.library.metadata_errors, MetadataErrorPolicy::Skip);
    }
}
