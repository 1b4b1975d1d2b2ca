//! Config manager for loading, saving, and validation.
//!
//! Key features:
//! - Atomic writes (write to temp file, then rename)
//! - Validation on load (unknown sections are reported, bad values rejected)
//! - Missing keys fall back to defaults

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;
use toml_edit::DocumentMut;

use super::settings::{ConfigSection, Settings};

/// Errors that can occur during config operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),

    #[error("Failed to parse config for editing: {0}")]
    EditParseError(#[from] toml_edit::TomlError),

    #[error("Config file not found: {0}")]
    NotFound(PathBuf),

    #[error("Invalid config value: {0}")]
    Invalid(String),
}

/// Result type for config operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Manages application configuration.
pub struct ConfigManager {
    /// Path to the config file.
    config_path: PathBuf,
    /// Current settings loaded in memory.
    settings: Settings,
}

impl ConfigManager {
    /// Create a new config manager with the given config file path.
    ///
    /// Does not load the config - call `load()` or `load_or_create()` after.
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
            settings: Settings::default(),
        }
    }

    /// Get the config file path.
    pub fn path(&self) -> &Path {
        &self.config_path
    }

    /// Get a reference to the current settings.
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Get a mutable reference to the current settings.
    ///
    /// Note: Changes made here are only in memory until `save()` is called.
    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Consume the manager, returning the settings.
    pub fn into_settings(self) -> Settings {
        self.settings
    }

    /// Load config from file.
    ///
    /// Returns error if file doesn't exist.
    pub fn load(&mut self) -> ConfigResult<()> {
        if !self.config_path.exists() {
            return Err(ConfigError::NotFound(self.config_path.clone()));
        }

        let content = fs::read_to_string(&self.config_path)?;
        self.settings = parse_and_validate(&content)?;
        Ok(())
    }

    /// Load config from file, creating it with defaults if it doesn't exist.
    pub fn load_or_create(&mut self) -> ConfigResult<()> {
        if self.config_path.exists() {
            return self.load();
        }

        self.settings = Settings::default();
        self.save()
    }

    /// Save the entire config atomically.
    ///
    /// Writes to a temp file first, then renames to ensure atomic write.
    pub fn save(&self) -> ConfigResult<()> {
        let content = self.generate_config_with_comments()?;
        self.atomic_write(&content)?;
        tracing::debug!("Saved config to {}", self.config_path.display());
        Ok(())
    }

    /// Generate config content with a comment above each section.
    fn generate_config_with_comments(&self) -> ConfigResult<String> {
        let mut output = String::new();
        output.push_str("# fontscrape configuration\n\n");

        for section in ConfigSection::ALL {
            let content = match section {
                ConfigSection::Library => toml::to_string_pretty(&self.settings.library)?,
                ConfigSection::Matching => toml::to_string_pretty(&self.settings.matching)?,
                ConfigSection::Logging => toml::to_string_pretty(&self.settings.logging)?,
            };

            output.push_str(&format!("# {}\n", section.description()));
            output.push_str(&format!("[{}]\n", section.table_name()));
            for line in content.lines() {
                output.push_str(line);
                output.push('\n');
            }
            output.push('\n');
        }

        Ok(output)
    }

    /// Write content to config file atomically.
    ///
    /// Writes to a temp file first, then renames.
    fn atomic_write(&self, content: &str) -> io::Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent)?;
        }

        // Temp file in the same directory so the rename stays on one filesystem.
        let temp_path = self.config_path.with_extension("toml.tmp");

        {
            let mut file = fs::File::create(&temp_path)?;
            file.write_all(content.as_bytes())?;
            file.sync_all()?;
        }

        fs::rename(&temp_path, &self.config_path)?;

        Ok(())
    }
}

/// Parse config content, reporting unknown sections and rejecting bad values.
fn parse_and_validate(content: &str) -> ConfigResult<Settings> {
    let doc: DocumentMut = content.parse()?;
    for (key, _) in doc.iter() {
        if !ConfigSection::ALL.iter().any(|s| s.table_name() == key) {
            tracing::warn!("Ignoring unknown config section '{}'", key);
        }
    }

    let settings: Settings = toml::from_str(content)?;
    if settings.matching.threshold > 100 {
        return Err(ConfigError::Invalid(format!(
            "matching.threshold must be between 0 and 100, got {}",
            settings.matching.threshold
        )));
    }
    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fonts::{MatchStrategy, SimilarityAlgorithm};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_or_create_creates_default() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(".config").join("fontscrape.toml");

        let mut manager = ConfigManager::new(&config_path);
        manager.load_or_create().unwrap();

        assert!(config_path.exists());
        let content = fs::read_to_string(&config_path).unwrap();
        assert!(content.contains("[library]"));
        assert!(content.contains("[matching]"));
        assert!(content.contains("[logging]"));
        assert!(content.contains("threshold = 90"));
    }

    #[test]
    fn load_or_create_preserves_existing() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("fontscrape.toml");

        fs::write(&config_path, "[library]\nfont_dir = \"my_fonts\"\n").unwrap();

        let mut manager = ConfigManager::new(&config_path);
        manager.load_or_create().unwrap();

        assert_eq!(manager.settings().library.font_dir, "my_fonts");
        assert_eq!(manager.settings().matching.threshold, 90);
    }

    #[test]
    fn saved_config_loads_back() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("fontscrape.toml");

        let mut manager = ConfigManager::new(&config_path);
        manager.settings_mut().matching.strategy = MatchStrategy::Families;
        manager.settings_mut().matching.similarity = SimilarityAlgorithm::JaroWinkler;
        manager.save().unwrap();

        let mut reloaded = ConfigManager::new(&config_path);
        reloaded.load().unwrap();
        assert_eq!(reloaded.settings(), manager.settings());
    }

    #[test]
    fn load_missing_file_fails() {
        let dir = tempdir().unwrap();
        let mut manager = ConfigManager::new(dir.path().join("absent.toml"));
        assert!(matches!(manager.load(), Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn threshold_above_100_is_rejected() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("fontscrape.toml");
        fs::write(&config_path, "[matching]\nthreshold = 150\n").unwrap();

        let mut manager = ConfigManager::new(&config_path);
        assert!(matches!(manager.load(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn unknown_sections_are_tolerated() {
        let settings = parse_and_validate("[paths]\noutput = \"x\"\n[matching]\ndowngrade = false\n").unwrap();
        assert!(!settings.matching.downgrade);
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            parse_and_validate("[matching\nthreshold = 1"),
            Err(ConfigError::EditParseError(_))
        ));
    }

    #[test]
    fn atomic_write_creates_no_temp_on_success() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join("fontscrape.toml");

        let mut manager = ConfigManager::new(&config_path);
        manager.load_or_create().unwrap();

        let temp_path = config_path.with_extension("toml.tmp");
        assert!(!temp_path.exists());
    }
}
