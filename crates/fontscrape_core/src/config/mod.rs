//! Configuration management for fontscrape.
//!
//! This module provides:
//! - TOML-based configuration with logical sections
//! - Atomic file writes (write to temp, then rename)
//! - Validation on load with automatic defaults
//!
//! # Example
//!
//! ```no_run
//! use fontscrape_core::config::ConfigManager;
//!
//! // Create manager and load (or create default) config
//! let mut config = ConfigManager::new("fontscrape.toml");
//! config.load_or_create().unwrap();
//!
//! // Read settings
//! println!("Font folder: {}", config.settings().library.font_dir);
//!
//! // Modify a setting and save
//! config.settings_mut().matching.threshold = 85;
//! config.save().unwrap();
//! ```

mod manager;
mod settings;

pub use manager::{ConfigError, ConfigManager, ConfigResult};
pub use settings::{ConfigSection, LibrarySettings, LoggingSettings, MatchingSettings, Settings};
