//! fontscrape core - subtitle font extraction and fuzzy font matching.
//!
//! This crate contains all matching logic with zero CLI dependencies.
//! Given a directory of font files and one or more SSA/ASS subtitle scripts,
//! it works out which font files the scripts need.
//!
//! # Pipeline
//!
//! subtitle text -> [`subtitles::SubtitleFonts`] -> font requirements ->
//! [`fonts::FontLibrary::resolve`] -> matched fonts, deduplicated by path in
//! [`pipeline::BatchReport`].

pub mod config;
pub mod fonts;
pub mod logging;
pub mod models;
pub mod pipeline;
pub mod subtitles;

/// Returns the crate version.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_returns_value() {
        assert!(!version().is_empty());
    }
}
