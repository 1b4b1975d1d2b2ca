//! Subtitle font extraction.
//!
//! Turns SSA/ASS script text into the ordered list of font requirements the
//! script actually needs.
//!
//! # Components
//!
//! - **parser**: Fixed-position `Style:`/`Dialogue:` line parsing and inline override tags
//! - **extractor**: Style pruning and dialogue inheritance
//!
//! # Usage
//!
//! ```no_run
//! use fontscrape_core::subtitles::SubtitleFonts;
//!
//! let fonts = SubtitleFonts::from_file("episode01.ssa")?;
//! for requirement in fonts.requirements() {
//!     println!("{}: {} ({})", requirement.origin, requirement.family, requirement.subfamily_display());
//! }
//! # Ok::<(), fontscrape_core::subtitles::SubtitleError>(())
//! ```

mod error;
mod extractor;
pub mod parser;
mod types;

pub use error::{ParseError, SubtitleError};
pub use extractor::SubtitleFonts;
pub use parser::{parse_dialogue_line, parse_override_tags, parse_style_line};
pub use types::{DialogueRecord, OverrideTags, StyleRecord};

/// File extensions recognized as subtitle scripts.
pub const SUBTITLE_EXTENSIONS: [&str; 2] = ["ssa", "ass"];

/// Check whether a path has a recognized subtitle extension.
pub fn is_subtitle_file(path: &std::path::Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            SUBTITLE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn recognizes_subtitle_extensions() {
        assert!(is_subtitle_file(Path::new("a.ssa")));
        assert!(is_subtitle_file(Path::new("b.ASS")));
        assert!(!is_subtitle_file(Path::new("c.srt")));
        assert!(!is_subtitle_file(Path::new("ssa")));
    }
}
