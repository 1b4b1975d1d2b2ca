//! Font requirement extraction.
//!
//! Two passes over the script:
//! 1. **Styles**: every `Style:` line becomes a candidate requirement. Styles
//!    that no dialogue line uses are pruned.
//! 2. **Dialogue**: every `Dialogue:` line with at least one font override
//!    becomes its own requirement, inheriting whatever the override leaves
//!    untouched from the line's style.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use super::error::{ParseError, SubtitleError};
use super::parser::{
    parse_dialogue_line, parse_override_tags, parse_style_line, DIALOGUE_PREFIX, STYLE_PREFIX,
};
use super::types::{DialogueRecord, StyleRecord};
use crate::models::{FontRequirement, RequirementOrigin};

/// The font requirements of one subtitle document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubtitleFonts {
    /// Style requirements (file order) followed by dialogue overrides (line order).
    requirements: Vec<FontRequirement>,
    /// Number of leading style requirements.
    style_count: usize,
}

impl SubtitleFonts {
    /// Load and extract the requirements of a subtitle file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SubtitleError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| SubtitleError::read(path, e))?;
        let fonts = Self::parse(&content).map_err(|e| SubtitleError::parse(path, e))?;

        tracing::debug!(
            "Extracted {} style and {} override font(s) from {}",
            fonts.style_count,
            fonts.override_requirements().len(),
            path.display()
        );
        Ok(fonts)
    }

    /// Extract the requirements of subtitle content.
    pub fn parse(content: &str) -> Result<Self, ParseError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let mut styles: Vec<StyleRecord> = Vec::new();
        let mut dialogues: Vec<DialogueRecord> = Vec::new();

        for (idx, line) in content.lines().enumerate() {
            let line_num = idx + 1;
            if line.starts_with(STYLE_PREFIX) {
                styles.push(parse_style_line(line, line_num)?);
            } else if line.starts_with(DIALOGUE_PREFIX) {
                dialogues.push(parse_dialogue_line(line, line_num)?);
            }
        }

        // Styles pass: keep only the styles some dialogue line uses.
        let used: HashSet<&str> = dialogues.iter().map(|d| d.style.as_str()).collect();
        let styles: Vec<StyleRecord> = styles
            .into_iter()
            .filter(|style| used.contains(style.name.as_str()))
            .collect();

        let mut requirements: Vec<FontRequirement> = styles
            .iter()
            .map(|style| {
                FontRequirement::new(
                    RequirementOrigin::Style(style.name.clone()),
                    style.family.clone(),
                    style.subfamily(),
                )
            })
            .collect();
        let style_count = requirements.len();

        // Dialogue pass.
        for (idx, dialogue) in dialogues.iter().enumerate() {
            let style = styles
                .iter()
                .find(|style| style.name == dialogue.style)
                .ok_or_else(|| ParseError::UnknownStyle {
                    line: dialogue.line,
                    style: dialogue.style.clone(),
                })?;

            let tags = parse_override_tags(&dialogue.text);
            if tags.is_empty() {
                continue;
            }

            let family = tags.family.clone().unwrap_or_else(|| style.family.clone());
            let subfamily = tags.apply(&style.subfamily());
            let origin = RequirementOrigin::Dialogue {
                index: idx + 1,
                line: dialogue.line,
            };
            requirements.push(FontRequirement::new(origin, family, subfamily));
        }

        Ok(Self {
            requirements,
            style_count,
        })
    }

    /// All requirements: used styles first, then dialogue overrides.
    pub fn requirements(&self) -> &[FontRequirement] {
        &self.requirements
    }

    /// Requirements of the styles used by dialogue.
    pub fn style_requirements(&self) -> &[FontRequirement] {
        &self.requirements[..self.style_count]
    }

    /// Requirements of dialogue lines with inline overrides.
    pub fn override_requirements(&self) -> &[FontRequirement] {
        &self.requirements[self.style_count..]
    }

    pub fn len(&self) -> usize {
        self.requirements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requirements.is_empty()
    }
}

impl<'a> IntoIterator for &'a SubtitleFonts {
    type Item = &'a FontRequirement;
    type IntoIter = std::slice::Iter<'a, FontRequirement>;

    fn into_iter(self) -> Self::IntoIter {
        self.requirements.iter()
    }
}
