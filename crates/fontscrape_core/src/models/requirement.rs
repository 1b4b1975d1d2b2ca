//! Font requirements extracted from subtitle scripts.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

/// Style attribute a subtitle can request from a font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleAttribute {
    Bold,
    Italic,
}

impl StyleAttribute {
    /// Lowercase token as used in font subfamily names.
    pub fn token(&self) -> &'static str {
        match self {
            StyleAttribute::Bold => "bold",
            StyleAttribute::Italic => "italic",
        }
    }

    /// Capitalized word as used in font full names.
    pub fn word(&self) -> &'static str {
        match self {
            StyleAttribute::Bold => "Bold",
            StyleAttribute::Italic => "Italic",
        }
    }
}

impl fmt::Display for StyleAttribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Requested style attributes, ordered bold before italic.
pub type Subfamily = BTreeSet<StyleAttribute>;

/// Where a requirement came from.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequirementOrigin {
    /// A named style definition.
    Style(String),
    /// Inline overrides on a dialogue line.
    Dialogue {
        /// 1-based position among dialogue lines.
        index: usize,
        /// 1-based line number in the document.
        line: usize,
    },
}

impl fmt::Display for RequirementOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequirementOrigin::Style(name) => write!(f, "{}", name),
            RequirementOrigin::Dialogue { index, .. } => write!(f, "dialogue#{:05}", index),
        }
    }
}

/// A font needed by a subtitle script.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FontRequirement {
    /// Style name or dialogue line the requirement was extracted from.
    pub origin: RequirementOrigin,
    /// Requested family name, as typed in the script.
    pub family: String,
    /// Requested style attributes.
    pub subfamily: Subfamily,
}

impl FontRequirement {
    pub fn new(
        origin: RequirementOrigin,
        family: impl Into<String>,
        subfamily: impl IntoIterator<Item = StyleAttribute>,
    ) -> Self {
        Self {
            origin,
            family: family.into(),
            subfamily: subfamily.into_iter().collect(),
        }
    }

    /// Family followed by the capitalized subfamily words (e.g., "Arial Bold").
    ///
    /// With no subfamily this is just the family.
    pub fn styled_name(&self) -> String {
        if self.subfamily.is_empty() {
            return self.family.clone();
        }
        let words: Vec<&str> = self.subfamily.iter().map(StyleAttribute::word).collect();
        format!("{} {}", self.family, words.join(" "))
    }

    /// Human-readable subfamily list for log output.
    pub fn subfamily_display(&self) -> String {
        if self.subfamily.is_empty() {
            "None".to_string()
        } else {
            self.subfamily
                .iter()
                .map(StyleAttribute::token)
                .collect::<Vec<_>>()
                .join(", ")
        }
    }
}
