//! Records produced by the subtitle line parser.

use crate::models::{StyleAttribute, Subfamily};

/// The font-related fields of a `Style:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleRecord {
    /// Style name.
    pub name: String,
    /// Font family name.
    pub family: String,
    /// Bold flag is active.
    pub bold: bool,
    /// Italic flag is active.
    pub italic: bool,
    /// 1-based line number.
    pub line: usize,
}

impl StyleRecord {
    /// Style attributes set by the style's flags.
    pub fn subfamily(&self) -> Subfamily {
        let mut subfamily = Subfamily::new();
        if self.bold {
            subfamily.insert(StyleAttribute::Bold);
        }
        if self.italic {
            subfamily.insert(StyleAttribute::Italic);
        }
        subfamily
    }
}

/// The style reference and text payload of a `Dialogue:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogueRecord {
    /// Name of the style the line uses.
    pub style: String,
    /// Text payload, including override blocks.
    pub text: String,
    /// 1-based line number.
    pub line: usize,
}

/// Font overrides found in a dialogue line's text.
///
/// `None` means the line does not touch that setting.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OverrideTags {
    /// `\fn<name>`.
    pub family: Option<String>,
    /// `\b<n>`: non-zero forces bold on, zero forces it off.
    pub bold: Option<bool>,
    /// `\i<n>`: non-zero forces italic on, zero forces it off.
    pub italic: Option<bool>,
}

impl OverrideTags {
    /// The line carries no recognized font override.
    pub fn is_empty(&self) -> bool {
        self.family.is_none() && self.bold.is_none() && self.italic.is_none()
    }

    /// Resolve the subfamily of an overridden line from the style's.
    ///
    /// - Any attribute forced on: the inherited set plus the forced ones.
    /// - Only attributes forced off: nothing is inherited.
    /// - No toggles (`\fn` only): the inherited set unchanged.
    pub fn apply(&self, inherited: &Subfamily) -> Subfamily {
        let toggles = [
            (StyleAttribute::Bold, self.bold),
            (StyleAttribute::Italic, self.italic),
        ];

        let activated: Subfamily = toggles
            .iter()
            .filter(|(_, toggle)| *toggle == Some(true))
            .map(|(attribute, _)| *attribute)
            .collect();
        if !activated.is_empty() {
            return inherited.union(&activated).copied().collect();
        }

        if toggles.iter().any(|(_, toggle)| toggle.is_some()) {
            return Subfamily::new();
        }
        inherited.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use StyleAttribute::{Bold, Italic};

    #[test]
    fn style_flags_map_to_subfamily() {
        let style = StyleRecord {
            name: "Main".into(),
            family: "Arial".into(),
            bold: true,
            italic: false,
            line: 1,
        };
        assert_eq!(style.subfamily(), Subfamily::from([Bold]));
    }

    #[test]
    fn activation_adds_to_inherited() {
        let tags = OverrideTags {
            bold: Some(true),
            ..Default::default()
        };
        assert_eq!(tags.apply(&Subfamily::from([Italic])), Subfamily::from([Bold, Italic]));
        assert_eq!(tags.apply(&Subfamily::new()), Subfamily::from([Bold]));
    }

    #[test]
    fn deactivation_inherits_nothing() {
        let tags = OverrideTags {
            bold: Some(false),
            ..Default::default()
        };
        assert_eq!(tags.apply(&Subfamily::from([Bold])), Subfamily::new());
        assert_eq!(tags.apply(&Subfamily::from([Bold, Italic])), Subfamily::new());
    }

    #[test]
    fn activation_wins_over_deactivation() {
        let tags = OverrideTags {
            bold: Some(true),
            italic: Some(false),
            ..Default::default()
        };
        assert_eq!(tags.apply(&Subfamily::from([Italic])), Subfamily::from([Bold, Italic]));
        assert_eq!(tags.apply(&Subfamily::new()), Subfamily::from([Bold]));
    }

    #[test]
    fn family_only_keeps_inherited_subfamily() {
        let tags = OverrideTags {
            family: Some("Gothic".into()),
            ..Default::default()
        };
        assert!(!tags.is_empty());
        assert_eq!(tags.apply(&Subfamily::from([Italic])), Subfamily::from([Italic]));
        assert!(OverrideTags::default().is_empty());
    }
}
