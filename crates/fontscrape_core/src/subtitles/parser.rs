//! SSA/ASS line parser.
//!
//! Lines are classified by literal prefix only. Fields are comma-separated
//! with fixed positions:
//!
//! - `Style: Name,Fontname,Fontsize,Primary,Secondary,Outline,Back,Bold,Italic,...`
//! - `Dialogue: Layer,Start,End,Style,Name,MarginL,MarginR,MarginV,Effect,Text`
//!
//! The dialogue text is everything after the ninth comma and may itself
//! contain commas.

use super::error::ParseError;
use super::types::{DialogueRecord, OverrideTags, StyleRecord};

/// Prefix of style definition lines.
pub const STYLE_PREFIX: &str = "Style: ";
/// Prefix of dialogue lines.
pub const DIALOGUE_PREFIX: &str = "Dialogue: ";

const STYLE_NAME: usize = 0;
const STYLE_FAMILY: usize = 1;
const STYLE_BOLD: usize = 7;
const STYLE_ITALIC: usize = 8;
const STYLE_MIN_FIELDS: usize = STYLE_ITALIC + 1;

const DIALOGUE_STYLE: usize = 3;
const DIALOGUE_TEXT: usize = 9;
const DIALOGUE_FIELDS: usize = DIALOGUE_TEXT + 1;

/// Parse a `Style:` line.
pub fn parse_style_line(line: &str, line_num: usize) -> Result<StyleRecord, ParseError> {
    let content = line
        .strip_prefix(STYLE_PREFIX)
        .ok_or_else(|| ParseError::invalid_style(line_num, "Missing 'Style: ' prefix"))?;
    let fields: Vec<&str> = content.split(',').collect();

    if fields.len() < STYLE_MIN_FIELDS {
        return Err(ParseError::invalid_style(
            line_num,
            format!(
                "Expected at least {} fields, got {}",
                STYLE_MIN_FIELDS,
                fields.len()
            ),
        ));
    }

    let family = fields[STYLE_FAMILY].trim();
    if family.is_empty() {
        return Err(ParseError::invalid_style(line_num, "Empty font name"));
    }

    Ok(StyleRecord {
        name: fields[STYLE_NAME].trim().to_string(),
        family: family.to_string(),
        bold: is_active_flag(fields[STYLE_BOLD]),
        italic: is_active_flag(fields[STYLE_ITALIC]),
        line: line_num,
    })
}

/// Parse a `Dialogue:` line.
pub fn parse_dialogue_line(line: &str, line_num: usize) -> Result<DialogueRecord, ParseError> {
    let content = line
        .strip_prefix(DIALOGUE_PREFIX)
        .ok_or_else(|| ParseError::invalid_event(line_num, "Missing 'Dialogue: ' prefix"))?;
    let parts: Vec<&str> = content.splitn(DIALOGUE_FIELDS, ',').collect();

    if parts.len() < DIALOGUE_FIELDS {
        return Err(ParseError::invalid_event(
            line_num,
            format!(
                "Expected at least {} fields, got {}",
                DIALOGUE_FIELDS,
                parts.len()
            ),
        ));
    }

    Ok(DialogueRecord {
        style: parts[DIALOGUE_STYLE].trim().to_string(),
        text: parts[DIALOGUE_TEXT].to_string(),
        line: line_num,
    })
}

/// Collect font overrides from the `{...}` blocks of a dialogue text.
///
/// Each tag starts with `\` and runs to the next `\` or the end of the block.
/// When a setting appears more than once the last occurrence wins.
pub fn parse_override_tags(text: &str) -> OverrideTags {
    let mut tags = OverrideTags::default();
    let mut rest = text;

    while let Some(open) = rest.find('{') {
        let after = &rest[open + 1..];
        let (block, remainder) = match after.find('}') {
            Some(close) => (&after[..close], &after[close + 1..]),
            // Unterminated block runs to the end of the line.
            None => (after, ""),
        };
        scan_block(block, &mut tags);
        rest = remainder;
    }

    tags
}

fn scan_block(block: &str, tags: &mut OverrideTags) {
    for tag in block.split('\\').skip(1) {
        if let Some(name) = tag.strip_prefix("fn") {
            // A bare `\fn` resets to the style's font.
            let name = name.trim();
            tags.family = (!name.is_empty()).then(|| name.to_string());
        } else if let Some(value) = tag.strip_prefix('b') {
            if let Some(active) = toggle_value(value) {
                tags.bold = Some(active);
            }
        } else if let Some(value) = tag.strip_prefix('i') {
            if let Some(active) = toggle_value(value) {
                tags.italic = Some(active);
            }
        }
    }
}

/// Numeric toggle value: `Some(true)` for non-zero, `Some(false)` for zero.
///
/// Returns `None` for anything that is not all digits, which keeps tags
/// like `\bord`, `\blur`, `\be` and `\iclip` from being read as toggles.
fn toggle_value(value: &str) -> Option<bool> {
    let value = value.trim();
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    Some(value.bytes().any(|b| b != b'0'))
}

fn is_active_flag(value: &str) -> bool {
    let value = value.trim();
    value == "-1" || value == "1"
}

#[cfg(test)]
mod tests {
    use super::*;

    const STYLE: &str =
        "Style: Main,Arial,20,&H00FFFFFF,&H000000FF,&H00000000,&H00000000,-1,-1,0,0,100,100,0,0,1,2,2,2,10,10,10,1";

    #[test]
    fn style_line_fields() {
        let style = parse_style_line(STYLE, 7).unwrap();
        assert_eq!(style.name, "Main");
        assert_eq!(style.family, "Arial");
        assert!(style.bold);
        assert!(style.italic);
        assert_eq!(style.line, 7);
    }

    #[test]
    fn style_flags_inactive_unless_minus_one() {
        let style = parse_style_line("Style: Sign, Gill Sans ,20,a,b,c,d,0,-1", 1).unwrap();
        assert_eq!(style.family, "Gill Sans");
        assert!(!style.bold);
        assert!(style.italic);
    }

    #[test]
    fn short_style_line_is_rejected() {
        let err = parse_style_line("Style: Main,Arial,20", 3).unwrap_err();
        assert_eq!(
            err,
            ParseError::invalid_style(3, "Expected at least 9 fields, got 3")
        );
    }

    #[test]
    fn style_without_family_is_rejected() {
        let err = parse_style_line("Style: Main,,20,a,b,c,d,0,0", 2).unwrap_err();
        assert!(matches!(err, ParseError::InvalidStyle { line: 2, .. }));
    }

    #[test]
    fn dialogue_text_keeps_commas() {
        let line = "Dialogue: 0,0:00:01.00,0:00:04.00, Main ,,0,0,0,,Hello, {\\b1}world!";
        let dialogue = parse_dialogue_line(line, 12).unwrap();
        assert_eq!(dialogue.style, "Main");
        assert_eq!(dialogue.text, "Hello, {\\b1}world!");
        assert_eq!(dialogue.line, 12);
    }

    #[test]
    fn dialogue_with_empty_text() {
        let dialogue = parse_dialogue_line("Dialogue: 0,0:00:01.00,0:00:02.00,Main,,0,0,0,,", 1).unwrap();
        assert_eq!(dialogue.text, "");
    }

    #[test]
    fn short_dialogue_line_is_rejected() {
        let err = parse_dialogue_line("Dialogue: 0,0:00:01.00,0:00:02.00,Main", 9).unwrap_err();
        assert!(matches!(err, ParseError::InvalidEvent { line: 9, .. }));
    }

    #[test]
    fn override_tags_font_and_toggles() {
        let tags = parse_override_tags("{\\fnComic Sans MS\\b1\\i0}Hi");
        assert_eq!(tags.family.as_deref(), Some("Comic Sans MS"));
        assert_eq!(tags.bold, Some(true));
        assert_eq!(tags.italic, Some(false));
    }

    #[test]
    fn weight_values_count_as_active() {
        let tags = parse_override_tags("{\\b700}Heavy");
        assert_eq!(tags.bold, Some(true));
    }

    #[test]
    fn lookalike_tags_are_not_toggles() {
        let tags = parse_override_tags("{\\bord2\\blur1\\be1\\iclip(0,0,10,10)\\fs20\\fscx110}Text");
        assert!(tags.is_empty());
    }

    #[test]
    fn last_occurrence_wins() {
        let tags = parse_override_tags("{\\b1\\fnArial}one {\\b0\\fnGothic}two");
        assert_eq!(tags.bold, Some(false));
        assert_eq!(tags.family.as_deref(), Some("Gothic"));
    }

    #[test]
    fn bare_font_reset_is_not_an_override() {
        let tags = parse_override_tags("{\\fnArial}one{\\fn}two");
        assert_eq!(tags.family, None);
        assert!(tags.is_empty());
    }

    #[test]
    fn tags_outside_blocks_are_ignored() {
        let tags = parse_override_tags("C:\\b1\\fnfake plain text");
        assert!(tags.is_empty());
    }

    #[test]
    fn unterminated_block_is_scanned() {
        let tags = parse_override_tags("{\\i1 dangling");
        assert_eq!(tags.italic, None);

        let tags = parse_override_tags("{\\i1");
        assert_eq!(tags.italic, Some(true));
    }
}
