// crates/idfix-core/src/annotate.rs
//
// Inline marking of flagged ids in the raw input text.
//
// This is plain substring replacement of `"<original>"`, not a JSON-aware edit:
// - the same quoted string anywhere else in the text (e.g. as another field's
//   value) is rewritten too;
// - pairs are applied in registry order over the already-annotated text, so an
//   earlier marker can contain a later id's quoted form;
// - ids that need JSON escaping only match if the raw text spells them the same.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdfixError;
use crate::registry::ReasonRegistry;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnnotationStyle {
    /// Yellow/red `<span>`, for rendering as HTML.
    #[default]
    Html,
    /// `>>>...<<<`, for terminals.
    Plain,
}

impl AnnotationStyle {
    pub fn marker(self, original: &str, reason: &str) -> String {
        match self {
            AnnotationStyle::Html => format!(
                "<span style='background-color: yellow; color: red;'>{original} ### {reason} ###</span>"
            ),
            AnnotationStyle::Plain => format!(">>>{original} ### {reason} ###<<<"),
        }
    }
}

impl fmt::Display for AnnotationStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            AnnotationStyle::Html => "html",
            AnnotationStyle::Plain => "plain",
        })
    }
}

impl FromStr for AnnotationStyle {
    type Err = IdfixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(AnnotationStyle::Html),
            "plain" => Ok(AnnotationStyle::Plain),
            other => Err(IdfixError::Config(format!(
                "unknown annotation style {other:?} (expected \"html\" or \"plain\")"
            ))),
        }
    }
}

pub fn annotate(raw: &str, reasons: &ReasonRegistry, style: AnnotationStyle) -> String {
    let mut text = raw.to_string();
    for (original, reason) in reasons.iter() {
        let needle = format!("\"{original}\"");
        let marked = format!("\"{}\"", style.marker(original, reason));
        text = text.replace(&needle, &marked);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reg(pairs: &[(&str, &str)]) -> ReasonRegistry {
        let mut r = ReasonRegistry::new();
        for (k, v) in pairs {
            r.record(k, v.to_string());
        }
        r
    }

    #[test]
    fn html_marker_wraps_quoted_id() {
        let raw = r#"{"objects":[{"id":"Foo Bar"}]}"#;
        let out = annotate(
            raw,
            &reg(&[("Foo Bar", "invalid characters or uppercase")]),
            AnnotationStyle::Html,
        );
        assert_eq!(
            out,
            "{\"objects\":[{\"id\":\"<span style='background-color: yellow; color: red;'>Foo Bar ### invalid characters or uppercase ###</span>\"}]}"
        );
    }

    #[test]
    fn replacement_is_global_and_quote_bounded() {
        let raw = r#"{"objects":[{"id":"X","label":"X"},{"id":"XY"}]}"#;
        let out = annotate(raw, &reg(&[("X", "dup")]), AnnotationStyle::Plain);
        assert_eq!(
            out,
            r#"{"objects":[{"id":">>>X ### dup ###<<<","label":">>>X ### dup ###<<<"},{"id":"XY"}]}"#
        );
    }

    #[test]
    fn later_pairs_see_earlier_markers() {
        let raw = r#"{"id":"A"}"#;
        let first = "A";
        let second = ">>>A ### bad ###<<<";

        // second id's quoted form only exists after the first pair is applied
        let out = annotate(raw, &reg(&[(first, "bad"), (second, "dup")]), AnnotationStyle::Plain);
        assert_eq!(out, r#"{"id":">>>>>>A ### bad ###<<< ### dup ###<<<"}"#);

        // reversed order: the second pair finds nothing yet, so only one wrap
        let out = annotate(raw, &reg(&[(second, "dup"), (first, "bad")]), AnnotationStyle::Plain);
        assert_eq!(out, r#"{"id":">>>A ### bad ###<<<"}"#);
    }

    #[test]
    fn empty_registry_returns_text_unchanged() {
        let raw = "{\"objects\": []}";
        assert_eq!(annotate(raw, &ReasonRegistry::new(), AnnotationStyle::Html), raw);
    }

    #[test]
    fn style_parses() {
        assert_eq!("PLAIN".parse::<AnnotationStyle>().unwrap(), AnnotationStyle::Plain);
        assert!("markdown".parse::<AnnotationStyle>().is_err());
    }
}
