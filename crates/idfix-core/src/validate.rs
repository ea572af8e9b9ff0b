use std::collections::HashSet;

use serde_json::Value;

use crate::error::{IdfixError, Result};
use crate::normalize::{normalize, Policy};
use crate::registry::ReasonRegistry;

pub const REASON_INVALID: &str = "invalid characters or uppercase";
pub const REASON_DUPLICATE: &str = "duplicate";

/// What one pass over `objects` found.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Validation {
    pub reasons: ReasonRegistry,
    /// Length of the `objects` array.
    pub entries: usize,
    /// Entries that carried a string `id`.
    pub checked: usize,
}

/// Normalize every entry's `id` in place and record the ones that were
/// altered or collide with an earlier canonical id.
///
/// Fails with `Schema` before touching anything if `objects` is missing or
/// not an array. Non-object entries and non-string ids are left alone.
pub fn validate(document: &mut Value, policy: Policy) -> Result<Validation> {
    let objects = document
        .get_mut("objects")
        .and_then(Value::as_array_mut)
        .ok_or(IdfixError::Schema)?;

    let mut seen: HashSet<String> = HashSet::new();
    let mut out = Validation {
        entries: objects.len(),
        ..Validation::default()
    };

    for (i, entry) in objects.iter_mut().enumerate() {
        let Some(id) = entry.as_object_mut().and_then(|o| o.get_mut("id")) else {
            continue;
        };
        let Some(original) = id.as_str() else {
            tracing::warn!(index = i, value = %id, "skipping non-string id");
            continue;
        };

        let original = original.to_string();
        let canonical = normalize(&original, policy);
        out.checked += 1;

        let mut reason = String::new();
        if canonical != original {
            reason.push_str(REASON_INVALID);
        }
        if seen.contains(&canonical) {
            if reason.is_empty() {
                reason.push_str(REASON_DUPLICATE);
            } else {
                reason.push_str(" (duplicate)");
            }
        }

        if !reason.is_empty() {
            tracing::debug!(index = i, %original, %canonical, %reason, "flagged id");
            out.reasons.record(&original, reason);
        }

        seen.insert(canonical.clone());
        *id = Value::String(canonical);
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ids(doc: &Value) -> Vec<Value> {
        doc["objects"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e.get("id").cloned().unwrap_or(Value::Null))
            .collect()
    }

    #[test]
    fn first_occurrence_is_never_a_duplicate() {
        let mut doc = json!({"objects": [{"id": "a"}, {"id": "a"}, {"id": "a"}]});
        let v = validate(&mut doc, Policy::Permissive).unwrap();

        // all three share the original spelling, so they share one registry slot
        assert_eq!(v.reasons.len(), 1);
        assert_eq!(v.reasons.get("a"), Some("duplicate"));
        assert_eq!(v.checked, 3);
    }

    #[test]
    fn distinct_spellings_get_their_own_reasons() {
        let mut doc = json!({"objects": [{"id": "a"}, {"id": "A"}, {"id": "a "}]});
        let v = validate(&mut doc, Policy::Permissive).unwrap();

        assert!(!v.reasons.contains("a"));
        assert_eq!(v.reasons.get("A"), Some("invalid characters or uppercase (duplicate)"));
        assert_eq!(v.reasons.get("a "), Some("invalid characters or uppercase (duplicate)"));
        assert_eq!(ids(&doc), vec![json!("a"), json!("a"), json!("a")]);
    }

    #[test]
    fn altered_first_occurrence_is_not_duplicate() {
        let mut doc = json!({"objects": [{"id": "Foo"}, {"id": "foo"}]});
        let v = validate(&mut doc, Policy::Permissive).unwrap();

        assert_eq!(v.reasons.get("Foo"), Some("invalid characters or uppercase"));
        assert_eq!(v.reasons.get("foo"), Some("duplicate"));
        let order: Vec<_> = v.reasons.iter().map(|(k, _)| k).collect();
        assert_eq!(order, vec!["Foo", "foo"]);
    }

    #[test]
    fn later_reason_overwrites_earlier_for_same_spelling() {
        let mut doc = json!({"objects": [{"id": "B"}, {"id": "B"}]});
        let v = validate(&mut doc, Policy::Permissive).unwrap();
        assert_eq!(v.reasons.len(), 1);
        assert_eq!(v.reasons.get("B"), Some("invalid characters or uppercase (duplicate)"));
    }

    #[test]
    fn entries_without_string_id_are_untouched() {
        let mut doc = json!({"objects": [
            {"name": "No Id"},
            {"id": 7, "x": "Y"},
            "bare string",
            {"id": null},
            {"id": "Ok"}
        ]});
        let before = doc.clone();
        let v = validate(&mut doc, Policy::Permissive).unwrap();

        for i in 0..4 {
            assert_eq!(doc["objects"][i], before["objects"][i]);
        }
        assert_eq!(doc["objects"][4]["id"], json!("ok"));
        assert_eq!(v.entries, 5);
        assert_eq!(v.checked, 1);
    }

    #[test]
    fn missing_or_non_array_objects_is_schema_error() {
        for mut doc in [json!({"items": []}), json!({"objects": {}}), json!([1, 2])] {
            let before = doc.clone();
            let err = validate(&mut doc, Policy::Permissive).unwrap_err();
            assert!(matches!(err, IdfixError::Schema));
            assert_eq!(doc, before);
        }
    }
}
