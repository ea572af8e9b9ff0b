use serde_json::Value;

use crate::annotate::annotate;
use crate::config::Config;
use crate::error::{IdfixError, Result};
use crate::registry::ReasonRegistry;
use crate::validate::validate;

/// Everything one validation run hands back to the caller.
#[derive(Clone, Debug)]
pub struct Outcome {
    pub corrected: Value,
    /// `corrected`, pretty-printed (2-space indent, input key order).
    pub corrected_json: String,
    pub reasons: ReasonRegistry,
    /// Raw input with flagged ids marked; only present when something was flagged.
    pub annotated: Option<String>,
    pub entries: usize,
    pub checked: usize,
}

impl Outcome {
    pub fn is_clean(&self) -> bool {
        self.reasons.is_empty()
    }
}

/// Parse `raw`, correct its ids and report what changed.
///
/// EmptyInput, Parse and Schema are all raised before any mutation; there is
/// no partial output on error.
pub fn run(raw: &str, config: &Config) -> Result<Outcome> {
    if raw.trim().is_empty() {
        return Err(IdfixError::EmptyInput);
    }

    let mut doc: Value = serde_json::from_str(raw)?;
    let v = validate(&mut doc, config.policy)?;
    let corrected_json = serde_json::to_string_pretty(&doc)
        .map_err(|e| IdfixError::Serialize(e.to_string()))?;

    let annotated = if v.reasons.is_empty() {
        None
    } else {
        Some(annotate(raw, &v.reasons, config.style))
    };

    tracing::info!(
        policy = %config.policy,
        entries = v.entries,
        checked = v.checked,
        flagged = v.reasons.len(),
        "validation run complete"
    );

    Ok(Outcome {
        corrected: doc,
        corrected_json,
        reasons: v.reasons,
        annotated,
        entries: v.entries,
        checked: v.checked,
    })
}
