use serde::{Deserialize, Serialize};

use crate::annotate::AnnotationStyle;
use crate::normalize::Policy;

/// Per-run settings. Every field has a default so a partial TOML file works.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub policy: Policy,
    pub style: AnnotationStyle,
    /// Treat any flagged id as a failed run (CLI exit status).
    pub fail_on_issues: bool,
}

impl Config {
    pub fn with_policy(policy: Policy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }
}
