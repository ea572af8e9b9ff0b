// crates/idfix-core/src/normalize.rs
//
// Identifier normalization.
//
// Rules:
// - Lowercase (Unicode mapping, so e.g. the Kelvin sign folds to 'k').
// - Drop ' '.
// - Drop every char outside the policy's allowed set.
//
// The output only ever contains ASCII, so normalize(normalize(x)) == normalize(x).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::IdfixError;

/// Which characters survive normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Policy {
    /// `a-z`, `0-9`, `_`
    #[default]
    Permissive,
    /// `a-z`, `_` (digits are stripped)
    Strict,
}

impl Policy {
    #[inline]
    pub fn allows(self, c: char) -> bool {
        match self {
            Policy::Permissive => c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_',
            Policy::Strict => c.is_ascii_lowercase() || c == '_',
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Policy::Permissive => "permissive",
            Policy::Strict => "strict",
        }
    }
}

impl fmt::Display for Policy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Policy {
    type Err = IdfixError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "permissive" => Ok(Policy::Permissive),
            "strict" => Ok(Policy::Strict),
            other => Err(IdfixError::Config(format!(
                "unknown policy {other:?} (expected \"permissive\" or \"strict\")"
            ))),
        }
    }
}

/// Map an as-authored id to its canonical form. Never fails; may return "".
pub fn normalize(original: &str, policy: Policy) -> String {
    original
        .chars()
        .flat_map(char::to_lowercase)
        .filter(|&c| c != ' ' && policy.allows(c))
        .collect()
}
