//! Analysis profiles — named subsets of registered rule ids.

use serde::{Deserialize, Serialize};

/// A named rule selection.
///
/// Profiles are validated against the frozen registry at batch setup:
/// an unknown rule id is a `ConfigError` there, never a per-file error.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ProfileConfig {
    /// Rule ids enabled by this profile. Empty means "every registered rule".
    pub rules: Vec<String>,
}

impl ProfileConfig {
    pub fn all_rules() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn with_rules<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            rules: rules.into_iter().map(Into::into).collect(),
        }
    }

    /// True when this profile selects every registered rule.
    pub fn selects_all(&self) -> bool {
        self.rules.is_empty()
    }
}
