//! Analysis configuration.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// Configuration for the analysis subsystem.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Upward ancestor-walk cap for context queries. Default: 16.
    ///
    /// Bounds the cost of "is this node inside a loop" style queries on
    /// deeply nested or generated code.
    pub ancestor_depth_limit: Option<u32>,
    /// Per-rule configuration maps, keyed by rule id. Schema ownership
    /// belongs to each rule; the engine passes values through verbatim.
    #[serde(default)]
    pub rule_config: HashMap<String, HashMap<String, serde_json::Value>>,
}

impl AnalysisConfig {
    /// Returns the effective ancestor-walk cap, defaulting to 16.
    pub fn effective_ancestor_depth_limit(&self) -> u32 {
        self.ancestor_depth_limit.unwrap_or(16)
    }

    /// Config map for one rule, empty if none was provided.
    pub fn rule_config_for(&self, rule_id: &str) -> HashMap<String, serde_json::Value> {
        self.rule_config.get(rule_id).cloned().unwrap_or_default()
    }
}
