//! Rule registry — the frozen set of known rules for a run.

use std::sync::Arc;

use sift_core::errors::ConfigError;
use sift_core::types::collections::FxHashMap;
use sift_core::config::ProfileConfig;

use crate::scanner::Language;

use super::builtin;
use super::traits::Rule;

/// All registered rules, keyed by id. Frozen before any file is analyzed;
/// profile validation happens against this set, eagerly.
pub struct RuleRegistry {
    rules: Vec<Arc<dyn Rule>>,
    by_id: FxHashMap<&'static str, usize>,
}

impl RuleRegistry {
    pub fn new() -> Self {
        Self {
            rules: Vec::new(),
            by_id: FxHashMap::default(),
        }
    }

    /// Registry preloaded with every builtin rule.
    pub fn with_builtin_rules() -> Self {
        let mut registry = Self::new();
        for rule in builtin::all() {
            registry.register(rule);
        }
        registry
    }

    /// Register a rule. Duplicate ids are a programming error.
    pub fn register(&mut self, rule: Arc<dyn Rule>) {
        let id = rule.meta().id;
        assert!(
            self.by_id.insert(id, self.rules.len()).is_none(),
            "duplicate rule id: {id}"
        );
        self.rules.push(rule);
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Arc<dyn Rule>> {
        self.by_id.get(id).map(|&i| &self.rules[i])
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Rule>> {
        self.rules.iter()
    }

    /// Resolve a profile to concrete rules, in registration order.
    ///
    /// Every id the profile names must exist; an unknown id fails the whole
    /// run here, before any file is read.
    pub fn select(
        &self,
        profile_name: &str,
        profile: &ProfileConfig,
    ) -> Result<Vec<Arc<dyn Rule>>, ConfigError> {
        if profile.selects_all() {
            return Ok(self.rules.clone());
        }
        for id in &profile.rules {
            if !self.by_id.contains_key(id.as_str()) {
                return Err(ConfigError::UnknownRule {
                    profile: profile_name.to_string(),
                    rule_id: id.clone(),
                });
            }
        }
        Ok(self
            .rules
            .iter()
            .filter(|rule| profile.rules.iter().any(|id| id == rule.meta().id))
            .cloned()
            .collect())
    }

    /// Subset of `selected` applicable to one language, sorted by priority
    /// then id for stable report order.
    pub fn rules_for_language(
        selected: &[Arc<dyn Rule>],
        language: Language,
    ) -> Vec<Arc<dyn Rule>> {
        let mut out: Vec<Arc<dyn Rule>> = selected
            .iter()
            .filter(|rule| rule.meta().applies_to(language))
            .cloned()
            .collect();
        out.sort_by_key(|rule| (rule.meta().priority, rule.meta().id));
        out
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::with_builtin_rules()
    }
}
