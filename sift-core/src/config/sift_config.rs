//! Top-level Sift configuration with layered resolution.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{AnalysisConfig, ProfileConfig, ScanConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`SIFT_*`)
/// 3. Project config (`sift.toml` in project root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiftConfig {
    pub scan: ScanConfig,
    pub analysis: AnalysisConfig,
    /// Named rule profiles. A `default` profile selecting every registered
    /// rule is always present.
    pub profiles: HashMap<String, ProfileConfig>,
}

impl Default for SiftConfig {
    fn default() -> Self {
        let mut profiles = HashMap::new();
        profiles.insert("default".to_string(), ProfileConfig::all_rules());
        Self {
            scan: ScanConfig::default(),
            analysis: AnalysisConfig::default(),
            profiles,
        }
    }
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub scan_max_file_size: Option<u64>,
    pub scan_threads: Option<usize>,
    pub ancestor_depth_limit: Option<u32>,
}

impl SiftConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 3: project config
        let project_config_path = root.join("sift.toml");
        if project_config_path.exists() {
            let text = std::fs::read_to_string(&project_config_path).map_err(|e| {
                ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                }
            })?;
            let file_config: SiftConfig =
                toml::from_str(&text).map_err(|e| ConfigError::ParseError {
                    path: project_config_path.display().to_string(),
                    message: e.to_string(),
                })?;
            config.merge(file_config);
        }

        // Layer 2: environment variables
        config.apply_env_overrides();

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        let parsed: SiftConfig = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        config.merge(parsed);
        config.validate()?;
        Ok(config)
    }

    /// Resolve a profile by name.
    pub fn profile(&self, name: &str) -> Result<&ProfileConfig, ConfigError> {
        self.profiles
            .get(name)
            .ok_or_else(|| ConfigError::UnknownProfile(name.to_string()))
    }

    fn merge(&mut self, other: SiftConfig) {
        if other.scan.max_file_size.is_some() {
            self.scan.max_file_size = other.scan.max_file_size;
        }
        if other.scan.threads.is_some() {
            self.scan.threads = other.scan.threads;
        }
        if !other.scan.exclude.is_empty() {
            self.scan.exclude = other.scan.exclude;
        }
        if other.scan.respect_gitignore.is_some() {
            self.scan.respect_gitignore = other.scan.respect_gitignore;
        }
        if other.analysis.ancestor_depth_limit.is_some() {
            self.analysis.ancestor_depth_limit = other.analysis.ancestor_depth_limit;
        }
        if !other.analysis.rule_config.is_empty() {
            self.analysis.rule_config.extend(other.analysis.rule_config);
        }
        // Profiles from the file extend (and may replace) the defaults.
        self.profiles.extend(other.profiles);
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(v) = std::env::var("SIFT_MAX_FILE_SIZE") {
            if let Ok(n) = v.parse::<u64>() {
                self.scan.max_file_size = Some(n);
            }
        }
        if let Ok(v) = std::env::var("SIFT_THREADS") {
            if let Ok(n) = v.parse::<usize>() {
                self.scan.threads = Some(n);
            }
        }
        if let Ok(v) = std::env::var("SIFT_ANCESTOR_DEPTH") {
            if let Ok(n) = v.parse::<u32>() {
                self.analysis.ancestor_depth_limit = Some(n);
            }
        }
    }

    fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(n) = cli.scan_max_file_size {
            self.scan.max_file_size = Some(n);
        }
        if let Some(n) = cli.scan_threads {
            self.scan.threads = Some(n);
        }
        if let Some(n) = cli.ancestor_depth_limit {
            self.analysis.ancestor_depth_limit = Some(n);
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.effective_max_file_size() == 0 {
            return Err(ConfigError::InvalidValue {
                key: "scan.max_file_size".into(),
                message: "must be greater than zero".into(),
            });
        }
        if self.analysis.effective_ancestor_depth_limit() == 0 {
            return Err(ConfigError::InvalidValue {
                key: "analysis.ancestor_depth_limit".into(),
                message: "must be greater than zero".into(),
            });
        }
        if let Some(threads) = self.scan.threads {
            if threads == 0 {
                return Err(ConfigError::InvalidValue {
                    key: "scan.threads".into(),
                    message: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }
}
