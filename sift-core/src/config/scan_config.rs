//! Scan configuration.

use serde::{Deserialize, Serialize};

/// Configuration for file discovery.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Maximum file size in bytes. Files above this are skipped. Default: 2 MiB.
    pub max_file_size: Option<u64>,
    /// Worker threads for the analysis pool. Default: all cores.
    pub threads: Option<usize>,
    /// Directory and file names excluded from discovery, by exact name.
    #[serde(default)]
    pub exclude: Vec<String>,
    /// Respect .gitignore files during discovery. Default: true.
    pub respect_gitignore: Option<bool>,
}

impl ScanConfig {
    /// Returns the effective size cap, defaulting to 2 MiB.
    pub fn effective_max_file_size(&self) -> u64 {
        self.max_file_size.unwrap_or(2 * 1024 * 1024)
    }

    pub fn effective_respect_gitignore(&self) -> bool {
        self.respect_gitignore.unwrap_or(true)
    }
}
