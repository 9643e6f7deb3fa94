//! Event payload types.

use std::path::PathBuf;

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub file_count: usize,
    pub rule_count: usize,
    pub profile: String,
}

/// Payload for `on_file_parsed`.
#[derive(Debug, Clone)]
pub struct FileParsedEvent {
    pub path: PathBuf,
    pub error_nodes: u32,
    pub parse_time_us: u64,
}

/// Payload for `on_rule_failed`.
#[derive(Debug, Clone)]
pub struct RuleFailedEvent {
    pub rule_id: String,
    pub path: PathBuf,
    pub message: String,
}

/// Payload for `on_run_complete`.
#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub files_analyzed: usize,
    pub finding_count: usize,
    pub failed_rules: usize,
    pub duration_ms: u64,
}
