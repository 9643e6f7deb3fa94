//! End-to-end analysis pipeline.
//!
//! Discovery, profile resolution, rule execution, and reporting behind one
//! call. Profile and configuration problems fail before any file is read;
//! per-file trouble degrades to diagnostics inside the report.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use serde::Serialize;
use sift_core::errors::{ConfigError, PipelineError};
use sift_core::events::{EventDispatcher, RunCompleteEvent, RunStartedEvent};
use sift_core::SiftConfig;
use tracing::info;

use crate::findings::Finding;
use crate::rules::RuleRegistry;
use crate::runner::{AnalysisRunner, ParseFailure, RuleDiagnostic, RunStats};
use crate::scanner;

/// Outcome of one analysis run.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub findings: Vec<Finding>,
    pub diagnostics: Vec<RuleDiagnostic>,
    pub parse_failures: Vec<ParseFailure>,
    pub stats: RunStats,
    pub duration_ms: u64,
}

impl AnalysisReport {
    /// True when nothing went wrong operationally. Findings are results,
    /// not failures.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.parse_failures.is_empty()
    }

    pub fn findings_for_rule(&self, rule_id: &str) -> Vec<&Finding> {
        self.findings.iter().filter(|f| f.rule_id == rule_id).collect()
    }
}

/// The analysis engine's front door.
pub struct AnalysisPipeline {
    config: SiftConfig,
    registry: Arc<RuleRegistry>,
    events: EventDispatcher,
}

impl AnalysisPipeline {
    /// Pipeline with the builtin rule set.
    pub fn new(config: SiftConfig) -> Self {
        Self::with_registry(config, Arc::new(RuleRegistry::with_builtin_rules()))
    }

    pub fn with_registry(config: SiftConfig, registry: Arc<RuleRegistry>) -> Self {
        Self {
            config,
            registry,
            events: EventDispatcher::new(),
        }
    }

    pub fn events_mut(&mut self) -> &mut EventDispatcher {
        &mut self.events
    }

    pub fn config(&self) -> &SiftConfig {
        &self.config
    }

    /// Analyze `paths` under the named profile.
    ///
    /// Profile resolution and validation come first so a bad rule id fails
    /// the run before any file is opened.
    pub fn validate(
        &self,
        paths: &[PathBuf],
        profile_name: &str,
        enable_project_graph: bool,
    ) -> Result<AnalysisReport, PipelineError> {
        let started = Instant::now();

        let profile = self.config.profile(profile_name)?;
        let selected = self.registry.select(profile_name, profile)?;

        let files = scanner::discover(paths, &self.config.scan)?;
        info!(
            files = files.len(),
            rules = selected.len(),
            profile = profile_name,
            "starting analysis"
        );
        self.events.emit_run_started(&RunStartedEvent {
            file_count: files.len(),
            rule_count: selected.len(),
            profile: profile_name.to_string(),
        });

        let runner = AnalysisRunner::new(&self.config, &self.events);
        let output = match self.config.scan.threads {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .build()
                    .map_err(|e| ConfigError::InvalidValue {
                        key: "scan.threads".into(),
                        message: e.to_string(),
                    })?;
                pool.install(|| runner.run(files, &selected, enable_project_graph))
            }
            None => runner.run(files, &selected, enable_project_graph),
        };

        let duration_ms = started.elapsed().as_millis() as u64;
        self.events.emit_run_complete(&RunCompleteEvent {
            files_analyzed: output.stats.files_analyzed,
            finding_count: output.findings.len(),
            failed_rules: output.stats.failed_rules,
            duration_ms,
        });

        Ok(AnalysisReport {
            findings: output.findings,
            diagnostics: output.diagnostics,
            parse_failures: output.parse_failures,
            stats: output.stats,
            duration_ms,
        })
    }
}
