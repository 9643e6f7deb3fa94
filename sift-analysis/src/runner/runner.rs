//! Batch execution of selected rules over discovered files.

use std::panic::{catch_unwind, AssertUnwindSafe};
use std::path::PathBuf;
use std::sync::Arc;

use rayon::prelude::*;
use serde::Serialize;
use sift_core::errors::RuleError;
use sift_core::events::{EventDispatcher, FileParsedEvent, RuleFailedEvent};
use sift_core::SiftConfig;
use tracing::{debug, warn};

use crate::adapters::parse_source;
use crate::findings::Finding;
use crate::project::{ProjectGraph, ProjectGraphBuilder};
use crate::rules::{Requires, Rule, RuleContext, RuleRegistry};
use crate::scanner::{Language, SourceFile};
use crate::scopes::{build_scope_graph, ScopeGraph};
use crate::tree::SyntaxTree;

use super::artifacts::{ArtifactCounters, ArtifactSnapshot};

/// A file that could not be analyzed at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    pub path: PathBuf,
    pub message: String,
}

/// A rule that panicked on one file. The rule's findings for that file are
/// lost; everything else in the run is unaffected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleDiagnostic {
    pub rule_id: String,
    pub file: PathBuf,
    pub message: String,
}

#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct RunStats {
    pub files_analyzed: usize,
    pub parse_failures: usize,
    pub failed_rules: usize,
    pub artifacts: ArtifactSnapshot,
}

#[derive(Debug, Default)]
pub struct RunOutput {
    pub findings: Vec<Finding>,
    pub diagnostics: Vec<RuleDiagnostic>,
    pub parse_failures: Vec<ParseFailure>,
    pub stats: RunStats,
}

struct FileArtifacts {
    path: PathBuf,
    language: Language,
    tree: SyntaxTree,
    scopes: Option<ScopeGraph>,
}

pub struct AnalysisRunner<'a> {
    config: &'a SiftConfig,
    events: &'a EventDispatcher,
}

impl<'a> AnalysisRunner<'a> {
    pub fn new(config: &'a SiftConfig, events: &'a EventDispatcher) -> Self {
        Self { config, events }
    }

    /// Run `selected` over `files`.
    ///
    /// Three phases per language batch: parse (parallel), one optional
    /// project-graph build (the only synchronization point), then rule
    /// execution (parallel). Output order is fully deterministic.
    pub fn run(
        &self,
        files: Vec<SourceFile>,
        selected: &[Arc<dyn Rule>],
        enable_project_graph: bool,
    ) -> RunOutput {
        let counters = ArtifactCounters::new();
        let project_needed =
            enable_project_graph && selected.iter().any(|r| r.requires().project_graph);

        let mut batches: Vec<(Vec<Arc<dyn Rule>>, Vec<FileArtifacts>)> = Vec::new();
        let mut parse_failures: Vec<ParseFailure> = Vec::new();

        for &language in Language::all() {
            let batch: Vec<&SourceFile> =
                files.iter().filter(|f| f.language == language).collect();
            if batch.is_empty() {
                continue;
            }
            let rules = RuleRegistry::rules_for_language(selected, language);
            if rules.is_empty() {
                continue;
            }
            let union = rules
                .iter()
                .fold(Requires::default(), |acc, r| acc.union(r.requires()));
            // Scope graphs also feed the project graph when one is coming.
            let need_scopes = union.scopes || (project_needed && union.project_graph);

            let parsed: Vec<Result<FileArtifacts, ParseFailure>> = batch
                .par_iter()
                .map(|file| match parse_source(language, &file.bytes, &file.path) {
                    Ok(tree) => {
                        counters.count_tree();
                        self.events.emit_file_parsed(&FileParsedEvent {
                            path: file.path.clone(),
                            error_nodes: tree.error_count(),
                            parse_time_us: tree.parse_time_us(),
                        });
                        let scopes = need_scopes.then(|| {
                            counters.count_scope_graph();
                            build_scope_graph(&tree)
                        });
                        Ok(FileArtifacts {
                            path: file.path.clone(),
                            language,
                            tree,
                            scopes,
                        })
                    }
                    Err(e) => Err(ParseFailure {
                        path: file.path.clone(),
                        message: e.to_string(),
                    }),
                })
                .collect();

            let mut artifacts = Vec::with_capacity(parsed.len());
            for result in parsed {
                match result {
                    Ok(art) => artifacts.push(art),
                    Err(failure) => {
                        warn!(path = %failure.path.display(), error = %failure.message, "skipping unparseable file");
                        parse_failures.push(failure);
                    }
                }
            }
            batches.push((rules, artifacts));
        }

        // Single synchronization point: every scope graph must exist before
        // cross-file resolution starts.
        let project: Option<ProjectGraph> = if project_needed {
            let mut builder = ProjectGraphBuilder::new();
            for (_, artifacts) in &batches {
                for art in artifacts {
                    if let Some(scopes) = &art.scopes {
                        builder.add_file(&art.path, scopes);
                    }
                }
            }
            counters.count_project_graph();
            Some(builder.finish())
        } else {
            None
        };

        let depth_limit = self.config.analysis.effective_ancestor_depth_limit();
        let mut findings: Vec<Finding> = Vec::new();
        let mut diagnostics: Vec<RuleDiagnostic> = Vec::new();
        let mut files_analyzed = 0usize;

        for (rules, artifacts) in &batches {
            files_analyzed += artifacts.len();
            let per_file: Vec<(Vec<Finding>, Vec<RuleDiagnostic>)> = artifacts
                .par_iter()
                .map(|art| self.visit_file(art, rules, project.as_ref(), depth_limit))
                .collect();
            for (file_findings, file_diags) in per_file {
                findings.extend(file_findings);
                diagnostics.extend(file_diags);
            }
        }

        findings.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
        diagnostics.sort_by(|a, b| (&a.file, &a.rule_id).cmp(&(&b.file, &b.rule_id)));
        parse_failures.sort_by(|a, b| a.path.cmp(&b.path));

        let stats = RunStats {
            files_analyzed,
            parse_failures: parse_failures.len(),
            failed_rules: diagnostics.len(),
            artifacts: counters.snapshot(),
        };
        debug!(
            files = stats.files_analyzed,
            findings = findings.len(),
            failed_rules = stats.failed_rules,
            "run finished"
        );

        RunOutput {
            findings,
            diagnostics,
            parse_failures,
            stats,
        }
    }

    /// Run every applicable rule against one file. Each rule sees only the
    /// artifacts it declared.
    fn visit_file(
        &self,
        art: &FileArtifacts,
        rules: &[Arc<dyn Rule>],
        project: Option<&ProjectGraph>,
        depth_limit: u32,
    ) -> (Vec<Finding>, Vec<RuleDiagnostic>) {
        let mut findings = Vec::new();
        let mut diagnostics = Vec::new();
        for rule in rules {
            let req = rule.requires();
            let ctx = RuleContext::new(
                &art.path,
                art.language,
                req.raw_text.then(|| art.tree.source()),
                req.syntax.then_some(&art.tree),
                if req.scopes { art.scopes.as_ref() } else { None },
                if req.project_graph { project } else { None },
                self.config.analysis.rule_config_for(rule.meta().id),
                depth_limit,
            );
            match catch_unwind(AssertUnwindSafe(|| rule.visit(&ctx))) {
                Ok(rule_findings) => findings.extend(rule_findings),
                Err(payload) => {
                    let err = RuleError::Panic {
                        id: rule.meta().id.to_string(),
                        file: art.path.display().to_string(),
                        message: panic_message(payload),
                    };
                    warn!(error = %err, "rule panicked; its findings for this file are dropped");
                    let message = err.to_string();
                    self.events.emit_rule_failed(&RuleFailedEvent {
                        rule_id: rule.meta().id.to_string(),
                        path: art.path.clone(),
                        message: message.clone(),
                    });
                    diagnostics.push(RuleDiagnostic {
                        rule_id: rule.meta().id.to_string(),
                        file: art.path.clone(),
                        message,
                    });
                }
            }
        }
        (findings, diagnostics)
    }
}

fn panic_message(payload: Box<dyn std::any::Any + Send>) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "rule panicked".to_string()
    }
}
