//! Project graph construction from per-file scope graphs.

use std::path::{Path, PathBuf};

use sift_core::types::collections::FxHashSet;
use tracing::debug;

use crate::scanner::Language;
use crate::scopes::tables::is_exported;
use crate::scopes::{ImportRecord, ScopeGraph, SymbolKind};

use super::resolve::{resolve_specifier, FileIndex};
use super::types::{ExportedSymbol, ImportEdge, ModuleNode, ProjectGraph, UnresolvedImport};

struct FileEntry {
    path: PathBuf,
    language: Language,
    exports: Vec<ExportedSymbol>,
    imports: Vec<ImportRecord>,
}

/// Accumulates per-file facts, then resolves them into one graph.
///
/// `add_file` order does not matter; `finish` sorts by path so the graph
/// is identical for any insertion order.
#[derive(Default)]
pub struct ProjectGraphBuilder {
    files: Vec<FileEntry>,
}

impl ProjectGraphBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one analyzed file. Exports are the module-scope declarations
    /// that pass the language's visibility convention; imports are taken
    /// verbatim for later resolution.
    pub fn add_file(&mut self, path: &Path, scopes: &ScopeGraph) {
        let language = scopes.language();
        let mut seen = FxHashSet::default();
        let exports = scopes
            .symbols_in_scope(scopes.module_scope())
            .filter(|s| s.kind != SymbolKind::Import)
            .filter(|s| is_exported(language, &s.name))
            .filter(|s| seen.insert(s.name.clone()))
            .map(|s| ExportedSymbol {
                name: s.name.clone(),
                span: s.span,
            })
            .collect();
        self.files.push(FileEntry {
            path: path.to_path_buf(),
            language,
            exports,
            imports: scopes.imports().to_vec(),
        });
    }

    pub fn finish(mut self) -> ProjectGraph {
        self.files.sort_by(|a, b| a.path.cmp(&b.path));
        let index = FileIndex::new(self.files.iter().map(|f| f.path.clone()).collect());

        let mut graph = ProjectGraph::default();
        for file in &self.files {
            graph.add_module(ModuleNode {
                path: file.path.clone(),
                language: file.language,
                exports: file.exports.clone(),
            });
        }

        for file in &self.files {
            let from = graph
                .node_index(&file.path)
                .expect("module inserted above");
            for record in &file.imports {
                match resolve_specifier(&index, &file.path, file.language, &record.module) {
                    Some(target) => {
                        let to = graph.node_index(&target).expect("resolved within index");
                        graph.add_import(
                            from,
                            to,
                            ImportEdge {
                                symbol: record.symbol.clone(),
                                span: record.span,
                            },
                        );
                    }
                    None => graph.push_unresolved(UnresolvedImport {
                        importer: file.path.clone(),
                        specifier: record.module.clone(),
                        span: record.span,
                    }),
                }
            }
        }

        debug!(
            modules = graph.module_count(),
            imports = graph.import_count(),
            unresolved = graph.unresolved().len(),
            "built project graph"
        );
        graph
    }
}
