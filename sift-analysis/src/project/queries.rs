//! Read-side queries over the project graph.

use std::path::{Path, PathBuf};

use petgraph::algo::tarjan_scc;
use petgraph::visit::{Bfs, EdgeRef, Reversed};
use petgraph::Direction;
use sift_core::types::collections::FxHashSet;

use super::types::{ExportedSymbol, ProjectGraph};

impl ProjectGraph {
    /// Files that import `path` directly, sorted.
    pub fn dependents(&self, path: &Path) -> Vec<PathBuf> {
        let Some(idx) = self.node_index(path) else {
            return Vec::new();
        };
        let mut seen = FxHashSet::default();
        let mut out: Vec<PathBuf> = self
            .graph
            .edges_directed(idx, Direction::Incoming)
            .map(|edge| self.graph[edge.source()].path.clone())
            .filter(|p| seen.insert(p.clone()))
            .collect();
        out.sort();
        out
    }

    /// Import cycles: every strongly connected component with more than one
    /// member. Each cycle's members are sorted, and cycles are ordered by
    /// their smallest member, so output is stable across runs.
    pub fn cycles(&self) -> Vec<Vec<PathBuf>> {
        let mut cycles: Vec<Vec<PathBuf>> = tarjan_scc(&self.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| {
                let mut members: Vec<PathBuf> =
                    scc.iter().map(|&idx| self.graph[idx].path.clone()).collect();
                members.sort();
                members
            })
            .collect();
        cycles.sort();
        cycles
    }

    /// Every file that transitively imports `path`, excluding `path`
    /// itself. Sorted. This is the blast radius of editing `path`.
    pub fn impact(&self, path: &Path) -> Vec<PathBuf> {
        let Some(start) = self.node_index(path) else {
            return Vec::new();
        };
        let reversed = Reversed(&self.graph);
        let mut bfs = Bfs::new(reversed, start);
        let mut out = Vec::new();
        while let Some(idx) = bfs.next(reversed) {
            if idx != start {
                out.push(self.graph[idx].path.clone());
            }
        }
        out.sort();
        out
    }

    /// Exports no analyzed file imports by name.
    ///
    /// A whole-module or wildcard import of a file marks all of its exports
    /// used; claiming otherwise would be guessing.
    pub fn unused_exports(&self) -> Vec<(PathBuf, ExportedSymbol)> {
        let mut out = Vec::new();
        for idx in self.graph.node_indices() {
            let module = &self.graph[idx];
            if module.exports.is_empty() {
                continue;
            }
            let mut imported = FxHashSet::default();
            let mut wildcard = false;
            for edge in self.graph.edges_directed(idx, Direction::Incoming) {
                match &edge.weight().symbol {
                    Some(name) => {
                        imported.insert(name.as_str());
                    }
                    None => wildcard = true,
                }
            }
            if wildcard {
                continue;
            }
            for export in &module.exports {
                if !imported.contains(export.name.as_str()) {
                    out.push((module.path.clone(), export.clone()));
                }
            }
        }
        out.sort_by(|a, b| (&a.0, a.1.span.start).cmp(&(&b.0, b.1.span.start)));
        out
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use sift_core::types::span::ByteSpan;

    use crate::project::types::{ExportedSymbol, ImportEdge, ModuleNode, ProjectGraph};
    use crate::scanner::Language;

    fn module(path: &str, exports: &[(&str, u32)]) -> ModuleNode {
        ModuleNode {
            path: path.into(),
            language: Language::TypeScript,
            exports: exports
                .iter()
                .map(|(name, at)| ExportedSymbol {
                    name: name.to_string(),
                    span: ByteSpan::new(*at, *at + name.len() as u32),
                })
                .collect(),
        }
    }

    fn edge(symbol: Option<&str>) -> ImportEdge {
        ImportEdge {
            symbol: symbol.map(str::to_string),
            span: ByteSpan::new(0, 1),
        }
    }

    fn triangle() -> ProjectGraph {
        // a → b → c → a, plus d → a outside the cycle.
        let mut graph = ProjectGraph::default();
        let a = graph.add_module(module("a.ts", &[]));
        let b = graph.add_module(module("b.ts", &[]));
        let c = graph.add_module(module("c.ts", &[]));
        let d = graph.add_module(module("d.ts", &[]));
        graph.add_import(a, b, edge(None));
        graph.add_import(b, c, edge(None));
        graph.add_import(c, a, edge(None));
        graph.add_import(d, a, edge(None));
        graph
    }

    #[test]
    fn cycle_detection_reports_each_scc_once() {
        let graph = triangle();
        let cycles = graph.cycles();
        assert_eq!(cycles.len(), 1);
        assert_eq!(
            cycles[0],
            vec![
                Path::new("a.ts").to_path_buf(),
                Path::new("b.ts").to_path_buf(),
                Path::new("c.ts").to_path_buf(),
            ]
        );
    }

    #[test]
    fn acyclic_graph_has_no_cycles() {
        let mut graph = ProjectGraph::default();
        let a = graph.add_module(module("a.ts", &[]));
        let b = graph.add_module(module("b.ts", &[]));
        graph.add_import(a, b, edge(None));
        assert!(graph.cycles().is_empty());
    }

    #[test]
    fn impact_is_transitive_importers_excluding_self() {
        let graph = triangle();
        // Everything reaches a: b and c via the cycle, d directly.
        let impact = graph.impact(Path::new("a.ts"));
        assert_eq!(
            impact,
            vec![
                Path::new("b.ts").to_path_buf(),
                Path::new("c.ts").to_path_buf(),
                Path::new("d.ts").to_path_buf(),
            ]
        );
        assert!(graph.impact(Path::new("missing.ts")).is_empty());
    }

    #[test]
    fn unused_exports_respect_named_and_wildcard_imports() {
        let mut graph = ProjectGraph::default();
        let lib = graph.add_module(module("lib.ts", &[("used", 0), ("dead", 20)]));
        let all = graph.add_module(module("all.ts", &[("anything", 0)]));
        let app = graph.add_module(module("app.ts", &[]));
        graph.add_import(app, lib, edge(Some("used")));
        graph.add_import(app, all, edge(None));

        let unused = graph.unused_exports();
        assert_eq!(unused.len(), 1);
        assert_eq!(unused[0].0, Path::new("lib.ts"));
        assert_eq!(unused[0].1.name, "dead");
    }
}
