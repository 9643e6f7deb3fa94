//! Counters for artifacts built during a run.
//!
//! These exist so capability minimality is observable: a run whose rules
//! never asked for scope graphs must show zero scope graphs built.

use std::sync::atomic::{AtomicUsize, Ordering};

use serde::Serialize;

#[derive(Debug, Default)]
pub struct ArtifactCounters {
    trees: AtomicUsize,
    scope_graphs: AtomicUsize,
    project_graphs: AtomicUsize,
}

impl ArtifactCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count_tree(&self) {
        self.trees.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count_scope_graph(&self) {
        self.scope_graphs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn count_project_graph(&self) {
        self.project_graphs.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> ArtifactSnapshot {
        ArtifactSnapshot {
            trees: self.trees.load(Ordering::Relaxed),
            scope_graphs: self.scope_graphs.load(Ordering::Relaxed),
            project_graphs: self.project_graphs.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time copy of the counters, for reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArtifactSnapshot {
    pub trees: usize,
    pub scope_graphs: usize,
    pub project_graphs: usize,
}
