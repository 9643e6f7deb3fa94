//! Tiered rule runner.
//!
//! Files are batched by language and analyzed on the rayon pool. The
//! runner builds exactly the artifacts the selected rules declared:
//! trees always (they double as the decoded text), scope graphs and the
//! project graph only on demand. A panicking rule loses its own findings
//! for that file and nothing else.

pub mod artifacts;
#[allow(clippy::module_inception)]
pub mod runner;

pub use artifacts::{ArtifactCounters, ArtifactSnapshot};
pub use runner::{AnalysisRunner, ParseFailure, RuleDiagnostic, RunOutput, RunStats};
