//! Event handler trait — every method has a no-op default.

use super::types::*;

/// Observer of analysis lifecycle events.
///
/// Implementations must be cheap and must not block; dispatch is
/// synchronous on the calling thread.
pub trait AnalysisEventHandler: Send + Sync {
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_file_parsed(&self, _event: &FileParsedEvent) {}
    fn on_rule_failed(&self, _event: &RuleFailedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}
}
