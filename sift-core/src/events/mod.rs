//! Analysis lifecycle events.
//!
//! Hosts (service, CLI) observe a run by registering handlers; the engine
//! itself never depends on any handler being present.

pub mod dispatcher;
pub mod handler;
pub mod types;

pub use dispatcher::EventDispatcher;
pub use handler::AnalysisEventHandler;
pub use types::*;
