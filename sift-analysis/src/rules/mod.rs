//! Rule contract, registry, and the builtin rule set.
//!
//! Rules are stateless and shared across worker threads; everything
//! per-file arrives through `RuleContext`. A rule declares up front which
//! artifacts it reads, and the runner builds nothing beyond that union.

pub mod builtin;
pub mod context;
pub mod registry;
pub mod traits;

pub use context::RuleContext;
pub use registry::RuleRegistry;
pub use traits::{AutofixSafety, Requires, Rule, RuleCategory, RuleMeta};
