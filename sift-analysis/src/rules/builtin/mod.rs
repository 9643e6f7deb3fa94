//! Builtin rule set.
//!
//! Two text-tier rules, one syntax-tier, two scope-tier, two project-tier.
//! Together they exercise every artifact the runner can build.

pub mod empty_catch;
pub mod import_cycle;
pub mod import_shadows_builtin;
pub mod shadowed_variable;
pub mod todo_comment;
pub mod trailing_whitespace;
pub mod unused_export;

use std::sync::Arc;

use super::traits::Rule;

pub fn all() -> Vec<Arc<dyn Rule>> {
    vec![
        Arc::new(trailing_whitespace::TrailingWhitespace),
        Arc::new(todo_comment::TodoComment),
        Arc::new(empty_catch::EmptyCatch),
        Arc::new(shadowed_variable::ShadowedVariable),
        Arc::new(import_shadows_builtin::ImportShadowsBuiltin),
        Arc::new(import_cycle::ImportCycle),
        Arc::new(unused_export::UnusedExport),
    ]
}
