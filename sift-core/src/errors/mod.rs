//! Error handling for Sift.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod edit_error;
pub mod error_code;
pub mod parse_error;
pub mod pipeline_error;
pub mod rule_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use edit_error::EditError;
pub use error_code::SiftErrorCode;
pub use parse_error::ParseError;
pub use pipeline_error::PipelineError;
pub use rule_error::RuleError;
pub use scan_error::ScanError;
