//! Core types, errors, config, events, and tracing for the Sift analysis engine.
//!
//! This crate holds everything the analysis crates share but that contains no
//! analysis logic of its own: byte spans, error taxonomy, layered
//! configuration, the event dispatcher, and logging setup.

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod types;

pub use config::SiftConfig;
pub use errors::PipelineError;
pub use types::span::ByteSpan;
