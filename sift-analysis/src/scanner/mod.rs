//! Scanner subsystem — file discovery, language detection, content hashing.
//!
//! The scanner turns the caller's path list into `SourceFile`s: directories
//! are expanded with a gitignore-aware walk, languages are detected from
//! extensions, and oversized or unrecognized files are skipped.

pub mod hasher;
pub mod language_detect;
pub mod types;
pub mod walker;

pub use language_detect::Language;
pub use types::SourceFile;
pub use walker::discover;
