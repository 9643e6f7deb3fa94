//! Scanner output types.

use std::path::PathBuf;

use super::language_detect::Language;

/// One discovered source file, content loaded, language detected.
///
/// Bytes are kept raw here; UTF-8 decoding happens at the adapter boundary
/// so that an undecodable file fails one file's parse, not the whole scan.
#[derive(Debug, Clone)]
pub struct SourceFile {
    pub path: PathBuf,
    pub language: Language,
    pub bytes: Vec<u8>,
    pub content_hash: u64,
}
