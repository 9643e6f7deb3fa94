//! File discovery over the caller's path list.

use std::path::{Path, PathBuf};

use ignore::WalkBuilder;
use sift_core::config::ScanConfig;
use sift_core::errors::ScanError;
use tracing::{debug, warn};

use super::hasher::hash_content;
use super::language_detect::Language;
use super::types::SourceFile;

/// Expand a list of files and directories into loaded `SourceFile`s.
///
/// Directories are walked gitignore-aware (configurable). Files with an
/// unrecognized extension are skipped silently; files above the size cap
/// are skipped with a warning. A path that does not exist at all is an
/// eager `ScanError` — it is caller input, not repository state.
pub fn discover(paths: &[PathBuf], config: &ScanConfig) -> Result<Vec<SourceFile>, ScanError> {
    let mut files = Vec::new();

    for path in paths {
        if !path.exists() {
            return Err(ScanError::NotFound {
                path: path.display().to_string(),
            });
        }
        if path.is_dir() {
            collect_dir(path, config, &mut files)?;
        } else {
            collect_file(path, config, &mut files)?;
        }
    }

    // Deterministic input order regardless of walk order.
    files.sort_by(|a, b| a.path.cmp(&b.path));
    files.dedup_by(|a, b| a.path == b.path);
    debug!(count = files.len(), "scanner discovered files");
    Ok(files)
}

fn collect_dir(
    root: &Path,
    config: &ScanConfig,
    out: &mut Vec<SourceFile>,
) -> Result<(), ScanError> {
    let mut builder = WalkBuilder::new(root);
    builder
        .git_ignore(config.effective_respect_gitignore())
        .hidden(true);
    // One predicate for all patterns: filter_entry replaces the stored
    // closure, so per-pattern calls would keep only the last one.
    if !config.exclude.is_empty() {
        let exclude = config.exclude.clone();
        builder.filter_entry(move |entry| match entry.file_name().to_str() {
            Some(name) => !exclude.iter().any(|pattern| pattern == name),
            None => true,
        });
    }

    for entry in builder.build() {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                warn!(error = %e, "walk error; skipping entry");
                continue;
            }
        };
        if entry.file_type().is_some_and(|t| t.is_file()) {
            collect_file(entry.path(), config, out)?;
        }
    }
    Ok(())
}

fn collect_file(
    path: &Path,
    config: &ScanConfig,
    out: &mut Vec<SourceFile>,
) -> Result<(), ScanError> {
    let Some(language) = Language::from_path(path) else {
        return Ok(());
    };

    let metadata = std::fs::metadata(path).map_err(|e| ScanError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let limit = config.effective_max_file_size();
    if metadata.len() > limit {
        let err = ScanError::TooLarge {
            path: path.display().to_string(),
            size: metadata.len(),
            limit,
        };
        warn!(error = %err, "skipping oversized file");
        return Ok(());
    }

    let bytes = std::fs::read(path).map_err(|e| ScanError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let content_hash = hash_content(&bytes);
    out.push(SourceFile {
        path: path.to_path_buf(),
        language,
        bytes,
        content_hash,
    });
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discovers_supported_files_and_skips_others() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("a.ts"), "let a = 1;").unwrap();
        std::fs::write(dir.path().join("b.py"), "b = 1").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let files = discover(&[dir.path().to_path_buf()], &ScanConfig::default()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["a.ts", "b.py"]);
    }

    #[test]
    fn missing_path_is_an_error() {
        let err = discover(
            &[PathBuf::from("/definitely/not/here.ts")],
            &ScanConfig::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ScanError::NotFound { .. }));
    }

    #[test]
    fn every_exclude_pattern_is_honored() {
        let dir = tempfile::tempdir().unwrap();
        for sub in ["node_modules", "dist", "src"] {
            std::fs::create_dir(dir.path().join(sub)).unwrap();
        }
        std::fs::write(dir.path().join("node_modules/dep.ts"), "export const d = 1;").unwrap();
        std::fs::write(dir.path().join("dist/out.ts"), "export const o = 1;").unwrap();
        std::fs::write(dir.path().join("src/main.ts"), "export const m = 1;").unwrap();

        let config = ScanConfig {
            exclude: vec!["node_modules".into(), "dist".into()],
            ..Default::default()
        };
        let files = discover(&[dir.path().to_path_buf()], &config).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|f| f.path.file_name().unwrap().to_str().unwrap().to_string())
            .collect();
        assert_eq!(names, vec!["main.ts"]);
    }

    #[test]
    fn oversized_files_are_skipped_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("big.ts"), "x".repeat(64)).unwrap();
        let config = ScanConfig {
            max_file_size: Some(8),
            ..Default::default()
        };
        let files = discover(&[dir.path().to_path_buf()], &config).unwrap();
        assert!(files.is_empty());
    }
}
