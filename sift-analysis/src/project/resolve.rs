//! Import specifier resolution.
//!
//! Maps a specifier string to one of the analyzed files, per the source
//! language's conventions. Resolution is best-effort and closed-world:
//! anything that does not match an analyzed file is unresolved, including
//! every external package.

use std::path::{Component, Path, PathBuf};

use sift_core::types::collections::FxHashMap;

use crate::scanner::Language;

/// Lookup structure over every analyzed file path.
#[derive(Debug, Default)]
pub struct FileIndex {
    paths: Vec<PathBuf>,
    /// file stem → indices into `paths`, each list sorted by path.
    by_stem: FxHashMap<String, Vec<usize>>,
}

impl FileIndex {
    pub fn new(mut paths: Vec<PathBuf>) -> Self {
        paths.sort();
        let mut by_stem: FxHashMap<String, Vec<usize>> = FxHashMap::default();
        for (i, path) in paths.iter().enumerate() {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                by_stem.entry(stem.to_string()).or_default().push(i);
            }
        }
        Self { paths, by_stem }
    }

    fn contains(&self, path: &Path) -> bool {
        self.paths.binary_search_by(|p| p.as_path().cmp(path)).is_ok()
    }

    /// Smallest path whose stem is `stem` and which ends with `suffix`
    /// (a relative path like `a/b.py`). Ties break lexicographically.
    fn by_stem_with_suffix(&self, stem: &str, suffix: &Path) -> Option<&Path> {
        self.by_stem.get(stem)?.iter().map(|&i| self.paths[i].as_path()).find(|p| p.ends_with(suffix))
    }

    fn first_with_stem(&self, stem: &str) -> Option<&Path> {
        self.by_stem.get(stem).and_then(|v| v.first()).map(|&i| self.paths[i].as_path())
    }
}

/// Resolve `specifier` written in `importer` to an analyzed file.
pub fn resolve_specifier(
    index: &FileIndex,
    importer: &Path,
    language: Language,
    specifier: &str,
) -> Option<PathBuf> {
    match language {
        Language::TypeScript | Language::JavaScript => resolve_relative(index, importer, specifier),
        Language::Python => resolve_python(index, importer, specifier),
        Language::Go => resolve_last_segment(index, specifier, '/'),
        Language::Java => resolve_last_segment(index, specifier, '.'),
        Language::Rust => resolve_rust(index, specifier),
    }
}

/// TS/JS: only `./` and `../` specifiers resolve; bare specifiers are
/// packages. Tries the literal path, each known extension, then an
/// `index.*` file in the named directory.
fn resolve_relative(index: &FileIndex, importer: &Path, specifier: &str) -> Option<PathBuf> {
    if !specifier.starts_with("./") && !specifier.starts_with("../") {
        return None;
    }
    let base = importer.parent().unwrap_or_else(|| Path::new(""));
    let joined = normalize(&base.join(specifier));

    if index.contains(&joined) {
        return Some(joined);
    }
    for ext in ["ts", "tsx", "js", "jsx", "mjs", "cjs"] {
        let candidate = joined.with_extension(ext);
        if index.contains(&candidate) {
            return Some(candidate);
        }
    }
    for ext in ["ts", "tsx", "js", "jsx"] {
        let candidate = joined.join(format!("index.{ext}"));
        if index.contains(&candidate) {
            return Some(candidate);
        }
    }
    None
}

/// Python: `a.b.c` maps to `a/b/c.py` or `a/b/c/__init__.py`, matched as a
/// path suffix. Leading dots walk up from the importing file's package.
fn resolve_python(index: &FileIndex, importer: &Path, specifier: &str) -> Option<PathBuf> {
    let dots = specifier.chars().take_while(|&c| c == '.').count();
    let rest = &specifier[dots..];
    let segments: Vec<&str> = rest.split('.').filter(|s| !s.is_empty()).collect();

    if dots > 0 {
        // Relative import: anchor on the importer's directory.
        let mut base = importer.parent()?.to_path_buf();
        for _ in 1..dots {
            base = base.parent()?.to_path_buf();
        }
        let mut candidate = base;
        for seg in &segments {
            candidate.push(seg);
        }
        let module = candidate.with_extension("py");
        if index.contains(&module) {
            return Some(module);
        }
        let package = candidate.join("__init__.py");
        if index.contains(&package) {
            return Some(package);
        }
        return None;
    }

    let last = segments.last()?;
    let mut suffix = PathBuf::new();
    for seg in &segments {
        suffix.push(seg);
    }
    let module_suffix = suffix.with_extension("py");
    if let Some(found) = index.by_stem_with_suffix(last, &module_suffix) {
        return Some(found.to_path_buf());
    }
    let package_suffix = suffix.join("__init__.py");
    index
        .by_stem_with_suffix("__init__", &package_suffix)
        .map(Path::to_path_buf)
}

/// Go and Java: the final path segment names the imported unit; match it
/// against file stems.
fn resolve_last_segment(index: &FileIndex, specifier: &str, sep: char) -> Option<PathBuf> {
    let last = specifier
        .trim_end_matches(&format!("{sep}*"))
        .rsplit(sep)
        .next()
        .filter(|s| !s.is_empty())?;
    index.first_with_stem(last).map(Path::to_path_buf)
}

/// Rust: `use` paths resolve by their first meaningful segment's module
/// file. `crate`/`self`/`super` prefixes are skipped.
fn resolve_rust(index: &FileIndex, specifier: &str) -> Option<PathBuf> {
    let segment = specifier
        .split("::")
        .find(|s| !matches!(*s, "crate" | "self" | "super" | ""))?;
    index.first_with_stem(segment).map(Path::to_path_buf)
}

/// Collapse `.` and `..` components without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !out.pop() {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}
