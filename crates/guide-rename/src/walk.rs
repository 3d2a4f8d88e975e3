//! Directory traversal and in-place rewriting

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use crate::error::{RenameError, RenameResult};
use crate::rules::{apply_rules, Rule};

/// Directory segments that are never descended into
const EXCLUDE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "dist",
    "build",
    ".next",
    "coverage",
    ".vercel",
    "archive",
    "test-results",
    "logs",
];

/// File name suffixes that are skipped even inside allowed directories
const EXCLUDE_SUFFIXES: &[&str] = &[".log", ".lock"];

/// Exact file names that are never rewritten; the legacy rename script and
/// the migration notes both contain the old brand literals on purpose
const EXCLUDE_NAMES: &[&str] = &["rename-brand.py", "BRAND-NAME-OPTIMIZATION.md"];

/// Extensions of files considered text and eligible for rewriting
const ALLOWED_EXTENSIONS: &[&str] = &[
    "md", "html", "js", "json", "jsx", "ts", "tsx", "cjs", "mjs", "py", "sh",
    "yml", "yaml", "txt", "css", "scss", "xml",
];

/// Outcome of processing a single file
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileOutcome {
    /// No rule matched; the file was left untouched
    Unchanged,
    /// The file was rewritten. `occurrences` is the number of rule matches
    /// counted against the pre-replacement content.
    Rewritten { occurrences: usize },
}

/// Totals for a whole tree scan
#[derive(Debug, Default)]
pub struct ScanSummary {
    /// Files that passed the extension/exclusion filter and were read
    pub scanned: usize,
    /// Rewritten files with their occurrence counts, in traversal order
    pub modified: Vec<(PathBuf, usize)>,
    /// Sum of occurrence counts across all modified files
    pub total_replacements: usize,
    /// Files that failed to read or write, with the error rendered as text
    pub skipped: Vec<(PathBuf, String)>,
}

/// Whether a path is eligible for rewriting.
///
/// A file is processed only if no path segment is an excluded directory,
/// its name does not carry an excluded suffix, and its extension is in the
/// allowed set.
pub fn should_process(path: &Path) -> bool {
    let excluded: HashSet<&str> = EXCLUDE_DIRS.iter().copied().collect();
    for part in path.iter() {
        if let Some(part) = part.to_str() {
            if excluded.contains(part) {
                return false;
            }
        }
    }

    let name = match path.file_name().and_then(|n| n.to_str()) {
        Some(name) => name,
        None => return false,
    };
    if EXCLUDE_NAMES.contains(&name) {
        return false;
    }
    if EXCLUDE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)) {
        return false;
    }

    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ALLOWED_EXTENSIONS.contains(&ext))
        .unwrap_or(false)
}

/// Apply the rules to one file, rewriting it in place only when the
/// content changed. Read and write failures (including files that are not
/// valid UTF-8) are returned to the caller rather than reported as a zero
/// count.
pub fn rewrite_file(path: &Path, rules: &[Rule]) -> RenameResult<FileOutcome> {
    let content = fs::read_to_string(path).map_err(|source| RenameError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let (rewritten, occurrences) = apply_rules(&content, rules);

    if rewritten == content {
        return Ok(FileOutcome::Unchanged);
    }

    fs::write(path, rewritten).map_err(|source| RenameError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(FileOutcome::Rewritten { occurrences })
}

/// Walk `root` and rewrite every eligible file, collecting run totals.
pub fn scan_tree(root: &Path, rules: &[Rule]) -> RenameResult<ScanSummary> {
    let mut summary = ScanSummary::default();

    for entry in WalkDir::new(root) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !should_process(path) {
            continue;
        }

        summary.scanned += 1;
        match rewrite_file(path, rules) {
            Ok(FileOutcome::Unchanged) => {}
            Ok(FileOutcome::Rewritten { occurrences }) => {
                summary.total_replacements += occurrences;
                let relative = path.strip_prefix(root).unwrap_or(path).to_path_buf();
                summary.modified.push((relative, occurrences));
            }
            Err(e) => {
                debug!("skipping {}: {}", path.display(), e);
                summary.skipped.push((path.to_path_buf(), e.to_string()));
            }
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_should_process_allowed_extension() {
        assert!(should_process(Path::new("src/App.jsx")));
        assert!(should_process(Path::new("README.md")));
        assert!(should_process(Path::new("public/admin.html")));
    }

    #[test]
    fn test_should_process_rejects_unknown_extension() {
        assert!(!should_process(Path::new("photo.png")));
        assert!(!should_process(Path::new("Makefile")));
    }

    #[test]
    fn test_should_process_rejects_excluded_dirs() {
        assert!(!should_process(Path::new("node_modules/pkg/index.js")));
        assert!(!should_process(Path::new("a/dist/b/bundle.js")));
        assert!(!should_process(Path::new("logs/notes.txt")));
    }

    #[test]
    fn test_should_process_rejects_excluded_suffixes() {
        assert!(!should_process(Path::new("yarn.lock")));
        assert!(!should_process(Path::new("debug.log")));
    }

    #[test]
    fn test_should_process_rejects_excluded_names() {
        assert!(!should_process(Path::new("scripts/rename-brand.py")));
        assert!(!should_process(Path::new("BRAND-NAME-OPTIMIZATION.md")));
        // other .py/.md files stay eligible
        assert!(should_process(Path::new("scripts/data-check.py")));
    }
}
