//! Source file discovery.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};

/// Check if a pattern contains glob metacharacters.
pub fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Source files resolved from a list of patterns.
#[derive(Debug, Default)]
pub struct ResolvedSources {
    /// Accessible files, in first-seen order and without duplicates.
    pub files: Vec<PathBuf>,
    /// Paths that were matched or named but could not be accessed.
    pub missing: Vec<PathBuf>,
}

/// Expand patterns into a deduplicated list of source files.
///
/// Patterns without glob metacharacters are taken literally so that a
/// misspelled path shows up in `missing` instead of silently matching
/// nothing. Inaccessible paths never fail the resolution.
pub fn resolve_sources<S: AsRef<str>>(patterns: &[S]) -> Result<ResolvedSources> {
    let mut seen = HashSet::new();
    let mut candidates = Vec::new();

    for pattern in patterns {
        for path in expand_pattern(pattern.as_ref())? {
            if seen.insert(path.clone()) {
                candidates.push(path);
            }
        }
    }

    let mut result = ResolvedSources::default();
    for path in candidates {
        if is_accessible(&path) {
            result.files.push(path);
        } else {
            result.missing.push(path);
        }
    }

    Ok(result)
}

fn expand_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    if !is_glob_pattern(pattern) {
        return Ok(vec![PathBuf::from(pattern)]);
    }

    let entries = glob::glob(pattern)
        .with_context(|| format!("Invalid glob pattern: \"{}\"", pattern))?;

    // Unreadable entries are kept so the existence check reports them.
    Ok(entries
        .map(|entry| entry.unwrap_or_else(|err| err.path().to_path_buf()))
        .collect())
}

fn is_accessible(path: &Path) -> bool {
    path.try_exists().unwrap_or(false)
}
