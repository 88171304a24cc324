//! File discovery.
//!
//! Entries containing glob metacharacters are expanded against the project
//! root (`**` spans directories). Plain paths are kept even when nothing
//! exists there, so they can be reported as missing.

use crate::error::Result;
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Whether `pattern` needs glob expansion.
pub fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Expand `patterns` into file paths.
///
/// Paths are relative to `root` when they lie below it. Each file is listed
/// once, in the order it was first found.
pub fn discover_files(root: &Path, patterns: &[String]) -> Result<Vec<PathBuf>> {
    let mut seen = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns.iter().map(|p| p.trim()).filter(|p| !p.is_empty()) {
        let found = if is_glob(pattern) {
            expand(root, pattern)?
        } else {
            vec![PathBuf::from(pattern)]
        };

        tracing::debug!("Pattern '{}' matched {} file(s)", pattern, found.len());
        for path in found {
            if seen.insert(path.clone()) {
                files.push(path);
            }
        }
    }

    Ok(files)
}

fn expand(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    let full_pattern = if Path::new(pattern).is_absolute() {
        pattern.to_string()
    } else {
        let root = glob::Pattern::escape(&root.display().to_string());
        format!("{}/{}", root.trim_end_matches('/'), pattern)
    };

    let entries = glob::glob(&full_pattern)
        .map_err(|e| anyhow::anyhow!("Invalid file pattern '{}': {}", pattern, e))?;

    let mut files = Vec::new();
    for entry in entries {
        match entry {
            Ok(path) if path.is_file() => {
                let path = path
                    .strip_prefix(root)
                    .map(Path::to_path_buf)
                    .unwrap_or(path);
                files.push(path);
            }
            Ok(_) => {}
            Err(e) => tracing::debug!("Skipping unreadable path: {}", e),
        }
    }
    Ok(files)
}
