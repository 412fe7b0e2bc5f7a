//! Input file discovery for the converter.
//!
//! Combines the explicit `--input-files` list with the `--input-filter` glob
//! into one deduplicated, sorted set of absolute paths.

use std::collections::BTreeSet;
use std::path::{Component, Path, PathBuf};

use glob::MatchOptions;
use ledger_core::error::{LedgerError, Result};
use tracing::{debug, info, warn};

/// File name suffixes recognised as ledger files.
pub const LEDGER_EXTENSIONS: &[&str] = &[".bean", ".beancount"];

// ── Public API ────────────────────────────────────────────────────────────────

/// Resolve the files to process.
///
/// Fails with [`LedgerError::NoInputSource`] before touching the filesystem
/// when both `input_files` and `input_filter` are empty. Files without a
/// ledger extension are kept, with a warning.
pub fn locate_files(input_files: &[PathBuf], input_filter: Option<&str>) -> Result<Vec<PathBuf>> {
    let input_filter = input_filter.filter(|pattern| !pattern.trim().is_empty());
    if input_files.is_empty() && input_filter.is_none() {
        return Err(LedgerError::NoInputSource);
    }

    let mut all_files: BTreeSet<PathBuf> = input_files
        .iter()
        .map(|path| get_absolute_path(path))
        .collect();

    if let Some(pattern) = input_filter {
        let matched = expand_filter(pattern)?;
        debug!("Filter {} matched {} files", pattern, matched.len());
        all_files.extend(matched);
    }

    if all_files.is_empty() {
        return Err(LedgerError::NoInputFiles(
            input_filter.unwrap_or_default().to_string(),
        ));
    }

    let files: Vec<PathBuf> = all_files.into_iter().collect();

    let unrecognised = non_ledger_files(&files);
    if !unrecognised.is_empty() {
        warn!(
            "There may be non ledger files in the input set: {:?}",
            unrecognised
        );
    }

    info!("Processing files: {:?}", files);

    Ok(files)
}

/// Paths whose name ends in none of [`LEDGER_EXTENSIONS`].
pub fn non_ledger_files(files: &[PathBuf]) -> Vec<&Path> {
    files
        .iter()
        .filter(|path| !is_ledger_file(path))
        .map(PathBuf::as_path)
        .collect()
}

pub fn is_ledger_file(path: &Path) -> bool {
    let name = path.to_string_lossy();
    LEDGER_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Expand a leading `~`, anchor relative paths at the current directory and
/// fold `.` and `..` components.
///
/// Purely lexical: the path does not need to exist.
pub fn get_absolute_path(path: &Path) -> PathBuf {
    let expanded = match path.strip_prefix("~") {
        Ok(rest) => dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("~"))
            .join(rest),
        Err(_) => path.to_path_buf(),
    };

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(expanded)
    };

    normalize(&absolute)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Expand a glob filter into the regular files it matches.
///
/// Wildcards skip dot-files unless the pattern spells the dot out.
fn expand_filter(pattern: &str) -> Result<Vec<PathBuf>> {
    let absolute = get_absolute_path(Path::new(pattern));
    let options = MatchOptions {
        require_literal_leading_dot: true,
        ..MatchOptions::new()
    };

    let paths = glob::glob_with(&absolute.to_string_lossy(), options).map_err(|source| {
        LedgerError::InvalidFilter {
            pattern: pattern.to_string(),
            source,
        }
    })?;

    Ok(paths
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect())
}

fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}

// ── Tests ─────────────────────────────────────────────────────────────────────
