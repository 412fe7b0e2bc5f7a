//! Transaction entry extraction from ledger text.
//!
//! A ledger file is cut into blocks at lines made entirely of blank
//! characters. Blocks whose first line is a transaction header
//! (`YYYY-MM-DD *` or `YYYY-MM-DD !`) become [`Entry`] values, everything else
//! (options, comments, `open`/`close`, `balance`, `price`) is skipped.

use std::path::PathBuf;
use std::sync::OnceLock;

use ledger_core::error::{LedgerError, Result};
use ledger_core::models::{trim_blank, Entry};
use regex::Regex;
use tracing::debug;

/// A line holding nothing but blank characters.
fn blank_line_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"(?m)^[\n\r\t ]*$").expect("regex is valid"))
}

/// Transaction header at the start of a block.
fn transaction_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^\n?[0-9]{4}-[0-9]{2}-[0-9]{2} [*!] ").expect("regex is valid"))
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Split ledger text into transaction entries, in order of appearance.
pub fn split_entries(content: &str) -> Vec<Entry> {
    blank_line_regex()
        .split(content)
        .filter(|block| transaction_regex().is_match(block))
        .map(|block| Entry::new(trim_blank(block)))
        .collect()
}

/// Read each file whole and collect its entries, file by file.
///
/// Any unreadable file aborts the extraction.
pub fn extract_entries(files: &[PathBuf]) -> Result<Vec<Entry>> {
    let mut entries = Vec::new();

    for file_path in files {
        let content =
            std::fs::read_to_string(file_path).map_err(|source| LedgerError::FileRead {
                path: file_path.clone(),
                source,
            })?;

        let file_entries = split_entries(&content);
        debug!(
            "File {}: {} entries extracted",
            file_path.display(),
            file_entries.len()
        );
        entries.extend(file_entries);
    }

    Ok(entries)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
