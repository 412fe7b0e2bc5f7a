//! Conversion pipeline: locate ledger files, extract transaction entries and
//! write them out as (compressed) JSONL.

use std::path::{Path, PathBuf};

use ledger_core::error::{LedgerError, Result};
use ledger_core::models::{Entry, OutputFormat};
use ledger_core::settings::Settings;

use crate::emitter::{entries_to_jsonl, write_jsonl};
use crate::extractor::extract_entries;
use crate::locator::{get_absolute_path, locate_files};

// ── Public types ──────────────────────────────────────────────────────────────

/// What a single conversion run did.
#[derive(Debug, Clone)]
pub struct ConversionReport {
    /// Absolute paths of the ledger files read, in processing order.
    pub files: Vec<PathBuf>,
    /// Extracted entries, in output order.
    pub entries: Vec<Entry>,
    /// Absolute path of the JSONL file written.
    pub output_path: PathBuf,
    pub format: OutputFormat,
    /// Number of JSONL lines written.
    pub lines_written: usize,
}

// ── Public functions ──────────────────────────────────────────────────────────

/// Run the full conversion.
///
/// 1. Validate that an input source was given and that the output suffix is
///    supported. Nothing is read or written when either check fails.
/// 2. Resolve the input files.
/// 3. Extract entries from each file in turn.
/// 4. Serialize the entries and write the output file.
pub fn convert(
    input_files: &[PathBuf],
    input_filter: Option<&str>,
    output_file: &Path,
) -> Result<ConversionReport> {
    // ── Step 1: Validate ──────────────────────────────────────────────────────
    let input_filter = input_filter.filter(|pattern| !pattern.trim().is_empty());
    if input_files.is_empty() && input_filter.is_none() {
        return Err(LedgerError::NoInputSource);
    }
    let output_path = get_absolute_path(output_file);
    let format = OutputFormat::from_path(&output_path)?;

    // ── Step 2: Locate ────────────────────────────────────────────────────────
    let files = locate_files(input_files, input_filter)?;

    // ── Step 3: Extract ───────────────────────────────────────────────────────
    let entries = extract_entries(&files)?;

    // ── Step 4: Emit ──────────────────────────────────────────────────────────
    let jsonl_data = entries_to_jsonl(&entries)?;
    let lines_written = write_jsonl(&jsonl_data, &output_path)?;

    Ok(ConversionReport {
        files,
        entries,
        output_path,
        format,
        lines_written,
    })
}

/// [`convert`] driven by parsed command-line [`Settings`].
pub fn convert_with_settings(settings: &Settings) -> Result<ConversionReport> {
    convert(
        &settings.input_files,
        settings.input_filter(),
        &settings.output_file,
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────
