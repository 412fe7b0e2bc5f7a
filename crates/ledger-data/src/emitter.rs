//! JSONL serialization and persistence of extracted entries.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use flate2::write::GzEncoder;
use flate2::Compression;
use ledger_core::error::{LedgerError, Result};
use ledger_core::models::{Entry, OutputFormat, Record};
use serde::ser::Error as _;
use serde::Serialize;
use serde_json::ser::Formatter;
use tracing::info;

// ── Public API ────────────────────────────────────────────────────────────────

/// Serialize one record as a single JSON line, without the trailing newline.
pub fn record_to_json_line(record: &Record) -> Result<String> {
    let mut line = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut line, SpacedFormatter);
    record.serialize(&mut serializer)?;
    Ok(String::from_utf8(line).map_err(serde_json::Error::custom)?)
}

/// Convert entries to JSONL text, one `{"Title": ...}` object per line.
///
/// Every line, including the last, ends with `\n`. Non-ASCII characters are
/// written as-is, and keys are followed by `": "`.
pub fn entries_to_jsonl(entries: &[Entry]) -> Result<String> {
    let mut jsonl = String::new();
    for entry in entries {
        jsonl.push_str(&record_to_json_line(&Record::from(entry))?);
        jsonl.push('\n');
    }

    info!("Converted {} entries to jsonl format", entries.len());

    Ok(jsonl)
}

/// Write `jsonl_data` to `output_path`, compressing when the suffix is `.gz`.
///
/// Returns the number of lines written.
pub fn write_jsonl(jsonl_data: &str, output_path: &Path) -> Result<usize> {
    let format = OutputFormat::from_path(output_path)?;
    match format {
        OutputFormat::Jsonl => dump_jsonl(jsonl_data, output_path)?,
        OutputFormat::GzipJsonl => compress_jsonl_data(jsonl_data, output_path)?,
    }

    let lines = jsonl_data.lines().count();
    info!(
        "Wrote {} lines to {}jsonl at {}",
        lines,
        if format.is_compressed() {
            "gzip compressed "
        } else {
            ""
        },
        output_path.display()
    );

    Ok(lines)
}

/// Write plain UTF-8 JSONL, replacing any existing file.
pub fn dump_jsonl(jsonl_data: &str, output_path: &Path) -> Result<()> {
    std::fs::write(output_path, jsonl_data).map_err(|source| write_error(output_path, source))
}

/// Write gzip-compressed JSONL, replacing any existing file.
pub fn compress_jsonl_data(jsonl_data: &str, output_path: &Path) -> Result<()> {
    let file = File::create(output_path).map_err(|source| write_error(output_path, source))?;
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder
        .write_all(jsonl_data.as_bytes())
        .map_err(|source| write_error(output_path, source))?;
    encoder
        .finish()
        .map_err(|source| write_error(output_path, source))?;
    Ok(())
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Single-line JSON with `": "` after keys and `", "` between members.
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_object_key<W: ?Sized + Write>(&mut self, writer: &mut W, first: bool) -> io::Result<()> {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W: ?Sized + Write>(&mut self, writer: &mut W) -> io::Result<()> {
        writer.write_all(b": ")
    }
}

fn write_error(path: &Path, source: std::io::Error) -> LedgerError {
    LedgerError::FileWrite {
        path: path.to_path_buf(),
        source,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
