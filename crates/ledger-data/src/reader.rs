//! JSONL loading for downstream consumers of converted ledgers.
//!
//! Reads plain `.jsonl` or gzip-compressed `.gz` files line by line and
//! decodes each line as JSON.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::GzDecoder;
use ledger_core::error::{LedgerError, Result};
use ledger_core::models::{trim_blank, OutputFormat, Record};
use serde::de::DeserializeOwned;
use tracing::info;

// ── Public API ────────────────────────────────────────────────────────────────

/// Load every line of a JSONL file as a [`serde_json::Value`], in file order.
pub fn load_jsonl(input_path: &Path) -> Result<Vec<serde_json::Value>> {
    load_lines(input_path)
}

/// Load a converted ledger file as typed [`Record`]s.
pub fn load_records(input_path: &Path) -> Result<Vec<Record>> {
    load_lines(input_path)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

fn load_lines<T: DeserializeOwned>(input_path: &Path) -> Result<Vec<T>> {
    let format = OutputFormat::from_path(input_path)?;
    let file = File::open(input_path).map_err(|source| LedgerError::FileRead {
        path: input_path.to_path_buf(),
        source,
    })?;

    let reader: Box<dyn Read> = match format {
        OutputFormat::Jsonl => Box::new(file),
        OutputFormat::GzipJsonl => Box::new(GzDecoder::new(file)),
    };

    let mut data = Vec::new();
    for (index, line_result) in BufReader::new(reader).lines().enumerate() {
        let line = line_result.map_err(|source| LedgerError::FileRead {
            path: input_path.to_path_buf(),
            source,
        })?;
        let trimmed = trim_blank(&line);
        if trimmed.is_empty() {
            continue;
        }

        let value = serde_json::from_str(trimmed).map_err(|source| LedgerError::JsonLine {
            path: input_path.to_path_buf(),
            line: index + 1,
            source,
        })?;
        data.push(value);
    }

    info!("Loaded {} records from {}", data.len(), input_path.display());

    Ok(data)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::{entries_to_jsonl, write_jsonl};
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use ledger_core::models::Entry;
    use std::io::Write;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample_entries() -> Vec<Entry> {
        vec![
            Entry::new("2024-01-05 * \"Bakery\"\n  Expenses:Food  3.50 EUR\n  Assets:Cash"),
            Entry::new("2024-01-06 ! \"Zürich Café\"\n  Expenses:Coffee  4 CHF\n  Assets:Cash"),
            Entry::new("2024-01-07 * \"Tab\tseparated\""),
        ]
    }

    fn write_gzip(path: &Path, content: &str) {
        let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
        encoder.write_all(content.as_bytes()).unwrap();
        encoder.finish().unwrap();
    }

    #[test]
    fn test_load_records_round_trip_plain() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entries.jsonl");
        let entries = sample_entries();
        write_jsonl(&entries_to_jsonl(&entries).unwrap(), &path).unwrap();

        let records = load_records(&path).unwrap();

        let titles: Vec<&str> = records.iter().map(|r| r.title.as_str()).collect();
        let expected: Vec<&str> = entries.iter().map(Entry::as_str).collect();
        assert_eq!(titles, expected);
    }

    #[test]
    fn test_load_jsonl_round_trip_gzip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entries.jsonl.gz");
        let entries = sample_entries();
        write_jsonl(&entries_to_jsonl(&entries).unwrap(), &path).unwrap();

        let values = load_jsonl(&path).unwrap();

        assert_eq!(values.len(), entries.len());
        for (value, entry) in values.iter().zip(&entries) {
            assert_eq!(value["Title"].as_str(), Some(entry.as_str()));
            assert_eq!(value.as_object().unwrap().len(), 1);
        }
    }

    #[test]
    fn test_load_jsonl_skips_blank_lines_and_crlf() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entries.jsonl");
        std::fs::write(&path, "{\"Title\": \"a\"}\r\n\n   \n\t{\"Title\": \"b\"}  \n").unwrap();

        let records = load_records(&path).unwrap();

        assert_eq!(
            records,
            vec![
                Record { title: "a".to_string() },
                Record { title: "b".to_string() },
            ]
        );
    }

    #[test]
    fn test_load_jsonl_malformed_line() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entries.jsonl.gz");
        write_gzip(&path, "{\"Title\": \"ok\"}\n{not valid json{{\n");

        let err = load_jsonl(&path).unwrap_err();
        match err {
            LedgerError::JsonLine { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_jsonl_unsupported_suffix() {
        let err = load_jsonl(Path::new("/tmp/entries.csv")).unwrap_err();
        assert!(matches!(err, LedgerError::UnsupportedFormat(_)));
    }

    #[test]
    fn test_load_jsonl_missing_file() {
        let missing = PathBuf::from("/tmp/does-not-exist-ledger-test-xyz/entries.jsonl");
        let err = load_jsonl(&missing).unwrap_err();
        assert!(matches!(err, LedgerError::FileRead { .. }));
    }

    #[test]
    fn test_load_jsonl_empty_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("entries.jsonl");
        std::fs::write(&path, "").unwrap();
        assert!(load_jsonl(&path).unwrap().is_empty());
    }
}
