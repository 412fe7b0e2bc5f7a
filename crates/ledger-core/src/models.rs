use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

use crate::error::{LedgerError, Result};

/// Characters treated as blank when splitting and trimming ledger text.
pub const BLANK_CHARS: &[char] = &['\n', '\r', '\t', ' '];

/// Trim [`BLANK_CHARS`] from both ends of `text`.
pub fn trim_blank(text: &str) -> &str {
    text.trim_matches(BLANK_CHARS)
}

/// One transaction block cut out of a ledger file.
///
/// The text is trimmed and always starts with a `YYYY-MM-DD *` or
/// `YYYY-MM-DD !` header line. Postings, metadata and comments inside the
/// block are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Entry(String);

impl Entry {
    /// Wrap already-trimmed transaction text.
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Entry {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A single JSONL line: `{"Title": <entry text>}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Title")]
    pub title: String,
}

impl From<&Entry> for Record {
    fn from(entry: &Entry) -> Self {
        Record {
            title: entry.as_str().to_string(),
        }
    }
}

/// On-disk encoding of a JSONL file, chosen by path suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Plain UTF-8 text (`.jsonl`).
    Jsonl,
    /// Gzip-compressed UTF-8 text (`.gz`, usually `.jsonl.gz`).
    GzipJsonl,
}

impl OutputFormat {
    /// Select the format from the final suffix of `path`.
    ///
    /// Only the last extension counts, so `entries.jsonl.gz` is gzip and
    /// `entries.gz.jsonl` is plain.
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("gz") => Ok(OutputFormat::GzipJsonl),
            Some("jsonl") => Ok(OutputFormat::Jsonl),
            _ => Err(LedgerError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn is_compressed(self) -> bool {
        matches!(self, OutputFormat::GzipJsonl)
    }
}
