use std::path::PathBuf;
use thiserror::Error;

/// All errors produced by the ledger converter.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// Neither an explicit file list nor a glob filter was supplied.
    #[error("At least one of --input-files or --input-filter is required to be specified")]
    NoInputSource,

    /// The supplied inputs resolved to an empty file set.
    #[error("No input files matched: {0}")]
    NoInputFiles(String),

    /// A path suffix is neither `.jsonl` nor `.gz`.
    #[error("Unsupported JSONL file extension (expected .jsonl or .jsonl.gz): {0}")]
    UnsupportedFormat(PathBuf),

    /// A glob filter could not be compiled.
    #[error("Invalid input filter {pattern}: {source}")]
    InvalidFilter {
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// A file could not be opened or read from disk.
    #[error("Failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An output file could not be created or written.
    #[error("Failed to write file {path}: {source}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A line of a JSONL file is not valid JSON.
    #[error("Failed to parse JSON at {path}:{line}: {source}")]
    JsonLine {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    /// A record could not be serialized.
    #[error("Failed to serialize JSON: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

impl LedgerError {
    /// Returns `true` for errors caused by how the converter was invoked
    /// rather than by the filesystem.
    pub fn is_config(&self) -> bool {
        matches!(
            self,
            Self::NoInputSource
                | Self::NoInputFiles(_)
                | Self::UnsupportedFormat(_)
                | Self::InvalidFilter { .. }
        )
    }
}

/// Convenience alias used throughout the ledger crates.
pub type Result<T> = std::result::Result<T, LedgerError>;
