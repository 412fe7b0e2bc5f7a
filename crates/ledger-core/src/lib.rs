//! Shared types for the ledger-to-JSONL converter: entries, records, output
//! formats, CLI settings and the error type.

pub mod error;
pub mod models;
pub mod settings;

pub use error::{LedgerError, Result};
pub use models::{Entry, OutputFormat, Record};
