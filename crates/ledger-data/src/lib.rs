//! Data layer for the ledger-to-JSONL converter.
//!
//! Responsible for locating ledger files, extracting transaction entries,
//! writing them as (compressed) JSONL, reading JSONL back, and running the
//! top-level conversion pipeline.

pub mod emitter;
pub mod extractor;
pub mod locator;
pub mod pipeline;
pub mod reader;
