use clap::{ArgAction, Parser};
use std::path::PathBuf;

// ── Settings (CLI) ─────────────────────────────────────────────────────────────

/// Map ledger transactions into (compressed) JSONL format
#[derive(Parser, Debug, Clone)]
#[command(
    name = "ledger-jsonl",
    about = "Map ledger transactions into (compressed) JSONL format",
    version
)]
pub struct Settings {
    /// Output file for (compressed) JSONL formatted transactions. Expected file extensions: jsonl or jsonl.gz
    #[arg(short, long)]
    pub output_file: PathBuf,

    /// List of ledger files to process
    #[arg(short, long, num_args = 0..)]
    pub input_files: Vec<PathBuf>,

    /// Glob filter for ledger files to process
    #[arg(long)]
    pub input_filter: Option<String>,

    /// Show verbose conversion logs
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Settings {
    /// Parse settings from the process arguments.
    pub fn load() -> Self {
        Settings::parse()
    }

    /// The `tracing` filter directive matching the `-v` count.
    pub fn verbosity_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    }

    /// `--input-filter`, ignoring an empty or blank value.
    pub fn input_filter(&self) -> Option<&str> {
        self.input_filter
            .as_deref()
            .filter(|pattern| !pattern.trim().is_empty())
    }
}

// ── Tests ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_default_values() {
        let settings = Settings::parse_from(["ledger-jsonl", "-o", "out.jsonl"]);

        assert_eq!(settings.output_file, PathBuf::from("out.jsonl"));
        assert!(settings.input_files.is_empty());
        assert!(settings.input_filter.is_none());
        assert_eq!(settings.verbose, 0);
        assert_eq!(settings.verbosity_filter(), "warn");
    }

    #[test]
    fn test_settings_output_file_required() {
        let result = Settings::try_parse_from(["ledger-jsonl", "-i", "main.beancount"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_cli_multiple_input_files() {
        let settings = Settings::parse_from([
            "ledger-jsonl",
            "--output-file",
            "out.jsonl.gz",
            "--input-files",
            "a.bean",
            "b.beancount",
        ]);
        assert_eq!(
            settings.input_files,
            vec![PathBuf::from("a.bean"), PathBuf::from("b.beancount")]
        );
    }

    #[test]
    fn test_settings_cli_input_files_without_values() {
        let settings = Settings::parse_from(["ledger-jsonl", "-o", "out.jsonl", "-i"]);
        assert!(settings.input_files.is_empty());
    }

    #[test]
    fn test_settings_cli_input_filter() {
        let settings = Settings::parse_from([
            "ledger-jsonl",
            "-o",
            "out.jsonl",
            "--input-filter",
            "~/ledger/*.bean",
        ]);
        assert_eq!(settings.input_filter(), Some("~/ledger/*.bean"));
    }

    #[test]
    fn test_settings_blank_input_filter_is_ignored() {
        let settings =
            Settings::parse_from(["ledger-jsonl", "-o", "out.jsonl", "--input-filter", "  "]);
        assert_eq!(settings.input_filter(), None);
    }

    #[test]
    fn test_settings_verbose_count() {
        let settings = Settings::parse_from(["ledger-jsonl", "-o", "out.jsonl", "-v"]);
        assert_eq!(settings.verbose, 1);
        assert_eq!(settings.verbosity_filter(), "info");

        let settings = Settings::parse_from(["ledger-jsonl", "-o", "out.jsonl", "-vvv"]);
        assert_eq!(settings.verbose, 3);
        assert_eq!(settings.verbosity_filter(), "debug");
    }
}
