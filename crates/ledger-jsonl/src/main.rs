mod bootstrap;

use anyhow::Result;
use ledger_core::settings::Settings;
use ledger_data::pipeline::convert_with_settings;

fn main() -> Result<()> {
    let settings = Settings::load();

    bootstrap::setup_logging(settings.verbosity_filter())?;

    tracing::debug!("ledger-jsonl v{} starting", env!("CARGO_PKG_VERSION"));

    let report = convert_with_settings(&settings)?;

    tracing::info!(
        "Converted {} entries from {} files into {}",
        report.entries.len(),
        report.files.len(),
        report.output_path.display()
    );

    Ok(())
}
