use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// ── Logging bootstrap ──────────────────────────────────────────────────────────

/// Initialise the global `tracing` subscriber.
///
/// `directive` is the default [`EnvFilter`] directive (see
/// `Settings::verbosity_filter`). `RUST_LOG`, when set and valid, takes
/// precedence. Output goes to stdout so progress messages sit alongside the
/// converter's other output.
pub fn setup_logging(directive: &str) -> anyhow::Result<()> {
    let filter = build_filter(directive);

    let subscriber = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false)
        .with_thread_ids(false);

    tracing_subscriber::registry()
        .with(filter)
        .with(subscriber)
        .try_init()?;

    Ok(())
}

fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new("warn"))
}

// ── Tests ──────────────────────────────────────────────────────────────────────
