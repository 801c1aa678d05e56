use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize structured logging on stderr.
///
/// `CORE4_LOG` (or `RUST_LOG`) overrides the level chosen from `--verbose`.
pub fn init_tracing(verbose: bool) -> Result<(), Box<dyn std::error::Error>> {
    let level = if verbose {
        "core4_scorecard=debug"
    } else {
        "core4_scorecard=warn"
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env("CORE4_LOG"))
        .unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr)
                .with_ansi(false),
        )
        .try_init()?;

    Ok(())
}
