//! Diagnostics for the command-line tool.
//!
//! Logs go to stderr so that stdout only ever carries symbols and validation
//! results. The level is controlled through `RUST_LOG` and defaults to
//! `warn`; the library's spans and events (behind its `tracing` feature) show
//! up at `debug` and `trace`.
//!
//! ```bash
//! RUST_LOG=openfigi=debug openfigi-cli genstream -n 1000000
//! ```

use tracing_subscriber::{
    EnvFilter, fmt, fmt::time::ChronoLocal, layer::SubscriberExt, util::SubscriberInitExt,
};

/// Installs the global subscriber. `json` switches the console format to one
/// JSON object per event.
pub fn init_telemetry(json: bool) -> anyhow::Result<()> {
    let registry = tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_thread_ids(true)
        .with_target(false)
        .with_timer(ChronoLocal::rfc_3339());

    if json {
        registry.with(layer.json()).try_init()?;
    } else {
        registry.with(layer).try_init()?;
    }

    Ok(())
}
