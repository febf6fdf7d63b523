#![doc = include_str!("../README.md")]

mod cli;

use clap::Parser;
use cli::commands::{run_generate, run_genstream, run_valstream, run_validate};
use cli::config::{CliArgs, CliConfig, Command};
use cli::telemetry::init_telemetry;
use openfigi::{FigiService, SeededRandom};
use tokio::signal;
use tokio_util::sync::CancellationToken;

// Using mimalloc for better performance under contention, especially in musl
// environments.
#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

fn main() -> anyhow::Result<()> {
    // Load from .env
    let _ = dotenvy::dotenv();
    let args = CliArgs::parse();
    let config = CliConfig::try_from(args)?;

    init_telemetry(config.log_json)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let res = rt.block_on(run(config));

    // A blocking stdin read cannot be cancelled; don't wait for it.
    rt.shutdown_background();
    res
}

async fn run(config: CliConfig) -> anyhow::Result<()> {
    let token = CancellationToken::new();
    tokio::spawn(shutdown_signal(token.clone()));

    tracing::debug!(command = ?config.command, buffer = config.service.stream_buffer_size, "starting");

    let rng = config
        .seed
        .map_or_else(SeededRandom::default, SeededRandom::with_seed);
    let service = FigiService::with_rng(config.service, rng);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match config.command {
        Command::Generate { count } => run_generate(&service, count, &mut out),
        Command::Genstream { count } => run_genstream(&service, count, token, &mut out).await,
        Command::Validate { symbol } => run_validate(&service, &symbol, &mut out),
        Command::Valstream { file, json } => {
            run_valstream(&service, file.as_deref(), json, token, &mut out).await
        }
    }
}

async fn shutdown_signal(token: CancellationToken) {
    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        () = ctrl_c => tracing::info!("Received Ctrl+C signal"),
        () = terminate => tracing::info!("Received terminate signal"),
    }

    token.cancel();
}
