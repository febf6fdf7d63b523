use anyhow::bail;
use clap::{Parser, Subcommand};
use openfigi::{DEFAULT_STREAM_BUFFER_SIZE, ServiceConfig};
use std::path::PathBuf;

/// Command-line arguments for the `openfigi-cli` binary.
///
/// Global options can also be set through environment variables (or a
/// `.env` file in the working directory).
#[derive(Parser, Debug, Clone)]
#[command(
    name = "openfigi-cli",
    version,
    about = "Validate and generate OpenFIGI symbols"
)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Command,

    /// Capacity of the buffer between the background producer and the
    /// printer in `genstream` and `valstream`.
    ///
    /// Environment variable: `STREAM_BUFFER_SIZE`
    #[arg(long, env = "STREAM_BUFFER_SIZE", default_value_t = DEFAULT_STREAM_BUFFER_SIZE, global = true)]
    pub buffer_size: usize,

    /// Seed for the random source. Without it, symbols are drawn from OS
    /// entropy and differ on every run.
    ///
    /// Environment variable: `OPENFIGI_SEED`
    #[arg(long, env = "OPENFIGI_SEED", global = true)]
    pub seed: Option<u64>,

    /// Emit diagnostics on stderr as JSON instead of human-readable lines.
    ///
    /// Environment variable: `LOG_JSON`
    #[arg(long, env = "LOG_JSON", default_value_t = false, global = true)]
    pub log_json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Generate new OpenFIGI symbols and print them all at once.
    Generate {
        /// Number of symbols to generate.
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
    },

    /// Generate new OpenFIGI symbols and print them one by one as they are
    /// produced.
    Genstream {
        /// Number of symbols to generate.
        #[arg(short = 'n', long = "count", default_value_t = 1)]
        count: usize,
    },

    /// Check if a given string is a valid OpenFIGI symbol.
    Validate {
        /// String to validate.
        #[arg(short, long)]
        symbol: String,
    },

    /// Validate symbols from a file or stdin, one per line, printing each
    /// result as soon as it is ready.
    Valstream {
        /// File to read. Reads stdin when omitted.
        file: Option<PathBuf>,

        /// Print one JSON object per line instead of text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

#[derive(Debug, Clone)]
pub struct CliConfig {
    pub command: Command,
    pub service: ServiceConfig,
    pub seed: Option<u64>,
    pub log_json: bool,
}

impl TryFrom<CliArgs> for CliConfig {
    type Error = anyhow::Error;

    fn try_from(args: CliArgs) -> Result<Self, Self::Error> {
        if args.buffer_size == 0 {
            bail!("STREAM_BUFFER_SIZE must be greater than 0");
        }

        Ok(Self {
            command: args.command,
            service: ServiceConfig::default().with_stream_buffer_size(args.buffer_size),
            seed: args.seed,
            log_json: args.log_json,
        })
    }
}
