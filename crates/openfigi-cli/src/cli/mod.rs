//! Building blocks of the `openfigi-cli` binary.
//!
//! - [`config`] - argument parsing and validation.
//! - [`commands`] - one function per subcommand.
//! - [`telemetry`] - diagnostics on stderr.

pub mod commands;
pub mod config;
pub mod telemetry;
