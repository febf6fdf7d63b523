//! Subcommand implementations.
//!
//! Every command writes its results to the given writer so the binary can
//! hand in a locked stdout and tests can hand in a buffer.

use anyhow::{Context, bail};
use futures::{Stream, StreamExt};
use openfigi::{FigiService, RandSource, ValidationResult};
use std::io::{self, Write};
use std::path::Path;
use tokio::{fs::File, io::BufReader};
use tokio_util::sync::CancellationToken;

/// Generates `count` symbols, then prints them all.
pub fn run_generate<R, W>(service: &FigiService<R>, count: usize, out: &mut W) -> anyhow::Result<()>
where
    R: RandSource,
    W: Write,
{
    let symbols = service.try_generate(count)?;
    for symbol in symbols {
        writeln!(out, "{symbol}")?;
    }
    out.flush()?;
    Ok(())
}

/// Prints symbols one by one as the background producer emits them.
pub async fn run_genstream<R, W>(
    service: &FigiService<R>,
    count: usize,
    token: CancellationToken,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: RandSource + Send + 'static,
    W: Write,
{
    let mut printed = 0_usize;
    let mut symbols = service.generate_stream(count, token.clone());
    while let Some(symbol) = symbols.next().await {
        writeln!(out, "{symbol}")?;
        printed += 1;
    }
    out.flush()?;

    if printed < count && token.is_cancelled() {
        bail!("interrupted after {printed} of {count} symbols");
    }
    Ok(())
}

/// Prints `Valid` or `Invalid (Reason: ...)` for a single input.
pub fn run_validate<R, W>(service: &FigiService<R>, input: &str, out: &mut W) -> anyhow::Result<()>
where
    R: RandSource,
    W: Write,
{
    match service.validate(input) {
        Ok(_) => writeln!(out, "Valid")?,
        Err(reason) => writeln!(out, "Invalid (Reason: {reason})")?,
    }
    out.flush()?;
    Ok(())
}

/// Validates every line of `file` (or stdin) and prints each result as soon
/// as it is ready.
pub async fn run_valstream<R, W>(
    service: &FigiService<R>,
    file: Option<&Path>,
    json: bool,
    token: CancellationToken,
    out: &mut W,
) -> anyhow::Result<()>
where
    R: RandSource,
    W: Write,
{
    let results = match file {
        Some(path) => {
            let file = File::open(path)
                .await
                .with_context(|| format!("failed to open {}", path.display()))?;
            service.validate_lines(BufReader::new(file), token.clone())
        }
        None => service.validate_lines(BufReader::new(tokio::io::stdin()), token.clone()),
    };

    write_results(results, json, out).await?;

    if token.is_cancelled() {
        bail!("interrupted");
    }
    Ok(())
}

/// Drains `results` into `out`, one line per result.
///
/// A read error ends the output and is returned after everything before it
/// was written.
pub async fn write_results<S, W>(results: S, json: bool, out: &mut W) -> anyhow::Result<usize>
where
    S: Stream<Item = io::Result<ValidationResult>>,
    W: Write,
{
    let mut results = core::pin::pin!(results);
    let mut written = 0;
    while let Some(result) = results.next().await {
        let result = match result {
            Ok(result) => result,
            Err(e) => {
                out.flush()?;
                return Err(e).context(format!("failed to read input after {written} lines"));
            }
        };
        if json {
            serde_json::to_writer(&mut *out, &result)?;
            writeln!(out)?;
        } else if result.is_valid() {
            writeln!(out, "{} is valid", result.input)?;
        } else {
            writeln!(out, "{} is invalid (reason: {})", result.input, result.message())?;
        }
        written += 1;
    }
    out.flush()?;
    Ok(written)
}
