//! The streaming OpenFIGI service.
//!
//! [`FigiService`] bundles the symbol engine with a shared generator and
//! exposes both "collect all" and "emit incrementally" flavors of validation
//! and generation.
//!
//! ## Responsibilities
//!
//! - Validate single inputs synchronously.
//! - Spawn one producer task per streaming call, backed by a bounded channel
//!   so a slow consumer never causes unbounded buffering.
//! - Stop producers promptly on cancellation or when the consumer goes away.

use super::{
    ServiceConfig,
    producer::{feed_symbols, forward, read_lines},
};
use crate::{
    RandSource, Result, Symbol, SymbolGenerator, ThreadRandom, ValidationError, ValidationResult,
};
use futures::{Stream, StreamExt};
use std::{io, sync::Arc};
use tokio::{io::AsyncBufRead, sync::mpsc};
use tokio_stream::wrappers::ReceiverStream;
use tokio_util::sync::CancellationToken;

/// Stream of validation results, one per input line, in input order.
pub type ValidationStream = ReceiverStream<ValidationResult>;

/// Stream of validation results read from an [`AsyncBufRead`]. A read error
/// is delivered as the last item.
pub type LineValidationStream = ReceiverStream<io::Result<ValidationResult>>;

/// Stream of freshly generated, pairwise distinct symbols.
pub type SymbolStream = ReceiverStream<Symbol>;

/// Validates and generates OpenFIGI symbols.
///
/// The service owns a single [`SymbolGenerator`] behind an [`Arc`]; clones
/// share it, so every draw from the random source is serialized no matter how
/// many tasks generate at once. The per-call uniqueness set is never shared.
///
/// Streaming operations spawn a task on the current tokio runtime.
///
/// ```
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() {
/// use openfigi::FigiService;
/// use tokio_stream::StreamExt;
/// use tokio_util::sync::CancellationToken;
///
/// let service = FigiService::new();
/// let mut symbols = service.generate_stream(3, CancellationToken::new());
/// while let Some(symbol) = symbols.next().await {
///     assert!(service.validate(symbol.as_str()).is_ok());
/// }
/// # }
/// ```
pub struct FigiService<R = ThreadRandom>
where
    R: RandSource,
{
    config: ServiceConfig,
    generator: Arc<SymbolGenerator<R>>,
}

impl FigiService<ThreadRandom> {
    /// Creates a service drawing from the thread-local RNG with the default
    /// configuration.
    pub fn new() -> Self {
        Self::with_rng(ServiceConfig::default(), ThreadRandom)
    }
}

impl Default for FigiService<ThreadRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Clone for FigiService<R>
where
    R: RandSource,
{
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<R> FigiService<R>
where
    R: RandSource,
{
    /// Creates a service with an explicit configuration and random source.
    pub fn with_rng(config: ServiceConfig, rng: R) -> Self {
        Self {
            config,
            generator: Arc::new(SymbolGenerator::new(rng)),
        }
    }

    /// The configuration this service was built with.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Validates a single input. Never blocks and has no side effects.
    ///
    /// # Errors
    ///
    /// Returns the reason the input is not a valid symbol.
    pub fn validate(&self, input: &str) -> core::result::Result<Symbol, ValidationError> {
        crate::validate(input)
    }

    /// Generates exactly `n` distinct symbols before returning.
    ///
    /// Prefer [`Self::generate_stream`] for large counts.
    ///
    /// # Panics
    /// Panics if the generator lock is poisoned. For explicitly fallible
    /// behavior, use [`Self::try_generate`] instead.
    pub fn generate(&self, n: usize) -> Vec<Symbol> {
        self.generator.generate(n)
    }

    /// Generates exactly `n` distinct symbols before returning.
    ///
    /// # Errors
    /// - Returns an error if the generator lock has been poisoned.
    pub fn try_generate(&self, n: usize) -> Result<Vec<Symbol>> {
        self.generator.try_generate(n)
    }

    /// Validates a stream of lines in a background task.
    ///
    /// Each item of `lines` is one candidate, checked exactly as given. The
    /// returned stream yields one [`ValidationResult`] per line and ends when
    /// `lines` is exhausted. Cancelling `token` stops the producer promptly;
    /// results it already buffered are still delivered before the end.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn validate_stream<S>(&self, lines: S, token: CancellationToken) -> ValidationStream
    where
        S: Stream<Item = String> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(self.config.channel_capacity());
        let fut = forward(lines.map(ValidationResult::new), tx, token);

        #[cfg(feature = "tracing")]
        let fut = {
            use tracing::Instrument;
            fut.instrument(tracing::debug_span!("validate_stream"))
        };

        tokio::spawn(fut);
        ReceiverStream::new(rx)
    }

    /// Reads `reader` line by line and validates each line in a background
    /// task.
    ///
    /// Lines are split on `\n`; a trailing `\r` is stripped and nothing else
    /// is trimmed. Bytes that are not valid UTF-8 are replaced with
    /// `U+FFFD`, so such a line is reported as a pattern mismatch and reading
    /// continues.
    ///
    /// If reading fails, the error is yielded after the lines read so far and
    /// the stream ends.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip_all))]
    pub fn validate_lines<B>(&self, reader: B, token: CancellationToken) -> LineValidationStream
    where
        B: AsyncBufRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(self.config.channel_capacity());
        let fut = forward(read_lines(reader), tx, token);

        #[cfg(feature = "tracing")]
        let fut = {
            use tracing::Instrument;
            fut.instrument(tracing::debug_span!("validate_lines"))
        };

        tokio::spawn(fut);
        ReceiverStream::new(rx)
    }
}

impl<R> FigiService<R>
where
    R: RandSource + Send + 'static,
{
    /// Generates `n` distinct symbols in a background task, yielding each one
    /// as soon as it is produced.
    ///
    /// Uncancelled, the stream yields exactly `n` symbols. If `token` is
    /// cancelled after `k < n` symbols were sent, the stream ends after those
    /// `k`; it is truncated, not failed.
    ///
    /// # Panics
    /// Panics if called outside of a tokio runtime.
    #[cfg_attr(feature = "tracing", tracing::instrument(level = "debug", skip(self, token)))]
    pub fn generate_stream(&self, n: usize, token: CancellationToken) -> SymbolStream {
        let (tx, rx) = mpsc::channel(self.config.channel_capacity());
        let fut = feed_symbols(n, Arc::clone(&self.generator), tx, token);

        #[cfg(feature = "tracing")]
        let fut = {
            use tracing::Instrument;
            fut.instrument(tracing::debug_span!("generate_stream", count = n))
        };

        tokio::spawn(fut);
        ReceiverStream::new(rx)
    }
}
