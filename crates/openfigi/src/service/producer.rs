use crate::{RandSource, Symbol, SymbolGenerator, UniqueSymbols, ValidationResult};
use core::pin::pin;
use futures::{Stream, StreamExt, stream};
use std::{io, sync::Arc};
use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt},
    sync::mpsc,
};
use tokio_util::sync::CancellationToken;

/// Forwards every item of `items` to `tx`, in order.
///
/// The validation streams map their input to results lazily, so the actual
/// checking happens here, inside the spawned task.
///
/// # Behavior
///
/// - Stops as soon as `token` is cancelled, whether it is waiting for the
///   next item or for room in the channel. Items already in the channel
///   stay there for the consumer.
/// - Exits early if the consumer dropped its end of the channel.
/// - Dropping `tx` on return closes the stream.
pub(crate) async fn forward<S, T>(items: S, tx: mpsc::Sender<T>, token: CancellationToken)
where
    S: Stream<Item = T>,
{
    let mut items = pin!(items);
    #[cfg(feature = "tracing")]
    let mut forwarded = 0_usize;

    loop {
        let item = tokio::select! {
            biased;
            () = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(forwarded, "validation cancelled while reading");
                return;
            }
            item = items.next() => item,
        };

        let Some(item) = item else {
            break;
        };

        tokio::select! {
            biased;
            () = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(forwarded, "validation cancelled while sending");
                return;
            }
            sent = tx.send(item) => {
                if sent.is_err() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(forwarded, "validation consumer went away");
                    return;
                }
            }
        }

        #[cfg(feature = "tracing")]
        {
            forwarded += 1;
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(forwarded, "validation input exhausted");
}

/// Reads `reader` as `\n`-separated lines and validates each one.
///
/// A trailing `\r` is stripped and invalid UTF-8 is replaced, so a garbled
/// line still yields a result (a pattern mismatch) and later lines are
/// unaffected. A read error is yielded once and ends the stream.
pub(crate) fn read_lines<B>(reader: B) -> impl Stream<Item = io::Result<ValidationResult>>
where
    B: AsyncBufRead + Unpin,
{
    stream::unfold(Some(reader.split(b'\n')), |segments| async move {
        let Some(mut segments) = segments else {
            return None;
        };
        match segments.next_segment().await {
            Ok(Some(bytes)) => Some((Ok(ValidationResult::new(decode_line(bytes))), Some(segments))),
            Ok(None) => None,
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("stopped reading input: {e}");
                Some((Err(e), None))
            }
        }
    })
}

fn decode_line(mut bytes: Vec<u8>) -> String {
    if bytes.last() == Some(&b'\r') {
        bytes.pop();
    }
    match String::from_utf8(bytes) {
        Ok(line) => line,
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Generates `count` distinct symbols with `generator` and forwards each one
/// to `tx` as soon as it is accepted.
///
/// # Behavior
///
/// - Checks `token` before every candidate and while waiting for room in the
///   channel. After cancellation nothing else is sent, so the consumer sees a
///   clean prefix of the full sequence.
/// - Exits early if the consumer dropped its end of the channel.
/// - Ends the stream if the generator lock is poisoned.
pub(crate) async fn feed_symbols<R>(
    count: usize,
    generator: Arc<SymbolGenerator<R>>,
    tx: mpsc::Sender<Symbol>,
    token: CancellationToken,
) where
    R: RandSource,
{
    let mut unique = UniqueSymbols::with_capacity(count);

    while unique.len() < count {
        if token.is_cancelled() {
            #[cfg(feature = "tracing")]
            tracing::debug!(generated = unique.len(), "generation cancelled");
            return;
        }

        let symbol = match unique.try_next(&generator) {
            Ok(symbol) => symbol,
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("symbol generation failed: {_e}");
                return;
            }
        };

        tokio::select! {
            biased;
            () = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::debug!(generated = unique.len() - 1, "generation cancelled while sending");
                return;
            }
            sent = tx.send(symbol) => {
                if sent.is_err() {
                    #[cfg(feature = "tracing")]
                    tracing::debug!(generated = unique.len() - 1, "generation consumer went away");
                    return;
                }
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(generated = count, "generation complete");
}
