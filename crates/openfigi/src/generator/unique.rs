use crate::{RandSource, Result, Symbol, SymbolGenerator};
use std::collections::HashSet;

/// Upper bound on the set capacity reserved up front; larger requests grow
/// the set as symbols are accepted.
const MAX_PREALLOCATED: usize = 1 << 16;

/// Tracks the symbols already handed out during one generation call.
///
/// Each call to [`UniqueSymbols::try_next`] draws candidates from a
/// [`SymbolGenerator`] until one that has not been seen before comes up. The
/// set is owned by a single call, so it needs no synchronization.
#[derive(Debug, Default)]
pub struct UniqueSymbols {
    seen: HashSet<Symbol>,
}

impl UniqueSymbols {
    /// Creates an empty tracker sized for roughly `n` symbols.
    pub fn with_capacity(n: usize) -> Self {
        Self {
            seen: HashSet::with_capacity(n.min(MAX_PREALLOCATED)),
        }
    }

    /// Number of distinct symbols accepted so far.
    pub fn len(&self) -> usize {
        self.seen.len()
    }

    /// Returns `true` if nothing was accepted yet.
    pub fn is_empty(&self) -> bool {
        self.seen.is_empty()
    }

    /// Draws until a symbol not seen before is found, records it and returns
    /// it.
    ///
    /// # Errors
    /// - Returns an error if the generator's lock has been poisoned.
    pub fn try_next<R>(&mut self, generator: &SymbolGenerator<R>) -> Result<Symbol>
    where
        R: RandSource,
    {
        loop {
            let candidate = generator.try_next_symbol()?;
            if self.seen.insert(candidate) {
                return Ok(candidate);
            }
            #[cfg(feature = "tracing")]
            tracing::trace!(%candidate, "discarding duplicate symbol");
        }
    }
}
