use crate::{
    ALPHABET, BODY_LEN, Mutex, Prefix, RandSource, Result, Symbol, ThreadRandom, UniqueSymbols,
};
#[cfg(feature = "tracing")]
use tracing::instrument;

/// A random OpenFIGI symbol generator suitable for multi-threaded
/// environments.
///
/// The random source is the only mutable state and lives behind a
/// [`Mutex`]. Each candidate symbol (prefix and the eight body characters) is
/// drawn under a single acquisition of that lock, so concurrent callers never
/// interleave inside a draw.
///
/// The generator itself does not remember what it produced; uniqueness within
/// a batch is tracked by [`UniqueSymbols`].
///
/// ## Recommended When
///
/// - Several tasks share one generator (wrap it in an `Arc`)
/// - You need a reproducible stream of symbols (use [`SeededRandom`])
///
/// [`SeededRandom`]: crate::SeededRandom
pub struct SymbolGenerator<R = ThreadRandom>
where
    R: RandSource,
{
    rng: Mutex<R>,
}

impl<R> SymbolGenerator<R>
where
    R: RandSource,
{
    /// Creates a new [`SymbolGenerator`] drawing from `rng`.
    ///
    /// # Example
    /// ```
    /// use openfigi::{SymbolGenerator, ThreadRandom, validate};
    ///
    /// let generator = SymbolGenerator::new(ThreadRandom);
    /// let symbol = generator.next_symbol();
    /// assert!(validate(symbol.as_str()).is_ok());
    /// ```
    pub fn new(rng: R) -> Self {
        Self {
            rng: Mutex::new(rng),
        }
    }

    /// Synthesizes one random, checksum-correct symbol.
    ///
    /// # Panics
    /// Panics if the lock is poisoned. For explicitly fallible behavior, use
    /// [`Self::try_next_symbol`] instead.
    pub fn next_symbol(&self) -> Symbol {
        self.try_next_symbol()
            .unwrap_or_else(|e| panic!("symbol generation failed: {e}"))
    }

    /// Synthesizes one random, checksum-correct symbol.
    ///
    /// The prefix is drawn uniformly from `BBG`/`KKG`, each body character
    /// uniformly from [`ALPHABET`], and the check digit is computed from the
    /// resulting 11 characters.
    ///
    /// # Errors
    /// - Returns an error if the underlying lock has been poisoned.
    #[cfg_attr(feature = "tracing", instrument(level = "trace", skip(self)))]
    pub fn try_next_symbol(&self) -> Result<Symbol> {
        let mut body = [0_u8; BODY_LEN];

        #[cfg(feature = "parking-lot")]
        let mut rng = self.rng.lock();
        #[cfg(not(feature = "parking-lot"))]
        let mut rng = self.rng.lock()?;

        let prefix = Prefix::ALL[rng.rand_index(Prefix::ALL.len())];
        for slot in &mut body {
            *slot = ALPHABET[rng.rand_index(ALPHABET.len())];
        }
        drop(rng);

        Ok(Symbol::from_parts_unchecked(prefix, &body))
    }

    /// Generates exactly `n` pairwise distinct symbols.
    ///
    /// # Panics
    /// Panics if the lock is poisoned. For explicitly fallible behavior, use
    /// [`Self::try_generate`] instead.
    pub fn generate(&self, n: usize) -> Vec<Symbol> {
        self.try_generate(n)
            .unwrap_or_else(|e| panic!("symbol generation failed: {e}"))
    }

    /// Generates exactly `n` pairwise distinct symbols, in the order they
    /// were accepted.
    ///
    /// Duplicate candidates are discarded and redrawn without a retry limit.
    /// Requests approaching the size of the symbol space (`2 * 31^8`) slow
    /// down sharply but never fail.
    ///
    /// # Errors
    /// - Returns an error if the underlying lock has been poisoned.
    #[cfg_attr(feature = "tracing", instrument(level = "debug", skip(self)))]
    pub fn try_generate(&self, n: usize) -> Result<Vec<Symbol>> {
        let mut unique = UniqueSymbols::with_capacity(n);
        let mut symbols = Vec::with_capacity(n);
        while symbols.len() < n {
            symbols.push(unique.try_next(self)?);
        }
        Ok(symbols)
    }
}

impl Default for SymbolGenerator<ThreadRandom> {
    fn default() -> Self {
        Self::new(ThreadRandom)
    }
}
