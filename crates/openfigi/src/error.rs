use core::fmt;

/// A result type whose error defaults to the crate-wide [`Error`].
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors raised while generating symbols.
///
/// Validation never produces this type; it reports through
/// [`ValidationError`](crate::ValidationError). When the `parking-lot` feature
/// is enabled the random source is guarded by a non-poisoning mutex and
/// generation is effectively infallible. The `Error::Infallible` variant only
/// exists to satisfy the `Result<T, Error>` API in that configuration.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[non_exhaustive]
pub enum Error {
    /// The random source lock was **poisoned** by a thread that panicked
    /// while holding it.
    #[cfg(not(feature = "parking-lot"))]
    LockPoisoned,

    /// Placeholder variant for builds where generation cannot fail.
    #[cfg(feature = "parking-lot")]
    Infallible,
}

impl fmt::Display for Error {
    fn fmt(&self, fmt: &mut fmt::Formatter) -> fmt::Result {
        write!(fmt, "{self:?}")
    }
}

impl core::error::Error for Error {}

#[cfg(not(feature = "parking-lot"))]
use crate::generator::{MutexGuard, PoisonError};
#[cfg(not(feature = "parking-lot"))]
impl<T> From<PoisonError<MutexGuard<'_, T>>> for Error {
    fn from(_: PoisonError<MutexGuard<'_, T>>) -> Self {
        Self::LockPoisoned
    }
}
