//! Validation and generation of [OpenFIGI](https://www.openfigi.com) symbols.
//!
//! An OpenFIGI symbol is 12 characters long: a `BBG` or `KKG` prefix, eight
//! body characters from a vowel-free alphabet, and a trailing check digit
//! computed with a positional Luhn variant.
//!
//! ```
//! use openfigi::{ValidationError, validate};
//!
//! assert!(validate("BBG00HLH6Y37").is_ok());
//! assert_eq!(validate("BBG0088JSC34"), Err(ValidationError::InvalidChecksum));
//! assert_eq!(validate("BBG00HLH6E37"), Err(ValidationError::PatternMismatch));
//! ```
//!
//! With the default `async-tokio` feature, [`FigiService`] streams validation
//! results and freshly generated symbols through bounded channels, honoring a
//! [`CancellationToken`](tokio_util::sync::CancellationToken).

mod error;
mod figi;
mod generator;
mod rand;
#[cfg(feature = "serde")]
mod serde;
#[cfg(feature = "async-tokio")]
mod service;

pub use crate::error::*;
pub use crate::figi::*;
pub use crate::generator::*;
pub use crate::rand::*;
#[cfg(feature = "async-tokio")]
pub use crate::service::*;
