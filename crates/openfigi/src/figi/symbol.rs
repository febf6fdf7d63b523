use super::{
    BODY_LEN, CHECK_DIGIT_POS, PREFIX_LEN, Prefix, SYMBOL_LEN, ValidationError, check,
    check_digit,
};
use core::{fmt, str::FromStr};

/// A validated OpenFIGI symbol.
///
/// A `Symbol` can only be obtained from input that passed [`validate`] or from
/// a generator, so every value matches the structural pattern and carries a
/// correct check digit. It is stored inline as 12 ASCII bytes and is `Copy`.
///
/// ```
/// use openfigi::{Prefix, Symbol};
///
/// let symbol: Symbol = "BBG00HLH6Y37".parse().unwrap();
/// assert_eq!(symbol.prefix(), Prefix::Bbg);
/// assert_eq!(symbol.body(), "00HLH6Y3");
/// assert_eq!(symbol.check_digit(), 7);
/// assert_eq!(symbol.to_string(), "BBG00HLH6Y37");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol([u8; SYMBOL_LEN]);

impl Symbol {
    /// Builds a symbol from a prefix and body, appending the check digit.
    ///
    /// Returns `None` if any body byte is outside
    /// [`ALPHABET`](crate::ALPHABET).
    pub fn from_parts(prefix: Prefix, body: &[u8; BODY_LEN]) -> Option<Self> {
        if !body.iter().all(|&b| super::is_body_char(b)) {
            return None;
        }
        Some(Self::from_parts_unchecked(prefix, body))
    }

    /// Same as [`Self::from_parts`] for a body already drawn from the
    /// alphabet.
    pub(crate) fn from_parts_unchecked(prefix: Prefix, body: &[u8; BODY_LEN]) -> Self {
        let mut head = [0_u8; CHECK_DIGIT_POS];
        head[..PREFIX_LEN].copy_from_slice(prefix.as_bytes());
        head[PREFIX_LEN..].copy_from_slice(body);

        let mut buf = [0_u8; SYMBOL_LEN];
        buf[..CHECK_DIGIT_POS].copy_from_slice(&head);
        buf[CHECK_DIGIT_POS] = check_digit(&head);
        Self(buf)
    }

    /// Returns the symbol as a string slice.
    pub fn as_str(&self) -> &str {
        // Every byte is ASCII, guaranteed by construction.
        core::str::from_utf8(&self.0).unwrap_or_default()
    }

    /// Returns the raw ASCII bytes.
    pub const fn as_bytes(&self) -> &[u8; SYMBOL_LEN] {
        &self.0
    }

    /// The issuer prefix.
    pub fn prefix(&self) -> Prefix {
        match &self.0[..PREFIX_LEN] {
            b"KKG" => Prefix::Kkg,
            _ => Prefix::Bbg,
        }
    }

    /// The eight characters between the prefix and the check digit.
    pub fn body(&self) -> &str {
        &self.as_str()[PREFIX_LEN..CHECK_DIGIT_POS]
    }

    /// The numeric value of the trailing check digit.
    pub const fn check_digit(&self) -> u8 {
        self.0[CHECK_DIGIT_POS] - b'0'
    }
}

/// Validates `input` and returns the parsed [`Symbol`].
///
/// # Errors
///
/// Returns [`ValidationError::PatternMismatch`] for malformed input and
/// [`ValidationError::InvalidChecksum`] when the check digit does not match.
pub fn validate(input: &str) -> Result<Symbol, ValidationError> {
    check(input)?;
    let mut buf = [0_u8; SYMBOL_LEN];
    buf.copy_from_slice(input.as_bytes());
    Ok(Symbol(buf))
}

impl FromStr for Symbol {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validate(s)
    }
}

impl TryFrom<&str> for Symbol {
    type Error = ValidationError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        validate(s)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl From<Symbol> for String {
    fn from(symbol: Symbol) -> Self {
        symbol.as_str().to_owned()
    }
}

impl PartialEq<str> for Symbol {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl PartialEq<&str> for Symbol {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Symbol").field(&self.as_str()).finish()
    }
}
