use core::fmt;

/// Every character allowed in the body of a symbol: the ten digits and the
/// uppercase letters except the vowels `A`, `E`, `I`, `O` and `U`.
///
/// `Y` is part of the alphabet.
pub const ALPHABET: &[u8; 31] = b"0123456789BCDFGHJKLMNPQRSTVWXYZ";

/// Total length of a symbol.
pub const SYMBOL_LEN: usize = 12;
/// Length of the prefix (`BBG` or `KKG`).
pub const PREFIX_LEN: usize = 3;
/// Length of the body between the prefix and the check digit.
pub const BODY_LEN: usize = 8;
/// Index of the trailing check digit.
pub const CHECK_DIGIT_POS: usize = SYMBOL_LEN - 1;

/// Membership table for [`ALPHABET`], indexed by byte.
const IN_ALPHABET: [bool; 256] = {
    let mut lut = [false; 256];
    let mut i = 0;
    while i < ALPHABET.len() {
        lut[ALPHABET[i] as usize] = true;
        i += 1;
    }
    lut
};

/// Returns `true` if `byte` may appear in a symbol body.
#[inline]
pub const fn is_body_char(byte: u8) -> bool {
    IN_ALPHABET[byte as usize]
}

/// The two issuer prefixes a symbol may start with.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Prefix {
    /// `BBG`
    Bbg,
    /// `KKG`
    Kkg,
}

impl Prefix {
    /// Both prefixes, in the order the generator draws from.
    pub const ALL: [Self; 2] = [Self::Bbg, Self::Kkg];

    /// Returns the three-letter prefix as a string.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bbg => "BBG",
            Self::Kkg => "KKG",
        }
    }

    pub(crate) const fn as_bytes(self) -> &'static [u8; PREFIX_LEN] {
        match self {
            Self::Bbg => b"BBG",
            Self::Kkg => b"KKG",
        }
    }

    /// Matches the first three bytes of `bytes` against the known prefixes.
    pub fn from_bytes(bytes: &[u8]) -> Option<Self> {
        match bytes.get(..PREFIX_LEN)? {
            b"BBG" => Some(Self::Bbg),
            b"KKG" => Some(Self::Kkg),
            _ => None,
        }
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Checks the structural grammar `^(BBG|KKG)[ALPHABET]{8}[0-9]$`.
///
/// Matching is exact and case-sensitive; no whitespace is trimmed.
pub fn matches_pattern(input: &str) -> bool {
    let bytes = input.as_bytes();
    bytes.len() == SYMBOL_LEN
        && Prefix::from_bytes(bytes).is_some()
        && bytes[PREFIX_LEN..CHECK_DIGIT_POS]
            .iter()
            .all(|&b| is_body_char(b))
        && bytes[CHECK_DIGIT_POS].is_ascii_digit()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn alphabet_excludes_only_vowels() {
        for c in b'A'..=b'Z' {
            let vowel = matches!(c, b'A' | b'E' | b'I' | b'O' | b'U');
            assert_eq!(is_body_char(c), !vowel, "letter {}", c as char);
        }
        assert!(is_body_char(b'Y'));
        assert!((b'0'..=b'9').all(is_body_char));
        assert_eq!(ALPHABET.len(), 31);
    }

    #[test]
    fn lowercase_and_symbols_are_rejected() {
        for c in [b'b', b'y', b' ', b'-', b'\n', 0xC3] {
            assert!(!is_body_char(c));
        }
    }

    #[test]
    fn prefix_from_bytes() {
        assert_eq!(Prefix::from_bytes(b"BBG00"), Some(Prefix::Bbg));
        assert_eq!(Prefix::from_bytes(b"KKG"), Some(Prefix::Kkg));
        assert_eq!(Prefix::from_bytes(b"BKG"), None);
        assert_eq!(Prefix::from_bytes(b"BB"), None);
        assert_eq!(Prefix::Kkg.to_string(), "KKG");
    }

    #[test]
    fn pattern_checks_every_slot() {
        assert!(matches_pattern("BBG00HLH6Y37"));
        assert!(matches_pattern("KKG012C5GMZ0"));
        // Bad prefix, vowel, short, long, letter check digit, lowercase.
        assert!(!matches_pattern("BKG00HLH6Y37"));
        assert!(!matches_pattern("BBG00HLH6E37"));
        assert!(!matches_pattern("BBG0HLH6Y37"));
        assert!(!matches_pattern("BBG00HLH6Y377"));
        assert!(!matches_pattern("BBG00HLH6Y3H"));
        assert!(!matches_pattern("bbg00hlh6y37"));
        assert!(!matches_pattern(" BBG00HLH6Y37"));
        assert!(!matches_pattern(""));
    }

    #[test]
    fn multibyte_input_never_matches() {
        // 12 bytes, but not ASCII.
        assert!(!matches_pattern("BBG00HLH6Ü3"));
        assert!(!matches_pattern("ÀÀÀÀÀÀ"));
    }
}
