use super::{CHECK_DIGIT_POS, SYMBOL_LEN, ValidationError, matches_pattern};

/// Value of a character in the checksum, ignoring its position.
///
/// Digits map to themselves and uppercase letters to their zero-based
/// position in the Latin alphabet plus 10 (`A = 10`, ..., `Z = 35`).
///
/// Only meaningful for bytes in `0-9` or `A-Z`. Any other byte gets an
/// arbitrary but deterministic value and never panics; run
/// [`matches_pattern`] first to reject such input.
///
/// ```
/// use openfigi::char_value;
///
/// assert_eq!(char_value(b'3'), 3);
/// assert_eq!(char_value(b'D'), 13);
/// ```
#[inline]
pub const fn char_value(c: u8) -> u32 {
    if c.is_ascii_digit() {
        (c - b'0') as u32
    } else {
        c.saturating_sub(b'A') as u32 + 10
    }
}

/// Value of a character at zero-based index `pos`.
///
/// Characters at odd positions are doubled, except for the check digit at
/// index 11 which always counts as-is.
///
/// ```
/// use openfigi::char_value_with_pos;
///
/// assert_eq!(char_value_with_pos(b'7', 5), 14);
/// assert_eq!(char_value_with_pos(b'Y', 8), 34);
/// ```
#[inline]
pub const fn char_value_with_pos(c: u8, pos: usize) -> u32 {
    let value = char_value(c);
    if pos % 2 == 0 || pos == CHECK_DIGIT_POS {
        value
    } else {
        value * 2
    }
}

/// Luhn digit sum of `bytes`: the positional value of each character with
/// two-digit values crossfooted (`14` counts as `1 + 4`).
///
/// Works on any prefix of a symbol, which is how the check digit of a fresh
/// 11-character head is derived.
pub fn digit_sum(bytes: &[u8]) -> u32 {
    bytes
        .iter()
        .enumerate()
        .map(|(pos, &c)| {
            let value = char_value_with_pos(c, pos);
            value / 10 + value % 10
        })
        .sum()
}

/// Computes the ASCII check digit completing an 11-character head so that the
/// full symbol's digit sum is a multiple of 10.
pub fn check_digit(head: &[u8; CHECK_DIGIT_POS]) -> u8 {
    let sum = digit_sum(head);
    // `(10 - sum % 10) % 10` is always a single digit.
    b'0' + ((10 - sum % 10) % 10) as u8
}

/// Validates `input` as an OpenFIGI symbol.
///
/// The structural pattern is checked first; the checksum is only computed
/// for well-formed input.
///
/// # Errors
///
/// - [`ValidationError::PatternMismatch`] if the input does not have the
///   symbol's shape.
/// - [`ValidationError::InvalidChecksum`] if the digit sum is not a multiple
///   of 10.
pub fn check(input: &str) -> Result<(), ValidationError> {
    if !matches_pattern(input) {
        return Err(ValidationError::PatternMismatch);
    }
    debug_assert_eq!(input.len(), SYMBOL_LEN);
    if digit_sum(input.as_bytes()) % 10 != 0 {
        return Err(ValidationError::InvalidChecksum);
    }
    Ok(())
}
