use thiserror::Error;

/// Why an input failed validation.
///
/// The `Display` output of each variant is the reason string reported to
/// users: `pattern mismatch` or `invalid checksum`.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationError {
    /// The input does not match `^(BBG|KKG)[ALPHABET]{8}[0-9]$`.
    #[error("pattern mismatch")]
    PatternMismatch,

    /// The input is well-formed but its digit sum is not a multiple of 10.
    #[error("invalid checksum")]
    InvalidChecksum,
}
