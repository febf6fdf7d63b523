use super::{Symbol, ValidationError, validate};

/// The outcome of validating one raw input string.
///
/// Produced once per input line by the streaming validator and handed to the
/// consumer by value.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationResult {
    /// The examined input, exactly as received.
    pub input: String,
    /// The parsed symbol, or why the input was rejected.
    pub outcome: Result<Symbol, ValidationError>,
}

impl ValidationResult {
    /// Validates `input` and pairs it with the outcome.
    pub fn new(input: String) -> Self {
        let outcome = validate(&input);
        Self { input, outcome }
    }

    /// Returns `true` if the input is a valid symbol.
    pub fn is_valid(&self) -> bool {
        self.outcome.is_ok()
    }

    /// Human-readable outcome: `valid`, `pattern mismatch` or
    /// `invalid checksum`.
    pub fn message(&self) -> &'static str {
        match self.outcome {
            Ok(_) => "valid",
            Err(ValidationError::PatternMismatch) => "pattern mismatch",
            Err(ValidationError::InvalidChecksum) => "invalid checksum",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_outcomes() {
        let valid = ValidationResult::new("KKG012C5GMZ5".to_owned());
        assert!(valid.is_valid());
        assert_eq!(valid.message(), "valid");

        let pattern = ValidationResult::new("BKG00HLH6Y37".to_owned());
        assert!(!pattern.is_valid());
        assert_eq!(pattern.message(), "pattern mismatch");
        assert_eq!(pattern.input, "BKG00HLH6Y37");

        let checksum = ValidationResult::new("BBG0088JSC34".to_owned());
        assert_eq!(checksum.outcome, Err(ValidationError::InvalidChecksum));
        assert_eq!(checksum.message(), "invalid checksum");
    }

    #[test]
    fn message_agrees_with_error_display() {
        for input in ["BKG00HLH6Y37", "BBG0088JSC34"] {
            let result = ValidationResult::new(input.to_owned());
            let err = result.outcome.unwrap_err();
            assert_eq!(result.message(), err.to_string());
        }
    }
}
