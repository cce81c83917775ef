//! Input validation for INN (tax identification number)
//!
//! Provides a validated INN type with a private field to force validation
//! through the public API.

use std::fmt;

/// Validation errors for account fields
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid length for {field}: expected {min}-{max} digits, got {actual}")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
        actual: usize,
    },

    #[error("Invalid format for {field}: '{value}' (expected: {expected})")]
    InvalidFormat {
        field: &'static str,
        value: String,
        expected: &'static str,
    },
}

/// Validated INN (guaranteed 10-12 ASCII digits)
///
/// Fields are private to force validation through `new()`.
///
/// # Examples
/// ```
/// use inn_transfer::account::validation::Inn;
///
/// let inn = Inn::new("1234567890").unwrap();
/// assert_eq!(inn.as_str(), "1234567890");
///
/// let err = Inn::new("12345");
/// assert!(err.is_err()); // too short
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Inn(String);

impl Inn {
    /// Create a new validated Inn
    ///
    /// # Validation Rules
    /// - Length: 10-12 characters
    /// - ASCII digits only (regex: ^[1-9]\d{9,11}$)
    /// - No leading zero: the canonical INN form is its integer value, and
    ///   transfer requests resolve recipients through that form
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        let value = value.trim();

        if value.len() < 10 || value.len() > 12 {
            return Err(ValidationError::InvalidLength {
                field: "inn",
                min: 10,
                max: 12,
                actual: value.len(),
            });
        }

        if !value.chars().all(|c| c.is_ascii_digit()) {
            return Err(ValidationError::InvalidFormat {
                field: "inn",
                value: value.to_string(),
                expected: "digits only",
            });
        }

        if value.starts_with('0') {
            return Err(ValidationError::InvalidFormat {
                field: "inn",
                value: value.to_string(),
                expected: "no leading zero",
            });
        }

        Ok(Self(value.to_string()))
    }

    /// Get the validated INN as &str
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Inn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Inn {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inn_valid_lengths() {
        assert!(Inn::new("1234567890").is_ok()); // 10 digits
        assert!(Inn::new("12345678901").is_ok()); // 11 digits
        assert!(Inn::new("123456789012").is_ok()); // 12 digits
    }

    #[test]
    fn test_inn_invalid_length() {
        let err = Inn::new("123456789").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidLength {
                field: "inn",
                min: 10,
                max: 12,
                actual: 9
            }
        );
        assert!(Inn::new("1234567890123").is_err()); // 13 digits
        assert!(Inn::new("").is_err());
    }

    #[test]
    fn test_inn_non_digit_rejected() {
        assert!(Inn::new("12345abc90").is_err());
        assert!(Inn::new("123456789 0").is_err());
        assert!(Inn::new("-123456789").is_err());
    }

    #[test]
    fn test_inn_leading_zero_rejected() {
        // "0123456789" would canonicalize to 9 digits in a transfer request
        // and could never be resolved as a recipient
        let err = Inn::new("0123456789").unwrap_err();
        assert_eq!(
            err,
            ValidationError::InvalidFormat {
                field: "inn",
                value: "0123456789".to_string(),
                expected: "no leading zero",
            }
        );
        assert!(Inn::new("012345678901").is_err());
    }

    #[test]
    fn test_inn_trims_whitespace() {
        let inn = Inn::new("  1234567890  ").unwrap();
        assert_eq!(inn.as_str(), "1234567890");
    }
}
