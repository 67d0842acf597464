//! Shift values and their validation.
//!
//! The cipher accepts any `i64` as a shift and reduces it modulo 26. Shift
//! values coming from untrusted sources (command-line text, prompt input)
//! are wrapped in a [`ShiftInput`] so that validation can pattern-match on
//! what kind of value was supplied before attempting a numeric parse.

use super::errors::{Error, Result};
use std::fmt;

/// Number of letters in the Latin alphabet the cipher rotates over.
pub const ALPHABET_SIZE: u8 = 26;

/// Reduce any integer shift into the canonical range `0..=25`.
///
/// Negative shifts rotate backwards, so `-3` and `23` are the same key.
///
/// ```
/// use caesar::normalize_shift;
///
/// assert_eq!(normalize_shift(-3), 23);
/// assert_eq!(normalize_shift(29), 3);
/// ```
#[must_use]
pub fn normalize_shift(shift: i64) -> u8 {
    // rem_euclid is always in 0..26, so the narrowing cast is lossless.
    shift.rem_euclid(i64::from(ALPHABET_SIZE)) as u8
}

/// A shift value as received from the outside world, before validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ShiftInput {
    /// An integer-typed value.
    Integer(i64),
    /// Free text such as a command-line argument or a prompt answer.
    Text(String),
    /// A floating-point value.
    Float(f64),
    /// No value was supplied.
    Missing,
    /// Any other kind of value, described for error messages.
    Other(String),
}

impl ShiftInput {
    /// Interpret the input as an integer shift, if that is lossless.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            Self::Text(text) => text.trim().parse::<i64>().ok(),
            Self::Float(value) => float_to_integer(*value),
            Self::Missing | Self::Other(_) => None,
        }
    }
}

// i64::MAX as f64 rounds up to 2^63, which is out of range, hence the strict bound.
fn float_to_integer(value: f64) -> Option<i64> {
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    if value.is_finite() && value.fract() == 0.0 && in_range {
        Some(value as i64)
    } else {
        None
    }
}

impl fmt::Display for ShiftInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{}", value),
            Self::Text(text) => write!(f, "{}", text),
            Self::Float(value) => write!(f, "{}", value),
            Self::Missing => write!(f, "<missing>"),
            Self::Other(description) => write!(f, "{}", description),
        }
    }
}

impl From<i64> for ShiftInput {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<i32> for ShiftInput {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<f64> for ShiftInput {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for ShiftInput {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for ShiftInput {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&ShiftInput> for ShiftInput {
    fn from(value: &ShiftInput) -> Self {
        value.clone()
    }
}

impl<T: Into<ShiftInput>> From<Option<T>> for ShiftInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Missing, Into::into)
    }
}

/// Parse a shift from untrusted input.
///
/// Accepts integers, text that parses cleanly as an integer after trimming
/// surrounding whitespace (`"3"`, `"-5"`, `"+7"`) and floats without a
/// fractional part. Everything else is an [`Error::InvalidShift`].
pub fn parse_shift(value: impl Into<ShiftInput>) -> Result<i64> {
    let input = value.into();
    input
        .as_integer()
        .ok_or_else(|| Error::invalid_shift(input.to_string()))
}

/// Returns `true` if `value` can be losslessly interpreted as an integer shift.
///
/// Never panics; unparseable input simply yields `false`.
///
/// ```
/// use caesar::is_valid_shift;
///
/// assert!(is_valid_shift("5"));
/// assert!(!is_valid_shift("abc"));
/// assert!(!is_valid_shift(3.5));
/// ```
#[must_use]
pub fn is_valid_shift(value: impl Into<ShiftInput>) -> bool {
    parse_shift(value).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_shift_examples() {
        assert_eq!(normalize_shift(-3), 23);
        assert_eq!(normalize_shift(29), 3);
        assert_eq!(normalize_shift(0), 0);
        assert_eq!(normalize_shift(26), 0);
        assert_eq!(normalize_shift(25), 25);
        assert_eq!(normalize_shift(-26), 0);
    }

    #[test]
    fn test_normalize_shift_extremes() {
        assert!(normalize_shift(i64::MIN) < ALPHABET_SIZE);
        assert!(normalize_shift(i64::MAX) < ALPHABET_SIZE);
        // i64::MIN + i64::MAX == -1
        let sum = (u32::from(normalize_shift(i64::MIN)) + u32::from(normalize_shift(i64::MAX)))
            % u32::from(ALPHABET_SIZE);
        assert_eq!(sum, u32::from(normalize_shift(-1)));
    }

    #[test]
    fn test_valid_integer_inputs() {
        assert!(is_valid_shift(5));
        assert!(is_valid_shift(-3));
        assert!(is_valid_shift(i64::MAX));
    }

    #[test]
    fn test_valid_text_inputs() {
        assert!(is_valid_shift("5"));
        assert!(is_valid_shift("10"));
        assert!(is_valid_shift("-5"));
        assert!(is_valid_shift("+7"));
        assert!(is_valid_shift(" 12 "));
    }

    #[test]
    fn test_invalid_text_inputs() {
        assert!(!is_valid_shift("abc"));
        assert!(!is_valid_shift(""));
        assert!(!is_valid_shift("   "));
        assert!(!is_valid_shift("3.5"));
        assert!(!is_valid_shift("1 2"));
        assert!(!is_valid_shift("99999999999999999999"));
    }

    #[test]
    fn test_float_inputs() {
        assert!(!is_valid_shift(3.5));
        assert!(is_valid_shift(3.0));
        assert!(is_valid_shift(-4.0));
        assert!(!is_valid_shift(f64::NAN));
        assert!(!is_valid_shift(f64::INFINITY));
        assert!(!is_valid_shift(1e300));
    }

    #[test]
    fn test_missing_and_other_inputs() {
        assert!(!is_valid_shift(ShiftInput::Missing));
        assert!(!is_valid_shift(None::<i64>));
        assert!(!is_valid_shift(ShiftInput::Other("[1, 2, 3]".into())));
        assert!(is_valid_shift(Some("4")));
    }

    #[test]
    fn test_parse_shift_values() {
        assert_eq!(parse_shift("-5").unwrap(), -5);
        assert_eq!(parse_shift(" 8\n").unwrap(), 8);
        assert_eq!(parse_shift(2.0).unwrap(), 2);
        assert_eq!(parse_shift(&ShiftInput::Integer(42)).unwrap(), 42);
    }

    #[test]
    fn test_parse_shift_error_names_input() {
        let err = parse_shift("abc").unwrap_err();
        assert_eq!(err.to_string(), "Invalid shift value: abc");

        let err = parse_shift(ShiftInput::Missing).unwrap_err();
        assert_eq!(err.to_string(), "Invalid shift value: <missing>");
    }
}
