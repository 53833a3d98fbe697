//! Locale-aware conversion of textual tokens to numbers.
//!
//! Each file handle owns a [NumberLocale] and threads it into every numeric
//! parse, so that handles with different locale needs can coexist without
//! touching process-wide state.

use crate::error::{NumberKind, ParseNumberError};

/// Number formatting rules attached to a file handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NumberLocale {
    decimal_separator: char,
}

impl Default for NumberLocale {
    fn default() -> Self {
        Self::point()
    }
}

impl NumberLocale {
    /// The "C" locale: `.` as the decimal separator.
    pub fn point() -> Self {
        Self {
            decimal_separator: '.',
        }
    }

    /// A locale using `,` as the decimal separator.
    pub fn comma() -> Self {
        Self {
            decimal_separator: ',',
        }
    }

    /// A locale with an arbitrary decimal separator.
    pub fn with_decimal_separator(decimal_separator: char) -> Self {
        Self { decimal_separator }
    }

    /// Parse a whole token as a float.
    ///
    /// The entire token must be consumed; trailing garbage is an error, as is
    /// a `.` under a non-point locale.
    pub fn parse_f64(&self, token: &str) -> Result<f64, ParseNumberError> {
        let token = token.trim();
        let error = || ParseNumberError {
            kind: NumberKind::Float,
            token: token.to_string(),
        };
        let normalized: String;
        let digits = if self.decimal_separator == '.' {
            token
        } else {
            if token.contains('.') {
                return Err(error());
            }
            normalized = token.replace(self.decimal_separator, ".");
            &normalized
        };
        digits.parse().map_err(|_| error())
    }

    /// Parse a whole token as an integer.
    pub fn parse_i64(&self, token: &str) -> Result<i64, ParseNumberError> {
        token.trim().parse().map_err(|_| ParseNumberError {
            kind: NumberKind::Int,
            token: token.trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_locale_parses_float() {
        let loc = NumberLocale::point();
        assert_eq!(loc.parse_f64("3.14").unwrap(), 3.14);
        assert_eq!(loc.parse_f64(" -2e3 ").unwrap(), -2e3);
    }

    #[test]
    fn comma_locale_parses_float() {
        let loc = NumberLocale::comma();
        assert_eq!(loc.parse_f64("3,14").unwrap(), 3.14);
        assert!(loc.parse_f64("3.14").is_err());
    }

    #[test]
    fn trailing_garbage_is_an_error() {
        let loc = NumberLocale::point();
        assert!(loc.parse_f64("3.14abc").is_err());
        assert!(loc.parse_i64("42x").is_err());
    }

    #[test]
    fn integer_tokens() {
        let loc = NumberLocale::default();
        assert_eq!(loc.parse_i64("42").unwrap(), 42);
        assert!(loc.parse_i64("3.5").is_err());
        assert!(loc.parse_i64("hello").is_err());
    }
}
