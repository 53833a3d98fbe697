//! Dynamically typed scalar value read from a data file.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ValueTypeError;

/// A dynamically typed scalar value.
///
/// Scalar readers that don't know the expected type up front return a `Value`
/// and let the caller coerce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    /// A float value, regardless of how it was written in the source file.
    Float(f64),
    /// An integer value.
    Int(i64),
    /// A string value.
    Str(String),
}

impl Value {
    /// Convert the value to a float, panicking if it is not numeric.
    #[track_caller]
    pub fn as_f64(&self) -> f64 {
        match self.try_as_f64() {
            Ok(x) => x,
            Err(error) => panic!("{}", error),
        }
    }

    /// Convert the value to a float.
    ///
    /// Integer values are widened to f64.
    pub fn try_as_f64(&self) -> Result<f64, ValueTypeError> {
        match *self {
            Value::Float(x) => Ok(x),
            Value::Int(n) => Ok(n as f64),
            _ => Err(ValueTypeError {
                expected: "float".into(),
                actual: self.clone(),
            }),
        }
    }

    /// Convert the value to an integer, panicking if it is not an integer.
    #[track_caller]
    pub fn as_i64(&self) -> i64 {
        match self.try_as_i64() {
            Ok(n) => n,
            Err(error) => panic!("{}", error),
        }
    }

    /// Convert the value to an integer.
    pub fn try_as_i64(&self) -> Result<i64, ValueTypeError> {
        if let Value::Int(n) = *self {
            Ok(n)
        } else {
            Err(ValueTypeError {
                expected: "int".into(),
                actual: self.clone(),
            })
        }
    }

    /// Convert the value to a string slice, panicking if it is not a string.
    #[track_caller]
    pub fn as_str(&self) -> &str {
        match self.try_as_str() {
            Ok(s) => s,
            Err(error) => panic!("{}", error),
        }
    }

    /// Convert the value to a string slice.
    pub fn try_as_str(&self) -> Result<&str, ValueTypeError> {
        if let Value::Str(s) = self {
            Ok(s)
        } else {
            Err(ValueTypeError {
                expected: "string".into(),
                actual: self.clone(),
            })
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Float(x) => write!(f, "{}", x),
            Value::Int(n) => write!(f, "{}", n),
            Value::Str(s) => write!(f, "{}", s),
        }
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_widens_to_float() {
        assert_eq!(Value::Int(3).try_as_f64().unwrap(), 3.0);
    }

    #[test]
    fn string_is_not_numeric() {
        assert!(Value::Str("hello".to_string()).try_as_f64().is_err());
        assert!(Value::Str("7".to_string()).try_as_i64().is_err());
    }

    #[test]
    fn float_is_not_int() {
        assert!(Value::Float(3.5).try_as_i64().is_err());
    }
}
