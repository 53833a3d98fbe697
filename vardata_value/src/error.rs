#![allow(missing_docs)]

use std::{borrow::Cow, error::Error, fmt};

use crate::Value;

#[derive(Debug, Clone)]
pub struct ValueTypeError {
    pub expected: Cow<'static, str>,
    pub actual: Value,
}

impl fmt::Display for ValueTypeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "expected value of type {}, found {}",
            self.expected, self.actual
        )
    }
}

impl Error for ValueTypeError {}

/// The numeric type that a token failed to parse as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberKind {
    Float,
    Int,
}

impl fmt::Display for NumberKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberKind::Float => write!(f, "double"),
            NumberKind::Int => write!(f, "int"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ParseNumberError {
    pub kind: NumberKind,
    pub token: String,
}

impl fmt::Display for ParseNumberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "cannot read {} value \"{}\"", self.kind, self.token)
    }
}

impl Error for ParseNumberError {}
