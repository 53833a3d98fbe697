#![allow(missing_docs)]

use std::{error, fmt};

use vardata_json::JsonFileError;
use vardata_mat::MatFileError;
use vardata_value::ValueTypeError;

#[derive(Debug, Clone)]
pub enum Error {
    JsonFileError(JsonFileError),
    MatFileError(MatFileError),
    ValueTypeError(ValueTypeError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::JsonFileError(error) => write!(f, "{}", error),
            Error::MatFileError(error) => write!(f, "{}", error),
            Error::ValueTypeError(error) => write!(f, "{}", error),
        }
    }
}

impl error::Error for Error {}

impl From<JsonFileError> for Error {
    fn from(v: JsonFileError) -> Self {
        Self::JsonFileError(v)
    }
}

impl From<MatFileError> for Error {
    fn from(v: MatFileError) -> Self {
        Self::MatFileError(v)
    }
}

impl From<ValueTypeError> for Error {
    fn from(v: ValueTypeError) -> Self {
        Self::ValueTypeError(v)
    }
}
