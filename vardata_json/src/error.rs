#![allow(missing_docs)]

use std::{error::Error, fmt, io, sync::Arc};

use vardata_value::ParseNumberError;

#[derive(Debug, Clone)]
pub struct JsonFileError {
    pub file_name: String,
    pub kind: JsonFileErrorKind,
}

#[derive(Debug, Clone)]
pub enum JsonFileErrorKind {
    ReadError(Arc<io::Error>),
    ParseError {
        line: usize,
        column: usize,
        message: String,
    },
    NumberFormat {
        path: String,
        error: ParseNumberError,
    },
    WrongType {
        path: String,
        expected: &'static str,
        found: String,
    },
}

impl JsonFileError {
    pub(crate) fn read(file_name: &str, error: io::Error) -> Self {
        Self {
            file_name: file_name.to_string(),
            kind: JsonFileErrorKind::ReadError(Arc::new(error)),
        }
    }

    pub(crate) fn parse(file_name: &str, error: &serde_json::Error) -> Self {
        Self {
            file_name: file_name.to_string(),
            kind: JsonFileErrorKind::ParseError {
                line: error.line(),
                column: error.column(),
                message: error.to_string(),
            },
        }
    }
}

impl fmt::Display for JsonFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            JsonFileErrorKind::ReadError(error) => {
                write!(f, "cannot read \"{}\": {}", self.file_name, error)
            }
            JsonFileErrorKind::ParseError { message, .. } => {
                write!(f, "cannot parse file \"{}\": {}", self.file_name, message)
            }
            JsonFileErrorKind::NumberFormat { path, error } => {
                write!(f, "{} at \"{}\" in file \"{}\"", error, path, self.file_name)
            }
            JsonFileErrorKind::WrongType {
                path,
                expected,
                found,
            } => write!(
                f,
                "cannot read element \"{}\" from file \"{}\": expected {}, found {}",
                path, self.file_name, expected, found
            ),
        }
    }
}

impl Error for JsonFileError {}
