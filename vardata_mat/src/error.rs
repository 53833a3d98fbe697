#![allow(missing_docs)]

use std::{error::Error, fmt, io, sync::Arc};

#[derive(Debug, Clone)]
pub struct MatFileError {
    pub file_name: String,
    pub kind: MatFileErrorKind,
}

#[derive(Debug, Clone)]
pub enum MatFileErrorKind {
    OpenError(Arc<io::Error>),
    ReadError(Arc<io::Error>),
    WriteError(Arc<io::Error>),
    CorruptHeader {
        offset: u64,
    },
    UnsupportedByteOrder {
        type_code: i32,
    },
    UndefinedVariable {
        name: String,
    },
    InvalidVariableName {
        name: String,
    },
    TextMatrix {
        name: String,
    },
    NotDoublePrecision {
        name: String,
    },
    ComplexMatrix {
        name: String,
    },
    RowMismatch {
        name: String,
        requested: usize,
        rows: usize,
        cols: usize,
    },
    ColumnMismatch {
        name: String,
        requested: usize,
        rows: usize,
        cols: usize,
    },
    DataLengthMismatch {
        name: String,
        expected: usize,
        actual: usize,
    },
}

impl fmt::Display for MatFileError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use MatFileErrorKind::*;
        match &self.kind {
            OpenError(error) => {
                write!(f, "not possible to open file \"{}\": {}", self.file_name, error)
            }
            ReadError(error) => {
                write!(f, "error reading file \"{}\": {}", self.file_name, error)
            }
            WriteError(error) => {
                write!(f, "cannot write to file \"{}\": {}", self.file_name, error)
            }
            CorruptHeader { offset } => write!(
                f,
                "corrupt variable header at offset {} in file \"{}\"",
                offset, self.file_name
            ),
            UnsupportedByteOrder { type_code } => write!(
                f,
                "variable with type code {} in file \"{}\" uses an unsupported byte order",
                type_code, self.file_name
            ),
            UndefinedVariable { name } => write!(
                f,
                "variable \"{}\" not found in file \"{}\"",
                name, self.file_name
            ),
            InvalidVariableName { name } => write!(
                f,
                "\"{}\" is not a valid variable name for file \"{}\"",
                name, self.file_name
            ),
            TextMatrix { name } => write!(
                f,
                "2D array \"{}\" in file \"{}\" is a text matrix, not numeric",
                name, self.file_name
            ),
            NotDoublePrecision { name } => write!(
                f,
                "2D array \"{}\" in file \"{}\" does not have the required double precision class",
                name, self.file_name
            ),
            ComplexMatrix { name } => write!(
                f,
                "2D array \"{}\" in file \"{}\" must not be complex",
                name, self.file_name
            ),
            RowMismatch {
                name,
                requested,
                rows,
                cols,
            } => write!(
                f,
                "cannot read {} rows of matrix \"{}({},{})\" from file \"{}\"",
                requested, name, rows, cols, self.file_name
            ),
            ColumnMismatch {
                name,
                requested,
                rows,
                cols,
            } => write!(
                f,
                "cannot read {} columns of matrix \"{}({},{})\" from file \"{}\"",
                requested, name, rows, cols, self.file_name
            ),
            DataLengthMismatch {
                name,
                expected,
                actual,
            } => write!(
                f,
                "matrix \"{}\" data has {} elements, expected {}",
                name, actual, expected
            ),
        }
    }
}

impl Error for MatFileError {}
