#![allow(missing_docs)]

use std::{error::Error, fmt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyPathError {
    EmptyPath,
    EmptySegment { path: String, index: usize },
}

impl fmt::Display for KeyPathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyPathError::EmptyPath => write!(f, "empty key path"),
            KeyPathError::EmptySegment { path, index } => {
                write!(f, "empty segment {} in key path \"{}\"", index, path)
            }
        }
    }
}

impl Error for KeyPathError {}
