//! MAT-file access to named 2-D numeric variables.
//!
//! Variables are stored in the Level 4 MAT container: a 20-byte header
//! (type, rows, columns, imaginary flag, name length), a NUL-terminated
//! name, then the elements column-wise. Level 4 only holds 2-D arrays, so a
//! rank check is inherent to the format.
//!
//! A [MatFile] binds a file name; the file itself is opened per operation,
//! so a handle can outlive rewrites of the underlying file.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub use error::*;
pub use mat_file::*;

mod error;
mod mat4;
mod mat_file;
