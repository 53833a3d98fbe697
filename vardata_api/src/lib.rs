//! Named-value access to simulation data files.
//!
//! This crate provides two file handles: [JsonFile] for hierarchical scalar
//! data and [MatFile] for 2-D numeric matrices.
//!
//! # Key paths
//!
//! JSON reads take a dotted `path` parameter addressing a nested field, e.g.
//! `"section.subsection.field"`. Segments are split on `.` with no escaping.
//!
//! # Advisory vs. fatal failures
//!
//! A path or variable that simply does not exist is advisory: the read
//! returns `None` and emits a diagnostic event, so models can probe for
//! optional values. Everything else is fatal: a value that exists but cannot
//! be coerced to the requested type, a file that cannot be opened or parsed,
//! and any matrix shape or element-class mismatch.
//!
//! Every operation comes in two forms, following the usual pattern: a
//! panicking method for scripts and tools, and a `try_` variant returning
//! [Result] for callers that recover. Handles release their resources on
//! drop and carry no locking; use one handle per thread or serialize access.
//!
//! # Example
//!
//! ```no_run
//! use vardata_api::JsonFile;
//!
//! let file = JsonFile::open("gains.json", false);
//! let k = file.read_f64("controller.pid.k").unwrap_or(1.0);
//! ```

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub use error::*;
pub use json_file::*;
pub use mat_file::*;
pub use vardata_value::{NumberLocale, Value, ValueTypeError};

mod error;
mod json_file;
mod mat_file;
