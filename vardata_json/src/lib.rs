//! JSON-backed named-value access.
//!
//! A [JsonDocument] parses a JSON file once and serves repeated dotted-path
//! scalar reads from the parsed tree. A path that does not exist is reported
//! as `Ok(None)` with an advisory event; a path that exists but holds a value
//! of the wrong shape is an error.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub use document::*;
pub use error::*;

mod document;
mod error;
