//! Dotted key paths and hierarchical value lookup.
//!
//! A key path addresses a nested field in a hierarchical document using a
//! dotted syntax, e.g. `section.subsection.field`. The last usable segment
//! names a terminal field; all preceding segments name nested containers.
//!
//! Lookup is generic over [TreeNode], so any document representation with
//! named children can be walked. A failed lookup is an ordinary outcome
//! ([PathLookup::MissingField] / [PathLookup::MissingPath]), never an error:
//! callers decide whether a missing path is advisory or fatal.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub use error::*;
pub use key_path::*;
pub use lookup::*;

mod error;
mod key_path;
mod lookup;
