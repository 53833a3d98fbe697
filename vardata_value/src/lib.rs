//! Dynamically typed scalar values and locale-aware number parsing.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub use error::*;
pub use locale::*;
pub use value::*;

mod error;
mod locale;
mod value;
