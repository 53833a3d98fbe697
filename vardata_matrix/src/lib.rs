//! In-place conversion of a flat matrix buffer between row-major and
//! column-major element order.
//!
//! MAT files store 2-D arrays column-wise while callers index them row-wise,
//! so every read/write crosses this boundary once. The conversion runs in
//! place with O(1) extra space, so a matrix never needs a second full buffer.

#![warn(
    missing_docs,
    missing_debug_implementations,
    rust_2018_idioms,
    unreachable_pub
)]

pub use transpose::*;

mod transpose;
