//! Dynamically-sized dense matrices with value semantics.
//!
//! # Motivation
//!
//! Fixed-size matrix types built on const generics work well when the
//! dimensions are known at compile time, but some callers only learn the shape
//! of their data at runtime. This library provides a single dynamically-sized
//! matrix type for that use case, without pulling in a general-purpose
//! numerics library.
//!
//! # Goals & Non-Goals
//!
//! - Support a single element type, [`f64`], and a single dense, row-major,
//!   contiguous data layout. Generic element types and alternative layouts add
//!   complexity that this use case does not need.
//! - Value semantics throughout: every [`Matrix`] owns its storage, cloning
//!   deep-copies, and moving transfers ownership.
//! - Report contract violations (mismatched shapes, out-of-range indices,
//!   non-square inputs) as typed errors the caller can match on, rather than
//!   as a single generic failure.
//! - Favor the obvious textbook algorithms over clever ones. The determinant
//!   and inverse use Laplace expansion and the adjugate formula; there is no
//!   decomposition machinery, pivoting, or sparse storage, and none is
//!   planned.

mod error;
mod matrix;

pub use error::MatrixError;
pub use matrix::Matrix;
