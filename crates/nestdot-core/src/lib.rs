//! # nestdot-core: Foundational Types for nestdot
//!
//! This crate defines the value model every other crate in the workspace
//! operates on. It depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **One tagged tree.** `NestedValue` is either a `Scalar` leaf or a
//!    `Sequence`. Every "is this a list or a number" decision is an
//!    exhaustive `match`, never runtime type inspection.
//!
//! 2. **Validation at the boundary.** Untyped JSON becomes a `NestedValue`
//!    only through `TryFrom<&serde_json::Value>`; a non-numeric leaf is a
//!    `ValueError::TypeMismatch` with the offending path. Downstream code can
//!    assume every leaf is numeric.
//!
//! 3. **Integral arithmetic where possible.** `Scalar` keeps integers as
//!    `i64` and only promotes to `f64` on overflow or mixed operands.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `nestdot-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod error;
pub mod scalar;
pub mod value;

// Re-export primary types for ergonomic imports.
pub use error::{ConfigError, NestdotError, ReduceError, ValueError};
pub use scalar::Scalar;
pub use value::NestedValue;
