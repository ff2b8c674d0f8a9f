//! # nestdot-reduce: Reducers over Nested Trees
//!
//! Operations over [`NestedValue`](nestdot_core::NestedValue) trees:
//!
//! - **Flatten** (`flatten.rs`): depth-first leaf extraction, eager
//!   ([`flatten()`]) and lazy ([`leaves()`]).
//!
//! - **Reducer** (`reducer.rs`): the ragged-tolerant dot product and its
//!   generalization [`reduce_with()`] over any scalar combining function.
//!   Also the two alternatives it is usually compared against: the naive
//!   positional product that fails on nested elements, and the
//!   flatten-first product.
//!
//! - **Pairing** (`pairing.rs`): zip, zip-longest, transpose and structural
//!   zip-with over nested sequences.
//!
//! - **Grid** (`grid.rs`): meshgrid coordinate matrices and nested
//!   comprehension tables.
//!
//! - **Config** (`config.rs`): strategy selection and depth limits for
//!   [`Reducer`].
//!
//! ## Invariants
//!
//! - A Sequence paired with a Scalar is never an error. Both sides are
//!   flattened and paired with truncation.
//! - Pairing always truncates to the shorter operand, except in
//!   [`zip_longest()`].
//! - Flatten, the reducers and `zip_with` walk an explicit heap stack;
//!   input depth never grows the native call stack.

pub mod config;
pub mod flatten;
pub mod grid;
pub mod pairing;
pub mod reducer;

pub use config::{ReducerConfig, Strategy};
pub use flatten::{flatten, leaves, Leaves};
pub use grid::{comprehension_table, evaluation_order, meshgrid, GridPoint, Meshgrid};
pub use pairing::{transpose, zip_longest, zip_pairs, zip_with};
pub use reducer::{dot_product, flat_dot, naive_dot, reduce_with, Reducer};
