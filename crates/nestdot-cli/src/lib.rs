//! # nestdot-cli: Command-Line Interface for nestdot
//!
//! Provides the `nestdot` binary. Operands are nested numeric literals
//! written as JSON; every result is printed as a single line of JSON.
//!
//! ## Subcommands
//!
//! - `nestdot dot`: Dot product with a selectable strategy.
//! - `nestdot reduce`: Sum of any scalar combiner over paired leaves.
//! - `nestdot flatten`: Depth-first leaf list.
//! - `nestdot zip`: Top-level pairs, truncating or padded.
//! - `nestdot transpose`: Regroup a matrix by column.
//! - `nestdot combine`: Elementwise combination keeping shape.
//! - `nestdot meshgrid`: Coordinate matrices for two axes.
//! - `nestdot table`: Nested comprehension table and its evaluation order.
//!
//! ```bash
//! nestdot dot '[1, 2, [3, 4, 5]]' '[6, 7, [8, 9, 0]]'
//! nestdot dot --strategy naive '[1, [2]]' '[3, [4]]'
//! nestdot --config reducer.yaml table --rows 3 --cols 3
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives here; computation is delegated to
//!   `nestdot-reduce`.
//! - Handlers return the JSON value to print, so they are testable without
//!   capturing stdout.

pub mod config;
pub mod grid;
pub mod pairing;
pub mod reduce;

use anyhow::{Context, Result};
use clap::ValueEnum;

use nestdot_core::{NestedValue, Scalar};

/// Binary scalar operation selectable on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ScalarOp {
    /// Multiplication.
    #[default]
    Mul,
    /// Addition.
    Add,
}

impl ScalarOp {
    /// Apply the operation.
    pub fn apply(self, x: Scalar, y: Scalar) -> Scalar {
        match self {
            ScalarOp::Mul => x * y,
            ScalarOp::Add => x + y,
        }
    }
}

/// Parse a JSON literal operand, naming it in the error context.
pub fn parse_operand(literal: &str, name: &str) -> Result<NestedValue> {
    NestedValue::from_json_str(literal)
        .with_context(|| format!("invalid {name} operand: {literal}"))
}
