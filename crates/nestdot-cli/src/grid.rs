//! # Grid Subcommands
//!
//! `meshgrid` and `table`.

use anyhow::{bail, Result};
use clap::Args;
use serde_json::{json, Value};

use nestdot_reduce::{comprehension_table, evaluation_order, flatten, meshgrid};

use crate::{parse_operand, ScalarOp};

/// Largest number of cells `table` will build or enumerate.
pub const MAX_TABLE_CELLS: i64 = 1_000_000;

/// Arguments for the `nestdot meshgrid` subcommand.
#[derive(Args, Debug)]
pub struct MeshgridArgs {
    /// Column axis, e.g. '[1, 2, 3]'. Nested input is flattened.
    #[arg(value_name = "X1", allow_negative_numbers = true)]
    pub x1: String,

    /// Row axis, e.g. '[10, 20]'. Nested input is flattened.
    #[arg(value_name = "X2", allow_negative_numbers = true)]
    pub x2: String,

    /// Print the list of coordinate points instead of the two matrices.
    #[arg(long)]
    pub points: bool,
}

/// Arguments for the `nestdot table` subcommand.
#[derive(Args, Debug)]
pub struct TableArgs {
    /// Outer variable runs over 1..=ROWS.
    #[arg(long, allow_negative_numbers = true)]
    pub rows: i64,

    /// Inner variable runs over 1..=COLS.
    #[arg(long, allow_negative_numbers = true)]
    pub cols: i64,

    /// Cell function f(i, j).
    #[arg(long, value_enum, default_value_t = ScalarOp::Mul)]
    pub op: ScalarOp,

    /// Print the (i, j) evaluation order instead of the table.
    #[arg(long)]
    pub order: bool,
}

/// Execute the meshgrid subcommand.
pub fn run_meshgrid(args: &MeshgridArgs) -> Result<Value> {
    let x1 = flatten(&parse_operand(&args.x1, "X1")?);
    let x2 = flatten(&parse_operand(&args.x2, "X2")?);
    let grid = meshgrid(&x1, &x2);
    tracing::debug!(shape = ?grid.shape(), "built meshgrid");
    if args.points {
        Ok(json!(grid.points().collect::<Vec<_>>()))
    } else {
        Ok(json!(grid))
    }
}

/// Execute the table subcommand.
pub fn run_table(args: &TableArgs) -> Result<Value> {
    if args.rows < 0 || args.cols < 0 {
        bail!(
            "table dimensions must be non-negative, got {}x{}",
            args.rows,
            args.cols
        );
    }
    match args.rows.checked_mul(args.cols) {
        Some(cells) if cells <= MAX_TABLE_CELLS => {}
        _ => bail!(
            "table of {}x{} cells exceeds the limit of {MAX_TABLE_CELLS}",
            args.rows,
            args.cols
        ),
    }
    if args.order {
        return Ok(json!(evaluation_order(1..=args.rows, 1..=args.cols)));
    }
    let op = args.op;
    Ok(json!(comprehension_table(
        1..=args.rows,
        1..=args.cols,
        |i, j| op.apply(i, j)
    )))
}
