//! # Pairing Subcommands
//!
//! `zip`, `transpose` and `combine`.

use anyhow::Result;
use clap::Args;
use serde_json::{json, Value};

use nestdot_reduce::{transpose, zip_longest, zip_pairs, zip_with};

use crate::{parse_operand, ScalarOp};

/// Arguments for the `nestdot zip` subcommand.
#[derive(Args, Debug)]
pub struct ZipArgs {
    /// Left operand.
    #[arg(value_name = "A", allow_negative_numbers = true)]
    pub a: String,

    /// Right operand.
    #[arg(value_name = "B", allow_negative_numbers = true)]
    pub b: String,

    /// Pair up to the longer operand instead of truncating.
    #[arg(long)]
    pub longest: bool,

    /// Fill value for missing positions with --longest.
    #[arg(
        long,
        default_value = "0",
        requires = "longest",
        allow_negative_numbers = true
    )]
    pub fill: String,
}

/// Arguments for the `nestdot transpose` subcommand.
#[derive(Args, Debug)]
pub struct TransposeArgs {
    /// Matrix given as a list of rows.
    #[arg(value_name = "MATRIX", allow_negative_numbers = true)]
    pub matrix: String,
}

/// Arguments for the `nestdot combine` subcommand.
#[derive(Args, Debug)]
pub struct CombineArgs {
    /// Left operand.
    #[arg(value_name = "A", allow_negative_numbers = true)]
    pub a: String,

    /// Right operand.
    #[arg(value_name = "B", allow_negative_numbers = true)]
    pub b: String,

    /// Operation applied to each pair of leaves.
    #[arg(long, value_enum, default_value_t = ScalarOp::Add)]
    pub op: ScalarOp,
}

/// Execute the zip subcommand. Prints an array of `[a_i, b_i]` pairs.
pub fn run_zip(args: &ZipArgs) -> Result<Value> {
    let a = parse_operand(&args.a, "A")?;
    let b = parse_operand(&args.b, "B")?;
    let pairs: Vec<_> = if args.longest {
        let fill = parse_operand(&args.fill, "fill")?;
        zip_longest(&a, &b, &fill).map(|pair| json!(pair)).collect()
    } else {
        zip_pairs(&a, &b).map(|pair| json!(pair)).collect()
    };
    tracing::debug!(pairs = pairs.len(), longest = args.longest, "zipped operands");
    Ok(Value::Array(pairs))
}

/// Execute the transpose subcommand.
pub fn run_transpose(args: &TransposeArgs) -> Result<Value> {
    let matrix = parse_operand(&args.matrix, "MATRIX")?;
    Ok(json!(transpose(&matrix)))
}

/// Execute the combine subcommand.
pub fn run_combine(args: &CombineArgs) -> Result<Value> {
    let a = parse_operand(&args.a, "A")?;
    let b = parse_operand(&args.b, "B")?;
    let op = args.op;
    Ok(json!(zip_with(&a, &b, |x, y| op.apply(x, y))))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zip_truncates_by_default() {
        let args = ZipArgs {
            a: "[[1, 2], [3, 4, 5], [6]]".into(),
            b: "[[7, 8], [9]]".into(),
            longest: false,
            fill: "0".into(),
        };
        assert_eq!(
            run_zip(&args).unwrap(),
            json!([[[1, 2], [7, 8]], [[3, 4, 5], [9]]])
        );
    }

    #[test]
    fn zip_longest_pads() {
        let args = ZipArgs {
            a: "[[1, 2, 3], [4, 5]]".into(),
            b: "[1, 2, 3]".into(),
            longest: true,
            fill: "-1".into(),
        };
        assert_eq!(
            run_zip(&args).unwrap(),
            json!([[[1, 2, 3], 1], [[4, 5], 2], [-1, 3]])
        );
    }

    #[test]
    fn transpose_matrix() {
        let args = TransposeArgs {
            matrix: "[[1, 2, 3], [4, 5, 6], [7, 8, 9]]".into(),
        };
        assert_eq!(
            run_transpose(&args).unwrap(),
            json!([[1, 4, 7], [2, 5, 8], [3, 6, 9]])
        );
    }

    #[test]
    fn combine_adds_rows() {
        let args = CombineArgs {
            a: "[[1, 2, 3], [4, 5, 6]]".into(),
            b: "[[10, 20, 30], [40, 50, 60]]".into(),
            op: ScalarOp::Add,
        };
        assert_eq!(
            run_combine(&args).unwrap(),
            json!([[11, 22, 33], [44, 55, 66]])
        );
    }

    #[test]
    fn bad_fill_is_reported() {
        let args = ZipArgs {
            a: "[1]".into(),
            b: "[1, 2]".into(),
            longest: true,
            fill: "null".into(),
        };
        let err = run_zip(&args).unwrap_err();
        assert!(err.to_string().contains("invalid fill operand"));
    }
}
