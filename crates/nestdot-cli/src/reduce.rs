//! # Reduce Subcommands
//!
//! `dot`, `reduce` and `flatten`: the operations that collapse a tree, or a
//! pair of trees, into leaves or a single scalar.

use anyhow::{Context, Result};
use clap::Args;
use serde_json::{json, Value};

use nestdot_reduce::{flatten, Reducer, ReducerConfig, Strategy};

use crate::config::apply_overrides;
use crate::{parse_operand, ScalarOp};

/// Arguments for the `nestdot dot` subcommand.
#[derive(Args, Debug)]
pub struct DotArgs {
    /// Left operand, e.g. '[1, 2, [3, 4, 5]]'.
    #[arg(value_name = "A", allow_negative_numbers = true)]
    pub a: String,

    /// Right operand, e.g. '[6, 7, [8, 9, 0]]'.
    #[arg(value_name = "B", allow_negative_numbers = true)]
    pub b: String,

    /// Pairing strategy (naive, flatten, recursive). Overrides the config file.
    #[arg(long)]
    pub strategy: Option<Strategy>,
}

/// Arguments for the `nestdot reduce` subcommand.
#[derive(Args, Debug)]
pub struct ReduceArgs {
    /// Left operand.
    #[arg(value_name = "A", allow_negative_numbers = true)]
    pub a: String,

    /// Right operand.
    #[arg(value_name = "B", allow_negative_numbers = true)]
    pub b: String,

    /// Combining function applied to each pair of leaves.
    #[arg(long, value_enum, default_value_t = ScalarOp::Mul)]
    pub op: ScalarOp,
}

/// Arguments for the `nestdot flatten` subcommand.
#[derive(Args, Debug)]
pub struct FlattenArgs {
    /// Tree to flatten.
    #[arg(value_name = "TREE", allow_negative_numbers = true)]
    pub tree: String,
}

/// Execute the dot subcommand. Prints the scalar result.
pub fn run_dot(args: &DotArgs, config: &ReducerConfig) -> Result<Value> {
    let a = parse_operand(&args.a, "A")?;
    let b = parse_operand(&args.b, "B")?;
    let reducer = Reducer::new(apply_overrides(config.clone(), args.strategy, None))?;
    let result = reducer
        .dot(&a, &b)
        .with_context(|| format!("{} dot product failed", reducer.config().strategy))?;
    tracing::info!(%result, "dot product computed");
    Ok(json!(result))
}

/// Execute the reduce subcommand. Prints the summed combiner result.
pub fn run_reduce(args: &ReduceArgs, config: &ReducerConfig) -> Result<Value> {
    let a = parse_operand(&args.a, "A")?;
    let b = parse_operand(&args.b, "B")?;
    let reducer = Reducer::new(config.clone())?;
    let op = args.op;
    let result = reducer.reduce_with(&a, &b, |x, y| op.apply(x, y))?;
    Ok(json!(result))
}

/// Execute the flatten subcommand. Prints the flat leaf array.
pub fn run_flatten(args: &FlattenArgs) -> Result<Value> {
    let tree = parse_operand(&args.tree, "TREE")?;
    Ok(json!(flatten(&tree)))
}
