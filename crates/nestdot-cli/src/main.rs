//! # nestdot CLI entry point
//!
//! Parses command-line arguments, loads the reducer configuration, and
//! dispatches to subcommand handlers. Each handler returns a JSON value that
//! is printed as one line on stdout.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use nestdot_cli::config::{apply_overrides, load_config};
use nestdot_cli::grid::{run_meshgrid, run_table, MeshgridArgs, TableArgs};
use nestdot_cli::pairing::{
    run_combine, run_transpose, run_zip, CombineArgs, TransposeArgs, ZipArgs,
};
use nestdot_cli::reduce::{
    run_dot, run_flatten, run_reduce, DotArgs, FlattenArgs, ReduceArgs,
};

/// nestdot: reductions and pairings over nested numeric sequences.
///
/// Operands are JSON literals such as '[1, 2, [3, 4, 5]]'.
#[derive(Parser, Debug)]
#[command(name = "nestdot", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to a YAML reducer configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Reject operands nested deeper than this. Overrides the config file.
    #[arg(long, global = true)]
    max_depth: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Dot product of two nested operands, tolerating ragged nesting.
    Dot(DotArgs),

    /// Sum a scalar combiner over the paired leaves of two operands.
    Reduce(ReduceArgs),

    /// List every leaf of a tree in depth-first order.
    Flatten(FlattenArgs),

    /// Pair the top-level elements of two operands.
    Zip(ZipArgs),

    /// Regroup a matrix by column.
    Transpose(TransposeArgs),

    /// Combine two operands elementwise, keeping their shared shape.
    Combine(CombineArgs),

    /// Build coordinate matrices for two axes.
    Meshgrid(MeshgridArgs),

    /// Evaluate a nested comprehension table.
    Table(TableArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize tracing based on verbosity level.
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match load_config(cli.config.as_deref()) {
        Ok(config) => apply_overrides(config, None, cli.max_depth),
        Err(e) => {
            tracing::error!("{e:#}");
            return ExitCode::from(1);
        }
    };

    let result = match cli.command {
        Commands::Dot(args) => run_dot(&args, &config),
        Commands::Reduce(args) => run_reduce(&args, &config),
        Commands::Flatten(args) => run_flatten(&args),
        Commands::Zip(args) => run_zip(&args),
        Commands::Transpose(args) => run_transpose(&args),
        Commands::Combine(args) => run_combine(&args),
        Commands::Meshgrid(args) => run_meshgrid(&args),
        Commands::Table(args) => run_table(&args),
    };

    match result {
        Ok(value) => {
            println!("{value}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
