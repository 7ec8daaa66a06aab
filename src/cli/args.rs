//! Defines the command-line arguments and subcommands for the sexpr CLI.
//!
//! This module uses the `clap` crate with its "derive" feature to create a
//! declarative and type-safe argument parsing structure.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// The main CLI argument structure.
#[derive(Debug, Parser)]
#[command(
    name = "sexpr",
    version,
    about = "Parse an s-expression and print its syntax tree."
)]
pub struct SexprArgs {
    #[command(subcommand)]
    pub command: Command,

    #[command(flatten)]
    pub parse: ParseArgs,

    #[command(flatten)]
    pub output: OutputArgs,

    /// Log parser decisions (repeat for trace output).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// An enumeration of all available CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse the built-in sample program and print its tree.
    Demo,
    /// Parse a file and print its tree.
    Ast {
        /// The file to parse, or `-` for stdin.
        #[arg(required = true)]
        file: PathBuf,
    },
    /// Parse a file and report whether it is well formed.
    Check {
        /// The file to parse, or `-` for stdin.
        #[arg(required = true)]
        file: PathBuf,
    },
}

/// Flags that feed [`ParseOptions`](crate::ParseOptions).
#[derive(Debug, Args)]
pub struct ParseArgs {
    /// Load parser options from a JSON file; flags below override it.
    #[arg(long, global = true, value_name = "FILE")]
    pub options: Option<PathBuf>,

    /// Reject input after the top-level expression.
    #[arg(long, global = true)]
    pub strict: bool,

    /// Deepest list nesting to accept.
    #[arg(long, global = true, value_name = "N", conflicts_with = "no_depth_limit")]
    pub max_depth: Option<usize>,

    /// Accept lists nested to any depth.
    #[arg(long, global = true)]
    pub no_depth_limit: bool,
}

#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Print JSON: the tree for `demo`/`ast`, a status object for `check`.
    #[arg(long, global = true)]
    pub json: bool,

    /// When to color the tree.
    #[arg(long, global = true, value_enum, default_value_t = ColorArg::Auto)]
    pub color: ColorArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ColorArg {
    Auto,
    Always,
    Never,
}
