//! The sexpr Command-Line Interface.
//!
//! This module is the main entry point for all CLI commands and wires the
//! parsed arguments to the parser, the printer and `miette` error reports.

use std::io::Read;
use std::path::Path;
use std::{fs, io, process};

use clap::Parser as _;
use log::{debug, LevelFilter};
use miette::{IntoDiagnostic, Report, WrapErr};

use crate::cli::args::{Command, OutputArgs, ParseArgs, SexprArgs};
use crate::sample::SAMPLE_PROGRAM;
use crate::syntax::{ParseOptions, Parser};

pub mod args;
pub mod output;

/// The main entry point for the CLI.
pub fn run() {
    let args = SexprArgs::parse();
    init_logging(args.verbose);

    // Dispatch to the appropriate subcommand handler.
    let result = match &args.command {
        Command::Demo => handle_ast(SAMPLE_PROGRAM, "sample", &args),
        Command::Ast { file } => {
            read_source(file).and_then(|source| handle_ast(&source, &display_name(file), &args))
        }
        Command::Check { file } => {
            read_source(file).and_then(|source| handle_check(&source, &display_name(file), &args))
        }
    };

    if let Err(report) = result {
        eprintln!("{:?}", report);
        process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    let _ = env_logger::Builder::new()
        .filter_level(default)
        .parse_default_env()
        .try_init();
}

/// Builds parser options: defaults, then the `--options` file, then flags.
pub fn build_options(args: &ParseArgs) -> miette::Result<ParseOptions> {
    let mut options = match &args.options {
        Some(path) => {
            let json = fs::read_to_string(path)
                .into_diagnostic()
                .wrap_err_with(|| format!("failed to read options file {}", path.display()))?;
            ParseOptions::from_json_str(&json)
                .into_diagnostic()
                .wrap_err_with(|| format!("invalid options file {}", path.display()))?
        }
        None => ParseOptions::default(),
    };

    if args.strict {
        options = options.with_allow_trailing(false);
    }
    if args.no_depth_limit {
        options.max_depth = None;
    } else if let Some(depth) = args.max_depth {
        options.max_depth = Some(depth);
    }

    debug!("parser options: {:?}", options);
    Ok(options)
}

/// Handles `demo` and `ast`: print the tree, `(null)` on failure, then
/// surface the error.
fn handle_ast(source: &str, name: &str, args: &SexprArgs) -> miette::Result<()> {
    let mut parser = Parser::new(build_options(&args.parse)?);
    let result = parser.parse(source);
    print_result(result.as_ref().ok(), &args.output)?;
    result
        .map(|_| ())
        .map_err(|e| Report::new(e.with_source_name(name)))
}

/// Handles `check`: only report success or the diagnostic.
fn handle_check(source: &str, name: &str, args: &SexprArgs) -> miette::Result<()> {
    let mut parser = Parser::new(build_options(&args.parse)?);
    let node = parser
        .parse(source)
        .map_err(|e| Report::new(e.with_source_name(name)))?;
    let written = if args.output.json {
        output::print_check_json(name, &node)
    } else {
        output::print_ok(name, &node, output::color_choice(args.output.color))
    };
    written.into_diagnostic()
}

fn print_result(root: Option<&crate::AstNode<'_>>, out: &OutputArgs) -> miette::Result<()> {
    let written = if out.json {
        output::print_json(root)
    } else {
        output::print_tree(root, output::color_choice(out.color))
    };
    written.into_diagnostic()
}

fn read_source(path: &Path) -> miette::Result<String> {
    if path == Path::new("-") {
        let mut source = String::new();
        io::stdin()
            .read_to_string(&mut source)
            .into_diagnostic()
            .wrap_err("failed to read stdin")?;
        return Ok(source);
    }
    fs::read_to_string(path)
        .into_diagnostic()
        .wrap_err_with(|| format!("failed to read {}", path.display()))
}

fn display_name(path: &Path) -> String {
    if path == Path::new("-") {
        "<stdin>".to_string()
    } else {
        path.display().to_string()
    }
}
