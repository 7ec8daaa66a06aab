//! Handles all user-facing output for the CLI.
//!
//! Tree printing (plain or colored), JSON output and status lines live here
//! so every command presents results the same way.

use std::io::{self, IsTerminal, Write};

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::ast::AstNode;
use crate::cli::args::ColorArg;
use crate::printer;

/// Resolves the `--color` flag against whether stdout is a terminal.
pub fn color_choice(arg: ColorArg) -> ColorChoice {
    match arg {
        ColorArg::Always => ColorChoice::Always,
        ColorArg::Never => ColorChoice::Never,
        ColorArg::Auto if io::stdout().is_terminal() => ColorChoice::Auto,
        ColorArg::Auto => ColorChoice::Never,
    }
}

/// Prints the debug tree, or `(null)` when there is no tree.
pub fn print_tree(root: Option<&AstNode<'_>>, color: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);
    printer::write_tree(&mut stdout, root)?;
    stdout.flush()
}

/// Prints the tree as pretty JSON; a missing tree prints `null`.
pub fn print_json(root: Option<&AstNode<'_>>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(&root).map_err(io::Error::from)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", json)
}

/// Prints the `check` result as a JSON object.
pub fn print_check_json(name: &str, node: &AstNode<'_>) -> io::Result<()> {
    let status = serde_json::json!({
        "ok": true,
        "source": name,
        "kind": node.kind(),
        "depth": node.depth(),
    });
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", status)
}

/// Prints a green success line for `check`.
pub fn print_ok(name: &str, node: &AstNode<'_>, color: ColorChoice) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(color);
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Green)).set_bold(true))?;
    write!(stdout, "ok")?;
    stdout.reset()?;
    writeln!(
        stdout,
        ": {} is a well-formed {} (depth {})",
        name,
        node.kind(),
        node.depth()
    )
}
