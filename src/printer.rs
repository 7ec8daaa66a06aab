//! Debug tree printer.
//!
//! Writes one line per node, indented two spaces per nesting level:
//!
//! ```text
//! [List](
//!   [Identifier]val
//!   [String]"hello"
//! )
//! ```
//!
//! Atoms are written in source form (strings keep their quotes), so the part
//! after the `[Kind]` tag parses back to the same atom. An absent root, the
//! result of a failed parse, prints as `(null)`.

use std::io::{self, Write};

use termcolor::{Color, ColorSpec, NoColor, WriteColor};

use crate::ast::{AstNode, NodeKind};

/// Marker printed in place of a missing tree.
pub const NULL_MARKER: &str = "(null)";

const INDENT: &str = "  ";

/// Renders the tree as plain text.
///
/// # Examples
///
/// ```rust
/// let node = sexpr::parse("(a 1)").unwrap();
/// assert_eq!(
///     sexpr::printer::render_tree(Some(&node)),
///     "[List](\n  [Identifier]a\n  [Number]1\n)\n"
/// );
/// assert_eq!(sexpr::printer::render_tree(None), "(null)\n");
/// ```
pub fn render_tree(root: Option<&AstNode<'_>>) -> String {
    let mut out = NoColor::new(Vec::new());
    // Writing into a Vec cannot fail.
    write_tree(&mut out, root).ok();
    String::from_utf8_lossy(&out.into_inner()).into_owned()
}

/// Writes the tree to `out`, coloring kind tags when the sink supports it.
pub fn write_tree<W: WriteColor>(out: &mut W, root: Option<&AstNode<'_>>) -> io::Result<()> {
    match root {
        Some(node) => write_node(out, node, 0),
        None => {
            out.set_color(ColorSpec::new().set_fg(Some(Color::Red)).set_bold(true))?;
            write!(out, "{}", NULL_MARKER)?;
            out.reset()?;
            writeln!(out)
        }
    }
}

fn write_node<W: WriteColor>(out: &mut W, node: &AstNode<'_>, nesting: usize) -> io::Result<()> {
    write_indent(out, nesting)?;
    write_tag(out, node.kind())?;

    if !node.is_list() {
        return writeln!(out, "{}", node.pretty());
    }

    writeln!(out, "(")?;
    for child in node.children().unwrap_or_default() {
        write_node(out, child, nesting + 1)?;
    }
    write_indent(out, nesting)?;
    writeln!(out, ")")
}

fn write_tag<W: WriteColor>(out: &mut W, kind: NodeKind) -> io::Result<()> {
    let color = match kind {
        NodeKind::List => Color::Cyan,
        NodeKind::Identifier => Color::Yellow,
        NodeKind::Number => Color::Magenta,
        NodeKind::String => Color::Green,
        NodeKind::Unknown => Color::Red,
    };
    out.set_color(ColorSpec::new().set_fg(Some(color)))?;
    write!(out, "[{}]", kind.name())?;
    out.reset()
}

fn write_indent<W: Write>(out: &mut W, nesting: usize) -> io::Result<()> {
    for _ in 0..nesting {
        out.write_all(INDENT.as_bytes())?;
    }
    Ok(())
}
