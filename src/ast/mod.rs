//! AST module for sexpr
//!
//! This module provides the Abstract Syntax Tree produced by the parser. Atom
//! text is borrowed straight from the parsed input, so a tree never outlives
//! the source it was built from.

// ============================================================================
// IMPORTS
// ============================================================================

use std::fmt;

use serde::Serialize;

// ============================================================================
// NODE CLASSIFICATION
// ============================================================================

/// The lexical class of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AtomKind {
    Identifier,
    Number,
    String,
}

/// Every node class the tree can name, including the `Unknown` sentinel.
///
/// `Unknown` is only the default for a node that has not been classified yet.
/// A tree returned by a successful parse never contains it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum NodeKind {
    #[default]
    Unknown,
    List,
    Identifier,
    Number,
    String,
}

impl NodeKind {
    /// Returns the display name of this kind (used by the tree printer).
    pub fn name(self) -> &'static str {
        match self {
            NodeKind::Unknown => "Unknown",
            NodeKind::List => "List",
            NodeKind::Identifier => "Identifier",
            NodeKind::Number => "Number",
            NodeKind::String => "String",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<AtomKind> for NodeKind {
    fn from(kind: AtomKind) -> Self {
        match kind {
            AtomKind::Identifier => NodeKind::Identifier,
            AtomKind::Number => NodeKind::Number,
            AtomKind::String => NodeKind::String,
        }
    }
}

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A node of the parsed tree.
///
/// # Examples
///
/// ```rust
/// use sexpr::ast::{AstNode, AtomKind, NodeKind};
/// let node = AstNode::atom(AtomKind::Number, "42");
/// assert_eq!(node.kind(), NodeKind::Number);
/// assert_eq!(node.text(), Some("42"));
/// assert!(node.children().is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum AstNode<'src> {
    /// A leaf: identifier, number or string literal. `text` is the matched
    /// slice of the input; for strings it excludes the quotes.
    Atom { kind: AtomKind, text: &'src str },
    /// A parenthesized list, children in source order.
    List { children: Vec<AstNode<'src>> },
}

impl<'src> AstNode<'src> {
    pub fn atom(kind: AtomKind, text: &'src str) -> Self {
        AstNode::Atom { kind, text }
    }

    pub fn list(children: Vec<AstNode<'src>>) -> Self {
        AstNode::List { children }
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            AstNode::Atom { kind, .. } => (*kind).into(),
            AstNode::List { .. } => NodeKind::List,
        }
    }

    pub fn is_list(&self) -> bool {
        matches!(self, AstNode::List { .. })
    }

    /// The atom text, or `None` for a list.
    pub fn text(&self) -> Option<&'src str> {
        match self {
            AstNode::Atom { text, .. } => Some(text),
            AstNode::List { .. } => None,
        }
    }

    /// The list children, or `None` for an atom.
    pub fn children(&self) -> Option<&[AstNode<'src>]> {
        match self {
            AstNode::List { children } => Some(children),
            AstNode::Atom { .. } => None,
        }
    }

    /// Returns the deepest list nesting below and including this node.
    pub fn depth(&self) -> usize {
        match self {
            AstNode::Atom { .. } => 0,
            AstNode::List { children } => {
                1 + children.iter().map(AstNode::depth).max().unwrap_or(0)
            }
        }
    }

    /// Re-renders the node as source text.
    ///
    /// Atoms come back exactly as they were written, so parsing the rendering
    /// of an atom yields the same `text`.
    pub fn pretty(&self) -> String {
        match self {
            AstNode::Atom {
                kind: AtomKind::String,
                text,
            } => format!("\"{}\"", text),
            AstNode::Atom { text, .. } => (*text).to_string(),
            AstNode::List { children } => {
                let inner = children
                    .iter()
                    .map(AstNode::pretty)
                    .collect::<Vec<_>>()
                    .join(" ");
                format!("({})", inner)
            }
        }
    }
}

impl fmt::Display for AstNode<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.pretty())
    }
}
