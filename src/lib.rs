pub use crate::ast::{AstNode, AtomKind, NodeKind};
pub use crate::diagnostics::{ParseError, ParseErrorKind, Span};
pub use crate::syntax::{parse, parse_expression, ParseOptions, ParseOutcome, Parser};

pub mod ast;
pub mod cli;
pub mod diagnostics;
pub mod printer;
pub mod sample;
pub mod syntax;
