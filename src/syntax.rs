//! Syntax module for sexpr
//!
//! Byte classification, parser configuration and the recursive-descent rules
//! that turn source text into an [`AstNode`](crate::ast::AstNode) tree.

pub mod chars;
pub mod options;
pub mod parser;

pub use options::ParseOptions;
pub use parser::{
    parse, parse_expression, parse_identifier, parse_list, parse_number, parse_string,
    ParseOutcome, Parser,
};
