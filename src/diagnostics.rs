//! Parse diagnostics for sexpr.
//!
//! Parse rules report failures as a bare [`ParseErrorKind`] inside their
//! outcome. The top-level entry points lift that into a [`ParseError`], which
//! carries the byte span and the input so `miette` can render a labelled
//! snippet.

use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

// Type aliases for clarity and brevity
pub type SourceArc = Arc<NamedSource<String>>;

/// Byte range into the parsed input.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// A zero-width span at `offset`.
    pub fn point(offset: usize) -> Self {
        Self {
            start: offset,
            end: offset,
        }
    }

    /// Label width for rendering. A zero-width span gets one column unless it
    /// sits at the very end of the source.
    pub fn label_len(&self, source_len: usize) -> usize {
        if self.end > self.start {
            self.end - self.start
        } else if self.start < source_len {
            1
        } else {
            0
        }
    }
}

/// Why a parse failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseErrorKind {
    /// The span was empty, initially or after skipping whitespace.
    EmptyInput,
    /// No rule accepts the leading character.
    NoRuleMatched,
    /// A `(` was never closed before the input ended.
    UnterminatedList,
    /// A `"` was never closed before the input ended.
    UnterminatedString,
    /// Lists nest deeper than the configured maximum.
    DepthLimitExceeded,
    /// Non-whitespace input follows the top-level expression in strict mode.
    TrailingInput,
}

impl ParseErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParseErrorKind::EmptyInput => "empty_input",
            ParseErrorKind::NoRuleMatched => "no_rule_matched",
            ParseErrorKind::UnterminatedList => "unterminated_list",
            ParseErrorKind::UnterminatedString => "unterminated_string",
            ParseErrorKind::DepthLimitExceeded => "depth_limit_exceeded",
            ParseErrorKind::TrailingInput => "trailing_input",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            ParseErrorKind::EmptyInput => "expected an expression, found end of input",
            ParseErrorKind::NoRuleMatched => "unexpected character",
            ParseErrorKind::UnterminatedList => "list is missing its closing ')'",
            ParseErrorKind::UnterminatedString => "string is missing its closing '\"'",
            ParseErrorKind::DepthLimitExceeded => "lists are nested too deeply",
            ParseErrorKind::TrailingInput => "unexpected input after the expression",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            ParseErrorKind::EmptyInput => "the input must contain one expression",
            ParseErrorKind::NoRuleMatched => {
                "an expression starts with '(', '\"', a digit or an ASCII letter"
            }
            ParseErrorKind::UnterminatedList => "add a ')' to close the list",
            ParseErrorKind::UnterminatedString => "add a '\"' to close the string",
            ParseErrorKind::DepthLimitExceeded => "raise --max-depth or flatten the input",
            ParseErrorKind::TrailingInput => "remove the extra input or drop --strict",
        }
    }
}

impl std::fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// A located parse failure, renderable as a `miette` report.
#[derive(Debug, Error)]
#[error("Parse error: {kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    code: String,
    src: SourceArc,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span, src: SourceArc) -> Self {
        Self {
            kind,
            span,
            code: format!("sexpr::parse::{}", kind.as_str()),
            src,
        }
    }

    /// Returns the stable diagnostic code, e.g. `sexpr::parse::empty_input`.
    pub fn code_str(&self) -> &str {
        &self.code
    }

    /// Renames the source shown in reports (a file path, `<stdin>`, ...).
    pub fn with_source_name(mut self, name: impl AsRef<str>) -> Self {
        let content = self.src.inner().clone();
        self.src = Arc::new(NamedSource::new(name, content));
        self
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(&self.code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn std::fmt::Display + 'a>> {
        Some(Box::new(self.kind.help()))
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        Some(self.src.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let label = LabeledSpan::new(
            Some(self.kind.message().to_string()),
            self.span.start,
            self.span.label_len(self.src.inner().len()),
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Converts a source string into an `Arc<NamedSource<String>>` for error reports.
pub fn to_error_source<S: AsRef<str>>(source: S) -> SourceArc {
    Arc::new(NamedSource::new("input", source.as_ref().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_names_the_kind() {
        let err = ParseError::new(
            ParseErrorKind::UnterminatedList,
            Span::point(4),
            to_error_source("(a b"),
        );
        assert_eq!(err.code_str(), "sexpr::parse::unterminated_list");
        assert_eq!(
            err.to_string(),
            "Parse error: list is missing its closing ')'"
        );
    }

    #[test]
    fn test_zero_width_label_width() {
        let err = ParseError::new(ParseErrorKind::NoRuleMatched, Span::point(1), to_error_source("(#)"));
        let label = err.labels().and_then(|mut l| l.next()).unwrap();
        assert_eq!(label.offset(), 1);
        assert_eq!(label.len(), 1);

        let err = ParseError::new(ParseErrorKind::UnterminatedList, Span::point(4), to_error_source("(a b"));
        let label = err.labels().and_then(|mut l| l.next()).unwrap();
        assert_eq!(label.offset(), 4);
        assert_eq!(label.len(), 0);
    }

    #[test]
    fn test_with_source_name_keeps_content() {
        let err = ParseError::new(ParseErrorKind::NoRuleMatched, Span::new(0, 1), to_error_source(")"))
            .with_source_name("demo.sx");
        assert_eq!(err.src.name(), "demo.sx");
        assert_eq!(err.src.inner(), ")");
    }
}
