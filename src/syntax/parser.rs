//! sexpr Parser - hand-written recursive descent
//!
//! Converts source text into [`AstNode`] trees without copying: atom text is
//! a slice of the input, and every rule advances by re-slicing the span it
//! was given. Each rule reports through a [`ParseOutcome`]; no rule panics on
//! malformed input and no scan ever reads past the end of its span.
//!
//! ```text
//! expression := identifier | list | string | number
//! list       := '(' ws* (expression ws*)* ')'
//! identifier := letter (letter | digit)*
//! number     := digit+
//! string     := '"' (any-char-except-'"')* '"'
//! ```

use log::{debug, trace};

use crate::ast::{AstNode, AtomKind};
use crate::diagnostics::{to_error_source, ParseError, ParseErrorKind, Span};
use crate::syntax::chars::{is_digit, is_letter, run_length, skip_whitespace};
use crate::syntax::options::ParseOptions;

// ============================================================================
// PARSE OUTCOME
// ============================================================================

/// What a single rule produced.
///
/// `remaining` is always the first unconsumed position. When a list fails
/// partway through, `node` holds the children parsed so far; that partial
/// list is for diagnostics only, so callers must check `matched` rather than
/// the presence of `node`.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseOutcome<'src> {
    pub matched: bool,
    pub node: Option<AstNode<'src>>,
    pub remaining: &'src str,
    /// `None` when the rule declined because its leading character did not
    /// apply; `Some` for a genuine failure.
    pub error: Option<ParseErrorKind>,
}

impl<'src> ParseOutcome<'src> {
    fn success(node: AstNode<'src>, remaining: &'src str) -> Self {
        Self {
            matched: true,
            node: Some(node),
            remaining,
            error: None,
        }
    }

    fn declined(remaining: &'src str) -> Self {
        Self {
            matched: false,
            node: None,
            remaining,
            error: None,
        }
    }

    fn failure(kind: ParseErrorKind, partial: Option<AstNode<'src>>, remaining: &'src str) -> Self {
        Self {
            matched: false,
            node: partial,
            remaining,
            error: Some(kind),
        }
    }

    /// True when the rule applied and failed, as opposed to declining.
    pub fn is_failure(&self) -> bool {
        !self.matched && self.error.is_some()
    }

    /// The parsed node, only if the rule matched.
    pub fn into_node(self) -> Option<AstNode<'src>> {
        if self.matched {
            self.node
        } else {
            None
        }
    }
}

type Rule<'src> = fn(&mut Parser, &'src str) -> ParseOutcome<'src>;

// ============================================================================
// PARSER
// ============================================================================

/// Recursive-descent parser configured by [`ParseOptions`].
///
/// The only state beyond the options is the current list nesting depth, which
/// is reset by [`Parser::parse`].
#[derive(Debug, Default)]
pub struct Parser {
    options: ParseOptions,
    depth: usize,
}

impl Parser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options, depth: 0 }
    }

    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Parses one top-level expression and turns the outcome into a `Result`.
    ///
    /// Trailing input is accepted unless `allow_trailing` is off, in which
    /// case anything but whitespace after the expression is an error.
    pub fn parse<'src>(&mut self, source: &'src str) -> Result<AstNode<'src>, ParseError> {
        self.depth = 0;
        let outcome = self.parse_expression(source);
        let offset = source.len() - outcome.remaining.len();

        let node = match outcome {
            ParseOutcome {
                matched: true,
                node: Some(node),
                ..
            } => node,
            ParseOutcome {
                error, remaining, ..
            } => {
                let kind = error.unwrap_or(ParseErrorKind::NoRuleMatched);
                debug!("parse failed with {:?} at byte {}", kind, offset);
                let span = failure_span(kind, remaining, offset);
                return Err(ParseError::new(kind, span, to_error_source(source)));
            }
        };

        if !self.options.allow_trailing {
            let rest = skip_whitespace(&source[offset..]);
            if !rest.is_empty() {
                let start = source.len() - rest.len();
                debug!("rejecting {} trailing bytes at byte {}", rest.len(), start);
                return Err(ParseError::new(
                    ParseErrorKind::TrailingInput,
                    Span::new(start, source.len()),
                    to_error_source(source),
                ));
            }
        }

        debug!("parsed {} node spanning {} bytes", node.kind(), offset);
        Ok(node)
    }

    /// Dispatcher: skips whitespace, then tries identifier, list, string and
    /// number in that order.
    ///
    /// A rule that applies and fails is returned as is; its failure is never
    /// retried with another rule.
    pub fn parse_expression<'src>(&mut self, text: &'src str) -> ParseOutcome<'src> {
        let text = skip_whitespace(text);
        if text.is_empty() {
            trace!("expression: empty input");
            return ParseOutcome::failure(ParseErrorKind::EmptyInput, None, text);
        }

        let rules: [(&str, Rule<'src>); 4] = [
            ("identifier", Parser::parse_identifier),
            ("list", Parser::parse_list),
            ("string", Parser::parse_string),
            ("number", Parser::parse_number),
        ];

        for (name, rule) in rules {
            let outcome = rule(&mut *self, text);
            if outcome.matched {
                trace!("expression: {} matched", name);
                return outcome;
            }
            if outcome.is_failure() {
                trace!("expression: {} failed with {:?}", name, outcome.error);
                return outcome;
            }
        }

        trace!("expression: no rule matched {:?}", text.chars().next());
        ParseOutcome::failure(ParseErrorKind::NoRuleMatched, None, text)
    }

    /// `'(' ws* (expression ws*)* ')'`
    pub fn parse_list<'src>(&mut self, text: &'src str) -> ParseOutcome<'src> {
        let Some(body) = text.strip_prefix('(') else {
            return ParseOutcome::declined(text);
        };

        if let Some(max) = self.options.max_depth {
            if self.depth >= max {
                trace!("list: nesting exceeds {}", max);
                return ParseOutcome::failure(ParseErrorKind::DepthLimitExceeded, None, text);
            }
        }

        self.depth += 1;
        let outcome = self.parse_list_body(body);
        self.depth -= 1;
        outcome
    }

    fn parse_list_body<'src>(&mut self, body: &'src str) -> ParseOutcome<'src> {
        let mut children = Vec::new();
        let mut text = skip_whitespace(body);

        loop {
            match text.as_bytes().first() {
                None => {
                    return ParseOutcome::failure(
                        ParseErrorKind::UnterminatedList,
                        Some(AstNode::list(children)),
                        text,
                    );
                }
                Some(b')') => return ParseOutcome::success(AstNode::list(children), &text[1..]),
                Some(_) => {}
            }

            let outcome = self.parse_expression(text);
            match outcome {
                ParseOutcome {
                    matched: true,
                    node: Some(child),
                    remaining,
                    ..
                } => {
                    children.push(child);
                    text = skip_whitespace(remaining);
                }
                ParseOutcome {
                    error, remaining, ..
                } => {
                    let kind = error.unwrap_or(ParseErrorKind::NoRuleMatched);
                    return ParseOutcome::failure(kind, Some(AstNode::list(children)), remaining);
                }
            }
        }
    }

    /// `digit+`
    pub fn parse_number<'src>(&mut self, text: &'src str) -> ParseOutcome<'src> {
        let len = run_length(text, is_digit);
        if len == 0 {
            return ParseOutcome::declined(text);
        }
        let (digits, rest) = text.split_at(len);
        ParseOutcome::success(AstNode::atom(AtomKind::Number, digits), rest)
    }

    /// `letter (letter | digit)*`
    pub fn parse_identifier<'src>(&mut self, text: &'src str) -> ParseOutcome<'src> {
        match text.as_bytes().first() {
            Some(&b) if is_letter(b) => {}
            _ => return ParseOutcome::declined(text),
        }
        let len = run_length(text, |b| is_letter(b) || is_digit(b));
        let (name, rest) = text.split_at(len);
        ParseOutcome::success(AstNode::atom(AtomKind::Identifier, name), rest)
    }

    /// `'"' (any-char-except-'"')* '"'`, no escapes.
    ///
    /// An unclosed string fails with `remaining` still at its opening quote.
    pub fn parse_string<'src>(&mut self, text: &'src str) -> ParseOutcome<'src> {
        let Some(body) = text.strip_prefix('"') else {
            return ParseOutcome::declined(text);
        };
        match body.find('"') {
            Some(end) => ParseOutcome::success(
                AstNode::atom(AtomKind::String, &body[..end]),
                &body[end + 1..],
            ),
            None => {
                trace!("string: no closing quote");
                ParseOutcome::failure(ParseErrorKind::UnterminatedString, None, text)
            }
        }
    }
}

/// Span reported for a failure found at `offset`.
fn failure_span(kind: ParseErrorKind, remaining: &str, offset: usize) -> Span {
    match kind {
        ParseErrorKind::NoRuleMatched => {
            let width = remaining.chars().next().map_or(0, char::len_utf8);
            Span::new(offset, offset + width)
        }
        ParseErrorKind::UnterminatedString => Span::new(offset, offset + remaining.len()),
        _ => Span::point(offset),
    }
}

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses one expression with default options. See [`Parser::parse`].
pub fn parse(source: &str) -> Result<AstNode<'_>, ParseError> {
    Parser::default().parse(source)
}

/// Runs the dispatcher with default options. See [`Parser::parse_expression`].
pub fn parse_expression(text: &str) -> ParseOutcome<'_> {
    Parser::default().parse_expression(text)
}

pub fn parse_list(text: &str) -> ParseOutcome<'_> {
    Parser::default().parse_list(text)
}

pub fn parse_number(text: &str) -> ParseOutcome<'_> {
    Parser::default().parse_number(text)
}

pub fn parse_identifier(text: &str) -> ParseOutcome<'_> {
    Parser::default().parse_identifier(text)
}

pub fn parse_string(text: &str) -> ParseOutcome<'_> {
    Parser::default().parse_string(text)
}
