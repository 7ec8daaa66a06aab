// tests/parser_tests.rs

use sexpr::ast::{AstNode, AtomKind, NodeKind};
use sexpr::sample::SAMPLE_PROGRAM;
use sexpr::{parse, parse_expression, ParseErrorKind, ParseOptions, Parser};

fn ident(text: &str) -> AstNode<'_> {
    AstNode::atom(AtomKind::Identifier, text)
}

// Collects every node kind in the tree, depth first.
fn kinds(node: &AstNode<'_>, out: &mut Vec<NodeKind>) {
    out.push(node.kind());
    for child in node.children().unwrap_or_default() {
        kinds(child, out);
    }
}

#[test]
fn test_parse_empty_input_fails() {
    let err = parse("").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyInput);
}

#[test]
fn test_parse_number_consumes_everything() {
    let outcome = parse_expression("42");
    assert!(outcome.matched);
    assert_eq!(outcome.node, Some(AstNode::atom(AtomKind::Number, "42")));
    assert!(outcome.remaining.is_empty());
}

#[test]
fn test_whitespace_insensitivity() {
    let padded = parse(" 42 ").unwrap();
    let bare = parse("42").unwrap();
    assert_eq!(padded, bare);
    assert_eq!(padded.text(), Some("42"));
}

#[test]
fn test_parse_nested_s_expression() {
    let node = parse("(a (b c) d)").unwrap();
    assert_eq!(
        node,
        AstNode::list(vec![
            ident("a"),
            AstNode::list(vec![ident("b"), ident("c")]),
            ident("d"),
        ])
    );
    assert_eq!(node.pretty(), "(a (b c) d)");
}

#[test]
fn test_atom_text_is_a_slice_of_the_input() {
    let source = String::from("(define val 58)");
    let node = parse(&source).unwrap();
    let children = node.children().unwrap();
    let text = children[1].text().unwrap();
    let offset = text.as_ptr() as usize - source.as_ptr() as usize;
    assert_eq!(&source[offset..offset + text.len()], "val");
}

#[test]
fn test_sample_program_structure() {
    let node = parse(SAMPLE_PROGRAM).unwrap();
    let forms = node.children().unwrap();
    assert_eq!(forms.len(), 3);
    assert_eq!(forms[0].pretty(), "(define val 58)");
    assert_eq!(forms[1], ident("val"));
    assert_eq!(forms[2].pretty(), "((id link) \"hello\" \"hello.html\")");

    let mut seen = Vec::new();
    kinds(&node, &mut seen);
    assert!(!seen.contains(&NodeKind::Unknown));
    assert_eq!(seen.iter().filter(|k| **k == NodeKind::String).count(), 2);
}

#[test]
fn test_unterminated_constructs() {
    assert_eq!(parse("(a b").unwrap_err().kind, ParseErrorKind::UnterminatedList);
    assert_eq!(
        parse("\"abc").unwrap_err().kind,
        ParseErrorKind::UnterminatedString
    );
    assert_eq!(
        parse("(a (b c)").unwrap_err().kind,
        ParseErrorKind::UnterminatedList
    );
}

#[test]
fn test_every_prefix_terminates_normally() {
    // Every strict prefix of a valid program is either rejected with a
    // well-defined error or parses to something shorter; none may panic.
    let program = SAMPLE_PROGRAM.trim();
    assert!(parse(program).is_ok());

    for end in 0..program.len() {
        let prefix = &program[..end];
        let outcome = parse_expression(prefix);
        if outcome.matched {
            continue;
        }
        let kind = outcome.error.expect("a failed expression always carries a kind");
        assert!(
            matches!(
                kind,
                ParseErrorKind::EmptyInput
                    | ParseErrorKind::UnterminatedList
                    | ParseErrorKind::UnterminatedString
            ),
            "unexpected {:?} for prefix {:?}",
            kind,
            prefix
        );
        assert!(prefix.ends_with(outcome.remaining));
    }
}

#[test]
fn test_atom_rendering_round_trips() {
    for source in ["abc123", "58", "\"hello.html\"", "\"\"", "\"a b (c)\""] {
        let node = parse(source).unwrap();
        let rendered = node.pretty();
        let reparsed = parse(&rendered).unwrap();
        assert_eq!(reparsed, node, "round-trip changed {}", source);
    }
}

#[test]
fn test_failure_aborts_whole_parse() {
    // A bad token deep inside fails the outer list; nothing is recovered.
    let outcome = parse_expression("(a (b #) c)");
    assert!(!outcome.matched);
    assert_eq!(outcome.error, Some(ParseErrorKind::NoRuleMatched));
    assert_eq!(outcome.remaining, "#) c)");
    assert_eq!(outcome.node.as_ref().map(AstNode::kind), Some(NodeKind::List));
    assert!(outcome.into_node().is_none());
}

#[test]
fn test_trailing_input_left_in_remaining() {
    let outcome = parse_expression("(a) (b)");
    assert!(outcome.matched);
    assert_eq!(outcome.remaining, " (b)");

    let mut strict = Parser::new(ParseOptions::strict());
    assert_eq!(
        strict.parse("(a) (b)").unwrap_err().kind,
        ParseErrorKind::TrailingInput
    );
}

#[test]
fn test_depth_limit_at_boundary() {
    let mut parser = Parser::new(ParseOptions::default().with_max_depth(Some(3)));
    assert_eq!(parser.parse("(((x)))").unwrap().depth(), 3);
    assert_eq!(
        parser.parse("((((x))))").unwrap_err().kind,
        ParseErrorKind::DepthLimitExceeded
    );
}

#[test]
fn test_miette_report_carries_code() {
    let err = parse("(define x 42").unwrap_err();
    let report = miette::Report::new(err);
    let rendered = format!("{:?}", report);
    assert!(rendered.contains("sexpr::parse::unterminated_list"));
}
