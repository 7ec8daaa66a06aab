//! The embedded demonstration program.

/// A small program exercising every node kind: nested lists, identifiers, a
/// number and two strings.
pub const SAMPLE_PROGRAM: &str = r#"
    (
        (define val 58)
        val
        ((id link) "hello" "hello.html")
    )
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;

    #[test]
    fn test_sample_parses_to_three_forms() {
        let node = crate::parse(SAMPLE_PROGRAM).unwrap();
        assert_eq!(node.kind(), NodeKind::List);
        assert_eq!(node.children().map(<[_]>::len), Some(3));
        assert_eq!(node.depth(), 3);
    }
}
