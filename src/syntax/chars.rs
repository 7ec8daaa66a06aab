//! Byte classes that drive tokenization.
//!
//! All three classes are plain ASCII. A byte outside ASCII belongs to none of
//! them, so it can only ever appear inside a string literal.

/// Space, tab, newline, vertical tab, form feed or carriage return.
pub fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | 0x0b | 0x0c | b'\r')
}

pub fn is_digit(byte: u8) -> bool {
    byte.is_ascii_digit()
}

pub fn is_letter(byte: u8) -> bool {
    byte.is_ascii_alphabetic()
}

/// Length of the longest prefix of `text` whose bytes all satisfy `class`.
pub fn run_length(text: &str, class: impl Fn(u8) -> bool) -> usize {
    text.bytes().take_while(|b| class(*b)).count()
}

/// Drops leading whitespace.
pub fn skip_whitespace(text: &str) -> &str {
    &text[run_length(text, is_whitespace)..]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_matches_c_locale() {
        for b in [b' ', b'\t', b'\n', 0x0b, 0x0c, b'\r'] {
            assert!(is_whitespace(b), "{:#x} should be whitespace", b);
        }
        assert!(!is_whitespace(b'a'));
        assert!(!is_whitespace(0xa0));
    }

    #[test]
    fn test_letters_and_digits_are_ascii_only() {
        assert!(is_letter(b'q') && is_letter(b'Z'));
        assert!(!is_letter(b'_') && !is_letter(0xc3));
        assert!(is_digit(b'0') && is_digit(b'9'));
        assert!(!is_digit(b'a'));
    }

    #[test]
    fn test_skip_whitespace() {
        assert_eq!(skip_whitespace(" \t\n 42 "), "42 ");
        assert_eq!(skip_whitespace("   "), "");
        assert_eq!(skip_whitespace(""), "");
        // Non-ASCII bytes stop the run without splitting a character.
        assert_eq!(skip_whitespace(" \u{a0}x"), "\u{a0}x");
    }
}
