//! Whitespace normalization used by every downstream stage.

/// Collapse every run of whitespace to a single space and trim both ends.
pub fn normalize_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for word in text.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_runs() {
        assert_eq!(normalize_whitespace("a  b\t\tc\n\nd"), "a b c d");
    }

    #[test]
    fn test_trims_ends() {
        assert_eq!(normalize_whitespace("   padded text \r\n"), "padded text");
    }

    #[test]
    fn test_empty_and_blank() {
        assert_eq!(normalize_whitespace(""), "");
        assert_eq!(normalize_whitespace(" \n\t "), "");
    }

    #[test]
    fn test_unicode_whitespace() {
        // Non-breaking space is whitespace for `char::is_whitespace`
        assert_eq!(normalize_whitespace("one\u{00A0}\u{00A0}two"), "one two");
    }
}
