//! Line classification.
//!
//! Every line of a .map file is recognised by its first non-whitespace character.
//! Nothing is consumed here, the parser decides what to do with the rest of the line.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `// ...`
    Comment,
    /// `{`
    EntityOpen,
    /// `}`
    EntityClose,
    /// `"key" "value"`
    KeyValueString,
    /// `( x y z ) ( x y z ) ( x y z ) texture ...`
    VertexGroup,
    /// Blank lines and anything else.
    None,
}

/// Strips whitespace, line endings and a UTF-8 byte order mark.
pub(crate) fn clean(line: &str) -> &str {
    line.trim_start_matches('\u{feff}').trim()
}

/// Classifies one line. Leading whitespace and line endings do not matter.
pub fn classify(line: &str) -> TokenKind {
    let line = clean(line);

    if line.starts_with("//") {
        TokenKind::Comment
    } else if line.starts_with('{') {
        TokenKind::EntityOpen
    } else if line.starts_with('}') {
        TokenKind::EntityClose
    } else if line.starts_with('"') {
        TokenKind::KeyValueString
    } else if line.starts_with('(') {
        TokenKind::VertexGroup
    } else {
        TokenKind::None
    }
}

/// Whether the text after a brace is empty or only a trailing comment.
pub(crate) fn is_bare(rest: &str) -> bool {
    let rest = rest.trim();
    rest.is_empty() || rest.starts_with("//")
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn classify_kinds() {
        assert_eq!(classify("// Game: Half-Life"), TokenKind::Comment);
        assert_eq!(classify("{"), TokenKind::EntityOpen);
        assert_eq!(classify("}"), TokenKind::EntityClose);
        assert_eq!(classify("\"classname\" \"worldspawn\""), TokenKind::KeyValueString);
        assert_eq!(
            classify("( 0 0 0 ) ( 0 0 1 ) ( 0 1 0 ) NULL 0 0 0 1 1"),
            TokenKind::VertexGroup
        );
        assert_eq!(classify("brushDef"), TokenKind::None);
    }

    #[test]
    fn leading_whitespace_and_line_endings() {
        assert_eq!(classify("\t  {\r\n"), TokenKind::EntityOpen);
        assert_eq!(classify("    }\n"), TokenKind::EntityClose);
        assert_eq!(classify("   // brush 0\n"), TokenKind::Comment);
    }

    #[test]
    fn byte_order_mark() {
        assert_eq!(classify("\u{feff}{"), TokenKind::EntityOpen);
        assert_eq!(classify("\u{feff}// Game: Quake"), TokenKind::Comment);
        assert_eq!(clean("\u{feff}  }\r\n"), "}");
    }

    #[test]
    fn blank_is_none() {
        assert_eq!(classify(""), TokenKind::None);
        assert_eq!(classify("   \r\n"), TokenKind::None);
    }

    #[test]
    fn single_slash_is_not_comment() {
        assert_eq!(classify("/ not a comment"), TokenKind::None);
    }

    #[test]
    fn bare_brace_rest() {
        assert!(is_bare(""));
        assert!(is_bare("   // entity 0"));
        assert!(!is_bare(" \"classname\""));
    }
}
