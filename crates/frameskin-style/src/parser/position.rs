//! Source positions for diagnostics.

/// A 1-based line/column position within a source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourcePosition {
    /// Line number (1-indexed).
    pub line: u32,
    /// Column number in characters (1-indexed).
    pub column: u32,
}

impl SourcePosition {
    /// Locate a byte offset within `source`.
    ///
    /// Offsets past the end are clamped to the end of the text, so the
    /// position of an `EOF` token is the position right after the last
    /// character.
    pub fn locate(source: &str, offset: usize) -> Self {
        let offset = offset.min(source.len());
        let mut line = 1u32;
        let mut column = 1u32;
        for (idx, ch) in source.char_indices() {
            if idx >= offset {
                break;
            }
            if ch == '\n' {
                line += 1;
                column = 1;
            } else {
                column += 1;
            }
        }
        Self { line, column }
    }
}

impl std::fmt::Display for SourcePosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locate_first_line() {
        assert_eq!(SourcePosition::locate("abc", 0).to_string(), "1:1");
        assert_eq!(SourcePosition::locate("abc", 2).to_string(), "1:3");
    }

    #[test]
    fn locate_after_newline() {
        let src = "a {\n  b: c;\n}";
        let pos = SourcePosition::locate(src, src.find('b').unwrap());
        assert_eq!(pos, SourcePosition { line: 2, column: 3 });
    }

    #[test]
    fn locate_clamps_to_end() {
        assert_eq!(SourcePosition::locate("ab\n", 100), SourcePosition { line: 2, column: 1 });
    }
}
